use serde::{Deserialize, Serialize};

/// Region of the build site. Drives the location price modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Hanoi,
    DaNang,
    HoChiMinh,
    Other,
}

impl Location {
    pub const ALL: [Self; 4] = [Self::Hanoi, Self::DaNang, Self::HoChiMinh, Self::Other];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hanoi => "Hanoi",
            Self::DaNang => "Da Nang",
            Self::HoChiMinh => "Ho Chi Minh City",
            Self::Other => "Other province",
        }
    }
}

/// Building class. Drives the complexity modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Townhouse,
    Villa,
    Shophouse,
    Office,
}

impl ProjectType {
    pub const ALL: [Self; 4] = [Self::Townhouse, Self::Villa, Self::Shophouse, Self::Office];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Townhouse => "Townhouse",
            Self::Villa => "Villa",
            Self::Shophouse => "Shophouse",
            Self::Office => "Office building",
        }
    }
}

/// Finish tier (G0..G3). Sets the base unit price and gates several surcharges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageType {
    Rough,
    Medium,
    Good,
    Premium,
}

impl PackageType {
    pub const ALL: [Self; 4] = [Self::Rough, Self::Medium, Self::Good, Self::Premium];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rough => "G0 Rough + basic finish",
            Self::Medium => "G1 Full package, medium",
            Self::Good => "G2 Full package, good",
            Self::Premium => "G3 Full package, premium",
        }
    }

    #[must_use]
    pub fn is_rough(self) -> bool {
        self == Self::Rough
    }
}

/// Furnishing scope at handover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandoverMode {
    Basic,
    BuiltIn,
    Turnkey,
}

impl HandoverMode {
    pub const ALL: [Self; 3] = [Self::Basic, Self::BuiltIn, Self::Turnkey];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Mode A - Basic",
            Self::BuiltIn => "Mode B - Built-in",
            Self::Turnkey => "Mode C - Turnkey",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoundationType {
    /// Isolated footings, good soil.
    Isolated,
    /// Strip footings, average soil.
    Strip,
    /// Pile caps, weak soil. Piling itself is a separate scope item.
    Pile,
    /// Raft slab, usually with a basement.
    Raft,
}

impl FoundationType {
    pub const ALL: [Self; 4] = [Self::Isolated, Self::Strip, Self::Pile, Self::Raft];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Isolated => "Isolated footing",
            Self::Strip => "Strip footing",
            Self::Pile => "Pile foundation",
            Self::Raft => "Raft foundation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofType {
    SteelSheet,
    ConcreteSlab,
    TileOnTruss,
    TileOnConcrete,
}

impl RoofType {
    pub const ALL: [Self; 4] = [
        Self::SteelSheet,
        Self::ConcreteSlab,
        Self::TileOnTruss,
        Self::TileOnConcrete,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SteelSheet => "Steel sheet roof",
            Self::ConcreteSlab => "Concrete slab roof",
            Self::TileOnTruss => "Tile on steel truss",
            Self::TileOnConcrete => "Tile on concrete",
        }
    }
}

/// Wall thickness class. Selects the brick norm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallType {
    /// 110 mm single-brick wall.
    Thin,
    /// 220 mm double-brick wall.
    Thick,
}

impl WallType {
    pub const ALL: [Self; 2] = [Self::Thin, Self::Thick];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Thin => "110 mm wall",
            Self::Thick => "220 mm wall",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StairType {
    Zigzag,
    Straight,
    LShape,
    UShape,
}

impl StairType {
    pub const ALL: [Self; 4] = [Self::Zigzag, Self::Straight, Self::LShape, Self::UShape];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Zigzag => "Zigzag",
            Self::Straight => "Straight run",
            Self::LShape => "L-shape",
            Self::UShape => "U-shape",
        }
    }
}

/// Passenger elevator capacity class. Absence is `None` on the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElevatorCapacity {
    #[serde(rename = "350kg")]
    Kg350,
    #[serde(rename = "450kg")]
    Kg450,
    #[serde(rename = "630kg")]
    Kg630,
}

impl ElevatorCapacity {
    pub const ALL: [Self; 3] = [Self::Kg350, Self::Kg450, Self::Kg630];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Kg350 => "350 kg (home)",
            Self::Kg450 => "450 kg (standard)",
            Self::Kg630 => "630 kg (large)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacadeType {
    Simple,
    Modern,
    Neoclassic,
}

impl FacadeType {
    pub const ALL: [Self; 3] = [Self::Simple, Self::Modern, Self::Neoclassic];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Simple => "Simple paint",
            Self::Modern => "Modern (cladding, louvres)",
            Self::Neoclassic => "Neoclassic (mouldings, reliefs)",
        }
    }
}

/// Site-access and labour-efficiency flags that raise the unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteCondition {
    SmallAlley,
    TruckBan,
    RestrictedHours,
    MaterialElevator,
}

impl SiteCondition {
    pub const ALL: [Self; 4] = [
        Self::SmallAlley,
        Self::TruckBan,
        Self::RestrictedHours,
        Self::MaterialElevator,
    ];
}

/// Flat on/off scope items with no quantity attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeItem {
    GateFence,
    Landscaping,
    AcPiping,
    SolarWater,
    Permits,
    Design,
}

impl ScopeItem {
    pub const ALL: [Self; 6] = [
        Self::GateFence,
        Self::Landscaping,
        Self::AcPiping,
        Self::SolarWater,
        Self::Permits,
        Self::Design,
    ];
}

/// Caller-supplied building parameters for one estimate.
///
/// Numeric ranges are not validated here or in the engine; a zero width or a
/// negative percent simply yields a meaningless estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructionInput {
    pub width: f64,
    pub length: f64,
    pub floors: u32,
    pub location: Location,
    pub project_type: ProjectType,
    pub package_type: PackageType,
    pub handover_mode: HandoverMode,

    pub foundation_type: FoundationType,
    pub foundation_percent: f64,
    pub roof_type: RoofType,
    pub roof_percent: f64,
    pub wall_type: WallType,
    pub stair_type: StairType,
    pub elevator: Option<ElevatorCapacity>,

    pub has_basement: bool,
    pub basement_percent: f64,
    pub has_terrace: bool,
    pub terrace_percent: f64,

    pub is_small_alley: bool,
    pub is_truck_ban: bool,
    pub is_restricted_hours: bool,
    pub has_material_elevator: bool,

    pub has_demolition: bool,
    pub demolition_area: f64,
    pub has_pile_driving: bool,
    pub pile_depth: f64,
    pub facade_type: FacadeType,
    pub include_gate_fence: bool,
    pub include_landscaping: bool,
    pub has_ac_piping: bool,
    pub has_solar_water: bool,
    pub include_permits: bool,
    pub include_design: bool,

    /// Collected for the quote but not priced.
    pub num_bathrooms: u32,
}

impl Default for ConstructionInput {
    fn default() -> Self {
        Self {
            width: 5.0,
            length: 15.0,
            floors: 2,
            location: Location::HoChiMinh,
            project_type: ProjectType::Townhouse,
            package_type: PackageType::Rough,
            handover_mode: HandoverMode::Basic,
            foundation_type: FoundationType::Isolated,
            foundation_percent: 30.0,
            roof_type: RoofType::ConcreteSlab,
            roof_percent: 50.0,
            wall_type: WallType::Thin,
            stair_type: StairType::Zigzag,
            elevator: None,
            has_basement: false,
            basement_percent: 150.0,
            has_terrace: false,
            terrace_percent: 50.0,
            is_small_alley: false,
            is_truck_ban: false,
            is_restricted_hours: false,
            has_material_elevator: true,
            has_demolition: false,
            demolition_area: 0.0,
            has_pile_driving: false,
            pile_depth: 15.0,
            facade_type: FacadeType::Simple,
            include_gate_fence: false,
            include_landscaping: false,
            has_ac_piping: false,
            has_solar_water: false,
            include_permits: false,
            include_design: false,
            num_bathrooms: 2,
        }
    }
}

impl ConstructionInput {
    #[must_use]
    pub fn site_condition(&self, condition: SiteCondition) -> bool {
        match condition {
            SiteCondition::SmallAlley => self.is_small_alley,
            SiteCondition::TruckBan => self.is_truck_ban,
            SiteCondition::RestrictedHours => self.is_restricted_hours,
            SiteCondition::MaterialElevator => self.has_material_elevator,
        }
    }

    #[must_use]
    pub fn scope_item(&self, item: ScopeItem) -> bool {
        match item {
            ScopeItem::GateFence => self.include_gate_fence,
            ScopeItem::Landscaping => self.include_landscaping,
            ScopeItem::AcPiping => self.has_ac_piping,
            ScopeItem::SolarWater => self.has_solar_water,
            ScopeItem::Permits => self.include_permits,
            ScopeItem::Design => self.include_design,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_take_defaults() {
        let input: ConstructionInput =
            serde_json::from_str(r#"{"width": 6.0, "floors": 4, "package_type": "good"}"#)
                .unwrap();

        assert_eq!(input.width, 6.0);
        assert_eq!(input.length, 15.0);
        assert_eq!(input.floors, 4);
        assert_eq!(input.package_type, PackageType::Good);
        assert_eq!(input.handover_mode, HandoverMode::Basic);
        assert!(input.has_material_elevator);
    }

    #[test]
    fn elevator_capacity_uses_weight_names() {
        let input: ConstructionInput = serde_json::from_str(r#"{"elevator": "450kg"}"#).unwrap();
        assert_eq!(input.elevator, Some(ElevatorCapacity::Kg450));

        let json = serde_json::to_value(&ConstructionInput::default()).unwrap();
        assert!(json["elevator"].is_null());
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        let parsed = serde_json::from_str::<ConstructionInput>(r#"{"location": "atlantis"}"#);
        assert!(parsed.is_err());
    }
}
