use super::action::InputAction;
use crate::model::{
    ConstructionInput, ElevatorCapacity, FacadeType, FoundationType, HandoverMode, Location,
    PackageType, ProjectType, RoofType, ScopeItem, SiteCondition, StairType, WallType,
};

pub const MIN_FLOORS: u32 = 1;
pub const MAX_FLOORS: u32 = 10;

const DIMENSION_STEP: f64 = 0.5;
const PERCENT_STEP: f64 = 5.0;
const DEMOLITION_STEP: f64 = 5.0;
const PILE_DEPTH_STEP: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Decrease,
    Increase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Basic,
    Technical,
    Scope,
}

impl Section {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Basic => "Main parameters",
            Self::Technical => "Technical",
            Self::Scope => "Scope & handover",
        }
    }
}

/// Editable fields in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ProjectType,
    Location,
    Width,
    Length,
    Floors,
    FoundationType,
    FoundationPercent,
    RoofType,
    RoofPercent,
    Package,
    SmallAlley,
    TruckBan,
    RestrictedHours,
    MaterialElevator,
    WallType,
    StairType,
    Elevator,
    NumBathrooms,
    Basement,
    BasementPercent,
    Terrace,
    TerracePercent,
    HandoverMode,
    Demolition,
    DemolitionArea,
    PileDriving,
    PileDepth,
    Facade,
    GateFence,
    Landscaping,
    AcPiping,
    SolarWater,
    Design,
    Permits,
}

impl FormField {
    pub const ALL: [Self; 34] = [
        Self::ProjectType,
        Self::Location,
        Self::Width,
        Self::Length,
        Self::Floors,
        Self::FoundationType,
        Self::FoundationPercent,
        Self::RoofType,
        Self::RoofPercent,
        Self::Package,
        Self::SmallAlley,
        Self::TruckBan,
        Self::RestrictedHours,
        Self::MaterialElevator,
        Self::WallType,
        Self::StairType,
        Self::Elevator,
        Self::NumBathrooms,
        Self::Basement,
        Self::BasementPercent,
        Self::Terrace,
        Self::TerracePercent,
        Self::HandoverMode,
        Self::Demolition,
        Self::DemolitionArea,
        Self::PileDriving,
        Self::PileDepth,
        Self::Facade,
        Self::GateFence,
        Self::Landscaping,
        Self::AcPiping,
        Self::SolarWater,
        Self::Design,
        Self::Permits,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ProjectType => "Project type",
            Self::Location => "Location",
            Self::Width => "Width",
            Self::Length => "Length",
            Self::Floors => "Floors",
            Self::FoundationType => "Foundation",
            Self::FoundationPercent => "Foundation %",
            Self::RoofType => "Roof",
            Self::RoofPercent => "Roof %",
            Self::Package => "Package",
            Self::SmallAlley => "Small alley",
            Self::TruckBan => "Truck ban",
            Self::RestrictedHours => "Restricted hours",
            Self::MaterialElevator => "Material hoist",
            Self::WallType => "Walls",
            Self::StairType => "Stair",
            Self::Elevator => "Elevator",
            Self::NumBathrooms => "Bathrooms",
            Self::Basement => "Basement",
            Self::BasementPercent => "Basement %",
            Self::Terrace => "Terrace",
            Self::TerracePercent => "Terrace %",
            Self::HandoverMode => "Handover",
            Self::Demolition => "Demolition",
            Self::DemolitionArea => "Demolition m²",
            Self::PileDriving => "Pile driving",
            Self::PileDepth => "Pile depth",
            Self::Facade => "Facade",
            Self::GateFence => "Gate & fence",
            Self::Landscaping => "Landscaping",
            Self::AcPiping => "AC piping",
            Self::SolarWater => "Solar water",
            Self::Design => "Design",
            Self::Permits => "Permits",
        }
    }

    #[must_use]
    pub fn section(self) -> Section {
        match self {
            Self::ProjectType
            | Self::Location
            | Self::Width
            | Self::Length
            | Self::Floors
            | Self::FoundationType
            | Self::FoundationPercent
            | Self::RoofType
            | Self::RoofPercent
            | Self::Package => Section::Basic,
            Self::SmallAlley
            | Self::TruckBan
            | Self::RestrictedHours
            | Self::MaterialElevator
            | Self::WallType
            | Self::StairType
            | Self::Elevator
            | Self::NumBathrooms
            | Self::Basement
            | Self::BasementPercent
            | Self::Terrace
            | Self::TerracePercent => Section::Technical,
            _ => Section::Scope,
        }
    }

    #[must_use]
    pub fn is_toggle(self) -> bool {
        matches!(
            self,
            Self::SmallAlley
                | Self::TruckBan
                | Self::RestrictedHours
                | Self::MaterialElevator
                | Self::Basement
                | Self::Terrace
                | Self::Demolition
                | Self::PileDriving
                | Self::GateFence
                | Self::Landscaping
                | Self::AcPiping
                | Self::SolarWater
                | Self::Design
                | Self::Permits
        )
    }

    /// Dependent fields only matter while their parent toggle is on.
    #[must_use]
    pub fn is_active(self, input: &ConstructionInput) -> bool {
        match self {
            Self::BasementPercent => input.has_basement,
            Self::TerracePercent => input.has_terrace,
            Self::DemolitionArea => input.has_demolition,
            Self::PileDepth => input.has_pile_driving,
            _ => true,
        }
    }

    #[must_use]
    pub fn value(self, input: &ConstructionInput) -> String {
        match self {
            Self::ProjectType => input.project_type.label().to_string(),
            Self::Location => input.location.label().to_string(),
            Self::Width => format!("{:.1} m", input.width),
            Self::Length => format!("{:.1} m", input.length),
            Self::Floors => input.floors.to_string(),
            Self::FoundationType => input.foundation_type.label().to_string(),
            Self::FoundationPercent => format!("{}%", input.foundation_percent),
            Self::RoofType => input.roof_type.label().to_string(),
            Self::RoofPercent => format!("{}%", input.roof_percent),
            Self::Package => input.package_type.label().to_string(),
            Self::WallType => input.wall_type.label().to_string(),
            Self::StairType => input.stair_type.label().to_string(),
            Self::Elevator => input
                .elevator
                .map_or("None", ElevatorCapacity::label)
                .to_string(),
            Self::NumBathrooms => input.num_bathrooms.to_string(),
            Self::BasementPercent => format!("{}%", input.basement_percent),
            Self::TerracePercent => format!("{}%", input.terrace_percent),
            Self::HandoverMode => input.handover_mode.label().to_string(),
            Self::DemolitionArea => format!("{} m²", input.demolition_area),
            Self::PileDepth => format!("{} m", input.pile_depth),
            Self::Facade => input.facade_type.label().to_string(),
            toggle => checkbox(toggle.flag(input).unwrap_or(false)).to_string(),
        }
    }

    /// The edit produced by pressing left/right (or space on a toggle).
    ///
    /// Numbers step and clamp at zero, enums cycle, toggles flip.
    #[must_use]
    pub fn step(self, input: &ConstructionInput, direction: Direction) -> Option<InputAction> {
        if let Some(on) = self.flag(input) {
            return self.toggle_action(!on);
        }

        let action = match self {
            Self::ProjectType => {
                InputAction::SetProjectType(cycle(&ProjectType::ALL, input.project_type, direction))
            }
            Self::Location => {
                InputAction::SetLocation(cycle(&Location::ALL, input.location, direction))
            }
            Self::Width => InputAction::SetWidth(nudge(input.width, DIMENSION_STEP, direction)),
            Self::Length => InputAction::SetLength(nudge(input.length, DIMENSION_STEP, direction)),
            Self::Floors => {
                let floors = match direction {
                    Direction::Decrease => input.floors.saturating_sub(1).max(MIN_FLOORS),
                    Direction::Increase => input.floors.saturating_add(1).min(MAX_FLOORS),
                };
                InputAction::SetFloors(floors)
            }
            Self::FoundationType => InputAction::SetFoundationType(cycle(
                &FoundationType::ALL,
                input.foundation_type,
                direction,
            )),
            Self::FoundationPercent => InputAction::SetFoundationPercent(nudge(
                input.foundation_percent,
                PERCENT_STEP,
                direction,
            )),
            Self::RoofType => {
                InputAction::SetRoofType(cycle(&RoofType::ALL, input.roof_type, direction))
            }
            Self::RoofPercent => {
                InputAction::SetRoofPercent(nudge(input.roof_percent, PERCENT_STEP, direction))
            }
            Self::Package => {
                InputAction::SetPackage(cycle(&PackageType::ALL, input.package_type, direction))
            }
            Self::WallType => {
                InputAction::SetWallType(cycle(&WallType::ALL, input.wall_type, direction))
            }
            Self::StairType => {
                InputAction::SetStairType(cycle(&StairType::ALL, input.stair_type, direction))
            }
            Self::Elevator => {
                let options = [
                    None,
                    Some(ElevatorCapacity::Kg350),
                    Some(ElevatorCapacity::Kg450),
                    Some(ElevatorCapacity::Kg630),
                ];
                InputAction::SetElevator(cycle(&options, input.elevator, direction))
            }
            Self::NumBathrooms => {
                let count = match direction {
                    Direction::Decrease => input.num_bathrooms.saturating_sub(1).max(1),
                    Direction::Increase => input.num_bathrooms.saturating_add(1),
                };
                InputAction::SetNumBathrooms(count)
            }
            Self::BasementPercent => InputAction::SetBasementPercent(nudge(
                input.basement_percent,
                PERCENT_STEP,
                direction,
            )),
            Self::TerracePercent => InputAction::SetTerracePercent(nudge(
                input.terrace_percent,
                PERCENT_STEP,
                direction,
            )),
            Self::HandoverMode => InputAction::SetHandoverMode(cycle(
                &HandoverMode::ALL,
                input.handover_mode,
                direction,
            )),
            Self::DemolitionArea => InputAction::SetDemolitionArea(nudge(
                input.demolition_area,
                DEMOLITION_STEP,
                direction,
            )),
            Self::PileDepth => {
                InputAction::SetPileDepth(nudge(input.pile_depth, PILE_DEPTH_STEP, direction))
            }
            Self::Facade => {
                InputAction::SetFacade(cycle(&FacadeType::ALL, input.facade_type, direction))
            }
            _ => return None,
        };
        Some(action)
    }

    fn flag(self, input: &ConstructionInput) -> Option<bool> {
        let on = match self {
            Self::SmallAlley => input.site_condition(SiteCondition::SmallAlley),
            Self::TruckBan => input.site_condition(SiteCondition::TruckBan),
            Self::RestrictedHours => input.site_condition(SiteCondition::RestrictedHours),
            Self::MaterialElevator => input.site_condition(SiteCondition::MaterialElevator),
            Self::Basement => input.has_basement,
            Self::Terrace => input.has_terrace,
            Self::Demolition => input.has_demolition,
            Self::PileDriving => input.has_pile_driving,
            Self::GateFence => input.scope_item(ScopeItem::GateFence),
            Self::Landscaping => input.scope_item(ScopeItem::Landscaping),
            Self::AcPiping => input.scope_item(ScopeItem::AcPiping),
            Self::SolarWater => input.scope_item(ScopeItem::SolarWater),
            Self::Design => input.scope_item(ScopeItem::Design),
            Self::Permits => input.scope_item(ScopeItem::Permits),
            _ => return None,
        };
        Some(on)
    }

    fn toggle_action(self, on: bool) -> Option<InputAction> {
        let action = match self {
            Self::SmallAlley => InputAction::SetSiteCondition(SiteCondition::SmallAlley, on),
            Self::TruckBan => InputAction::SetSiteCondition(SiteCondition::TruckBan, on),
            Self::RestrictedHours => {
                InputAction::SetSiteCondition(SiteCondition::RestrictedHours, on)
            }
            Self::MaterialElevator => {
                InputAction::SetSiteCondition(SiteCondition::MaterialElevator, on)
            }
            Self::Basement => InputAction::SetBasement(on),
            Self::Terrace => InputAction::SetTerrace(on),
            Self::Demolition => InputAction::SetDemolition(on),
            Self::PileDriving => InputAction::SetPileDriving(on),
            Self::GateFence => InputAction::SetScopeItem(ScopeItem::GateFence, on),
            Self::Landscaping => InputAction::SetScopeItem(ScopeItem::Landscaping, on),
            Self::AcPiping => InputAction::SetScopeItem(ScopeItem::AcPiping, on),
            Self::SolarWater => InputAction::SetScopeItem(ScopeItem::SolarWater, on),
            Self::Design => InputAction::SetScopeItem(ScopeItem::Design, on),
            Self::Permits => InputAction::SetScopeItem(ScopeItem::Permits, on),
            _ => return None,
        };
        Some(action)
    }
}

fn checkbox(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: T, direction: Direction) -> T {
    let len = options.len();
    let index = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = match direction {
        Direction::Increase => (index + 1) % len,
        Direction::Decrease => (index + len - 1) % len,
    };
    options[next]
}

/// Steps a value and keeps one decimal, never going below zero.
fn nudge(value: f64, step: f64, direction: Direction) -> f64 {
    let delta = match direction {
        Direction::Increase => step,
        Direction::Decrease => -step,
    };
    (((value + delta) * 10.0).round() / 10.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_listed_once() {
        for (i, field) in FormField::ALL.iter().enumerate() {
            assert_eq!(
                FormField::ALL.iter().position(|f| f == field),
                Some(i),
                "{field:?} listed twice"
            );
        }
    }

    #[test]
    fn enums_wrap_around() {
        let input = ConstructionInput {
            package_type: PackageType::Premium,
            ..ConstructionInput::default()
        };

        assert_eq!(
            FormField::Package.step(&input, Direction::Increase),
            Some(InputAction::SetPackage(PackageType::Rough))
        );
        assert_eq!(
            FormField::Package.step(&input, Direction::Decrease),
            Some(InputAction::SetPackage(PackageType::Good))
        );
    }

    #[test]
    fn elevator_cycles_through_none() {
        let input = ConstructionInput::default();
        assert_eq!(
            FormField::Elevator.step(&input, Direction::Decrease),
            Some(InputAction::SetElevator(Some(ElevatorCapacity::Kg630)))
        );
    }

    #[test]
    fn dimensions_clamp_at_zero() {
        let input = ConstructionInput {
            width: 0.3,
            ..ConstructionInput::default()
        };
        assert_eq!(
            FormField::Width.step(&input, Direction::Decrease),
            Some(InputAction::SetWidth(0.0))
        );
    }

    #[test]
    fn floors_stay_within_form_bounds() {
        let top = ConstructionInput {
            floors: MAX_FLOORS,
            ..ConstructionInput::default()
        };
        let bottom = ConstructionInput {
            floors: MIN_FLOORS,
            ..ConstructionInput::default()
        };

        assert_eq!(
            FormField::Floors.step(&top, Direction::Increase),
            Some(InputAction::SetFloors(MAX_FLOORS))
        );
        assert_eq!(
            FormField::Floors.step(&bottom, Direction::Decrease),
            Some(InputAction::SetFloors(MIN_FLOORS))
        );
    }

    #[test]
    fn counts_loaded_at_the_limit_do_not_overflow() {
        let input = ConstructionInput {
            floors: u32::MAX,
            num_bathrooms: u32::MAX,
            ..ConstructionInput::default()
        };

        assert_eq!(
            FormField::Floors.step(&input, Direction::Increase),
            Some(InputAction::SetFloors(MAX_FLOORS))
        );
        assert_eq!(
            FormField::NumBathrooms.step(&input, Direction::Increase),
            Some(InputAction::SetNumBathrooms(u32::MAX))
        );
    }

    #[test]
    fn toggles_flip_either_way() {
        let input = ConstructionInput::default();
        assert_eq!(
            FormField::MaterialElevator.step(&input, Direction::Increase),
            Some(InputAction::SetSiteCondition(
                SiteCondition::MaterialElevator,
                false
            ))
        );
        assert_eq!(FormField::Permits.value(&input), "[ ]");
    }

    #[test]
    fn dependent_fields_follow_their_toggle() {
        let input = ConstructionInput::default();
        assert!(!FormField::PileDepth.is_active(&input));

        let input = ConstructionInput {
            has_pile_driving: true,
            ..input
        };
        assert!(FormField::PileDepth.is_active(&input));
    }
}
