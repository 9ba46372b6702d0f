use crate::error::ConfigError;
use crate::model::{
    ElevatorCapacity, FacadeType, FoundationType, HandoverMode, Location, PackageType,
    ProjectType, RoofType, WallType,
};
use serde::{Deserialize, Serialize};

// Every enum-keyed table below has one field per variant, so a pricing file
// missing a key fails to deserialize instead of failing at lookup.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierTable<T> {
    pub rough: T,
    pub medium: T,
    pub good: T,
    pub premium: T,
}

impl<T: Copy> TierTable<T> {
    #[must_use]
    pub fn get(&self, tier: PackageType) -> T {
        match tier {
            PackageType::Rough => self.rough,
            PackageType::Medium => self.medium,
            PackageType::Good => self.good,
            PackageType::Premium => self.premium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationTable {
    pub hanoi: f64,
    pub da_nang: f64,
    pub ho_chi_minh: f64,
    pub other: f64,
}

impl LocationTable {
    #[must_use]
    pub fn get(&self, location: Location) -> f64 {
        match location {
            Location::Hanoi => self.hanoi,
            Location::DaNang => self.da_nang,
            Location::HoChiMinh => self.ho_chi_minh,
            Location::Other => self.other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectTypeTable {
    pub townhouse: f64,
    pub villa: f64,
    pub shophouse: f64,
    pub office: f64,
}

impl ProjectTypeTable {
    #[must_use]
    pub fn get(&self, project_type: ProjectType) -> f64 {
        match project_type {
            ProjectType::Townhouse => self.townhouse,
            ProjectType::Villa => self.villa,
            ProjectType::Shophouse => self.shophouse,
            ProjectType::Office => self.office,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandoverTable {
    pub basic: f64,
    pub built_in: f64,
    pub turnkey: f64,
}

impl HandoverTable {
    #[must_use]
    pub fn get(&self, mode: HandoverMode) -> f64 {
        match mode {
            HandoverMode::Basic => self.basic,
            HandoverMode::BuiltIn => self.built_in,
            HandoverMode::Turnkey => self.turnkey,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevatorTable {
    #[serde(rename = "350kg")]
    pub kg350: f64,
    #[serde(rename = "450kg")]
    pub kg450: f64,
    #[serde(rename = "630kg")]
    pub kg630: f64,
}

impl ElevatorTable {
    #[must_use]
    pub fn get(&self, capacity: ElevatorCapacity) -> f64 {
        match capacity {
            ElevatorCapacity::Kg350 => self.kg350,
            ElevatorCapacity::Kg450 => self.kg450,
            ElevatorCapacity::Kg630 => self.kg630,
        }
    }
}

/// Per-m² facade surcharge. The simple facade is priced into the base rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FacadeTable {
    pub modern: f64,
    pub neoclassic: f64,
}

impl FacadeTable {
    #[must_use]
    pub fn get(&self, facade: FacadeType) -> f64 {
        match facade {
            FacadeType::Simple => 0.0,
            FacadeType::Modern => self.modern,
            FacadeType::Neoclassic => self.neoclassic,
        }
    }
}

/// Default area-equivalent percent per foundation type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoundationDefaults {
    pub isolated: f64,
    pub strip: f64,
    pub pile: f64,
    pub raft: f64,
}

impl FoundationDefaults {
    #[must_use]
    pub fn get(&self, foundation: FoundationType) -> f64 {
        match foundation {
            FoundationType::Isolated => self.isolated,
            FoundationType::Strip => self.strip,
            FoundationType::Pile => self.pile,
            FoundationType::Raft => self.raft,
        }
    }
}

/// Default area-equivalent percent per roof type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoofDefaults {
    pub steel_sheet: f64,
    pub concrete_slab: f64,
    pub tile_on_truss: f64,
    pub tile_on_concrete: f64,
}

impl RoofDefaults {
    #[must_use]
    pub fn get(&self, roof: RoofType) -> f64 {
        match roof {
            RoofType::SteelSheet => self.steel_sheet,
            RoofType::ConcreteSlab => self.concrete_slab,
            RoofType::TileOnTruss => self.tile_on_truss,
            RoofType::TileOnConcrete => self.tile_on_concrete,
        }
    }
}

/// Additive fractions summed into the condition modifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionSurcharges {
    pub small_alley: f64,
    pub truck_ban: f64,
    pub restricted_hours: f64,
    /// Applies only above three floors without a material hoist.
    pub manual_hoist: f64,
}

/// Fractions of the core cost used to split it into labour and materials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRatios {
    /// Labour share for the Rough tier; the rest is rough material.
    pub rough_labor: f64,
    pub labor: f64,
    pub rough_material: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surcharges {
    pub stair_zigzag_per_floor: f64,
    pub elevator_shaft: f64,
    pub elevator_equipment: ElevatorTable,
    pub demolition_per_m2: f64,
    pub pile_per_meter: f64,
    pub piles_per_column: f64,
    pub facade_per_m2: FacadeTable,
    pub ac_piping_per_room: f64,
    pub solar_water_system: f64,
    pub gate_fence_lumpsum: f64,
    pub permit_service: f64,
    pub design_fee_per_m2: f64,
}

/// Consumption per m², except bricks which are per m² of wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialNorms {
    pub steel: f64,
    pub cement: f64,
    pub sand: f64,
    pub stone: f64,
    pub bricks_thin_wall: f64,
    pub bricks_thick_wall: f64,
    pub paint: f64,
    /// Wall surface per m² of floor.
    pub wall_density: f64,
}

impl MaterialNorms {
    #[must_use]
    pub fn bricks(&self, wall: WallType) -> f64 {
        match wall {
            WallType::Thin => self.bricks_thin_wall,
            WallType::Thick => self.bricks_thick_wall,
        }
    }
}

/// Versioned reference data the engine prices with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub version: String,
    pub base_prices: TierTable<f64>,
    pub location_modifiers: LocationTable,
    pub project_type_modifiers: ProjectTypeTable,
    pub condition_surcharges: ConditionSurcharges,
    pub cost_ratios: CostRatios,
    pub furniture_rates: TierTable<HandoverTable>,
    pub surcharges: Surcharges,
    pub material_norms: MaterialNorms,
    pub contingency_rate: f64,
    pub foundation_defaults: FoundationDefaults,
    pub roof_defaults: RoofDefaults,
}

impl Default for PricingConfig {
    /// 2024/2025 Vietnam market baseline, construction only.
    fn default() -> Self {
        let no_furniture = HandoverTable {
            basic: 0.0,
            built_in: 0.0,
            turnkey: 0.0,
        };

        Self {
            version: "2025.1".to_string(),
            base_prices: TierTable {
                rough: 3_600_000.0,
                medium: 5_100_000.0,
                good: 6_200_000.0,
                premium: 7_800_000.0,
            },
            location_modifiers: LocationTable {
                hanoi: 1.05,
                da_nang: 0.98,
                ho_chi_minh: 1.05,
                other: 0.95,
            },
            project_type_modifiers: ProjectTypeTable {
                townhouse: 1.0,
                villa: 1.25,
                shophouse: 1.15,
                office: 1.1,
            },
            condition_surcharges: ConditionSurcharges {
                small_alley: 0.05,
                truck_ban: 0.03,
                restricted_hours: 0.05,
                manual_hoist: 0.03,
            },
            cost_ratios: CostRatios {
                rough_labor: 0.40,
                labor: 0.25,
                rough_material: 0.45,
            },
            furniture_rates: TierTable {
                rough: no_furniture,
                medium: HandoverTable {
                    basic: 0.0,
                    built_in: 2_100_000.0,
                    turnkey: 3_800_000.0,
                },
                good: HandoverTable {
                    basic: 0.0,
                    built_in: 3_300_000.0,
                    turnkey: 6_300_000.0,
                },
                premium: HandoverTable {
                    basic: 0.0,
                    built_in: 6_000_000.0,
                    turnkey: 10_200_000.0,
                },
            },
            surcharges: Surcharges {
                stair_zigzag_per_floor: 15_000_000.0,
                elevator_shaft: 40_000_000.0,
                elevator_equipment: ElevatorTable {
                    kg350: 350_000_000.0,
                    kg450: 420_000_000.0,
                    kg630: 550_000_000.0,
                },
                demolition_per_m2: 250_000.0,
                pile_per_meter: 280_000.0,
                piles_per_column: 4.0,
                facade_per_m2: FacadeTable {
                    modern: 500_000.0,
                    neoclassic: 1_500_000.0,
                },
                ac_piping_per_room: 3_000_000.0,
                solar_water_system: 15_000_000.0,
                gate_fence_lumpsum: 25_000_000.0,
                permit_service: 15_000_000.0,
                design_fee_per_m2: 180_000.0,
            },
            material_norms: MaterialNorms {
                steel: 35.0,
                cement: 380.0,
                sand: 1.0,
                stone: 0.9,
                bricks_thin_wall: 70.0,
                bricks_thick_wall: 130.0,
                paint: 7.0,
                wall_density: 2.5,
            },
            contingency_rate: 0.05,
            foundation_defaults: FoundationDefaults {
                isolated: 30.0,
                strip: 50.0,
                pile: 40.0,
                raft: 80.0,
            },
            roof_defaults: RoofDefaults {
                steel_sheet: 30.0,
                concrete_slab: 50.0,
                tile_on_truss: 70.0,
                tile_on_concrete: 100.0,
            },
        }
    }
}

impl PricingConfig {
    /// Checks that every price, modifier and norm is finite and non-negative.
    ///
    /// Only run on configs loaded from disk; the built-in table is known good.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                message: "version tag is empty".to_string(),
            });
        }

        for (name, value) in self.named_values() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    message: format!("{name} must be a non-negative number, got {value}"),
                });
            }
        }

        let split = self.cost_ratios.labor + self.cost_ratios.rough_material;
        if split > 1.0 || self.cost_ratios.rough_labor > 1.0 {
            return Err(ConfigError::InvalidValue {
                message: format!("cost ratios exceed the whole core cost ({split})"),
            });
        }

        Ok(())
    }

    fn named_values(&self) -> Vec<(String, f64)> {
        let mut values = Vec::new();

        for tier in PackageType::ALL {
            values.push((format!("base_prices.{tier:?}"), self.base_prices.get(tier)));
            for mode in HandoverMode::ALL {
                values.push((
                    format!("furniture_rates.{tier:?}.{mode:?}"),
                    self.furniture_rates.get(tier).get(mode),
                ));
            }
        }
        for location in Location::ALL {
            values.push((
                format!("location_modifiers.{location:?}"),
                self.location_modifiers.get(location),
            ));
        }
        for project_type in ProjectType::ALL {
            values.push((
                format!("project_type_modifiers.{project_type:?}"),
                self.project_type_modifiers.get(project_type),
            ));
        }
        for capacity in ElevatorCapacity::ALL {
            values.push((
                format!("surcharges.elevator_equipment.{capacity:?}"),
                self.surcharges.elevator_equipment.get(capacity),
            ));
        }
        for facade in FacadeType::ALL {
            values.push((
                format!("surcharges.facade_per_m2.{facade:?}"),
                self.surcharges.facade_per_m2.get(facade),
            ));
        }
        for foundation in FoundationType::ALL {
            values.push((
                format!("foundation_defaults.{foundation:?}"),
                self.foundation_defaults.get(foundation),
            ));
        }
        for roof in RoofType::ALL {
            values.push((format!("roof_defaults.{roof:?}"), self.roof_defaults.get(roof)));
        }

        let c = &self.condition_surcharges;
        let s = &self.surcharges;
        let m = &self.material_norms;
        let scalars = [
            ("condition_surcharges.small_alley", c.small_alley),
            ("condition_surcharges.truck_ban", c.truck_ban),
            ("condition_surcharges.restricted_hours", c.restricted_hours),
            ("condition_surcharges.manual_hoist", c.manual_hoist),
            ("cost_ratios.rough_labor", self.cost_ratios.rough_labor),
            ("cost_ratios.labor", self.cost_ratios.labor),
            ("cost_ratios.rough_material", self.cost_ratios.rough_material),
            ("surcharges.stair_zigzag_per_floor", s.stair_zigzag_per_floor),
            ("surcharges.elevator_shaft", s.elevator_shaft),
            ("surcharges.demolition_per_m2", s.demolition_per_m2),
            ("surcharges.pile_per_meter", s.pile_per_meter),
            ("surcharges.piles_per_column", s.piles_per_column),
            ("surcharges.ac_piping_per_room", s.ac_piping_per_room),
            ("surcharges.solar_water_system", s.solar_water_system),
            ("surcharges.gate_fence_lumpsum", s.gate_fence_lumpsum),
            ("surcharges.permit_service", s.permit_service),
            ("surcharges.design_fee_per_m2", s.design_fee_per_m2),
            ("material_norms.steel", m.steel),
            ("material_norms.cement", m.cement),
            ("material_norms.sand", m.sand),
            ("material_norms.stone", m.stone),
            ("material_norms.bricks_thin_wall", m.bricks_thin_wall),
            ("material_norms.bricks_thick_wall", m.bricks_thick_wall),
            ("material_norms.paint", m.paint),
            ("material_norms.wall_density", m.wall_density),
            ("contingency_rate", self.contingency_rate),
        ];
        values.extend(scalars.iter().map(|(n, v)| ((*n).to_string(), *v)));

        values
    }
}
