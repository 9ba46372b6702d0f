pub mod loader;
pub mod pricing;
pub mod specs;

pub use crate::error::{ConfigError, InputError};
pub use loader::{load_input_file, load_pricing_file};
pub use pricing::{
    ConditionSurcharges, CostRatios, ElevatorTable, FacadeTable, FoundationDefaults,
    HandoverTable, LocationTable, MaterialNorms, PricingConfig, ProjectTypeTable, RoofDefaults,
    Surcharges, TierTable,
};
pub use specs::{
    finishing_schedule, handover_profile, owner_supplied_items, package_profile, HandoverProfile,
    PackageProfile, SpecCategory, SpecLine, FINISHING_SCHEDULE, OWNER_SUPPLIED, TECHNICAL_SPECS,
};
