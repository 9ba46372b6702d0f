pub mod input;
pub mod result;

pub use input::{
    ConstructionInput, ElevatorCapacity, FacadeType, FoundationType, HandoverMode, Location,
    PackageType, ProjectType, RoofType, ScopeItem, SiteCondition, StairType, WallType,
};
pub use result::{
    CalculationItem, CalculationResult, CostBreakdown, ExtraBuckets, MaterialQuantities,
};
