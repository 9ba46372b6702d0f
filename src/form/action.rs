use crate::config::PricingConfig;
use crate::model::{
    ConstructionInput, ElevatorCapacity, FacadeType, FoundationType, HandoverMode, Location,
    PackageType, ProjectType, RoofType, ScopeItem, SiteCondition, StairType, WallType,
};
use tracing::debug;

/// One edit to a [`ConstructionInput`].
///
/// Dependent fields change together: picking a foundation or roof type also
/// resets its percent to that type's default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    SetWidth(f64),
    SetLength(f64),
    SetFloors(u32),
    SetLocation(Location),
    SetProjectType(ProjectType),
    SetPackage(PackageType),
    SetHandoverMode(HandoverMode),
    SetFoundationType(FoundationType),
    SetFoundationPercent(f64),
    SetRoofType(RoofType),
    SetRoofPercent(f64),
    SetWallType(WallType),
    SetStairType(StairType),
    SetElevator(Option<ElevatorCapacity>),
    SetBasement(bool),
    SetBasementPercent(f64),
    SetTerrace(bool),
    SetTerracePercent(f64),
    SetSiteCondition(SiteCondition, bool),
    SetDemolition(bool),
    SetDemolitionArea(f64),
    SetPileDriving(bool),
    SetPileDepth(f64),
    SetFacade(FacadeType),
    SetScopeItem(ScopeItem, bool),
    SetNumBathrooms(u32),
}

impl InputAction {
    fn numeric_value(self) -> Option<f64> {
        match self {
            Self::SetWidth(v)
            | Self::SetLength(v)
            | Self::SetFoundationPercent(v)
            | Self::SetRoofPercent(v)
            | Self::SetBasementPercent(v)
            | Self::SetTerracePercent(v)
            | Self::SetDemolitionArea(v)
            | Self::SetPileDepth(v) => Some(v),
            _ => None,
        }
    }
}

/// Returns a copy of `input` with `action` applied.
///
/// Negative or non-finite numbers are rejected and leave the input as it
/// was. No other range checks are made.
#[must_use]
pub fn apply_action(
    input: &ConstructionInput,
    action: InputAction,
    config: &PricingConfig,
) -> ConstructionInput {
    if let Some(value) = action.numeric_value() {
        if !value.is_finite() || value < 0.0 {
            debug!(?action, "rejected numeric edit");
            return input.clone();
        }
    }

    let mut next = input.clone();
    match action {
        InputAction::SetWidth(v) => next.width = v,
        InputAction::SetLength(v) => next.length = v,
        InputAction::SetFloors(n) => next.floors = n,
        InputAction::SetLocation(location) => next.location = location,
        InputAction::SetProjectType(project_type) => next.project_type = project_type,
        InputAction::SetPackage(package) => next.package_type = package,
        InputAction::SetHandoverMode(mode) => next.handover_mode = mode,
        InputAction::SetFoundationType(foundation) => {
            next.foundation_type = foundation;
            next.foundation_percent = config.foundation_defaults.get(foundation);
        }
        InputAction::SetFoundationPercent(v) => next.foundation_percent = v,
        InputAction::SetRoofType(roof) => {
            next.roof_type = roof;
            next.roof_percent = config.roof_defaults.get(roof);
        }
        InputAction::SetRoofPercent(v) => next.roof_percent = v,
        InputAction::SetWallType(wall) => next.wall_type = wall,
        InputAction::SetStairType(stair) => next.stair_type = stair,
        InputAction::SetElevator(elevator) => next.elevator = elevator,
        InputAction::SetBasement(on) => next.has_basement = on,
        InputAction::SetBasementPercent(v) => next.basement_percent = v,
        InputAction::SetTerrace(on) => next.has_terrace = on,
        InputAction::SetTerracePercent(v) => next.terrace_percent = v,
        InputAction::SetSiteCondition(condition, on) => match condition {
            SiteCondition::SmallAlley => next.is_small_alley = on,
            SiteCondition::TruckBan => next.is_truck_ban = on,
            SiteCondition::RestrictedHours => next.is_restricted_hours = on,
            SiteCondition::MaterialElevator => next.has_material_elevator = on,
        },
        InputAction::SetDemolition(on) => next.has_demolition = on,
        InputAction::SetDemolitionArea(v) => next.demolition_area = v,
        InputAction::SetPileDriving(on) => next.has_pile_driving = on,
        InputAction::SetPileDepth(v) => next.pile_depth = v,
        InputAction::SetFacade(facade) => next.facade_type = facade,
        InputAction::SetScopeItem(item, on) => match item {
            ScopeItem::GateFence => next.include_gate_fence = on,
            ScopeItem::Landscaping => next.include_landscaping = on,
            ScopeItem::AcPiping => next.has_ac_piping = on,
            ScopeItem::SolarWater => next.has_solar_water = on,
            ScopeItem::Permits => next.include_permits = on,
            ScopeItem::Design => next.include_design = on,
        },
        InputAction::SetNumBathrooms(n) => next.num_bathrooms = n,
    }
    next
}
