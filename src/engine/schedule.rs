use crate::model::{ConstructionInput, HandoverMode};

const MOBILISATION_WEEKS: u32 = 2;
const WEEKS_PER_FLOOR: u32 = 3;
const HANDOVER_WEEKS: u32 = 2;

const BASEMENT_WEEKS: u32 = 4;
const FINISHING_WEEKS: u32 = 4;
const ELEVATOR_WEEKS: u32 = 2;
const ACCESS_DELAY_WEEKS: u32 = 2;
const PILING_WEEKS: u32 = 1;
const BUILT_IN_WEEKS: u32 = 2;
const TURNKEY_WEEKS: u32 = 3;

/// Estimated build duration in whole weeks, saturating at `u32::MAX`.
#[must_use]
pub fn schedule_weeks(input: &ConstructionInput) -> u32 {
    let structure = input.floors.saturating_mul(WEEKS_PER_FLOOR);
    structure.saturating_add(fixed_weeks(input))
}

/// Everything except the per-floor structure time.
fn fixed_weeks(input: &ConstructionInput) -> u32 {
    let mut weeks = MOBILISATION_WEEKS + HANDOVER_WEEKS;

    if input.has_basement {
        weeks += BASEMENT_WEEKS;
    }
    if !input.package_type.is_rough() {
        weeks += FINISHING_WEEKS;
    }
    if input.elevator.is_some() {
        weeks += ELEVATOR_WEEKS;
    }
    // one delay for restricted access, however many causes
    if input.is_small_alley || input.is_truck_ban {
        weeks += ACCESS_DELAY_WEEKS;
    }
    if input.has_pile_driving {
        weeks += PILING_WEEKS;
    }
    weeks += match input.handover_mode {
        HandoverMode::Basic => 0,
        HandoverMode::BuiltIn => BUILT_IN_WEEKS,
        HandoverMode::Turnkey => TURNKEY_WEEKS,
    };

    weeks
}
