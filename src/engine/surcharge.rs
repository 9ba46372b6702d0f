use super::area::AreaBreakdown;
use super::round_to;
use crate::config::PricingConfig;
use crate::model::{CalculationItem, ConstructionInput, ExtraBuckets, FacadeType, StairType};
use tracing::trace;

/// Assumed storey height when estimating the street facade, in metres.
pub const FACADE_FLOOR_HEIGHT_M: f64 = 3.3;
/// Floor area carried by one column when estimating piles, in m².
pub const PILE_COLUMN_SPACING_M2: f64 = 20.0;
/// Columns added on top of the spacing estimate for the pile count.
pub const PILE_EXTRA_COLUMNS: f64 = 2.0;
/// Minimum number of AC piping points.
pub const MIN_AC_ROOMS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Construction,
    Equipment,
    Furniture,
    Soft,
}

/// Extra line items with their bucket totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extras {
    pub items: Vec<CalculationItem>,
    pub buckets: ExtraBuckets,
}

impl Extras {
    fn push(&mut self, bucket: Bucket, item: CalculationItem) {
        let cost = item.cost.unwrap_or(0.0);
        match bucket {
            Bucket::Construction => self.buckets.construction += cost,
            Bucket::Equipment => self.buckets.equipment += cost,
            Bucket::Furniture => self.buckets.furniture += cost,
            Bucket::Soft => self.buckets.soft += cost,
        }
        trace!(item = %item.name, ?bucket, cost, "surcharge applied");
        self.items.push(item);
    }
}

/// Evaluates every optional scope item independently.
///
/// Items are emitted in a fixed order: stair, elevator, demolition, piling,
/// facade, furniture, AC piping, solar water, gate and fence, design,
/// permits. `unit_price` is only used to express stair and elevator costs as
/// an equivalent area for display.
#[must_use]
pub fn extended_scope(
    input: &ConstructionInput,
    areas: &AreaBreakdown,
    unit_price: f64,
    config: &PricingConfig,
) -> Extras {
    let rates = &config.surcharges;
    let floors = f64::from(input.floors);
    let mut extras = Extras::default();

    if input.stair_type == StairType::Zigzag {
        let cost = rates.stair_zigzag_per_floor * f64::from(input.floors.saturating_sub(1));
        if cost > 0.0 {
            extras.push(
                Bucket::Equipment,
                CalculationItem::extra("Stair surcharge", "Zigzag stair", cost)
                    .with_equivalent_area(equivalent_area(cost, unit_price)),
            );
        }
    }

    if let Some(capacity) = input.elevator {
        let mut cost = rates.elevator_shaft;
        let mut description = String::from("Shaft + installation");
        if !input.package_type.is_rough() {
            cost += rates.elevator_equipment.get(capacity);
            description.push_str(" + equipment");
        }
        extras.push(
            Bucket::Equipment,
            CalculationItem::extra(format!("Elevator {}", capacity.label()), description, cost)
                .with_equivalent_area(equivalent_area(cost, unit_price)),
        );
    }

    if input.has_demolition && input.demolition_area > 0.0 {
        let cost = input.demolition_area * floors * rates.demolition_per_m2;
        extras.push(
            Bucket::Construction,
            CalculationItem::extra(
                "Demolition & haulage",
                format!("{} m² x {} floors", input.demolition_area, input.floors),
                cost,
            ),
        );
    }

    if input.has_pile_driving {
        let columns = (areas.floor_area / PILE_COLUMN_SPACING_M2).ceil() + PILE_EXTRA_COLUMNS;
        let pile_meters = columns * rates.piles_per_column * input.pile_depth;
        let cost = pile_meters * rates.pile_per_meter;
        extras.push(
            Bucket::Construction,
            CalculationItem::extra(
                "Concrete pile driving",
                format!("Estimated {pile_meters} m of pile"),
                cost,
            ),
        );
    }

    if input.facade_type != FacadeType::Simple {
        let facade_area = input.width * floors * FACADE_FLOOR_HEIGHT_M;
        let cost = facade_area * rates.facade_per_m2.get(input.facade_type);
        extras.push(
            Bucket::Furniture,
            CalculationItem::extra("Facade decoration", input.facade_type.label(), cost),
        );
    }

    let furniture_rate = config
        .furniture_rates
        .get(input.package_type)
        .get(input.handover_mode);
    if furniture_rate > 0.0 {
        let cost = areas.total_floor_area * furniture_rate;
        extras.push(
            Bucket::Furniture,
            CalculationItem::extra("Interior package", input.handover_mode.label(), cost)
                .with_original_area(areas.total_floor_area),
        );
    }

    if input.has_ac_piping {
        let rooms = input.floors.max(MIN_AC_ROOMS);
        let cost = f64::from(rooms) * rates.ac_piping_per_room;
        extras.push(
            Bucket::Equipment,
            CalculationItem::extra("AC copper piping", format!("{rooms} outlets"), cost),
        );
    }

    if input.has_solar_water {
        extras.push(
            Bucket::Equipment,
            CalculationItem::extra(
                "Solar water heater",
                "Collector + hot-water PPR piping",
                rates.solar_water_system,
            ),
        );
    }

    if input.include_gate_fence {
        extras.push(
            Bucket::Furniture,
            CalculationItem::extra(
                "Gate & fence",
                "Steel gate + masonry fence",
                rates.gate_fence_lumpsum,
            ),
        );
    }

    if input.include_design {
        let design_area = areas.total_floor_area + areas.foundation_area + areas.roof_area;
        let cost = design_area * rates.design_fee_per_m2;
        extras.push(
            Bucket::Soft,
            CalculationItem::extra("Design documents", "Architecture / structure / MEP", cost),
        );
    }

    if input.include_permits {
        extras.push(
            Bucket::Soft,
            CalculationItem::extra(
                "Permits",
                "Building permit + completion filing",
                rates.permit_service,
            ),
        );
    }

    extras
}

fn equivalent_area(cost: f64, unit_price: f64) -> f64 {
    if unit_price > 0.0 {
        round_to(cost / unit_price, 2)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::area::area_breakdown;
    use crate::model::{ElevatorCapacity, HandoverMode, PackageType};

    const UNIT_PRICE: f64 = 3_780_000.0;

    fn bare_input() -> ConstructionInput {
        ConstructionInput {
            stair_type: StairType::Straight,
            ..ConstructionInput::default()
        }
    }

    fn run(input: &ConstructionInput) -> Extras {
        extended_scope(
            input,
            &area_breakdown(input),
            UNIT_PRICE,
            &PricingConfig::default(),
        )
    }

    #[test]
    fn nothing_selected_means_no_extras() {
        let extras = run(&bare_input());
        assert!(extras.items.is_empty());
        assert_eq!(extras.buckets, ExtraBuckets::default());
    }

    #[test]
    fn zigzag_stair_charges_per_upper_floor() {
        let input = ConstructionInput {
            stair_type: StairType::Zigzag,
            floors: 3,
            ..bare_input()
        };
        let extras = run(&input);

        assert_eq!(extras.buckets.equipment, 30_000_000.0);
        let item = &extras.items[0];
        assert!(item.is_extra);
        assert_eq!(item.converted_area, 7.94);
    }

    #[test]
    fn single_storey_zigzag_is_free() {
        let input = ConstructionInput {
            stair_type: StairType::Zigzag,
            floors: 1,
            ..bare_input()
        };
        assert!(run(&input).items.is_empty());
    }

    #[test]
    fn rough_elevator_pays_only_the_shaft() {
        let input = ConstructionInput {
            elevator: Some(ElevatorCapacity::Kg630),
            package_type: PackageType::Rough,
            ..bare_input()
        };
        let extras = run(&input);

        assert_eq!(extras.buckets.equipment, 40_000_000.0);
        assert_eq!(extras.items[0].description, "Shaft + installation");
    }

    #[test]
    fn finished_elevator_includes_equipment() {
        let input = ConstructionInput {
            elevator: Some(ElevatorCapacity::Kg450),
            package_type: PackageType::Medium,
            ..bare_input()
        };
        let extras = run(&input);

        assert_eq!(extras.buckets.equipment, 460_000_000.0);
    }

    #[test]
    fn piles_follow_column_heuristic() {
        let input = ConstructionInput {
            has_pile_driving: true,
            pile_depth: 15.0,
            ..bare_input()
        };
        let extras = run(&input);

        // ceil(75 / 20) + 2 = 6 columns × 4 piles × 15 m = 360 m
        assert_eq!(extras.buckets.construction, 360.0 * 280_000.0);
        assert_eq!(extras.items[0].description, "Estimated 360 m of pile");
    }

    #[test]
    fn demolition_needs_positive_area() {
        let input = ConstructionInput {
            has_demolition: true,
            demolition_area: 0.0,
            ..bare_input()
        };
        assert!(run(&input).items.is_empty());
    }

    #[test]
    fn facade_surcharge_uses_street_width() {
        let input = ConstructionInput {
            facade_type: FacadeType::Neoclassic,
            ..bare_input()
        };
        let extras = run(&input);

        // 5 m × 2 floors × 3.3 m × 1.5M
        assert!((extras.buckets.furniture - 49_500_000.0).abs() < 1e-6);
    }

    #[test]
    fn furniture_rate_applies_to_usable_floor_area() {
        let input = ConstructionInput {
            package_type: PackageType::Good,
            handover_mode: HandoverMode::Turnkey,
            ..bare_input()
        };
        let extras = run(&input);

        assert_eq!(extras.buckets.furniture, 150.0 * 6_300_000.0);
        assert_eq!(extras.items[0].original_area, 150.0);
    }

    #[test]
    fn rough_tier_never_gets_furniture() {
        let input = ConstructionInput {
            package_type: PackageType::Rough,
            handover_mode: HandoverMode::Turnkey,
            ..bare_input()
        };
        assert_eq!(run(&input).buckets.furniture, 0.0);
    }

    #[test]
    fn ac_piping_has_two_outlet_minimum() {
        let input = ConstructionInput {
            has_ac_piping: true,
            floors: 1,
            ..bare_input()
        };
        assert_eq!(run(&input).buckets.equipment, 6_000_000.0);
    }

    #[test]
    fn design_fee_covers_floors_foundation_and_roof() {
        let input = ConstructionInput {
            include_design: true,
            ..bare_input()
        };
        // (150 + 22.5 + 37.5) m² × 180k
        assert_eq!(run(&input).buckets.soft, 210.0 * 180_000.0);
    }

    #[test]
    fn every_item_emits_in_fixed_order() {
        let input = ConstructionInput {
            stair_type: StairType::Zigzag,
            elevator: Some(ElevatorCapacity::Kg350),
            has_demolition: true,
            demolition_area: 50.0,
            has_pile_driving: true,
            facade_type: FacadeType::Modern,
            package_type: PackageType::Medium,
            handover_mode: HandoverMode::BuiltIn,
            has_ac_piping: true,
            has_solar_water: true,
            include_gate_fence: true,
            include_design: true,
            include_permits: true,
            ..bare_input()
        };
        let extras = run(&input);
        let names: Vec<&str> = extras.items.iter().map(|i| i.name.as_str()).collect();

        assert_eq!(
            names,
            [
                "Stair surcharge",
                "Elevator 350 kg (home)",
                "Demolition & haulage",
                "Concrete pile driving",
                "Facade decoration",
                "Interior package",
                "AC copper piping",
                "Solar water heater",
                "Gate & fence",
                "Design documents",
                "Permits",
            ]
        );
        assert!(extras.items.iter().all(|i| i.is_extra && i.cost.is_some()));
    }
}
