//! The estimation pipeline.
//!
//! [`estimate`] is a pure function of the input record and the pricing
//! table: no I/O, no shared state, identical output for identical input.
//! Each stage lives in its own module and can be called on its own.

pub mod area;
pub mod cost;
pub mod materials;
pub mod price;
pub mod schedule;
pub mod surcharge;

pub use area::{area_breakdown, AreaBreakdown};
pub use cost::{aggregate, split_core_cost, CoreSplit, Totals};
pub use materials::material_quantities;
pub use price::{condition_modifier, price_factors, unit_price, PriceFactors};
pub use schedule::schedule_weeks;
pub use surcharge::{extended_scope, Extras};

use crate::config::PricingConfig;
use crate::model::{CalculationResult, ConstructionInput, CostBreakdown};
use tracing::debug;

/// Prices one construction input against a pricing table.
///
/// # Example
///
/// ```
/// use construction_estimator::config::PricingConfig;
/// use construction_estimator::engine::estimate;
/// use construction_estimator::model::ConstructionInput;
///
/// let result = estimate(&ConstructionInput::default(), &PricingConfig::default());
/// assert_eq!(result.total_converted_area, 210.0);
/// assert!(result.total_investment > result.total_cost);
/// ```
#[must_use]
pub fn estimate(input: &ConstructionInput, config: &PricingConfig) -> CalculationResult {
    let areas = area_breakdown(input);
    let unit_price = unit_price(input, config);
    let core_cost = (areas.total_converted_area * unit_price).round();

    let split = split_core_cost(core_cost, input.package_type, &config.cost_ratios);
    let extras = extended_scope(input, &areas, unit_price, config);
    let totals = aggregate(core_cost, &extras.buckets, config.contingency_rate);

    let materials = material_quantities(
        areas.total_converted_area,
        areas.total_floor_area,
        input.wall_type,
        &config.material_norms,
    );
    let schedule_weeks = schedule_weeks(input);

    debug!(
        pricing = %config.version,
        converted_area = areas.total_converted_area,
        unit_price,
        core_cost,
        total_investment = totals.total_investment,
        schedule_weeks,
        "estimate computed"
    );

    let cost_structure = CostBreakdown {
        labor: split.labor,
        rough_material: split.rough_material,
        finishing: split.finishing,
        equipment: extras.buckets.construction + extras.buckets.equipment,
        furniture: extras.buckets.furniture,
        soft: extras.buckets.soft,
        contingency: totals.contingency,
    };

    let mut items = areas.items;
    items.extend(extras.items);

    CalculationResult {
        total_converted_area: areas.total_converted_area,
        unit_price: unit_price.round(),
        core_cost,
        total_cost: totals.total_construction,
        total_investment: totals.total_investment,
        items,
        materials,
        cost_structure,
        extras: extras.buckets,
        schedule_weeks,
    }
}

/// Rounds to a fixed number of decimal places, half away from zero.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StairType;

    #[test]
    fn round_to_handles_common_places() {
        assert_eq!(round_to(22.499, 2), 22.5);
        assert_eq!(round_to(188.999_999, 1), 189.0);
        assert_eq!(round_to(7.936_507, 2), 7.94);
    }

    #[test]
    fn core_items_come_before_extras() {
        let input = ConstructionInput {
            stair_type: StairType::Zigzag,
            include_permits: true,
            ..ConstructionInput::default()
        };
        let result = estimate(&input, &PricingConfig::default());

        let first_extra = result.items.iter().position(|i| i.is_extra).unwrap();
        assert!(result.items[..first_extra].iter().all(|i| !i.is_extra));
        assert!(result.items[first_extra..].iter().all(|i| i.is_extra));
        assert_eq!(result.core_items().count(), 3);
        assert_eq!(result.extra_items().count(), 2);
    }

    #[test]
    fn reported_unit_price_is_rounded() {
        let input = ConstructionInput {
            is_truck_ban: true,
            ..ConstructionInput::default()
        };
        let config = PricingConfig::default();
        let result = estimate(&input, &config);

        assert_eq!(result.unit_price, unit_price(&input, &config).round());
        assert_eq!(result.unit_price.fract(), 0.0);
    }
}
