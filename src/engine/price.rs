use crate::config::{ConditionSurcharges, PricingConfig};
use crate::model::ConstructionInput;

/// Above this many floors a site without a material hoist pays the manual
/// vertical transport surcharge.
pub const MANUAL_HOIST_FLOOR_THRESHOLD: u32 = 3;

/// The four multiplicands of the unit price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceFactors {
    pub base: f64,
    pub location: f64,
    pub project_type: f64,
    pub condition: f64,
}

impl PriceFactors {
    #[must_use]
    pub fn unit_price(&self) -> f64 {
        self.base * self.location * self.project_type * self.condition
    }
}

/// `1.0` plus every triggered site-condition surcharge.
#[must_use]
pub fn condition_modifier(input: &ConstructionInput, surcharges: &ConditionSurcharges) -> f64 {
    let mut modifier = 1.0;
    if input.is_small_alley {
        modifier += surcharges.small_alley;
    }
    if input.is_truck_ban {
        modifier += surcharges.truck_ban;
    }
    if input.is_restricted_hours {
        modifier += surcharges.restricted_hours;
    }
    if !input.has_material_elevator && input.floors > MANUAL_HOIST_FLOOR_THRESHOLD {
        modifier += surcharges.manual_hoist;
    }
    modifier
}

#[must_use]
pub fn price_factors(input: &ConstructionInput, config: &PricingConfig) -> PriceFactors {
    PriceFactors {
        base: config.base_prices.get(input.package_type),
        location: config.location_modifiers.get(input.location),
        project_type: config.project_type_modifiers.get(input.project_type),
        condition: condition_modifier(input, &config.condition_surcharges),
    }
}

/// Effective price per area-equivalent m², unrounded.
#[must_use]
pub fn unit_price(input: &ConstructionInput, config: &PricingConfig) -> f64 {
    price_factors(input, config).unit_price()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Location, PackageType, ProjectType};

    fn surcharges() -> ConditionSurcharges {
        PricingConfig::default().condition_surcharges
    }

    #[test]
    fn no_conditions_means_unit_modifier() {
        let input = ConstructionInput::default();
        assert_eq!(condition_modifier(&input, &surcharges()), 1.0);
    }

    #[test]
    fn site_conditions_add_up() {
        let input = ConstructionInput {
            is_small_alley: true,
            is_truck_ban: true,
            is_restricted_hours: true,
            ..ConstructionInput::default()
        };
        let modifier = condition_modifier(&input, &surcharges());
        assert!((modifier - 1.13).abs() < 1e-12);
    }

    #[test]
    fn manual_hoist_needs_both_missing_hoist_and_height() {
        let s = surcharges();
        let low = ConstructionInput {
            floors: 3,
            has_material_elevator: false,
            ..ConstructionInput::default()
        };
        let high_with_hoist = ConstructionInput {
            floors: 5,
            has_material_elevator: true,
            ..ConstructionInput::default()
        };
        let high_without_hoist = ConstructionInput {
            floors: 4,
            has_material_elevator: false,
            ..ConstructionInput::default()
        };

        assert_eq!(condition_modifier(&low, &s), 1.0);
        assert_eq!(condition_modifier(&high_with_hoist, &s), 1.0);
        assert!((condition_modifier(&high_without_hoist, &s) - 1.03).abs() < 1e-12);
    }

    #[test]
    fn villa_in_hanoi_good_tier() {
        let input = ConstructionInput {
            location: Location::Hanoi,
            project_type: ProjectType::Villa,
            package_type: PackageType::Good,
            ..ConstructionInput::default()
        };
        let price = unit_price(&input, &PricingConfig::default());

        // 6_200_000 × 1.05 × 1.25
        assert!((price - 8_137_500.0).abs() < 1e-6);
    }
}
