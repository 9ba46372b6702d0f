use construction_estimator::config::PricingConfig;
use construction_estimator::engine::{estimate, price_factors, split_core_cost};
use construction_estimator::model::{
    ConstructionInput, ElevatorCapacity, FacadeType, HandoverMode, Location, PackageType,
    ProjectType,
};
use proptest::prelude::*;
use proptest::sample::select;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

prop_compose! {
    fn any_input()(
        width in 3.0..20.0_f64,
        length in 5.0..40.0_f64,
        floors in 1..=10_u32,
        location in select(Location::ALL.to_vec()),
        project_type in select(ProjectType::ALL.to_vec()),
        package_type in select(PackageType::ALL.to_vec()),
        handover_mode in select(HandoverMode::ALL.to_vec()),
        facade_type in select(FacadeType::ALL.to_vec()),
        elevator in proptest::option::of(select(ElevatorCapacity::ALL.to_vec())),
        flags in proptest::collection::vec(any::<bool>(), 12),
        demolition_area in 0.0..200.0_f64,
    ) -> ConstructionInput {
        ConstructionInput {
            width,
            length,
            floors,
            location,
            project_type,
            package_type,
            handover_mode,
            facade_type,
            elevator,
            is_small_alley: flags[0],
            is_truck_ban: flags[1],
            is_restricted_hours: flags[2],
            has_material_elevator: flags[3],
            has_basement: flags[4],
            has_terrace: flags[5],
            has_demolition: flags[6],
            demolition_area,
            has_pile_driving: flags[7],
            include_gate_fence: flags[8],
            has_ac_piping: flags[9],
            has_solar_water: flags[10],
            include_design: flags[11],
            ..ConstructionInput::default()
        }
    }
}

proptest! {
    #[test]
    fn core_split_sums_exactly(
        core in 0_u64..1_000_000_000_000,
        tier in select(PackageType::ALL.to_vec()),
    ) {
        let core = core as f64;
        let split = split_core_cost(core, tier, &PricingConfig::default().cost_ratios);

        prop_assert_eq!(split.labor + split.rough_material + split.finishing, core);
        if tier == PackageType::Rough {
            prop_assert_eq!(split.finishing, 0.0);
        }
    }

    #[test]
    fn investment_is_the_sum_of_its_parts(input in any_input()) {
        let result = estimate(&input, &PricingConfig::default());
        let c = result.cost_structure;
        let parts = c.labor + c.rough_material + c.finishing + c.equipment
            + c.furniture + c.soft + c.contingency;

        prop_assert!(close(parts, result.total_investment));
        prop_assert!(close(
            result.total_cost,
            result.core_cost + result.extras.construction + result.extras.equipment
        ));
    }

    #[test]
    fn contingency_and_investment_are_exact(input in any_input()) {
        let config = PricingConfig::default();
        let result = estimate(&input, &config);
        let c = result.cost_structure;
        let pre_contingency = result.total_cost + c.furniture + c.soft;

        prop_assert_eq!(c.contingency, (pre_contingency * config.contingency_rate).round());
        prop_assert_eq!(result.total_investment, pre_contingency + c.contingency);
    }

    #[test]
    fn larger_coefficients_never_shrink_the_area(
        input in any_input(),
        foundation in 0.0..150.0_f64,
        roof in 0.0..150.0_f64,
        extra in 0.0..100.0_f64,
    ) {
        let config = PricingConfig::default();
        let base = ConstructionInput {
            foundation_percent: foundation,
            roof_percent: roof,
            ..input
        };
        let deeper_foundation = ConstructionInput {
            foundation_percent: foundation + extra,
            ..base.clone()
        };
        let heavier_roof = ConstructionInput {
            roof_percent: roof + extra,
            ..base.clone()
        };

        let area = estimate(&base, &config).total_converted_area;
        prop_assert!(estimate(&deeper_foundation, &config).total_converted_area >= area);
        prop_assert!(estimate(&heavier_roof, &config).total_converted_area >= area);
    }

    #[test]
    fn basement_and_terrace_never_shrink_the_area(input in any_input()) {
        let config = PricingConfig::default();
        let bare = ConstructionInput {
            has_basement: false,
            has_terrace: false,
            ..input
        };
        let area = estimate(&bare, &config).total_converted_area;

        for extended in [
            ConstructionInput { has_basement: true, ..bare.clone() },
            ConstructionInput { has_terrace: true, ..bare.clone() },
            ConstructionInput { has_basement: true, has_terrace: true, ..bare.clone() },
        ] {
            prop_assert!(estimate(&extended, &config).total_converted_area >= area);
        }
    }

    #[test]
    fn more_floors_means_more_area(input in any_input()) {
        prop_assume!(input.floors < 10);
        let config = PricingConfig::default();
        let taller = ConstructionInput {
            floors: input.floors + 1,
            ..input.clone()
        };

        let low = estimate(&input, &config);
        let high = estimate(&taller, &config);
        prop_assert!(high.total_converted_area > low.total_converted_area);
        prop_assert!(high.schedule_weeks > low.schedule_weeks);
    }

    #[test]
    fn price_factor_order_does_not_matter(input in any_input()) {
        let f = price_factors(&input, &PricingConfig::default());

        let forward = f.unit_price();
        let reversed = f.condition * f.project_type * f.location * f.base;
        let paired = (f.base * f.condition) * (f.location * f.project_type);

        prop_assert!(close(forward, reversed));
        prop_assert!(close(forward, paired));
    }

    #[test]
    fn results_are_non_negative(input in any_input()) {
        let result = estimate(&input, &PricingConfig::default());

        prop_assert!(result.total_converted_area > 0.0);
        prop_assert!(result.items.iter().all(|i| i.cost.unwrap_or(0.0) >= 0.0));
        prop_assert!(result.materials.bricks >= 0.0);
        prop_assert!(result.total_investment >= result.total_cost);
    }
}
