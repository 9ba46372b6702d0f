use super::round_to;
use crate::model::{CalculationItem, ConstructionInput};

/// Footprint-derived areas shared by the later stages.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaBreakdown {
    /// width × length, two decimals.
    pub floor_area: f64,
    pub foundation_area: f64,
    /// floor_area × floors, the usable floor area.
    pub total_floor_area: f64,
    pub roof_area: f64,
    pub basement_area: Option<f64>,
    pub terrace_area: Option<f64>,
    /// Sum of every core item, two decimals.
    pub total_converted_area: f64,
    pub items: Vec<CalculationItem>,
}

/// Converts dimensions and structural percents into area-equivalent items.
///
/// Emission order is foundation, floors, roof, basement, terrace.
#[must_use]
pub fn area_breakdown(input: &ConstructionInput) -> AreaBreakdown {
    let floor_area = round_to(input.width * input.length, 2);
    let mut items = Vec::with_capacity(5);

    let foundation_area = percent_of(floor_area, input.foundation_percent);
    items.push(CalculationItem::core(
        "Foundation",
        format!(
            "{} ({}%)",
            input.foundation_type.label(),
            input.foundation_percent
        ),
        floor_area,
        input.foundation_percent,
        foundation_area,
    ));

    let total_floor_area = round_to(floor_area * f64::from(input.floors), 2);
    items.push(CalculationItem::core(
        format!("Floors (x{})", input.floors),
        "100% of floor area",
        total_floor_area,
        100.0,
        total_floor_area,
    ));

    let roof_area = percent_of(floor_area, input.roof_percent);
    items.push(CalculationItem::core(
        "Roof",
        format!("{} ({}%)", input.roof_type.label(), input.roof_percent),
        floor_area,
        input.roof_percent,
        roof_area,
    ));

    let basement_area = input.has_basement.then(|| {
        let area = percent_of(floor_area, input.basement_percent);
        items.push(CalculationItem::core(
            "Basement",
            format!("Coefficient {}%", input.basement_percent),
            floor_area,
            input.basement_percent,
            area,
        ));
        area
    });

    let terrace_area = input.has_terrace.then(|| {
        let area = percent_of(floor_area, input.terrace_percent);
        items.push(CalculationItem::core(
            "Terrace",
            format!("Coefficient {}%", input.terrace_percent),
            floor_area,
            input.terrace_percent,
            area,
        ));
        area
    });

    let total_converted_area = round_to(items.iter().map(|i| i.converted_area).sum(), 2);

    AreaBreakdown {
        floor_area,
        foundation_area,
        total_floor_area,
        roof_area,
        basement_area,
        terrace_area,
        total_converted_area,
        items,
    }
}

fn percent_of(area: f64, percent: f64) -> f64 {
    round_to(area * (percent / 100.0), 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_townhouse_breakdown() {
        let input = ConstructionInput::default();
        let areas = area_breakdown(&input);

        assert_eq!(areas.floor_area, 75.0);
        assert_eq!(areas.foundation_area, 22.5);
        assert_eq!(areas.total_floor_area, 150.0);
        assert_eq!(areas.roof_area, 37.5);
        assert_eq!(areas.total_converted_area, 210.0);
        assert_eq!(areas.items.len(), 3);
        assert!(areas.items.iter().all(|i| !i.is_extra));
    }

    #[test]
    fn basement_and_terrace_append_in_order() {
        let input = ConstructionInput {
            has_basement: true,
            basement_percent: 150.0,
            has_terrace: true,
            terrace_percent: 50.0,
            ..ConstructionInput::default()
        };
        let areas = area_breakdown(&input);

        let names: Vec<&str> = areas.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Foundation", "Floors (x2)", "Roof", "Basement", "Terrace"]);
        assert_eq!(areas.basement_area, Some(112.5));
        assert_eq!(areas.terrace_area, Some(37.5));
        assert_eq!(areas.total_converted_area, 360.0);
    }

    #[test]
    fn floor_area_is_rounded_to_cents() {
        let input = ConstructionInput {
            width: 4.1,
            length: 3.3,
            ..ConstructionInput::default()
        };
        let areas = area_breakdown(&input);

        assert_eq!(areas.floor_area, 13.53);
        assert_eq!(areas.total_floor_area, 27.06);
    }

    #[test]
    fn basement_percent_ignored_when_absent() {
        let input = ConstructionInput {
            has_basement: false,
            basement_percent: 500.0,
            ..ConstructionInput::default()
        };

        assert_eq!(area_breakdown(&input).basement_area, None);
    }
}
