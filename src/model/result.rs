use serde::Serialize;

/// One displayable line of the area breakdown.
///
/// Core items (`is_extra == false`) carry an area-equivalent value priced at
/// the unit price. Extras carry an absolute `cost`; stair and elevator extras
/// also report `converted_area` as `cost / unit price` for display only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationItem {
    pub name: String,
    pub description: String,
    pub original_area: f64,
    pub coefficient: f64,
    pub converted_area: f64,
    pub is_extra: bool,
    pub cost: Option<f64>,
}

impl CalculationItem {
    #[must_use]
    pub fn core(
        name: impl Into<String>,
        description: impl Into<String>,
        original_area: f64,
        coefficient: f64,
        converted_area: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            original_area,
            coefficient,
            converted_area,
            is_extra: false,
            cost: None,
        }
    }

    #[must_use]
    pub fn extra(name: impl Into<String>, description: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            original_area: 0.0,
            coefficient: 0.0,
            converted_area: 0.0,
            is_extra: true,
            cost: Some(cost),
        }
    }

    #[must_use]
    pub fn with_original_area(mut self, area: f64) -> Self {
        self.original_area = area;
        self
    }

    #[must_use]
    pub fn with_equivalent_area(mut self, area: f64) -> Self {
        self.converted_area = area;
        self
    }
}

/// Mutually exclusive cost categories of the total investment.
///
/// `labor + rough_material + finishing` is exactly the core construction
/// cost; `equipment` merges the extra-construction and extra-equipment
/// buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub labor: f64,
    pub rough_material: f64,
    pub finishing: f64,
    pub equipment: f64,
    pub furniture: f64,
    pub soft: f64,
    pub contingency: f64,
}

/// Raw surcharge accumulators before the equipment merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ExtraBuckets {
    pub construction: f64,
    pub equipment: f64,
    pub furniture: f64,
    pub soft: f64,
}

impl ExtraBuckets {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.construction + self.equipment + self.furniture + self.soft
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MaterialQuantities {
    /// Pieces.
    pub bricks: f64,
    /// m³, one decimal.
    pub sand: f64,
    /// m³, one decimal.
    pub stone: f64,
    /// kg.
    pub cement: f64,
    /// kg.
    pub steel: f64,
    /// m² of painted surface.
    pub paint: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub total_converted_area: f64,
    /// Effective price per area-equivalent m², rounded to the dong.
    pub unit_price: f64,
    pub core_cost: f64,
    /// Core cost plus extra construction and equipment.
    pub total_cost: f64,
    pub total_investment: f64,
    pub items: Vec<CalculationItem>,
    pub materials: MaterialQuantities,
    pub cost_structure: CostBreakdown,
    pub extras: ExtraBuckets,
    pub schedule_weeks: u32,
}

impl CalculationResult {
    pub fn core_items(&self) -> impl Iterator<Item = &CalculationItem> {
        self.items.iter().filter(|i| !i.is_extra)
    }

    pub fn extra_items(&self) -> impl Iterator<Item = &CalculationItem> {
        self.items.iter().filter(|i| i.is_extra)
    }
}
