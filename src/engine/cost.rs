use crate::config::CostRatios;
use crate::model::{ExtraBuckets, PackageType};

/// Labour / rough material / finishing split of the core cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoreSplit {
    pub labor: f64,
    pub rough_material: f64,
    pub finishing: f64,
}

/// Splits the core cost so the three parts always sum to it exactly.
///
/// The last part is the remainder: rough material for the Rough tier,
/// finishing for every other tier.
#[must_use]
pub fn split_core_cost(core_cost: f64, tier: PackageType, ratios: &CostRatios) -> CoreSplit {
    if tier.is_rough() {
        let labor = (core_cost * ratios.rough_labor).round();
        CoreSplit {
            labor,
            rough_material: core_cost - labor,
            finishing: 0.0,
        }
    } else {
        let labor = (core_cost * ratios.labor).round();
        let rough_material = (core_cost * ratios.rough_material).round();
        CoreSplit {
            labor,
            rough_material,
            finishing: core_cost - labor - rough_material,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// Core plus extra construction and equipment.
    pub total_construction: f64,
    pub pre_contingency: f64,
    pub contingency: f64,
    pub total_investment: f64,
}

#[must_use]
pub fn aggregate(core_cost: f64, extras: &ExtraBuckets, contingency_rate: f64) -> Totals {
    let total_construction = core_cost + extras.construction + extras.equipment;
    let pre_contingency = total_construction + extras.furniture + extras.soft;
    let contingency = (pre_contingency * contingency_rate).round();

    Totals {
        total_construction,
        pre_contingency,
        contingency,
        total_investment: pre_contingency + contingency,
    }
}
