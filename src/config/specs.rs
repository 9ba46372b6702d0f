//! Descriptive reference data per finish tier and handover mode.
//!
//! None of this feeds the engine. It tells the owner what each tier and
//! handover mode actually buys: brands, grades and workmanship.

use super::pricing::TierTable;
use crate::model::{HandoverMode, PackageType};

/// Marker used by the Rough tier for items the owner buys separately.
pub const OWNER_SUPPLIED: &str = "Owner supplied";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageProfile {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandoverProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub includes: &'static [&'static str],
    pub excludes: &'static [&'static str],
}

/// One row of a specification table, with the text for every tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecLine {
    pub title: &'static str,
    pub by_tier: TierTable<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecCategory {
    pub name: &'static str,
    pub lines: &'static [SpecLine],
}

#[must_use]
pub fn package_profile(tier: PackageType) -> PackageProfile {
    match tier {
        PackageType::Rough => PackageProfile {
            name: "G0 - Rough build",
            description: "Solid structural frame. The owner arranges the finishes; \
                          suits owners who know their materials.",
        },
        PackageType::Medium => PackageProfile {
            name: "G1 - Full package, medium",
            description: "Economical and up to basic standard. Suits rental or \
                          business premises and tight budgets.",
        },
        PackageType::Good => PackageProfile {
            name: "G2 - Full package, good",
            description: "Balanced price and quality with good-brand materials. \
                          The most popular package.",
        },
        PackageType::Premium => PackageProfile {
            name: "G3 - Full package, premium",
            description: "Villa and hotel standard. Imported or top-tier materials \
                          and meticulous workmanship.",
        },
    }
}

#[must_use]
pub fn handover_profile(mode: HandoverMode) -> HandoverProfile {
    match mode {
        HandoverMode::Basic => HandoverProfile {
            name: "Mode A - Basic",
            description: "For buyers who furnish the house themselves later.",
            includes: &[
                "Structure and masonry",
                "Paint, gypsum ceilings",
                "Tiled or wooden floors, doors",
                "Sanitary ware",
                "Concealed electrical and plumbing",
            ],
            excludes: &[
                "Kitchen and wardrobe cabinets",
                "Loose furniture",
                "Electronics",
            ],
        },
        HandoverMode::BuiltIn => HandoverProfile {
            name: "Mode B - Built-in",
            description: "Move in straight away; only loose furniture to buy.",
            includes: &[
                "Everything in Mode A",
                "Kitchen cabinets (upper/lower), hob and hood",
                "Built-in wardrobes",
                "TV cabinet, study or work desk",
            ],
            excludes: &[
                "Sofa, dining table",
                "Beds, mattresses",
                "TV, fridge, washing machine",
            ],
        },
        HandoverMode::Turnkey => HandoverProfile {
            name: "Mode C - Turnkey",
            description: "Keys in hand; just bring a suitcase.",
            includes: &[
                "Everything in Mode B",
                "Sofa, coffee table, curtains",
                "Dining table and chairs",
                "Beds and mattresses",
            ],
            excludes: &[
                "TV, fridge",
                "Washing machine, dishwasher",
                "Personal decor",
            ],
        },
    }
}

const fn tiers(
    rough: &'static str,
    medium: &'static str,
    good: &'static str,
    premium: &'static str,
) -> TierTable<&'static str> {
    TierTable {
        rough,
        medium,
        good,
        premium,
    }
}

/// Technical specification by work category, in display order.
pub const TECHNICAL_SPECS: [SpecCategory; 4] = [
    SpecCategory {
        name: "Structure",
        lines: &[
            SpecLine {
                title: "Concrete (footings/beams/slabs)",
                by_tier: tiers(
                    "PCB30/40, hand-mixed 1:2:3, ordinary sand and 1x2 stone, no admixture.",
                    "PCB40, washed sand, grade-1 1x2 stone, plasticiser admixture.",
                    "Stable PCB40 with slump control, ready-mix where the alley allows. Grade 250.",
                    "Ready-mix grade 300+, superplasticiser, 14 days of moist curing.",
                ),
            },
            SpecLine {
                title: "Reinforcing steel",
                by_tier: tiers(
                    "CB300, hand-tied.",
                    "CB400 with proper spacers and cover.",
                    "CB400-CB500, laps to standard (30D-40D), precast concrete spacers.",
                    "CB500, checklist sign-off (cover, MEP sleeves) before every pour.",
                ),
            },
            SpecLine {
                title: "Masonry and plaster",
                by_tier: tiers(
                    "Fired clay bricks, 1:5 mortar, ordinary sand.",
                    "Good fired bricks, 1:4.5 mortar, screened sand.",
                    "Laser-checked plumb, corrective plaster on uneven walls, 1:4 mortar.",
                    "Anti-crack mesh at every column-wall joint, careful construction joints.",
                ),
            },
        ],
    },
    SpecCategory {
        name: "Waterproofing",
        lines: &[SpecLine {
            title: "Materials and process",
            by_tier: tiers(
                "Neat cement slurry, two coats.",
                "Polymer cement, 2-3 coats, corner mesh at wall bases.",
                "Premium polymer system, 24-48 h flood test before floor tiling.",
                "PU or membrane roof system, detailed pipe collars and movement joints.",
            ),
        }],
    },
    SpecCategory {
        name: "Finishing",
        lines: &[
            SpecLine {
                title: "Floor and wall tiles",
                by_tier: tiers(
                    "Tiling labour only (owner supplies tiles).",
                    "600x600 standard granite tiles, standard tile adhesive.",
                    "800x800 tiles, anti-mould grout, floor waterproofing before tiling.",
                    "Premium or imported stone/tiles, premium adhesive and grout, flatness check.",
                ),
            },
            SpecLine {
                title: "Paint",
                by_tier: tiers(
                    "Painting labour only (owner supplies paint).",
                    "1-2 coats of putty, mid-range interior paint.",
                    "Smooth putty, washable paint.",
                    "Premium paint system, sanding and lamp inspection for defects.",
                ),
            },
            SpecLine {
                title: "Doors and glazing",
                by_tier: tiers(
                    "Installation labour only (owner supplies doors).",
                    "700/1000 series aluminium, 8 mm tempered glass.",
                    "Xingfa aluminium, branded hardware, double EPDM gaskets.",
                    "Thermal-break aluminium or solid wood, insulated or Low-E glass.",
                ),
            },
        ],
    },
    SpecCategory {
        name: "MEP",
        lines: &[
            SpecLine {
                title: "Electrical",
                by_tier: tiers(
                    "Cadivi cable, flexible conduit, standard back boxes.",
                    "Cadivi cable, rigid PVC conduit, basic switches and sockets.",
                    "Cadivi/LS cable, fire-rated conduit, mid-range switchgear.",
                    "Optional smart-home wiring, premium switchgear.",
                ),
            },
            SpecLine {
                title: "Water supply and drainage",
                by_tier: tiers(
                    "Standard Binh Minh pipe.",
                    "Binh Minh pipe to standard.",
                    "Heavy-wall pipe, genuine fittings, thorough pressure test.",
                    "Heat-welded PPR supply, acoustic drainage pipe where needed.",
                ),
            },
        ],
    },
];

/// Finishing materials and brands by tier.
pub const FINISHING_SCHEDULE: [SpecLine; 10] = [
    SpecLine {
        title: "Tiles",
        by_tier: tiers(
            OWNER_SUPPLIED,
            "60x60 (Catalan/Prime)",
            "80x80 polished porcelain",
            "Eurotile / imported",
        ),
    },
    SpecLine {
        title: "Paint",
        by_tier: tiers(
            OWNER_SUPPLIED,
            "Maxilite (interior)",
            "Dulux EasyClean",
            "Dulux 5in1 / Jotun",
        ),
    },
    SpecLine {
        title: "Sanitary ware",
        by_tier: tiers(
            OWNER_SUPPLIED,
            "Viglacera / Inax (basic)",
            "Toto / Inax (mid-range)",
            "Toto / Grohe / Kohler",
        ),
    },
    SpecLine {
        title: "Electrical cable",
        by_tier: tiers(
            "Cadivi (installed)",
            "Cadivi (standard)",
            "Cadivi (grade 1)",
            "Cadivi / LS Vina",
        ),
    },
    SpecLine {
        title: "Water pipe",
        by_tier: tiers(
            "Binh Minh (installed)",
            "Binh Minh (PVC)",
            "Binh Minh (heavy) + PPR",
            "PPR Vesbo / Tien Phong (heat welded)",
        ),
    },
    SpecLine {
        title: "Switches and sockets",
        by_tier: tiers(
            OWNER_SUPPLIED,
            "Sino Vanlock / Panasonic",
            "Panasonic Wide",
            "Schneider / Legrand",
        ),
    },
    SpecLine {
        title: "Lighting",
        by_tier: tiers(
            OWNER_SUPPLIED,
            "Rang Dong / MPE",
            "Panasonic / Philips",
            "Philips / magnetic track lights",
        ),
    },
    SpecLine {
        title: "Water tank",
        by_tier: tiers(
            OWNER_SUPPLIED,
            "Tan A / Dai Thanh stainless",
            "Son Ha / Dai Thanh (SUS304)",
            "Son Ha (SUS304) + booster pump",
        ),
    },
    SpecLine {
        title: "Network / TV",
        by_tier: tiers(
            "Conduit only",
            "Sino / AMP Cat5e",
            "AMP / Commscope Cat6",
            "Commscope Cat6 + mesh WiFi",
        ),
    },
    SpecLine {
        title: "Septic tank",
        by_tier: tiers(
            "Brick or cast concrete",
            "Precast plastic tank",
            "Improved septic tank (Bastaf)",
            "Smart septic tank",
        ),
    },
];

/// `(item, brand)` pairs of the finishing schedule for one tier.
#[must_use]
pub fn finishing_schedule(tier: PackageType) -> Vec<(&'static str, &'static str)> {
    FINISHING_SCHEDULE
        .iter()
        .map(|line| (line.title, line.by_tier.get(tier)))
        .collect()
}

/// Finishing items the owner has to buy separately on this tier.
#[must_use]
pub fn owner_supplied_items(tier: PackageType) -> Vec<&'static str> {
    FINISHING_SCHEDULE
        .iter()
        .filter(|line| line.by_tier.get(tier) == OWNER_SUPPLIED)
        .map(|line| line.title)
        .collect()
}
