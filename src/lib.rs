//! # Construction Estimator
//!
//! Preliminary cost estimates for residential and small commercial
//! buildings in Vietnam.
//!
//! ## Features
//!
//! - Area-equivalent pricing with location, project type and site modifiers
//! - Cost split into labour, rough material, finishing and extra buckets
//! - Material quantities and a rough schedule
//! - Pricing tables loadable from JSON
//! - Export to CSV and JSON
//! - Terminal form with live recalculation
//!
//! ## Example
//!
//! ```
//! use construction_estimator::config::PricingConfig;
//! use construction_estimator::engine::estimate;
//! use construction_estimator::model::{ConstructionInput, StairType};
//!
//! let input = ConstructionInput {
//!     stair_type: StairType::Straight,
//!     ..ConstructionInput::default()
//! };
//! let result = estimate(&input, &PricingConfig::default());
//!
//! assert_eq!(result.total_converted_area, 210.0);
//! assert_eq!(result.core_cost, 793_800_000.0);
//! ```

pub mod advisor;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod form;
pub mod logging;
pub mod model;
pub mod ui;

pub use engine::estimate;
