//! Natural-language commentary on a finished estimate.
//!
//! The advisor only reads an input and its result. Whatever happens here,
//! the estimate the caller already holds is unchanged.

#[cfg(feature = "advisor")]
pub mod gemini;

#[cfg(feature = "advisor")]
pub use gemini::GeminiAdvisor;

use crate::display::{format_area, format_vnd};
use crate::error::AdvisoryError;
use crate::model::{CalculationResult, ConstructionInput};
use tracing::warn;

/// Shown whenever the advisory backend cannot produce an answer.
pub const FALLBACK_MESSAGE: &str =
    "The construction advisor is unavailable right now. Please try again later.";

pub const SYSTEM_INSTRUCTION: &str = "You are an experienced construction engineer in Vietnam. \
     Your tone is professional, objective and helpful.";

/// A one-shot text backend.
pub trait Advisor {
    fn analyze(&self, prompt: &str) -> Result<String, AdvisoryError>;
}

/// Backend for builds without the `advisor` feature. Always fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledAdvisor;

impl Advisor for DisabledAdvisor {
    fn analyze(&self, _prompt: &str) -> Result<String, AdvisoryError> {
        Err(AdvisoryError::Disabled)
    }
}

/// Builds the review request sent to the advisory backend.
#[must_use]
pub fn build_prompt(input: &ConstructionInput, result: &CalculationResult) -> String {
    let location = input.location.label();
    let unit_price = format_vnd(result.unit_price);

    format!(
        "You are a construction consultant and cost appraiser in Vietnam. \
Review the following construction estimate.

Project:
- Location: {location}
- Size: {width}m x {length}m
- Floors: {floors}
- Foundation: {foundation} ({foundation_percent}%)
- Roof: {roof} ({roof_percent}%)
- Package: {package}

Preliminary figures:
- Total converted area: {area}
- Applied unit price (adjusted for region and site): {unit_price}/m²
- Estimated total cost: {total}
- Of which optional scope, furniture and fees: {extras}

Tasks:
1. Check current (2024-2025) construction unit prices in {location} for this kind of building.
2. Assess whether {unit_price}/m² is reasonable, and whether it is high or low for the market.
3. Give 3-4 key tips to optimise cost or avoid overruns in {location} \
(soil, material transport in narrow alleys, rainy season, etc.).
4. Answer briefly in readable Markdown.",
        width = input.width,
        length = input.length,
        floors = input.floors,
        foundation = input.foundation_type.label(),
        foundation_percent = input.foundation_percent,
        roof = input.roof_type.label(),
        roof_percent = input.roof_percent,
        package = input.package_type.label(),
        area = format_area(result.total_converted_area),
        total = format_vnd(result.total_cost),
        extras = format_vnd(result.extras.total()),
    )
}

/// Asks `advisor` about the estimate, falling back to [`FALLBACK_MESSAGE`].
pub fn advise(
    advisor: &dyn Advisor,
    input: &ConstructionInput,
    result: &CalculationResult,
) -> String {
    let prompt = build_prompt(input, result);
    match advisor.analyze(&prompt) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("advisor: {}", AdvisoryError::EmptyResponse);
            FALLBACK_MESSAGE.to_string()
        }
        Err(e) => {
            warn!("advisor: {e}");
            FALLBACK_MESSAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PricingConfig;
    use crate::engine::estimate;
    use std::cell::RefCell;

    struct Canned {
        reply: Result<&'static str, ()>,
        seen: RefCell<Option<String>>,
    }

    impl Advisor for Canned {
        fn analyze(&self, prompt: &str) -> Result<String, AdvisoryError> {
            *self.seen.borrow_mut() = Some(prompt.to_string());
            self.reply
                .map(str::to_string)
                .map_err(|()| AdvisoryError::Network {
                    message: "connection reset".to_string(),
                })
        }
    }

    fn canned(reply: Result<&'static str, ()>) -> Canned {
        Canned {
            reply,
            seen: RefCell::new(None),
        }
    }

    #[test]
    fn prompt_carries_the_headline_figures() {
        let input = ConstructionInput::default();
        let result = estimate(&input, &PricingConfig::default());
        let prompt = build_prompt(&input, &result);

        assert!(prompt.contains("Ho Chi Minh City"));
        assert!(prompt.contains("5m x 15m"));
        assert!(prompt.contains("Isolated footing (30%)"));
        assert!(prompt.contains("210.0 m²"));
        assert!(prompt.contains("3.780.000 ₫/m²"));
        assert!(prompt.contains("optional scope, furniture and fees: 15.000.000 ₫"));
    }

    #[test]
    fn successful_reply_is_returned() {
        let input = ConstructionInput::default();
        let result = estimate(&input, &PricingConfig::default());
        let advisor = canned(Ok("Price looks fair."));

        assert_eq!(advise(&advisor, &input, &result), "Price looks fair.");
        assert!(advisor.seen.borrow().is_some());
    }

    #[test]
    fn failures_become_the_fallback() {
        let input = ConstructionInput::default();
        let result = estimate(&input, &PricingConfig::default());

        assert_eq!(advise(&canned(Err(())), &input, &result), FALLBACK_MESSAGE);
        assert_eq!(advise(&canned(Ok("  ")), &input, &result), FALLBACK_MESSAGE);
        assert_eq!(advise(&DisabledAdvisor, &input, &result), FALLBACK_MESSAGE);
    }

    #[test]
    fn advising_leaves_the_result_alone() {
        let input = ConstructionInput::default();
        let result = estimate(&input, &PricingConfig::default());
        let before = result.clone();

        let _ = advise(&canned(Err(())), &input, &result);
        assert_eq!(result, before);
    }
}
