use super::{Advisor, SYSTEM_INSTRUCTION};
use crate::error::AdvisoryError;
use serde_json::{json, Value};
use std::fmt;
use std::time::Duration;
use tracing::info;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const TIMEOUT: Duration = Duration::from_secs(60);

/// Google Gemini backend with search grounding enabled.
#[derive(Clone)]
pub struct GeminiAdvisor {
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
}

impl fmt::Debug for GeminiAdvisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiAdvisor")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiAdvisor {
    /// Reads the API key from `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self, AdvisoryError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(AdvisoryError::MissingApiKey { var: API_KEY_VAR })?;
        Self::new(api_key, DEFAULT_MODEL)
    }

    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, AdvisoryError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| AdvisoryError::Network {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            api_key: api_key.into(),
            model: model.into(),
            client,
        })
    }
}

impl Advisor for GeminiAdvisor {
    fn analyze(&self, prompt: &str) -> Result<String, AdvisoryError> {
        let url = format!("{ENDPOINT}/{}:generateContent", self.model);
        let body = json!({
            "system_instruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "tools": [{ "google_search": {} }],
        });

        info!(model = %self.model, "advisor: requesting review");

        let resp = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .map_err(|e| AdvisoryError::Network {
                message: format!("request failed: {e}"),
            })?;

        let status = resp.status();
        let text = resp.text().map_err(|e| AdvisoryError::Network {
            message: format!("failed to read response: {e}"),
        })?;

        if !status.is_success() {
            return Err(AdvisoryError::Network {
                message: format!("service returned {status}"),
            });
        }

        parse_response(&text)
    }
}

/// Joins the text parts of the first candidate.
fn parse_response(body: &str) -> Result<String, AdvisoryError> {
    let parsed: Value = serde_json::from_str(body).map_err(|e| AdvisoryError::Network {
        message: format!("invalid response JSON: {e}"),
    })?;

    let text: String = parsed
        .pointer("/candidates/0/content/parts")
        .and_then(Value::as_array)
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(AdvisoryError::EmptyResponse)
    } else {
        Ok(text)
    }
}
