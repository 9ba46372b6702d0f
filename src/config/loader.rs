use crate::config::PricingConfig;
use crate::error::{ConfigError, InputError};
use crate::model::ConstructionInput;
use std::path::Path;
use tracing::info;

/// Loads a pricing table from a JSON file and validates it.
///
/// Every enum-keyed table must list all variants; a missing key is reported
/// as [`ConfigError::InvalidJson`].
///
/// # Errors
///
/// Returns [`ConfigError::FileRead`] if the file cannot be read,
/// [`ConfigError::InvalidJson`] if it does not match the schema and
/// [`ConfigError::InvalidValue`] if a price or norm is negative.
///
/// # Example
///
/// ```no_run
/// use construction_estimator::config::load_pricing_file;
///
/// let pricing = load_pricing_file("pricing-2025.json")?;
/// println!("Pricing version: {}", pricing.version);
/// # Ok::<(), construction_estimator::error::ConfigError>(())
/// ```
pub fn load_pricing_file<P: AsRef<Path>>(path: P) -> Result<PricingConfig, ConfigError> {
    let path_ref = path.as_ref();
    let content = std::fs::read_to_string(path_ref).map_err(|source| ConfigError::FileRead {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let config: PricingConfig =
        serde_json::from_str(&content).map_err(|source| ConfigError::InvalidJson {
            path: path_ref.to_path_buf(),
            source,
        })?;

    config.validate()?;

    info!(
        path = %path_ref.display(),
        version = %config.version,
        "loaded pricing table"
    );
    Ok(config)
}

/// Loads a construction input record from a JSON file.
///
/// Omitted fields take [`ConstructionInput::default`] values. Numeric ranges
/// are not checked.
///
/// # Errors
///
/// Returns [`InputError::FileRead`] if the file cannot be read and
/// [`InputError::InvalidJson`] if a field has the wrong type.
pub fn load_input_file<P: AsRef<Path>>(path: P) -> Result<ConstructionInput, InputError> {
    let path_ref = path.as_ref();
    let content = std::fs::read_to_string(path_ref).map_err(|source| InputError::FileRead {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let input: ConstructionInput =
        serde_json::from_str(&content).map_err(|source| InputError::InvalidJson {
            path: path_ref.to_path_buf(),
            source,
        })?;

    info!(path = %path_ref.display(), "loaded construction input");
    Ok(input)
}
