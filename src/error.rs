//! Error types for the construction estimator.
//!
//! The estimation engine itself is total and has no error type; everything
//! here belongs to the file-loading, export and advisory edges.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a pricing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the pricing file from disk.
    #[error("failed to read pricing file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid JSON or a table is missing a key.
    #[error("invalid pricing file '{path}': {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A table parsed but holds a value the engine cannot price with.
    #[error("invalid pricing value: {message}")]
    InvalidValue { message: String },
}

/// Errors that can occur when loading a construction input record.
#[derive(Debug, Error)]
pub enum InputError {
    /// Failed to read the input file from disk.
    #[error("failed to read input file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A field has the wrong type or an unknown enum value.
    #[error("invalid input file '{path}': {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Errors that can occur when exporting an estimate.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

/// Errors raised by an advisory backend. Never reach the estimate.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    /// No API credential in the environment.
    #[error("advisory API key is missing (set {var})")]
    MissingApiKey { var: &'static str },

    /// Transport or service failure.
    #[error("advisory request failed: {message}")]
    Network { message: String },

    /// The service answered without any text.
    #[error("advisory service returned an empty response")]
    EmptyResponse,

    /// The binary was built without an advisory backend.
    #[error("advisory backend not enabled in this build")]
    Disabled,
}
