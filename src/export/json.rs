use crate::error::ExportError;
use crate::model::{CalculationResult, ConstructionInput};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Input, pricing version and result as written to disk.
#[derive(Debug, Serialize)]
pub struct EstimateReport<'a> {
    pub pricing_version: &'a str,
    pub input: &'a ConstructionInput,
    pub result: &'a CalculationResult,
}

pub fn export_json<P: AsRef<Path>>(
    report: &EstimateReport<'_>,
    path: P,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = serde_json::to_string_pretty(report)?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}
