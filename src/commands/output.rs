use serde::Serialize;
use thiserror::Error;

use crate::commands::base_commands::OutputFormat;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to serialize yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output file: {0}")]
    Write(#[from] std::io::Error),
}

pub fn serialize_output<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, OutputError> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
    })
}

pub fn write_output<T: Serialize>(
    path: &str,
    value: &T,
    format: OutputFormat,
) -> Result<(), OutputError> {
    let contents = serialize_output(value, format)?;
    std::fs::write(path, contents)?;
    Ok(())
}
