//! Loads weight configurations from JSON or CSV files.
//!
//! JSON catalogs are an array of `{ "name", "weights": { key: number }, "negativeMarking" }`
//! objects. CSV catalogs carry a `name` column, one column per factor key, and an optional
//! `negativeMarking` column.

use super::{validate_all, ConfigValidationError, WeightConfiguration, WeightConfigurationSpec};
use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;
use tracing::debug;

const NAME_COLUMN: &str = "name";
const NEGATIVE_MARKING_COLUMN: &str = "negativeMarking";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read weight catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON weight catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSV weight catalog: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV weight catalog is missing the 'name' column")]
    MissingNameColumn,
    #[error("CSV weight catalog repeats the '{column}' column")]
    DuplicateColumn { column: String },
    #[error("row {row}: '{value}' is not a valid value for '{column}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },
    #[error("unsupported weight catalog format '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Validation(#[from] ConfigValidationError),
    #[error("no preset named '{0}'")]
    UnknownPreset(String),
}

pub fn load_configurations<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<WeightConfiguration>, CatalogError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let configurations = match extension.as_str() {
        "json" => from_json_reader(std::fs::File::open(path)?)?,
        "csv" => from_csv_reader(std::fs::File::open(path)?)?,
        _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string())),
    };

    debug!(
        path = %path.display(),
        configurations = configurations.len(),
        "loaded weight catalog"
    );
    Ok(configurations)
}

pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<WeightConfiguration>, CatalogError> {
    let specs: Vec<WeightConfigurationSpec> = serde_json::from_reader(reader)?;
    Ok(validate_all(specs)?)
}

pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<WeightConfiguration>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = reader.headers()?.clone();
    if !headers.iter().any(|header| header == NAME_COLUMN) {
        return Err(CatalogError::MissingNameColumn);
    }
    let mut seen = HashSet::with_capacity(headers.len());
    if let Some(column) = headers.iter().find(|header| !seen.insert(*header)) {
        return Err(CatalogError::DuplicateColumn {
            column: column.to_string(),
        });
    }

    let mut specs = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = index + 1;
        let mut name = String::new();
        let mut negative_marking = false;
        let mut weights = BTreeMap::new();

        for (column, value) in headers.iter().zip(record.iter()) {
            match column {
                NAME_COLUMN => name = value.to_string(),
                NEGATIVE_MARKING_COLUMN => {
                    negative_marking =
                        parse_flag(value).ok_or_else(|| CatalogError::InvalidValue {
                            row,
                            column: column.to_string(),
                            value: value.to_string(),
                        })?;
                }
                _ => {
                    let weight = value.parse::<f64>().map_err(|_| CatalogError::InvalidValue {
                        row,
                        column: column.to_string(),
                        value: value.to_string(),
                    })?;
                    weights.insert(column.to_string(), weight);
                }
            }
        }

        specs.push(WeightConfigurationSpec {
            name,
            weights,
            negative_marking,
        });
    }

    Ok(validate_all(specs)?)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "0" => Some(false),
        "true" | "yes" | "1" => Some(true),
        _ => None,
    }
}
