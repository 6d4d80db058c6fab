use crate::config::ConfigError;
use crate::matching::comparison::ComparisonError;
use crate::matching::generator::PopulationError;
use crate::matching::simulation::SimulationError;
use crate::matching::weights::catalog::CatalogError;
use crate::matching::weights::ConfigValidationError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Serialization(serde_json::Error),
    Catalog(CatalogError),
    Validation(ConfigValidationError),
    Population(PopulationError),
    Simulation(SimulationError),
    Comparison(ComparisonError),
    UnknownProfile { id: u32, population_size: usize },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Serialization(err) => write!(f, "serialization error: {}", err),
            AppError::Catalog(err) => write!(f, "weight catalog error: {}", err),
            AppError::Validation(err) => write!(f, "invalid weight configuration: {}", err),
            AppError::Population(err) => write!(f, "population error: {}", err),
            AppError::Simulation(err) => write!(f, "simulation error: {}", err),
            AppError::Comparison(err) => write!(f, "comparison error: {}", err),
            AppError::UnknownProfile {
                id,
                population_size,
            } => write!(
                f,
                "profile {} does not exist in a population of {} (ids start at 1)",
                id, population_size
            ),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Serialization(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Validation(err) => Some(err),
            AppError::Population(err) => Some(err),
            AppError::Simulation(err) => Some(err),
            AppError::Comparison(err) => Some(err),
            AppError::UnknownProfile { .. } => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<ConfigValidationError> for AppError {
    fn from(value: ConfigValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<PopulationError> for AppError {
    fn from(value: PopulationError) -> Self {
        Self::Population(value)
    }
}

impl From<SimulationError> for AppError {
    fn from(value: SimulationError) -> Self {
        Self::Simulation(value)
    }
}

impl From<ComparisonError> for AppError {
    fn from(value: ComparisonError) -> Self {
        Self::Comparison(value)
    }
}
