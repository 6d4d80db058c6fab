use std::env;
use std::fmt;

const DEFAULT_POPULATION_SIZE: usize = 500;
const DEFAULT_SEED: u64 = 42;

/// Distinguishes runtime behavior for different stages of the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the simulation harness.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub simulation: SimulationConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("PEERFUSE_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let population_size = match env::var("PEERFUSE_POPULATION_SIZE") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|size| *size >= 2)
                .ok_or(ConfigError::InvalidPopulationSize { value: raw })?,
            Err(_) => DEFAULT_POPULATION_SIZE,
        };

        let seed = match env::var("PEERFUSE_SEED") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed { value: raw })?,
            Err(_) => DEFAULT_SEED,
        };

        let workers = match env::var("PEERFUSE_WORKERS") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|workers| *workers >= 1)
                    .ok_or(ConfigError::InvalidWorkers { value: raw })?,
            ),
            Err(_) => None,
        };

        let log_level = env::var("PEERFUSE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            simulation: SimulationConfig {
                population_size,
                seed,
                workers,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Population and scheduling settings shared by every simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub population_size: usize,
    pub seed: u64,
    /// `None` runs on the global rayon pool.
    pub workers: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            seed: DEFAULT_SEED,
            workers: None,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPopulationSize { value: String },
    InvalidSeed { value: String },
    InvalidWorkers { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPopulationSize { value } => write!(
                f,
                "PEERFUSE_POPULATION_SIZE must be an integer of at least 2 (got '{value}')"
            ),
            ConfigError::InvalidSeed { value } => {
                write!(f, "PEERFUSE_SEED must be a valid u64 (got '{value}')")
            }
            ConfigError::InvalidWorkers { value } => write!(
                f,
                "PEERFUSE_WORKERS must be a positive integer (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
