//! Validated weight configurations for the pairwise scorer.

pub mod catalog;
pub mod presets;

use super::domain::PreferenceFactor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const COMPLEMENTARY_MATCH_KEY: &str = "complementaryMatch";

/// Closed set of weight-table keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FactorKey {
    ComplementaryMatch,
    Preference(PreferenceFactor),
}

impl FactorKey {
    pub const COUNT: usize = PreferenceFactor::COUNT + 1;

    pub fn ordered() -> [Self; Self::COUNT] {
        let preferences = PreferenceFactor::ordered();
        let mut keys = [Self::ComplementaryMatch; Self::COUNT];
        for (slot, factor) in keys.iter_mut().skip(1).zip(preferences) {
            *slot = Self::Preference(factor);
        }
        keys
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::ComplementaryMatch => COMPLEMENTARY_MATCH_KEY,
            Self::Preference(factor) => factor.key(),
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|key| key.as_key() == raw)
    }
}

impl fmt::Display for FactorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Validation errors raised while building a weight configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("weight configuration name must not be empty")]
    EmptyName,
    #[error("configuration '{configuration}' is missing factor '{key}'")]
    MissingFactor {
        configuration: String,
        key: &'static str,
    },
    #[error("configuration '{configuration}' contains unknown factor '{key}'")]
    UnknownFactor { configuration: String, key: String },
    #[error("configuration '{configuration}' has invalid weight {value} for '{key}' (must be finite and non-negative)")]
    InvalidWeight {
        configuration: String,
        key: &'static str,
        value: f64,
    },
}

/// Weight table keyed by the closed factor enumeration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorWeights {
    complementary_match: f64,
    preferences: [f64; PreferenceFactor::COUNT],
}

impl FactorWeights {
    pub fn complementary_match(&self) -> f64 {
        self.complementary_match
    }

    pub fn preference(&self, factor: PreferenceFactor) -> f64 {
        self.preferences[factor.index()]
    }

    pub fn get(&self, key: FactorKey) -> f64 {
        match key {
            FactorKey::ComplementaryMatch => self.complementary_match,
            FactorKey::Preference(factor) => self.preference(factor),
        }
    }

    /// Sum of the eight categorical weights; the score of a pair that agrees on everything
    /// before skills are counted.
    pub fn preference_total(&self) -> f64 {
        self.preferences.iter().sum()
    }

    pub fn to_map(&self) -> BTreeMap<String, f64> {
        FactorKey::ordered()
            .into_iter()
            .map(|key| (key.as_key().to_string(), self.get(key)))
            .collect()
    }
}

/// A named, validated weighting scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightConfiguration {
    name: String,
    weights: FactorWeights,
    negative_marking: bool,
}

impl WeightConfiguration {
    /// Build a configuration from a string-keyed weight map. Every recognized key must be
    /// present and no other key is accepted.
    pub fn from_factor_map(
        name: impl Into<String>,
        weights: &BTreeMap<String, f64>,
        negative_marking: bool,
    ) -> Result<Self, ConfigValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyName);
        }

        if let Some(unknown) = weights.keys().find(|key| FactorKey::from_key(key).is_none()) {
            return Err(ConfigValidationError::UnknownFactor {
                configuration: name,
                key: unknown.clone(),
            });
        }

        let mut ordered = [0.0; FactorKey::COUNT];
        for (slot, key) in ordered.iter_mut().zip(FactorKey::ordered()) {
            *slot = match weights.get(key.as_key()) {
                Some(value) => *value,
                None => {
                    return Err(ConfigValidationError::MissingFactor {
                        configuration: name,
                        key: key.as_key(),
                    })
                }
            };
        }

        Self::from_ordered(name, ordered, negative_marking)
    }

    /// Build a configuration from weights listed in `FactorKey::ordered()` order.
    pub fn from_ordered(
        name: impl Into<String>,
        ordered: [f64; FactorKey::COUNT],
        negative_marking: bool,
    ) -> Result<Self, ConfigValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyName);
        }

        for (key, value) in FactorKey::ordered().into_iter().zip(ordered) {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigValidationError::InvalidWeight {
                    configuration: name,
                    key: key.as_key(),
                    value,
                });
            }
        }

        let mut preferences = [0.0; PreferenceFactor::COUNT];
        preferences.copy_from_slice(&ordered[1..]);

        Ok(Self {
            name,
            weights: FactorWeights {
                complementary_match: ordered[0],
                preferences,
            },
            negative_marking,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weights(&self) -> &FactorWeights {
        &self.weights
    }

    pub fn negative_marking(&self) -> bool {
        self.negative_marking
    }

    /// Same weights with mismatch penalties switched on.
    pub fn with_negative_marking(&self) -> Self {
        Self {
            name: format!("{} + Negative Marking", self.name),
            weights: self.weights,
            negative_marking: true,
        }
    }

    pub fn to_spec(&self) -> WeightConfigurationSpec {
        WeightConfigurationSpec {
            name: self.name.clone(),
            weights: self.weights.to_map(),
            negative_marking: self.negative_marking,
        }
    }
}

/// Unvalidated wire shape of a configuration, as stored in JSON catalogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WeightConfigurationSpec {
    pub name: String,
    pub weights: BTreeMap<String, f64>,
    #[serde(default)]
    pub negative_marking: bool,
}

impl TryFrom<WeightConfigurationSpec> for WeightConfiguration {
    type Error = ConfigValidationError;

    fn try_from(spec: WeightConfigurationSpec) -> Result<Self, Self::Error> {
        WeightConfiguration::from_factor_map(spec.name, &spec.weights, spec.negative_marking)
    }
}

/// Validate every spec, aborting on the first malformed entry.
pub fn validate_all(
    specs: Vec<WeightConfigurationSpec>,
) -> Result<Vec<WeightConfiguration>, ConfigValidationError> {
    specs.into_iter().map(WeightConfiguration::try_from).collect()
}
