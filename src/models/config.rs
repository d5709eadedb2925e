//! Configuration model loaded from external sources.

use serde::Deserialize;
use thiserror::Error;

use crate::DEFAULT_MIN_SCORE;
use crate::domain::profile::EntityProfile;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Read(#[from] config::ConfigError),
    #[error("entity at position {0} has an empty name")]
    EmptyName(usize),
    #[error("duplicate entity name: {0}")]
    DuplicateName(String),
    #[error("entity {0} has no industry terms and no company identifiers")]
    NoMatchableTerms(String),
    #[error("threshold {value} for {scope} is outside [0, 1]")]
    ThresholdOutOfRange { scope: String, value: f64 },
}

/// Engine configuration: one profile record per tracked entity.
#[derive(Clone, Debug, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_min_score")]
    pub default_min_score: f64,
    #[serde(default)]
    pub entities: Vec<EntityProfileConfig>,
}

fn default_min_score() -> f64 {
    DEFAULT_MIN_SCORE
}

#[derive(Clone, Debug, Deserialize)]
pub struct EntityProfileConfig {
    pub name: String,
    #[serde(default)]
    pub industry_terms: Vec<String>,
    #[serde(default)]
    pub company_identifiers: Vec<String>,
    /// Reserved for a future scoring signal; loaded but unused.
    #[serde(default)]
    pub founders: Vec<String>,
    pub min_score: Option<f64>,
}

impl EngineConfig {
    /// Load and validate engine configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let parsed: EngineConfig = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?
            .try_deserialize()?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Rejects configurations that could not contribute matchable signals:
    /// every entity needs a name and at least one term or identifier list,
    /// and all thresholds must lie in [0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.default_min_score) {
            return Err(ConfigError::ThresholdOutOfRange {
                scope: "default_min_score".to_string(),
                value: self.default_min_score,
            });
        }

        let mut seen = std::collections::HashSet::new();
        for (position, entity) in self.entities.iter().enumerate() {
            let name = entity.name.trim();
            if name.is_empty() {
                return Err(ConfigError::EmptyName(position));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(ConfigError::DuplicateName(name.to_string()));
            }
            if entity.industry_terms.is_empty() && entity.company_identifiers.is_empty() {
                return Err(ConfigError::NoMatchableTerms(name.to_string()));
            }
            if let Some(min_score) = entity.min_score
                && !(0.0..=1.0).contains(&min_score)
            {
                return Err(ConfigError::ThresholdOutOfRange {
                    scope: name.to_string(),
                    value: min_score,
                });
            }
        }

        Ok(())
    }
}

impl EntityProfileConfig {
    /// Materialize the record as a domain profile, falling back to the
    /// engine-wide threshold when no per-entity one is set.
    pub fn to_profile(&self, default_min_score: f64) -> EntityProfile {
        EntityProfile {
            industry_terms: self.industry_terms.iter().cloned().collect(),
            company_identifiers: self.company_identifiers.iter().cloned().collect(),
            founders: self.founders.iter().cloned().collect(),
            min_score: self.min_score.unwrap_or(default_min_score),
        }
    }
}
