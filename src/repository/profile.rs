use std::collections::HashMap;

use crate::domain::profile::EntityProfile;
use crate::models::config::EngineConfig;
use crate::repository::ProfileReader;

/// Profile store built once at startup from validated configuration.
///
/// Lookup is case-insensitive on the entity name.
#[derive(Debug, Clone)]
pub struct InMemoryProfileStore {
    profiles: HashMap<String, EntityProfile>,
    default_min_score: f64,
}

impl InMemoryProfileStore {
    pub fn from_config(config: &EngineConfig) -> Self {
        let profiles = config
            .entities
            .iter()
            .map(|entity| {
                (
                    entity.name.trim().to_lowercase(),
                    entity.to_profile(config.default_min_score),
                )
            })
            .collect();
        Self {
            profiles,
            default_min_score: config.default_min_score,
        }
    }

    pub fn from_profiles<I>(profiles: I, default_min_score: f64) -> Self
    where
        I: IntoIterator<Item = (String, EntityProfile)>,
    {
        Self {
            profiles: profiles
                .into_iter()
                .map(|(name, profile)| (name.trim().to_lowercase(), profile))
                .collect(),
            default_min_score,
        }
    }
}

impl ProfileReader for InMemoryProfileStore {
    fn get_profile(&self, entity_name: &str) -> EntityProfile {
        self.profiles
            .get(&entity_name.trim().to_lowercase())
            .cloned()
            .unwrap_or_else(|| EntityProfile {
                min_score: self.default_min_score,
                ..EntityProfile::default()
            })
    }
}
