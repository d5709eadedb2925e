use crate::domain::profile::EntityProfile;

pub mod profile;

/// Read access to per-entity relevance profiles.
pub trait ProfileReader: Send + Sync {
    /// Returns the configured profile for `entity_name`, or a default profile
    /// carrying the standard threshold when the entity is unknown. Missing
    /// configuration is a degraded path, not an error.
    fn get_profile(&self, entity_name: &str) -> EntityProfile;
}
