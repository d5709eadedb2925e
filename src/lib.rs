pub mod domain;
pub mod matching;
pub mod models;
pub mod processing;
pub mod recognition;
pub mod repository;
pub mod scoring;

/// Acceptance threshold applied when an entity has no configured profile.
pub const DEFAULT_MIN_SCORE: f64 = 0.6;
