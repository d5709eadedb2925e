use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single scraped article or job listing handed in by a collaborator.
///
/// The filter reads `content` and writes `relevance_score`; every other field
/// is opaque passthrough that round-trips untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
}

impl Document {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            source: None,
            published_at: None,
            relevance_score: None,
        }
    }
}
