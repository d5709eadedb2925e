use std::collections::HashSet;

use crate::DEFAULT_MIN_SCORE;

/// Per-entity relevance configuration, built once from external config and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct EntityProfile {
    /// Domain vocabulary expected to co-occur with genuine mentions.
    pub industry_terms: HashSet<String>,
    /// Strong, near-unambiguous name variants (legal names, product names).
    pub company_identifiers: HashSet<String>,
    /// Reserved configuration; not part of the scoring model.
    pub founders: HashSet<String>,
    /// Minimum confidence for a document to be accepted as relevant.
    pub min_score: f64,
}

impl Default for EntityProfile {
    fn default() -> Self {
        Self {
            industry_terms: HashSet::new(),
            company_identifiers: HashSet::new(),
            founders: HashSet::new(),
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}
