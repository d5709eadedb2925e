use std::sync::Arc;

use thiserror::Error;

use crate::matching::context::{self, CONTEXT_WINDOW, ContextSnippet};
use crate::matching::terms::matched_terms;
use crate::recognition::{OrganizationRecognizer, RecognitionError, mentions_organization};
use crate::repository::ProfileReader;

/// Signal weights for the final confidence. They sum to 1.0, which together
/// with the per-signal caps keeps confidence inside [0, 1].
const NAME_FREQUENCY_WEIGHT: f64 = 0.15;
const ORG_ENTITY_WEIGHT: f64 = 0.25;
const INDUSTRY_TERMS_WEIGHT: f64 = 0.30;
const IDENTIFIERS_WEIGHT: f64 = 0.30;

/// How many context windows are offered to the recognizer per document.
const ORG_CHECK_LIMIT: usize = 3;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("invalid mention pattern for entity {entity}: {source}")]
    Pattern {
        entity: String,
        source: regex::Error,
    },
    #[error(transparent)]
    Recognition(#[from] RecognitionError),
    #[error("scoring task failed: {0}")]
    Task(String),
}

/// Result of scoring one document against one entity.
#[derive(Debug, Clone)]
pub struct ScoreOutcome {
    pub accepted: bool,
    pub confidence: f64,
    pub contexts: Vec<ContextSnippet>,
}

impl ScoreOutcome {
    fn rejected() -> Self {
        Self {
            accepted: false,
            confidence: 0.0,
            contexts: Vec::new(),
        }
    }
}

/// Combines mention frequency, organization recognition and term matching
/// into one confidence decision. The recognizer is an injected, shared
/// backend; the scorer itself holds no mutable state, so identical inputs
/// always produce identical outcomes.
pub struct RelevanceScorer<P> {
    profiles: P,
    recognizer: Arc<dyn OrganizationRecognizer>,
}

impl<P: ProfileReader> RelevanceScorer<P> {
    pub fn new(profiles: P, recognizer: Arc<dyn OrganizationRecognizer>) -> Self {
        Self {
            profiles,
            recognizer,
        }
    }

    /// Score `text` for `entity_name`. A caller-supplied `threshold` overrides
    /// the profile's `min_score`.
    ///
    /// Zero whole-word mentions is an absolute gate: no other signal can
    /// compensate, the document is rejected with confidence 0.
    pub fn score(
        &self,
        text: &str,
        entity_name: &str,
        threshold: Option<f64>,
    ) -> Result<ScoreOutcome, ScoreError> {
        if text.is_empty() || entity_name.trim().is_empty() {
            return Ok(ScoreOutcome::rejected());
        }

        let profile = self.profiles.get_profile(entity_name);
        let threshold = threshold.unwrap_or(profile.min_score);

        let pattern = context::mention_pattern(entity_name).map_err(|source| {
            ScoreError::Pattern {
                entity: entity_name.to_string(),
                source,
            }
        })?;

        let mentions = context::count_mentions(text, &pattern);
        if mentions == 0 {
            return Ok(ScoreOutcome::rejected());
        }

        let contexts: Vec<ContextSnippet> =
            context::extract_contexts(text, &pattern, CONTEXT_WINDOW).collect();
        if contexts.is_empty() {
            return Ok(ScoreOutcome::rejected());
        }

        let mut org_recognized = false;
        for snippet in contexts.iter().take(ORG_CHECK_LIMIT) {
            if mentions_organization(self.recognizer.as_ref(), &snippet.text, entity_name)? {
                org_recognized = true;
                break;
            }
        }

        let name_frequency = name_frequency_score(mentions);
        let org_entity = if org_recognized { 0.7 } else { 0.0 };

        let industry_matches = matched_terms(text, &profile.industry_terms).len();
        let identifier_matches = matched_terms(text, &profile.company_identifiers).len();
        let industry_terms = industry_score(industry_matches, profile.industry_terms.len());
        let identifiers = identifier_score(identifier_matches, profile.company_identifiers.len());

        let confidence = name_frequency * NAME_FREQUENCY_WEIGHT
            + org_entity * ORG_ENTITY_WEIGHT
            + industry_terms * INDUSTRY_TERMS_WEIGHT
            + identifiers * IDENTIFIERS_WEIGHT;

        Ok(ScoreOutcome {
            accepted: confidence >= threshold,
            confidence,
            contexts,
        })
    }
}

/// Saturating logarithmic frequency signal. The curve approaches 0.7 without
/// reaching it, so frequency alone can never drive an accept decision.
fn name_frequency_score(mentions: usize) -> f64 {
    (0.2 + 0.5 * ((1 + mentions) as f64).ln() / 11f64.ln()).min(0.7)
}

fn industry_score(matches: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (0.8 * matches as f64 / total as f64).min(0.8)
    }
}

/// A single identifier hit already carries half the signal; further hits add
/// proportionally.
fn identifier_score(matches: usize, total: usize) -> f64 {
    if matches == 0 || total == 0 {
        0.0
    } else {
        (0.5 + 0.5 * matches as f64 / total as f64).min(1.0)
    }
}
