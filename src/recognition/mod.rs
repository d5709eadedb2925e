use thiserror::Error;

pub mod lexicon;

#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("recognition backend failed to initialize: {0}")]
    Initialization(String),
    #[error("recognition failed: {0}")]
    Inference(String),
}

/// A named-entity backend reporting organization mentions in text.
///
/// Implementations are constructed once at startup, shared across workers and
/// must be safe for concurrent read-only calls.
pub trait OrganizationRecognizer: Send + Sync {
    /// Surface forms of every organization recognized in `text`.
    fn organizations(&self, text: &str) -> Result<Vec<String>, RecognitionError>;
}

/// True when any recognized organization's surface form contains the entity
/// name, case-insensitively. A mention wrapped in organization-typed text is
/// strong evidence of a genuine reference rather than a person or place
/// sharing the name.
pub fn mentions_organization(
    recognizer: &dyn OrganizationRecognizer,
    text: &str,
    entity_name: &str,
) -> Result<bool, RecognitionError> {
    let needle = entity_name.to_lowercase();
    let organizations = recognizer.organizations(text)?;
    Ok(organizations
        .iter()
        .any(|org| org.to_lowercase().contains(&needle)))
}

#[cfg(test)]
mod tests {
    use super::{OrganizationRecognizer, RecognitionError, mentions_organization};

    struct FixedRecognizer(Vec<String>);

    impl OrganizationRecognizer for FixedRecognizer {
        fn organizations(&self, _text: &str) -> Result<Vec<String>, RecognitionError> {
            Ok(self.0.clone())
        }
    }

    struct FailingRecognizer;

    impl OrganizationRecognizer for FailingRecognizer {
        fn organizations(&self, _text: &str) -> Result<Vec<String>, RecognitionError> {
            Err(RecognitionError::Inference("backend down".to_string()))
        }
    }

    #[test]
    fn entity_inside_org_surface_is_recognized() {
        let recognizer = FixedRecognizer(vec!["Traba Inc".to_string()]);

        let result = mentions_organization(&recognizer, "irrelevant", "traba");

        assert!(result.expect("recognition should succeed"));
    }

    #[test]
    fn unrelated_orgs_do_not_count() {
        let recognizer = FixedRecognizer(vec!["Wonolo Corp".to_string()]);

        let result = mentions_organization(&recognizer, "irrelevant", "Traba");

        assert!(!result.expect("recognition should succeed"));
    }

    #[test]
    fn backend_failures_propagate() {
        let result = mentions_organization(&FailingRecognizer, "text", "Traba");

        assert!(matches!(result, Err(RecognitionError::Inference(_))));
    }
}
