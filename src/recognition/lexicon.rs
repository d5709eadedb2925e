use regex::Regex;

use crate::recognition::{OrganizationRecognizer, RecognitionError};

/// Corporate designators that close an organization name.
const DESIGNATORS: [&str; 12] = [
    "Inc",
    "LLC",
    "Corp",
    "Corporation",
    "Ltd",
    "Co",
    "Company",
    "Technologies",
    "Group",
    "Holdings",
    "Partners",
    "Labs",
];

/// Rule-based organization recognizer.
///
/// Tags capitalized token runs that end in a corporate designator
/// ("Traba Inc", "Acme Staffing Group") plus an optional lexicon of known
/// organization names matched as whole words. Construction is fallible and a
/// failure is fatal for the engine; there is no degraded mode without a
/// recognizer.
pub struct LexiconRecognizer {
    designator_run: Regex,
    known_names: Vec<(String, Regex)>,
}

impl LexiconRecognizer {
    pub fn try_new() -> Result<Self, RecognitionError> {
        Self::with_known_names(std::iter::empty::<&str>())
    }

    /// Build a recognizer that additionally tags the given organization names
    /// wherever they occur as whole words.
    pub fn with_known_names<I, S>(names: I) -> Result<Self, RecognitionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let designators = DESIGNATORS.join("|");
        let pattern = format!(
            r"\b[A-Z][\w&'-]*(?:\s+(?:[A-Z][\w&'-]*|of|and|the)){{0,5}}\s+(?:{designators})\b\.?"
        );
        let designator_run = Regex::new(&pattern)
            .map_err(|e| RecognitionError::Initialization(e.to_string()))?;

        let mut known_names = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            let word_pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(name)))
                .map_err(|e| RecognitionError::Initialization(e.to_string()))?;
            known_names.push((name.to_string(), word_pattern));
        }

        Ok(Self {
            designator_run,
            known_names,
        })
    }
}

impl OrganizationRecognizer for LexiconRecognizer {
    fn organizations(&self, text: &str) -> Result<Vec<String>, RecognitionError> {
        let mut found: Vec<String> = self
            .designator_run
            .find_iter(text)
            .map(|m| m.as_str().trim_end_matches('.').to_string())
            .collect();

        for (name, pattern) in &self.known_names {
            if pattern.is_match(text) {
                found.push(name.clone());
            }
        }

        Ok(found)
    }
}
