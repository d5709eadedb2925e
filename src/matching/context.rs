use regex::Regex;

/// Characters kept on each side of a mention when building context windows.
pub const CONTEXT_WINDOW: usize = 50;

/// A bounded text window around one entity mention. Transient: produced per
/// scoring call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSnippet {
    pub text: String,
    /// Byte range of the window within the source document.
    pub start: usize,
    pub end: usize,
}

/// Compile the case-insensitive whole-word pattern for an entity name.
///
/// The name is matched literally, so "Traba" does not match "Trabant".
pub fn mention_pattern(entity_name: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(entity_name)))
}

/// Number of whole-word mentions of the entity in `text`.
pub fn count_mentions(text: &str, pattern: &Regex) -> usize {
    pattern.find_iter(text).count()
}

/// Lazily yields one clipped window per mention, left to right.
///
/// Windows span `window` characters each side of the match, clipped to the
/// text bounds. Recomputed on every call; nothing is cached between calls.
pub fn extract_contexts<'a>(
    text: &'a str,
    pattern: &'a Regex,
    window: usize,
) -> impl Iterator<Item = ContextSnippet> + 'a {
    pattern.find_iter(text).map(move |m| {
        let start = clip_left(text, m.start(), window);
        let end = clip_right(text, m.end(), window);
        ContextSnippet {
            text: text[start..end].to_string(),
            start,
            end,
        }
    })
}

fn clip_left(text: &str, from: usize, window: usize) -> usize {
    let mut idx = from;
    for _ in 0..window {
        match text[..idx].chars().next_back() {
            Some(c) => idx -= c.len_utf8(),
            None => break,
        }
    }
    idx
}

fn clip_right(text: &str, from: usize, window: usize) -> usize {
    let mut idx = from;
    for _ in 0..window {
        match text[idx..].chars().next() {
            Some(c) => idx += c.len_utf8(),
            None => break,
        }
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::{ContextSnippet, count_mentions, extract_contexts, mention_pattern};

    #[test]
    fn whole_word_matching_ignores_longer_words() {
        let pattern = mention_pattern("Traba").expect("valid pattern");

        assert_eq!(count_mentions("The Trabant is a car", &pattern), 0);
        assert_eq!(count_mentions("Traba and Trabant", &pattern), 1);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let pattern = mention_pattern("Traba").expect("valid pattern");

        assert_eq!(count_mentions("traba TRABA TrAbA", &pattern), 3);
    }

    #[test]
    fn short_text_yields_whole_text_window() {
        let pattern = mention_pattern("Traba").expect("valid pattern");
        let text = "Traba is hiring";

        let contexts: Vec<ContextSnippet> = extract_contexts(text, &pattern, 50).collect();

        assert_eq!(contexts.len(), 1);
        assert_eq!(contexts[0].text, text);
        assert_eq!(contexts[0].start, 0);
        assert_eq!(contexts[0].end, text.len());
    }

    #[test]
    fn long_text_is_clipped_to_window_chars() {
        let pattern = mention_pattern("Traba").expect("valid pattern");
        let text = format!("{}Traba{}", "a".repeat(100), "b".repeat(100));

        let contexts: Vec<ContextSnippet> = extract_contexts(&text, &pattern, 50).collect();

        assert_eq!(contexts.len(), 1);
        assert_eq!(contexts[0].text.len(), 50 + "Traba".len() + 50);
        assert!(contexts[0].text.starts_with("a"));
        assert!(contexts[0].text.ends_with("b"));
    }

    #[test]
    fn windows_respect_multibyte_boundaries() {
        let pattern = mention_pattern("Traba").expect("valid pattern");
        let text = format!("{}Traba{}", "é".repeat(60), "日".repeat(60));

        let contexts: Vec<ContextSnippet> = extract_contexts(&text, &pattern, 50).collect();

        assert_eq!(contexts.len(), 1);
        let window_chars = contexts[0].text.chars().count();
        assert_eq!(window_chars, 50 + "Traba".len() + 50);
    }

    #[test]
    fn contexts_come_back_left_to_right() {
        let pattern = mention_pattern("Traba").expect("valid pattern");
        let text = "Traba opened offices. Later, Traba expanded.";

        let contexts: Vec<ContextSnippet> = extract_contexts(text, &pattern, 5).collect();

        assert_eq!(contexts.len(), 2);
        assert!(contexts[0].start < contexts[1].start);
    }

    #[test]
    fn extraction_is_restartable() {
        let pattern = mention_pattern("Traba").expect("valid pattern");
        let text = "Traba raised a round. Traba is hiring.";

        let first: Vec<ContextSnippet> = extract_contexts(text, &pattern, 10).collect();
        let second: Vec<ContextSnippet> = extract_contexts(text, &pattern, 10).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn no_mentions_yields_empty_sequence() {
        let pattern = mention_pattern("Wonolo").expect("valid pattern");

        let mut contexts = extract_contexts("Nothing to see here", &pattern, 50);

        assert!(contexts.next().is_none());
    }
}
