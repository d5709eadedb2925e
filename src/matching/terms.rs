use std::collections::HashSet;

/// Case-insensitive substring presence of configured terms in a document.
///
/// Returns the matched terms in their configured casing. Presence only; the
/// scorer works with match ratios, not occurrence counts.
pub fn matched_terms<'a, I>(text: &str, terms: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let haystack = text.to_lowercase();
    terms
        .into_iter()
        .filter(|term| !term.is_empty() && haystack.contains(&term.to_lowercase()))
        .cloned()
        .collect()
}
