//! Shared text utilities: the immutable [`Lexicon`] and whitespace helpers.

pub mod lexicon;
pub mod stopwords;

pub use lexicon::Lexicon;
pub use stopwords::STOPWORDS;

/// Whitespace-token count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First `max_words` whitespace tokens, joined by single spaces.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapse every whitespace run to a single space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove duplicates, keeping the first occurrence of each item.
pub fn dedupe_preserve_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Strip trailing periods and terminate with exactly one.
pub fn ensure_period(text: &str) -> String {
    format!("{}.", text.trim_end_matches('.'))
}
