pub mod tfidf;

use std::collections::BTreeMap;

pub use tfidf::{inverse_document_frequency, TfIdfScorer};

/// Term -> non-negative score for one section.
///
/// Keys are single tokens or two tokens joined by one space.
pub type ScoreMap = BTreeMap<String, f64>;

/// Scores every section of a batch relative to the whole batch.
pub trait CorpusScorer {
    /// One map per token sequence, aligned by position.
    fn score_corpus<D: AsRef<[String]>>(&self, documents: &[D]) -> Vec<ScoreMap>;
}

pub fn bigram(first: &str, second: &str) -> String {
    format!("{first} {second}")
}

/// Adjacent token pairs, in order.
pub fn adjacent_pairs(tokens: &[String]) -> Vec<String> {
    tokens.windows(2).map(|w| bigram(&w[0], &w[1])).collect()
}

/// Exactly two space-separated words.
pub fn is_bigram(term: &str) -> bool {
    term.split_whitespace().count() == 2
}
