use std::collections::BTreeSet;

use crate::text::word_count;

/// Fragments chosen so far plus the normalized forms already used.
///
/// Each assembly stage takes the accumulator by value and hands back the
/// updated one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryAccumulator {
    parts: Vec<String>,
    used: BTreeSet<String>,
    words: usize,
}

impl SummaryAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercased, trimmed form used for duplicate checks.
    pub fn normalize(fragment: &str) -> String {
        fragment.trim().to_lowercase()
    }

    pub fn push(mut self, fragment: String, used_as: String) -> Self {
        self.words += word_count(&fragment);
        self.parts.push(fragment);
        self.used.insert(used_as);
        self
    }

    pub fn is_used(&self, normalized: &str) -> bool {
        self.used.contains(normalized)
    }

    /// Either side contains the other, as plain substrings.
    pub fn overlaps(&self, normalized: &str) -> bool {
        self.used
            .iter()
            .any(|existing| existing.contains(normalized) || normalized.contains(existing.as_str()))
    }

    /// Word count of the joined parts.
    pub fn words(&self) -> usize {
        self.words
    }

    pub fn text(&self) -> String {
        self.parts.join(" ")
    }
}
