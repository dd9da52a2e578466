use crate::text::word_count;

pub struct WordBudgetResult {
    pub kept: Vec<String>,
    pub words_used: usize,
    pub sentences_excluded_by_budget: usize,
}

/// Keep whole sentences in order until the next one would overflow `max_words`.
///
/// Stops at the first sentence that does not fit; later, shorter sentences are
/// not considered, so the summary never skips ahead.
pub fn apply_word_budget(sentences: Vec<String>, max_words: usize) -> WordBudgetResult {
    let total = sentences.len();
    let mut kept = Vec::new();
    let mut words_used = 0;

    for sentence in sentences {
        let sentence_words = word_count(&sentence);
        if words_used + sentence_words > max_words {
            break;
        }
        words_used += sentence_words;
        kept.push(sentence);
    }

    WordBudgetResult {
        sentences_excluded_by_budget: total - kept.len(),
        kept,
        words_used,
    }
}
