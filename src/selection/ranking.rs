use std::cmp::Ordering;
use std::collections::HashSet;

use crate::scoring::is_bigram;
use crate::text::Lexicon;

/// Which scores may enter a keyword list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreFilter {
    /// Only `score > 0`. Used for per-section lists.
    Positive,
    /// Any score. Used for the global list.
    Any,
}

/// Sort globally by (score desc, term asc).
pub fn sort_by_score<'a, I>(candidates: I) -> Vec<(&'a str, f64)>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut sorted: Vec<(&str, f64)> = candidates.into_iter().collect();
    sorted.sort_by(|a, b| {
        let score_cmp = b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal);
        if score_cmp != Ordering::Equal {
            score_cmp
        } else {
            a.0.cmp(b.0)
        }
    });

    debug_assert!(sorted
        .windows(2)
        .all(|w| w[0].1 > w[1].1 || (w[0].1 == w[1].1 && w[0].0 <= w[1].0)));

    sorted
}

/// Walk candidates in score order and keep at most `cap` keywords.
///
/// Bigrams are always accepted. A unigram is accepted once, and only when it
/// is not a substring of a bigram already in the list. The check is on raw
/// characters, not token boundaries: `"art"` is suppressed by `"smart phone"`.
pub fn rank_keywords<'a, I>(
    candidates: I,
    lexicon: &Lexicon,
    cap: usize,
    filter: ScoreFilter,
) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut keywords: Vec<String> = Vec::new();
    let mut seen_unigrams: HashSet<&str> = HashSet::new();

    for (term, score) in sort_by_score(candidates) {
        if keywords.len() >= cap {
            break;
        }
        if lexicon.is_stopword(term) {
            continue;
        }
        if filter == ScoreFilter::Positive && score <= 0.0 {
            continue;
        }

        if is_bigram(term) {
            keywords.push(term.to_string());
        } else if term.split_whitespace().count() == 1 && !seen_unigrams.contains(term) {
            let covered = keywords
                .iter()
                .filter(|existing| existing.contains(' '))
                .any(|existing| existing.contains(term));
            if !covered {
                keywords.push(term.to_string());
                seen_unigrams.insert(term);
            }
        }
    }

    keywords
}
