use std::collections::BTreeMap;

use crate::scoring::{adjacent_pairs, ScoreMap};
use crate::section::ProcessedSection;
use crate::selection::ranking::{rank_keywords, ScoreFilter};
use crate::text::Lexicon;

/// Multiplier applied per emphasis/bullet occurrence.
pub const BOOST_FACTOR: f64 = 1.1;

pub const GLOBAL_KEYWORD_CAP: usize = 12;

/// Copy of `scores` with emphasized and bulleted terms boosted.
///
/// Every token occurrence inside an emphasis phrase or bullet multiplies that
/// token's score by [`BOOST_FACTOR`]; adjacent token pairs inside the same
/// phrase or bullet do the same for their bigram. Terms missing from `scores`
/// are left out.
pub fn boost_section_scores(section: &ProcessedSection, scores: &ScoreMap, lexicon: &Lexicon) -> ScoreMap {
    let mut boosted = scores.clone();

    for context in section.emphasis_phrases.iter().chain(&section.bullets) {
        let tokens = lexicon.tokenize_words(context);
        for term in tokens.iter().cloned().chain(adjacent_pairs(&tokens)) {
            if let Some(score) = boosted.get_mut(&term) {
                *score *= BOOST_FACTOR;
            }
        }
    }

    boosted
}

/// Up to `top_k` positive-scoring keywords for one section.
pub fn select_section_keywords(
    section: &ProcessedSection,
    scores: &ScoreMap,
    lexicon: &Lexicon,
    top_k: usize,
) -> Vec<String> {
    let boosted = boost_section_scores(section, scores, lexicon);
    rank_keywords(
        boosted.iter().map(|(term, &score)| (term.as_str(), score)),
        lexicon,
        top_k,
        ScoreFilter::Positive,
    )
}

/// Corpus-wide keywords from scores averaged over every section.
///
/// A term missing from a section contributes 0 to that section's share.
/// No score floor is applied here, only the stopword filter.
pub fn select_global_keywords(score_maps: &[ScoreMap], lexicon: &Lexicon) -> Vec<String> {
    if score_maps.is_empty() {
        return Vec::new();
    }

    let mut averaged: BTreeMap<&str, f64> = BTreeMap::new();
    for scores in score_maps {
        for (term, &score) in scores {
            *averaged.entry(term.as_str()).or_insert(0.0) += score;
        }
    }
    let sections = score_maps.len() as f64;
    for score in averaged.values_mut() {
        *score /= sections;
    }

    rank_keywords(averaged.into_iter(), lexicon, GLOBAL_KEYWORD_CAP, ScoreFilter::Any)
}
