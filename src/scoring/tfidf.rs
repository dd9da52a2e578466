use std::collections::BTreeMap;

use crate::scoring::{adjacent_pairs, CorpusScorer, ScoreMap};

/// `ln(1 + n / (1 + df))`
pub fn inverse_document_frequency(documents: usize, document_frequency: usize) -> f64 {
    (1.0 + documents as f64 / (1.0 + document_frequency as f64)).ln()
}

/// TF-IDF over unigrams and adjacent bigrams.
///
/// Term frequency is normalized by the section's *token* count, so bigram
/// counts share the unigram denominator. Only terms that occur in a section
/// are stored for it: an absent term scores exactly 0, the same value a dense
/// full-vocabulary map would hold, and zero scores never reach a keyword list.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl TfIdfScorer {
    /// Occurrences of every unigram and bigram in one token sequence.
    pub fn term_counts(tokens: &[String]) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for term in tokens.iter().cloned().chain(adjacent_pairs(tokens)) {
            *counts.entry(term).or_insert(0) += 1;
        }
        counts
    }

    /// Number of documents containing each term at least once.
    pub fn document_frequencies(per_document: &[BTreeMap<String, usize>]) -> BTreeMap<String, usize> {
        let mut df = BTreeMap::new();
        for counts in per_document {
            for term in counts.keys() {
                *df.entry(term.clone()).or_insert(0) += 1;
            }
        }
        df
    }
}

impl CorpusScorer for TfIdfScorer {
    fn score_corpus<D: AsRef<[String]>>(&self, documents: &[D]) -> Vec<ScoreMap> {
        let per_document: Vec<BTreeMap<String, usize>> =
            documents.iter().map(|doc| Self::term_counts(doc.as_ref())).collect();

        // Cross-section pass: must finish before any section is scored.
        let df = Self::document_frequencies(&per_document);
        tracing::trace!(documents = documents.len(), vocabulary = df.len(), "document frequencies computed");

        let n = documents.len();

        documents
            .iter()
            .zip(&per_document)
            .map(|(doc, counts)| {
                let doc_length = doc.as_ref().len();
                if doc_length == 0 {
                    return ScoreMap::new();
                }
                counts
                    .iter()
                    .map(|(term, &count)| {
                        let tf = count as f64 / doc_length as f64;
                        let idf = inverse_document_frequency(n, df.get(term).copied().unwrap_or(0));
                        (term.clone(), tf * idf)
                    })
                    .collect()
            })
            .collect()
    }
}
