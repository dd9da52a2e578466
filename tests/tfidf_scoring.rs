use notes_core::scoring::{inverse_document_frequency, CorpusScorer, TfIdfScorer};

fn docs(raw: &[&[&str]]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|doc| doc.iter().map(|t| t.to_string()).collect())
        .collect()
}

#[test]
fn two_section_document_frequency_example() {
    let documents = docs(&[&["alpha", "beta"], &["alpha", "gamma"]]);
    let scores = TfIdfScorer.score_corpus(&documents);

    assert_eq!(scores.len(), 2);

    // alpha: df = 2, idf = ln(1 + 2/3)
    let idf_alpha = (1.0f64 + 2.0 / 3.0).ln();
    // beta: df = 1, idf = ln(1 + 2/2) = ln(2)
    let idf_beta = 2.0f64.ln();

    assert_eq!(inverse_document_frequency(2, 2), idf_alpha);
    assert_eq!(inverse_document_frequency(2, 1), idf_beta);

    assert_eq!(scores[0]["alpha"], 0.5 * idf_alpha);
    assert_eq!(scores[1]["alpha"], 0.5 * idf_alpha);
    assert_eq!(scores[0]["beta"], 0.5 * idf_beta);
    assert_eq!(scores[1]["gamma"], 0.5 * idf_beta);

    // Bigrams share the token-count denominator
    assert_eq!(scores[0]["alpha beta"], 0.5 * idf_beta);
    assert_eq!(scores[1]["alpha gamma"], 0.5 * idf_beta);
}

#[test]
fn absent_terms_score_zero() {
    let documents = docs(&[&["alpha", "beta"], &["alpha", "gamma"]]);
    let scores = TfIdfScorer.score_corpus(&documents);

    // Only occurring terms are stored; reading an absent one as 0 matches a dense map.
    assert!(!scores[0].contains_key("gamma"));
    assert_eq!(scores[0].get("gamma").copied().unwrap_or(0.0), 0.0);
    assert_eq!(scores[0].len(), 3);
}

#[test]
fn repeated_terms_count_once_for_document_frequency() {
    let documents = docs(&[&["cell", "cell", "cell"], &["other", "words"]]);
    let scores = TfIdfScorer.score_corpus(&documents);

    // tf = 3/3, df = 1, n = 2
    assert_eq!(scores[0]["cell"], inverse_document_frequency(2, 1));
    // two "cell cell" pairs over three tokens
    assert_eq!(scores[0]["cell cell"], (2.0 / 3.0) * inverse_document_frequency(2, 1));
}

#[test]
fn empty_sections_get_empty_maps_but_count_toward_n() {
    let documents = docs(&[&["alpha"], &[]]);
    let scores = TfIdfScorer.score_corpus(&documents);

    assert!(scores[1].is_empty());
    assert_eq!(scores[0]["alpha"], inverse_document_frequency(2, 1));
}

#[test]
fn term_counts_and_document_frequencies() {
    let tokens: Vec<String> = ["a1", "b2", "a1"].iter().map(|s| s.to_string()).collect();
    let counts = TfIdfScorer::term_counts(&tokens);

    assert_eq!(counts["a1"], 2);
    assert_eq!(counts["b2"], 1);
    assert_eq!(counts["a1 b2"], 1);
    assert_eq!(counts["b2 a1"], 1);

    let df = TfIdfScorer::document_frequencies(&[counts.clone(), counts]);
    assert_eq!(df["a1"], 2);
    assert_eq!(df["b2 a1"], 2);
}

#[test]
fn empty_corpus() {
    let documents: Vec<Vec<String>> = Vec::new();
    assert!(TfIdfScorer.score_corpus(&documents).is_empty());
}
