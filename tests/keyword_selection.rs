use notes_core::scoring::{CorpusScorer, ScoreMap, TfIdfScorer};
use notes_core::section::{Section, SectionProcessor};
use notes_core::selection::{
    boost_section_scores, rank_keywords, select_global_keywords, select_section_keywords,
    ScoreFilter, BOOST_FACTOR, GLOBAL_KEYWORD_CAP,
};
use notes_core::text::Lexicon;

fn lexicon() -> Lexicon {
    Lexicon::new().unwrap()
}

fn score_map(entries: &[(&str, f64)]) -> ScoreMap {
    entries.iter().map(|(t, s)| (t.to_string(), *s)).collect()
}

#[test]
fn ties_break_lexicographically() {
    let candidates = vec![("beta", 0.5), ("alpha", 0.5), ("gamma", 0.7)];
    let keywords = rank_keywords(candidates, &lexicon(), 8, ScoreFilter::Positive);
    assert_eq!(keywords, vec!["gamma", "alpha", "beta"]);
}

#[test]
fn unigram_substring_of_chosen_bigram_is_suppressed() {
    // "art" is not a token of "smart phone" but is a substring of it; it is
    // still suppressed. Downstream output depends on this exact behavior.
    let candidates = vec![("smart phone", 0.9), ("art", 0.8), ("phone", 0.7), ("camera", 0.6)];
    let keywords = rank_keywords(candidates, &lexicon(), 8, ScoreFilter::Positive);
    assert_eq!(keywords, vec!["smart phone", "camera"]);
}

#[test]
fn unigram_before_its_bigram_is_kept() {
    let candidates = vec![("atp", 0.5), ("atp energy", 0.5)];
    let keywords = rank_keywords(candidates, &lexicon(), 8, ScoreFilter::Positive);
    assert_eq!(keywords, vec!["atp", "atp energy"]);
}

#[test]
fn section_filter_drops_non_positive_scores_global_does_not() {
    let candidates = || vec![("kept", 0.4), ("zero", 0.0), ("the", 0.9)];

    let section = rank_keywords(candidates(), &lexicon(), 8, ScoreFilter::Positive);
    assert_eq!(section, vec!["kept"]);

    let global = rank_keywords(candidates(), &lexicon(), 8, ScoreFilter::Any);
    assert_eq!(global, vec!["kept", "zero"]);
}

#[test]
fn cap_is_respected() {
    let candidates: Vec<(String, f64)> = (0..20).map(|i| (format!("term{i:02}"), 1.0)).collect();
    let keywords = rank_keywords(
        candidates.iter().map(|(t, s)| (t.as_str(), *s)),
        &lexicon(),
        3,
        ScoreFilter::Positive,
    );
    assert_eq!(keywords, vec!["term00", "term01", "term02"]);
}

#[test]
fn emphasis_and_bullet_tokens_are_boosted_per_occurrence() {
    let lex = lexicon();
    let processor = SectionProcessor::new(&lex);
    let section = processor.process(&Section::new(
        "s",
        "t",
        "Intro about the **cell membrane** structure.\n- The cell membrane bounds cells\n- Every cell has one membrane here\nClosing words for padding.",
    ));
    assert_eq!(section.emphasis_phrases, vec!["cell membrane"]);
    assert_eq!(section.bullets.len(), 2);

    let scores = score_map(&[("cell", 1.0), ("membrane", 1.0), ("cell membrane", 1.0), ("intro", 1.0)]);
    let boosted = boost_section_scores(&section, &scores, &lex);

    // cell: emphasis + bullet one + bullet two
    assert_eq!(boosted["cell"], 1.0 * BOOST_FACTOR * BOOST_FACTOR * BOOST_FACTOR);
    assert_eq!(boosted["membrane"], 1.0 * BOOST_FACTOR * BOOST_FACTOR * BOOST_FACTOR);
    // adjacent in the emphasis phrase and in the first bullet only
    assert_eq!(boosted["cell membrane"], 1.0 * BOOST_FACTOR * BOOST_FACTOR);
    assert_eq!(boosted["intro"], 1.0);
    // terms missing from the map are not introduced
    assert!(!boosted.contains_key("bounds"));
}

#[test]
fn section_keywords_never_contain_stopwords_or_split_bigrams() {
    let lex = lexicon();
    let processor = SectionProcessor::new(&lex);
    let sections = vec![
        Section::new(
            "a",
            "Membranes",
            "The cell membrane is selectively permeable. The cell membrane controls transport. Proteins move ions across the membrane.",
        ),
        Section::new(
            "b",
            "Energy",
            "Photosynthesis stores light energy. Respiration releases stored energy as ATP for the cell.",
        ),
    ];
    let processed: Vec<_> = sections.iter().map(|s| processor.process(s)).collect();
    let tokens: Vec<&[String]> = processed.iter().map(|p| p.tokens.as_slice()).collect();
    let scores = TfIdfScorer.score_corpus(&tokens);

    for (section, map) in processed.iter().zip(&scores) {
        let keywords = select_section_keywords(section, map, &lex, 8);
        assert!(!keywords.is_empty());
        assert!(keywords.len() <= 8);

        for (i, keyword) in keywords.iter().enumerate() {
            assert!(!lex.is_stopword(keyword), "stopword in keywords: {keyword}");
            let words: Vec<&str> = keyword.split(' ').collect();
            if words.len() == 2 {
                for later in &keywords[i + 1..] {
                    assert!(!words.contains(&later.as_str()), "{later} repeats part of {keyword}");
                }
            }
        }
    }

    let global = select_global_keywords(&scores, &lex);
    assert!(global.len() <= GLOBAL_KEYWORD_CAP);
    assert!(global.iter().all(|k| !lex.is_stopword(k)));
}

#[test]
fn global_keywords_average_over_all_sections() {
    let lex = lexicon();
    let maps = vec![
        score_map(&[("shared", 0.2), ("only", 0.9)]),
        score_map(&[("shared", 0.6)]),
    ];
    // shared: (0.2 + 0.6) / 2 = 0.4, only: 0.9 / 2 = 0.45
    assert_eq!(select_global_keywords(&maps, &lex), vec!["only", "shared"]);
}

#[test]
fn global_keywords_empty_input() {
    assert!(select_global_keywords(&[], &lexicon()).is_empty());
}
