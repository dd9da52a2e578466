use notes_core::render::{study_text, STUDY_TEXT_WORD_CAP};
use notes_core::text::Lexicon;
use notes_core::types::{CompressionMeta, CompressionResult, Note};

fn note(id: &str, title: &str, bullets: &[&str], summary: &str) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        bullets: bullets.iter().map(|b| b.to_string()).collect(),
        keywords: Vec::new(),
        summary: summary.to_string(),
        word_count: summary.split_whitespace().count(),
    }
}

fn result(notes: Vec<Note>) -> CompressionResult {
    let total_words = notes.iter().map(|n| n.word_count).sum();
    CompressionResult {
        meta: CompressionMeta {
            sections: notes.len(),
            total_words,
        },
        notes,
        global_keywords: Vec::new(),
    }
}

#[test]
fn renders_title_two_bullets_and_summary_per_note() {
    let lexicon = Lexicon::new().unwrap();
    let result = result(vec![
        note("a", "Cell Biology", &["first bullet here", "second bullet here", "third bullet here"], "Cells are small."),
        note("b", "Page 4", &[], "Light drives photosynthesis."),
    ]);

    let text = study_text(&result, &lexicon, STUDY_TEXT_WORD_CAP);
    assert_eq!(
        text,
        "## Cell Biology\n• first bullet here\n• second bullet here\nCells are small.\n\nLight drives photosynthesis."
    );
}

#[test]
fn caps_total_words_with_ellipsis() {
    let lexicon = Lexicon::new().unwrap();
    let result = result(vec![note("a", "", &[], "one two three four five six")]);

    assert_eq!(study_text(&result, &lexicon, 4), "one two three four...");
    assert_eq!(study_text(&result, &lexicon, 6), "one two three four five six");
}

#[test]
fn empty_result_renders_empty_text() {
    let lexicon = Lexicon::new().unwrap();
    assert_eq!(study_text(&CompressionResult::empty(), &lexicon, STUDY_TEXT_WORD_CAP), "");
}
