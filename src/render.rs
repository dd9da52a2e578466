//! Plain-text rendering of a [`CompressionResult`] for downstream prompting.

use crate::text::{word_count, Lexicon};
use crate::types::CompressionResult;

/// Whitespace-token cap for the rendered study text.
pub const STUDY_TEXT_WORD_CAP: usize = 8000;

const RENDERED_BULLETS: usize = 2;

/// One block per note (`## title`, up to two `• ` bullets, the summary),
/// blocks separated by a blank line.
///
/// Past `word_cap` tokens the whole text is re-joined with single spaces,
/// cut at the cap, and suffixed with `...`.
pub fn study_text(result: &CompressionResult, lexicon: &Lexicon, word_cap: usize) -> String {
    let blocks: Vec<String> = result
        .notes
        .iter()
        .filter_map(|note| {
            let mut lines = Vec::new();

            let title = note.title.trim();
            if !title.is_empty() && lexicon.is_informative_title(title) {
                lines.push(format!("## {title}"));
            }
            for bullet in note.bullets.iter().take(RENDERED_BULLETS) {
                lines.push(format!("• {bullet}"));
            }
            let summary = note.summary.trim();
            if !summary.is_empty() {
                lines.push(summary.to_string());
            }

            (!lines.is_empty()).then(|| lines.join("\n"))
        })
        .collect();

    let full_text = blocks.join("\n\n");
    if word_count(&full_text) > word_cap {
        let capped: Vec<&str> = full_text.split_whitespace().take(word_cap).collect();
        format!("{}...", capped.join(" "))
    } else {
        full_text
    }
}
