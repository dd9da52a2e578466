use crate::section::section::Section;
use crate::text::{dedupe_preserve_order, word_count, Lexicon};
use crate::types::identifiers::SectionId;

/// Sections with fewer whitespace words than this are passed through unanalyzed.
pub const MIN_ANALYZABLE_WORDS: usize = 10;

/// Only the first qualifying bullet lines are kept.
pub const MAX_BULLETS: usize = 6;

// A bullet must carry strictly more words than this once its marker is gone.
const MIN_BULLET_WORDS_EXCLUSIVE: usize = 2;

/// Everything derived from one section, created once per run and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedSection {
    pub id: SectionId,
    pub title: String,
    /// Trimmed section text.
    pub text: String,
    pub bullets: Vec<String>,
    pub emphasis_phrases: Vec<String>,
    pub tokens: Vec<String>,
    /// Trimmed non-blank lines; empty for too-short sections.
    pub lines: Vec<String>,
}

impl ProcessedSection {
    pub fn is_too_short(&self) -> bool {
        word_count(&self.text) < MIN_ANALYZABLE_WORDS
    }
}

pub struct SectionProcessor<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SectionProcessor<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn process(&self, section: &Section) -> ProcessedSection {
        let text = section.text.trim().to_string();
        let tokens = self.lexicon.tokenize_words(&text);

        if word_count(&text) < MIN_ANALYZABLE_WORDS {
            return ProcessedSection {
                id: section.id.clone(),
                title: section.title.clone(),
                text,
                bullets: Vec::new(),
                emphasis_phrases: Vec::new(),
                tokens,
                lines: Vec::new(),
            };
        }

        let lines: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        let bullets = self.extract_bullets(&lines);
        let emphasis_phrases = dedupe_preserve_order(self.lexicon.emphasis_spans(&text));

        ProcessedSection {
            id: section.id.clone(),
            title: section.title.clone(),
            text,
            bullets,
            emphasis_phrases,
            tokens,
            lines,
        }
    }

    /// Marker-stripped bullet lines with at least three words, in line order.
    pub fn extract_bullets(&self, lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .filter(|line| self.lexicon.is_bullet_line(line))
            .map(|line| self.lexicon.strip_bullet_marker(line))
            .filter(|bullet| word_count(bullet) > MIN_BULLET_WORDS_EXCLUSIVE)
            .take(MAX_BULLETS)
            .collect()
    }
}
