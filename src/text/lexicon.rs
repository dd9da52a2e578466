use std::collections::HashSet;

use regex::Regex;

use crate::text::stopwords::STOPWORDS;
use crate::types::CompressError;

/// Process-wide text constants: the stopword set and every compiled pattern.
///
/// Built once per [`Compressor`](crate::compression::Compressor) and only ever
/// read afterwards, so it can be shared freely between sections.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: HashSet<&'static str>,
    word: Regex,
    bullet: Regex,
    emphasis: Regex,
    sentence_end: Regex,
    parenthetical: Regex,
    trailing_clause: Regex,
    page_title: Regex,
}

impl Lexicon {
    pub fn new() -> Result<Self, CompressError> {
        Ok(Self {
            stopwords: STOPWORDS.iter().copied().collect(),
            word: Regex::new(r"\w+")?,
            bullet: Regex::new(r"^\s*[-•*·–—→>]\s+|^\s*\d+[.)]\s+")?,
            emphasis: Regex::new(r"\*\*([^*]+)\*\*|\*([^*]+)\*|_([^_]+)_")?,
            sentence_end: Regex::new(r"[.!?]+")?,
            parenthetical: Regex::new(r"\([^)]*\)")?,
            trailing_clause: Regex::new(r"[;—].*$")?,
            page_title: Regex::new(r"(?i)^\s*page\s+\d+\s*$")?,
        })
    }

    pub fn is_stopword(&self, term: &str) -> bool {
        self.stopwords.contains(term)
    }

    /// Lowercased word-character runs, minus stopwords and single characters.
    /// Order of occurrence is kept; duplicates are not removed.
    pub fn tokenize_words(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.word
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|w| w.chars().count() > 1 && !self.is_stopword(w))
            .map(str::to_string)
            .collect()
    }

    /// A line starting with a bullet glyph or `N.`/`N)` followed by whitespace.
    pub fn is_bullet_line(&self, line: &str) -> bool {
        self.bullet.is_match(line)
    }

    pub fn strip_bullet_marker(&self, line: &str) -> String {
        self.bullet.replace(line, "").trim().to_string()
    }

    /// Trimmed, non-empty spans wrapped in `**`, `*` or `_`, in text order.
    /// The first matching alternative wins for each occurrence.
    pub fn emphasis_spans(&self, text: &str) -> Vec<String> {
        self.emphasis
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
            .map(|m| m.as_str().trim().to_string())
            .filter(|phrase| !phrase.is_empty())
            .collect()
    }

    /// Sentence bodies with their terminating punctuation removed.
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        self.sentence_spans(text)
            .into_iter()
            .map(|body| body.trim().to_string())
            .filter(|body| !body.is_empty())
            .collect()
    }

    // A terminator is a maximal run of `.`, `!`, `?` followed by whitespace or end of text.
    fn sentence_spans<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut spans = Vec::new();
        let mut start = 0;

        for m in self.sentence_end.find_iter(text) {
            let rest = &text[m.end()..];
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                spans.push(&text[start..m.start()]);
                start = m.end();
            }
        }
        spans.push(&text[start..]);

        spans
    }

    /// Drop parenthetical spans and any clause after a semicolon or em-dash.
    pub fn trim_long_sentence(&self, sentence: &str) -> String {
        let without_parens = self.parenthetical.replace_all(sentence, "");
        let without_clause = self.trailing_clause.replace_all(&without_parens, "");
        without_clause.trim().to_string()
    }

    /// Anything except a bare `Page <N>` title.
    pub fn is_informative_title(&self, title: &str) -> bool {
        !self.page_title.is_match(title)
    }
}
