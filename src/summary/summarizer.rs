use std::collections::HashSet;

use crate::section::ProcessedSection;
use crate::summary::accumulator::SummaryAccumulator;
use crate::summary::budgeting::apply_word_budget;
use crate::text::{collapse_whitespace, ensure_period, truncate_words, word_count, Lexicon};

/// Bullets placed right after the title.
pub const LEAD_BULLETS: usize = 2;

/// Keywords a body sentence may match to be picked.
pub const TOP_KEYWORDS_FOR_SENTENCES: usize = 5;

/// Sentences above this many words get parentheticals and trailing clauses cut.
pub const LONG_SENTENCE_WORDS: usize = 35;

/// Greedy extractive summarizer.
///
/// Order of assembly: informative title, the lead bullets, keyword-bearing
/// body sentences, then the remaining bullets. The last two stages only run
/// while the summary is shorter than `min_words`; the result is then cut back
/// to whole sentences within `max_words`. The cut re-splits with the same
/// splitter as the body stage, so kept sentences lose their terminators.
pub struct Summarizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Summarizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn summarize(
        &self,
        section: &ProcessedSection,
        keywords: &[String],
        min_words: usize,
        max_words: usize,
    ) -> String {
        if section.is_too_short() {
            return if word_count(&section.text) > max_words {
                truncate_words(&section.text, max_words)
            } else {
                section.text.clone()
            };
        }

        let acc = SummaryAccumulator::new();
        let acc = self.add_title(acc, section);
        let acc = self.add_bullets(acc, section.bullets.iter().take(LEAD_BULLETS), None);
        let acc = self.add_keyword_sentences(acc, section, keywords, min_words);
        let acc = self.add_bullets(acc, section.bullets.iter().skip(LEAD_BULLETS), Some(min_words));

        let text = if acc.words() > max_words {
            let budget = apply_word_budget(self.lexicon.split_sentences(&acc.text()), max_words);
            tracing::trace!(
                section_id = section.id.as_str(),
                words_used = budget.words_used,
                sentences_excluded = budget.sentences_excluded_by_budget,
                "summary cut to word budget"
            );
            budget.kept.join(" ")
        } else {
            acc.text()
        };

        collapse_whitespace(&text)
    }

    fn add_title(&self, acc: SummaryAccumulator, section: &ProcessedSection) -> SummaryAccumulator {
        let title = &section.title;
        if !self.lexicon.is_informative_title(title) {
            return acc;
        }
        // An empty title still counts: it adds "." and its empty used form
        // overlaps every body sentence.
        acc.push(ensure_period(title), SummaryAccumulator::normalize(title))
    }

    // With `stop_at` set, stops as soon as the summary reaches that many words.
    fn add_bullets<'b, I>(
        &self,
        mut acc: SummaryAccumulator,
        bullets: I,
        stop_at: Option<usize>,
    ) -> SummaryAccumulator
    where
        I: IntoIterator<Item = &'b String>,
    {
        if stop_at.is_some_and(|min_words| acc.words() >= min_words) {
            return acc;
        }

        for bullet in bullets {
            let normalized = SummaryAccumulator::normalize(bullet);
            if normalized.is_empty() || acc.is_used(&normalized) {
                continue;
            }
            acc = acc.push(ensure_period(bullet), normalized);
            if stop_at.is_some_and(|min_words| acc.words() >= min_words) {
                break;
            }
        }
        acc
    }

    fn add_keyword_sentences(
        &self,
        mut acc: SummaryAccumulator,
        section: &ProcessedSection,
        keywords: &[String],
        min_words: usize,
    ) -> SummaryAccumulator {
        if acc.words() >= min_words {
            return acc;
        }

        let body = section
            .lines
            .iter()
            .filter(|line| !self.lexicon.is_bullet_line(line))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");

        let top_keywords: HashSet<&str> = keywords
            .iter()
            .take(TOP_KEYWORDS_FOR_SENTENCES)
            .map(String::as_str)
            .collect();

        for sentence in self.lexicon.split_sentences(&body) {
            let normalized = SummaryAccumulator::normalize(&sentence);
            if acc.overlaps(&normalized) {
                continue;
            }

            let tokens = self.lexicon.tokenize_words(&sentence);
            let has_keyword = tokens.iter().any(|t| top_keywords.contains(t.as_str()));
            // Content-starved: take anything until half the minimum is reached.
            if !has_keyword && acc.words() >= min_words / 2 {
                continue;
            }

            let mut fragment = if word_count(&sentence) > LONG_SENTENCE_WORDS {
                self.lexicon.trim_long_sentence(&sentence)
            } else {
                sentence
            };
            if fragment.is_empty() {
                continue;
            }
            if !fragment.ends_with('.') {
                fragment.push('.');
            }

            acc = acc.push(fragment, normalized);
            if acc.words() >= min_words {
                break;
            }
        }
        acc
    }
}
