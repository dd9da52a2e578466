use std::collections::BTreeSet;

use tracing::debug;

use crate::config::CompressConfig;
use crate::scoring::{CorpusScorer, TfIdfScorer};
use crate::section::{ProcessedSection, Section, SectionProcessor};
use crate::selection::{select_global_keywords, select_section_keywords};
use crate::summary::Summarizer;
use crate::text::{word_count, Lexicon};
use crate::types::{
    CompressError, CompressionDiagnostics, CompressionMeta, CompressionOutcome, CompressionResult,
    Note,
};

/// Batch coordinator: sections in, study notes out.
pub struct Compressor<S = TfIdfScorer> {
    config: CompressConfig,
    lexicon: Lexicon,
    scorer: S,
}

impl Compressor<TfIdfScorer> {
    pub fn new(config: CompressConfig) -> Result<Self, CompressError> {
        Self::with_scorer(config, TfIdfScorer)
    }
}

impl<S> Compressor<S>
where
    S: CorpusScorer,
{
    /// Any configuration is accepted; only building the [`Lexicon`] can fail.
    pub fn with_scorer(config: CompressConfig, scorer: S) -> Result<Self, CompressError> {
        Ok(Self {
            config,
            lexicon: Lexicon::new()?,
            scorer,
        })
    }

    pub fn compress(&self, sections: &[Section]) -> Result<CompressionResult, CompressError> {
        Ok(self.compress_with_diagnostics(sections)?.result)
    }

    #[tracing::instrument(
        skip(self, sections),
        fields(
            sections = sections.len(),
            min_words = self.config.min_words,
            max_words = self.config.max_words,
            top_k = self.config.top_k_keywords
        )
    )]
    pub fn compress_with_diagnostics(
        &self,
        sections: &[Section],
    ) -> Result<CompressionOutcome, CompressError> {
        check_section_ids(sections)?;

        if sections.is_empty() {
            return Ok(CompressionOutcome {
                result: CompressionResult::empty(),
                diagnostics: CompressionDiagnostics::default(),
            });
        }

        // 1. Per-section analysis
        let processor = SectionProcessor::new(&self.lexicon);
        let processed: Vec<ProcessedSection> = sections.iter().map(|s| processor.process(s)).collect();

        // 2. Corpus scoring (the only cross-section step)
        let token_sequences: Vec<&[String]> = processed.iter().map(|p| p.tokens.as_slice()).collect();
        let score_maps = self.scorer.score_corpus(&token_sequences);
        let global_keywords = select_global_keywords(&score_maps, &self.lexicon);

        // 3. Keywords and summary per section
        let summarizer = Summarizer::new(&self.lexicon);
        let mut notes = Vec::with_capacity(processed.len());
        let mut diagnostics = CompressionDiagnostics {
            sections_considered: processed.len(),
            ..CompressionDiagnostics::default()
        };
        let mut total_words = 0;

        for (section, scores) in processed.into_iter().zip(&score_maps) {
            let keywords = select_section_keywords(
                &section,
                scores,
                &self.lexicon,
                self.config.top_k_keywords,
            );
            let summary = summarizer.summarize(
                &section,
                &keywords,
                self.config.min_words,
                self.config.max_words,
            );

            if summary.trim().is_empty() {
                debug!(section_id = section.id.as_str(), "dropping section with empty summary");
                diagnostics.sections_dropped += 1;
                diagnostics.dropped_ids.push(section.id.as_str().to_string());
                continue;
            }

            let summary_words = word_count(&summary);
            total_words += summary_words;
            notes.push(Note {
                id: section.id.as_str().to_string(),
                title: section.title,
                bullets: section.bullets,
                keywords,
                summary,
                word_count: summary_words,
            });
        }

        debug!(
            notes = notes.len(),
            total_words,
            dropped = diagnostics.sections_dropped,
            "compression finished"
        );

        let meta = CompressionMeta {
            sections: notes.len(),
            total_words,
        };

        Ok(CompressionOutcome {
            result: CompressionResult {
                notes,
                global_keywords,
                meta,
            },
            diagnostics,
        })
    }
}

/// Every section needs a non-empty id, unique within the batch.
fn check_section_ids(sections: &[Section]) -> Result<(), CompressError> {
    let mut seen = BTreeSet::new();
    for (index, section) in sections.iter().enumerate() {
        if section.id.is_empty() {
            return Err(CompressError::MissingSectionId { index });
        }
        if !seen.insert(section.id.as_str()) {
            return Err(CompressError::DuplicateSectionId(section.id.as_str().to_string()));
        }
    }
    Ok(())
}

/// One-shot entry point: build a [`Compressor`] for `config` and run it.
pub fn compress_sections(
    sections: &[Section],
    config: CompressConfig,
) -> Result<CompressionResult, CompressError> {
    Compressor::new(config)?.compress(sections)
}
