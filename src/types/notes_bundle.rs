use serde::{Deserialize, Serialize};

use crate::types::identifiers::ResultFingerprint;

/// Study note for one section.
/// Only emitted when the generated summary is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub bullets: Vec<String>,
    pub keywords: Vec<String>,
    pub summary: String,
    /// Always the whitespace-token count of `summary`.
    #[serde(rename = "wordCount")]
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompressionMeta {
    /// Number of emitted notes.
    pub sections: usize,
    pub total_words: usize,
}

/// The final result of a compression run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompressionResult {
    pub notes: Vec<Note>,
    pub global_keywords: Vec<String>,
    pub meta: CompressionMeta,
}

impl CompressionResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// `sha256:<hex>` over the compact JSON form.
    pub fn fingerprint(&self) -> Result<ResultFingerprint, serde_json::Error> {
        let bytes = serde_json::to_vec(self)?;
        Ok(ResultFingerprint::from_bytes(&bytes))
    }
}

/// What happened to the input batch, beyond the result itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompressionDiagnostics {
    pub sections_considered: usize,
    pub sections_dropped: usize,
    /// Ids of sections whose summary came out empty, in batch order.
    pub dropped_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionOutcome {
    pub result: CompressionResult,
    pub diagnostics: CompressionDiagnostics,
}

#[derive(Debug, thiserror::Error)]
pub enum CompressError {
    #[error("Section at index {index} has no id")]
    MissingSectionId { index: usize },

    #[error("Duplicate section id: {0}")]
    DuplicateSectionId(String),

    #[error("Pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),
}
