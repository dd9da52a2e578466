//! Deterministic study-note compression engine.
//!
//! `notes-core` turns a batch of cleaned document sections into compact study
//! notes: bullet points, ranked keywords, and a word-budgeted extractive
//! summary per section, plus a corpus-wide keyword list. Scoring is plain
//! TF-IDF over words and adjacent word pairs. All operations are
//! deterministic: identical inputs always produce identical outputs,
//! byte-for-byte.

pub mod compression;
pub mod config;
pub mod render;
pub mod scoring;
pub mod section;
pub mod selection;
pub mod summary;
pub mod text;
pub mod types;

pub use compression::{compress_sections, Compressor};
pub use config::CompressConfig;
pub use section::{Section, SectionBatch};
pub use types::{CompressError, CompressionResult, Note};
