use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::SectionId;

#[derive(Debug, Error)]
pub enum SectionBatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid section batch: {0}")]
    Json(#[from] serde_json::Error),
}

/// One cleaned section handed over by the cleaning stage.
///
/// `text` is expected to be free of page numbers and repeated boilerplate,
/// with paragraphs separated by a blank line. A missing `title` or `text`
/// reads as an empty string; a missing `id` does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

impl Section {
    pub fn new(id: impl Into<SectionId>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text: text.into(),
        }
    }
}

/// The `{"sections": [...]}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SectionBatch {
    pub sections: Vec<Section>,
}

impl SectionBatch {
    pub fn from_json_str(json: &str) -> Result<Self, SectionBatchError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SectionBatchError> {
        Ok(serde_json::from_reader(reader)?)
    }
}
