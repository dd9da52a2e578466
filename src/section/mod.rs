pub mod processor;
pub mod section;

pub use crate::types::identifiers::SectionId;
pub use processor::{ProcessedSection, SectionProcessor, MAX_BULLETS, MIN_ANALYZABLE_WORDS};
pub use section::{Section, SectionBatch, SectionBatchError};
