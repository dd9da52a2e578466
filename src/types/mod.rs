pub mod identifiers;
pub mod notes_bundle;

pub use identifiers::{ResultFingerprint, SectionId};
pub use notes_bundle::{
    CompressError, CompressionDiagnostics, CompressionMeta, CompressionOutcome, CompressionResult,
    Note,
};
