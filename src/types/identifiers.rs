use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Caller-assigned section identifier.
///
/// Passed through unchanged from input to output; this crate never invents one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        SectionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        SectionId::new(id)
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        SectionId(id)
    }
}

/// Content hash of a serialized compression result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultFingerprint(String);

impl ResultFingerprint {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        ResultFingerprint(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
