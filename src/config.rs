use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_WORDS: usize = 50;
pub const DEFAULT_MAX_WORDS: usize = 120;
pub const DEFAULT_TOP_K_KEYWORDS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressConfig {
    pub min_words: usize,
    pub max_words: usize,
    pub top_k_keywords: usize,
}

impl CompressConfig {
    pub fn v0() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
            top_k_keywords: DEFAULT_TOP_K_KEYWORDS,
        }
    }

    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    pub fn with_top_k_keywords(mut self, top_k_keywords: usize) -> Self {
        self.top_k_keywords = top_k_keywords;
        self
    }
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self::v0()
    }
}
