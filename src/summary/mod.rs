pub mod accumulator;
pub mod budgeting;
pub mod summarizer;

pub use accumulator::SummaryAccumulator;
pub use budgeting::{apply_word_budget, WordBudgetResult};
pub use summarizer::{Summarizer, LEAD_BULLETS, LONG_SENTENCE_WORDS, TOP_KEYWORDS_FOR_SENTENCES};
