pub mod keywords;
pub mod ranking;

pub use keywords::{
    boost_section_scores, select_global_keywords, select_section_keywords, BOOST_FACTOR,
    GLOBAL_KEYWORD_CAP,
};
pub use ranking::{rank_keywords, sort_by_score, ScoreFilter};
