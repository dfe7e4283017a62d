pub mod classifier;
pub mod keyword_sets;
pub mod keywords;
pub mod models;
pub mod normalize;
pub mod response;

pub use classifier::{category_for_polarity, CategoryClassifier, NeutralSentiment, SentimentScorer};
pub use keyword_sets::{KeywordSetKind, KeywordSets, UnreachableEntry};
pub use keywords::extract_keywords;
pub use models::*;
pub use normalize::normalize;
pub use response::generate_response;
