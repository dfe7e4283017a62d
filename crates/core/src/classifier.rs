use std::collections::HashSet;
use std::sync::Arc;

use crate::keyword_sets::KeywordSets;
use crate::models::{Category, ClassificationResult};
use crate::normalize::normalize;

/// Above this polarity the fallback reads the message as courtesy.
pub const POSITIVE_POLARITY_THRESHOLD: f32 = 0.2;
/// Below this polarity the fallback reads the message as a complaint to act on.
pub const NEGATIVE_POLARITY_THRESHOLD: f32 = -0.2;

/// Lexicon-style polarity source consulted when no keyword matches.
pub trait SentimentScorer: Send + Sync {
    fn model_name(&self) -> &'static str;

    /// Polarity in `[-1.0, 1.0]`; `0.0` for text with no sentiment words.
    fn polarity(&self, text: &str) -> f32;
}

/// Scorer that finds no sentiment anywhere, so every fallback is neutral.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeutralSentiment;

impl SentimentScorer for NeutralSentiment {
    fn model_name(&self) -> &'static str {
        "neutral"
    }

    fn polarity(&self, _text: &str) -> f32 {
        0.0
    }
}

#[derive(Clone)]
pub struct CategoryClassifier {
    keywords: Arc<KeywordSets>,
    sentiment: Arc<dyn SentimentScorer>,
}

impl CategoryClassifier {
    pub fn new(keywords: Arc<KeywordSets>, sentiment: Arc<dyn SentimentScorer>) -> Self {
        Self {
            keywords,
            sentiment,
        }
    }

    pub fn keywords(&self) -> &KeywordSets {
        &self.keywords
    }

    pub fn sentiment_model(&self) -> &'static str {
        self.sentiment.model_name()
    }

    /// Unproductive keywords win over productive ones; sentiment only runs
    /// when neither set matches a token.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let normalized = normalize(text);
        let tokens = normalized.split_whitespace().collect::<HashSet<_>>();

        if intersects(&tokens, self.keywords.unproductive()) {
            return ClassificationResult::keyword_match(Category::Unproductive);
        }

        if intersects(&tokens, self.keywords.productive()) {
            return ClassificationResult::keyword_match(Category::Productive);
        }

        // polarity runs on the raw text, punctuation and accents included
        let polarity = self.sentiment.polarity(text);
        ClassificationResult::sentiment_fallback(category_for_polarity(polarity), polarity)
    }
}

pub fn category_for_polarity(polarity: f32) -> Category {
    if polarity > POSITIVE_POLARITY_THRESHOLD {
        Category::Unproductive
    } else if polarity < NEGATIVE_POLARITY_THRESHOLD {
        Category::Productive
    } else {
        Category::Neutral
    }
}

fn intersects(tokens: &HashSet<&str>, keywords: &HashSet<String>) -> bool {
    tokens.iter().any(|token| keywords.contains(*token))
}
