use serde::{Deserialize, Serialize};

/// Confidence attached to a keyword-set match.
pub const KEYWORD_MATCH_CONFIDENCE: f32 = 0.9;
/// Confidence attached to every sentiment fallback outcome.
pub const SENTIMENT_FALLBACK_CONFIDENCE: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Produtivo")]
    Productive,
    #[serde(rename = "Improdutivo")]
    Unproductive,
    #[serde(rename = "Neutro")]
    Neutral,
}

impl Category {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Productive => "Produtivo",
            Self::Unproductive => "Improdutivo",
            Self::Neutral => "Neutro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMethod {
    KeywordMatch,
    SentimentFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub confidence: f32,
    pub method: ClassificationMethod,
    /// Only set when the keyword sets did not decide.
    pub polarity: Option<f32>,
}

impl ClassificationResult {
    pub fn keyword_match(category: Category) -> Self {
        Self {
            category,
            confidence: KEYWORD_MATCH_CONFIDENCE,
            method: ClassificationMethod::KeywordMatch,
            polarity: None,
        }
    }

    pub fn sentiment_fallback(category: Category, polarity: f32) -> Self {
        Self {
            category,
            confidence: SENTIMENT_FALLBACK_CONFIDENCE,
            method: ClassificationMethod::SentimentFallback,
            polarity: Some(polarity),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailAnalysis {
    pub category: Category,
    pub suggested_response: String,
    pub confidence: f32,
    pub keywords: Vec<String>,
}
