mod lexicon;
mod scorer;

use std::env;
use std::path::Path;
use std::sync::Arc;

use triage_core::SentimentScorer;

pub use lexicon::{BUILTIN_LEXICON, INTENSIFIERS, NEGATIONS};
pub use scorer::{LexiconError, LexiconSentimentScorer};

pub const SENTIMENT_LEXICON_ENV: &str = "TRIAGE_SENTIMENT_LEXICON";

#[derive(Clone)]
pub struct TriageMlStack {
    pub sentiment: Arc<dyn SentimentScorer>,
}

impl Default for TriageMlStack {
    fn default() -> Self {
        Self {
            sentiment: Arc::new(LexiconSentimentScorer::builtin()),
        }
    }
}

impl TriageMlStack {
    pub fn new(sentiment: Arc<dyn SentimentScorer>) -> Self {
        Self { sentiment }
    }

    /// Uses the lexicon named by `TRIAGE_SENTIMENT_LEXICON` when it loads,
    /// the built-in one otherwise.
    pub fn load_default() -> Self {
        match env::var(SENTIMENT_LEXICON_ENV) {
            Ok(path) => Self::from_lexicon_path(&path),
            Err(_) => Self::default(),
        }
    }

    pub fn from_lexicon_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "sentiment lexicon not found, using built-in lexicon"
            );
            return Self::default();
        }

        match LexiconSentimentScorer::from_jsonl(path) {
            Ok(scorer) => {
                tracing::info!(
                    path = %path.display(),
                    words = scorer.len(),
                    "custom sentiment lexicon loaded"
                );
                Self::new(Arc::new(scorer))
            }
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %format!("{error:#}"),
                    "invalid sentiment lexicon, using built-in lexicon"
                );
                Self::default()
            }
        }
    }
}
