use std::env;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, instrument, warn};
use triage_core::{
    extract_keywords, generate_response, CategoryClassifier, EmailAnalysis, KeywordSets,
};
use triage_ml::TriageMlStack;
use triage_observability::AppMetrics;

pub const KEYWORDS_PATH_ENV: &str = "TRIAGE_KEYWORDS_PATH";

/// Runs the full pipeline: keywords, category, suggested response.
///
/// Holds only immutable configuration and atomic counters, so one instance is
/// shared by every request.
#[derive(Clone)]
pub struct EmailAnalyzer {
    classifier: CategoryClassifier,
    metrics: Arc<AppMetrics>,
}

impl EmailAnalyzer {
    pub fn new(
        keywords: Arc<KeywordSets>,
        ml_stack: TriageMlStack,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        let unreachable = keywords.unreachable_entries();
        if !unreachable.is_empty() {
            info!(
                unreachable = unreachable.len(),
                total = keywords.len(),
                "keyword entries that can never match a single normalized token"
            );
        }

        Self {
            classifier: CategoryClassifier::new(keywords, ml_stack.sentiment),
            metrics,
        }
    }

    /// Keyword sets from `TRIAGE_KEYWORDS_PATH` when set and valid, the
    /// built-in tables otherwise; sentiment per [`TriageMlStack::load_default`].
    pub fn load_default(metrics: Arc<AppMetrics>) -> Self {
        let keywords = match env::var(KEYWORDS_PATH_ENV) {
            Ok(path) => load_keyword_sets(&path),
            Err(_) => KeywordSets::default(),
        };

        Self::new(Arc::new(keywords), TriageMlStack::load_default(), metrics)
    }

    pub fn metrics(&self) -> &Arc<AppMetrics> {
        &self.metrics
    }

    pub fn keyword_sets(&self) -> &KeywordSets {
        self.classifier.keywords()
    }

    pub fn sentiment_model(&self) -> &'static str {
        self.classifier.sentiment_model()
    }

    /// Total over any input; rejecting empty text is the caller's job.
    #[instrument(skip_all, fields(chars = text.chars().count()))]
    pub fn analyze(&self, text: &str) -> EmailAnalysis {
        let started = Instant::now();
        self.metrics.inc_request();

        let keywords = extract_keywords(text);
        let classification = self.classifier.classify(text);
        let suggested_response = generate_response(text, classification.category);

        self.metrics
            .record_classification(classification.category, classification.method);
        self.metrics.observe_latency(started.elapsed());
        info!(
            category = classification.category.as_label(),
            method = ?classification.method,
            confidence = classification.confidence,
            polarity = ?classification.polarity,
            sentiment_model = self.classifier.sentiment_model(),
            keywords = keywords.len(),
            "email analyzed"
        );

        EmailAnalysis {
            category: classification.category,
            suggested_response: suggested_response.to_string(),
            confidence: classification.confidence,
            keywords,
        }
    }
}

fn load_keyword_sets(path: impl AsRef<Path>) -> KeywordSets {
    let path = path.as_ref();
    match KeywordSets::from_json_file(path) {
        Ok(sets) => {
            info!(
                path = %path.display(),
                keywords = sets.len(),
                "custom keyword sets loaded"
            );
            sets
        }
        Err(error) => {
            warn!(
                path = %path.display(),
                error = %format!("{error:#}"),
                "invalid keyword sets, using built-in tables"
            );
            KeywordSets::default()
        }
    }
}
