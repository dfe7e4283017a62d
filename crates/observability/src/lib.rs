use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use triage_core::{Category, ClassificationMethod};

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    requests_total: AtomicU64,
    keyword_match_total: AtomicU64,
    sentiment_fallback_total: AtomicU64,
    productive_total: AtomicU64,
    unproductive_total: AtomicU64,
    neutral_total: AtomicU64,
    rejected_total: AtomicU64,
    failures_total: AtomicU64,
    total_latency_micros: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub keyword_match_total: u64,
    pub sentiment_fallback_total: u64,
    pub productive_total: u64,
    pub unproductive_total: u64,
    pub neutral_total: u64,
    pub rejected_total: u64,
    pub failures_total: u64,
    pub avg_latency_micros: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_classification(&self, category: Category, method: ClassificationMethod) {
        match method {
            ClassificationMethod::KeywordMatch => &self.keyword_match_total,
            ClassificationMethod::SentimentFallback => &self.sentiment_fallback_total,
        }
        .fetch_add(1, Ordering::Relaxed);

        match category {
            Category::Productive => &self.productive_total,
            Category::Unproductive => &self.unproductive_total,
            Category::Neutral => &self.neutral_total,
        }
        .fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_rejected(&self) {
        self.rejected_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_failure(&self) {
        self.failures_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let requests = self.requests_total.load(Ordering::Relaxed);
        let latency = self.total_latency_micros.load(Ordering::Relaxed);

        MetricsSnapshot {
            requests_total: requests,
            keyword_match_total: self.keyword_match_total.load(Ordering::Relaxed),
            sentiment_fallback_total: self.sentiment_fallback_total.load(Ordering::Relaxed),
            productive_total: self.productive_total.load(Ordering::Relaxed),
            unproductive_total: self.unproductive_total.load(Ordering::Relaxed),
            neutral_total: self.neutral_total.load(Ordering::Relaxed),
            rejected_total: self.rejected_total.load(Ordering::Relaxed),
            failures_total: self.failures_total.load(Ordering::Relaxed),
            avg_latency_micros: if requests == 0 {
                0.0
            } else {
                latency as f64 / requests as f64
            },
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,triage_api=info,triage_analyzer=info,triage_ml=info,tower_http=info",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}
