use std::env;
use std::path::PathBuf;

const DEFAULT_BIND: &str = "0.0.0.0:8000";
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind: String,
    pub public_dir: PathBuf,
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
    pub body_limit_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            allowed_origins: Vec::new(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind: env::var("TRIAGE_BIND").unwrap_or(defaults.bind),
            public_dir: env::var("TRIAGE_PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            allowed_origins: env::var("TRIAGE_ALLOWED_ORIGINS")
                .map(|value| parse_allowed_origins(&value))
                .unwrap_or(defaults.allowed_origins),
            body_limit_bytes: env::var("TRIAGE_BODY_LIMIT_BYTES")
                .map(|value| parse_body_limit(&value))
                .unwrap_or(defaults.body_limit_bytes),
        }
    }
}

/// Positive byte count; anything else keeps the default and logs a warning.
pub fn parse_body_limit(value: &str) -> usize {
    match value.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => limit,
        _ => {
            tracing::warn!(
                value,
                default = DEFAULT_BODY_LIMIT_BYTES,
                "invalid TRIAGE_BODY_LIMIT_BYTES, using default body limit"
            );
            DEFAULT_BODY_LIMIT_BYTES
        }
    }
}

/// Comma-separated origins; a `*` anywhere opens CORS to every origin.
pub fn parse_allowed_origins(value: &str) -> Vec<String> {
    let origins = value
        .split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect::<Vec<_>>();

    if origins.iter().any(|origin| origin == "*") {
        Vec::new()
    } else {
        origins
    }
}
