use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use triage_analyzer::EmailAnalyzer;
use triage_core::{extract_keywords, normalize, KeywordSetKind, KeywordSets};
use triage_ml::TriageMlStack;
use triage_observability::{init_tracing, AppMetrics};

#[derive(Debug, Parser)]
#[command(name = "triage")]
#[command(about = "Email triage: category, suggested reply and keywords")]
struct Cli {
    /// JSON file with `productive` and `unproductive` keyword lists.
    #[arg(long, env = "TRIAGE_KEYWORDS_PATH")]
    keywords: Option<PathBuf>,

    /// JSONL sentiment lexicon extending the built-in one.
    #[arg(long, env = "TRIAGE_SENTIMENT_LEXICON")]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify an email read from TEXT, --file, or stdin.
    Analyze {
        text: Option<String>,
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    Normalize {
        text: String,
    },
    Keywords {
        text: String,
    },
    /// List keyword entries that can never match a normalized token.
    KeywordsAudit,
}

#[derive(Debug, Serialize)]
struct AuditLine {
    set: &'static str,
    entry: String,
    normalized: String,
}

fn main() -> Result<()> {
    init_tracing("triage_cli");
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { ref text, ref file } => {
            let raw = read_input(text.as_deref(), file.as_ref())?;
            let text = require_text(&raw)?;

            let analyzer = build_analyzer(&cli)?;
            let analysis = analyzer.analyze(text);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Command::Normalize { ref text } => println!("{}", normalize(text)),
        Command::Keywords { ref text } => {
            println!("{}", serde_json::to_string_pretty(&extract_keywords(text))?);
        }
        Command::KeywordsAudit => {
            let sets = load_keyword_sets(&cli)?;
            let lines = sets
                .unreachable_entries()
                .into_iter()
                .map(|item| AuditLine {
                    set: match item.set {
                        KeywordSetKind::Productive => "productive",
                        KeywordSetKind::Unproductive => "unproductive",
                    },
                    entry: item.entry,
                    normalized: item.normalized,
                })
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&lines)?);
        }
    }

    Ok(())
}

fn read_input(text: Option<&str>, file: Option<&PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("failed reading email from {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed reading email from stdin")?;
    Ok(buffer)
}

fn require_text(raw: &str) -> Result<&str> {
    let text = raw.trim();
    if text.is_empty() {
        anyhow::bail!("email text must not be empty");
    }
    Ok(text)
}

fn load_keyword_sets(cli: &Cli) -> Result<KeywordSets> {
    match &cli.keywords {
        Some(path) => KeywordSets::from_json_file(path),
        None => Ok(KeywordSets::default()),
    }
}

fn build_analyzer(cli: &Cli) -> Result<EmailAnalyzer> {
    let keywords = load_keyword_sets(cli)?;
    let ml_stack = match &cli.lexicon {
        Some(path) => TriageMlStack::from_lexicon_path(path),
        None => TriageMlStack::default(),
    };

    Ok(EmailAnalyzer::new(
        Arc::new(keywords),
        ml_stack,
        AppMetrics::shared(),
    ))
}
