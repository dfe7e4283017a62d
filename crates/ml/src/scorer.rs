use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;
use triage_core::SentimentScorer;

use crate::lexicon::{BUILTIN_LEXICON, INTENSIFIERS, NEGATIONS};

/// Score multiplier for a negated sentiment word.
const NEGATION_FACTOR: f32 = -0.5;
/// A negator reaches this many tokens ahead.
const NEGATION_WINDOW: usize = 3;

#[derive(Debug, Error, PartialEq)]
pub enum LexiconError {
    #[error("lexicon line {line}: word must not be empty")]
    EmptyWord { line: usize },
    #[error("lexicon line {line}: polarity {polarity} for {word:?} is outside [-1, 1]")]
    PolarityOutOfRange {
        line: usize,
        word: String,
        polarity: f32,
    },
}

#[derive(Debug, Deserialize)]
struct LexiconEntry {
    word: String,
    polarity: f32,
}

#[derive(Debug, Clone)]
pub struct LexiconSentimentScorer {
    model_name: &'static str,
    words: HashMap<String, f32>,
    intensifiers: HashMap<&'static str, f32>,
}

impl Default for LexiconSentimentScorer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LexiconSentimentScorer {
    pub fn builtin() -> Self {
        Self {
            model_name: "lexicon-builtin",
            words: BUILTIN_LEXICON
                .iter()
                .map(|(word, polarity)| (word.to_string(), *polarity))
                .collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    /// Built-in lexicon extended (and overridden) by `{"word", "polarity"}` lines.
    pub fn from_jsonl(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "failed reading sentiment lexicon at {}",
                path.as_ref().display()
            )
        })?;

        let mut scorer = Self::builtin();
        scorer.model_name = "lexicon-custom";

        for (idx, line) in raw.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let entry: LexiconEntry = serde_json::from_str(line)
                .with_context(|| format!("invalid jsonl lexicon line {line_no}"))?;
            let word = entry.word.trim().to_lowercase();
            if word.is_empty() {
                return Err(LexiconError::EmptyWord { line: line_no }.into());
            }
            if !(-1.0..=1.0).contains(&entry.polarity) {
                return Err(LexiconError::PolarityOutOfRange {
                    line: line_no,
                    word,
                    polarity: entry.polarity,
                }
                .into());
            }

            scorer.words.insert(word, entry.polarity);
        }

        Ok(scorer)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SentimentScorer for LexiconSentimentScorer {
    fn model_name(&self) -> &'static str {
        self.model_name
    }

    fn polarity(&self, text: &str) -> f32 {
        let lower = text.to_lowercase();
        let mut scores = Vec::new();
        let mut negation_left = 0_usize;
        let mut intensity = 1.0_f32;

        for token in lower
            .split(|ch: char| !(ch.is_alphanumeric() || ch == '\''))
            .filter(|token| !token.is_empty())
        {
            if is_negation(token) {
                negation_left = NEGATION_WINDOW;
                intensity = 1.0;
                continue;
            }

            if let Some(factor) = self.intensifiers.get(token) {
                intensity *= factor;
                continue;
            }

            if let Some(polarity) = self.words.get(token) {
                let mut score = polarity * intensity;
                if negation_left > 0 {
                    score *= NEGATION_FACTOR;
                }
                scores.push(score.clamp(-1.0, 1.0));
                negation_left = 0;
                intensity = 1.0;
                continue;
            }

            negation_left = negation_left.saturating_sub(1);
            intensity = 1.0;
        }

        if scores.is_empty() {
            return 0.0;
        }

        let mean = scores.iter().sum::<f32>() / scores.len() as f32;
        mean.clamp(-1.0, 1.0)
    }
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}
