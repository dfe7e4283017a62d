use crate::normalize::normalize;

/// Tokens must be strictly longer than this many chars to count as keywords.
pub const MIN_KEYWORD_CHARS: usize = 3;
pub const MAX_KEYWORDS: usize = 10;

/// First `MAX_KEYWORDS` normalized tokens longer than `MIN_KEYWORD_CHARS`,
/// in order of appearance. Repeats are kept.
pub fn extract_keywords(input: &str) -> Vec<String> {
    normalize(input)
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_KEYWORD_CHARS)
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}
