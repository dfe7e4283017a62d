use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid normalizer regex"));

/// Lowercases, strips accents and punctuation, and collapses whitespace.
///
/// Total over its input: punctuation-only or empty text yields `""`.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let unaccented = strip_accents(&lowered);
    let cleaned = NON_WORD.replace_all(&unaccented, " ");

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_accents(input: &str) -> String {
    input.nfd().filter(|ch| !is_combining_mark(*ch)).collect()
}
