//! Built-in polarity lexicon.
//!
//! English adjectives and adverbs scored in `[-1.0, 1.0]`, in the style of
//! pattern-based analyzers. Portuguese courtesy phrasing is covered by the
//! keyword sets instead, so it is not repeated here.

#[rustfmt::skip]
pub const BUILTIN_LEXICON: &[(&str, f32)] = &[
    // positive
    ("good", 0.7), ("great", 0.8), ("excellent", 1.0), ("wonderful", 1.0),
    ("amazing", 0.6), ("awesome", 1.0), ("fantastic", 0.4), ("fabulous", 0.4),
    ("brilliant", 0.9), ("superb", 1.0), ("perfect", 1.0), ("best", 1.0),
    ("better", 0.5), ("nice", 0.6), ("lovely", 0.5), ("beautiful", 0.85),
    ("happy", 0.8), ("glad", 0.5), ("pleased", 0.5), ("delighted", 0.7),
    ("thankful", 0.5), ("grateful", 0.6), ("kind", 0.6), ("warm", 0.6),
    ("merry", 0.6), ("joyful", 0.8), ("cheerful", 0.6), ("fun", 0.3),
    ("love", 0.5), ("lovelier", 0.5), ("enjoyable", 0.4), ("pleasant", 0.7),
    ("positive", 0.23), ("fine", 0.4), ("cool", 0.35), ("helpful", 0.5),
    ("successful", 0.75), ("impressive", 1.0), ("outstanding", 0.5),
    ("favorite", 0.5), ("incredible", 0.9), ("terrific", 1.0), ("marvelous", 1.0),
    ("peaceful", 0.6), ("blessed", 0.6), ("healthy", 0.5), ("prosperous", 0.6),
    ("congratulations", 0.6), ("thanks", 0.2), ("welcome", 0.8), ("easy", 0.43),
    ("smooth", 0.4), ("friendly", 0.38), ("satisfied", 0.5), ("exciting", 0.3),
    ("excited", 0.38), ("proud", 0.8), ("lucky", 0.33), ("sweet", 0.35),
    // negative
    ("bad", -0.7), ("worse", -0.4), ("worst", -1.0), ("terrible", -1.0),
    ("awful", -1.0), ("horrible", -1.0), ("poor", -0.4), ("sad", -0.5),
    ("unhappy", -0.6), ("angry", -0.5), ("annoyed", -0.4), ("annoying", -0.8),
    ("frustrated", -0.7), ("frustrating", -0.4), ("disappointed", -0.75),
    ("disappointing", -0.6), ("broken", -0.4), ("wrong", -0.5), ("slow", -0.3),
    ("late", -0.3), ("delayed", -0.3), ("missing", -0.2), ("failed", -0.5),
    ("useless", -0.5), ("unacceptable", -0.8), ("ridiculous", -0.33),
    ("stupid", -0.8), ("ugly", -0.7), ("hate", -0.8), ("nasty", -1.0),
    ("pathetic", -1.0), ("dreadful", -1.0), ("painful", -0.7), ("difficult", -0.5),
    ("hard", -0.3), ("impossible", -0.67), ("incorrect", -0.5), ("urgent", -0.3),
    ("serious", -0.33), ("critical", -0.2), ("problematic", -0.5), ("unusable", -0.6),
    ("confusing", -0.3), ("confused", -0.4), ("worried", -0.5), ("upset", -0.5),
    ("unfortunately", -0.5), ("sorry", -0.5), ("damaged", -0.5), ("faulty", -0.6),
    ("expensive", -0.5), ("overdue", -0.4), ("unresolved", -0.4), ("unpaid", -0.3),
];

/// Words that flip and damp the next sentiment word.
pub const NEGATIONS: &[&str] = &["not", "no", "never", "nor", "without", "hardly"];

/// Multipliers applied to the next sentiment word.
#[rustfmt::skip]
pub const INTENSIFIERS: &[(&str, f32)] = &[
    ("very", 1.3), ("really", 1.3), ("extremely", 1.5), ("incredibly", 1.5),
    ("so", 1.2), ("too", 1.2), ("most", 1.3), ("quite", 1.1),
    ("absolutely", 1.5), ("totally", 1.4), ("truly", 1.3),
    ("slightly", 0.7), ("somewhat", 0.8), ("barely", 0.6), ("kinda", 0.8),
];
