//! Utility functions for string preprocessing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Strip diacritics and collapse whitespace, keeping case.
///
/// This enables matching between ASCII and accented versions:
/// - "café" → "cafe"
/// - "tummalachērla" → "tummalacherla"
/// - "harīṣh" → "harish"
/// - "naïve" → "naive"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks (category Mn = Mark, Nonspacing)
/// 3. Collapse whitespace
///
/// # Algorithm (without unicode-normalization)
///
/// Collapse whitespace only (assumes input is pre-normalized or ASCII).
#[cfg(feature = "unicode-normalization")]
pub fn fold_diacritics(value: &str) -> String {
    let stripped: String = value.nfd().filter(|c| !is_combining_mark(*c)).collect();
    collapse_whitespace(&stripped)
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn fold_diacritics(value: &str) -> String {
    collapse_whitespace(value)
}

/// Trim and squeeze runs of whitespace into single spaces.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
