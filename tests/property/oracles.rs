//! Reference oracles and input strategies for differential testing.
//!
//! The oracles themselves live in `strdist::testing` so fuzz targets and
//! benchmarks share them; this module adapts them to `&str` and adds the
//! strategies that generate inputs around the interesting lengths.

use proptest::prelude::*;
use strdist::testing::{oracle_levenshtein as units_levenshtein, oracle_osa as units_osa};

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Wagner-Fischer Levenshtein distance over Unicode scalar values.
pub fn oracle_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    units_levenshtein(&a, &b)
}

/// Optimal string alignment distance over Unicode scalar values.
pub fn oracle_osa(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    units_osa(&a, &b)
}

/// Levenshtein distance over UTF-16 code units.
pub fn oracle_levenshtein_utf16(a: &str, b: &str) -> usize {
    let a: Vec<u16> = a.encode_utf16().collect();
    let b: Vec<u16> = b.encode_utf16().collect();
    units_levenshtein(&a, &b)
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// Strings over a small alphabet, so matches and transpositions are common.
pub fn small_alphabet(max_len: usize) -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!("[abc]{{0,{}}}", max_len)).unwrap()
}

/// Strings whose length sits right around a multiple of the 64-unit word.
pub fn near_block_boundary() -> impl Strategy<Value = String> {
    (prop::sample::select(vec![63usize, 64, 65, 127, 128, 129]), any::<u64>()).prop_map(
        |(len, seed)| strdist::testing::pseudo_random_string(seed, len, "abcd"),
    )
}

/// Mixed-script strings, including characters outside the BMP.
pub fn unicode_text(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'b', 'é', 'ü', '日', '本', 'λ', '😀', '🎉', ' ']),
        0..=max_len,
    )
    .prop_map(|chars| chars.into_iter().collect())
}
