// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the Myers Levenshtein matchers.
//!
//! Differential against the Wagner-Fischer oracle. Lengths run well past one
//! 64-unit word, so carries between blocks get exercised. A wrong carry shows
//! up as an off-by-one somewhere past the first block boundary.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strdist::testing::oracle_levenshtein;
use strdist::{levenshtein_distance, levenshtein_distance_utf16, levenshtein_units, Levenshtein};

/// Fuzz input for Levenshtein matching
#[derive(Debug, Arbitrary)]
struct MatchInput {
    a: Vec<u8>,
    b: Vec<u8>,
    /// Reuse one engine across both directions
    reuse_engine: bool,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to keep the O(nm) oracle fast
    let a = &input.a[..input.a.len().min(300)];
    let b = &input.b[..input.b.len().min(300)];

    let expected = oracle_levenshtein(a, b);

    // INVARIANT 1: bytes agree with the oracle, in both packing orders
    if input.reuse_engine {
        let mut engine = Levenshtein::new();
        assert_eq!(engine.distance(a, b), expected, "a={:?} b={:?}", a, b);
        assert_eq!(engine.distance(b, a), expected, "a={:?} b={:?}", a, b);
    } else {
        assert_eq!(levenshtein_units(a, b), expected, "a={:?} b={:?}", a, b);
        assert_eq!(levenshtein_units(b, a), expected, "a={:?} b={:?}", a, b);
    }

    // INVARIANT 2: bounded by the longer input, at least the length difference
    assert!(expected <= a.len().max(b.len()));
    assert!(expected >= a.len().abs_diff(b.len()));

    // INVARIANT 3: string entry points agree with the oracle over their units
    let a = String::from_utf8_lossy(a);
    let b = String::from_utf8_lossy(b);
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    assert_eq!(levenshtein_distance(&a, &b), oracle_levenshtein(&a_chars, &b_chars));

    let a_utf16: Vec<u16> = a.encode_utf16().collect();
    let b_utf16: Vec<u16> = b.encode_utf16().collect();
    assert_eq!(
        levenshtein_distance_utf16(&a, &b),
        oracle_levenshtein(&a_utf16, &b_utf16)
    );
});
