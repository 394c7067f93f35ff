// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the restricted Damerau-Levenshtein matrix.
//!
//! Checks the exact engine against the OSA oracle, then checks what the
//! approximations promise: a limit never reports more than the limit, and
//! early exit never reports more than the longer input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strdist::testing::{oracle_levenshtein, oracle_osa};
use strdist::{damerau_levenshtein_units, damerau_levenshtein_with, DamerauOptions};

/// Fuzz input for the matrix engine
#[derive(Debug, Arbitrary)]
struct MatrixInput {
    a: Vec<u8>,
    b: Vec<u8>,
    limit: Option<u8>,
    early_exit: bool,
}

fuzz_target!(|input: MatrixInput| {
    // Small alphabet so transpositions actually occur
    let a: Vec<u8> = input.a.iter().take(120).map(|x| x % 4).collect();
    let b: Vec<u8> = input.b.iter().take(120).map(|x| x % 4).collect();

    let exact = damerau_levenshtein_units(&a, &b, &DamerauOptions::default());

    // INVARIANT 1: exact engine is the OSA recurrence
    assert_eq!(exact, oracle_osa(&a, &b), "a={:?} b={:?}", a, b);

    // INVARIANT 2: a swap never costs more than plain Levenshtein
    assert!(exact <= oracle_levenshtein(&a, &b));

    // INVARIANT 3: a limit caps, and never hides a smaller distance
    if let Some(limit) = input.limit {
        let capped = damerau_levenshtein_units(&a, &b, &DamerauOptions::with_limit(limit.into()));
        assert_eq!(capped, exact.min(limit.into()), "limit={} a={:?} b={:?}", limit, a, b);
    }

    // INVARIANT 4: early exit is an overestimate bounded by the longer input
    if input.early_exit {
        let approx = damerau_levenshtein_units(&a, &b, &DamerauOptions::default().early_exit(true));
        assert!(approx >= exact || approx == a.len());
        assert!(approx <= a.len().max(b.len()));
    }

    // INVARIANT 5: normalized scores stay in [0, 1] and sum to 1
    let text_a: String = a.iter().map(|&x| char::from(b'a' + x)).collect();
    let text_b: String = b.iter().map(|&x| char::from(b'a' + x)).collect();
    let options = DamerauOptions {
        limit: input.limit.map(usize::from),
        early_exit: input.early_exit,
    };
    let result = damerau_levenshtein_with(&text_a, &text_b, &options);
    assert!((0.0..=1.0).contains(&result.relative));
    assert!((result.relative + result.similarity - 1.0).abs() < 1e-12);
});
