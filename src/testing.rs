//! Test utilities shared across unit tests, integration tests and benchmarks.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

/// Reference lengths around the 64-unit word boundary, where the blocked
/// matcher's carry hand-off is exercised.
pub const BLOCK_BOUNDARY_LENGTHS: &[usize] = &[63, 64, 65, 127, 128, 129, 200];

/// Deterministic pseudo-random units drawn from `alphabet` (xorshift64).
///
/// Same `seed` and `len`, same output, on every platform.
pub fn pseudo_random_units(seed: u64, len: usize, alphabet: &[u8]) -> Vec<u8> {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            alphabet[(state % alphabet.len() as u64) as usize]
        })
        .collect()
}

/// Deterministic pseudo-random ASCII string drawn from `alphabet`.
pub fn pseudo_random_string(seed: u64, len: usize, alphabet: &str) -> String {
    let units = pseudo_random_units(seed, len, alphabet.as_bytes());
    String::from_utf8(units).unwrap_or_default()
}

/// Wagner-Fischer Levenshtein distance. O(nm), obviously correct.
pub fn oracle_levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, x) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, y) in b.iter().enumerate() {
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + usize::from(x != y));
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Optimal string alignment distance over the full matrix, with unit-cost
/// adjacent transpositions.
pub fn oracle_osa<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let cols = b.len() + 1;
    let mut d = vec![0usize; (a.len() + 1) * cols];
    for i in 0..=a.len() {
        for j in 0..=b.len() {
            d[i * cols + j] = if i == 0 {
                j
            } else if j == 0 {
                i
            } else {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                let mut best = (d[(i - 1) * cols + j] + 1)
                    .min(d[i * cols + j - 1] + 1)
                    .min(d[(i - 1) * cols + j - 1] + cost);
                if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                    best = best.min(d[(i - 2) * cols + j - 2] + 1);
                }
                best
            };
        }
    }
    d[a.len() * cols + b.len()]
}

/// `base` with every `stride`-th unit replaced by `replacement`.
pub fn with_substitutions(base: &str, stride: usize, replacement: char) -> String {
    base.chars()
        .enumerate()
        .map(|(i, c)| if i % stride == stride - 1 { replacement } else { c })
        .collect()
}
