// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein distance: public entry points over the Myers matchers.
//!
//! The longer operand is always the one packed into bit vectors. Packing the
//! shorter one would also be correct, but the sweep then runs over the longer
//! string and pays one column step per unit of it. References of up to 64
//! units take the single-word path, longer ones the blocked path.
//!
//! The free functions build a fresh mask table per call, so they are safe to
//! call from any number of threads. `Levenshtein` keeps its table between
//! calls for hot loops; `&mut self` makes it one computation at a time.

use tracing::trace;

use super::mask::{CodeUnit, PatternMask, WORD_BITS};
use super::myers::{blocked, single_block, BlockState};
use crate::contracts::check_distance_bounds;

/// A Levenshtein engine that reuses its mask table and block state.
///
/// ```
/// use strdist::Levenshtein;
///
/// let mut engine = Levenshtein::new();
/// for (word, expected) in [("sitting", 3), ("kitten", 0), ("mitten", 1)] {
///     assert_eq!(engine.distance_str("kitten", word), expected);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Levenshtein {
    mask: PatternMask,
    state: BlockState,
}

impl Levenshtein {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit distance between two code-unit sequences.
    pub fn distance<T: CodeUnit>(&mut self, a: &[T], b: &[T]) -> usize {
        let (reference, other) = if a.len() >= b.len() { (a, b) } else { (b, a) };

        // Covers empty/empty too.
        if other.is_empty() {
            return reference.len();
        }

        self.mask.fill(reference);
        let distance = if reference.len() <= WORD_BITS {
            single_block(&self.mask, reference.len(), other)
        } else {
            trace!(
                reference_len = reference.len(),
                other_len = other.len(),
                "blocked matcher"
            );
            blocked(&self.mask, reference.len(), other, &mut self.state)
        };
        self.mask.clear();

        check_distance_bounds(distance, a.len(), b.len());
        distance
    }

    /// Edit distance counted in Unicode scalar values.
    pub fn distance_str(&mut self, a: &str, b: &str) -> usize {
        // ASCII bytes and chars are the same units; skip the decode.
        if a.is_ascii() && b.is_ascii() {
            return self.distance(a.as_bytes(), b.as_bytes());
        }
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        self.distance(&a, &b)
    }

    /// Edit distance counted in UTF-16 code units.
    pub fn distance_utf16(&mut self, a: &str, b: &str) -> usize {
        let a: Vec<u16> = a.encode_utf16().collect();
        let b: Vec<u16> = b.encode_utf16().collect();
        self.distance(&a, &b)
    }
}

/// Levenshtein distance between two code-unit sequences.
pub fn levenshtein_units<T: CodeUnit>(a: &[T], b: &[T]) -> usize {
    Levenshtein::new().distance(a, b)
}

/// Levenshtein distance between two strings, counted in Unicode scalar values.
///
/// Case and other normalization are the caller's business: `"WORLD"` and
/// `"world"` are five edits apart.
///
/// ```
/// use strdist::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    Levenshtein::new().distance_str(a, b)
}

/// Levenshtein distance counted in UTF-16 code units.
///
/// Characters outside the Basic Multilingual Plane count as two units, which
/// is how JavaScript measures string length.
pub fn levenshtein_distance_utf16(a: &str, b: &str) -> usize {
    Levenshtein::new().distance_utf16(a, b)
}

/// Are these strings within `max` edits of each other?
///
/// The length difference is a lower bound on the distance, so pairs that
/// differ in length by more than `max` are rejected before any bits are packed.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return false;
    }

    levenshtein_distance(a, b) <= max
}
