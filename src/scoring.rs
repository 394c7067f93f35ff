//! Turning raw edit distances into 0–1 scores.
//!
//! Every edit-distance metric here is bounded by the longer input, so dividing
//! by `max(len_a, len_b)` gives a relative distance in `[0, 1]` and its
//! complement is the similarity. Two empty strings are identical: relative 0,
//! similarity 1.

use serde::{Deserialize, Serialize};

/// A raw distance with its normalized forms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditDistance {
    /// Number of edits.
    pub steps: usize,
    /// `steps / max(len_a, len_b)`, 0 when both inputs are empty.
    pub relative: f64,
    /// `1 - relative`.
    pub similarity: f64,
}

impl EditDistance {
    /// Normalize `steps` against the lengths of the two inputs.
    pub fn new(steps: usize, len_a: usize, len_b: usize) -> Self {
        let max_len = len_a.max(len_b);
        let relative = if max_len == 0 {
            0.0
        } else {
            steps as f64 / max_len as f64
        };
        Self {
            steps,
            relative,
            similarity: 1.0 - relative,
        }
    }

    pub fn is_exact_match(&self) -> bool {
        self.steps == 0
    }
}

/// Shorthand for [`EditDistance::new`].
pub fn normalize(steps: usize, len_a: usize, len_b: usize) -> EditDistance {
    EditDistance::new(steps, len_a, len_b)
}

/// Largest possible edit distance between two strings: the longer length.
pub fn max_distance(a: &str, b: &str) -> usize {
    a.chars().count().max(b.chars().count())
}

/// Similarity in `[0, 1]` for a distance out of `max_distance`.
///
/// Zero distance, or nothing to compare, is a perfect match.
pub fn distance_to_similarity(distance: f64, max_distance: f64) -> f64 {
    if distance == 0.0 || max_distance == 0.0 {
        return 1.0;
    }
    (1.0 - distance / max_distance).clamp(0.0, 1.0)
}

/// Inverse of [`distance_to_similarity`] for similarities in `[0, 1]`.
pub fn similarity_to_distance(similarity: f64, max_distance: f64) -> f64 {
    max_distance * (1.0 - similarity)
}
