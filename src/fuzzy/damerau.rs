// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Restricted Damerau-Levenshtein (optimal string alignment) distance.
//!
//! Insertion, deletion and substitution cost one, and so does swapping two
//! adjacent units, but a swapped pair cannot be edited again. That makes this
//! the *restricted* metric: `"ca"` → `"abc"` is 3 here, where the unrestricted
//! metric finds 2 (swap, then insert between the swapped units).
//!
//! Three rolling rows of the DP matrix are kept, so memory is `O(len_b)`.
//! With a limit, only the band `|i - j| <= limit` is filled and the sweep
//! aborts as soon as the limit is out of reach, so long dissimilar inputs cost
//! `O(len_a · limit)` at most. Nothing is shared between calls.
//!
//! # Early exit
//!
//! With [`DamerauOptions::early_exit`], the computation stops as soon as a
//! diagonal cell `(i, i)` exceeds [`EARLY_EXIT_THRESHOLD`] and reports `len_a`.
//! This is an approximation: the returned value can be larger than the true
//! distance (`"abcdefghij"` vs `"zzzzzabcdefghij"` is 5, early exit says 10).
//! It never exceeds `max(len_a, len_b)`.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::mask::CodeUnit;
use crate::contracts::{check_distance_bounds, check_normalized};
use crate::scoring::EditDistance;

/// Diagonal value above which `early_exit` gives up.
pub const EARLY_EXIT_THRESHOLD: usize = 4;

/// Knobs for the matrix engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DamerauOptions {
    /// Distance cap. Pairs whose lengths differ by more than this report the
    /// cap without building the matrix, and larger distances are reported as
    /// the cap. Defaults to `max(len_a, len_b) + 1`, which caps nothing.
    pub limit: Option<usize>,
    /// Stop early on dissimilar inputs (see module docs). Off by default.
    pub early_exit: bool,
}

impl DamerauOptions {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    /// True when results are neither capped nor approximated.
    pub fn is_exact(&self) -> bool {
        self.limit.is_none() && !self.early_exit
    }
}

/// Restricted Damerau-Levenshtein distance between two code-unit sequences.
///
/// Only cells with `|i - j| <= limit` are computed. Values above `limit` are
/// stored as `limit + 1`, and the sweep stops once two consecutive rows hold
/// nothing below that cap.
pub fn damerau_levenshtein_units<T: CodeUnit>(
    a: &[T],
    b: &[T],
    options: &DamerauOptions,
) -> usize {
    let len_a = a.len();
    let len_b = b.len();
    let limit = options.limit.unwrap_or(len_a.max(len_b) + 1);

    if len_a.abs_diff(len_b) > limit {
        return limit;
    }
    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }

    let cap = limit.saturating_add(1);
    let row_zero: Vec<usize> = (0..=len_b).map(|j| j.min(cap)).collect();
    // Rows i-2, i-1 and i, rotated after every row.
    let mut rows = [vec![cap; len_b + 1], row_zero, vec![cap; len_b + 1]];
    let mut above_min = 0;

    for i in 1..=len_a {
        let this_i = a[i - 1];
        let lo = i.saturating_sub(limit).max(1);
        let hi = i.saturating_add(limit).min(len_b);
        let [before, above, row] = &mut rows;

        // Fence the band so stale cells from row i-3 are never read.
        row[lo - 1] = if lo == 1 { i.min(cap) } else { cap };
        if hi < len_b {
            row[hi + 1] = cap;
        }
        let mut row_min = row[lo - 1];

        for j in lo..=hi {
            let that_j = b[j - 1];
            let cost = usize::from(this_i != that_j);

            let mut best = (above[j] + 1) // deletion
                .min(row[j - 1] + 1) // insertion
                .min(above[j - 1] + cost); // substitution

            if i > 1 && j > 1 && this_i == b[j - 2] && a[i - 2] == that_j {
                best = best.min(before[j - 2] + cost); // transposition
            }

            let best = best.min(cap);
            row[j] = best;
            row_min = row_min.min(best);

            if options.early_exit && i == j && best > EARLY_EXIT_THRESHOLD {
                trace!(row = i, value = best, "damerau early exit");
                return len_a;
            }
        }

        // A cell is reached from row i, row i-1 or row i-2 plus a
        // non-negative cost, so no later row can drop back under the cap.
        if row_min >= cap && above_min >= cap {
            trace!(row = i, limit, "damerau limit exceeded");
            return limit;
        }
        above_min = row_min;
        rows.rotate_left(1);
    }

    let distance = rows[1][len_b];
    if options.limit.is_none() {
        check_distance_bounds(distance, len_a, len_b);
    }
    distance.min(limit)
}

/// Restricted Damerau-Levenshtein distance between two strings, counted in
/// Unicode scalar values, with the normalized scores.
///
/// ```
/// use strdist::damerau_levenshtein_distance;
///
/// let result = damerau_levenshtein_distance("ab", "ba", None);
/// assert_eq!(result.steps, 1);
/// assert_eq!(result.relative, 0.5);
/// ```
pub fn damerau_levenshtein_distance(a: &str, b: &str, limit: Option<usize>) -> EditDistance {
    damerau_levenshtein_with(
        a,
        b,
        &DamerauOptions {
            limit,
            ..DamerauOptions::default()
        },
    )
}

/// Like [`damerau_levenshtein_distance`] with every option available.
pub fn damerau_levenshtein_with(a: &str, b: &str, options: &DamerauOptions) -> EditDistance {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let steps = damerau_levenshtein_units(&a, &b, options);
    let result = EditDistance::new(steps, a.len(), b.len());
    check_normalized(&result, a.len(), b.len());
    result
}
