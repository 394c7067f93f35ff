//! Runtime contracts for the distance engines.
//!
//! Debug-mode assertions for the properties every result must satisfy:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`; the checked
//!    expressions are not even evaluated)
//! 2. **Early failure** while developing the bit-parallel kernels, where a
//!    wrong carry shows up as a slightly-off number rather than a crash
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                        |
//! |----------------------------|-------------------------------------------------|
//! | `check_mask_clear`         | mask table holds no bits before a fill          |
//! | `check_distance_bounds`    | `|len_a - len_b| <= d <= max(len_a, len_b)`     |
//! | `check_normalized`         | `relative = steps / max_len`, sums to one       |

use crate::fuzzy::{PatternMask, EARLY_EXIT_THRESHOLD, WORD_BITS};
use crate::scoring::EditDistance;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    // The matchers read the top row of a block through `1 << 63`.
    assert!(WORD_BITS == 64);
    // A diagonal cell can only exceed the threshold once it has been reached.
    assert!(EARLY_EXIT_THRESHOLD > 0);
};

// ============================================================================
// MASK TABLE CONTRACTS
// ============================================================================

/// Check that a mask table carries nothing over from a previous reference.
///
/// # Panics (debug builds only)
/// Panics if any occurrence bit is still set.
#[inline]
pub(crate) fn check_mask_clear(mask: &PatternMask) {
    debug_assert!(
        mask.is_clear(),
        "Contract violation: mask table not cleared before fill ({} blocks loaded)",
        mask.blocks()
    );
}

// ============================================================================
// DISTANCE CONTRACTS
// ============================================================================

/// Check the bounds every exact edit distance satisfies.
///
/// The length difference is a lower bound (that many insertions are
/// unavoidable); the longer length is an upper bound (substitute the overlap,
/// insert the rest).
///
/// # Panics (debug builds only)
/// Panics if `distance` falls outside `[|len_a - len_b|, max(len_a, len_b)]`.
#[inline]
pub fn check_distance_bounds(distance: usize, len_a: usize, len_b: usize) {
    debug_assert!(
        distance >= len_a.abs_diff(len_b),
        "Contract violation: distance {} below length difference of {} and {}",
        distance,
        len_a,
        len_b
    );
    debug_assert!(
        distance <= len_a.max(len_b),
        "Contract violation: distance {} above max length of {} and {}",
        distance,
        len_a,
        len_b
    );
}

/// Check that a normalized result agrees with its raw distance.
///
/// # Panics (debug builds only)
/// Panics if `relative` or `similarity` disagree with `steps`.
#[inline]
pub fn check_normalized(result: &EditDistance, len_a: usize, len_b: usize) {
    let max_len = len_a.max(len_b);
    let expected = if max_len == 0 {
        0.0
    } else {
        result.steps as f64 / max_len as f64
    };
    debug_assert!(
        (result.relative - expected).abs() < 1e-12,
        "Contract violation: relative {} != {} / {}",
        result.relative,
        result.steps,
        max_len
    );
    debug_assert!(
        (result.relative + result.similarity - 1.0).abs() < 1e-12,
        "Contract violation: relative {} + similarity {} != 1",
        result.relative,
        result.similarity
    );
}
