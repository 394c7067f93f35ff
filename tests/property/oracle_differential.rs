//! Differential testing: compare the optimized engines against the oracles.
//!
//! Each engine is tested against a simple, obviously-correct oracle
//! implementation. If they disagree, the oracle is right.

use super::oracles::{
    near_block_boundary, oracle_levenshtein, oracle_levenshtein_utf16, oracle_osa,
    small_alphabet, unicode_text,
};
use proptest::prelude::*;
use strdist::{damerau_levenshtein_distance, levenshtein_distance, levenshtein_distance_utf16};

// =============================================================================
// LEVENSHTEIN: Myers vs Wagner-Fischer
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Differential test: short inputs stay on the single-word path.
    #[test]
    fn diff_levenshtein_single_word(a in small_alphabet(64), b in small_alphabet(64)) {
        prop_assert_eq!(
            levenshtein_distance(&a, &b),
            oracle_levenshtein(&a, &b),
            "a={:?} b={:?}", a, b
        );
    }

    /// Differential test: long inputs go through the blocked path.
    #[test]
    fn diff_levenshtein_blocked(a in small_alphabet(260), b in small_alphabet(260)) {
        prop_assert_eq!(
            levenshtein_distance(&a, &b),
            oracle_levenshtein(&a, &b),
            "a={:?} b={:?}", a, b
        );
    }

    /// Differential test: references sitting on a block boundary.
    #[test]
    fn diff_levenshtein_block_boundary(a in near_block_boundary(), b in small_alphabet(130)) {
        prop_assert_eq!(levenshtein_distance(&a, &b), oracle_levenshtein(&a, &b));
    }

    /// Differential test: scalar values and UTF-16 units are both counted right.
    #[test]
    fn diff_levenshtein_unicode(a in unicode_text(80), b in unicode_text(80)) {
        prop_assert_eq!(levenshtein_distance(&a, &b), oracle_levenshtein(&a, &b));
        prop_assert_eq!(levenshtein_distance_utf16(&a, &b), oracle_levenshtein_utf16(&a, &b));
    }
}

// =============================================================================
// DAMERAU: matrix vs OSA oracle
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Differential test: the exact matrix engine is the OSA recurrence.
    #[test]
    fn diff_damerau_exact(a in small_alphabet(40), b in small_alphabet(40)) {
        prop_assert_eq!(
            damerau_levenshtein_distance(&a, &b, None).steps,
            oracle_osa(&a, &b),
            "a={:?} b={:?}", a, b
        );
    }

    /// Differential test: a limit is the exact distance, capped.
    #[test]
    fn diff_damerau_limit(
        a in small_alphabet(30),
        b in small_alphabet(30),
        limit in 0usize..12,
    ) {
        prop_assert_eq!(
            damerau_levenshtein_distance(&a, &b, Some(limit)).steps,
            oracle_osa(&a, &b).min(limit)
        );
    }

    /// Differential test: non-ASCII inputs count scalar values.
    #[test]
    fn diff_damerau_unicode(a in unicode_text(30), b in unicode_text(30)) {
        prop_assert_eq!(damerau_levenshtein_distance(&a, &b, None).steps, oracle_osa(&a, &b));
    }
}
