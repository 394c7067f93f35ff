//! Properties of the restricted Damerau-Levenshtein result.

use super::common::assert_well_formed;
use super::oracles::{small_alphabet, unicode_text};
use proptest::prelude::*;
use strdist::{
    damerau_levenshtein_distance, damerau_levenshtein_with, levenshtein_distance, DamerauOptions,
};

proptest! {
    /// Property: relative + similarity = 1, both in [0, 1], for every option set.
    #[test]
    fn prop_normalized(
        a in unicode_text(40),
        b in unicode_text(40),
        limit in prop::option::of(0usize..20),
        early_exit in any::<bool>(),
    ) {
        let result = damerau_levenshtein_with(&a, &b, &DamerauOptions { limit, early_exit });
        assert_well_formed(&result, &a, &b);
    }

    /// Property: d(a, b) = d(b, a) for the exact engine.
    #[test]
    fn prop_symmetry(a in small_alphabet(40), b in small_alphabet(40)) {
        prop_assert_eq!(
            damerau_levenshtein_distance(&a, &b, None).steps,
            damerau_levenshtein_distance(&b, &a, None).steps
        );
    }

    /// Property: swaps only ever help, and never by more than half.
    #[test]
    fn prop_between_half_and_full_levenshtein(a in small_alphabet(40), b in small_alphabet(40)) {
        let damerau = damerau_levenshtein_distance(&a, &b, None).steps;
        let lev = levenshtein_distance(&a, &b);
        prop_assert!(damerau <= lev);
        prop_assert!(2 * damerau >= lev);
    }

    /// Property: one adjacent swap of distinct units is one step.
    #[test]
    fn prop_single_swap(s in "[a-z]{2,40}", at in any::<prop::sample::Index>()) {
        let chars: Vec<char> = s.chars().collect();
        let i = at.index(chars.len() - 1);
        prop_assume!(chars[i] != chars[i + 1]);
        let mut swapped = chars.clone();
        swapped.swap(i, i + 1);
        let swapped: String = swapped.into_iter().collect();
        prop_assert_eq!(damerau_levenshtein_distance(&s, &swapped, None).steps, 1);
    }

    /// Property: early exit never reports more than the longer input.
    #[test]
    fn prop_early_exit_bounded(a in small_alphabet(60), b in small_alphabet(60)) {
        let options = DamerauOptions::default().early_exit(true);
        let approx = damerau_levenshtein_with(&a, &b, &options).steps;
        prop_assert!(approx <= a.chars().count().max(b.chars().count()));
    }
}
