//! Damerau matrix: known pairs, limits, early exit, normalized results.

use super::common::{assert_well_formed, chars, oracle_osa, pseudo_random_string, KNOWN_PAIRS};
use strdist::{
    damerau_levenshtein_distance, damerau_levenshtein_units, damerau_levenshtein_with,
    DamerauOptions,
};

#[test]
fn test_known_pairs() {
    for &(a, b, _, expected) in KNOWN_PAIRS {
        let result = damerau_levenshtein_distance(a, b, None);
        assert_eq!(result.steps, expected, "{:?} vs {:?}", a, b);
        assert_well_formed(&result, a, b);
    }
}

#[test]
fn test_matches_osa_oracle_on_random_pairs() {
    for seed in 0..50 {
        let a = pseudo_random_string(seed, (seed as usize * 7) % 40, "abc");
        let b = pseudo_random_string(seed + 500, (seed as usize * 11) % 40, "abc");
        assert_eq!(
            damerau_levenshtein_distance(&a, &b, None).steps,
            oracle_osa(&chars(&a), &chars(&b)),
            "{:?} vs {:?}",
            a,
            b
        );
    }
}

#[test]
fn test_length_difference_beyond_limit_reports_limit() {
    let result = damerau_levenshtein_distance("abc", "abcdefgh", Some(3));
    assert_eq!(result.steps, 3);
    assert_eq!(result.relative, 3.0 / 8.0);
}

#[test]
fn test_limit_never_hides_smaller_distance() {
    assert_eq!(damerau_levenshtein_distance("ab", "ba", Some(10)).steps, 1);
    assert_eq!(damerau_levenshtein_distance("kitten", "sitting", Some(2)).steps, 2);
}

#[test]
fn test_zero_limit() {
    assert_eq!(damerau_levenshtein_distance("abc", "abd", Some(0)).steps, 0);
    assert_eq!(damerau_levenshtein_distance("abc", "abcd", Some(0)).steps, 0);
}

#[test]
fn test_early_exit_fires_past_threshold() {
    let options = DamerauOptions::default().early_exit(true);
    // Disjoint alphabets: cell (i, i) is i, so the exit fires on the first
    // diagonal past the threshold.
    let a = "aaaaaaaaaa";
    let b = "bbbbbbbbbbbb";
    assert_eq!(damerau_levenshtein_with(a, b, &options).steps, a.len());
    assert_eq!(damerau_levenshtein_distance(a, b, None).steps, 12);
}

#[test]
fn test_early_exit_result_still_normalized() {
    let options = DamerauOptions::default().early_exit(true);
    let result = damerau_levenshtein_with("abcdefghij", "zzzzzabcdefghij", &options);
    assert_eq!(result.steps, 10);
    assert_well_formed(&result, "abcdefghij", "zzzzzabcdefghij");
}

#[test]
fn test_sentence_unaffected_without_early_exit() {
    let a = "the quick brown fox jumps over the lazy dog";
    let b = "a quick brown fox jumped over a lazy dog";
    assert_eq!(damerau_levenshtein_distance(a, b, None).steps, 8);
    let approx = damerau_levenshtein_with(a, b, &DamerauOptions::default().early_exit(true));
    assert_eq!(approx.steps, a.chars().count());
}

#[test]
fn test_counts_scalar_values() {
    assert_eq!(damerau_levenshtein_distance("日本", "本日", None).steps, 1);
    assert_eq!(damerau_levenshtein_distance("café", "cafe", None).steps, 1);
}

#[test]
fn test_generic_units() {
    let a: Vec<u16> = "ab".encode_utf16().collect();
    let b: Vec<u16> = "ba".encode_utf16().collect();
    assert_eq!(damerau_levenshtein_units(&a, &b, &DamerauOptions::default()), 1);
}
