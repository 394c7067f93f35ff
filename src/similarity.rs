//! The interface similarity algorithms share.
//!
//! Each algorithm reports a distance (higher = more different, scale varies)
//! and a similarity in `[0, 1]`. Preprocessing happens here, before any
//! engine sees the strings: comparisons are case-insensitive unless asked
//! otherwise, and `normalize` additionally folds diacritics and whitespace.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::fuzzy::{damerau_levenshtein_units, DamerauOptions, Levenshtein};
use crate::scoring::distance_to_similarity;
use crate::utils::fold_diacritics;

/// How strings are prepared before comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimilarityOptions {
    /// Compare as-is instead of lowercasing both sides.
    pub case_sensitive: bool,
    /// Strip diacritics and collapse whitespace.
    pub normalize: bool,
}

/// Distance and similarity of one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// Higher = more different. Edit distances count edits.
    pub distance: f64,
    /// Higher = more similar, in `[0, 1]`.
    pub similarity: f64,
}

/// Apply `options` to both inputs, borrowing when nothing changes.
pub fn preprocess<'a>(
    a: &'a str,
    b: &'a str,
    options: &SimilarityOptions,
) -> (Cow<'a, str>, Cow<'a, str>) {
    (prepare(a, options), prepare(b, options))
}

fn prepare<'a>(value: &'a str, options: &SimilarityOptions) -> Cow<'a, str> {
    let mut value = Cow::Borrowed(value);
    if options.normalize {
        value = Cow::Owned(fold_diacritics(&value));
    }
    if !options.case_sensitive {
        let lowered = value.to_lowercase();
        if lowered != *value {
            value = Cow::Owned(lowered);
        }
    }
    value
}

/// A string similarity measure.
pub trait SimilarityAlgorithm {
    /// Stable identifier, as accepted by [`Algorithm::from_str`].
    fn name(&self) -> &'static str;

    /// Distance and similarity in one pass.
    fn compare(&self, a: &str, b: &str, options: &SimilarityOptions) -> SimilarityResult;

    fn distance(&self, a: &str, b: &str, options: &SimilarityOptions) -> f64 {
        self.compare(a, b, options).distance
    }

    fn similarity(&self, a: &str, b: &str, options: &SimilarityOptions) -> f64 {
        self.compare(a, b, options).similarity
    }
}

/// Scores an edit distance against the longer (preprocessed) input.
fn edit_result(steps: usize, len_a: usize, len_b: usize) -> SimilarityResult {
    let distance = steps as f64;
    SimilarityResult {
        distance,
        similarity: distance_to_similarity(distance, len_a.max(len_b) as f64),
    }
}

/// Levenshtein distance through the similarity interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinSimilarity;

impl SimilarityAlgorithm for LevenshteinSimilarity {
    fn name(&self) -> &'static str {
        Algorithm::Levenshtein.as_str()
    }

    fn compare(&self, a: &str, b: &str, options: &SimilarityOptions) -> SimilarityResult {
        let (a, b) = preprocess(a, b, options);
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let steps = Levenshtein::new().distance(&a, &b);
        edit_result(steps, a.len(), b.len())
    }
}

/// Restricted Damerau-Levenshtein distance through the similarity interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct DamerauLevenshteinSimilarity {
    pub options: DamerauOptions,
}

impl SimilarityAlgorithm for DamerauLevenshteinSimilarity {
    fn name(&self) -> &'static str {
        Algorithm::DamerauLevenshtein.as_str()
    }

    fn compare(&self, a: &str, b: &str, options: &SimilarityOptions) -> SimilarityResult {
        let (a, b) = preprocess(a, b, options);
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let steps = damerau_levenshtein_units(&a, &b, &self.options);
        edit_result(steps, a.len(), b.len())
    }
}

/// The algorithms available by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[default]
    Levenshtein,
    DamerauLevenshtein,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Levenshtein => "levenshtein",
            Algorithm::DamerauLevenshtein => "damerau-levenshtein",
        }
    }

    /// The algorithm as a trait object. `damerau` is ignored by Levenshtein.
    pub fn build(self, damerau: DamerauOptions) -> Box<dyn SimilarityAlgorithm + Send + Sync> {
        match self {
            Algorithm::Levenshtein => Box::new(LevenshteinSimilarity),
            Algorithm::DamerauLevenshtein => {
                Box::new(DamerauLevenshteinSimilarity { options: damerau })
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "levenshtein" | "lev" => Ok(Algorithm::Levenshtein),
            "damerau-levenshtein" | "damerau" | "osa" => Ok(Algorithm::DamerauLevenshtein),
            _ => Err(ConfigError::UnknownAlgorithm {
                name: name.to_string(),
            }),
        }
    }
}
