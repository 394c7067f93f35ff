//! Edit distance with bit-parallel Levenshtein and restricted Damerau-Levenshtein.
//!
//! Two engines, one result shape:
//!
//! - **Levenshtein** via Myers' bit-vector algorithm. The longer input is
//!   packed into 64-bit words; inputs longer than one word are split into
//!   blocks that pass carry bits to each other. Near-linear in the input length.
//! - **Restricted Damerau-Levenshtein** (optimal string alignment) via a DP
//!   matrix that also counts adjacent swaps as one edit. Quadratic, with an
//!   optional distance cap and an optional early exit for dissimilar inputs.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌────────────────┐     ┌─────────────┐
//! │ similarity.rs│────▶│ fuzzy/         │────▶│ scoring.rs  │
//! │ (preprocess, │     │  levenshtein ──┼─▶ myers ─▶ mask   │
//! │  Algorithm)  │     │  damerau       │     │ (0–1 score) │
//! └──────────────┘     └────────────────┘     └─────────────┘
//!        ▲                     │
//!        │                     ▼
//! ┌──────────────┐     ┌────────────────┐
//! │  config.rs   │     │  contracts.rs  │
//! │ (JSON file)  │     │ (debug checks) │
//! └──────────────┘     └────────────────┘
//! ```
//!
//! Nothing in `fuzzy` calls back into the similarity layer: preprocessing
//! always happens before a distance is computed.
//!
//! # Usage
//!
//! ```
//! use strdist::{damerau_levenshtein_distance, levenshtein_distance};
//!
//! assert_eq!(levenshtein_distance("ab", "ba"), 2);
//!
//! let result = damerau_levenshtein_distance("ab", "ba", None);
//! assert_eq!(result.steps, 1);
//! assert_eq!(result.similarity, 0.5);
//! ```

// Module declarations
pub mod config;
pub mod contracts;
pub mod error;
pub mod fuzzy;
mod scoring;
pub mod similarity;
pub mod testing;
mod utils;

// Re-exports for public API
pub use config::CompareConfig;
pub use error::ConfigError;
pub use fuzzy::{
    damerau_levenshtein_distance, damerau_levenshtein_units, damerau_levenshtein_with,
    levenshtein_distance, levenshtein_distance_utf16, levenshtein_units, levenshtein_within,
    CodeUnit, DamerauOptions, Levenshtein, EARLY_EXIT_THRESHOLD, WORD_BITS,
};
pub use scoring::{
    distance_to_similarity, max_distance, normalize, similarity_to_distance, EditDistance,
};
pub use similarity::{
    preprocess, Algorithm, DamerauLevenshteinSimilarity, LevenshteinSimilarity,
    SimilarityAlgorithm, SimilarityOptions, SimilarityResult,
};
pub use utils::{collapse_whitespace, fold_diacritics};
