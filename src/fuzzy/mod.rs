// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance engines.
//!
//! Two implementations here: Myers' bit-parallel Levenshtein for plain edit
//! distance, and a DP matrix for restricted Damerau-Levenshtein, which also
//! counts adjacent swaps as one edit.

mod damerau;
mod levenshtein;
mod mask;
mod myers;

pub use damerau::*;
pub use levenshtein::*;
pub use mask::{CodeUnit, WORD_BITS};
pub(crate) use mask::PatternMask;
