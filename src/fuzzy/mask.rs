// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match masks: for every code unit of a reference string, the bit positions
//! where it occurs.
//!
//! The reference is cut into 64-unit blocks and each unit gets one `u64` per
//! block. Units below 256 (ASCII, Latin-1, raw bytes) live in a dense table so
//! the hot loop is a single indexed load; anything wider goes through a hash map.
//!
//! A `PatternMask` belongs to exactly one computation at a time. `fill` writes
//! the bits of one reference and remembers which dense rows it touched,
//! `clear` zeroes those rows and drops the sparse entries, and the next `fill`
//! may start. Stale bits from an earlier reference
//! would silently corrupt every later distance, so `fill` checks (in debug
//! builds) that the table is empty before writing.

use std::collections::HashMap;

use crate::contracts::check_mask_clear;

/// Bits per block: the width of the machine word the matchers operate on.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Code units below this value are stored in the dense table.
const DENSE_UNITS: usize = 256;

/// A fixed-width element of a string's storage.
///
/// Distances are counted in code units, not user-perceived characters:
/// `char` gives Unicode scalar values, `u16` gives UTF-16 units (the unit
/// JavaScript strings are measured in), `u8` gives raw bytes.
pub trait CodeUnit: Copy + Eq {
    /// Numeric value of the unit, used as the mask table key.
    fn value(self) -> u32;
}

impl CodeUnit for u8 {
    #[inline]
    fn value(self) -> u32 {
        u32::from(self)
    }
}

impl CodeUnit for u16 {
    #[inline]
    fn value(self) -> u32 {
        u32::from(self)
    }
}

impl CodeUnit for u32 {
    #[inline]
    fn value(self) -> u32 {
        self
    }
}

impl CodeUnit for char {
    #[inline]
    fn value(self) -> u32 {
        u32::from(self)
    }
}

/// Number of 64-bit blocks needed for a reference of `len` units.
#[inline]
pub(crate) fn block_count(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

#[inline]
fn dense_row<T: CodeUnit>(unit: T) -> Option<usize> {
    let value = unit.value() as usize;
    (value < DENSE_UNITS).then_some(value)
}

/// Per-block occurrence bitmasks of a reference string.
#[derive(Debug, Clone, Default)]
pub(crate) struct PatternMask {
    /// Blocks of the reference currently loaded (0 when empty).
    blocks: usize,
    /// `DENSE_UNITS` rows of `blocks` words each.
    dense: Vec<u64>,
    /// One bit per dense row written since the last `clear`.
    written: [u64; DENSE_UNITS / WORD_BITS],
    sparse: HashMap<u32, Vec<u64>>,
}

impl PatternMask {
    /// Build a mask already loaded with `reference`.
    #[cfg(test)]
    pub fn from_reference<T: CodeUnit>(reference: &[T]) -> Self {
        let mut mask = Self::default();
        mask.fill(reference);
        mask
    }

    /// Load the occurrence bits of `reference`.
    ///
    /// The table must be empty: freshly built, or cleared since the last fill.
    pub fn fill<T: CodeUnit>(&mut self, reference: &[T]) {
        check_mask_clear(self);

        let blocks = block_count(reference.len());
        if self.dense.len() < DENSE_UNITS * blocks {
            self.dense.resize(DENSE_UNITS * blocks, 0);
        }
        self.blocks = blocks;

        for (position, &unit) in reference.iter().enumerate() {
            let block = position / WORD_BITS;
            let bit = 1u64 << (position % WORD_BITS);
            match dense_row(unit) {
                Some(row) => {
                    self.dense[row * blocks + block] |= bit;
                    self.written[row / WORD_BITS] |= 1 << (row % WORD_BITS);
                }
                None => {
                    self.sparse
                        .entry(unit.value())
                        .or_insert_with(|| vec![0; blocks])[block] |= bit;
                }
            }
        }
    }

    /// Empty the table, touching only the dense rows the last fill wrote.
    pub fn clear(&mut self) {
        let blocks = self.blocks;
        for (index, word) in self.written.iter_mut().enumerate() {
            let mut rows = std::mem::take(word);
            while rows != 0 {
                let row = index * WORD_BITS + rows.trailing_zeros() as usize;
                self.dense[row * blocks..(row + 1) * blocks].fill(0);
                rows &= rows - 1;
            }
        }
        self.sparse.clear();
        self.blocks = 0;
    }

    /// Occurrence bits of `unit` within `block` of the loaded reference.
    #[inline]
    pub fn get<T: CodeUnit>(&self, block: usize, unit: T) -> u64 {
        match dense_row(unit) {
            Some(row) => self.dense[row * self.blocks + block],
            None => self.sparse.get(&unit.value()).map_or(0, |words| words[block]),
        }
    }

    /// Blocks of the currently loaded reference.
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// True when no bit from any reference is set.
    pub fn is_clear(&self) -> bool {
        self.blocks == 0
            && self.sparse.is_empty()
            && self.written.iter().all(|&word| word == 0)
            && self.dense.iter().all(|&word| word == 0)
    }
}
