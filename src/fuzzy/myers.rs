// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Myers' bit-vector Levenshtein recurrence.
//!
//! Instead of filling an `n × m` table of integers, each column of the table is
//! stored as two bit vectors of vertical deltas: `pv` (cell is one more than the
//! cell above) and `mv` (one less). One column step is a handful of word
//! operations, so a reference of up to 64 units costs O(m) word ops in total.
//!
//! Longer references are cut into 64-unit blocks. Within one column step the
//! blocks are processed bottom-up in order: block `w` hands the horizontal
//! delta leaving its top row to block `w + 1` as a pair of carry bits. That
//! hand-off is the only dependency between blocks, and it forbids processing
//! the blocks of one step out of order.
//!
//! References:
//! - G. Myers, "A fast bit-vector algorithm for approximate string matching
//!   based on dynamic programming", J. ACM 46(3), 1999.
//! - H. Hyyrö, "A bit-vector algorithm for computing Levenshtein and
//!   Damerau edit distances", Nordic J. Computing 10, 2003.

use super::mask::{block_count, CodeUnit, PatternMask, WORD_BITS};

/// Distance between a reference of `1..=64` units (loaded into `mask`) and
/// `other`.
pub(crate) fn single_block<T: CodeUnit>(
    mask: &PatternMask,
    reference_len: usize,
    other: &[T],
) -> usize {
    debug_assert!((1..=WORD_BITS).contains(&reference_len));

    let last = 1u64 << (reference_len - 1);
    let mut pv = u64::MAX;
    let mut mv = 0u64;
    let mut score = reference_len;

    for &unit in other {
        let eq = mask.get(0, unit);
        let xv = eq | mv;
        let eq = eq | ((eq & pv).wrapping_add(pv) ^ pv);
        mv |= !(eq | pv);
        pv &= eq;

        if mv & last != 0 {
            score += 1;
        }
        if pv & last != 0 {
            score -= 1;
        }

        mv = (mv << 1) | 1;
        pv = (pv << 1) | !(xv | mv);
        mv &= xv;
    }

    score
}

/// Horizontal delta leaving the top row of a block, as single bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Carry {
    positive: u64,
    negative: u64,
}

impl Carry {
    /// Row 0 of the table grows by one per column.
    const ROW_ZERO: Self = Self {
        positive: 1,
        negative: 0,
    };
}

/// Vertical delta vectors of every block, reused across calls.
#[derive(Debug, Clone, Default)]
pub(crate) struct BlockState {
    vp: Vec<u64>,
    vn: Vec<u64>,
}

impl BlockState {
    fn reset(&mut self, blocks: usize) {
        self.vp.clear();
        self.vp.resize(blocks, u64::MAX);
        self.vn.clear();
        self.vn.resize(blocks, 0);
    }

    /// One column step of one block. `top` selects the block's highest row.
    #[inline]
    fn advance(&mut self, block: usize, eq: u64, top: u64, carry_in: Carry) -> Carry {
        let vp = self.vp[block];
        let vn = self.vn[block];

        let x = eq | carry_in.negative;
        let d0 = ((x & vp).wrapping_add(vp) ^ vp) | x | vn;
        let hp = vn | !(d0 | vp);
        let hn = d0 & vp;

        let carry_out = Carry {
            positive: u64::from(hp & top != 0),
            negative: u64::from(hn & top != 0),
        };

        let hp = (hp << 1) | carry_in.positive;
        let hn = (hn << 1) | carry_in.negative;
        self.vp[block] = hn | !(d0 | hp);
        self.vn[block] = hp & d0;

        carry_out
    }
}

/// Distance between a reference of any non-zero length (loaded into `mask`)
/// and `other`, sweeping all blocks per unit of `other`.
pub(crate) fn blocked<T: CodeUnit>(
    mask: &PatternMask,
    reference_len: usize,
    other: &[T],
    state: &mut BlockState,
) -> usize {
    debug_assert!(reference_len > 0);

    let blocks = block_count(reference_len);
    let last_block = blocks - 1;
    let last = 1u64 << ((reference_len - 1) % WORD_BITS);
    state.reset(blocks);

    let mut score = reference_len;
    for &unit in other {
        let mut carry = Carry::ROW_ZERO;
        for block in 0..blocks {
            let top = if block == last_block { last } else { 1 << 63 };
            carry = state.advance(block, mask.get(block, unit), top, carry);
        }
        score = score + carry.positive as usize - carry.negative as usize;
    }

    score
}
