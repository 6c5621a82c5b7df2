//! Longest-matching-block sequence alignment.
//!
//! This is the Ratcliff/Obershelp approach: find the longest run of equal
//! elements shared by both sequences, then do the same for the parts to the
//! left and to the right of it, until nothing else matches. The gaps between
//! the matching blocks become `replace`, `delete` or `insert` opcodes.
//!
//! Elements only need `Hash + Eq`; hashing is used to index the positions of
//! each element in the second sequence.
//!
//! ```rust
//! use superdiff::{align, DiffTag};
//!
//! let first = ["q", "a", "b"];
//! let second = ["a", "b"];
//! let opcodes = align(&first, &second);
//!
//! assert_eq!(opcodes[0].tag, DiffTag::Delete);
//! assert_eq!(opcodes[1].tag, DiffTag::Equal);
//! ```

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

use crate::differ::DiffTag;

/// A run of equal elements: `first[first..first + len]` equals
/// `second[second..second + len]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    /// Start of the run in the first sequence
    pub first: usize,

    /// Start of the run in the second sequence
    pub second: usize,

    /// The number of equal elements
    pub len: usize,
}

impl MatchingBlock {
    /// Create a new matching block
    pub fn new(first: usize, second: usize, len: usize) -> Self {
        Self { first, second, len }
    }

    /// The covered range in the first sequence
    pub fn first_range(&self) -> Range<usize> {
        self.first..self.first + self.len
    }

    /// The covered range in the second sequence
    pub fn second_range(&self) -> Range<usize> {
        self.second..self.second + self.len
    }
}

/// One step of an edit script between two sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcode {
    /// How the two ranges relate
    pub tag: DiffTag,

    /// The affected range in the first sequence
    pub first: Range<usize>,

    /// The affected range in the second sequence
    pub second: Range<usize>,
}

impl Opcode {
    /// Create a new opcode
    pub fn new(tag: DiffTag, first: Range<usize>, second: Range<usize>) -> Self {
        Self { tag, first, second }
    }
}

/// Compares two sequences of hashable elements.
///
/// Results are deterministic: when several longest matches exist, the one
/// starting earliest in the first sequence wins, then the one starting
/// earliest in the second.
pub struct SequenceMatcher<'a, T> {
    first: &'a [T],
    second: &'a [T],

    /// Ascending positions of each element of `second`
    second_index: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Hash + Eq> SequenceMatcher<'a, T> {
    /// Create a matcher for the two sequences
    pub fn new(first: &'a [T], second: &'a [T]) -> Self {
        let mut second_index: HashMap<&'a T, Vec<usize>> = HashMap::new();
        for (j, element) in second.iter().enumerate() {
            second_index.entry(element).or_default().push(j);
        }

        Self {
            first,
            second,
            second_index,
        }
    }

    /// Find the longest block of equal elements within the two ranges.
    ///
    /// Returns a zero-length block at the start of both ranges when they
    /// share no element.
    pub fn find_longest_match(
        &self,
        first_range: Range<usize>,
        second_range: Range<usize>,
    ) -> MatchingBlock {
        let mut best = MatchingBlock::new(first_range.start, second_range.start, 0);

        for i in first_range.clone() {
            // Nothing starting here or later can be strictly longer
            if best.len >= first_range.end - i {
                break;
            }

            let Some(positions) = self.second_index.get(&self.first[i]) else {
                continue;
            };

            let from = positions.partition_point(|&j| j < second_range.start);
            for &j in &positions[from..] {
                if j >= second_range.end || best.len >= second_range.end - j {
                    break;
                }

                // Already covered by the longer match starting at (i - 1, j - 1)
                if i > first_range.start
                    && j > second_range.start
                    && self.first[i - 1] == self.second[j - 1]
                {
                    continue;
                }

                let mut len = 1;
                while i + len < first_range.end
                    && j + len < second_range.end
                    && self.first[i + len] == self.second[j + len]
                {
                    len += 1;
                }

                if len > best.len {
                    best = MatchingBlock::new(i, j, len);
                }
            }
        }

        best
    }

    /// Get the matching blocks of the two sequences, in order.
    ///
    /// Adjacent blocks are merged, and the list always ends with a
    /// zero-length block at `(first.len(), second.len())`.
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut pending = vec![(0..self.first.len(), 0..self.second.len())];
        let mut blocks = Vec::new();

        while let Some((first_range, second_range)) = pending.pop() {
            let block = self.find_longest_match(first_range.clone(), second_range.clone());
            if block.len == 0 {
                continue;
            }

            if first_range.start < block.first && second_range.start < block.second {
                pending.push((first_range.start..block.first, second_range.start..block.second));
            }

            let first_end = block.first + block.len;
            let second_end = block.second + block.len;
            if first_end < first_range.end && second_end < second_range.end {
                pending.push((first_end..first_range.end, second_end..second_range.end));
            }

            blocks.push(block);
        }

        blocks.sort_unstable_by_key(|block| (block.first, block.second));

        let mut merged: Vec<MatchingBlock> = Vec::with_capacity(blocks.len() + 1);
        for block in blocks {
            if let Some(last) = merged.last_mut() {
                if last.first + last.len == block.first && last.second + last.len == block.second {
                    last.len += block.len;
                    continue;
                }
            }
            merged.push(block);
        }
        merged.push(MatchingBlock::new(self.first.len(), self.second.len(), 0));

        log::trace!(
            "found {} matching blocks between {} and {} elements",
            merged.len() - 1,
            self.first.len(),
            self.second.len()
        );

        merged
    }

    /// Get the edit script turning the first sequence into the second.
    ///
    /// The opcode ranges cover both sequences contiguously, in order, with
    /// no gaps or overlaps.
    pub fn opcodes(&self) -> Vec<Opcode> {
        let mut opcodes = Vec::new();
        let mut i = 0;
        let mut j = 0;

        for block in self.matching_blocks() {
            let tag = match (i < block.first, j < block.second) {
                (true, true) => Some(DiffTag::Replace),
                (true, false) => Some(DiffTag::Delete),
                (false, true) => Some(DiffTag::Insert),
                (false, false) => None,
            };
            if let Some(tag) = tag {
                opcodes.push(Opcode::new(tag, i..block.first, j..block.second));
            }

            if block.len > 0 {
                opcodes.push(Opcode::new(
                    DiffTag::Equal,
                    block.first_range(),
                    block.second_range(),
                ));
            }

            i = block.first + block.len;
            j = block.second + block.len;
        }

        opcodes
    }

    /// Similarity of the two sequences in `[0.0, 1.0]`.
    ///
    /// Computed as `2 * M / T` where `M` is the number of matched elements
    /// and `T` the total number of elements. Two empty sequences are
    /// identical.
    pub fn ratio(&self) -> f64 {
        let total = self.first.len() + self.second.len();
        if total == 0 {
            return 1.0;
        }

        let matched: usize = self.matching_blocks().iter().map(|block| block.len).sum();
        2.0 * matched as f64 / total as f64
    }
}

/// Compute the opcodes between two sequences
pub fn align<T: Hash + Eq>(first: &[T], second: &[T]) -> Vec<Opcode> {
    SequenceMatcher::new(first, second).opcodes()
}
