//! Dense scratch state for graph traversals.
//!
//! Vertex keys are sparse, caller-chosen integers. Traversals first map them
//! onto `0..n` with a `DenseIndex` and then track progress in a word-packed
//! `VisitedSet`, keeping the hot loop on contiguous memory.

use crate::graph::VertexKey;

/// A bijection between the graph's vertex keys and `0..n`.
///
/// Built from keys in ascending order, so lookups are a binary search.
pub(crate) struct DenseIndex {
    keys: Vec<VertexKey>,
}

impl DenseIndex {
    /// Builds an index from keys that are already sorted and unique.
    pub(crate) fn from_sorted(keys: Vec<VertexKey>) -> Self {
        debug_assert!(keys.windows(2).all(|w| w[0] < w[1]), "keys must be sorted and unique");
        Self { keys }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub(crate) fn index_of(&self, key: VertexKey) -> Option<usize> {
        self.keys.binary_search(&key).ok()
    }

    #[inline]
    pub(crate) fn key_at(&self, idx: usize) -> VertexKey {
        self.keys[idx]
    }
}

/// A dense, word-packed visited set.
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    len: usize,
    count: usize,
}

impl VisitedSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0u64; len.div_ceil(64)],
            len,
            count: 0,
        }
    }

    /// Number of bits (vertices) tracked.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Number of vertices marked so far.
    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` iff `idx` was not yet visited, marking it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, idx: usize) -> bool {
        let word = &mut self.words[idx / 64];
        let mask = 1u64 << (idx % 64);
        if *word & mask == 0 {
            *word |= mask;
            self.count += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    pub(crate) fn is_visited(&self, idx: usize) -> bool {
        self.words[idx / 64] & (1u64 << (idx % 64)) != 0
    }

    /// Returns `true` iff every tracked vertex has been visited.
    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.count == self.len
    }
}
