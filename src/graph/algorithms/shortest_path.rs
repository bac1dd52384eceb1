//! Single-source shortest paths (Dijkstra).
//!
//! The frontier is a binary min-heap of `(tentative distance, vertex)` entries.
//! Stale entries are left in the heap and skipped when popped, so each vertex
//! is settled exactly once. Edge weights come from a caller-supplied function
//! over the edge payload and must be non-negative; that precondition is not
//! checked.
//!
//! Among vertices with equal tentative distance the extraction order is
//! implementation-defined. Callers must not rely on a particular tie-break.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use num_traits::Zero;

use super::dense_adjacency;
use crate::graph::access::visited::{DenseIndex, VisitedSet};
use crate::graph::{Digraph, DigraphError, DigraphResult, VertexKey};

/// Heap entry ordered so that `BinaryHeap` pops the *smallest* distance.
///
/// Distances only need `PartialOrd`; incomparable values (NaN) sort after
/// every comparable one.
#[derive(Copy, Clone, Debug)]
struct MinScored<W>(W, usize);

impl<W: PartialOrd> PartialEq for MinScored<W> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for MinScored<W> {}

impl<W: PartialOrd> PartialOrd for MinScored<W> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PartialOrd> Ord for MinScored<W> {
    #[inline]
    #[allow(clippy::eq_op)]
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (&self.0, &other.0);
        match a.partial_cmp(b) {
            Some(ord) => ord.reverse(),
            None if a != a && b != b => Ordering::Equal,
            None if a != a => Ordering::Less,
            None => Ordering::Greater,
        }
    }
}

/// The outcome of [`Digraph::find_shortest_paths`].
///
/// Every vertex of the graph appears in the predecessor map. The start vertex
/// and every vertex the search never reached map to themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<W> {
    start: VertexKey,
    predecessors: BTreeMap<VertexKey, VertexKey>,
    distances: BTreeMap<VertexKey, W>,
}

impl<W: Copy> ShortestPaths<W> {
    /// The vertex the search started from.
    #[inline]
    pub fn start(&self) -> VertexKey {
        self.start
    }

    /// Predecessor of `vertex` on its shortest path, or `None` if `vertex`
    /// was not in the graph when the search ran.
    pub fn predecessor(&self, vertex: VertexKey) -> Option<VertexKey> {
        self.predecessors.get(&vertex).copied()
    }

    /// The full predecessor map.
    pub fn predecessors(&self) -> &BTreeMap<VertexKey, VertexKey> {
        &self.predecessors
    }

    /// Consumes the result, returning the predecessor map.
    pub fn into_predecessors(self) -> BTreeMap<VertexKey, VertexKey> {
        self.predecessors
    }

    /// Shortest distance from the start to `vertex`; `None` if unreachable.
    pub fn distance(&self, vertex: VertexKey) -> Option<W> {
        self.distances.get(&vertex).copied()
    }

    /// Returns `true` if `vertex` was reached from the start.
    pub fn is_reachable(&self, vertex: VertexKey) -> bool {
        self.distances.contains_key(&vertex)
    }

    /// The edges of the shortest path from the start to `dest`, in travel
    /// order, as `(from, to)` pairs.
    ///
    /// The path to the start itself is empty. Returns `None` if `dest` was
    /// not reached.
    pub fn path_to(&self, dest: VertexKey) -> Option<Vec<(VertexKey, VertexKey)>> {
        if !self.is_reachable(dest) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = dest;
        while current != self.start {
            let prev = self.predecessor(current)?;
            // Only the start and unreached vertices are their own predecessor.
            if prev == current || path.len() >= self.predecessors.len() {
                return None;
            }
            path.push((prev, current));
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

impl<V, E> Digraph<V, E> {
    /// Computes shortest-path predecessors from `start` to every vertex with
    /// Dijkstra's algorithm.
    ///
    /// `weight_fn` maps an edge payload to its weight. Weights are compared at
    /// full precision in whatever type `W` the function returns; return an
    /// integer type to get integer arithmetic. Weights must be non-negative.
    ///
    /// Path lengths are summed in `W` as well, so every reachable distance must
    /// fit in it: integer overflow panics in debug builds and wraps in release.
    /// Widen narrow payloads inside `weight_fn`, e.g. `|w| u32::from(*w)`.
    ///
    /// # Errors
    /// [`DigraphError::UnknownVertex`](crate::DigraphError::UnknownVertex) if
    /// `start` is absent.
    pub fn find_shortest_paths<W, F>(
        &self,
        start: VertexKey,
        mut weight_fn: F,
    ) -> DigraphResult<ShortestPaths<W>>
    where
        W: Copy + PartialOrd + Zero,
        F: FnMut(&E) -> W,
    {
        let index = DenseIndex::from_sorted(self.vertices());
        let Some(source) = index.index_of(start) else {
            debug_event!(start, "shortest paths from an unknown vertex");
            return Err(DigraphError::UnknownVertex(start));
        };
        let n = index.len();
        let adjacency = dense_adjacency(self, &index, false);

        // Edge weights in the same order as `adjacency`.
        let weights: Vec<Vec<W>> = self
            .iter()
            .map(|(_, vertex)| vertex.edges().iter().map(|e| weight_fn(e.info())).collect())
            .collect();

        let mut dist: Vec<Option<W>> = vec![None; n];
        let mut pred: Vec<Option<usize>> = vec![None; n];
        let mut settled = VisitedSet::new(n);
        let mut heap = BinaryHeap::new();

        dist[source] = Some(W::zero());
        heap.push(MinScored(W::zero(), source));

        while let Some(MinScored(d, u)) = heap.pop() {
            if !settled.try_visit(u) {
                continue;
            }

            for (&v, &weight) in adjacency[u].iter().zip(&weights[u]) {
                if settled.is_visited(v) {
                    continue;
                }
                let candidate = d + weight;
                if dist[v].map_or(true, |current| candidate < current) {
                    dist[v] = Some(candidate);
                    pred[v] = Some(u);
                    heap.push(MinScored(candidate, v));
                }
            }
        }

        debug_event!(start, settled = settled.count(), vertices = n, "shortest paths computed");

        let mut predecessors = BTreeMap::new();
        let mut distances = BTreeMap::new();
        for (i, (d, p)) in dist.into_iter().zip(pred).enumerate() {
            let key = index.key_at(i);
            predecessors.insert(key, p.map_or(key, |p| index.key_at(p)));
            if let Some(d) = d {
                distances.insert(key, d);
            }
        }

        Ok(ShortestPaths {
            start,
            predecessors,
            distances,
        })
    }
}
