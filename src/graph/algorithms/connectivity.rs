//! Strong connectivity.
//!
//! A digraph is strongly connected iff some root reaches every vertex and
//! every vertex reaches that root. The second half is a forward search on the
//! transpose graph, so two DFS passes decide the whole question in
//! \(O(V + E)\) instead of searching once per ordered vertex pair.

use super::dense_adjacency;
use crate::graph::access::visited::{DenseIndex, VisitedSet};
use crate::graph::Digraph;

impl<V, E> Digraph<V, E> {
    /// Returns `true` if every vertex is reachable from every other vertex.
    ///
    /// Graphs with zero or one vertex are strongly connected: they have no
    /// pair of distinct vertices to disconnect.
    pub fn is_strongly_connected(&self) -> bool {
        let index = DenseIndex::from_sorted(self.vertices());
        if index.len() <= 1 {
            return true;
        }

        let root = 0;
        let forward = dense_adjacency(self, &index, false);
        let connected = reaches_all(&forward, root) && {
            let transpose = dense_adjacency(self, &index, true);
            reaches_all(&transpose, root)
        };

        debug_event!(
            root = index.key_at(root),
            vertices = index.len(),
            connected,
            "strong connectivity checked"
        );
        connected
    }
}

/// Iterative DFS from `root`; `true` iff every vertex gets visited.
fn reaches_all(adjacency: &[Vec<usize>], root: usize) -> bool {
    let mut visited = VisitedSet::new(adjacency.len());
    let mut stack = vec![root];
    visited.try_visit(root);

    while let Some(u) = stack.pop() {
        for &v in &adjacency[u] {
            if visited.try_visit(v) {
                stack.push(v);
            }
        }
        if visited.is_full() {
            return true;
        }
    }

    debug_assert!(visited.count() < visited.len());
    false
}
