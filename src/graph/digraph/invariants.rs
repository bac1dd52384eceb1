//! Debug-only structural invariant checks.
//!
//! Mutations only re-check the adjacency list they touched; the whole-graph
//! sweep in `validate_invariants` is an explicit call. Release builds compile
//! the per-mutation checks down to nothing.

#[cfg(debug_assertions)]
use std::collections::BTreeSet;

use super::{Digraph, VertexKey};

/// Debug-asserts a structural invariant with a message.
#[cfg(debug_assertions)]
#[inline(always)]
fn invariant_msg(condition: bool, message: &str) {
    debug_assert!(condition, "Graph invariant violated: {message}");
}

impl<V, E> Digraph<V, E> {
    /// Validates the structural invariants of the whole graph.
    ///
    /// Checks that:
    /// 1. Every edge is stored under its own source vertex
    /// 2. Every edge target is a present vertex
    /// 3. No ordered pair is connected twice
    /// 4. The running edge counter equals the sum of out-degrees
    ///
    /// Costs \(O(V + E \log d)\); mutations never call it.
    ///
    /// Returns `true` if all invariants hold; panics otherwise.
    #[cfg(debug_assertions)]
    pub fn validate_invariants(&self) -> bool {
        let mut total = 0usize;
        for (&key, vertex) in &self.vertices {
            let mut targets = BTreeSet::new();
            for edge in &vertex.edges {
                invariant_msg(edge.from == key, "edge stored under a foreign source vertex");
                invariant_msg(
                    self.vertices.contains_key(&edge.to),
                    "edge target is not a vertex of this graph",
                );
                invariant_msg(targets.insert(edge.to), "duplicate edge for an ordered pair");
            }
            total += vertex.edges.len();
        }
        invariant_msg(total == self.edge_count, "edge counter out of sync with adjacency lists");
        true
    }

    /// Checks the single `from -> to` slot after an insertion or removal:
    /// the source exists, and the pair is stored exactly once (`present`) or
    /// not at all. \(O(\log V + \text{out-degree})\).
    #[inline]
    pub(super) fn check_edge_slot(&self, from: VertexKey, to: VertexKey, present: bool) {
        #[cfg(debug_assertions)]
        {
            let Some(source) = self.vertices.get(&from) else {
                invariant_msg(false, "mutated edge lost its source vertex");
                return;
            };
            let stored = source
                .edges
                .iter()
                .filter(|e| e.to == to)
                .inspect(|e| {
                    invariant_msg(e.from == from, "edge stored under a foreign source vertex");
                })
                .count();
            invariant_msg(
                stored == usize::from(present),
                "edge slot holds the wrong number of edges",
            );
            if present {
                invariant_msg(
                    self.vertices.contains_key(&to),
                    "edge target is not a vertex of this graph",
                );
            }
            invariant_msg(
                source.edges.len() <= self.edge_count,
                "edge counter smaller than one adjacency list",
            );
        }
        #[cfg(not(debug_assertions))]
        let _ = (from, to, present);
    }
}
