//! # `digraph` - Keyed Directed Graph Store
//!
//! A generic directed graph stored as adjacency lists. Vertices are identified
//! by caller-assigned integer keys and own a payload plus the list of their
//! outgoing edges; edges own a payload and name their endpoints by key.
//!
//! ## Guarantees
//!
//! - **Exclusive ownership**: the graph owns every vertex, every vertex owns its
//!   outgoing edges. Edges refer to their target by key, never by address.
//! - **All-or-nothing mutation**: every fallible operation validates before it
//!   mutates. A call that returns an error leaves the graph unchanged.
//! - **Running counters**: vertex and edge counts are maintained on every
//!   mutation and read in \(O(1)\).
//! - **Deep copies**: `Clone` yields an independent graph; `std::mem::take`
//!   moves the structure out and leaves an empty graph behind.
//!
//! In debug builds each edge mutation re-checks the slot it touched, and
//! `Digraph::validate_invariants` sweeps the whole graph on demand (endpoints
//! exist, counters match, no duplicate edges).
//!
//! ## Algorithms
//!
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `is_strongly_connected` | \(O(V + E)\) | DFS on the graph and on its transpose |
//! | `find_shortest_paths` | \(O((V + E) \log V)\) | Dijkstra, binary-heap frontier |
//!
//! ## Example
//!
//! ```rust
//! use digraph::{Digraph, DigraphError};
//!
//! let mut roads: Digraph<&str, f64> = Digraph::new();
//! roads.add_vertex(1, "Irvine").unwrap();
//! roads.add_vertex(2, "Tustin").unwrap();
//! roads.add_edge(1, 2, 4.5).unwrap();
//!
//! assert_eq!(roads.add_edge(1, 2, 9.0), Err(DigraphError::DuplicateEdge { from: 1, to: 2 }));
//! assert_eq!(roads.edge_count(), 1);
//!
//! let paths = roads.find_shortest_paths(1, |miles| *miles).unwrap();
//! assert_eq!(paths.predecessor(2), Some(1));
//! assert_eq!(paths.path_to(2), Some(vec![(1, 2)]));
//! ```
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, mutations emit `trace` events and
//! rejected operations and algorithm summaries emit `debug` events. Without
//! the feature the instrumentation compiles away.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

/// Emits a `tracing::debug!` event when the `tracing` feature is enabled.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    };
}

pub mod graph;

pub use graph::{Digraph, DigraphError, DigraphResult, Edge, ShortestPaths, Vertex, VertexKey};

// Compile-time layout checks for the edge record.
const _: () = {
    use core::mem;

    // A payload-less edge is exactly its two endpoint keys.
    assert!(mem::size_of::<Edge<()>>() == 2 * mem::size_of::<VertexKey>());
    assert!(mem::align_of::<Edge<()>>() == mem::align_of::<VertexKey>());
};
