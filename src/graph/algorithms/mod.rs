//! Whole-graph algorithms over [`Digraph`](crate::Digraph).
//!
//! Both algorithms first map the sparse vertex keys onto a dense index so the
//! traversal state lives in flat vectors.

pub mod connectivity;
pub mod shortest_path;

pub use shortest_path::ShortestPaths;

use crate::graph::access::visited::DenseIndex;
use crate::graph::Digraph;

/// Dense adjacency lists of `graph` (and, optionally, of its transpose).
fn dense_adjacency<V, E>(
    graph: &Digraph<V, E>,
    index: &DenseIndex,
    transpose: bool,
) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); index.len()];
    for (key, vertex) in graph.iter() {
        let Some(u) = index.index_of(key) else {
            continue;
        };
        for edge in vertex.edges() {
            if let Some(v) = index.index_of(edge.to()) {
                if transpose {
                    adjacency[v].push(u);
                } else {
                    adjacency[u].push(v);
                }
            }
        }
    }
    adjacency
}
