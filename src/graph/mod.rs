//! Keyed directed graph storage and its algorithms.
//!
//! The graph is organized into:
//! - `digraph`: the adjacency-list store (vertices, edges, mutation, queries)
//! - `algorithms`: strong connectivity and single-source shortest paths
//! - `error`: the error type shared by every fallible operation

pub mod algorithms;
pub mod digraph;
pub mod error;
pub(crate) mod access;

pub use algorithms::ShortestPaths;
pub use digraph::{Digraph, Edge, Vertex, VertexKey};
pub use error::{DigraphError, DigraphResult};
