//! A keyed adjacency-list directed graph.
//!
//! Vertices live in a `BTreeMap` keyed by their caller-assigned [`VertexKey`];
//! each vertex owns its payload and a `Vec` of outgoing [`Edge`]s in insertion
//! order. An edge names its target by key, so removing a vertex means scanning
//! the other adjacency lists for edges that point at it.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(\log V)\) | Map insertion |
//! | `remove_vertex` | \(O(V + E)\) | Must purge incoming edges from every list |
//! | `add_edge` | \(O(\log V + \text{out-degree})\) | Checks for a duplicate first |
//! | `remove_edge` | \(O(\log V + \text{out-degree})\) | Linear scan of one list |
//! | `vertex_count` / `edge_count` | \(O(1)\) | Running totals |
//! | `edge_count_from` | \(O(\log V)\) | `Vec::len` after the lookup |

use std::collections::btree_map::{BTreeMap, Entry};

use super::error::{DigraphError, DigraphResult};

mod invariants;

#[cfg(test)]
mod tests;

/// Caller-assigned vertex identifier.
///
/// Keys need not be contiguous or zero-based; they only have to be unique
/// within one graph.
pub type VertexKey = i32;

/// A directed edge and its payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<E> {
    from: VertexKey,
    to: VertexKey,
    info: E,
}

impl<E> Edge<E> {
    /// Key of the vertex this edge leaves.
    #[inline]
    pub fn from(&self) -> VertexKey {
        self.from
    }

    /// Key of the vertex this edge enters.
    #[inline]
    pub fn to(&self) -> VertexKey {
        self.to
    }

    /// The `(from, to)` pair identifying this edge.
    #[inline]
    pub fn endpoints(&self) -> (VertexKey, VertexKey) {
        (self.from, self.to)
    }

    /// The edge payload.
    #[inline]
    pub fn info(&self) -> &E {
        &self.info
    }
}

/// A vertex: its payload and its outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<V, E> {
    info: V,
    edges: Vec<Edge<E>>,
}

impl<V, E> Vertex<V, E> {
    fn new(info: V) -> Self {
        Self {
            info,
            edges: Vec::new(),
        }
    }

    /// The vertex payload.
    #[inline]
    pub fn info(&self) -> &V {
        &self.info
    }

    /// Outgoing edges in insertion order.
    #[inline]
    pub fn edges(&self) -> &[Edge<E>] {
        &self.edges
    }

    /// Number of outgoing edges.
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    fn position_of(&self, to: VertexKey) -> Option<usize> {
        self.edges.iter().position(|e| e.to == to)
    }
}

/// A directed graph with integer-keyed vertices carrying `V` payloads and
/// edges carrying `E` payloads.
///
/// At most one edge exists per ordered `(from, to)` pair; self-loops are
/// allowed. Every fallible method validates its arguments before touching the
/// structure, so an `Err` means nothing changed.
///
/// `Clone` is a deep copy. To move the contents out of a graph and leave a
/// valid empty one behind, use [`std::mem::take`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph<V, E> {
    vertices: BTreeMap<VertexKey, Vertex<V, E>>,
    edge_count: usize,
}

impl<V, E> Default for Digraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Logs a rejected operation and hands the error back for `Err(..)`.
#[inline]
fn rejected(err: DigraphError) -> DigraphError {
    debug_event!(error = %err, "graph operation rejected");
    err
}

impl<V, E> Digraph<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Adds a vertex with the given key and payload.
    ///
    /// # Errors
    /// [`DigraphError::DuplicateVertex`] if `key` is already present.
    pub fn add_vertex(&mut self, key: VertexKey, info: V) -> DigraphResult<()> {
        match self.vertices.entry(key) {
            Entry::Occupied(_) => return Err(rejected(DigraphError::DuplicateVertex(key))),
            Entry::Vacant(slot) => {
                slot.insert(Vertex::new(info));
            }
        }
        trace_event!(vertex = key, "vertex added");
        Ok(())
    }

    /// Adds a directed edge `from -> to` carrying `info`.
    ///
    /// # Errors
    /// - [`DigraphError::UnknownVertex`] if either endpoint is absent.
    /// - [`DigraphError::DuplicateEdge`] if the pair is already connected.
    pub fn add_edge(&mut self, from: VertexKey, to: VertexKey, info: E) -> DigraphResult<()> {
        let source = self.source_mut(from, to)?;
        if source.position_of(to).is_some() {
            return Err(rejected(DigraphError::DuplicateEdge { from, to }));
        }

        source.edges.push(Edge { from, to, info });
        self.edge_count += 1;
        trace_event!(from, to, edges = self.edge_count, "edge added");
        self.check_edge_slot(from, to, true);
        Ok(())
    }

    /// Removes a vertex together with every edge entering or leaving it.
    ///
    /// Returns the removed vertex payload.
    ///
    /// # Errors
    /// [`DigraphError::UnknownVertex`] if `key` is absent.
    pub fn remove_vertex(&mut self, key: VertexKey) -> DigraphResult<V> {
        let removed = self
            .vertices
            .remove(&key)
            .ok_or_else(|| rejected(DigraphError::UnknownVertex(key)))?;

        // Outgoing edges (self-loop included) go with the vertex.
        let mut purged = removed.edges.len();
        for vertex in self.vertices.values_mut() {
            let before = vertex.edges.len();
            vertex.edges.retain(|e| e.to != key);
            purged += before - vertex.edges.len();
        }
        self.edge_count -= purged;

        trace_event!(vertex = key, purged, "vertex removed");
        Ok(removed.info)
    }

    /// Removes the edge `from -> to`, returning its payload.
    ///
    /// # Errors
    /// - [`DigraphError::UnknownVertex`] if either endpoint is absent.
    /// - [`DigraphError::UnknownEdge`] if the pair is not connected.
    pub fn remove_edge(&mut self, from: VertexKey, to: VertexKey) -> DigraphResult<E> {
        let source = self.source_mut(from, to)?;
        let pos = source
            .position_of(to)
            .ok_or_else(|| rejected(DigraphError::UnknownEdge { from, to }))?;

        let edge = source.edges.remove(pos);
        self.edge_count -= 1;
        trace_event!(from, to, edges = self.edge_count, "edge removed");
        self.check_edge_slot(from, to, false);
        Ok(edge.info)
    }

    /// Removes every vertex and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
        trace_event!("graph cleared");
    }

    /// Returns every vertex key in ascending order.
    pub fn vertices(&self) -> Vec<VertexKey> {
        self.vertices.keys().copied().collect()
    }

    /// Returns every edge as a `(from, to)` pair.
    ///
    /// Pairs are grouped by source vertex in ascending key order; within a
    /// vertex they appear in insertion order.
    pub fn edges(&self) -> Vec<(VertexKey, VertexKey)> {
        let mut pairs = Vec::with_capacity(self.edge_count);
        for vertex in self.vertices.values() {
            pairs.extend(vertex.edges.iter().map(Edge::endpoints));
        }
        pairs
    }

    /// Returns the `(from, to)` pairs of the edges leaving `vertex`.
    ///
    /// # Errors
    /// [`DigraphError::UnknownVertex`] if `vertex` is absent.
    pub fn edges_from(&self, vertex: VertexKey) -> DigraphResult<Vec<(VertexKey, VertexKey)>> {
        Ok(self.out_edges(vertex)?.iter().map(Edge::endpoints).collect())
    }

    /// Returns the edges leaving `vertex`, payloads included.
    ///
    /// # Errors
    /// [`DigraphError::UnknownVertex`] if `vertex` is absent.
    pub fn out_edges(&self, vertex: VertexKey) -> DigraphResult<&[Edge<E>]> {
        Ok(self.vertex(vertex)?.edges())
    }

    /// Returns the vertex record stored under `key`.
    ///
    /// # Errors
    /// [`DigraphError::UnknownVertex`] if `key` is absent.
    pub fn vertex(&self, key: VertexKey) -> DigraphResult<&Vertex<V, E>> {
        self.vertices
            .get(&key)
            .ok_or_else(|| rejected(DigraphError::UnknownVertex(key)))
    }

    /// Returns the payload of vertex `key`.
    ///
    /// # Errors
    /// [`DigraphError::UnknownVertex`] if `key` is absent.
    pub fn vertex_info(&self, key: VertexKey) -> DigraphResult<&V> {
        Ok(&self.vertex(key)?.info)
    }

    /// Returns a mutable reference to the payload of vertex `key`.
    ///
    /// # Errors
    /// [`DigraphError::UnknownVertex`] if `key` is absent.
    pub fn vertex_info_mut(&mut self, key: VertexKey) -> DigraphResult<&mut V> {
        self.vertices
            .get_mut(&key)
            .map(|v| &mut v.info)
            .ok_or_else(|| rejected(DigraphError::UnknownVertex(key)))
    }

    /// Returns the payload of the edge `from -> to`.
    ///
    /// # Errors
    /// - [`DigraphError::UnknownVertex`] if either endpoint is absent.
    /// - [`DigraphError::UnknownEdge`] if the pair is not connected.
    pub fn edge_info(&self, from: VertexKey, to: VertexKey) -> DigraphResult<&E> {
        let source = self.vertex(from)?;
        self.require_vertex(to)?;
        source
            .position_of(to)
            .map(|pos| &source.edges[pos].info)
            .ok_or_else(|| rejected(DigraphError::UnknownEdge { from, to }))
    }

    /// Returns a mutable reference to the payload of the edge `from -> to`.
    ///
    /// # Errors
    /// - [`DigraphError::UnknownVertex`] if either endpoint is absent.
    /// - [`DigraphError::UnknownEdge`] if the pair is not connected.
    pub fn edge_info_mut(&mut self, from: VertexKey, to: VertexKey) -> DigraphResult<&mut E> {
        self.source_mut(from, to)?
            .edges
            .iter_mut()
            .find(|e| e.to == to)
            .map(|e| &mut e.info)
            .ok_or_else(|| rejected(DigraphError::UnknownEdge { from, to }))
    }

    /// Returns `true` if a vertex with this key is present.
    #[inline]
    pub fn contains_vertex(&self, key: VertexKey) -> bool {
        self.vertices.contains_key(&key)
    }

    /// Returns `true` if the edge `from -> to` is present.
    pub fn contains_edge(&self, from: VertexKey, to: VertexKey) -> bool {
        self.vertices
            .get(&from)
            .is_some_and(|v| v.position_of(to).is_some())
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges in the whole graph.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of edges leaving `vertex`.
    ///
    /// # Errors
    /// [`DigraphError::UnknownVertex`] if `vertex` is absent.
    pub fn edge_count_from(&self, vertex: VertexKey) -> DigraphResult<usize> {
        Ok(self.vertex(vertex)?.out_degree())
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over `(key, vertex)` in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexKey, &Vertex<V, E>)> + '_ {
        self.vertices.iter().map(|(&k, v)| (k, v))
    }

    /// Builds a deep copy whose payloads are produced by `vertex_fn` and
    /// `edge_fn`. Keys, edges and edge order are preserved.
    pub fn map<V2, E2, FV, FE>(&self, mut vertex_fn: FV, mut edge_fn: FE) -> Digraph<V2, E2>
    where
        FV: FnMut(&V) -> V2,
        FE: FnMut(&E) -> E2,
    {
        let vertices = self
            .vertices
            .iter()
            .map(|(&key, vertex)| {
                let edges = vertex
                    .edges
                    .iter()
                    .map(|e| Edge {
                        from: e.from,
                        to: e.to,
                        info: edge_fn(&e.info),
                    })
                    .collect();
                let info = vertex_fn(&vertex.info);
                (key, Vertex { info, edges })
            })
            .collect();

        Digraph {
            vertices,
            edge_count: self.edge_count,
        }
    }

    /// Looks up the source list of `from -> to`, checking `from` before `to`.
    fn source_mut(&mut self, from: VertexKey, to: VertexKey) -> DigraphResult<&mut Vertex<V, E>> {
        let target_known = self.vertices.contains_key(&to);
        let source = self
            .vertices
            .get_mut(&from)
            .ok_or_else(|| rejected(DigraphError::UnknownVertex(from)))?;
        if target_known {
            Ok(source)
        } else {
            Err(rejected(DigraphError::UnknownVertex(to)))
        }
    }

    fn require_vertex(&self, key: VertexKey) -> DigraphResult<()> {
        if self.vertices.contains_key(&key) {
            Ok(())
        } else {
            Err(rejected(DigraphError::UnknownVertex(key)))
        }
    }
}
