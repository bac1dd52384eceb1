//! Error type shared by every fallible graph operation.

use thiserror::Error;

use super::VertexKey;

/// The error type for rejected graph operations.
///
/// Each variant carries the key(s) the caller supplied, so the `Display`
/// output reads as a complete reason string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DigraphError {
    /// A vertex with this key is already present.
    #[error("vertex {0} already exists")]
    DuplicateVertex(VertexKey),

    /// No vertex with this key is present.
    #[error("vertex {0} does not exist")]
    UnknownVertex(VertexKey),

    /// An edge between this ordered pair is already present.
    #[error("edge {from} -> {to} already exists")]
    DuplicateEdge {
        /// Source vertex key.
        from: VertexKey,
        /// Target vertex key.
        to: VertexKey,
    },

    /// No edge between this ordered pair is present.
    #[error("edge {from} -> {to} does not exist")]
    UnknownEdge {
        /// Source vertex key.
        from: VertexKey,
        /// Target vertex key.
        to: VertexKey,
    },
}

/// Result alias for graph operations.
pub type DigraphResult<T> = Result<T, DigraphError>;
