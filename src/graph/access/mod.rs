//! Internal graph accessors and low-level building blocks.
//!
//! This module is `pub(crate)` so the algorithms can share scratch structures
//! (dense vertex indexing, visited sets) without exposing them as part of the
//! public API surface.

pub(crate) mod visited;
