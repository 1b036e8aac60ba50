//! Error types for resin-spheremap.

use crate::handle::{BoundaryEntry, FaceId, HalfEdgeId, LoopId, VertexId};
use thiserror::Error;

/// Precondition violations reported by the sphere map editor.
///
/// None of these are recoverable states of the map: an operation that returns
/// one of them has not touched the map, and the caller is expected to fix the
/// sequence of edits that led there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SphereMapError {
    /// A second loop pair was requested while one already exists.
    #[error("sphere map already has a loop pair")]
    LoopAlreadyExists,

    /// An operation needed the loop pair but the map has none.
    #[error("sphere map has no loop pair")]
    NoLoop,

    /// A vertex still has outgoing edges.
    #[error("vertex {0:?} is not isolated")]
    VertexNotIsolated(VertexId),

    /// The target of a merge does not have exactly two outgoing edges.
    #[error("vertex {vertex:?} has outdegree {degree}, expected 2")]
    NotOutdegreeTwo {
        /// The vertex that was to be merged away.
        vertex: VertexId,
        /// Its actual number of outgoing half-edges.
        degree: usize,
    },

    /// The half-edge is not a closed edge through a single vertex.
    #[error("half-edge {0:?} is not a closed edge")]
    NotClosedEdge(HalfEdgeId),

    /// A merge was asked to remove the vertex of a closed edge.
    #[error("half-edge {0:?} is a closed edge and cannot be merged")]
    ClosedEdge(HalfEdgeId),

    /// The faces around a diagonal are not two triangles spanning four
    /// distinct vertices.
    #[error("half-edge {0:?} is not the diagonal of two triangles")]
    NotTriangulated(HalfEdgeId),

    /// The entry is not registered with any face.
    #[error("{0:?} is not a boundary entry")]
    NotBoundaryEntry(BoundaryEntry),

    /// The entry is already registered with a face.
    #[error("{0:?} is already a boundary entry")]
    AlreadyBoundaryEntry(BoundaryEntry),

    /// The vertex handle refers to a deleted vertex.
    #[error("stale vertex handle {0:?}")]
    StaleVertex(VertexId),

    /// The half-edge handle refers to a deleted edge pair.
    #[error("stale half-edge handle {0:?}")]
    StaleEdge(HalfEdgeId),

    /// The face handle refers to a deleted face.
    #[error("stale face handle {0:?}")]
    StaleFace(FaceId),

    /// The loop handle refers to a deleted loop pair.
    #[error("stale loop handle {0:?}")]
    StaleLoop(LoopId),
}
