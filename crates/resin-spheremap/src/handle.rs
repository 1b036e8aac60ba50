//! Typed handles for sphere map entities.
//!
//! Vertices, edge pairs, loop pairs and faces live in generational arenas.
//! A handle stays comparable after its entity is deleted, but it no longer
//! resolves: the slot's generation has moved on, so a reused slot is never
//! mistaken for the old entity.
//!
//! Half-edges and half-loops are not stored individually. A [`HalfEdgeId`]
//! names one side of an [`EdgeId`], and its twin is the other side of the
//! same slot.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use slotmap::{Key, new_key_type};

new_key_type! {
    /// Handle to a vertex.
    pub struct VertexId;

    /// Handle to an undirected edge (a half-edge pair).
    pub struct EdgeId;

    /// Handle to the loop pair.
    pub struct LoopId;

    /// Handle to a face.
    pub struct FaceId;
}

/// One oriented side of an edge pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HalfEdgeId {
    edge: EdgeId,
    side: u8,
}

impl HalfEdgeId {
    pub(crate) fn new(edge: EdgeId, side: u8) -> Self {
        debug_assert!(side < 2);
        Self { edge, side }
    }

    /// Handle that refers to no half-edge.
    pub fn null() -> Self {
        Self::default()
    }

    /// Returns true if this handle refers to no half-edge.
    pub fn is_null(self) -> bool {
        self.edge.is_null()
    }

    /// The undirected edge this half-edge belongs to.
    pub fn edge(self) -> EdgeId {
        self.edge
    }

    /// The oppositely oriented half-edge of the same edge.
    pub fn twin(self) -> Self {
        Self {
            edge: self.edge,
            side: self.side ^ 1,
        }
    }

    /// Returns true for the half-edge an edge pair was created with.
    pub fn is_primary(self) -> bool {
        self.side == 0
    }

    pub(crate) fn side(self) -> usize {
        self.side as usize
    }
}

/// One oriented side of the loop pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HalfLoopId {
    pair: LoopId,
    side: u8,
}

impl HalfLoopId {
    pub(crate) fn new(pair: LoopId, side: u8) -> Self {
        debug_assert!(side < 2);
        Self { pair, side }
    }

    /// The loop pair this half-loop belongs to.
    pub fn pair(self) -> LoopId {
        self.pair
    }

    /// The oppositely oriented half-loop.
    pub fn twin(self) -> Self {
        Self {
            pair: self.pair,
            side: self.side ^ 1,
        }
    }

    pub(crate) fn side(self) -> usize {
        self.side as usize
    }
}

/// Where to insert a new half-edge relative to an existing one in the
/// rotation around their common source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Position {
    /// Insert directly before the reference half-edge.
    Before,
    /// Insert directly after the reference half-edge.
    #[default]
    After,
}

/// The two half-spheres an overlay assigns default marks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HalfSphere {
    /// The half-sphere below the splitting great circle.
    Negative,
    /// The half-sphere above the splitting great circle.
    Positive,
}

/// Anchor of one connected component of a face boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundaryEntry {
    /// Entry point of a face cycle.
    HalfEdge(HalfEdgeId),
    /// A half-loop bounding the face.
    HalfLoop(HalfLoopId),
    /// An isolated vertex inside the face.
    Vertex(VertexId),
}

impl BoundaryEntry {
    /// The half-edge, if this entry is a face cycle.
    pub fn as_halfedge(self) -> Option<HalfEdgeId> {
        match self {
            BoundaryEntry::HalfEdge(e) => Some(e),
            _ => None,
        }
    }

    /// The half-loop, if this entry is a loop.
    pub fn as_halfloop(self) -> Option<HalfLoopId> {
        match self {
            BoundaryEntry::HalfLoop(l) => Some(l),
            _ => None,
        }
    }

    /// The vertex, if this entry is an isolated vertex.
    pub fn as_vertex(self) -> Option<VertexId> {
        match self {
            BoundaryEntry::Vertex(v) => Some(v),
            _ => None,
        }
    }
}

impl From<HalfEdgeId> for BoundaryEntry {
    fn from(e: HalfEdgeId) -> Self {
        BoundaryEntry::HalfEdge(e)
    }
}

impl From<HalfLoopId> for BoundaryEntry {
    fn from(l: HalfLoopId) -> Self {
        BoundaryEntry::HalfLoop(l)
    }
}

impl From<VertexId> for BoundaryEntry {
    fn from(v: VertexId) -> Self {
        BoundaryEntry::Vertex(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_twin_is_involution() {
        let mut edges: SlotMap<EdgeId, ()> = SlotMap::with_key();
        let e = HalfEdgeId::new(edges.insert(()), 0);

        assert_ne!(e.twin(), e);
        assert_eq!(e.twin().twin(), e);
        assert_eq!(e.twin().edge(), e.edge());
        assert!(e.is_primary());
        assert!(!e.twin().is_primary());
    }

    #[test]
    fn test_null_halfedge() {
        assert!(HalfEdgeId::null().is_null());
        assert!(HalfEdgeId::null().twin().is_null());
    }

    #[test]
    fn test_stale_key_not_reused() {
        let mut vertices: SlotMap<VertexId, u32> = SlotMap::with_key();
        let a = vertices.insert(1);
        vertices.remove(a);
        let b = vertices.insert(2);

        assert_ne!(a, b);
        assert!(!vertices.contains_key(a));
    }

    #[test]
    fn test_boundary_entry_views() {
        let mut vertices: SlotMap<VertexId, ()> = SlotMap::with_key();
        let v = vertices.insert(());
        let entry = BoundaryEntry::from(v);

        assert_eq!(entry.as_vertex(), Some(v));
        assert_eq!(entry.as_halfedge(), None);
        assert_eq!(entry.as_halfloop(), None);
    }
}
