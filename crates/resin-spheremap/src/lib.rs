//! Half-edge sphere maps for resin.
//!
//! A sphere map subdivides the unit sphere into vertices, edges, at most one
//! edge-less great circle (the loop) and faces. Every edge is a pair of
//! oppositely oriented half-edges; the half-edges bounding a face form cycles
//! linked by `next` and `previous`, and the same links imply the cyclic order
//! of half-edges around each vertex.
//!
//! Entities live in generational arenas, so handles to deleted entities are
//! detected rather than reused silently.
//!
//! # Example
//!
//! ```
//! use rhizome_resin_spheremap::{SphereMap, SpherePoint};
//!
//! let mut map: SphereMap = SphereMap::new();
//! let u = map.new_vertex(SpherePoint::new(1.0, 0.0, 0.0));
//! let v = map.new_vertex(SpherePoint::new(0.0, 1.0, 0.0));
//! let w = map.new_vertex(SpherePoint::new(-1.0, 0.0, 0.0));
//! let e = map.new_edge_pair_between(u, v);
//! map.new_edge_pair_between(v, w);
//!
//! let f = map.new_face();
//! map.link_as_face_cycle(e, f)?;
//! assert!(map.is_valid());
//!
//! // Remove the degree-two vertex in the middle of the path.
//! map.merge_edge_pairs_at_target(e)?;
//! assert_eq!(map.target(e), w);
//! assert_eq!(map.number_of_edges(), 1);
//! assert!(map.is_valid());
//! # Ok::<(), rhizome_resin_spheremap::SphereMapError>(())
//! ```

mod composite;
mod editor;
mod error;
mod handle;
mod kernel;
mod registry;
mod store;
mod validate;

#[cfg(test)]
mod fixtures;

pub use error::SphereMapError;
pub use handle::{
    BoundaryEntry, EdgeId, FaceId, HalfEdgeId, HalfLoopId, HalfSphere, LoopId, Position, VertexId,
};
pub use kernel::{SphereCircle, SphereKernel, SpherePoint, SphereSegment, UnitSphere};
pub use store::{MapHandle, SphereMap};
pub use validate::{ValidationConfig, ValidationReport, ValidityError};
