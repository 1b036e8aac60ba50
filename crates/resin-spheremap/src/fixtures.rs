//! Small sphere maps shared by the unit tests.

use slotmap::Key;

use crate::handle::{HalfEdgeId, VertexId};
use crate::kernel::SpherePoint;
use crate::store::SphereMap;

/// Creates a face for every half-edge that has none yet.
pub fn link_all_face_cycles(map: &mut SphereMap) {
    let halfedges: Vec<_> = map.halfedges().collect();
    for e in halfedges {
        if map.face(e).is_null() {
            let f = map.new_face();
            map.link_as_face_cycle(e, f).unwrap();
        }
    }
}

/// K4 on the sphere: the dual of a tetrahedron, 4 vertices, 6 edges, 4 faces.
///
/// Edges are appended in an order that makes every rotation agree with one
/// planar embedding (vertex 0 in the middle of triangle 1-2-3).
pub fn tetrahedron() -> (SphereMap, [VertexId; 4]) {
    let mut map = SphereMap::new();
    let s = 1.0 / 3.0_f64.sqrt();
    let v = [
        map.new_vertex(SpherePoint::new(s, s, s)),
        map.new_vertex(SpherePoint::new(s, -s, -s)),
        map.new_vertex(SpherePoint::new(-s, s, -s)),
        map.new_vertex(SpherePoint::new(-s, -s, s)),
    ];
    for (a, b) in [(0, 1), (0, 2), (1, 3), (0, 3), (1, 2), (2, 3)] {
        map.new_edge_pair_between(v[a], v[b]);
    }
    link_all_face_cycles(&mut map);
    (map, v)
}

/// Path u-v-w; one face whose single cycle runs around the path.
///
/// Returns the half-edge u->v.
pub fn path_uvw() -> (SphereMap, [VertexId; 3], HalfEdgeId) {
    let mut map = SphereMap::new();
    let u = map.new_vertex(SpherePoint::new(1.0, 0.0, 0.0));
    let v = map.new_vertex(SpherePoint::new(0.0, 1.0, 0.0));
    let w = map.new_vertex(SpherePoint::new(-1.0, 0.0, 0.0));
    let e = map.new_edge_pair_between(u, v);
    map.new_edge_pair_between(v, w);
    link_all_face_cycles(&mut map);
    (map, [u, v, w], e)
}

/// Two triangles a-c-d and c-a-b sharing the diagonal a->c, with the outer
/// quadrilateral a-d-c-b as a third face.
///
/// Returns the map, `[a, b, c, d]` and the diagonal a->c.
pub fn two_triangles() -> (SphereMap, [VertexId; 4], HalfEdgeId) {
    let mut map = SphereMap::new();
    let a = map.new_vertex(SpherePoint::new(-1.0, 0.0, 1.0));
    let b = map.new_vertex(SpherePoint::new(0.0, -1.0, 1.0));
    let c = map.new_vertex(SpherePoint::new(1.0, 0.0, 1.0));
    let d = map.new_vertex(SpherePoint::new(0.0, 1.0, 1.0));
    let diagonal = map.new_edge_pair_between(a, c);
    map.new_edge_pair_between(a, d);
    map.new_edge_pair_between(a, b);
    map.new_edge_pair_between(c, b);
    map.new_edge_pair_between(c, d);
    link_all_face_cycles(&mut map);
    (map, [a, b, c, d], diagonal)
}

/// A single vertex with one edge running from it around to itself, splitting
/// the sphere into two faces.
pub fn closed_edge() -> (SphereMap, VertexId, HalfEdgeId) {
    let mut map = SphereMap::new();
    let v = map.new_vertex(SpherePoint::new(1.0, 0.0, 0.0));
    let e = map.new_edge_pair_between(v, v);
    link_all_face_cycles(&mut map);
    (map, v, e)
}
