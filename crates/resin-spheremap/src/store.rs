//! Entity store of a sphere map.
//!
//! All vertices, edge pairs, the loop pair and all faces live in generational
//! arenas owned by one [`SphereMap`]. Entities reference each other through
//! handles, never through pointers, so the cyclic twin/next/previous/source
//! graph needs no shared ownership.
//!
//! # Structure
//!
//! - A half-edge stores its source, incident face, `next` and `previous` in its
//!   face cycle, its supporting circle and a payload
//! - An edge pair stores its two half-edges and one mark for both
//! - A vertex stores its point, mark, payload, one outgoing half-edge unless it
//!   is isolated, and the face it sits in when it is isolated
//! - A face stores its mark and payload; its boundary entries are kept by the
//!   registry
//!
//! The rotation around a vertex is implied by the face cycle links:
//! `cyclic_adj_succ(e) == twin(previous(e))` and
//! `cyclic_adj_pred(e) == next(twin(e))`.

use slotmap::{Key, SlotMap};

use crate::handle::{
    BoundaryEntry, EdgeId, FaceId, HalfEdgeId, HalfLoopId, HalfSphere, LoopId, VertexId,
};
use crate::kernel::{SphereKernel, UnitSphere};
use crate::registry::BoundaryRegistry;

#[derive(Debug, Clone)]
pub(crate) struct VertexRecord<P, I> {
    pub point: P,
    pub out_edge: Option<HalfEdgeId>,
    pub face: FaceId,
    pub mark: bool,
    pub info: Option<I>,
}

#[derive(Debug, Clone)]
pub(crate) struct HalfEdgeRecord<C, I> {
    pub source: VertexId,
    pub face: FaceId,
    pub next: HalfEdgeId,
    pub prev: HalfEdgeId,
    pub circle: C,
    pub info: Option<I>,
}

#[derive(Debug, Clone)]
pub(crate) struct EdgeRecord<C, I> {
    pub halves: [HalfEdgeRecord<C, I>; 2],
    pub mark: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct HalfLoopRecord<C, I> {
    pub face: FaceId,
    pub circle: C,
    pub info: Option<I>,
}

#[derive(Debug, Clone)]
pub(crate) struct LoopRecord<C, I> {
    pub halves: [HalfLoopRecord<C, I>; 2],
    pub mark: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct FaceRecord<I> {
    pub mark: bool,
    pub info: Option<I>,
}

/// A half-edge map embedded on the sphere.
///
/// `K` supplies the point and circle types, `I` is the payload type every
/// entity can carry. Payloads belong to the caller; the map only drops them
/// when their entity is deleted.
#[derive(Debug, Clone)]
pub struct SphereMap<K: SphereKernel = UnitSphere, I = ()> {
    pub(crate) vertices: SlotMap<VertexId, VertexRecord<K::Point, I>>,
    pub(crate) edges: SlotMap<EdgeId, EdgeRecord<K::Circle, I>>,
    pub(crate) loops: SlotMap<LoopId, LoopRecord<K::Circle, I>>,
    pub(crate) faces: SlotMap<FaceId, FaceRecord<I>>,
    pub(crate) registry: BoundaryRegistry,
    pub(crate) halfsphere_marks: [bool; 2],
}

impl<K: SphereKernel, I> Default for SphereMap<K, I> {
    fn default() -> Self {
        Self {
            vertices: SlotMap::with_key(),
            edges: SlotMap::with_key(),
            loops: SlotMap::with_key(),
            faces: SlotMap::with_key(),
            registry: BoundaryRegistry::new(),
            halfsphere_marks: [false; 2],
        }
    }
}

impl<K: SphereKernel, I> SphereMap<K, I> {
    /// Creates an empty sphere map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every entity, returning the map to the empty state.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.loops.clear();
        self.faces.clear();
        self.registry.clear();
        self.halfsphere_marks = [false; 2];
    }

    // ==================== Record access ====================

    pub(crate) fn vertex(&self, v: VertexId) -> &VertexRecord<K::Point, I> {
        &self.vertices[v]
    }

    pub(crate) fn vertex_mut(&mut self, v: VertexId) -> &mut VertexRecord<K::Point, I> {
        &mut self.vertices[v]
    }

    pub(crate) fn halfedge(&self, e: HalfEdgeId) -> &HalfEdgeRecord<K::Circle, I> {
        &self.edges[e.edge()].halves[e.side()]
    }

    pub(crate) fn halfedge_mut(&mut self, e: HalfEdgeId) -> &mut HalfEdgeRecord<K::Circle, I> {
        &mut self.edges[e.edge()].halves[e.side()]
    }

    pub(crate) fn halfloop(&self, l: HalfLoopId) -> &HalfLoopRecord<K::Circle, I> {
        &self.loops[l.pair()].halves[l.side()]
    }

    pub(crate) fn halfloop_mut(&mut self, l: HalfLoopId) -> &mut HalfLoopRecord<K::Circle, I> {
        &mut self.loops[l.pair()].halves[l.side()]
    }

    // ==================== Liveness ====================

    /// Returns true if `v` refers to a live vertex.
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertices.contains_key(v)
    }

    /// Returns true if `e` refers to a half-edge of a live edge pair.
    pub fn contains_halfedge(&self, e: HalfEdgeId) -> bool {
        self.edges.contains_key(e.edge())
    }

    /// Returns true if `l` refers to a half-loop of the live loop pair.
    pub fn contains_halfloop(&self, l: HalfLoopId) -> bool {
        self.loops.contains_key(l.pair())
    }

    /// Returns true if `f` refers to a live face.
    pub fn contains_face(&self, f: FaceId) -> bool {
        self.faces.contains_key(f)
    }

    // ==================== Incidence queries ====================

    /// Source vertex of `e`; null while `e` is not linked to a vertex.
    pub fn source(&self, e: HalfEdgeId) -> VertexId {
        self.halfedge(e).source
    }

    /// Target vertex of `e`, i.e. the source of its twin.
    pub fn target(&self, e: HalfEdgeId) -> VertexId {
        self.halfedge(e.twin()).source
    }

    /// The oppositely oriented half-edge.
    pub fn twin(&self, e: HalfEdgeId) -> HalfEdgeId {
        e.twin()
    }

    /// The oppositely oriented half-loop.
    pub fn loop_twin(&self, l: HalfLoopId) -> HalfLoopId {
        l.twin()
    }

    /// Next half-edge in the face cycle of `e`.
    pub fn next(&self, e: HalfEdgeId) -> HalfEdgeId {
        self.halfedge(e).next
    }

    /// Previous half-edge in the face cycle of `e`.
    pub fn previous(&self, e: HalfEdgeId) -> HalfEdgeId {
        self.halfedge(e).prev
    }

    /// Face incident to `e`; null until a face cycle is linked.
    pub fn face(&self, e: HalfEdgeId) -> FaceId {
        self.halfedge(e).face
    }

    /// Face incident to `l`.
    pub fn loop_face(&self, l: HalfLoopId) -> FaceId {
        self.halfloop(l).face
    }

    /// Face an isolated vertex lies in.
    pub fn vertex_face(&self, v: VertexId) -> FaceId {
        self.vertex(v).face
    }

    /// Embedding of `v`.
    pub fn point(&self, v: VertexId) -> &K::Point {
        &self.vertex(v).point
    }

    /// Replaces the embedding of `v`.
    pub fn set_point(&mut self, v: VertexId, point: K::Point) {
        self.vertex_mut(v).point = point;
    }

    /// Supporting circle of `e`.
    pub fn circle(&self, e: HalfEdgeId) -> &K::Circle {
        &self.halfedge(e).circle
    }

    /// Sets the supporting circle of `e` and the opposite circle on its twin.
    pub fn set_circle(&mut self, e: HalfEdgeId, circle: K::Circle) {
        self.halfedge_mut(e.twin()).circle = K::opposite(&circle);
        self.halfedge_mut(e).circle = circle;
    }

    /// Supporting circle of `l`.
    pub fn loop_circle(&self, l: HalfLoopId) -> &K::Circle {
        &self.halfloop(l).circle
    }

    /// Sets the supporting circle of `l` and the opposite circle on its twin.
    pub fn set_loop_circle(&mut self, l: HalfLoopId, circle: K::Circle) {
        self.halfloop_mut(l.twin()).circle = K::opposite(&circle);
        self.halfloop_mut(l).circle = circle;
    }

    /// Returns true if `v` has no outgoing half-edge.
    pub fn is_isolated(&self, v: VertexId) -> bool {
        self.vertex(v).out_edge.is_none()
    }

    /// First half-edge of the rotation around `v`.
    pub fn first_out_edge(&self, v: VertexId) -> Option<HalfEdgeId> {
        self.vertex(v).out_edge
    }

    /// Last half-edge of the rotation around `v`.
    pub fn last_out_edge(&self, v: VertexId) -> Option<HalfEdgeId> {
        self.first_out_edge(v).map(|e| self.cyclic_adj_pred(e))
    }

    /// Half-edge after `e` in the rotation around `source(e)`.
    pub fn cyclic_adj_succ(&self, e: HalfEdgeId) -> HalfEdgeId {
        self.previous(e).twin()
    }

    /// Half-edge before `e` in the rotation around `source(e)`.
    pub fn cyclic_adj_pred(&self, e: HalfEdgeId) -> HalfEdgeId {
        self.next(e.twin())
    }

    /// Returns true if `e` is the only edge at its source (`previous(e) == twin(e)`).
    pub fn is_closed_at_source(&self, e: HalfEdgeId) -> bool {
        self.previous(e) == e.twin()
    }

    /// Returns true if `e` is the only edge at its target (`next(e) == twin(e)`).
    pub fn is_closed_at_target(&self, e: HalfEdgeId) -> bool {
        self.next(e) == e.twin()
    }

    /// Returns true if exactly two half-edges leave `v`.
    pub fn has_outdeg_two(&self, v: VertexId) -> bool {
        let Some(first) = self.first_out_edge(v) else {
            return false;
        };
        let last = self.cyclic_adj_pred(first);
        first != last && last == self.cyclic_adj_succ(first)
    }

    /// Number of half-edges leaving `v`.
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.out_edges(v).len()
    }

    /// Returns true if the map has its loop pair.
    pub fn has_sloop(&self) -> bool {
        !self.loops.is_empty()
    }

    /// One half-loop of the loop pair, if any.
    pub fn shalfloop(&self) -> Option<HalfLoopId> {
        self.loops.keys().next().map(|pair| HalfLoopId::new(pair, 0))
    }

    /// Returns true if `entry` is registered with a face.
    pub fn is_boundary_object(&self, entry: impl Into<BoundaryEntry>) -> bool {
        self.registry.contains(entry.into())
    }

    /// Face `entry` is registered with.
    pub fn boundary_face(&self, entry: impl Into<BoundaryEntry>) -> Option<FaceId> {
        self.registry.face_of(entry.into())
    }

    // ==================== Iteration ====================

    /// All vertices.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys()
    }

    /// All half-edges, both sides of every pair.
    pub fn halfedges(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        self.edges
            .keys()
            .flat_map(|edge| [HalfEdgeId::new(edge, 0), HalfEdgeId::new(edge, 1)])
    }

    /// One half-edge per edge pair.
    pub fn edges(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        self.edges.keys().map(|edge| HalfEdgeId::new(edge, 0))
    }

    /// Both half-loops of the loop pair, if any.
    pub fn halfloops(&self) -> impl Iterator<Item = HalfLoopId> + '_ {
        self.loops
            .keys()
            .flat_map(|pair| [HalfLoopId::new(pair, 0), HalfLoopId::new(pair, 1)])
    }

    /// All faces.
    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.keys()
    }

    /// Boundary entries of `f` in the order they were linked.
    pub fn face_cycles(&self, f: FaceId) -> impl Iterator<Item = BoundaryEntry> + '_ {
        self.registry.entries(f)
    }

    /// Half-edges leaving `v`, in rotation order starting at the first out edge.
    pub fn out_edges(&self, v: VertexId) -> Vec<HalfEdgeId> {
        let mut result = Vec::new();
        let Some(start) = self.first_out_edge(v) else {
            return result;
        };

        let mut current = start;
        loop {
            result.push(current);
            current = self.cyclic_adj_succ(current);
            if current == start || result.len() > self.number_of_halfedges() {
                break;
            }
        }

        result
    }

    /// Half-edges of the face cycle through `e`, starting at `e`.
    pub fn face_cycle(&self, e: HalfEdgeId) -> Vec<HalfEdgeId> {
        let mut result = Vec::new();
        let mut current = e;
        loop {
            result.push(current);
            current = self.next(current);
            if current == e || result.len() > self.number_of_halfedges() {
                break;
            }
        }

        result
    }

    // ==================== Counts ====================

    /// Returns the number of vertices.
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of half-edges.
    pub fn number_of_halfedges(&self) -> usize {
        self.edges.len() * 2
    }

    /// Returns the number of edges (half-edge pairs).
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of half-loops.
    pub fn number_of_halfloops(&self) -> usize {
        self.loops.len() * 2
    }

    /// Returns the number of loops (0 or 1).
    pub fn number_of_loops(&self) -> usize {
        self.loops.len()
    }

    /// Returns the number of faces.
    pub fn number_of_faces(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of isolated vertices.
    pub fn number_of_isolated_vertices(&self) -> usize {
        self.vertices.values().filter(|v| v.out_edge.is_none()).count()
    }

    // ==================== Marks and payloads ====================

    /// Mark of a vertex, edge, loop or face.
    ///
    /// Both half-edges of an edge share one mark, as do both half-loops.
    pub fn mark<H: MapHandle>(&self, h: H) -> bool {
        *h.mark_ref(self)
    }

    /// Sets the mark of a vertex, edge, loop or face.
    pub fn set_mark<H: MapHandle>(&mut self, h: H, mark: bool) {
        *h.mark_mut(self) = mark;
    }

    /// Payload of an entity, if one was set.
    pub fn info<H: MapHandle>(&self, h: H) -> Option<&I> {
        h.info_ref(self).as_ref()
    }

    /// Mutable payload of an entity, if one was set.
    pub fn info_mut<H: MapHandle>(&mut self, h: H) -> Option<&mut I> {
        h.info_mut(self).as_mut()
    }

    /// Sets the payload of an entity and returns the previous one.
    pub fn set_info<H: MapHandle>(&mut self, h: H, info: I) -> Option<I> {
        h.info_mut(self).replace(info)
    }

    /// Removes the payload of an entity.
    pub fn take_info<H: MapHandle>(&mut self, h: H) -> Option<I> {
        h.info_mut(self).take()
    }

    /// Sets the mark of every edge of the face cycle through `e` and of every
    /// vertex on it.
    pub fn set_marks_in_face_cycle(&mut self, e: HalfEdgeId, mark: bool) {
        for h in self.face_cycle(e) {
            let target = self.target(h);
            self.set_mark(h, mark);
            if !target.is_null() {
                self.set_mark(target, mark);
            }
        }
    }

    /// Replaces every mark `m` in the map with `f(m)`, including the
    /// half-sphere marks.
    pub fn change_marks(&mut self, mut f: impl FnMut(bool) -> bool) {
        for mark in &mut self.halfsphere_marks {
            *mark = f(*mark);
        }
        for v in self.vertices.values_mut() {
            v.mark = f(v.mark);
        }
        for e in self.edges.values_mut() {
            e.mark = f(e.mark);
        }
        for l in self.loops.values_mut() {
            l.mark = f(l.mark);
        }
        for face in self.faces.values_mut() {
            face.mark = f(face.mark);
        }
    }

    /// Default mark of one half-sphere.
    pub fn mark_of_halfsphere(&self, side: HalfSphere) -> bool {
        self.halfsphere_marks[halfsphere_index(side)]
    }

    /// Sets the default mark of one half-sphere.
    pub fn set_mark_of_halfsphere(&mut self, side: HalfSphere, mark: bool) {
        self.halfsphere_marks[halfsphere_index(side)] = mark;
    }
}

fn halfsphere_index(side: HalfSphere) -> usize {
    match side {
        HalfSphere::Negative => 0,
        HalfSphere::Positive => 1,
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for crate::handle::VertexId {}
    impl Sealed for crate::handle::HalfEdgeId {}
    impl Sealed for crate::handle::HalfLoopId {}
    impl Sealed for crate::handle::FaceId {}
}

/// Handles whose entities carry a mark and a payload.
///
/// Implemented for [`VertexId`], [`HalfEdgeId`], [`HalfLoopId`] and [`FaceId`].
pub trait MapHandle: Copy + sealed::Sealed {
    #[doc(hidden)]
    fn mark_ref<K: SphereKernel, I>(self, map: &SphereMap<K, I>) -> &bool;
    #[doc(hidden)]
    fn mark_mut<K: SphereKernel, I>(self, map: &mut SphereMap<K, I>) -> &mut bool;
    #[doc(hidden)]
    fn info_ref<K: SphereKernel, I>(self, map: &SphereMap<K, I>) -> &Option<I>;
    #[doc(hidden)]
    fn info_mut<K: SphereKernel, I>(self, map: &mut SphereMap<K, I>) -> &mut Option<I>;
}

impl MapHandle for VertexId {
    fn mark_ref<K: SphereKernel, I>(self, map: &SphereMap<K, I>) -> &bool {
        &map.vertices[self].mark
    }
    fn mark_mut<K: SphereKernel, I>(self, map: &mut SphereMap<K, I>) -> &mut bool {
        &mut map.vertices[self].mark
    }
    fn info_ref<K: SphereKernel, I>(self, map: &SphereMap<K, I>) -> &Option<I> {
        &map.vertices[self].info
    }
    fn info_mut<K: SphereKernel, I>(self, map: &mut SphereMap<K, I>) -> &mut Option<I> {
        &mut map.vertices[self].info
    }
}

impl MapHandle for HalfEdgeId {
    fn mark_ref<K: SphereKernel, I>(self, map: &SphereMap<K, I>) -> &bool {
        &map.edges[self.edge()].mark
    }
    fn mark_mut<K: SphereKernel, I>(self, map: &mut SphereMap<K, I>) -> &mut bool {
        &mut map.edges[self.edge()].mark
    }
    fn info_ref<K: SphereKernel, I>(self, map: &SphereMap<K, I>) -> &Option<I> {
        &map.halfedge(self).info
    }
    fn info_mut<K: SphereKernel, I>(self, map: &mut SphereMap<K, I>) -> &mut Option<I> {
        &mut map.halfedge_mut(self).info
    }
}

impl MapHandle for HalfLoopId {
    fn mark_ref<K: SphereKernel, I>(self, map: &SphereMap<K, I>) -> &bool {
        &map.loops[self.pair()].mark
    }
    fn mark_mut<K: SphereKernel, I>(self, map: &mut SphereMap<K, I>) -> &mut bool {
        &mut map.loops[self.pair()].mark
    }
    fn info_ref<K: SphereKernel, I>(self, map: &SphereMap<K, I>) -> &Option<I> {
        &map.halfloop(self).info
    }
    fn info_mut<K: SphereKernel, I>(self, map: &mut SphereMap<K, I>) -> &mut Option<I> {
        &mut map.halfloop_mut(self).info
    }
}

impl MapHandle for FaceId {
    fn mark_ref<K: SphereKernel, I>(self, map: &SphereMap<K, I>) -> &bool {
        &map.faces[self].mark
    }
    fn mark_mut<K: SphereKernel, I>(self, map: &mut SphereMap<K, I>) -> &mut bool {
        &mut map.faces[self].mark
    }
    fn info_ref<K: SphereKernel, I>(self, map: &SphereMap<K, I>) -> &Option<I> {
        &map.faces[self].info
    }
    fn info_mut<K: SphereKernel, I>(self, map: &mut SphereMap<K, I>) -> &mut Option<I> {
        &mut map.faces[self].info
    }
}
