//! Primitive topology editing.
//!
//! Every edit of a sphere map reduces to creating and deleting entities plus
//! [`SphereMap::set_adjacency_at_source_between`], which splices a half-edge
//! into the rotation around a vertex. Because the rotation is encoded in the
//! face cycle links, one splice updates both orderings at once.
//!
//! Operations only touch the entities named in their arguments and their
//! direct rotation and face cycle neighbors.
//!
//! The `*_only` deletions and the raw setters skip all connectivity updates.
//! They exist for algorithms that rebuild the surroundings themselves.

use slotmap::Key;
use tracing::trace;

use crate::error::SphereMapError;
use crate::handle::{
    BoundaryEntry, FaceId, HalfEdgeId, HalfLoopId, LoopId, Position, VertexId,
};
use crate::kernel::SphereKernel;
use crate::store::{
    EdgeRecord, FaceRecord, HalfEdgeRecord, HalfLoopRecord, LoopRecord, SphereMap, VertexRecord,
};

impl<K: SphereKernel, I> SphereMap<K, I> {
    // ==================== Creation ====================

    /// Creates an isolated vertex.
    pub fn new_vertex(&mut self, point: K::Point) -> VertexId {
        let v = self.vertices.insert(VertexRecord {
            point,
            out_edge: None,
            face: FaceId::null(),
            mark: false,
            info: None,
        });
        trace!(?v, "new vertex");
        v
    }

    /// Creates an edge pair with no connectivity.
    ///
    /// The two half-edges form their own closed cycle (`next(e) == twin(e)`
    /// on both sides) and have neither source nor face.
    pub fn new_edge_pair(&mut self) -> HalfEdgeId {
        let edge = self.edges.insert_with_key(|edge| {
            let e = HalfEdgeId::new(edge, 0);
            let half = |twin: HalfEdgeId| HalfEdgeRecord {
                source: VertexId::null(),
                face: FaceId::null(),
                next: twin,
                prev: twin,
                circle: K::Circle::default(),
                info: None,
            };
            EdgeRecord {
                halves: [half(e.twin()), half(e)],
                mark: false,
            }
        });
        let e = HalfEdgeId::new(edge, 0);
        trace!(?e, "new edge pair");
        e
    }

    /// Creates the loop pair.
    ///
    /// Fails if the map already has one.
    pub fn new_loop_pair(&mut self) -> Result<HalfLoopId, SphereMapError> {
        if self.has_sloop() {
            return Err(SphereMapError::LoopAlreadyExists);
        }
        let half = || HalfLoopRecord {
            face: FaceId::null(),
            circle: K::Circle::default(),
            info: None,
        };
        let pair: LoopId = self.loops.insert(LoopRecord {
            halves: [half(), half()],
            mark: false,
        });
        let l = HalfLoopId::new(pair, 0);
        trace!(?l, "new loop pair");
        Ok(l)
    }

    /// Creates a face with no boundary entries.
    pub fn new_face(&mut self) -> FaceId {
        let f = self.faces.insert(FaceRecord {
            mark: false,
            info: None,
        });
        trace!(?f, "new face");
        f
    }

    /// Creates the edge pair `(e1, e2)` representing `(v1, v2)`.
    ///
    /// Each half-edge is appended at the end of the rotation of its source.
    /// At an isolated endpoint the tip is closed instead, so that
    /// `previous(e) == twin(e)`. Returns `e1`, directed from `v1` to `v2`.
    pub fn new_edge_pair_between(&mut self, v1: VertexId, v2: VertexId) -> HalfEdgeId {
        let e1 = self.new_edge_pair();
        self.append_at_vertex(e1, v1);
        self.append_at_vertex(e1.twin(), v2);
        e1
    }

    /// Creates the edge pair representing `{source(e1), source(e2)}`.
    ///
    /// The first half-edge is inserted before or after `e1` in the rotation
    /// of `source(e1)`, its twin before or after `e2` at `source(e2)`.
    pub fn new_edge_pair_relative(
        &mut self,
        e1: HalfEdgeId,
        e2: HalfEdgeId,
        pos1: Position,
        pos2: Position,
    ) -> HalfEdgeId {
        let er = self.new_edge_pair();
        self.insert_at(e1, er, pos1);
        self.insert_at(e2, er.twin(), pos2);
        er
    }

    /// Creates the edge pair representing `{source(e), v}`.
    ///
    /// The new half-edge leaving `source(e)` is inserted before or after `e`;
    /// its twin is appended to the rotation of `v`. Returns the half-edge
    /// leaving `source(e)`.
    pub fn new_edge_pair_at(&mut self, e: HalfEdgeId, v: VertexId, pos: Position) -> HalfEdgeId {
        let e_new = self.new_edge_pair();
        self.insert_at(e, e_new, pos);
        self.append_at_vertex(e_new.twin(), v);
        e_new
    }

    /// Mirror of [`new_edge_pair_at`](Self::new_edge_pair_at): returns the
    /// half-edge leaving `v`.
    pub fn new_edge_pair_from(&mut self, v: VertexId, e: HalfEdgeId, pos: Position) -> HalfEdgeId {
        self.new_edge_pair_at(e, v, pos).twin()
    }

    /// Creates an edge pair whose first half-edge is inserted before or after
    /// `e` at `source(e)`. The far end is left open.
    pub fn new_edge_pair_at_source(&mut self, e: HalfEdgeId, pos: Position) -> HalfEdgeId {
        let e_new = self.new_edge_pair();
        self.insert_at(e, e_new, pos);
        e_new
    }

    /// Creates an edge pair whose first half-edge is inserted at the
    /// beginning (`Before`) or end (`After`) of the rotation of `v`. The far
    /// end is left open.
    pub fn new_edge_pair_at_vertex(&mut self, v: VertexId, pos: Position) -> HalfEdgeId {
        let e1 = self.new_edge_pair();
        match self.first_out_edge(v) {
            Some(ef) => match pos {
                Position::Before => {
                    let cap = self.cyclic_adj_pred(ef);
                    self.set_adjacency_at_source_between(cap, e1, ef);
                    self.set_first_out_edge(v, Some(e1));
                }
                Position::After => {
                    let cas = self.cyclic_adj_succ(ef);
                    self.set_adjacency_at_source_between(ef, e1, cas);
                }
            },
            None => self.close_tip_at_source(e1, v),
        }
        e1
    }

    fn insert_at(&mut self, e: HalfEdgeId, e_new: HalfEdgeId, pos: Position) {
        match pos {
            Position::Before => {
                let cap = self.cyclic_adj_pred(e);
                self.set_adjacency_at_source_between(cap, e_new, e);
                let v = self.source(e);
                if self.first_out_edge(v) == Some(e) {
                    self.set_first_out_edge(v, Some(e_new));
                }
            }
            Position::After => {
                let cas = self.cyclic_adj_succ(e);
                self.set_adjacency_at_source_between(e, e_new, cas);
            }
        }
    }

    fn append_at_vertex(&mut self, e: HalfEdgeId, v: VertexId) {
        match self.first_out_edge(v) {
            Some(first) => {
                let last = self.cyclic_adj_pred(first);
                self.set_adjacency_at_source_between(last, e, first);
            }
            None => self.close_tip_at_source(e, v),
        }
    }

    // ==================== Deletion ====================

    /// Deletes `e` and its twin, keeping the rotations at both endpoints
    /// consistent. Boundary registrations of the pair are dropped.
    pub fn delete_edge_pair(&mut self, e: HalfEdgeId) {
        self.detach_at_source(e);
        self.detach_at_source(e.twin());
        self.delete_edge_pair_only(e);
    }

    /// Deletes `e` and its twin, keeping only the rotation at `source(e)`
    /// consistent.
    pub fn delete_edge_pair_at_source(&mut self, e: HalfEdgeId) {
        self.detach_at_source(e);
        self.delete_edge_pair_only(e);
    }

    fn detach_at_source(&mut self, e: HalfEdgeId) {
        if !self.source(e).is_null() {
            self.remove_from_adj_list_at_source(e);
        }
    }

    /// Deletes `v` together with all its edge pairs.
    pub fn delete_vertex(&mut self, v: VertexId) {
        while let Some(e) = self.first_out_edge(v) {
            self.delete_edge_pair(e);
        }
        self.remove_vertex_record(v);
    }

    /// Deletes the face and clears its boundary entries. The links of the
    /// entities that bounded it are left alone.
    pub fn delete_face(&mut self, f: FaceId) {
        self.clear_face_cycle_entries(f);
        self.delete_face_only(f);
    }

    /// Deletes an isolated vertex.
    ///
    /// Fails if `v` still has outgoing edges.
    pub fn delete_vertex_only(&mut self, v: VertexId) -> Result<(), SphereMapError> {
        if !self.contains_vertex(v) {
            return Err(SphereMapError::StaleVertex(v));
        }
        if !self.is_isolated(v) {
            return Err(SphereMapError::VertexNotIsolated(v));
        }
        self.remove_vertex_record(v);
        Ok(())
    }

    pub(crate) fn remove_vertex_record(&mut self, v: VertexId) {
        // Unregistering is a no-op for vertices that were never entries.
        let _ = self.registry.remove(BoundaryEntry::Vertex(v));
        self.vertices.remove(v);
        trace!(?v, "deleted vertex");
    }

    /// Deletes `e` and its twin without any connectivity update.
    pub fn delete_edge_pair_only(&mut self, e: HalfEdgeId) {
        let _ = self.registry.remove(BoundaryEntry::HalfEdge(e));
        let _ = self.registry.remove(BoundaryEntry::HalfEdge(e.twin()));
        self.edges.remove(e.edge());
        trace!(?e, "deleted edge pair");
    }

    /// Deletes `f` without touching its boundary entries. The entry list of
    /// `f` goes with it once it is empty.
    pub fn delete_face_only(&mut self, f: FaceId) {
        self.registry.drop_face(f);
        self.faces.remove(f);
        trace!(?f, "deleted face");
    }

    /// Deletes the loop pair without any connectivity update.
    pub fn delete_loop_only(&mut self) -> Result<(), SphereMapError> {
        let l = self.shalfloop().ok_or(SphereMapError::NoLoop)?;
        let _ = self.registry.remove(BoundaryEntry::HalfLoop(l));
        let _ = self.registry.remove(BoundaryEntry::HalfLoop(l.twin()));
        self.loops.remove(l.pair());
        trace!(?l, "deleted loop pair");
        Ok(())
    }

    /// Unregisters every boundary entry of `f`.
    pub fn clear_face_cycle_entries(&mut self, f: FaceId) {
        self.registry.clear_face(f);
    }

    // ==================== Boundary entries ====================

    /// Makes `f` the face of every half-edge on the cycle through `e` and
    /// registers `e` as that cycle's entry point.
    pub fn link_as_face_cycle(&mut self, e: HalfEdgeId, f: FaceId) -> Result<(), SphereMapError> {
        if !self.contains_halfedge(e) {
            return Err(SphereMapError::StaleEdge(e));
        }
        if !self.contains_face(f) {
            return Err(SphereMapError::StaleFace(f));
        }
        self.registry.insert(BoundaryEntry::HalfEdge(e), f)?;
        for h in self.face_cycle(e) {
            self.halfedge_mut(h).face = f;
        }
        Ok(())
    }

    /// Registers `l` as a trivial face cycle of `f`.
    pub fn link_as_loop(&mut self, l: HalfLoopId, f: FaceId) -> Result<(), SphereMapError> {
        if !self.contains_halfloop(l) {
            return Err(SphereMapError::StaleLoop(l.pair()));
        }
        if !self.contains_face(f) {
            return Err(SphereMapError::StaleFace(f));
        }
        self.registry.insert(BoundaryEntry::HalfLoop(l), f)?;
        self.halfloop_mut(l).face = f;
        Ok(())
    }

    /// Registers the isolated vertex `v` as a trivial face cycle of `f`.
    pub fn link_as_isolated_vertex(&mut self, v: VertexId, f: FaceId) -> Result<(), SphereMapError> {
        if !self.contains_vertex(v) {
            return Err(SphereMapError::StaleVertex(v));
        }
        if !self.contains_face(f) {
            return Err(SphereMapError::StaleFace(f));
        }
        if !self.is_isolated(v) {
            return Err(SphereMapError::VertexNotIsolated(v));
        }
        self.registry.insert(BoundaryEntry::Vertex(v), f)?;
        self.vertex_mut(v).face = f;
        Ok(())
    }

    /// Removes the face cycle entered at `e` from its face. The face links
    /// of the cycle are left alone.
    pub fn unlink_as_face_cycle(&mut self, e: HalfEdgeId) -> Result<(), SphereMapError> {
        self.registry.remove(BoundaryEntry::HalfEdge(e)).map(|_| ())
    }

    /// Removes `l` from the entries of its face. Its face link is left alone.
    pub fn unlink_as_loop(&mut self, l: HalfLoopId) -> Result<(), SphereMapError> {
        self.registry.remove(BoundaryEntry::HalfLoop(l)).map(|_| ())
    }

    /// Removes `v` from the entries of its face. Its face link is left alone.
    pub fn unlink_as_isolated_vertex(&mut self, v: VertexId) -> Result<(), SphereMapError> {
        self.registry.remove(BoundaryEntry::Vertex(v)).map(|_| ())
    }

    // ==================== Splicing ====================

    /// Makes `e1` and `e2` consecutive in a face cycle:
    /// `next(e1) == e2` and `previous(e2) == e1`.
    pub fn link_as_prev_next_pair(&mut self, e1: HalfEdgeId, e2: HalfEdgeId) {
        self.halfedge_mut(e1).next = e2;
        self.halfedge_mut(e2).prev = e1;
    }

    /// Makes `en` the successor of `e` in the rotation around their common
    /// source.
    pub fn set_adjacency_at_source(&mut self, e: HalfEdgeId, en: HalfEdgeId) {
        debug_assert_eq!(self.source(e), self.source(en), "rotation across vertices");
        self.link_as_prev_next_pair(en.twin(), e);
    }

    /// Inserts `e_between` between `e1` and `e2` in the rotation around
    /// `source(e1)` and makes that vertex its source.
    ///
    /// `e1` and `e2` must share their source; they may be the same half-edge.
    pub fn set_adjacency_at_source_between(
        &mut self,
        e1: HalfEdgeId,
        e_between: HalfEdgeId,
        e2: HalfEdgeId,
    ) {
        let v = self.source(e1);
        self.halfedge_mut(e_between).source = v;
        self.set_adjacency_at_source(e1, e_between);
        self.set_adjacency_at_source(e_between, e2);
    }

    /// Sets `source(e) = v` and closes the tip, so that
    /// `previous(e) == twin(e)`.
    pub fn close_tip_at_source(&mut self, e: HalfEdgeId, v: VertexId) {
        self.link_as_source_of(e, v);
        self.link_as_prev_next_pair(e.twin(), e);
    }

    /// Sets `target(e) = v` and closes the tip, so that
    /// `next(e) == twin(e)`.
    pub fn close_tip_at_target(&mut self, e: HalfEdgeId, v: VertexId) {
        self.link_as_target_of(e, v);
        self.link_as_prev_next_pair(e, e.twin());
    }

    /// Sets `source(e) = v`; `e` becomes the first out edge if `v` was
    /// isolated.
    pub fn link_as_source_of(&mut self, e: HalfEdgeId, v: VertexId) {
        self.halfedge_mut(e).source = v;
        let vertex = self.vertex_mut(v);
        if vertex.out_edge.is_none() {
            vertex.out_edge = Some(e);
        }
    }

    /// Sets `target(e) = v`.
    pub fn link_as_target_of(&mut self, e: HalfEdgeId, v: VertexId) {
        self.link_as_source_of(e.twin(), v);
    }

    /// Makes `v` the target of `e` and appends `twin(e)` to the rotation
    /// of `v`.
    pub fn link_as_target_and_append(&mut self, v: VertexId, e: HalfEdgeId) {
        match self.first_out_edge(v) {
            Some(first) => {
                let last = self.cyclic_adj_pred(first);
                self.set_adjacency_at_source_between(last, e.twin(), first);
            }
            None => self.close_tip_at_target(e, v),
        }
    }

    /// Takes `e` out of the rotation around its source. The face cycle that
    /// ran through `e` bypasses it afterwards, and the first out edge of the
    /// source stays valid when the source keeps other edges.
    pub fn remove_from_adj_list_at_source(&mut self, e: HalfEdgeId) {
        let v = self.source(e);
        if self.is_closed_at_source(e) {
            self.vertex_mut(v).out_edge = None;
        } else {
            let cap = self.cyclic_adj_pred(e);
            let cas = self.cyclic_adj_succ(e);
            if self.first_out_edge(v) == Some(e) {
                self.vertex_mut(v).out_edge = Some(cap);
            }
            self.set_adjacency_at_source(cap, cas);
        }
    }

    // ==================== Raw setters ====================

    /// Sets the face of `e` without touching boundary entries.
    pub fn set_face(&mut self, e: HalfEdgeId, f: FaceId) {
        self.halfedge_mut(e).face = f;
    }

    /// Sets the face of an isolated vertex without touching boundary entries.
    pub fn set_vertex_face(&mut self, v: VertexId, f: FaceId) {
        self.vertex_mut(v).face = f;
    }

    /// Sets the face of `l` without touching boundary entries.
    pub fn set_loop_face(&mut self, l: HalfLoopId, f: FaceId) {
        self.halfloop_mut(l).face = f;
    }

    /// Sets the first out edge of `v`; `None` marks it isolated.
    pub fn set_first_out_edge(&mut self, v: VertexId, e: Option<HalfEdgeId>) {
        self.vertex_mut(v).out_edge = e;
    }

    /// Sets `previous(e)` only.
    pub fn set_prev(&mut self, e: HalfEdgeId, ep: HalfEdgeId) {
        self.halfedge_mut(e).prev = ep;
    }

    /// Sets `next(e)` only.
    pub fn set_next(&mut self, e: HalfEdgeId, en: HalfEdgeId) {
        self.halfedge_mut(e).next = en;
    }

    /// Sets `source(e)` only.
    pub fn set_source(&mut self, e: HalfEdgeId, v: VertexId) {
        self.halfedge_mut(e).source = v;
    }
}
