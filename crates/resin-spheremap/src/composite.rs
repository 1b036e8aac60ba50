//! Composite structural operations.
//!
//! Each operation checks its whole precondition before the first mutation.
//! A call that returns an error has left the map untouched; a call that
//! succeeds moves it from one consistent configuration to another.

use tracing::{debug, instrument};

use crate::error::SphereMapError;
use crate::handle::{BoundaryEntry, HalfEdgeId, HalfLoopId};
use crate::kernel::SphereKernel;
use crate::store::SphereMap;

impl<K: SphereKernel, I> SphereMap<K, I> {
    /// Merges the two edge pairs meeting at `v = target(e)`.
    ///
    /// `e` and `twin(e)` survive and now run between `source(e)` and
    /// `target(next(e))`; `next(e)`, its twin and `v` are deleted. If
    /// `next(e)` was the entry point of its face cycle, `e` takes over that
    /// role; the same holds for `twin(next(e))` and `twin(e)`.
    ///
    /// Fails unless `v` has outdegree two, or if `e` is a closed edge. An
    /// open far end of `e` counts as outdegree zero.
    #[instrument(level = "debug", skip(self))]
    pub fn merge_edge_pairs_at_target(&mut self, e: HalfEdgeId) -> Result<(), SphereMapError> {
        if !self.contains_halfedge(e) {
            return Err(SphereMapError::StaleEdge(e));
        }
        let v = self.target(e);
        if !self.contains_vertex(v) {
            return Err(SphereMapError::NotOutdegreeTwo {
                vertex: v,
                degree: 0,
            });
        }
        if !self.has_outdeg_two(v) {
            return Err(SphereMapError::NotOutdegreeTwo {
                vertex: v,
                degree: self.out_degree(v),
            });
        }

        let eo = e.twin();
        let en = self.next(e);
        if en.edge() == e.edge() {
            return Err(SphereMapError::ClosedEdge(e));
        }
        let eno = en.twin();
        let vn = self.target(en);

        if self.is_closed_at_target(en) {
            // `vn` is a dead end: the merged edge now turns around at it.
            self.link_as_prev_next_pair(e, eo);
        } else {
            let enn = self.next(en);
            let enno = self.previous(eno);
            self.link_as_prev_next_pair(e, enn);
            self.link_as_prev_next_pair(enno, eo);
        }

        self.set_source(eo, vn);
        // An open far end stays open.
        if self.contains_vertex(vn) && self.first_out_edge(vn) == Some(eno) {
            self.set_first_out_edge(vn, Some(eo));
        }
        self.transfer_entry(en.into(), e.into())?;
        self.transfer_entry(eno.into(), eo.into())?;

        self.remove_vertex_record(v);
        self.delete_edge_pair_only(en);
        debug!(?e, ?v, "merged edge pairs at target");
        Ok(())
    }

    /// Converts the closed edge of `e` into the loop pair of the map.
    ///
    /// `e` must run from a vertex `v` back to itself with nothing else
    /// attached (`next(e) == e` and `next(twin(e)) == twin(e)`), and both of
    /// its half-edges must be entries of their faces. The new loop takes over
    /// the circles, the mark and the two face registrations; `e`, its twin and
    /// `v` are deleted.
    ///
    /// Fails if the map already has a loop.
    #[instrument(level = "debug", skip(self))]
    pub fn convert_edge_to_loop(&mut self, e: HalfEdgeId) -> Result<HalfLoopId, SphereMapError> {
        if !self.contains_halfedge(e) {
            return Err(SphereMapError::StaleEdge(e));
        }
        if self.has_sloop() {
            return Err(SphereMapError::LoopAlreadyExists);
        }
        let eo = e.twin();
        if self.next(e) != e || self.next(eo) != eo || self.source(e) != self.target(e) {
            return Err(SphereMapError::NotClosedEdge(e));
        }
        for h in [e, eo] {
            if !self.is_boundary_object(h) {
                return Err(SphereMapError::NotBoundaryEntry(h.into()));
            }
        }

        let v = self.target(e);
        let f1 = self.face(e);
        let f2 = self.face(eo);
        let l = self.new_loop_pair()?;
        self.unlink_as_face_cycle(e)?;
        self.unlink_as_face_cycle(eo)?;
        self.link_as_loop(l, f1)?;
        self.link_as_loop(l.twin(), f2)?;

        let circle = self.circle(e).clone();
        let circle_opposite = self.circle(eo).clone();
        self.halfloop_mut(l).circle = circle;
        self.halfloop_mut(l.twin()).circle = circle_opposite;
        let mark = self.mark(e);
        self.set_mark(l, mark);

        self.remove_vertex_record(v);
        self.delete_edge_pair_only(e);
        debug!(?e, ?l, "converted edge to loop");
        Ok(l)
    }

    /// Flips `e`, the diagonal of the quadrilateral formed by its two
    /// incident triangles, to the other diagonal.
    ///
    /// Afterwards both cycles are triangles again. `e` keeps its face and
    /// `twin(e)` keeps its face; the two sides that changed triangles are
    /// restamped, and a boundary entry that left its face is handed to `e`
    /// or `twin(e)`.
    ///
    /// Fails unless the faces around `e` are two triangles spanning four
    /// distinct vertices.
    #[instrument(level = "debug", skip(self))]
    pub fn flip_diagonal(&mut self, e: HalfEdgeId) -> Result<(), SphereMapError> {
        if !self.contains_halfedge(e) {
            return Err(SphereMapError::StaleEdge(e));
        }
        let r = e.twin();
        let en = self.next(e);
        let enn = self.next(en);
        let rn = self.next(r);
        let rnn = self.next(rn);
        let triangles = self.next(enn) == e && self.next(rnn) == r;
        let corners = [self.source(e), self.target(e), self.source(enn), self.source(rnn)];
        let quadrilateral = (1..4).all(|i| !corners[..i].contains(&corners[i]));
        if !triangles || !quadrilateral {
            return Err(SphereMapError::NotTriangulated(e));
        }

        let f1 = self.face(e);
        let f2 = self.face(r);

        self.remove_from_adj_list_at_source(e);
        self.remove_from_adj_list_at_source(r);
        self.set_adjacency_at_source_between(enn, e, en.twin());
        self.set_adjacency_at_source_between(rnn, r, rn.twin());

        // New cycles are (e, rnn, en) and (r, enn, rn).
        self.set_face(rnn, f1);
        self.set_face(enn, f2);
        if self.is_boundary_object(enn) {
            self.transfer_entry(enn.into(), e.into())?;
        }
        if self.is_boundary_object(rnn) {
            self.transfer_entry(rnn.into(), r.into())?;
        }

        debug!(?e, "flipped diagonal");
        Ok(())
    }

    /// Hands the registration of `old` over to `new`. If `new` is already an
    /// entry, `old` is just dropped.
    fn transfer_entry(&mut self, old: BoundaryEntry, new: BoundaryEntry) -> Result<(), SphereMapError> {
        if !self.registry.contains(old) {
            return Ok(());
        }
        if self.registry.contains(new) {
            self.registry.remove(old)?;
        } else {
            self.registry.replace(old, new)?;
        }
        Ok(())
    }
}
