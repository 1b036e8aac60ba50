//! Structural validation of sphere maps.
//!
//! The validator walks every rotation and every registered face cycle and
//! checks that the links agree with each other:
//!
//! - `previous(next(e)) == e` and `face(next(e)) == face(e)` for every half-edge
//! - every link points at a live entity
//! - the rotation around each vertex contains exactly the half-edges leaving it
//! - isolated vertices, the loop pair and face cycles are registered exactly
//!   once with the face they bound
//! - the counts describe a subdivision of the sphere: `V - E + F == 1 + C`,
//!   where `C` counts connected components and the loop pair is a component
//!   of its own
//!
//! All lookups are checked, so a corrupted map produces a report instead of a
//! panic. Walks keep visited sets and stop on the first repeat, which bounds
//! them even when links form cycles that never return to their start.

use std::collections::{HashMap, HashSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::handle::{BoundaryEntry, FaceId, HalfEdgeId, HalfLoopId, VertexId};
use crate::kernel::SphereKernel;
use crate::store::{HalfEdgeRecord, SphereMap};

/// A broken invariant found by [`SphereMap::validate_with`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidityError {
    /// A walk reached a half-edge it had already passed.
    #[error("half-edge {0:?} visited twice")]
    VisitedTwice(HalfEdgeId),

    /// More steps were taken than a valid map of this size allows.
    #[error("traversal visited {visited} items, bound is {bound}")]
    TraversalBoundExceeded { visited: usize, bound: usize },

    /// `previous(next(e)) != e`.
    #[error("previous(next({0:?})) does not lead back")]
    NextPrevMismatch(HalfEdgeId),

    /// `face(next(e)) != face(e)`.
    #[error("{0:?} and its successor lie in different faces")]
    FaceMismatch(HalfEdgeId),

    /// A link of a half-edge points at a deleted or unset entity.
    #[error("{link} of {halfedge:?} is dangling")]
    DanglingLink {
        halfedge: HalfEdgeId,
        link: &'static str,
    },

    /// The first out edge of a vertex is deleted.
    #[error("first out edge of {0:?} is dangling")]
    DanglingOutEdge(VertexId),

    /// The first out edge of a vertex does not leave it.
    #[error("first out edge {halfedge:?} does not leave {vertex:?}")]
    FirstOutEdgeMismatch {
        vertex: VertexId,
        halfedge: HalfEdgeId,
    },

    /// The rotation around a vertex reached a half-edge leaving elsewhere.
    #[error("rotation around {vertex:?} contains {halfedge:?}")]
    ForeignHalfEdge {
        vertex: VertexId,
        halfedge: HalfEdgeId,
    },

    /// The rotation around a vertex has the wrong length.
    #[error("rotation around {vertex:?} has {found} half-edges, expected {expected}")]
    RotationMismatch {
        vertex: VertexId,
        found: usize,
        expected: usize,
    },

    /// Registered isolated vertices differ from the isolated vertices.
    #[error("{entries} isolated vertex entries for {isolated} isolated vertices")]
    IsolatedEntryCount { entries: usize, isolated: usize },

    /// Loop entries are not two with a loop pair, zero without.
    #[error("{entries} loop entries, expected {expected}")]
    LoopEntryCount { entries: usize, expected: usize },

    /// The map has half-edges but no face cycle entry.
    #[error("half-edges exist but no face cycle is registered")]
    MissingEdgeEntries,

    /// A face cycle is entered by zero or several registered half-edges.
    #[error("face cycle through {halfedge:?} has {entries} entries")]
    FaceCycleEntryCount {
        halfedge: HalfEdgeId,
        entries: usize,
    },

    /// More than one loop pair exists.
    #[error("{0} loop pairs exist")]
    TooManyLoops(usize),

    /// An entry refers to a deleted entity or face, or its entity lies in a
    /// different face than the one it is registered with.
    #[error("boundary entry {0:?} does not match its face")]
    RegistryMismatch(BoundaryEntry),

    /// The Euler characteristic does not fit a subdivision of the sphere.
    #[error(
        "{vertices} vertices, {edges} edges and {faces} faces do not fit {components} components on a sphere"
    )]
    NotPlanar {
        vertices: usize,
        edges: usize,
        faces: usize,
        components: usize,
    },
}

/// Configuration for [`SphereMap::validate_with`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationConfig {
    /// Check boundary entries and face cycle registration.
    pub check_face_cycle_entries: bool,
    /// Walk the rotation around every vertex.
    pub check_rotations: bool,
    /// Compare the Euler characteristic with the number of components.
    pub check_planarity: bool,
    /// Stop after this many errors.
    pub max_errors: Option<usize>,
    /// Emit a warning for every error found.
    pub log_errors: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_face_cycle_entries: true,
            check_rotations: true,
            check_planarity: true,
            max_errors: None,
            log_errors: true,
        }
    }
}

impl ValidationConfig {
    /// Enables or disables boundary entry checks.
    pub fn with_face_cycle_entries(mut self, check: bool) -> Self {
        self.check_face_cycle_entries = check;
        self
    }

    /// Enables or disables rotation walks.
    pub fn with_rotations(mut self, check: bool) -> Self {
        self.check_rotations = check;
        self
    }

    /// Enables or disables the Euler characteristic check.
    pub fn with_planarity(mut self, check: bool) -> Self {
        self.check_planarity = check;
        self
    }

    /// Caps the number of reported errors.
    pub fn with_max_errors(mut self, max: usize) -> Self {
        self.max_errors = Some(max);
        self
    }

    /// Enables or disables warnings.
    pub fn with_log_errors(mut self, log: bool) -> Self {
        self.log_errors = log;
        self
    }
}

/// Outcome of a validation run.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Errors in the order they were found.
    pub errors: Vec<ValidityError>,
    /// Items visited by all walks.
    pub visited: usize,
    /// Upper bound on `visited` for a valid map of this size.
    pub bound: usize,
}

impl ValidationReport {
    /// Returns true if no error was found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

struct Checker<'a> {
    config: &'a ValidationConfig,
    report: ValidationReport,
}

impl Checker<'_> {
    fn push(&mut self, error: ValidityError) {
        if self.full() {
            return;
        }
        if self.config.log_errors {
            warn!(%error, "sphere map invariant violated");
        }
        self.report.errors.push(error);
    }

    fn full(&self) -> bool {
        self.config
            .max_errors
            .is_some_and(|max| self.report.errors.len() >= max)
    }

    fn visit(&mut self) {
        self.report.visited += 1;
    }
}

impl<K: SphereKernel, I> SphereMap<K, I> {
    /// Checks every structural invariant and returns the findings.
    pub fn validate_with(&self, config: &ValidationConfig) -> ValidationReport {
        let mut checker = Checker {
            config,
            report: ValidationReport {
                bound: 2 * self.number_of_vertices()
                    + 2 * self.number_of_halfedges()
                    + self.number_of_faces()
                    + 2,
                ..Default::default()
            },
        };

        self.check_links(&mut checker);
        if config.check_rotations {
            self.check_rotations(&mut checker);
        }
        if config.check_face_cycle_entries {
            self.check_entries(&mut checker);
        }
        if config.check_planarity {
            self.check_planarity(&mut checker);
        }
        checker.report.visited += self.number_of_faces();

        let (visited, bound) = (checker.report.visited, checker.report.bound);
        if visited > bound {
            checker.push(ValidityError::TraversalBoundExceeded { visited, bound });
        }

        let report = checker.report;
        debug!(
            visited = report.visited,
            bound = report.bound,
            errors = report.errors.len(),
            "validated sphere map"
        );
        report
    }

    /// Validates with the default configuration.
    pub fn validate(&self) -> ValidationReport {
        self.validate_with(&ValidationConfig::default())
    }

    /// Returns true if every structural invariant holds.
    pub fn is_valid(&self) -> bool {
        self.validate_with(&ValidationConfig::default().with_max_errors(1))
            .is_valid()
    }

    fn checked_halfedge(&self, e: HalfEdgeId) -> Option<&HalfEdgeRecord<K::Circle, I>> {
        self.edges.get(e.edge()).map(|pair| &pair.halves[e.side()])
    }

    /// Local checks on every half-edge.
    fn check_links(&self, checker: &mut Checker<'_>) {
        for e in self.halfedges() {
            if checker.full() {
                return;
            }
            let Some(record) = self.checked_halfedge(e) else {
                continue;
            };
            if !self.vertices.contains_key(record.source) {
                checker.push(ValidityError::DanglingLink {
                    halfedge: e,
                    link: "source",
                });
            }
            if !self.faces.contains_key(record.face) {
                checker.push(ValidityError::DanglingLink {
                    halfedge: e,
                    link: "face",
                });
            }
            if self.checked_halfedge(record.prev).is_none() {
                checker.push(ValidityError::DanglingLink {
                    halfedge: e,
                    link: "previous",
                });
            }
            match self.checked_halfedge(record.next) {
                None => checker.push(ValidityError::DanglingLink {
                    halfedge: e,
                    link: "next",
                }),
                Some(next) => {
                    if next.prev != e {
                        checker.push(ValidityError::NextPrevMismatch(e));
                    }
                    if next.face != record.face {
                        checker.push(ValidityError::FaceMismatch(e));
                    }
                }
            }
        }
    }

    /// Walks the rotation around every vertex.
    fn check_rotations(&self, checker: &mut Checker<'_>) {
        let mut out_counts: HashMap<VertexId, usize> = HashMap::new();
        for e in self.halfedges() {
            if let Some(record) = self.checked_halfedge(e) {
                *out_counts.entry(record.source).or_default() += 1;
            }
        }

        let mut seen: HashSet<HalfEdgeId> = HashSet::new();
        for (v, vertex) in &self.vertices {
            if checker.full() {
                return;
            }
            checker.visit();
            let expected = out_counts.get(&v).copied().unwrap_or(0);
            let Some(start) = vertex.out_edge else {
                if expected != 0 {
                    checker.push(ValidityError::RotationMismatch {
                        vertex: v,
                        found: 0,
                        expected,
                    });
                }
                continue;
            };
            match self.checked_halfedge(start) {
                None => {
                    checker.push(ValidityError::DanglingOutEdge(v));
                    continue;
                }
                Some(record) if record.source != v => {
                    checker.push(ValidityError::FirstOutEdgeMismatch {
                        vertex: v,
                        halfedge: start,
                    });
                    continue;
                }
                Some(_) => {}
            }

            let mut found = 0;
            let mut current = start;
            loop {
                if !seen.insert(current) {
                    checker.push(ValidityError::VisitedTwice(current));
                    break;
                }
                checker.visit();
                found += 1;
                let Some(record) = self.checked_halfedge(current) else {
                    break;
                };
                if record.source != v {
                    checker.push(ValidityError::ForeignHalfEdge {
                        vertex: v,
                        halfedge: current,
                    });
                    break;
                }
                // cyclic_adj_succ, with the lookup checked.
                current = record.prev.twin();
                if current == start || self.checked_halfedge(current).is_none() {
                    break;
                }
            }
            if found != expected {
                checker.push(ValidityError::RotationMismatch {
                    vertex: v,
                    found,
                    expected,
                });
            }
        }
    }

    /// Checks the registry against the entities it names and makes sure
    /// every face cycle is entered exactly once.
    fn check_entries(&self, checker: &mut Checker<'_>) {
        let mut isolated_entries = 0;
        let mut loop_entries = 0;
        let mut edge_entries = Vec::new();

        for f in self.registry.faces() {
            let live_face = self.faces.contains_key(f);
            for entry in self.registry.entries(f) {
                if !live_face || !self.entry_lies_in(entry, f) {
                    checker.push(ValidityError::RegistryMismatch(entry));
                }
                match entry {
                    BoundaryEntry::Vertex(_) => {
                        checker.visit();
                        isolated_entries += 1;
                    }
                    BoundaryEntry::HalfLoop(_) => {
                        checker.visit();
                        loop_entries += 1;
                    }
                    BoundaryEntry::HalfEdge(e) => edge_entries.push(e),
                }
            }
        }

        let isolated = self.number_of_isolated_vertices();
        if isolated_entries != isolated {
            checker.push(ValidityError::IsolatedEntryCount {
                entries: isolated_entries,
                isolated,
            });
        }
        if self.loops.len() > 1 {
            checker.push(ValidityError::TooManyLoops(self.loops.len()));
        }
        let expected = if self.has_sloop() { 2 } else { 0 };
        if loop_entries != expected {
            checker.push(ValidityError::LoopEntryCount {
                entries: loop_entries,
                expected,
            });
        }
        if self.number_of_halfedges() > 0 && edge_entries.is_empty() {
            checker.push(ValidityError::MissingEdgeEntries);
        }

        let mut seen: HashSet<HalfEdgeId> = HashSet::new();
        for &entry in &edge_entries {
            if checker.full() {
                return;
            }
            if seen.contains(&entry) {
                // Already walked from another entry of the same cycle.
                continue;
            }
            let mut entries = 0;
            let mut current = entry;
            loop {
                if !seen.insert(current) {
                    checker.push(ValidityError::VisitedTwice(current));
                    break;
                }
                checker.visit();
                if self.registry.contains(current.into()) {
                    entries += 1;
                }
                let Some(record) = self.checked_halfedge(current) else {
                    break;
                };
                current = record.next;
                if current == entry || self.checked_halfedge(current).is_none() {
                    break;
                }
            }
            if entries != 1 {
                checker.push(ValidityError::FaceCycleEntryCount {
                    halfedge: entry,
                    entries,
                });
            }
        }

        // Cycles no entry leads into.
        for e in self.halfedges() {
            if checker.full() {
                return;
            }
            if !seen.contains(&e) {
                checker.push(ValidityError::FaceCycleEntryCount {
                    halfedge: e,
                    entries: 0,
                });
                for h in self.face_cycle_checked(e) {
                    seen.insert(h);
                }
            }
        }
    }

    /// Checks `V - E + F == 1 + C`.
    ///
    /// Components are counted over the source links of the edge pairs, so
    /// the count is meaningful even if the rotations are broken. A map
    /// without faces is incomplete and not checked.
    fn check_planarity(&self, checker: &mut Checker<'_>) {
        if self.faces.is_empty() {
            return;
        }
        let mut parent: HashMap<VertexId, VertexId> =
            self.vertices.keys().map(|v| (v, v)).collect();
        let mut components = parent.len();
        for pair in self.edges.values() {
            let (a, b) = (pair.halves[0].source, pair.halves[1].source);
            if !parent.contains_key(&a) || !parent.contains_key(&b) {
                continue;
            }
            let (ra, rb) = (find_root(&mut parent, a), find_root(&mut parent, b));
            if ra != rb {
                parent.insert(ra, rb);
                components -= 1;
            }
        }
        components += self.loops.len();

        let vertices = self.number_of_vertices();
        let edges = self.number_of_edges();
        let faces = self.number_of_faces();
        if vertices + faces != 1 + components + edges {
            checker.push(ValidityError::NotPlanar {
                vertices,
                edges,
                faces,
                components,
            });
        }
    }

    fn entry_lies_in(&self, entry: BoundaryEntry, f: FaceId) -> bool {
        match entry {
            BoundaryEntry::Vertex(v) => self
                .vertices
                .get(v)
                .is_some_and(|vertex| vertex.out_edge.is_none() && vertex.face == f),
            BoundaryEntry::HalfEdge(e) => self.checked_halfedge(e).is_some_and(|h| h.face == f),
            BoundaryEntry::HalfLoop(l) => self.checked_halfloop(l).is_some_and(|face| face == f),
        }
    }

    fn checked_halfloop(&self, l: HalfLoopId) -> Option<FaceId> {
        self.loops.get(l.pair()).map(|pair| pair.halves[l.side()].face)
    }

    /// Face cycle through `e`, stopping at dangling links and repeats.
    fn face_cycle_checked(&self, e: HalfEdgeId) -> Vec<HalfEdgeId> {
        let mut result = Vec::new();
        let mut seen = HashSet::new();
        let mut current = e;
        while !current.is_null() && seen.insert(current) {
            result.push(current);
            match self.checked_halfedge(current) {
                Some(record) => current = record.next,
                None => break,
            }
        }
        result
    }
}

/// Union-find lookup with path halving.
fn find_root(parent: &mut HashMap<VertexId, VertexId>, mut v: VertexId) -> VertexId {
    loop {
        let p = parent[&v];
        if p == v {
            return v;
        }
        let grandparent = parent[&p];
        parent.insert(v, grandparent);
        v = grandparent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{closed_edge, path_uvw, tetrahedron, two_triangles};
    use crate::kernel::SpherePoint;
    use slotmap::Key;

    fn quiet() -> ValidationConfig {
        ValidationConfig::default().with_log_errors(false)
    }

    #[test]
    fn test_fixtures_are_valid() {
        assert!(tetrahedron().0.validate().is_valid());
        assert!(path_uvw().0.validate().is_valid());
        assert!(two_triangles().0.validate().is_valid());
        assert!(closed_edge().0.validate().is_valid());
    }

    #[test]
    fn test_empty_map_is_valid() {
        let map: SphereMap = SphereMap::new();
        let report = map.validate();

        assert!(report.is_valid());
        assert_eq!(report.visited, 0);
        assert_eq!(report.bound, 2);
    }

    #[test]
    fn test_visited_within_bound() {
        let (map, _) = tetrahedron();
        let report = map.validate();

        // 4 vertices, 12 half-edges in rotations and in cycles, 4 faces.
        assert_eq!(report.visited, 4 + 12 + 12 + 4);
        assert!(report.visited <= report.bound);
    }

    #[test]
    fn test_broken_next_detected() {
        let (mut map, _) = tetrahedron();
        let e = map.edges().next().unwrap();
        let en = map.next(e);
        map.set_next(e, map.next(en));

        let report = map.validate_with(&quiet());
        assert!(!report.is_valid());
        assert!(report.errors.contains(&ValidityError::NextPrevMismatch(e)));
    }

    #[test]
    fn test_broken_face_detected() {
        let (mut map, _) = tetrahedron();
        let e = map.edges().next().unwrap();
        map.set_face(e, map.face(e.twin()));

        let report = map.validate_with(&quiet());
        assert!(report.errors.contains(&ValidityError::FaceMismatch(e)));
    }

    #[test]
    fn test_deleted_face_detected() {
        let (mut map, _, e) = path_uvw();
        let f = map.face(e);
        map.delete_face_only(f);

        let report = map.validate_with(&quiet());
        assert!(report.errors.contains(&ValidityError::DanglingLink {
            halfedge: e,
            link: "face"
        }));
        assert!(report
            .errors
            .contains(&ValidityError::RegistryMismatch(e.into())));
    }

    #[test]
    fn test_wrong_first_out_edge_detected() {
        let (mut map, [u, v, _], e) = path_uvw();
        map.set_first_out_edge(u, Some(map.first_out_edge(v).unwrap()));

        let report = map.validate_with(&quiet());
        assert!(report.errors.iter().any(|err| matches!(
            err,
            ValidityError::FirstOutEdgeMismatch { vertex, .. } if *vertex == u
        )));
        assert_eq!(map.source(e), u);
    }

    #[test]
    fn test_stray_source_detected() {
        let (mut map, [u, v, _], e) = path_uvw();
        map.set_source(e, v);

        let report = map.validate_with(&quiet());
        assert!(report.errors.iter().any(|err| matches!(
            err,
            ValidityError::FirstOutEdgeMismatch { vertex, .. } if *vertex == u
        )));
        assert!(report.errors.iter().any(|err| matches!(
            err,
            ValidityError::RotationMismatch { vertex, .. } if *vertex == v
        )));
    }

    #[test]
    fn test_unregistered_isolated_vertex() {
        let mut map: SphereMap = SphereMap::new();
        map.new_vertex(SpherePoint::new(0.0, 0.0, 1.0));

        let report = map.validate_with(&quiet());
        assert_eq!(
            report.errors,
            vec![ValidityError::IsolatedEntryCount {
                entries: 0,
                isolated: 1
            }]
        );
    }

    #[test]
    fn test_half_registered_loop() {
        let mut map: SphereMap = SphereMap::new();
        let l = map.new_loop_pair().unwrap();
        let f = map.new_face();
        map.link_as_loop(l, f).unwrap();

        let report = map.validate_with(&quiet().with_planarity(false));
        assert_eq!(
            report.errors,
            vec![ValidityError::LoopEntryCount {
                entries: 1,
                expected: 2
            }]
        );
    }

    #[test]
    fn test_unregistered_cycle() {
        let (mut map, _, e) = path_uvw();
        map.unlink_as_face_cycle(e).unwrap();

        let report = map.validate_with(&quiet());
        assert!(report.errors.contains(&ValidityError::MissingEdgeEntries));
        assert!(report
            .errors
            .iter()
            .any(|err| matches!(err, ValidityError::FaceCycleEntryCount { entries: 0, .. })));
    }

    #[test]
    fn test_doubly_registered_cycle() {
        let (mut map, _, e) = path_uvw();
        let f = map.face(e);
        let en = map.next(e);
        map.link_as_face_cycle(en, f).unwrap();

        let report = map.validate_with(&quiet());
        assert_eq!(
            report.errors,
            vec![ValidityError::FaceCycleEntryCount {
                halfedge: e,
                entries: 2
            }]
        );
    }

    #[test]
    fn test_rho_shaped_cycle_terminates() {
        // Point a cycle into itself so that it never returns to its start.
        let (mut map, _) = tetrahedron();
        let e = map.edges().next().unwrap();
        let en = map.next(e);
        map.set_next(map.next(en), en);

        let report = map.validate_with(&quiet());
        assert!(!report.is_valid());
    }

    #[test]
    fn test_max_errors() {
        let (mut map, _) = tetrahedron();
        for e in map.halfedges().collect::<Vec<_>>() {
            map.set_face(e, FaceId::null());
        }

        let all = map.validate_with(&quiet());
        let capped = map.validate_with(&quiet().with_max_errors(3));
        assert!(all.errors.len() > 3);
        assert_eq!(capped.errors.len(), 3);
        assert_eq!(capped.errors[..], all.errors[..3]);
    }

    #[test]
    fn test_disabled_checks() {
        let (mut map, _, e) = path_uvw();
        map.unlink_as_face_cycle(e).unwrap();

        let config = quiet().with_face_cycle_entries(false).with_rotations(false);
        assert!(map.validate_with(&config).is_valid());
    }

    #[test]
    fn test_merged_faces_not_planar() {
        // Hand one triangle over to its neighbor: both cycles now bound a
        // single face, which no sphere subdivision of K4 has.
        let (mut map, _) = tetrahedron();
        let e = map.edges().next().unwrap();
        let (f, g) = (map.face(e), map.face(e.twin()));
        let entry = map.face_cycles(g).next().unwrap();
        let h = entry.as_halfedge().unwrap();
        map.unlink_as_face_cycle(h).unwrap();
        map.link_as_face_cycle(h, f).unwrap();
        map.delete_face_only(g);

        let report = map.validate_with(&quiet());
        assert_eq!(
            report.errors,
            vec![ValidityError::NotPlanar {
                vertices: 4,
                edges: 6,
                faces: 3,
                components: 1
            }]
        );
        assert!(!map.is_valid());
    }

    #[test]
    fn test_unbounded_face_not_planar() {
        let (mut map, _) = tetrahedron();
        map.new_face();

        let report = map.validate_with(&quiet());
        assert_eq!(
            report.errors,
            vec![ValidityError::NotPlanar {
                vertices: 4,
                edges: 6,
                faces: 5,
                components: 1
            }]
        );
        assert!(map.validate_with(&quiet().with_planarity(false)).is_valid());
    }

    #[test]
    fn test_components_counted() {
        // An isolated vertex inside one triangle is a second component.
        let (mut map, _) = tetrahedron();
        let f = map.faces().next().unwrap();
        let v = map.new_vertex(SpherePoint::new(0.0, 0.0, -1.0));
        map.link_as_isolated_vertex(v, f).unwrap();
        assert!(map.validate().is_valid());

        // So is the loop pair.
        let (mut map, _, _) = path_uvw();
        let f = map.faces().next().unwrap();
        let l = map.new_loop_pair().unwrap();
        let south = map.new_face();
        map.link_as_loop(l, f).unwrap();
        map.link_as_loop(l.twin(), south).unwrap();
        assert!(map.validate().is_valid());
    }

    #[test]
    fn test_error_messages() {
        let err = ValidityError::TraversalBoundExceeded {
            visited: 10,
            bound: 8,
        };
        assert_eq!(err.to_string(), "traversal visited 10 items, bound is 8");
    }
}
