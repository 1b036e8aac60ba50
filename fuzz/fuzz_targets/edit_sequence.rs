#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use rhizome_resin_spheremap::{HalfEdgeId, Position, SphereMap, SpherePoint};

/// Wheel with six rim vertices, one face per cycle.
fn wheel() -> SphereMap {
    let mut map = SphereMap::new();
    let hub = map.new_vertex(SpherePoint::new(0.0, 0.0, 1.0));
    let mut spokes = vec![HalfEdgeId::null(); 6];
    for i in (0..6).rev() {
        let t = std::f64::consts::TAU * i as f64 / 6.0;
        let rim = map.new_vertex(SpherePoint::new(t.cos(), t.sin(), 0.0));
        spokes[i] = map.new_edge_pair_between(hub, rim);
    }
    for i in 0..6 {
        let j = (i + 1) % 6;
        map.new_edge_pair_relative(
            spokes[i].twin(),
            spokes[j].twin(),
            Position::After,
            Position::Before,
        );
    }
    let mut seen = HashSet::new();
    for e in map.halfedges().collect::<Vec<_>>() {
        if seen.insert(e) {
            let f = map.new_face();
            let _ = map.link_as_face_cycle(e, f);
            seen.extend(map.face_cycle(e));
        }
    }
    map
}

fuzz_target!(|data: &[u8]| {
    // Composite edits either fail or leave a valid map behind.
    let mut map = wheel();
    for &byte in data {
        let edges: Vec<_> = map.halfedges().collect();
        if edges.is_empty() {
            break;
        }
        let e = edges[(byte as usize / 3) % edges.len()];
        let _ = match byte % 3 {
            0 => map.flip_diagonal(e),
            1 => map.merge_edge_pairs_at_target(e),
            _ => map.convert_edge_to_loop(e).map(|_| ()),
        };
        assert!(map.is_valid());
    }
});
