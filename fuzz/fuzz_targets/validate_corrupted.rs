#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use rhizome_resin_spheremap::{SphereMap, SpherePoint, ValidationConfig};

fuzz_target!(|data: &[u8]| {
    // Validation must report, never panic, however the links are rewired.
    let mut map: SphereMap = SphereMap::new();
    let v: Vec<_> = (0..4)
        .map(|i| map.new_vertex(SpherePoint::new(1.0, i as f64, 0.5)))
        .collect();
    for (a, b) in [(0, 1), (0, 2), (1, 3), (0, 3), (1, 2), (2, 3)] {
        map.new_edge_pair_between(v[a], v[b]);
    }
    let halfedges: Vec<_> = map.halfedges().collect();
    let mut seen = HashSet::new();
    for &e in &halfedges {
        if seen.insert(e) {
            let f = map.new_face();
            let _ = map.link_as_face_cycle(e, f);
            seen.extend(map.face_cycle(e));
        }
    }
    let faces: Vec<_> = map.faces().collect();

    for chunk in data.chunks_exact(3) {
        let e = halfedges[chunk[1] as usize % halfedges.len()];
        let h = halfedges[chunk[2] as usize % halfedges.len()];
        match chunk[0] % 5 {
            0 => map.set_next(e, h),
            1 => map.set_prev(e, h),
            2 => map.set_source(e, v[chunk[2] as usize % v.len()]),
            3 => map.set_face(e, faces[chunk[2] as usize % faces.len()]),
            _ => map.set_first_out_edge(v[chunk[1] as usize % v.len()], Some(h)),
        }
    }

    let config = ValidationConfig::default().with_log_errors(false);
    let _ = map.validate_with(&config);
});
