//! Benchmarks for sphere map editing and validation.

use std::collections::HashSet;
use std::f64::consts::TAU;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rhizome_resin_spheremap::{HalfEdgeId, Position, SphereMap, SpherePoint};

/// Creates one face per face cycle.
fn link_faces(map: &mut SphereMap) {
    let mut seen = HashSet::new();
    for e in map.halfedges().collect::<Vec<_>>() {
        if seen.insert(e) {
            let f = map.new_face();
            map.link_as_face_cycle(e, f).unwrap();
            seen.extend(map.face_cycle(e));
        }
    }
}

/// Wheel with `n` rim vertices: `n` triangles around the hub plus the outer
/// `n`-gon. Returns the map and the spokes leaving the hub.
fn wheel(n: usize) -> (SphereMap, Vec<HalfEdgeId>) {
    let mut map = SphereMap::new();
    let hub = map.new_vertex(SpherePoint::new(0.0, 0.0, 1.0));
    let rim: Vec<_> = (0..n)
        .map(|i| {
            let t = TAU * i as f64 / n as f64;
            map.new_vertex(SpherePoint::new(t.cos(), t.sin(), 0.0))
        })
        .collect();

    let mut spokes = vec![HalfEdgeId::null(); n];
    for i in (0..n).rev() {
        spokes[i] = map.new_edge_pair_between(hub, rim[i]);
    }
    for i in 0..n {
        let j = (i + 1) % n;
        map.new_edge_pair_relative(
            spokes[i].twin(),
            spokes[j].twin(),
            Position::After,
            Position::Before,
        );
    }
    link_faces(&mut map);
    (map, spokes)
}

/// Path through `n` vertices. Returns the map and its first half-edge.
fn path(n: usize) -> (SphereMap, HalfEdgeId) {
    let mut map = SphereMap::new();
    let vertices: Vec<_> = (0..n)
        .map(|i| map.new_vertex(SpherePoint::new(1.0, i as f64 / n as f64, 0.0)))
        .collect();
    let first = map.new_edge_pair_between(vertices[0], vertices[1]);
    for pair in vertices[1..].windows(2) {
        map.new_edge_pair_between(pair[0], pair[1]);
    }
    link_faces(&mut map);
    (map, first)
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("wheel_64", |b| b.iter(|| wheel(black_box(64))));

    c.bench_function("wheel_1024", |b| b.iter(|| wheel(black_box(1024))));
}

fn bench_validate(c: &mut Criterion) {
    let (small, _) = wheel(64);
    c.bench_function("validate_wheel_64", |b| {
        b.iter(|| black_box(&small).is_valid())
    });

    let (large, _) = wheel(1024);
    c.bench_function("validate_wheel_1024", |b| {
        b.iter(|| black_box(&large).is_valid())
    });
}

fn bench_composite(c: &mut Criterion) {
    c.bench_function("flip_storm_256", |b| {
        let (mut map, spokes) = wheel(256);
        b.iter(|| {
            for &e in &spokes {
                map.flip_diagonal(black_box(e)).unwrap();
                map.flip_diagonal(e).unwrap();
            }
        })
    });

    c.bench_function("merge_path_256", |b| {
        let (template, first) = path(256);
        b.iter(|| {
            let mut map = template.clone();
            while map.number_of_edges() > 1 {
                map.merge_edge_pairs_at_target(first).unwrap();
            }
            black_box(map)
        })
    });
}

criterion_group!(benches, bench_build, bench_validate, bench_composite);
criterion_main!(benches);
