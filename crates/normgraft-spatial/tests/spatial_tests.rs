//! Integration tests for normgraft-spatial.

use normgraft_math::Vec3;
use normgraft_spatial::CentroidIndex;

/// Deterministic scattered point cloud (no RNG — repeated runs must
/// build identical trees).
fn fixture_cloud(n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|i| {
            let t = i as f32;
            Vec3::new(
                (t * 0.731).sin() * 10.0,
                (t * 1.247).cos() * 10.0,
                (t * 0.389).sin() * (t * 0.113).cos() * 10.0,
            )
        })
        .collect()
}

fn brute_force_nearest(points: &[Vec3], query: Vec3) -> usize {
    let mut best = 0;
    let mut best_d = f32::INFINITY;
    for (i, &p) in points.iter().enumerate() {
        let d = query.distance_squared(p);
        if d < best_d {
            best_d = d;
            best = i;
        }
    }
    best
}

// ─── Build Tests ──────────────────────────────────────────────

#[test]
fn empty_index_reports_no_geometry() {
    let index = CentroidIndex::build(&[]);
    assert!(index.is_empty());
    assert!(index.nearest(Vec3::ZERO).is_err());
}

#[test]
fn single_point() {
    let index = CentroidIndex::build(&[Vec3::new(1.0, 2.0, 3.0)]);
    assert_eq!(index.len(), 1);
    assert_eq!(index.nearest(Vec3::new(50.0, -3.0, 0.2)).unwrap(), 0);
}

// ─── Query Tests ──────────────────────────────────────────────

#[test]
fn matches_brute_force_on_cloud() {
    let points = fixture_cloud(257);
    let index = CentroidIndex::build(&points);

    let queries = fixture_cloud(64)
        .into_iter()
        .map(|p| p * 0.7 + Vec3::new(0.3, -0.6, 0.9));
    for q in queries {
        assert_eq!(index.nearest(q).unwrap(), brute_force_nearest(&points, q));
    }
}

#[test]
fn exact_hit_returns_that_point() {
    let points = fixture_cloud(40);
    let index = CentroidIndex::build(&points);
    for (i, &p) in points.iter().enumerate() {
        assert_eq!(index.nearest(p).unwrap(), i);
    }
}

#[test]
fn tie_breaks_to_lowest_index() {
    // Two points equidistant from the query on the X axis,
    // plus a duplicate pair.
    let points = vec![
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(5.0, 5.0, 5.0),
        Vec3::new(5.0, 5.0, 5.0),
    ];
    let index = CentroidIndex::build(&points);
    assert_eq!(index.nearest(Vec3::ZERO).unwrap(), 0);
    assert_eq!(index.nearest(Vec3::new(5.0, 5.0, 5.0)).unwrap(), 2);
}

#[test]
fn grid_queries() {
    // Regular lattice; nearest of a jittered lattice point is itself.
    let mut points = Vec::new();
    for x in 0..5 {
        for y in 0..5 {
            for z in 0..5 {
                points.push(Vec3::new(x as f32, y as f32, z as f32));
            }
        }
    }
    let index = CentroidIndex::build(&points);
    for (i, &p) in points.iter().enumerate() {
        let jittered = p + Vec3::new(0.1, -0.12, 0.08);
        assert_eq!(index.nearest(jittered).unwrap(), i);
    }
}

#[test]
fn deterministic_across_rebuilds() {
    let points = fixture_cloud(100);
    let a = CentroidIndex::build(&points);
    let b = CentroidIndex::build(&points);
    for q in fixture_cloud(30) {
        assert_eq!(a.nearest(q).unwrap(), b.nearest(q).unwrap());
    }
}
