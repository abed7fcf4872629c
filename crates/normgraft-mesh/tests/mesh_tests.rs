//! Integration tests for normgraft-mesh.

use normgraft_math::{Mat4, Vec3};
use normgraft_mesh::generators::{quad_grid_surface, uv_sphere_surface};
use normgraft_mesh::normals::{assign_loop_normals, loop_normals};
use normgraft_mesh::{SourceSurfaceSnapshot, SurfaceMesh, TargetSurfaceView};

fn make_single_triangle() -> SurfaceMesh {
    SurfaceMesh::from_triangle_list(
        &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        &[0, 1, 2],
        &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
    )
    .unwrap()
}

// ─── SurfaceMesh Tests ────────────────────────────────────────

#[test]
fn basic_counts() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.face_count(), 1);
    assert_eq!(mesh.loop_count(), 3);
}

#[test]
fn position_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.position(1), Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn validate_ok() {
    let mesh = make_single_triangle();
    assert!(mesh.validate().is_ok());
}

#[test]
fn validate_catches_inconsistent_lengths() {
    let mut mesh = make_single_triangle();
    mesh.pos_y.push(99.0);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_oob_loop_vertex() {
    let mut mesh = make_single_triangle();
    mesh.loop_vertices[2] = 99;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_short_face() {
    let mut mesh = make_single_triangle();
    mesh.face_offsets = vec![0, 2, 3];
    assert!(mesh.validate().is_err());
}

#[test]
fn empty_mesh_is_valid() {
    let mesh = SurfaceMesh::new();
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.face_count(), 0);
}

#[test]
fn from_triangle_list_rejects_mismatched_normals() {
    let result = SurfaceMesh::from_triangle_list(
        &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        &[0, 1, 2],
        &[0.0, 0.0, 1.0],
    );
    assert!(result.is_err());
}

#[test]
fn mesh_serde_round_trip() {
    let mesh = make_single_triangle();
    let json = serde_json::to_string(&mesh).unwrap();
    let recovered: SurfaceMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.loop_vertices, mesh.loop_vertices);
    assert_eq!(recovered.pos_x, mesh.pos_x);
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn quad_grid_2x2() {
    let mesh = quad_grid_surface(2, 2, 1.0, 1.0);
    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.face_count(), 4);
    assert_eq!(mesh.loop_count(), 16);
    assert!(mesh.validate().is_ok());
}

#[test]
fn quad_grid_normals_face_up() {
    let mesh = quad_grid_surface(1, 1, 2.0, 2.0);
    for l in 0..mesh.loop_count() {
        assert_eq!(mesh.loop_normal(l), Vec3::Z);
    }
}

#[test]
fn uv_sphere_valid() {
    let mesh = uv_sphere_surface(1.0, 4, 6);
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.face_count(), 4 * 6);
}

#[test]
fn uv_sphere_loop_normals_point_outward() {
    let mesh = uv_sphere_surface(2.0, 4, 6);
    for (l, &v) in mesh.loop_vertices.iter().enumerate() {
        let expected = mesh.position(v as usize) / 2.0;
        assert!((mesh.loop_normal(l) - expected).length() < 1e-5);
    }
}

// ─── Snapshot Tests ───────────────────────────────────────────

#[test]
fn snapshot_fan_triangulates_quads() {
    // 1 quad face → 2 triangles
    let mesh = quad_grid_surface(1, 1, 1.0, 1.0);
    let snap = SourceSurfaceSnapshot::from_mesh(&mesh).unwrap();
    assert_eq!(snap.len(), 2);
    assert_eq!(snap.normal_sets.len(), 2);
    assert_eq!(snap.centroids.len(), 2);
}

#[test]
fn snapshot_fan_triangulates_pentagon() {
    let mut mesh = SurfaceMesh::new();
    for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.5, 1.0), (0.5, 1.8), (-0.5, 1.0)] {
        mesh.push_vertex(x, y, 0.0);
    }
    mesh.push_face(&[0, 1, 2, 3, 4]);
    let normals = vec![Vec3::Z; 5];
    assign_loop_normals(&mut mesh, &normals);

    let snap = SourceSurfaceSnapshot::from_mesh(&mesh).unwrap();
    assert_eq!(snap.len(), 3);
}

#[test]
fn snapshot_centroid_is_vertex_mean() {
    let mesh = make_single_triangle();
    let snap = SourceSurfaceSnapshot::from_mesh(&mesh).unwrap();
    let expected = Vec3::new(1.0 / 3.0, 1.0 / 3.0, 0.0);
    assert!((snap.centroids[0] - expected).length() < 1e-6);
}

#[test]
fn snapshot_of_empty_mesh_is_empty() {
    let snap = SourceSurfaceSnapshot::from_mesh(&SurfaceMesh::new()).unwrap();
    assert!(snap.is_empty());
    assert_eq!(snap.len(), 0);
}

#[test]
fn snapshot_bakes_transform() {
    let mesh = make_single_triangle();
    let transform = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));
    let snap = SourceSurfaceSnapshot::from_mesh_with_transform(&mesh, transform).unwrap();
    assert!((snap.triangles[0][1] - Vec3::new(11.0, 0.0, 0.0)).length() < 1e-5);
    // Translation leaves normals untouched
    assert!((snap.normal_sets[0][0] - Vec3::Z).length() < 1e-5);
}

#[test]
fn snapshot_transform_renormalizes_normals() {
    // Triangle in the YZ plane shading +X; scaling X skews the normal,
    // so the snapshot must renormalize after the inverse-transpose.
    let mesh = SurfaceMesh::from_triangle_list(
        &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        &[0, 1, 2],
        &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    )
    .unwrap();
    let transform = Mat4::from_scale(Vec3::new(3.0, 1.0, 1.0));
    let snap = SourceSurfaceSnapshot::from_mesh_with_transform(&mesh, transform).unwrap();
    for set in &snap.normal_sets {
        for n in set {
            assert!((*n - Vec3::X).length() < 1e-5);
        }
    }
}

// ─── Target View Tests ────────────────────────────────────────

#[test]
fn target_view_world_position() {
    let mesh = make_single_triangle();
    let transform = Mat4::from_translation(Vec3::new(0.0, 5.0, 0.0));
    let view = TargetSurfaceView::from_mesh(&mesh, transform).unwrap();
    assert_eq!(view.loop_count(), 3);
    assert!((view.world_position(1) - Vec3::new(1.0, 5.0, 0.0)).length() < 1e-5);
}

#[test]
fn target_view_validate_catches_oob() {
    let mesh = make_single_triangle();
    let mut view = TargetSurfaceView::from_mesh(&mesh, Mat4::IDENTITY).unwrap();
    view.loop_vertices[0] = 42;
    assert!(view.validate().is_err());
}

#[test]
fn target_view_validate_catches_normal_mismatch() {
    let mesh = make_single_triangle();
    let mut view = TargetSurfaceView::from_mesh(&mesh, Mat4::IDENTITY).unwrap();
    view.native_normals.pop();
    assert!(view.validate().is_err());
}

// ─── Loop Normal Tests ────────────────────────────────────────

#[test]
fn loop_normals_flat_grid_face_up() {
    let mesh = quad_grid_surface(2, 2, 1.0, 1.0);
    let normals = loop_normals(&mesh);
    assert_eq!(normals.len(), mesh.loop_count());
    for n in normals {
        assert!((n - Vec3::Z).length() < 1e-5);
    }
}

#[test]
fn loop_normals_shared_vertex_is_smooth() {
    // Two faces meeting at a ridge: the shared vertices' normals
    // average the two face directions.
    let mut mesh = SurfaceMesh::new();
    mesh.push_vertex(0.0, 0.0, 0.0);
    mesh.push_vertex(1.0, 0.0, 0.0);
    mesh.push_vertex(1.0, 1.0, 1.0);
    mesh.push_vertex(0.0, 1.0, 1.0);
    mesh.push_vertex(1.0, 2.0, 0.0);
    mesh.push_vertex(0.0, 2.0, 0.0);
    mesh.push_face(&[0, 1, 2, 3]);
    mesh.push_face(&[3, 2, 4, 5]);
    let zeros = vec![Vec3::ZERO; mesh.loop_count()];
    assign_loop_normals(&mut mesh, &zeros);

    let normals = loop_normals(&mesh);
    // Loops of vertex 2 appear on both faces and carry the same
    // smoothed normal.
    let on_face_a = normals[2];
    let on_face_b = normals[5];
    assert!((on_face_a - on_face_b).length() < 1e-6);
    assert!((on_face_a.length() - 1.0).abs() < 1e-5);
}
