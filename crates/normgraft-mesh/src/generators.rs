//! Procedural surface generators for fixtures and testing.
//!
//! These generators produce deterministic, resolution-configurable
//! surfaces with correct winding order and per-loop shading normals.

use normgraft_math::Vec3;

use crate::mesh::SurfaceMesh;

/// Generates a flat rectangular quad grid in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]`
/// in Y, centered at the origin at Z=0. Faces are quads (exercising fan
/// triangulation downstream) and every loop normal is +Z.
///
/// # Arguments
/// - `cols` — Number of quads along X (vertex count = cols + 1).
/// - `rows` — Number of quads along Y (vertex count = rows + 1).
/// - `width` — Total width.
/// - `height` — Total height.
pub fn quad_grid_surface(cols: usize, rows: usize, width: f32, height: f32) -> SurfaceMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;
    let vertex_count = verts_x * verts_y;
    let loop_count = cols * rows * 4;

    let mut mesh = SurfaceMesh::with_capacity(vertex_count, loop_count);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols as f32;
            let v = j as f32 / rows as f32;
            mesh.push_vertex(-half_w + u * width, half_h - v * height, 0.0);
        }
    }

    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            mesh.push_face(&[top_left, bot_left, bot_right, top_right]);
        }
    }

    // Flat sheet facing +Z
    let normals = vec![Vec3::Z; mesh.loop_count()];
    crate::normals::assign_loop_normals(&mut mesh, &normals);

    mesh
}

/// Generates a UV sphere centered at the origin.
///
/// Body rows are quads; the two pole rows collapse to triangles so the
/// snapshot never sees zero-area fan slivers. Loop normals are the
/// exact sphere normals (position / radius).
///
/// # Arguments
/// - `radius` — Sphere radius.
/// - `stacks` — Latitude divisions (≥ 2).
/// - `slices` — Longitude divisions (≥ 3).
pub fn uv_sphere_surface(radius: f32, stacks: usize, slices: usize) -> SurfaceMesh {
    let vertex_count = (stacks + 1) * (slices + 1);
    let mut mesh = SurfaceMesh::with_capacity(vertex_count, stacks * slices * 4);

    for i in 0..=stacks {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for j in 0..=slices {
            let theta = 2.0 * std::f32::consts::PI * j as f32 / slices as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let x = sin_phi * cos_theta;
            let y = cos_phi;
            let z = sin_phi * sin_theta;
            mesh.push_vertex(radius * x, radius * y, radius * z);
        }
    }

    let ring = (slices + 1) as u32;
    for i in 0..stacks {
        for j in 0..slices {
            let a = i as u32 * ring + j as u32;
            let b = a + ring;
            let c = b + 1;
            let d = a + 1;

            if i == 0 {
                mesh.push_face(&[a, b, c]);
            } else if i == stacks - 1 {
                mesh.push_face(&[a, b, d]);
            } else {
                mesh.push_face(&[a, b, c, d]);
            }
        }
    }

    let normals: Vec<Vec3> = mesh
        .loop_vertices
        .iter()
        .map(|&v| mesh.position(v as usize).normalize_or_zero())
        .collect();
    crate::normals::assign_loop_normals(&mut mesh, &normals);

    mesh
}
