//! Loop normal computation from surface geometry.
//!
//! Computes smooth per-loop shading normals by accumulating
//! area-weighted face normals at each vertex. Collaborators whose host
//! does not hand over shading normals can use this to produce both the
//! source corner normals and the target's fallback array.

use normgraft_math::Vec3;

use crate::mesh::SurfaceMesh;

/// Computes smooth shading normals, one per loop.
///
/// Each face's normal (Newell's method, magnitude proportional to face
/// area) is accumulated at every vertex it touches, then normalized.
/// Every loop of a vertex receives that vertex's smooth normal, so the
/// result shades without hard edges.
pub fn loop_normals(mesh: &SurfaceMesh) -> Vec<Vec3> {
    let mut vertex_normals = vec![Vec3::ZERO; mesh.vertex_count()];

    for f in 0..mesh.face_count() {
        let corners = mesh.face_corners(f);

        // Newell's method handles non-planar polygons gracefully.
        let mut face_normal = Vec3::ZERO;
        for i in 0..corners.len() {
            let cur = mesh.position(corners[i] as usize);
            let next = mesh.position(corners[(i + 1) % corners.len()] as usize);
            face_normal.x += (cur.y - next.y) * (cur.z + next.z);
            face_normal.y += (cur.z - next.z) * (cur.x + next.x);
            face_normal.z += (cur.x - next.x) * (cur.y + next.y);
        }

        for &v in corners {
            vertex_normals[v as usize] += face_normal;
        }
    }

    for n in &mut vertex_normals {
        let len = n.length();
        if len > 1e-10 {
            *n /= len;
        }
    }

    mesh.loop_vertices
        .iter()
        .map(|&v| vertex_normals[v as usize])
        .collect()
}

/// Writes per-loop normals into the mesh's SoA normal channels.
///
/// `normals` must hold exactly one entry per loop.
pub fn assign_loop_normals(mesh: &mut SurfaceMesh, normals: &[Vec3]) {
    debug_assert_eq!(normals.len(), mesh.loop_count());
    mesh.loop_normal_x = normals.iter().map(|n| n.x).collect();
    mesh.loop_normal_y = normals.iter().map(|n| n.y).collect();
    mesh.loop_normal_z = normals.iter().map(|n| n.z).collect();
}
