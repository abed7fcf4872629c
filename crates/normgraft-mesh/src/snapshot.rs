//! Source surface extraction.
//!
//! A transfer call samples the source surface through a
//! [`SourceSurfaceSnapshot`]: every face fan-triangulated, per-corner
//! shading normals carried along, and one centroid per triangle for the
//! nearest-neighbor index. Snapshots are built fresh on every call and
//! owned by it — the source may change between calls, so nothing here
//! is cached.

use normgraft_math::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use normgraft_types::NormgraftResult;

use crate::mesh::SurfaceMesh;

/// Triangles, corner normal sets, and centroids of an evaluated source
/// surface, index-aligned (`normal_sets[i]` belongs to `triangles[i]`,
/// `centroids[i]` is the mean of its three corners).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSurfaceSnapshot {
    /// Triangle corner positions, fixed winding order.
    pub triangles: Vec<[Vec3; 3]>,
    /// Shading normal at each triangle corner, index-aligned with
    /// `triangles`.
    pub normal_sets: Vec<[Vec3; 3]>,
    /// Arithmetic mean of each triangle's three corners.
    pub centroids: Vec<Vec3>,
}

impl SourceSurfaceSnapshot {
    /// Extracts a snapshot from a surface mesh, positions taken as given.
    ///
    /// This matches hosts that hand over already world-space (or
    /// co-spaced) evaluated geometry. Polygon faces are triangulated by
    /// fan around their first corner.
    pub fn from_mesh(mesh: &SurfaceMesh) -> NormgraftResult<Self> {
        Self::extract(mesh, None)
    }

    /// Extracts a snapshot with the source object's world transform baked
    /// into positions (point transform) and normals (inverse-transpose,
    /// renormalized).
    pub fn from_mesh_with_transform(
        mesh: &SurfaceMesh,
        transform: Mat4,
    ) -> NormgraftResult<Self> {
        Self::extract(mesh, Some(transform))
    }

    fn extract(mesh: &SurfaceMesh, transform: Option<Mat4>) -> NormgraftResult<Self> {
        mesh.validate()?;

        let normal_matrix = transform.map(|m| m.inverse().transpose());

        // Fan triangulation: face with n corners yields n - 2 triangles.
        let tri_capacity: usize = (0..mesh.face_count())
            .map(|f| mesh.face_range(f).len() - 2)
            .sum();

        let mut triangles = Vec::with_capacity(tri_capacity);
        let mut normal_sets = Vec::with_capacity(tri_capacity);
        let mut centroids = Vec::with_capacity(tri_capacity);

        for f in 0..mesh.face_count() {
            let range = mesh.face_range(f);
            let base = range.start;
            for k in 1..range.len() - 1 {
                let loop_indices = [base, base + k, base + k + 1];

                let mut corners = [Vec3::ZERO; 3];
                let mut normals = [Vec3::ZERO; 3];
                for (slot, &l) in loop_indices.iter().enumerate() {
                    let v = mesh.loop_vertices[l] as usize;
                    let mut p = mesh.position(v);
                    let mut n = mesh.loop_normal(l);
                    if let Some(m) = transform {
                        p = m.transform_point3(p);
                    }
                    if let Some(nm) = normal_matrix {
                        n = nm.transform_vector3(n).normalize_or_zero();
                    }
                    corners[slot] = p;
                    normals[slot] = n;
                }

                centroids.push((corners[0] + corners[1] + corners[2]) / 3.0);
                triangles.push(corners);
                normal_sets.push(normals);
            }
        }

        Ok(Self {
            triangles,
            normal_sets,
            centroids,
        })
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` when the snapshot holds zero triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}
