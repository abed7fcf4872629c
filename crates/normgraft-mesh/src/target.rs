//! Target surface view.
//!
//! The engine reads the target through this flattened, read-only view:
//! per-loop vertex references, local-space vertex positions, the native
//! per-loop normals used as fallbacks, and the object's world transform.
//! The engine never touches target topology.

use normgraft_math::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use normgraft_types::{NormgraftError, NormgraftResult};

use crate::mesh::SurfaceMesh;

/// The target mesh's geometry as seen by the transfer engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSurfaceView {
    /// Vertex index of each loop, in the target's native loop order.
    pub loop_vertices: Vec<u32>,
    /// Vertex positions in the target's local space.
    pub positions: Vec<Vec3>,
    /// The target's own shading normal per loop (local space).
    /// Used verbatim as the fallback for loops the transfer cannot serve.
    pub native_normals: Vec<Vec3>,
    /// Local-to-world transform of the target object.
    pub transform: Mat4,
}

impl TargetSurfaceView {
    /// Builds a view from a surface mesh and its world transform.
    /// The mesh's own loop normals become the fallback normals.
    pub fn from_mesh(mesh: &SurfaceMesh, transform: Mat4) -> NormgraftResult<Self> {
        mesh.validate()?;

        let positions = (0..mesh.vertex_count()).map(|v| mesh.position(v)).collect();
        let native_normals = (0..mesh.loop_count()).map(|l| mesh.loop_normal(l)).collect();

        Ok(Self {
            loop_vertices: mesh.loop_vertices.clone(),
            positions,
            native_normals,
            transform,
        })
    }

    /// Returns the number of loops.
    #[inline]
    pub fn loop_count(&self) -> usize {
        self.loop_vertices.len()
    }

    /// Returns the world-space position of the vertex under loop `l`.
    #[inline]
    pub fn world_position(&self, l: usize) -> Vec3 {
        let v = self.loop_vertices[l] as usize;
        self.transform.transform_point3(self.positions[v])
    }

    /// Checks structural consistency of the view.
    pub fn validate(&self) -> NormgraftResult<()> {
        if self.native_normals.len() != self.loop_vertices.len() {
            return Err(NormgraftError::InvalidInput(format!(
                "Target has {} loops but {} native normals",
                self.loop_vertices.len(),
                self.native_normals.len()
            )));
        }
        let n = self.positions.len();
        for (l, &v) in self.loop_vertices.iter().enumerate() {
            if v as usize >= n {
                return Err(NormgraftError::InvalidInput(format!(
                    "Target loop {l} references vertex {v}, but only {n} vertices exist"
                )));
            }
        }
        Ok(())
    }
}
