//! Polygon surface mesh with per-loop normals, SoA layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! Faces are arbitrary polygons (triangles included) described by a flat
//! corner buffer plus per-face offsets. Each corner is a "loop": a
//! (face, vertex) incidence that carries its own shading normal, so a
//! shared vertex can shade differently on each adjacent face.

use normgraft_math::Vec3;
use serde::{Deserialize, Serialize};
use normgraft_types::{NormgraftError, NormgraftResult};

/// A polygon surface mesh stored in Structure-of-Arrays layout.
///
/// Position data lives in separate per-channel contiguous arrays.
/// `loop_vertices` maps each loop to its vertex; `face_offsets` slices
/// the loop buffer into faces (`face_offsets.len() == face_count + 1`,
/// first entry 0, strictly increasing by at least 3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceMesh {
    // --- Vertex data (SoA) ---
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    // --- Loop data ---
    /// Vertex index of each loop, flat across all faces.
    pub loop_vertices: Vec<u32>,
    /// Offsets into `loop_vertices`, one per face plus a trailing end.
    pub face_offsets: Vec<u32>,

    /// X components of per-loop shading normals.
    pub loop_normal_x: Vec<f32>,
    /// Y components of per-loop shading normals.
    pub loop_normal_y: Vec<f32>,
    /// Z components of per-loop shading normals.
    pub loop_normal_z: Vec<f32>,
}

impl SurfaceMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            pos_x: Vec::new(),
            pos_y: Vec::new(),
            pos_z: Vec::new(),
            loop_vertices: Vec::new(),
            face_offsets: vec![0],
            loop_normal_x: Vec::new(),
            loop_normal_y: Vec::new(),
            loop_normal_z: Vec::new(),
        }
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, loop_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            loop_vertices: Vec::with_capacity(loop_capacity),
            face_offsets: vec![0],
            loop_normal_x: Vec::with_capacity(loop_capacity),
            loop_normal_y: Vec::with_capacity(loop_capacity),
            loop_normal_z: Vec::with_capacity(loop_capacity),
        }
    }

    /// Builds a triangle-only mesh from interleaved buffers.
    ///
    /// `positions` is `[x, y, z, ...]` per vertex, `indices` holds three
    /// vertex indices per triangle, and `loop_normals` is `[x, y, z, ...]`
    /// with one normal per index entry (per corner, not per vertex).
    pub fn from_triangle_list(
        positions: &[f32],
        indices: &[u32],
        loop_normals: &[f32],
    ) -> NormgraftResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(NormgraftError::InvalidMesh(
                "Position buffer length is not divisible by 3".into(),
            ));
        }
        if indices.len() % 3 != 0 {
            return Err(NormgraftError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }
        if loop_normals.len() != indices.len() * 3 {
            return Err(NormgraftError::InvalidMesh(format!(
                "Loop normal buffer holds {} components, expected {}",
                loop_normals.len(),
                indices.len() * 3
            )));
        }

        let vertex_count = positions.len() / 3;
        let mut mesh = Self::with_capacity(vertex_count, indices.len());

        for v in 0..vertex_count {
            mesh.pos_x.push(positions[v * 3]);
            mesh.pos_y.push(positions[v * 3 + 1]);
            mesh.pos_z.push(positions[v * 3 + 2]);
        }

        for tri in indices.chunks_exact(3) {
            mesh.push_face(tri);
        }
        for n in loop_normals.chunks_exact(3) {
            mesh.loop_normal_x.push(n[0]);
            mesh.loop_normal_y.push(n[1]);
            mesh.loop_normal_z.push(n[2]);
        }

        mesh.validate()?;
        Ok(mesh)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.face_offsets.len() - 1
    }

    /// Returns the number of loops (face corners).
    #[inline]
    pub fn loop_count(&self) -> usize {
        self.loop_vertices.len()
    }

    /// Returns the position of vertex `i` as a `Vec3`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the shading normal of loop `l` as a `Vec3`.
    #[inline]
    pub fn loop_normal(&self, l: usize) -> Vec3 {
        Vec3::new(
            self.loop_normal_x[l],
            self.loop_normal_y[l],
            self.loop_normal_z[l],
        )
    }

    /// Returns the loop index range of face `f`.
    #[inline]
    pub fn face_range(&self, f: usize) -> std::ops::Range<usize> {
        self.face_offsets[f] as usize..self.face_offsets[f + 1] as usize
    }

    /// Returns the vertex indices of face `f`.
    #[inline]
    pub fn face_corners(&self, f: usize) -> &[u32] {
        &self.loop_vertices[self.face_range(f)]
    }

    /// Appends a vertex and returns its index.
    pub fn push_vertex(&mut self, x: f32, y: f32, z: f32) -> u32 {
        self.pos_x.push(x);
        self.pos_y.push(y);
        self.pos_z.push(z);
        (self.pos_x.len() - 1) as u32
    }

    /// Appends a face given its vertex indices, in winding order.
    /// Loop normals for the new corners must be pushed separately
    /// (or assigned afterwards via `normals::assign_loop_normals`).
    pub fn push_face(&mut self, corners: &[u32]) {
        self.loop_vertices.extend_from_slice(corners);
        self.face_offsets.push(self.loop_vertices.len() as u32);
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All SoA arrays have consistent lengths
    /// - Face offsets start at 0, end at the loop count, and grow by ≥ 3
    /// - Loop vertex indices are within bounds
    pub fn validate(&self) -> NormgraftResult<()> {
        let n = self.pos_x.len();
        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(NormgraftError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }

        let loops = self.loop_vertices.len();
        if self.loop_normal_x.len() != loops
            || self.loop_normal_y.len() != loops
            || self.loop_normal_z.len() != loops
        {
            return Err(NormgraftError::InvalidMesh(
                "Loop normal arrays do not match the loop count".into(),
            ));
        }

        if self.face_offsets.first() != Some(&0) {
            return Err(NormgraftError::InvalidMesh(
                "Face offsets must start at 0".into(),
            ));
        }
        if self.face_offsets.last() != Some(&(loops as u32)) {
            return Err(NormgraftError::InvalidMesh(
                "Face offsets must end at the loop count".into(),
            ));
        }
        for f in 0..self.face_count() {
            let start = self.face_offsets[f];
            let end = self.face_offsets[f + 1];
            if end < start + 3 {
                return Err(NormgraftError::InvalidMesh(format!(
                    "Face {f} has fewer than 3 corners"
                )));
            }
        }

        for (l, &v) in self.loop_vertices.iter().enumerate() {
            if v as usize >= n {
                return Err(NormgraftError::InvalidMesh(format!(
                    "Loop {l} references vertex {v}, but only {n} vertices exist"
                )));
            }
        }

        Ok(())
    }
}

impl Default for SurfaceMesh {
    fn default() -> Self {
        Self::new()
    }
}
