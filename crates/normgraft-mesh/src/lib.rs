//! # normgraft-mesh
//!
//! Surface representation for the normgraft engine.
//!
//! ## Key Types
//!
//! - [`SurfaceMesh`] — Polygon mesh with per-loop shading normals,
//!   stored in SoA (Structure-of-Arrays) buffers.
//! - [`SourceSurfaceSnapshot`] — Triangles, corner normals, and centroids
//!   extracted from a source surface for one transfer call.
//! - [`TargetSurfaceView`] — The target geometry as the engine sees it:
//!   loops, vertex positions, native normals, world transform.
//! - Procedural generators for fixture meshes (quad grids, UV spheres).

pub mod generators;
pub mod mesh;
pub mod normals;
pub mod snapshot;
pub mod target;

pub use mesh::SurfaceMesh;
pub use snapshot::SourceSurfaceSnapshot;
pub use target::TargetSurfaceView;
