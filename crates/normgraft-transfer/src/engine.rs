//! The transfer engine.
//!
//! For every target loop: world position via the target transform →
//! nearest source centroid → closest point on that triangle →
//! barycentric blend of its corner normals → inverse-transpose back
//! into target local space. Loops the source cannot serve keep their
//! native normal; the output array is always complete.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use normgraft_math::triangle::{
    barycentric_coords, closest_point_on_triangle, interpolate_normal,
};
use normgraft_math::{Mat4, Vec3};
use normgraft_mesh::{SourceSurfaceSnapshot, TargetSurfaceView};
use normgraft_spatial::CentroidIndex;
use normgraft_types::{NormgraftError, NormgraftResult, ObjectId};

use crate::config::TransferConfig;
use crate::report::TransferReport;

/// Result of one transfer call: the per-loop normal array (target local
/// space, native loop order) and the counters describing how it was
/// produced.
#[derive(Debug, Clone)]
pub struct TransferOutput {
    /// One normal per target loop.
    pub normals: Vec<Vec3>,
    /// What happened during the call.
    pub report: TransferReport,
}

/// Rejects a selection where source and target are the same host object.
///
/// The engine's inputs are distinct snapshot/view types, so it cannot see
/// object identity itself; hosts that track ids call this before building
/// either.
pub fn validate_selection(source: ObjectId, target: ObjectId) -> NormgraftResult<()> {
    if source == target {
        return Err(NormgraftError::InvalidInput(
            "source and target must be different objects".into(),
        ));
    }
    Ok(())
}

/// Orchestrates the end-to-end transfer operation.
#[derive(Debug)]
pub struct TransferEngine {
    config: TransferConfig,
}

impl TransferEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: TransferConfig) -> Self {
        Self { config }
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &TransferConfig {
        &self.config
    }

    /// Transfers shading normals from `snapshot` onto `target`.
    ///
    /// Fails only on structurally invalid target input. An empty
    /// snapshot succeeds with the target's native normals and a
    /// recorded `no_source_geometry`; per-loop degeneracies fall back
    /// to the native normal and are counted in the report.
    ///
    /// The snapshot and the centroid index built here live exactly as
    /// long as this call — the source may change between calls, so
    /// nothing is reused.
    pub fn transfer(
        &self,
        snapshot: &SourceSurfaceSnapshot,
        target: &TargetSurfaceView,
    ) -> NormgraftResult<TransferOutput> {
        target.validate()?;
        let loop_count = target.loop_count();

        if snapshot.is_empty() {
            warn!(
                loops = loop_count,
                "source surface has no triangles; emitting native normals"
            );
            let mut report = TransferReport::new(loop_count);
            report.fallback_count = loop_count;
            report.no_source_geometry = true;
            return Ok(TransferOutput {
                normals: target.native_normals.clone(),
                report,
            });
        }

        let started = Instant::now();
        let index = CentroidIndex::build(&snapshot.centroids);
        debug!(
            triangles = snapshot.len(),
            loops = loop_count,
            "centroid index built"
        );

        let normal_matrix = target.transform.inverse().transpose();
        let renormalize = self.config.renormalize;

        let resolve = |l: usize| -> (Vec3, Option<NormgraftError>) {
            match sample_loop(&index, snapshot, target, normal_matrix, renormalize, l) {
                Ok(n) => (n, None),
                Err(cause) => (target.native_normals[l], Some(cause)),
            }
        };

        let samples: Vec<(Vec3, Option<NormgraftError>)> = if self.config.parallel {
            (0..loop_count).into_par_iter().map(resolve).collect()
        } else {
            (0..loop_count).map(resolve).collect()
        };

        let mut report = TransferReport::new(loop_count);
        let mut normals = Vec::with_capacity(loop_count);
        for (normal, cause) in samples {
            normals.push(normal);
            match cause {
                None => report.transferred += 1,
                Some(cause) => {
                    report.fallback_count += 1;
                    match cause {
                        NormgraftError::DegenerateTriangle(_) => report.degenerate_triangles += 1,
                        NormgraftError::DegenerateNormal(_) => report.degenerate_normals += 1,
                        _ => {}
                    }
                }
            }
        }

        info!(
            loops = loop_count,
            transferred = report.transferred,
            fallbacks = report.fallback_count,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "normal transfer complete"
        );

        Ok(TransferOutput { normals, report })
    }
}

impl Default for TransferEngine {
    fn default() -> Self {
        Self::new(TransferConfig::default())
    }
}

/// Samples one target loop against the source.
///
/// The interpolated world-space normal is unit length; the
/// inverse-transpose into target local space may change that under
/// non-uniform scale, and only renormalizes when asked to (see
/// `TransferConfig::renormalize`).
fn sample_loop(
    index: &CentroidIndex,
    snapshot: &SourceSurfaceSnapshot,
    target: &TargetSurfaceView,
    normal_matrix: Mat4,
    renormalize: bool,
    l: usize,
) -> NormgraftResult<Vec3> {
    let world_pos = target.world_position(l);

    // The caller checks for an empty snapshot before sampling begins.
    let ti = index.nearest(world_pos)?;

    let tri = snapshot.triangles[ti];
    let projected = closest_point_on_triangle(world_pos, tri);
    let (u, v, w) =
        barycentric_coords(projected, tri).ok_or(NormgraftError::DegenerateTriangle(ti))?;
    let world_normal = interpolate_normal(snapshot.normal_sets[ti], u, v, w)
        .ok_or(NormgraftError::DegenerateNormal(ti))?;

    let mut local = normal_matrix.transform_vector3(world_normal);
    if renormalize {
        local = local.normalize_or_zero();
    }
    Ok(local)
}
