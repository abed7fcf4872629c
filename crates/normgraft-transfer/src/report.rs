//! Per-call transfer report.
//!
//! The engine absorbs recoverable conditions instead of failing the
//! call; the report tells the caller what happened to each loop in
//! aggregate.

use serde::{Deserialize, Serialize};

/// Counters describing one transfer call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferReport {
    /// Number of target loops processed (always equals the output length).
    pub loop_count: usize,
    /// Loops that received an interpolated source normal.
    pub transferred: usize,
    /// Loops that fell back to their native normal, for any reason.
    pub fallback_count: usize,
    /// Fallbacks caused by a degenerate (near-zero-area) source triangle.
    pub degenerate_triangles: usize,
    /// Fallbacks caused by corner normals cancelling to zero.
    pub degenerate_normals: usize,
    /// The source snapshot held no triangles; every loop fell back.
    pub no_source_geometry: bool,
}

impl TransferReport {
    /// Creates a report for `loop_count` loops with zeroed counters.
    pub fn new(loop_count: usize) -> Self {
        Self {
            loop_count,
            ..Default::default()
        }
    }

    /// Returns `true` when every loop received a transferred normal.
    pub fn all_transferred(&self) -> bool {
        self.transferred == self.loop_count
    }
}
