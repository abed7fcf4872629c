//! Transfer configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a transfer run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferConfig {
    /// Renormalize each output normal after the inverse-transpose step.
    ///
    /// Off by default: the output keeps whatever length the transform
    /// produces, which under non-uniform target scale can be non-unit.
    /// Turn this on to get unit output normals regardless.
    pub renormalize: bool,

    /// Distribute the per-loop sampling across a rayon thread pool.
    /// Output is identical to the sequential path.
    pub parallel: bool,
}

impl TransferConfig {
    /// Default behavior: no renormalization, sequential sampling.
    pub fn faithful() -> Self {
        Self::default()
    }

    /// Renormalizes output normals after the local-space transform.
    pub fn renormalized() -> Self {
        Self {
            renormalize: true,
            ..Default::default()
        }
    }

    /// Samples target loops in parallel.
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Default::default()
        }
    }
}
