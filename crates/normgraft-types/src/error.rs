//! Error types for the normgraft engine.
//!
//! All crates return `NormgraftResult<T>` from fallible operations.
//! Only `InvalidInput`/`InvalidMesh` surface from a transfer call;
//! the remaining variants are absorbed per-loop with a fallback and
//! recorded in the transfer report.

use thiserror::Error;

/// Unified error type for the normgraft engine.
#[derive(Debug, Error)]
pub enum NormgraftError {
    /// Caller handed over a bad object selection (missing, identical,
    /// or structurally inconsistent input). Fatal, no output produced.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Surface mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// The source snapshot holds zero triangles — there is nothing
    /// to sample from.
    #[error("Source surface has no triangles to sample")]
    NoSourceGeometry,

    /// A source triangle's area is below the degenerate threshold,
    /// so barycentric weights are undefined for it.
    #[error("Source triangle {0} is degenerate (area below threshold)")]
    DegenerateTriangle(usize),

    /// Corner normals cancelled to a zero vector during interpolation.
    #[error("Interpolated normal vanished on source triangle {0}")]
    DegenerateNormal(usize),
}

/// Convenience alias for `Result<T, NormgraftError>`.
pub type NormgraftResult<T> = Result<T, NormgraftError>;
