//! # normgraft-types
//!
//! Shared types, identifiers, error types, and numeric constants
//! for the normgraft normal-transfer engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other normgraft crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{NormgraftError, NormgraftResult};
pub use ids::{LoopId, ObjectId, TriangleId, VertexId};
pub use scalar::Scalar;
