//! Scalar type alias for the engine.
//!
//! `f32` matches the canonical `glam` vector types used throughout.
//! This alias marks every site that would change for a
//! double-precision build.

/// The floating-point type used throughout the engine.
pub type Scalar = f32;
