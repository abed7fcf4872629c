//! # normgraft-math
//!
//! Linear algebra primitives for the normgraft engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Mat4`, etc.)
//! - The triangle geometry kernel: closest-point projection,
//!   barycentric coordinates, and corner-normal interpolation

pub mod triangle;

// Re-export glam types as the canonical math types for normgraft.
pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
