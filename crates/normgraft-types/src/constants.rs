//! Numeric thresholds shared by the geometry kernel and the engine.

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-6;

/// Threshold on the barycentric denominator (twice the squared triangle
/// area) below which a triangle is treated as degenerate.
pub const DEGENERATE_AREA_THRESHOLD: f32 = 1.0e-10;

/// Squared-length threshold below which an interpolated normal is
/// treated as cancelled to zero.
pub const DEGENERATE_NORMAL_THRESHOLD: f32 = 1.0e-12;
