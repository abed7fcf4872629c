//! Triangle geometry kernel.
//!
//! Everything the engine needs to turn "a query point and a candidate
//! triangle" into one interpolated normal: closest-point projection onto
//! the filled triangle, barycentric coordinates of the projected point,
//! and the weighted corner-normal blend.

use glam::Vec3;
use normgraft_types::constants::{DEGENERATE_AREA_THRESHOLD, DEGENERATE_NORMAL_THRESHOLD};

/// Returns the point on the filled triangle `[a, b, c]` (interior, edges,
/// and corners included) closest to `p`.
///
/// Classifies `p` against the triangle's Voronoi regions: if the
/// perpendicular foot lands inside the face it is returned directly,
/// otherwise the result is clamped to the nearest edge or corner.
pub fn closest_point_on_triangle(p: Vec3, tri: [Vec3; 3]) -> Vec3 {
    let [a, b, c] = tri;

    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    // Vertex region A
    let d1 = ab.dot(ap);
    let d2 = ac.dot(ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return a;
    }

    // Vertex region B
    let bp = p - b;
    let d3 = ab.dot(bp);
    let d4 = ac.dot(bp);
    if d3 >= 0.0 && d4 <= d3 {
        return b;
    }

    // Edge region AB
    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let t = d1 / (d1 - d3);
        return a + ab * t;
    }

    // Vertex region C
    let cp = p - c;
    let d5 = ab.dot(cp);
    let d6 = ac.dot(cp);
    if d6 >= 0.0 && d5 <= d6 {
        return c;
    }

    // Edge region AC
    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let t = d2 / (d2 - d6);
        return a + ac * t;
    }

    // Edge region BC
    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let t = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return b + (c - b) * t;
    }

    // Interior: perpendicular foot inside the face
    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    a + ab * v + ac * w
}

/// Barycentric coordinates `(u, v, w)` of `p` with respect to `[a, b, c]`,
/// such that `p = u*a + v*b + w*c` and `u + v + w = 1`.
///
/// Valid for `p` in the triangle's plane, which holds by construction when
/// `p` comes from [`closest_point_on_triangle`]. Returns `None` when the
/// triangle is degenerate (Gram determinant below the area threshold) —
/// the weights are undefined there and the caller must fall back.
pub fn barycentric_coords(p: Vec3, tri: [Vec3; 3]) -> Option<(f32, f32, f32)> {
    let [a, b, c] = tri;

    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    // Cramer's rule on the edge Gram matrix
    let d00 = ab.dot(ab);
    let d01 = ab.dot(ac);
    let d11 = ac.dot(ac);
    let d20 = ap.dot(ab);
    let d21 = ap.dot(ac);

    let denom = d00 * d11 - d01 * d01;
    if denom.abs() < DEGENERATE_AREA_THRESHOLD {
        return None;
    }
    let inv_denom = 1.0 / denom;

    let v = (d11 * d20 - d01 * d21) * inv_denom;
    let w = (d00 * d21 - d01 * d20) * inv_denom;
    let u = 1.0 - v - w;

    Some((u, v, w))
}

/// The uniform weights substituted when a degenerate triangle still needs
/// a "center of mass" blend.
pub const UNIFORM_WEIGHTS: (f32, f32, f32) = (1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0);

/// Blends three corner normals with barycentric weights and normalizes
/// the result.
///
/// Returns `None` when the weighted sum cancels to (near) zero — opposing
/// corner normals can do that exactly — so the caller can substitute a
/// fallback instead of emitting a garbage direction.
pub fn interpolate_normal(normals: [Vec3; 3], u: f32, v: f32, w: f32) -> Option<Vec3> {
    let sum = normals[0] * u + normals[1] * v + normals[2] * w;
    if sum.length_squared() < DEGENERATE_NORMAL_THRESHOLD {
        return None;
    }
    Some(sum.normalize())
}
