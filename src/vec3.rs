//! Vector aliases and helpers on top of `glam::Vec3A`.

use glam::Vec3A;

/// Three-component vector.
pub type Vec3 = Vec3A;

/// Point in world space.
pub type Point3 = Vec3A;

/// Linear RGB color.
pub type Color = Vec3A;

/// Squared length below which a direction is treated as degenerate.
pub const NEAR_ZERO_SQUARED: f32 = 1e-8;

/// True when `v` is too short to be used as a direction.
pub fn near_zero(v: Vec3) -> bool {
    v.length_squared() < NEAR_ZERO_SQUARED
}

/// Unit vector in the direction of `v`, or `None` for degenerate input.
pub fn unit_vector(v: Vec3) -> Option<Vec3> {
    v.try_normalize()
}

/// Mirror `v` about the plane with normal `n`.
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Linear blend, `t = 0` gives `a` and `t = 1` gives `b`.
pub fn lerp(a: Color, b: Color, t: f32) -> Color {
    (1.0 - t) * a + t * b
}
