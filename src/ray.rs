//! Ray representation.
//!
//! A ray is the half-line r(t) = origin + t * direction, t >= 0.

use crate::vec3::{Point3, Vec3};

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays, a surface point for scattered rays.
    pub origin: Point3,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized; `t` is then measured in multiples of
    /// this vector's length.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Compute the point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + t * self.direction
    }
}
