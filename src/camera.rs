//! Pinhole camera for primary ray generation.

use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// Settings a camera is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Point camera is looking from (camera position)
    pub lookfrom: Point3,
    /// Point camera is looking at
    pub lookat: Point3,
    /// Camera-relative "up" direction vector
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Viewport width divided by height
    pub aspect_ratio: f32,
}

impl Default for CameraSettings {
    /// Camera at the origin looking down -z through a 2-unit-tall viewport
    /// one unit away, 16:9.
    fn default() -> Self {
        Self {
            lookfrom: Point3::ZERO,
            lookat: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            aspect_ratio: 16.0 / 9.0,
        }
    }
}

/// Camera with a precomputed viewport.
///
/// Immutable once built; `get_ray` is a pure function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Build the camera frame and viewport from `settings`.
    ///
    /// A degenerate frame (lookfrom == lookat, or vup parallel to the view
    /// direction) falls back to the default axes.
    pub fn new(settings: &CameraSettings) -> Self {
        let theta = settings.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = settings.aspect_ratio * viewport_height;

        // u, v, w orthonormal basis; w points opposite the view direction.
        let w = (settings.lookfrom - settings.lookat).try_normalize().unwrap_or(Vec3::Z);
        let u = settings.vup.cross(w).try_normalize().unwrap_or(Vec3::X);
        let v = w.cross(u);

        let origin = settings.lookfrom;
        let horizontal = viewport_width * u;
        let vertical = viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - w;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    /// Ray through the viewport point at normalized coordinates (u, v).
    ///
    /// (0, 0) is the lower-left corner, (1, 1) the upper-right.
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_points_at_lookat() {
        let camera = Camera::default();
        let r = camera.get_ray(0.5, 0.5);
        assert_eq!(r.origin, Point3::ZERO);
        assert!((r.direction - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_corners_span_viewport() {
        let camera = Camera::default();
        let ll = camera.get_ray(0.0, 0.0).direction;
        let ur = camera.get_ray(1.0, 1.0).direction;
        // 90 degree vfov: viewport 2 tall, 2 * 16/9 wide, one unit away.
        assert!((ll - Vec3::new(-16.0 / 9.0, -1.0, -1.0)).length() < 1e-5);
        assert!((ur - Vec3::new(16.0 / 9.0, 1.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_get_ray_is_pure() {
        let camera = Camera::new(&CameraSettings {
            lookfrom: Point3::new(3.0, 2.0, 1.0),
            lookat: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 40.0,
            aspect_ratio: 1.5,
        });
        assert_eq!(camera.get_ray(0.25, 0.75), camera.get_ray(0.25, 0.75));
    }

    #[test]
    fn test_degenerate_frame_still_produces_rays() {
        let camera = Camera::new(&CameraSettings {
            lookfrom: Point3::ZERO,
            lookat: Point3::ZERO,
            ..CameraSettings::default()
        });
        let r = camera.get_ray(0.5, 0.5);
        assert!(r.direction.is_finite());
        assert!(r.direction.length() > 0.0);
    }
}
