//! Sphere primitive.
//!
//! Ray-sphere intersection using the half-b form of the quadratic formula.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Point3;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// The radius must be positive and finite. Materials are shared, so many
    /// spheres may hold the same `Arc`.
    pub fn new(center: Point3, radius: f32, material: Arc<Material>) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    /// Center point in world coordinates.
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Material shared with other scene objects.
    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = r.origin - self.center;
        let a = r.direction.length_squared();
        let half_b = oc.dot(r.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Nearest root inside the range wins; from inside the sphere only
        // the exit root can qualify.
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.contains(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.contains(root) {
                return None;
            }
        }

        let p = r.at(root);
        let outward_normal = (p - self.center) / self.radius;
        Some(HitRecord::new(r, root, p, outward_normal, &self.material))
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;
    use crate::random::{make_rng, random_unit_vector};
    use crate::vec3::{Color, Vec3};

    fn unit_sphere_ahead() -> Sphere {
        let mat = Arc::new(Material::lambertian(Color::splat(0.5)));
        Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, mat).unwrap()
    }

    #[test]
    fn test_rejects_degenerate_radius() {
        let mat = Arc::new(Material::lambertian(Color::ONE));
        for r in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                Sphere::new(Point3::ZERO, r, mat.clone()),
                Err(Error::InvalidRadius(_))
            ));
        }
    }

    #[test]
    fn test_hit_in_front_of_camera() {
        let sphere = unit_sphere_ahead();
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&r, Interval::from_min(0.001)).unwrap();
        assert_eq!(rec.t, 0.5);
        assert_eq!(rec.p, Point3::new(0.0, 0.0, -0.5));
        assert_eq!(rec.normal, Vec3::new(0.0, 0.0, 1.0));
        assert!(rec.front_face);
        assert!(std::ptr::eq(rec.material, sphere.material().as_ref()));
    }

    #[test]
    fn test_ray_through_center_has_symmetric_roots() {
        let mat = Arc::new(Material::lambertian(Color::ONE));
        let center = Point3::new(1.0, 2.0, -6.0);
        let radius = 2.0;
        let sphere = Sphere::new(center, radius, mat).unwrap();

        let mut rng = make_rng(Some(3));
        for _ in 0..200 {
            let dir = random_unit_vector(&mut rng);
            let origin = center - dir * 10.0;
            let r = Ray::new(origin, dir);

            let entry = sphere.hit(&r, Interval::from_min(0.0)).unwrap();
            let exit = sphere.hit(&r, Interval::from_min(entry.t + 1e-3)).unwrap();

            // Center projects to t = 10 for a unit direction.
            assert!((entry.t - 8.0).abs() < 1e-3, "entry {}", entry.t);
            assert!((exit.t - 12.0).abs() < 1e-3, "exit {}", exit.t);
            assert!(((10.0 - entry.t) - (exit.t - 10.0)).abs() < 1e-3);
            assert!(((entry.p - center).length() - radius).abs() < 1e-3);
            assert!(((exit.p - center).length() - radius).abs() < 1e-3);
        }
    }

    #[test]
    fn test_outside_origin_pointing_away_misses() {
        let sphere = unit_sphere_ahead();
        let mut rng = make_rng(Some(4));
        for _ in 0..500 {
            let offset = random_unit_vector(&mut rng);
            let origin = sphere.center() + offset * rng.random_range(0.6f32..5.0);
            let mut dir = random_unit_vector(&mut rng);
            if dir.dot(origin - sphere.center()) < 0.0 {
                dir = -dir;
            }
            let r = Ray::new(origin, dir);
            assert!(sphere.hit(&r, Interval::from_min(0.001)).is_none());
        }
    }

    #[test]
    fn test_normal_always_opposes_ray() {
        let sphere = unit_sphere_ahead();
        let mut rng = make_rng(Some(5));
        for _ in 0..1000 {
            // Origins both inside and outside the sphere.
            let origin = sphere.center() + random_unit_vector(&mut rng) * rng.random_range(0.0f32..2.0);
            let r = Ray::new(origin, random_unit_vector(&mut rng));
            if let Some(rec) = sphere.hit(&r, Interval::from_min(0.001)) {
                assert!(rec.normal.dot(r.direction) <= 0.0);
                assert!((rec.normal.length() - 1.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_camera_inside_sphere_uses_exit_root() {
        let sphere = unit_sphere_ahead();
        let r = Ray::new(sphere.center(), Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&r, Interval::from_min(0.001)).unwrap();
        assert_eq!(rec.t, 0.5);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_tangent_ray_touches_once() {
        let sphere = unit_sphere_ahead();
        // Grazes the sphere at (0.5, 0, -1): zero discriminant, double root.
        let r = Ray::new(Point3::new(0.5, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&r, Interval::from_min(0.001)).unwrap();
        assert_eq!(rec.t, 1.0);
        assert_eq!(rec.p, Point3::new(0.5, 0.0, -1.0));
        assert_eq!(rec.normal, Vec3::X);
        assert!(rec.normal.dot(r.direction) <= 0.0);

        // No second root beyond the touching point.
        assert!(sphere.hit(&r, Interval::from_min(1.001)).is_none());
    }

    #[test]
    fn test_hit_is_idempotent() {
        let sphere = unit_sphere_ahead();
        let r = Ray::new(Point3::new(0.1, -0.2, 0.3), Vec3::new(-0.05, 0.15, -1.0));
        let a = sphere.hit(&r, Interval::from_min(0.001)).unwrap();
        let b = sphere.hit(&r, Interval::from_min(0.001)).unwrap();
        assert_eq!(a.t.to_bits(), b.t.to_bits());
        assert_eq!(a.p.to_array().map(f32::to_bits), b.p.to_array().map(f32::to_bits));
        assert_eq!(a.normal.to_array().map(f32::to_bits), b.normal.to_array().map(f32::to_bits));
        assert_eq!(a.front_face, b.front_face);
    }
}
