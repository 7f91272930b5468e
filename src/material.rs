//! Material system.
//!
//! Two surface responses: Lambertian (diffuse) and Metal (specular with
//! optional fuzz). Materials are immutable and shared between spheres.

use rand::Rng;

use crate::hittable::HitRecord;
use crate::random;
use crate::ray::Ray;
use crate::vec3::{self, Color};

/// Result of a successful scatter: how much light survives and where the
/// next ray goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    /// Per-channel fraction of incoming light retained.
    pub attenuation: Color,
    /// Outgoing ray, starting at the hit point.
    pub scattered: Ray,
}

/// Surface material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Lambertian diffuse material for matte surfaces.
    Lambertian {
        /// Surface reflectance.
        albedo: Color,
    },

    /// Metallic material with specular reflection.
    Metal {
        /// Metal color.
        albedo: Color,
        /// Surface roughness in [0, 1] (0.0 = mirror).
        fuzz: f32,
    },
}

impl Material {
    /// Diffuse material with the given albedo.
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    /// Metal with `fuzz` clamped into [0, 1].
    pub fn metal(albedo: Color, fuzz: f32) -> Self {
        Material::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Compute how an incoming ray scatters at `rec`.
    ///
    /// Returns `None` when the ray is absorbed.
    pub fn scatter<R: Rng + ?Sized>(&self, r_in: &Ray, rec: &HitRecord<'_>, rng: &mut R) -> Option<Scatter> {
        match *self {
            Material::Lambertian { albedo } => Some(scatter_lambertian(albedo, rec, rng)),
            Material::Metal { albedo, fuzz } => scatter_metal(albedo, fuzz, r_in, rec, rng),
        }
    }
}

/// Diffuse scatter: normal plus a random unit vector, normalized.
fn scatter_lambertian<R: Rng + ?Sized>(albedo: Color, rec: &HitRecord<'_>, rng: &mut R) -> Scatter {
    let scatter_direction = rec.normal + random::random_unit_vector(rng);

    // Unit vector nearly opposite the normal leaves almost nothing.
    let direction = if vec3::near_zero(scatter_direction) {
        rec.normal
    } else {
        vec3::unit_vector(scatter_direction).unwrap_or(rec.normal)
    };

    Scatter {
        attenuation: albedo,
        scattered: Ray::new(rec.p, direction),
    }
}

fn scatter_metal<R: Rng + ?Sized>(
    albedo: Color,
    fuzz: f32,
    r_in: &Ray,
    rec: &HitRecord<'_>,
    rng: &mut R,
) -> Option<Scatter> {
    let unit_in = vec3::unit_vector(r_in.direction)?;
    let reflected = vec3::reflect(unit_in, rec.normal) + fuzz * random::random_unit_vector(rng);

    // Fuzz pushed the reflection below the surface: absorbed.
    if reflected.dot(rec.normal) <= 0.0 {
        return None;
    }

    Some(Scatter {
        attenuation: albedo,
        scattered: Ray::new(rec.p, reflected),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::make_rng;
    use crate::vec3::{Point3, Vec3};

    fn record(material: &Material) -> HitRecord<'_> {
        let r = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        HitRecord::new(&r, 1.0, Point3::ZERO, Vec3::Y, material)
    }

    #[test]
    fn test_lambertian_scatters_into_normal_hemisphere() {
        let mat = Material::lambertian(Color::new(0.5, 0.5, 0.5));
        let rec = record(&mat);
        let r_in = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let mut rng = make_rng(Some(11));

        for _ in 0..1000 {
            let s = mat.scatter(&r_in, &rec, &mut rng).expect("diffuse never absorbs");
            assert_eq!(s.attenuation, Color::splat(0.5));
            assert_eq!(s.scattered.origin, rec.p);
            assert!((s.scattered.direction.length() - 1.0).abs() < 1e-4);
            assert!(s.scattered.direction.dot(rec.normal) >= -1e-4);
        }
    }

    #[test]
    fn test_metal_mirror_reflects() {
        let mat = Material::metal(Color::new(0.8, 0.6, 0.2), 0.0);
        let rec = record(&mat);
        let r_in = Ray::new(Point3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let mut rng = make_rng(Some(12));

        let s = mat.scatter(&r_in, &rec, &mut rng).unwrap();
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((s.scattered.direction - expected).length() < 1e-6);
        assert_eq!(s.attenuation, Color::new(0.8, 0.6, 0.2));
    }

    #[test]
    fn test_metal_grazing_fuzz_can_absorb() {
        let mat = Material::metal(Color::ONE, 1.0);
        let rec = record(&mat);
        // Nearly tangent incoming ray: full fuzz sends many reflections below the surface.
        let r_in = Ray::new(Point3::new(-1.0, 0.01, 0.0), Vec3::new(1.0, -0.01, 0.0));
        let mut rng = make_rng(Some(13));

        let absorbed = (0..1000)
            .filter(|_| mat.scatter(&r_in, &rec, &mut rng).is_none())
            .count();
        assert!(absorbed > 100, "absorbed {absorbed}");
    }

    #[test]
    fn test_metal_fuzz_is_clamped() {
        assert_eq!(
            Material::metal(Color::ONE, 3.0),
            Material::Metal { albedo: Color::ONE, fuzz: 1.0 }
        );
    }
}
