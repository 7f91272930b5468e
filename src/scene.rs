//! Scene construction from configuration.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::hittable::HittableList;
use crate::material::Material;
use crate::sphere::Sphere;
use crate::vec3::Point3;

/// Build the world described by `config`.
///
/// Each named material is allocated once and shared by every sphere that
/// refers to it.
pub fn build_world(config: &Config) -> Result<HittableList> {
    let materials: HashMap<&str, Arc<Material>> = config
        .materials
        .iter()
        .map(|(name, m)| (name.as_str(), Arc::new(Material::from(*m))))
        .collect();

    let mut world = HittableList::new();
    for sphere in &config.spheres {
        let material = materials
            .get(sphere.material.as_str())
            .ok_or_else(|| Error::UnknownMaterial(sphere.material.clone()))?;
        debug!(
            "Sphere at {:?} radius {} material '{}'",
            sphere.center, sphere.radius, sphere.material
        );
        world.add(Box::new(Sphere::new(
            Point3::from_array(sphere.center),
            sphere.radius,
            Arc::clone(material),
        )?));
    }

    info!("Scene has {} spheres and {} materials", world.len(), materials.len());
    Ok(world)
}
