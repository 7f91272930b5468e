//! lumenpath path tracer
//!
//! Renders scenes of spheres by recursive ray tracing with diffuse and
//! metallic materials. Outputs PPM, PNG and EXR images.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod cli;
pub mod config;
pub mod error;
pub mod hittable;
pub mod interval;
pub mod logger;
pub mod material;
pub mod output;
pub mod random;
pub mod ray;
pub mod render;
pub mod scene;
pub mod sphere;
pub mod vec3;

pub use error::{Error, Result};
