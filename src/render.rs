//! Bounce-path color evaluation and the per-pixel sampling loop.

use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::Rng;

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::random;
use crate::ray::Ray;
use crate::vec3::{self, Color};

/// Linear f32 RGB image produced by the renderer.
pub type HdrImage = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Minimum ray parameter for scene queries, keeps scattered rays from
/// re-hitting the surface they leave.
pub const T_MIN: f32 = 0.001;

/// Vertical sky gradient seen by rays that miss everything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    /// Color looking straight down.
    pub horizon: Color,
    /// Color looking straight up.
    pub zenith: Color,
}

impl Background {
    /// Gradient value for the direction of `r`.
    pub fn color(&self, r: &Ray) -> Color {
        let unit_direction = r.direction.normalize_or_zero();
        // y = -1 gives a = 0, y = 1 gives a = 1
        let a = 0.5 * (unit_direction.y + 1.0);
        vec3::lerp(self.horizon, self.zenith, a)
    }
}

impl Default for Background {
    fn default() -> Self {
        Self {
            horizon: Color::new(0.68, 0.44, 0.87),
            zenith: Color::new(0.95, 0.68, 0.84),
        }
    }
}

/// Trace `r` through `world` and return the light arriving along it.
///
/// `depth` is the number of bounces still allowed; at zero no more light
/// is gathered. The bounce chain is a product of attenuations, so it is
/// walked in a loop and any depth runs in constant stack.
pub fn ray_color<R: Rng + ?Sized>(
    r: &Ray,
    world: &dyn Hittable,
    background: &Background,
    depth: u32,
    rng: &mut R,
) -> Color {
    let mut throughput = Color::ONE;
    let mut ray = *r;

    for _ in 0..depth {
        let Some(rec) = world.hit(&ray, Interval::from_min(T_MIN)) else {
            return throughput * background.color(&ray);
        };
        match rec.material.scatter(&ray, &rec, rng) {
            Some(s) => {
                throughput *= s.attenuation;
                ray = s.scattered;
            }
            None => return Color::ZERO,
        }
    }

    // Bounce budget exhausted.
    Color::ZERO
}

/// Image-level render settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    /// Rendered image width in pixels
    pub image_width: u32,
    /// Rendered image height in pixels
    pub image_height: u32,
    /// Rays averaged per pixel
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces
    pub max_depth: u32,
    /// Sky seen by escaping rays
    pub background: Background,
    /// Draw a progress bar while rendering
    pub show_progress: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            image_width: 400,
            image_height: 225,
            samples_per_pixel: 100,
            max_depth: 50,
            background: Background::default(),
            show_progress: true,
        }
    }
}

impl Renderer {
    /// Reject settings that cannot produce an image.
    pub fn validate(&self) -> Result<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(Error::InvalidSettings(format!(
                "image size {}x{} has no pixels",
                self.image_width, self.image_height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(Error::InvalidSettings("samples per pixel must be at least 1".into()));
        }
        Ok(())
    }

    /// Averaged color of pixel (i, j), with `j` counted from the top row.
    ///
    /// A single sample goes through the pixel center; more samples are
    /// jittered across the pixel footprint. `None` if (i, j) lies outside
    /// the image.
    pub fn pixel_color<R: Rng + ?Sized>(
        &self,
        camera: &Camera,
        world: &dyn Hittable,
        i: u32,
        j: u32,
        rng: &mut R,
    ) -> Option<Color> {
        if i >= self.image_width || j >= self.image_height {
            return None;
        }
        let row_from_bottom = (self.image_height - 1 - j) as f32;
        let col = i as f32;

        if self.samples_per_pixel == 1 {
            let r = camera.get_ray(self.normalize_u(col), self.normalize_v(row_from_bottom));
            return Some(ray_color(&r, world, &self.background, self.max_depth, rng));
        }

        let mut pixel_color = Color::ZERO;
        for _ in 0..self.samples_per_pixel {
            let (dx, dy) = random::sample_square(rng);
            let r = camera.get_ray(self.normalize_u(col + dx), self.normalize_v(row_from_bottom + dy));
            pixel_color += ray_color(&r, world, &self.background, self.max_depth, rng);
        }
        Some(pixel_color / self.samples_per_pixel as f32)
    }

    /// Render the full image, top row first.
    ///
    /// Returns linear colors; tone mapping is left to the output sinks.
    pub fn render<R: Rng + ?Sized>(&self, camera: &Camera, world: &dyn Hittable, rng: &mut R) -> Result<HdrImage> {
        self.validate()?;

        info!(
            "Rendering {}x{} with {} samples per pixel, max depth {}",
            self.image_width, self.image_height, self.samples_per_pixel, self.max_depth
        );
        let generation_start = std::time::Instant::now();

        let pb = if self.show_progress {
            ProgressBar::new(self.image_height as u64)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} scanlines ETA: {eta}") {
            pb.set_style(style);
        }

        let mut image = HdrImage::new(self.image_width, self.image_height);
        for j in 0..self.image_height {
            for i in 0..self.image_width {
                let Some(c) = self.pixel_color(camera, world, i, j, rng) else {
                    continue;
                };
                image.put_pixel(i, j, Rgb([c.x, c.y, c.z]));
            }
            pb.inc(1);
            debug!("Scanlines remaining: {}", self.image_height - 1 - j);
        }

        pb.finish_and_clear();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        Ok(image)
    }

    fn normalize_u(&self, x: f32) -> f32 {
        normalize(x, self.image_width)
    }

    fn normalize_v(&self, y: f32) -> f32 {
        normalize(y, self.image_height)
    }
}

/// Map a pixel coordinate onto [0, 1] across `extent` pixels.
fn normalize(x: f32, extent: u32) -> f32 {
    if extent <= 1 {
        0.0
    } else {
        x / (extent - 1) as f32
    }
}
