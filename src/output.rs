//! # Output Module
//!
//! Writes rendered images to disk:
//! - plain-text PPM (`P3`), one `R G B` triple per pixel, top row first
//! - 8-bit PNG through the `image` crate
//! - linear f32 OpenEXR through the `exr` crate
//!
//! PPM and PNG apply gamma 2 (square root) and clamp to [0, 0.999] before
//! scaling to 0..=255. EXR keeps the linear HDR values untouched.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, Rgb};
use log::info;

use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::render::HdrImage;

/// Channel range before scaling to bytes.
const INTENSITY: Interval = Interval {
    min: 0.0,
    max: 0.999,
};

/// Gamma-correct, clamp and quantize one linear channel.
pub fn to_byte(linear: f32) -> u8 {
    let gamma = if linear > 0.0 { linear.sqrt() } else { 0.0 };
    (256.0 * INTENSITY.clamp(gamma)) as u8
}

/// Write `image` as an ASCII PPM.
pub fn write_ppm<W: Write>(image: &HdrImage, mut out: W) -> Result<()> {
    writeln!(out, "P3\n{} {}\n255", image.width(), image.height())?;
    for pixel in image.pixels() {
        writeln!(out, "{} {} {}", to_byte(pixel[0]), to_byte(pixel[1]), to_byte(pixel[2]))?;
    }
    out.flush()?;
    Ok(())
}

/// Save `image` as a PPM file.
pub fn save_ppm(image: &HdrImage, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    write_ppm(image, BufWriter::new(file))?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save `image` as an 8-bit PNG.
pub fn save_png(image: &HdrImage, output_path: &Path) -> Result<()> {
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let pixel = image.get_pixel(x, y);
        Rgb([to_byte(pixel[0]), to_byte(pixel[1]), to_byte(pixel[2])])
    });
    u8_image.save(output_path)?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save `image` as a linear HDR OpenEXR file.
pub fn save_exr(image: &HdrImage, output_path: &Path) -> Result<()> {
    write_rgb_file(output_path, image.width() as usize, image.height() as usize, |x, y| {
        let pixel = image.get_pixel(x as u32, y as u32);
        (pixel[0], pixel[1], pixel[2])
    })?;
    info!("HDR image saved as EXR: {}", output_path.display());
    Ok(())
}

/// Save `image` in the format named by the file extension.
pub fn save_image(image: &HdrImage, output_path: &Path) -> Result<()> {
    let extension = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("ppm") => save_ppm(image, output_path),
        Some("png") => save_png(image, output_path),
        Some("exr") => save_exr(image, output_path),
        _ => Err(Error::UnsupportedFormat(output_path.to_path_buf())),
    }
}
