//! Random sampling helpers.
//!
//! Every function takes the generator explicitly so renders can be seeded
//! and reproduced. The driver uses a ChaCha20 PRNG; tests seed their own.

use glam::Vec3A;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Generator used by the render driver.
pub type RenderRng = ChaCha20Rng;

/// Build the render generator from an optional seed.
///
/// Without a seed the generator is initialised from the thread RNG.
pub fn make_rng(seed: Option<u64>) -> RenderRng {
    match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_rng(&mut rand::rng()),
    }
}

/// Random f32 in [0.0, 1.0)
pub fn random_f32<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random()
}

/// Random unit vector uniformly distributed on the unit sphere.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3A {
    // Uniform θ in [0, 2π) and uniform cos(φ) in [-1, 1]
    let theta = 2.0 * std::f32::consts::PI * rng.random::<f32>();
    let cos_phi = 2.0 * rng.random::<f32>() - 1.0;
    let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();

    Vec3A::new(sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi)
}

/// Random offset in the [-0.5, 0.5) square, used for pixel jitter.
pub fn sample_square<R: Rng + ?Sized>(rng: &mut R) -> (f32, f32) {
    (random_f32(rng) - 0.5, random_f32(rng) - 0.5)
}
