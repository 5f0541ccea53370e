//! Direction sampling and per-path random streams.

use std::f32::consts::TAU;

use glint_math::{orthonormal_basis, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Sample a cosine-weighted direction in the hemisphere around `normal`.
///
/// The density is `cos(theta) / PI`, which cancels the cosine term of the
/// rendering equation for Lambertian surfaces. Consumes exactly two draws
/// from `rng`.
///
/// * `normal` - must be normalized
pub fn sample_cosine_hemisphere(normal: Vec3, rng: &mut dyn RngCore) -> Vec3 {
    let up = rng.gen::<f32>().sqrt(); // cos(theta)
    let over = (1.0 - up * up).max(0.0).sqrt(); // sin(theta)
    let around = rng.gen::<f32>() * TAU;

    let (tangent, bitangent) = orthonormal_basis(normal);

    up * normal + around.cos() * over * tangent + around.sin() * over * bitangent
}

/// Build the random stream for one bounce of one path.
///
/// Every `(iteration, pixel_index, depth)` triple gets its own stream, so
/// paths can be shaded on any thread in any order and still reproduce the
/// same image for the same `seed`.
pub fn path_rng(seed: u64, iteration: u32, pixel_index: u32, depth: u32) -> StdRng {
    let mut key = [0u8; 32];
    key[0..8].copy_from_slice(&seed.to_le_bytes());
    key[8..12].copy_from_slice(&hash32(iteration).to_le_bytes());
    key[12..16].copy_from_slice(&hash32(pixel_index).to_le_bytes());
    key[16..20].copy_from_slice(&hash32(depth).to_le_bytes());
    StdRng::from_seed(key)
}

/// Bob Jenkins' 32-bit integer mix.
#[inline]
fn hash32(mut a: u32) -> u32 {
    a = a.wrapping_add(0x7ed5_5d16).wrapping_add(a << 12);
    a = (a ^ 0xc761_c23c) ^ (a >> 19);
    a = a.wrapping_add(0x1656_67b1).wrapping_add(a << 5);
    a = a.wrapping_add(0xd3a2_646c) ^ (a << 9);
    a = a.wrapping_add(0xfd70_46c5).wrapping_add(a << 3);
    (a ^ 0xb55a_4f09) ^ (a >> 16)
}
