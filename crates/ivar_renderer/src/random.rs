//! Sampling helpers over an explicit, caller-owned generator.
//!
//! Nothing in here touches a global or thread-local generator: every render
//! worker owns one `StdRng` created by [`worker_rng`] and threads it through
//! the camera, integrator and materials.

use ivar_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Create the generator for a render worker.
///
/// Seeded purely by the worker's range index, so a render is reproducible
/// for a fixed thread count.
pub fn worker_rng(index: usize) -> StdRng {
    StdRng::seed_from_u64(index as u64)
}

/// Uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform f32 in [min, max).
#[inline]
pub fn gen_range_f32(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * gen_f32(rng)
}

/// Random vector with components in [min, max).
pub fn random_vec3(rng: &mut dyn RngCore, min: f32, max: f32) -> Vec3 {
    Vec3::new(
        gen_range_f32(rng, min, max),
        gen_range_f32(rng, min, max),
        gen_range_f32(rng, min, max),
    )
}

/// Random point strictly inside the unit sphere (rejection sampling).
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_vec3(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Random unit vector, uniformly distributed on the sphere.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_in_unit_sphere(rng);
        let len_sq = p.length_squared();
        // Tiny vectors lose precision when normalized
        if len_sq > 1e-12 {
            return p / len_sq.sqrt();
        }
    }
}
