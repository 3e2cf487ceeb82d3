//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with configurable depth
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction and 8-bit RGBA packing
//! - Column-range parallelism over a per-render worker pool

use std::time::Instant;

use crate::error::{RenderError, RenderResult};
use crate::hittable::Hittable;
use crate::random::gen_f32;
use crate::tiles::{partition_columns, render_columns, ColumnBlock, ColumnRange};
use crate::{Camera, Color, Ray, RenderSettings, Scene};
use ivar_math::Interval;
use rand::RngCore;
use rayon::prelude::*;

/// Compute the radiance carried back along a ray.
///
/// This is the core path tracing function. Emission at each hit is added
/// before the recursive term; recursion stops at `depth == 0`.
pub fn radiance(
    ray: &Ray,
    scene: &Scene,
    settings: &RenderSettings,
    depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    // If we've exceeded max depth, return black (no light)
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = scene.hit(ray, Interval::new(settings.hit_epsilon, f32::INFINITY)) else {
        return settings.background;
    };

    let material = scene.material(rec.material);
    let emission = material.emitted(rec.u, rec.v, rec.p);

    match material.scatter(ray, &rec, rng) {
        Some(result) => {
            let incoming = radiance(&result.scattered, scene, settings, depth - 1, rng);
            emission + result.attenuation * incoming
        }
        // Absorbed - just return emission
        None => emission,
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Map an averaged linear color to display space: gamma 2, clamped to [0, 1].
#[inline]
pub fn tonemap(color: Color) -> Color {
    Color::new(
        linear_to_gamma(color.x).clamp(0.0, 1.0),
        linear_to_gamma(color.y).clamp(0.0, 1.0),
        linear_to_gamma(color.z).clamp(0.0, 1.0),
    )
}

/// Pack a display-space color as `R | G << 8 | B << 16 | A << 24`, alpha opaque.
#[inline]
pub fn pack_rgba(color: Color) -> u32 {
    let channel = |c: f32| (c.clamp(0.0, 0.999) * 256.0) as u8 as u32;
    channel(color.x) | channel(color.y) << 8 | channel(color.z) << 16 | 255u32 << 24
}

/// Split a packed pixel into `[r, g, b, a]`.
#[inline]
pub fn unpack_rgba(pixel: u32) -> [u8; 4] {
    pixel.to_le_bytes()
}

/// Estimate the averaged linear color of one pixel.
///
/// Image coordinates are jittered inside the pixel; row 0 is the bottom of
/// the image.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    (x, y): (u32, u32),
    (width, height): (u32, u32),
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> Color {
    // One-pixel wide or tall images would otherwise divide by zero
    let s_extent = width.saturating_sub(1).max(1) as f32;
    let t_extent = height.saturating_sub(1).max(1) as f32;

    let mut pixel_color = Color::ZERO;
    for _ in 0..settings.samples_per_pixel {
        let s = (x as f32 + gen_f32(rng)) / s_extent;
        let t = (y as f32 + gen_f32(rng)) / t_extent;

        let ray = camera.get_ray(s, t);
        pixel_color += radiance(&ray, scene, settings, settings.max_depth, rng);
    }

    // Average the samples
    pixel_color / settings.samples_per_pixel.max(1) as f32
}

/// Packed RGBA image produced by a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    /// Row-major, row 0 at the bottom of the image
    pub pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Create a new buffer filled with zero.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// Get the packed pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[self.index(x, y)]
    }

    /// Get the pixel at (x, y) as `[r, g, b, a]`.
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        unpack_rgba(self.get(x, y))
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Render the scene into a newly allocated buffer.
pub fn render(
    width: u32,
    height: u32,
    settings: &RenderSettings,
    camera: &Camera,
    scene: &Scene,
) -> RenderResult<PixelBuffer> {
    let mut image = PixelBuffer::new(width, height);
    render_into(width, height, settings, camera, scene, &mut image.pixels)?;
    Ok(image)
}

/// Render the scene into a caller-supplied buffer of `width * height` pixels.
///
/// Blocks until every worker has finished. Each column range is rendered
/// by its own worker on a pool built for this call only; narrow images get
/// fewer workers than `settings.thread_count`.
pub fn render_into(
    width: u32,
    height: u32,
    settings: &RenderSettings,
    camera: &Camera,
    scene: &Scene,
    pixels: &mut [u32],
) -> RenderResult<()> {
    let expected = width as usize * height as usize;
    if pixels.len() != expected {
        return Err(RenderError::BufferSize {
            expected,
            actual: pixels.len(),
        });
    }
    if settings.thread_count == 0 {
        return Err(RenderError::NoThreads);
    }
    if expected == 0 {
        return Ok(());
    }

    let ranges = partition_columns(width, settings.thread_count);
    log::info!(
        "Rendering {}x{} @ {} spp, depth {}, {} primitives on {} threads",
        width,
        height,
        settings.samples_per_pixel,
        settings.max_depth,
        scene.len(),
        ranges.len()
    );
    let start = Instant::now();

    let pool = worker_pool(&ranges)?;

    let blocks: Vec<ColumnBlock> = pool.install(|| {
        ranges
            .par_iter()
            .map(|range| render_columns(range, width, height, settings, camera, scene))
            .collect()
    });

    for block in &blocks {
        block.write_into(pixels, width);
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
    Ok(())
}

/// One worker thread per column range.
fn worker_pool(ranges: &[ColumnRange]) -> RenderResult<rayon::ThreadPool> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(ranges.len())
        .thread_name(|i| format!("ivar-worker-{}", i))
        .build()?;
    Ok(pool)
}
