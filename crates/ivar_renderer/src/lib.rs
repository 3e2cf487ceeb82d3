//! Ivar - CPU Path Tracing
//!
//! A Monte Carlo path tracer for physically-based rendering: spheres and
//! triangles, diffuse/metal/glass/emissive materials, a pinhole camera, and
//! a column-parallel renderer that fills a packed RGBA buffer.
//!
//! # Example
//!
//! ```ignore
//! use ivar_renderer::{Camera, Color, Lambertian, RenderSettings, Scene, Vec3, render};
//!
//! let mut scene = Scene::new();
//! let grey = scene.add_material(Lambertian::new(Color::splat(0.5)));
//! scene.add_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, grey);
//!
//! let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 16.0 / 9.0, 90.0);
//! let image = render(320, 180, &RenderSettings::default(), &camera, &scene)?;
//! ```

mod camera;
mod error;
mod hittable;
mod material;
mod output;
pub mod random;
mod renderer;
mod scene;
mod settings;
mod sphere;
mod tiles;
mod triangle;

pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable};
pub use material::{
    Dielectric, DiffuseLight, Lambertian, Material, MaterialId, MaterialRegistry, Metal,
    ScatterResult,
};
pub use output::{save_image, save_png, save_ppm, to_rgba_image, write_ppm};
pub use renderer::{
    linear_to_gamma, pack_rgba, radiance, render, render_into, render_pixel, tonemap, unpack_rgba,
    PixelBuffer,
};
pub use scene::Scene;
pub use settings::RenderSettings;
pub use sphere::Sphere;
pub use tiles::{partition_columns, render_columns, ColumnBlock, ColumnRange};
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from ivar_math
pub use ivar_math::{Color, Interval, Point3, Ray, Vec3};
