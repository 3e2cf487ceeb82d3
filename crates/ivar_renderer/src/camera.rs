//! Camera for ray generation.

use crate::Ray;
use ivar_math::{Point3, Vec3};

/// Pinhole camera mapping fractional image-plane coordinates to rays.
///
/// All derived state is recomputed by [`Camera::set`]; between calls the
/// camera is immutable and can be shared across render workers.
#[derive(Debug, Clone)]
pub struct Camera {
    // Framing, kept so aspect ratio and fov can change on their own
    look_from: Point3,
    look_at: Point3,
    vup: Vec3,
    aspect_ratio: f32,
    vfov: f32, // Vertical field of view in degrees

    // Cached computed values (set by set())
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a camera at `look_from` aimed at `look_at`.
    pub fn new(look_from: Point3, look_at: Point3, vup: Vec3, aspect_ratio: f32, vfov: f32) -> Self {
        let mut camera = Self {
            look_from,
            look_at,
            vup,
            aspect_ratio,
            vfov,
            origin: Point3::ZERO,
            lower_left_corner: Point3::ZERO,
            horizontal: Vec3::ZERO,
            vertical: Vec3::ZERO,
        };
        camera.set(look_from, look_at, vup, aspect_ratio, vfov);
        camera
    }

    /// Reconfigure the camera, replacing all derived state.
    ///
    /// `look_from == look_at` or `vup` parallel to the view direction give a
    /// degenerate basis; callers must avoid them.
    pub fn set(&mut self, look_from: Point3, look_at: Point3, vup: Vec3, aspect_ratio: f32, vfov: f32) {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self.aspect_ratio = aspect_ratio;
        self.vfov = vfov;

        // Calculate viewport dimensions
        let theta = vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        // Camera basis: right, up, and backwards
        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        self.origin = look_from;
        self.horizontal = viewport_width * u;
        self.vertical = viewport_height * v;
        self.lower_left_corner = self.origin - self.horizontal / 2.0 - self.vertical / 2.0 - w;
    }

    /// Keep the framing, change the aspect ratio (e.g. on output resize).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.set(self.look_from, self.look_at, self.vup, aspect_ratio, self.vfov);
    }

    /// Keep the framing, change the vertical field of view.
    pub fn set_vfov(&mut self, vfov: f32) {
        self.set(self.look_from, self.look_at, self.vup, self.aspect_ratio, vfov);
    }

    /// Generate the ray through image-plane coordinates `(s, t)`.
    ///
    /// `(0, 0)` is the lower-left corner of the viewport, `(1, 1)` the
    /// upper-right.
    pub fn get_ray(&self, s: f32, t: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Point3::ZERO, Point3::new(0.0, 0.0, -1.0), Vec3::Y, 1.0, 90.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_basis() {
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 2.0, 90.0);

        // Right along +X, up along +Y, looking down -Z
        assert_eq!(camera.get_ray(0.5, 0.5).origin(), Vec3::ZERO);
        assert!((camera.horizontal.normalize() - Vec3::X).length() < 1e-6);
        assert!((camera.vertical.normalize() - Vec3::Y).length() < 1e-6);
        assert!((camera.get_ray(0.5, 0.5).direction() - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_camera_center_ray() {
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
            16.0 / 9.0,
            40.0,
        );

        let ray = camera.get_ray(0.5, 0.5);
        assert_eq!(ray.origin(), Vec3::new(0.0, 0.0, 5.0));
        assert!((ray.direction().normalize() - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_camera_viewport_corners() {
        // 90 degree fov: half-height of 1 at unit distance
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 2.0, 90.0);

        let lower_left = camera.get_ray(0.0, 0.0).direction();
        assert!((lower_left - Vec3::new(-2.0, -1.0, -1.0)).length() < 1e-5);

        let upper_right = camera.get_ray(1.0, 1.0).direction();
        assert!((upper_right - Vec3::new(2.0, 1.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_camera_set_aspect_ratio() {
        let mut camera = Camera::default();
        camera.set_aspect_ratio(3.0);

        assert_eq!(camera.aspect_ratio, 3.0);
        let right_edge = camera.get_ray(1.0, 0.5).direction();
        assert!((right_edge - Vec3::new(3.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_camera_set_replaces_framing() {
        let mut camera = Camera::default();
        camera.set(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y, 1.0, 20.0);
        camera.set_vfov(90.0);

        assert_eq!(camera.vfov, 90.0);
        let ray = camera.get_ray(0.5, 0.5);
        assert_eq!(ray.origin(), Vec3::new(0.0, 0.0, 10.0));
        assert!((ray.direction() - Vec3::NEG_Z).length() < 1e-5);
    }
}
