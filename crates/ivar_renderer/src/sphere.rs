//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    material::MaterialId,
    Ray,
};
use ivar_math::{Interval, Point3};
use std::f32::consts::PI;

/// A sphere primitive.
///
/// A negative radius flips the outward normal, which turns the sphere into
/// an inward-facing shell (used for hollow glass).
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    radius: f32,
    material: MaterialId,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point3, radius: f32, material: MaterialId) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Get the UV coordinates for a point on the unit sphere.
    fn get_sphere_uv(p: Point3) -> (f32, f32) {
        // theta: angle down from +Y
        // phi: angle around Y axis from +X
        let theta = (-p.y).clamp(-1.0, 1.0).acos();
        let phi = (-p.z).atan2(p.x) + PI;

        (phi / (2.0 * PI), theta / PI)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        // A tangent ray (zero discriminant) does not count as a hit
        let discriminant = h * h - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.contains(root) {
            root = (h + sqrtd) / a;
            if !ray_t.contains(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let outward_normal = (p - self.center) / self.radius;
        let (u, v) = Self::get_sphere_uv(outward_normal);

        Some(HitRecord::new(ray, root, outward_normal, self.material).with_uv(u, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ivar_math::Vec3;

    const T_RANGE: Interval = Interval {
        min: 0.001,
        max: f32::INFINITY,
    };

    #[test]
    fn test_sphere_hit_distance() {
        let radius = 2.0;
        let distance = 10.0;
        let sphere = Sphere::new(Vec3::ZERO, radius, MaterialId::default());

        let ray = Ray::new(Vec3::new(0.0, 0.0, distance), Vec3::NEG_Z);
        let rec = sphere.hit(&ray, T_RANGE).expect("ray aimed at center must hit");

        assert!((rec.t - (distance - radius)).abs() < 1e-4);
        assert!((rec.normal.length() - 1.0).abs() < 1e-5);
        // Outward normal, away from the center and towards the ray origin
        assert!(rec.normal.dot(rec.p) > 0.0);
        assert!(rec.front_face);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, MaterialId::default());

        // Parallel ray passing at distance 0.6 > radius
        let ray = Ray::new(Vec3::new(0.0, 0.6, 0.0), Vec3::NEG_Z);
        assert!(sphere.hit(&ray, T_RANGE).is_none());

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(sphere.hit(&ray, T_RANGE).is_none());
    }

    #[test]
    fn test_sphere_tangent_ray_misses() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, MaterialId::default());

        // Grazes the top of the sphere at (0, 1, -5)
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Z);
        assert!(sphere.hit(&ray, T_RANGE).is_none());
    }

    #[test]
    fn test_sphere_far_root_from_inside() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, MaterialId::default());
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = sphere.hit(&ray, T_RANGE).unwrap();
        assert!((rec.t - 1.0).abs() < 1e-5);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::NEG_X);
    }

    #[test]
    fn test_sphere_respects_interval() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, MaterialId::default());
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        assert!(sphere.hit(&ray, Interval::new(0.001, 3.0)).is_none());
        assert!(sphere.hit(&ray, Interval::new(0.001, 4.0)).is_some());
    }

    #[test]
    fn test_negative_radius_faces_inward() {
        let sphere = Sphere::new(Vec3::ZERO, -1.0, MaterialId::default());
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);

        let rec = sphere.hit(&ray, T_RANGE).unwrap();
        assert!((rec.t - 4.0).abs() < 1e-5);
        // Geometric normal points inward, so the ray sees a back face
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
    }

    #[test]
    fn test_sphere_uv() {
        let (u, v) = Sphere::get_sphere_uv(Vec3::Y);
        assert!((v - 1.0).abs() < 1e-5);
        assert!((0.0..=1.0).contains(&u));

        let (_, v) = Sphere::get_sphere_uv(Vec3::NEG_Y);
        assert!(v.abs() < 1e-5);
    }
}
