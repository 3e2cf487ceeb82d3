//! Hittable trait and HitRecord for ray-object intersection.

use crate::material::MaterialId;
use crate::Ray;
use ivar_math::{Interval, Point3, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub p: Point3,
    /// Surface normal at intersection (unit length, always points against ray)
    pub normal: Vec3,
    /// Handle of the material at the intersection point
    pub material: MaterialId,
    /// Surface parameterization
    pub u: f32,
    pub v: f32,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl HitRecord {
    /// Build a record at parameter `t` along `ray`, orienting `outward_normal`
    /// against the ray.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3, material: MaterialId) -> Self {
        let mut rec = Self {
            p: ray.at(t),
            normal: outward_normal,
            material,
            u: 0.0,
            v: 0.0,
            t,
            front_face: true,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Attach surface coordinates.
    pub fn with_uv(mut self, u: f32, v: f32) -> Self {
        self.u = u;
        self.v = v;
        self
    }

    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        // If the ray and normal point in the same direction, we're inside
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the nearest intersection with `t` inside `ray_t` (inclusive).
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_face_normal() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let rec = HitRecord::new(&ray, 4.0, Vec3::Z, MaterialId::default());

        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
        assert_eq!(rec.p, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_back_face_normal_flipped() {
        // Ray travelling along the outward normal hits from inside
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let rec = HitRecord::new(&ray, 1.0, Vec3::Z, MaterialId::default());

        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::NEG_Z);
    }
}
