//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::{
    hittable::{HitRecord, Hittable},
    material::MaterialId,
    Ray,
};
use ivar_math::{Interval, Point3, Vec3};

/// A flat-shaded triangle primitive.
#[derive(Debug, Clone)]
pub struct Triangle {
    v0: Point3,
    v1: Point3,
    v2: Point3,
    /// Pre-computed face normal (unit length)
    normal: Vec3,
    material: MaterialId,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The face normal follows the winding `v0 -> v1 -> v2`.
    pub fn new(v0: Point3, v1: Point3, v2: Point3, material: MaterialId) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize();

        Self {
            v0,
            v1,
            v2,
            normal,
            material,
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < 1e-8 {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);

        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);

        if t < 0.0 || !ray_t.contains(t) {
            return None;
        }

        Some(HitRecord::new(ray, t, self.normal, self.material).with_uv(u, v))
    }
}
