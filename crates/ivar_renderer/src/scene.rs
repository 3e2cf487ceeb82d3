//! Scene: the primitives to trace against and the materials they use.

use crate::hittable::{HitRecord, Hittable};
use crate::material::{Material, MaterialId, MaterialRegistry};
use crate::{Ray, Sphere, Triangle};
use ivar_math::{Interval, Point3};

/// An ordered collection of primitives plus the registry that owns their
/// materials.
///
/// Intersection is a linear scan over every primitive; there is no
/// acceleration structure.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn Hittable>>,
    materials: MaterialRegistry,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a material and return its handle.
    pub fn add_material<M: Material + 'static>(&mut self, material: M) -> MaterialId {
        self.materials.add(material)
    }

    /// Look up a material referenced by a primitive of this scene.
    pub fn material(&self, id: MaterialId) -> &dyn Material {
        self.materials.get(id)
    }

    /// The registry owning every material of this scene.
    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Add a sphere.
    pub fn add_sphere(&mut self, center: Point3, radius: f32, material: MaterialId) {
        self.add(Box::new(Sphere::new(center, radius, material)));
    }

    /// Add a flat-shaded triangle.
    pub fn add_triangle(&mut self, v0: Point3, v1: Point3, v2: Point3, material: MaterialId) {
        self.add(Box::new(Triangle::new(v0, v1, v2, material)));
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}
