// Re-export glam for convenience
pub use glam::*;

// Ivar math types
mod interval;
mod ray;
pub mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{near_zero, reflect, refract};

/// Point in world space.
pub type Point3 = Vec3;

/// Linear RGB color (values typically 0-1).
pub type Color = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_color_is_componentwise() {
        let attenuation = Color::new(0.5, 1.0, 0.0);
        let incoming = Color::new(0.8, 0.4, 1.0);
        assert_eq!(attenuation * incoming, Color::new(0.4, 0.4, 0.0));
    }
}
