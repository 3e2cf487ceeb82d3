//! Render configuration.

use ivar_math::Color;
use serde::{Deserialize, Serialize};

/// Settings for one render pass. Read-only while a render is running.
///
/// Deserializes from partial documents: missing fields take their
/// [`Default`] value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Vertical field of view in degrees
    pub field_of_view: f32,
    /// Minimum hit distance, avoids self-intersection ("shadow acne")
    pub hit_epsilon: f32,
    /// Number of worker threads per render
    pub thread_count: usize,
    /// Radiance returned by rays that escape the scene
    pub background: Color,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            samples_per_pixel: 100,
            max_depth: 50,
            field_of_view: 20.0,
            hit_epsilon: 0.001,
            thread_count: std::thread::available_parallelism().map_or(1, |n| n.get()),
            background: Color::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.samples_per_pixel, 100);
        assert_eq!(settings.max_depth, 50);
        assert_eq!(settings.hit_epsilon, 0.001);
        assert!(settings.thread_count >= 1);
        assert_eq!(settings.background, Color::ZERO);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: RenderSettings =
            serde_json::from_str(r#"{ "samples_per_pixel": 8, "background": [1.0, 0.5, 0.0] }"#)
                .unwrap();

        assert_eq!(settings.samples_per_pixel, 8);
        assert_eq!(settings.background, Color::new(1.0, 0.5, 0.0));
        assert_eq!(settings.max_depth, RenderSettings::default().max_depth);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = RenderSettings {
            thread_count: 3,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: RenderSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
