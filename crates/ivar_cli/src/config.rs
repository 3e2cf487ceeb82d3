//! Render settings loaded from a JSON file.
//!
//! The file is layered on top of a base (the preset's settings): only the
//! keys it contains are replaced.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use ivar_renderer::RenderSettings;
use serde_json::Value;

/// Read `path` and layer it over `base`.
pub fn load_settings(base: RenderSettings, path: &Path) -> Result<RenderSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    merge_settings(base, &text)
        .with_context(|| format!("invalid settings file {}", path.display()))
}

/// Layer a JSON object over `base`.
pub fn merge_settings(base: RenderSettings, json: &str) -> Result<RenderSettings> {
    let Value::Object(overrides) = serde_json::from_str::<Value>(json)? else {
        bail!("settings must be a JSON object");
    };

    let mut merged = serde_json::to_value(base)?;
    if let Value::Object(fields) = &mut merged {
        fields.extend(overrides);
    }

    Ok(serde_json::from_value(merged)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ivar_renderer::Color;

    fn base() -> RenderSettings {
        RenderSettings {
            samples_per_pixel: 25,
            max_depth: 25,
            field_of_view: 90.0,
            background: Color::ONE,
            thread_count: 4,
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_keeps_unset_keys() {
        let settings = merge_settings(base(), r#"{ "samples_per_pixel": 200 }"#).unwrap();

        assert_eq!(settings.samples_per_pixel, 200);
        assert_eq!(settings.max_depth, 25);
        assert_eq!(settings.field_of_view, 90.0);
        assert_eq!(settings.background, Color::ONE);
    }

    #[test]
    fn test_merge_background() {
        let settings = merge_settings(base(), r#"{ "background": [0.0, 0.0, 0.0] }"#).unwrap();
        assert_eq!(settings.background, Color::ZERO);
        assert_eq!(settings.thread_count, 4);
    }

    #[test]
    fn test_merge_rejects_non_object() {
        assert!(merge_settings(base(), "[1, 2, 3]").is_err());
        assert!(merge_settings(base(), "not json").is_err());
    }

    #[test]
    fn test_merge_rejects_bad_types() {
        assert!(merge_settings(base(), r#"{ "max_depth": -1 }"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_settings(base(), Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read settings file"));
    }
}
