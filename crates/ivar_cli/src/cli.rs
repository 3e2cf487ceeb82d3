use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ivar_renderer::RenderSettings;
use log::LevelFilter;

use crate::scenes::SceneKind;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "ivar")]
#[command(about = "Monte Carlo path tracer")]
pub struct Args {
    /// Preset scene to render
    #[arg(long, value_enum, default_value = "default")]
    pub scene: SceneKind,

    /// Image width in pixels
    #[arg(long, default_value_t = 400, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Samples per pixel
    #[arg(short, long)]
    pub samples: Option<u32>,

    /// Maximum bounce depth
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Vertical field of view in degrees
    #[arg(long)]
    pub fov: Option<f32>,

    /// Worker thread count
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// JSON file with render settings; keys it sets override the preset
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file (.ppm or .png)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply flags that were given on the command line.
    pub fn apply_overrides(&self, settings: &mut RenderSettings) {
        if let Some(samples) = self.samples {
            settings.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
        if let Some(fov) = self.fov {
            settings.field_of_view = fov;
        }
        if let Some(threads) = self.threads {
            settings.thread_count = threads;
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["ivar"]).unwrap();
        assert_eq!(args.scene, SceneKind::Default);
        assert_eq!((args.width, args.height), (400, 300));
        assert_eq!(args.output, PathBuf::from("output.ppm"));
        assert!(args.samples.is_none());
    }

    #[test]
    fn test_overrides_only_given_flags() {
        let args = Args::try_parse_from([
            "ivar", "--scene", "triangle", "-s", "8", "--threads", "2", "-o", "tri.png",
        ])
        .unwrap();
        let mut settings = RenderSettings::default();
        args.apply_overrides(&mut settings);

        assert_eq!(args.scene, SceneKind::Triangle);
        assert_eq!(settings.samples_per_pixel, 8);
        assert_eq!(settings.thread_count, 2);
        assert_eq!(settings.max_depth, RenderSettings::default().max_depth);
    }

    #[test]
    fn test_rejects_zero_size() {
        assert!(Args::try_parse_from(["ivar", "--width", "0"]).is_err());
    }
}
