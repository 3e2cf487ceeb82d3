//! `ivar` - render a preset scene to a PPM or PNG file.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

mod cli;
mod config;
mod scenes;

use cli::Args;
use ivar_renderer::{render, save_image};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let mut preset = scenes::build(args.scene);
    info!(
        "Scene {:?}: {} primitives, {} materials",
        args.scene,
        preset.scene.len(),
        preset.scene.materials().len()
    );

    let mut settings = preset.settings.clone();
    if let Some(path) = &args.config {
        settings = config::load_settings(settings, path)?;
        info!("Loaded settings from {}", path.display());
    }
    args.apply_overrides(&mut settings);

    preset.camera.set_aspect_ratio(args.aspect_ratio());
    preset.camera.set_vfov(settings.field_of_view);

    let image = render(args.width, args.height, &settings, &preset.camera, &preset.scene)
        .context("render failed")?;

    save_image(&args.output, &image)
        .with_context(|| format!("failed to save {}", args.output.display()))?;
    info!("Saved to {}", args.output.display());

    Ok(())
}
