//! Writing rendered pixel buffers to disk.
//!
//! Buffers store row 0 at the bottom of the image, so both writers emit
//! rows from `height - 1` down to `0`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::{RenderError, RenderResult};
use crate::renderer::PixelBuffer;

/// Write a plain-text `P3` PPM image.
///
/// Header `P3`, `width height`, `255`, then one `R G B` line per pixel.
pub fn write_ppm<W: Write>(writer: &mut W, image: &PixelBuffer) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in (0..image.height).rev() {
        for x in 0..image.width {
            let [r, g, b, _] = image.rgba(x, y);
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    Ok(())
}

/// Save as a plain-text PPM file.
pub fn save_ppm(path: impl AsRef<Path>, image: &PixelBuffer) -> RenderResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(&mut writer, image)?;
    writer.flush()?;
    Ok(())
}

/// Convert to an `image` crate buffer with the top row first.
pub fn to_rgba_image(image: &PixelBuffer) -> RgbaImage {
    RgbaImage::from_fn(image.width, image.height, |x, y| {
        Rgba(image.rgba(x, image.height - 1 - y))
    })
}

/// Save as PNG.
pub fn save_png(path: impl AsRef<Path>, image: &PixelBuffer) -> RenderResult<()> {
    to_rgba_image(image).save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Save using the format implied by the file extension (`.ppm` or `.png`).
pub fn save_image(path: impl AsRef<Path>, image: &PixelBuffer) -> RenderResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => save_ppm(path, image),
        "png" => save_png(path, image),
        _ => Err(RenderError::UnsupportedFormat(path.display().to_string())),
    }
}
