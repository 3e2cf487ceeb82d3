//! Column-range work partitioning for the threaded renderer.
//!
//! The image is cut into contiguous, non-overlapping column ranges, one per
//! worker. Each range is rendered into a private block and copied back into
//! the shared buffer after every worker has finished.

use crate::random::worker_rng;
use crate::renderer::{pack_rgba, render_pixel, tonemap};
use crate::{Camera, RenderSettings, Scene};

/// A half-open range of image columns `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRange {
    /// First column of the range
    pub start: u32,
    /// One past the last column
    pub end: u32,
    /// Position of this range in the partition; also seeds its RNG
    pub index: usize,
}

impl ColumnRange {
    /// Create a new range.
    pub fn new(start: u32, end: u32, index: usize) -> Self {
        Self { start, end, index }
    }

    /// Number of columns in the range.
    pub fn width(&self) -> u32 {
        self.end - self.start
    }
}

/// Split `width` columns into at most `thread_count` ranges.
///
/// Every range except possibly the last holds `ceil(width / thread_count)`
/// columns. Empty ranges are never produced, so the result can hold fewer
/// than `thread_count` ranges (10 columns on 6 threads gives 5).
pub fn partition_columns(width: u32, thread_count: usize) -> Vec<ColumnRange> {
    if width == 0 || thread_count == 0 {
        return Vec::new();
    }

    let threads = u32::try_from(thread_count).unwrap_or(u32::MAX).min(width);
    let columns_per_range = width.div_ceil(threads);

    let mut ranges = Vec::with_capacity(threads as usize);
    let mut start = 0;
    while start < width {
        let end = (start + columns_per_range).min(width);
        ranges.push(ColumnRange::new(start, end, ranges.len()));
        start = end;
    }
    ranges
}

/// Packed pixels of one column range, row-major within the range.
#[derive(Debug, Clone)]
pub struct ColumnBlock {
    /// The range that was rendered
    pub range: ColumnRange,
    /// Packed RGBA pixels, `range.width()` per row, `height` rows
    pub pixels: Vec<u32>,
}

impl ColumnBlock {
    /// Copy the block into its columns of a full-width row-major buffer.
    pub fn write_into(&self, buffer: &mut [u32], width: u32) {
        let range_width = self.range.width() as usize;
        if range_width == 0 {
            return;
        }

        for (row, chunk) in self.pixels.chunks_exact(range_width).enumerate() {
            let offset = row * width as usize + self.range.start as usize;
            buffer[offset..offset + range_width].copy_from_slice(chunk);
        }
    }
}

/// Render every pixel of one column range.
///
/// Owns the range's RNG for the duration of the call.
pub fn render_columns(
    range: &ColumnRange,
    width: u32,
    height: u32,
    settings: &RenderSettings,
    camera: &Camera,
    scene: &Scene,
) -> ColumnBlock {
    let mut rng = worker_rng(range.index);
    let mut pixels = Vec::with_capacity(range.width() as usize * height as usize);

    for j in 0..height {
        for i in range.start..range.end {
            let color = render_pixel(camera, scene, (i, j), (width, height), settings, &mut rng);
            pixels.push(pack_rgba(tonemap(color)));
        }
    }

    log::debug!(
        "Columns {}..{} finished (range {})",
        range.start,
        range.end,
        range.index
    );

    ColumnBlock {
        range: *range,
        pixels,
    }
}
