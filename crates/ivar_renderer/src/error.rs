//! Errors surfaced by the render entry points and image output.
//!
//! The tracing hot path never fails; these only cover setup and I/O.

use thiserror::Error;

/// Errors that can occur around a render pass.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("pixel buffer holds {actual} entries, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("thread count must be at least 1")]
    NoThreads,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
