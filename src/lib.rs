#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod pipeline;
pub mod types;

// Individual stages, public for tools and tests that drive them one by one.
pub mod centroid;
pub mod components;
pub mod filters;
pub mod grayscale;
pub mod normalize;
pub mod resample;
pub mod threshold;

pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::PreprocessError;
pub use crate::pipeline::{
    preprocess_batch, preprocess_rgba, preprocess_with_report, Preprocessed, PreprocessOptions,
    Preprocessor,
};
pub use crate::types::{NormalizedImage, Roi, CANVAS_PIXELS, CANVAS_SIZE, TARGET_LONG_SIDE};

pub use crate::diagnostics::{DebugTrace, PreprocessReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use digit_normalizer::prelude::*;
///
/// let (w, h) = (64usize, 64usize);
/// let rgba = vec![0u8; w * h * 4];
/// let pixels = PixelBuffer::new(&rgba, w, h).unwrap();
/// let out = Preprocessor::new(PreprocessOptions::default())
///     .unwrap()
///     .process(&pixels);
/// assert!(out.image.as_slice().iter().all(|&v| v == 0.0));
/// println!("{}", out.trace);
/// ```
pub mod prelude {
    pub use crate::image::PixelBuffer;
    pub use crate::{NormalizedImage, PreprocessOptions, Preprocessed, Preprocessor};
}
