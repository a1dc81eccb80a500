//! Parallel preprocessing of independent buffers.
//!
//! Calls share nothing but the read-only [`Preprocessor`]; each one owns its
//! scratch buffers, so rayon can fan them out without coordination.
use super::{Preprocessed, Preprocessor};
use crate::image::PixelBuffer;
use rayon::prelude::*;

/// Process `inputs` in parallel. Results keep the input order.
pub fn preprocess_batch(
    preprocessor: &Preprocessor,
    inputs: &[PixelBuffer<'_>],
) -> Vec<Preprocessed> {
    inputs
        .par_iter()
        .map(|pixels| preprocessor.process(pixels))
        .collect()
}
