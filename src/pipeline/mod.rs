//! Orchestrator chaining the normalization stages.
//!
//! Stages run strictly forward:
//! grayscale → Otsu/polarity → binarize → largest component → crop and
//! resample → composite → (centroid align) → (blur) → normalize.
//!
//! Typical usage:
//! ```no_run
//! use digit_normalizer::{preprocess_rgba, PreprocessOptions};
//!
//! # fn example(rgba: &[u8]) -> Result<(), digit_normalizer::PreprocessError> {
//! let out = preprocess_rgba(rgba, 280, 280, PreprocessOptions::default())?;
//! println!("{}", out.trace);
//! assert_eq!(out.image.as_slice().len(), 784);
//! # Ok(())
//! # }
//! ```
pub mod batch;
pub mod options;

pub use batch::preprocess_batch;
pub use options::PreprocessOptions;

use crate::centroid::align_to_centroid;
use crate::components::ComponentExtractor;
use crate::diagnostics::{DebugTrace, PreprocessReport, TimingBreakdown};
use crate::error::PreprocessError;
use crate::filters::{self, GaussianKernel};
use crate::grayscale::to_grayscale;
use crate::image::PixelBuffer;
use crate::normalize::normalize_canvas;
use crate::resample::{composite_centered, resample_roi};
use crate::threshold::{binarize, decide};
use crate::types::{NormalizedImage, Roi};
use log::debug;
use std::time::Instant;

/// Output of one preprocessing call.
#[derive(Clone, Debug, PartialEq)]
pub struct Preprocessed {
    pub image: NormalizedImage,
    pub trace: DebugTrace,
}

/// Normalizes raw RGBA strokes into 28×28 classifier input.
#[derive(Clone, Debug)]
pub struct Preprocessor {
    options: PreprocessOptions,
    kernel: Option<GaussianKernel>,
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

impl Preprocessor {
    /// Validate `options` and prepare the blur kernel when needed.
    pub fn new(options: PreprocessOptions) -> Result<Self, PreprocessError> {
        options.validate()?;
        let kernel = options.blur.then(|| GaussianKernel::new(options.sigma));
        Ok(Self { options, kernel })
    }

    pub fn options(&self) -> &PreprocessOptions {
        &self.options
    }

    /// Run the pipeline, returning the image and debug trace.
    pub fn process(&self, pixels: &PixelBuffer<'_>) -> Preprocessed {
        self.process_with_diagnostics(pixels).0
    }

    /// Run the pipeline and return both the result and a detailed report.
    pub fn process_with_diagnostics(
        &self,
        pixels: &PixelBuffer<'_>,
    ) -> (Preprocessed, PreprocessReport) {
        let (width, height) = (pixels.w, pixels.h);
        debug!(
            "Preprocessor::process start w={} h={} blur={} center={}",
            width, height, self.options.blur, self.options.center
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let start = Instant::now();
        let gray = to_grayscale(pixels);
        timings.push("grayscale", elapsed_ms(start));

        let start = Instant::now();
        let decision = decide(&gray);
        let mask = binarize(&gray, &decision);
        timings.push("threshold", elapsed_ms(start));

        let start = Instant::now();
        let summary = ComponentExtractor::new(&mask).extract();
        let roi = summary
            .largest
            .map(|c| c.bbox)
            .unwrap_or_else(|| Roi::full(width, height));
        timings.push("components", elapsed_ms(start));
        debug!("roi={} fallback={}", roi, summary.largest.is_none());

        let start = Instant::now();
        let (block, plan) = resample_roi(&gray, &roi, &decision);
        let mut canvas = composite_centered(&block);
        timings.push("resample", elapsed_ms(start));

        let centroid_shift = if self.options.center {
            let start = Instant::now();
            let shift = align_to_centroid(&mut canvas);
            timings.push("centroid", elapsed_ms(start));
            shift.map(|s| [s.x, s.y])
        } else {
            None
        };

        if let Some(kernel) = &self.kernel {
            let start = Instant::now();
            canvas = filters::apply(kernel, &canvas);
            timings.push("blur", elapsed_ms(start));
        }

        let start = Instant::now();
        let (lo, hi) = canvas.min_max().unwrap_or((0.0, 0.0));
        let image = normalize_canvas(canvas);
        timings.push("normalize", elapsed_ms(start));
        timings.total_ms = elapsed_ms(total_start);

        let trace = DebugTrace {
            threshold: decision.threshold,
            invert: decision.invert,
            roi,
            region_width: roi.width(),
            region_height: roi.height(),
            scale: plan.scale as f32,
        };
        debug!("Preprocessor::process done {trace} total_ms={:.3}", timings.total_ms);

        let report = PreprocessReport {
            trace,
            input_width: width,
            input_height: height,
            threshold: decision,
            foreground_pixels: mask.count(),
            component_count: summary.component_count,
            selected_component: summary.largest,
            resampled_width: plan.new_w,
            resampled_height: plan.new_h,
            centroid_shift,
            blurred: self.kernel.is_some(),
            value_range: [lo, hi],
            timings,
        };
        (Preprocessed { image, trace }, report)
    }
}

/// Normalize a raw RGBA8 buffer of `width × height` pixels.
///
/// Fails only when the buffer length does not match the declared size or
/// the options are invalid.
pub fn preprocess_rgba(
    rgba: &[u8],
    width: usize,
    height: usize,
    options: PreprocessOptions,
) -> Result<Preprocessed, PreprocessError> {
    let pixels = PixelBuffer::new(rgba, width, height)?;
    Ok(Preprocessor::new(options)?.process(&pixels))
}

/// Like [`preprocess_rgba`], also returning the detailed report.
pub fn preprocess_with_report(
    rgba: &[u8],
    width: usize,
    height: usize,
    options: PreprocessOptions,
) -> Result<(Preprocessed, PreprocessReport), PreprocessError> {
    let pixels = PixelBuffer::new(rgba, width, height)?;
    Ok(Preprocessor::new(options)?.process_with_diagnostics(&pixels))
}
