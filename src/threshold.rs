//! Global Otsu threshold, polarity decision and binarization.
//!
//! Intensities are quantized to 256 bins (`floor(gray·255)`, clamped). For
//! every candidate bin `t` the pixels split into a dark class (bins `<= t`)
//! and a bright class (bins `> t`); the split with the largest between-class
//! variance `wB·wF·(mB − mF)²` wins, first maximum on ties.
//!
//! Polarity is decided from the global mean alone: a mean above 0.5 means a
//! light background with dark ink, so the dark class becomes foreground.
//! The binarizer classifies on the same bins as the histogram, which keeps
//! pixels sitting exactly on the threshold bin in the class Otsu put them in.
use crate::grayscale::GrayscaleImage;
use crate::image::BinaryMask;
use log::debug;
use serde::Serialize;

pub const BINS: usize = 256;

/// Mean intensity above which the image is read as dark ink on light paper.
pub const INVERT_MEAN: f64 = 0.5;

/// 256-bin intensity histogram.
#[derive(Clone, Debug)]
pub struct Histogram {
    pub counts: [u32; BINS],
    pub total: u64,
}

impl Histogram {
    pub fn from_gray(gray: &GrayscaleImage) -> Self {
        let mut counts = [0u32; BINS];
        for &v in gray.values() {
            counts[quantize(v)] += 1;
        }
        Self {
            counts,
            total: gray.values().len() as u64,
        }
    }

    /// Number of bins with at least one sample.
    pub fn occupied_bins(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Otsu split bin. Returns 0 when no split exists (fewer than two
    /// occupied bins).
    pub fn otsu_bin(&self) -> u8 {
        let total = self.total as f64;
        let sum_total: f64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(i, &c)| i as f64 * c as f64)
            .sum();

        let mut sum_b = 0f64;
        let mut w_b = 0f64;
        let mut best_var = -1f64;
        let mut best_t = 0u8;

        for (t, &c) in self.counts.iter().enumerate() {
            w_b += c as f64;
            if w_b == 0.0 {
                continue;
            }
            let w_f = total - w_b;
            if w_f == 0.0 {
                break;
            }

            sum_b += t as f64 * c as f64;
            let m_b = sum_b / w_b;
            let m_f = (sum_total - sum_b) / w_f;

            let var_between = w_b * w_f * (m_b - m_f) * (m_b - m_f);
            if var_between > best_var {
                best_var = var_between;
                best_t = t as u8;
            }
        }

        best_t
    }
}

/// Histogram bin of an intensity in `[0, 1]`.
#[inline]
pub fn quantize(v: f32) -> usize {
    ((v as f64 * 255.0).floor().max(0.0) as usize).min(BINS - 1)
}

/// Threshold and polarity decision for one image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdDecision {
    /// Otsu bin `t`; the dark class is bins `0..=t`.
    pub bin: u8,
    /// `t / 255`.
    pub threshold: f32,
    /// Mean intensity of the whole image.
    pub mean: f64,
    /// True when dark pixels are ink.
    pub invert: bool,
}

impl ThresholdDecision {
    /// Foreground test for a single intensity.
    #[inline]
    pub fn is_foreground(&self, v: f32) -> bool {
        let dark = quantize(v) <= self.bin as usize;
        if self.invert {
            dark
        } else {
            !dark
        }
    }

    /// Intensity in ink polarity: bright ink on a dark background.
    #[inline]
    pub fn ink(&self, v: f32) -> f32 {
        if self.invert {
            1.0 - v
        } else {
            v
        }
    }
}

/// Compute the Otsu threshold and polarity for `gray`.
pub fn decide(gray: &GrayscaleImage) -> ThresholdDecision {
    let hist = Histogram::from_gray(gray);
    let bin = hist.otsu_bin();
    let mean = gray.mean();
    let decision = ThresholdDecision {
        bin,
        threshold: bin as f32 / 255.0,
        mean,
        invert: mean > INVERT_MEAN,
    };
    debug!(
        "threshold: bin={} th={:.3} mean={:.3} invert={} occupied_bins={}",
        decision.bin,
        decision.threshold,
        decision.mean,
        decision.invert,
        hist.occupied_bins()
    );
    decision
}

/// Apply a threshold decision to every pixel.
pub fn binarize(gray: &GrayscaleImage, decision: &ThresholdDecision) -> BinaryMask {
    BinaryMask::from_fn(gray.width(), gray.height(), |x, y| {
        decision.is_foreground(gray.get(x, y))
    })
}
