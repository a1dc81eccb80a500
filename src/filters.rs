//! Separable Gaussian smoothing.
//!
//! The kernel has radius `max(1, round(2.5·σ))` and taps
//! `exp(−i²/(2σ²))` normalized to sum to one. It is applied as a horizontal
//! pass followed by a vertical pass; samples outside the image clamp to the
//! nearest edge pixel.
use crate::image::{ImageF32, ImageView, ImageViewMut};
use crate::types::round_half_up;

/// Default smoothing strength.
pub const DEFAULT_SIGMA: f32 = 0.8;

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). Length is odd and the
    /// centre tap sits at `len / 2`.
    fn taps(&self) -> &[f32];

    fn radius(&self) -> usize {
        self.taps().len() / 2
    }
}

/// Normalized odd-length Gaussian kernel.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    taps: Vec<f32>,
}

impl GaussianKernel {
    /// Build the kernel for `sigma` (> 0).
    pub fn new(sigma: f32) -> Self {
        assert!(sigma > 0.0 && sigma.is_finite(), "sigma must be positive");
        let radius = (round_half_up(2.5 * sigma as f64) as usize).max(1);
        let two_sigma_sq = 2.0 * sigma * sigma;
        let mut taps: Vec<f32> = (0..=2 * radius)
            .map(|k| {
                let i = k as f32 - radius as f32;
                (-(i * i) / two_sigma_sq).exp()
            })
            .collect();
        let sum: f32 = taps.iter().sum();
        for t in &mut taps {
            *t /= sum;
        }
        Self { taps }
    }
}

impl Default for GaussianKernel {
    fn default() -> Self {
        Self::new(DEFAULT_SIGMA)
    }
}

impl SeparableFilter for GaussianKernel {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}

/// Apply `filter` horizontally, then vertically, with clamp-to-edge borders.
pub fn apply<F: SeparableFilter + ?Sized>(filter: &F, src: &ImageF32) -> ImageF32 {
    let taps = filter.taps();
    assert!(taps.len() % 2 == 1, "filter must have an odd number of taps");
    let radius = filter.radius();
    let (w, h) = (src.w, src.h);

    let mut tmp = ImageF32::new(w, h);
    for y in 0..h {
        filter_row(src.row(y), tmp.row_mut(y), taps, radius);
    }

    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        let dst = out.row_mut(y);
        for (k, &tap) in taps.iter().enumerate() {
            let sy = clamp_index(y as isize + k as isize - radius as isize, h);
            for (d, &s) in dst.iter_mut().zip(tmp.row(sy)) {
                *d += tap * s;
            }
        }
    }
    out
}

fn filter_row(row: &[f32], out: &mut [f32], taps: &[f32], radius: usize) {
    let len = row.len();
    for (x, dst_px) in out.iter_mut().enumerate() {
        let mut acc = 0.0f32;
        for (k, &tap) in taps.iter().enumerate() {
            let idx = clamp_index(x as isize + k as isize - radius as isize, len);
            acc += tap * row[idx];
        }
        *dst_px = acc;
    }
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 {
        return 0;
    }
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
