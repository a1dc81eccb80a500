//! RGBA → luminance conversion.
//!
//! Uses the Rec. 601 weights `0.299 R + 0.587 G + 0.114 B`, scaled to
//! `[0, 1]`. Alpha is ignored: a transparent stroke pixel contributes its
//! colour channels as-is.
use crate::image::{ImageF32, ImageViewMut, PixelBuffer};

const WEIGHT_R: f64 = 0.299;
const WEIGHT_G: f64 = 0.587;
const WEIGHT_B: f64 = 0.114;

/// Luminance plane in `[0, 1]`, same size as the source buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct GrayscaleImage {
    image: ImageF32,
}

impl GrayscaleImage {
    /// Wrap a plane whose values are already in `[0, 1]`.
    pub fn from_image(image: ImageF32) -> Self {
        debug_assert!(image.data.iter().all(|v| (0.0..=1.0).contains(v)));
        Self { image }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.image.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.image.h
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.image.get(x, y)
    }

    pub fn as_image(&self) -> &ImageF32 {
        &self.image
    }

    pub fn values(&self) -> &[f32] {
        &self.image.data
    }

    /// Mean intensity over all pixels, accumulated in f64.
    pub fn mean(&self) -> f64 {
        let n = self.image.data.len();
        if n == 0 {
            return 0.0;
        }
        let sum: f64 = self.image.data.iter().map(|&v| v as f64).sum();
        sum / n as f64
    }
}

/// Weighted sum and scaling run in f64; only the stored plane is f32.
#[inline]
fn luminance(px: &[u8]) -> f32 {
    let v = WEIGHT_R * px[0] as f64 + WEIGHT_G * px[1] as f64 + WEIGHT_B * px[2] as f64;
    (v / 255.0).clamp(0.0, 1.0) as f32
}

/// Convert an RGBA buffer to a grayscale plane.
pub fn to_grayscale(pixels: &PixelBuffer<'_>) -> GrayscaleImage {
    let mut out = ImageF32::new(pixels.w, pixels.h);
    for y in 0..pixels.h {
        let src = pixels.row_bytes(y);
        let dst = out.row_mut(y);
        for (dst_px, rgba) in dst.iter_mut().zip(src.chunks_exact(4)) {
            *dst_px = luminance(rgba);
        }
    }
    GrayscaleImage { image: out }
}
