//! Ratio-preserving nearest-neighbour resampling and canvas composition.
//!
//! The region of interest is cropped in ink polarity, scaled so its longest
//! side becomes [`TARGET_LONG_SIDE`], and pasted into the middle of a
//! zero-filled [`CANVAS_SIZE`]² canvas. No interpolation: each destination
//! pixel copies the nearest source pixel.
use crate::grayscale::GrayscaleImage;
use crate::image::{ImageF32, ImageView, ImageViewMut};
use crate::threshold::ThresholdDecision;
use crate::types::{round_half_up, Roi, CANVAS_SIZE, TARGET_LONG_SIDE};
use log::debug;

/// Size change applied to the region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePlan {
    pub scale: f64,
    pub new_w: usize,
    pub new_h: usize,
}

impl ScalePlan {
    /// Scale a `w × h` region so that its longest side equals `target`.
    pub fn fit(w: usize, h: usize, target: usize) -> Self {
        let long = w.max(h).max(1);
        let scale = target as f64 / long as f64;
        let new_w = (round_half_up(w as f64 * scale) as usize).max(1);
        let new_h = (round_half_up(h as f64 * scale) as usize).max(1);
        Self {
            scale,
            new_w,
            new_h,
        }
    }
}

/// Copy the ROI out of `gray` in ink polarity (bright ink, dark paper).
pub fn crop_ink(gray: &GrayscaleImage, roi: &Roi, decision: &ThresholdDecision) -> ImageF32 {
    assert!(
        roi.fits(gray.width(), gray.height()),
        "roi {roi} outside {}x{} image",
        gray.width(),
        gray.height()
    );
    let mut crop = ImageF32::new(roi.width(), roi.height());
    for (yy, dst) in (roi.y0..=roi.y1).zip(0..crop.h) {
        let src = &gray.as_image().row(yy)[roi.x0..=roi.x1];
        for (out, &v) in crop.row_mut(dst).iter_mut().zip(src) {
            *out = decision.ink(v);
        }
    }
    crop
}

/// Nearest-neighbour resample of `src` according to `plan`.
pub fn resample_nearest(src: &ImageF32, plan: &ScalePlan) -> ImageF32 {
    let mut out = ImageF32::new(plan.new_w, plan.new_h);
    let max_sx = src.w - 1;
    let max_sy = src.h - 1;
    for yy in 0..plan.new_h {
        let sy = (round_half_up(yy as f64 / plan.scale) as usize).min(max_sy);
        let src_row = src.row(sy);
        for (xx, dst_px) in out.row_mut(yy).iter_mut().enumerate() {
            let sx = (round_half_up(xx as f64 / plan.scale) as usize).min(max_sx);
            *dst_px = src_row[sx];
        }
    }
    out
}

/// Crop and rescale the ROI; returns the resampled block and the plan used.
pub fn resample_roi(
    gray: &GrayscaleImage,
    roi: &Roi,
    decision: &ThresholdDecision,
) -> (ImageF32, ScalePlan) {
    let crop = crop_ink(gray, roi, decision);
    let plan = ScalePlan::fit(crop.w, crop.h, TARGET_LONG_SIDE);
    debug!(
        "resample: {}x{} -> {}x{} scale={:.3}",
        crop.w, crop.h, plan.new_w, plan.new_h, plan.scale
    );
    (resample_nearest(&crop, &plan), plan)
}

/// Top-left offset that centres a `w × h` block on the canvas.
pub fn center_offset(w: usize, h: usize) -> (usize, usize) {
    (
        CANVAS_SIZE.saturating_sub(w) / 2,
        CANVAS_SIZE.saturating_sub(h) / 2,
    )
}

/// Paste `block` into the centre of a zero-initialized canvas.
pub fn composite_centered(block: &ImageF32) -> ImageF32 {
    assert!(
        block.w <= CANVAS_SIZE && block.h <= CANVAS_SIZE,
        "block {}x{} larger than canvas",
        block.w,
        block.h
    );
    let mut canvas = ImageF32::new(CANVAS_SIZE, CANVAS_SIZE);
    let (off_x, off_y) = center_offset(block.w, block.h);
    for (y, src) in block.rows().enumerate() {
        canvas.row_mut(off_y + y)[off_x..off_x + block.w].copy_from_slice(src);
    }
    canvas
}
