//! Min-max rescaling to `[0, 1]`.
use crate::image::ImageF32;
use crate::types::{NormalizedImage, CANVAS_PIXELS, CANVAS_SIZE, RANGE_EPSILON};

/// Rescale `values` in place with `(v − min) / max(max − min, ε)`.
///
/// A flat input maps to all zeros. Returns the `(min, max)` seen before
/// rescaling, or `None` for an empty slice.
pub fn normalize_min_max(values: &mut [f32]) -> Option<(f32, f32)> {
    let first = *values.first()?;
    let (min, max) = values
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = (max - min).max(RANGE_EPSILON);
    for v in values.iter_mut() {
        *v = ((*v - min) / range).clamp(0.0, 1.0);
    }
    Some((min, max))
}

/// Normalize a 28×28 canvas into the final feature image.
pub fn normalize_canvas(canvas: ImageF32) -> NormalizedImage {
    assert!(
        canvas.w == CANVAS_SIZE && canvas.h == CANVAS_SIZE,
        "canvas must be {CANVAS_SIZE}x{CANVAS_SIZE}, got {}x{}",
        canvas.w,
        canvas.h
    );
    let mut values = canvas.data;
    values.truncate(CANVAS_PIXELS);
    normalize_min_max(&mut values);
    NormalizedImage::from_values(values)
}
