//! Intensity-weighted centroid and integer recentering of the canvas.
use crate::image::{ImageF32, ImageView};
use crate::types::{round_half_up, CANVAS_SIZE};
use log::debug;
use nalgebra::Vector2;

/// Intensity centroid of an image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Centroid {
    /// `(Σ v·x, Σ v·y) / Σ v`
    pub position: Vector2<f64>,
    /// `Σ v`
    pub mass: f64,
}

/// Centroid of `img`, or `None` when its total mass is not positive.
pub fn compute_centroid(img: &ImageF32) -> Option<Centroid> {
    let mut mass = 0f64;
    let mut moment = Vector2::<f64>::zeros();
    for (y, row) in img.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let v = v as f64;
            mass += v;
            moment += Vector2::new(x as f64, y as f64) * v;
        }
    }
    if mass <= 0.0 {
        return None;
    }
    Some(Centroid {
        position: moment / mass,
        mass,
    })
}

/// Integer shift that moves `centroid` onto the canvas centre `(14, 14)`.
pub fn center_shift(centroid: &Centroid) -> Vector2<i32> {
    let target = (CANVAS_SIZE / 2) as f64;
    let delta = Vector2::repeat(target) - centroid.position;
    delta.map(|d| round_half_up(d) as i32)
}

/// Translate `img` by `shift`; pixels leaving the image are dropped.
pub fn translate(img: &ImageF32, shift: Vector2<i32>) -> ImageF32 {
    let mut out = ImageF32::new(img.w, img.h);
    let (w, h) = (img.w as i64, img.h as i64);
    for (y, row) in img.rows().enumerate() {
        let ny = y as i64 + shift.y as i64;
        if ny < 0 || ny >= h {
            continue;
        }
        for (x, &v) in row.iter().enumerate() {
            let nx = x as i64 + shift.x as i64;
            if nx < 0 || nx >= w {
                continue;
            }
            out.set(nx as usize, ny as usize, v);
        }
    }
    out
}

/// Recenter `canvas` on its intensity centroid. Returns the applied shift,
/// or `None` when the canvas is empty and was left untouched.
pub fn align_to_centroid(canvas: &mut ImageF32) -> Option<Vector2<i32>> {
    let centroid = compute_centroid(canvas)?;
    let shift = center_shift(&centroid);
    debug!(
        "centroid: ({:.3}, {:.3}) mass={:.3} shift=({}, {})",
        centroid.position.x, centroid.position.y, centroid.mass, shift.x, shift.y
    );
    if shift != Vector2::zeros() {
        *canvas = translate(canvas, shift);
    }
    Some(shift)
}
