use serde::Serialize;
use std::fmt;

/// Side length of the square output canvas.
pub const CANVAS_SIZE: usize = 28;
/// Number of values in a normalized image (`CANVAS_SIZE²`).
pub const CANVAS_PIXELS: usize = CANVAS_SIZE * CANVAS_SIZE;
/// Longest side of the resampled region before it is pasted on the canvas.
pub const TARGET_LONG_SIDE: usize = 20;
/// Lower bound on the min-max range used by the normalizer.
pub const RANGE_EPSILON: f32 = 1e-6;

/// Inclusive bounding box `(x0, y0)..(x1, y1)` in source pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Roi {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Roi {
    /// Box covering a whole `width × height` image. Both dimensions must be >= 1.
    pub fn full(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            x0: 0,
            y0: 0,
            x1: width - 1,
            y1: height - 1,
        }
    }

    /// Degenerate box around a single pixel, grown with [`Roi::include`].
    pub fn at(x: usize, y: usize) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x,
            y1: y,
        }
    }

    #[inline]
    pub fn include(&mut self, x: usize, y: usize) {
        self.x0 = self.x0.min(x);
        self.y0 = self.y0.min(y);
        self.x1 = self.x1.max(x);
        self.y1 = self.y1.max(y);
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.x1 - self.x0 + 1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.y1 - self.y0 + 1
    }

    /// True when the box lies inside a `width × height` image.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1 && self.x1 < width && self.y1 < height
    }
}

impl fmt::Display for Roi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}..{},{}]", self.x0, self.y0, self.x1, self.y1)
    }
}

/// Final 28×28 feature image, row-major, every value in `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedImage {
    data: Vec<f32>,
}

impl NormalizedImage {
    /// Wrap `CANVAS_PIXELS` already-normalized values.
    pub(crate) fn from_values(data: Vec<f32>) -> Self {
        assert_eq!(
            data.len(),
            CANVAS_PIXELS,
            "normalized image must hold exactly {CANVAS_PIXELS} values"
        );
        Self { data }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * CANVAS_SIZE + x]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

/// Rounds halves towards positive infinity (`floor(v + 0.5)`).
///
/// Shift and size arithmetic relies on `-0.5 → 0`, which `f64::round` does
/// not give. Takes f64 so that ties computed from integer ratios stay exact.
#[inline]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}
