//! Borrowed RGBA8 input buffer.
use crate::error::PreprocessError;

/// Bytes per RGBA8 pixel.
pub const CHANNELS: usize = 4;

/// Immutable view over `w × h` RGBA8 pixels in row-major order, channel
/// order R, G, B, A.
#[derive(Clone, Copy, Debug)]
pub struct PixelBuffer<'a> {
    pub w: usize,
    pub h: usize,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Validate the buffer shape. A length other than `w·h·4` or a zero
    /// dimension is a caller contract violation.
    pub fn new(data: &'a [u8], w: usize, h: usize) -> Result<Self, PreprocessError> {
        if w == 0 || h == 0 {
            return Err(PreprocessError::EmptyImage {
                width: w,
                height: h,
            });
        }
        let expected = w
            .checked_mul(h)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(PreprocessError::BufferSize {
                width: w,
                height: h,
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if data.len() != expected {
            return Err(PreprocessError::BufferSize {
                width: w,
                height: h,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { w, h, data })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.w + x) * CHANNELS;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Row `y` as `w·4` interleaved bytes.
    #[inline]
    pub fn row_bytes(&self, y: usize) -> &'a [u8] {
        let start = y * self.w * CHANNELS;
        &self.data[start..start + self.w * CHANNELS]
    }
}
