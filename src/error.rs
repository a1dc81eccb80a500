//! Error type returned by the preprocessing entry points.
//!
//! Well-formed input never fails; every variant describes a broken caller
//! contract (buffer shape or option values).
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreprocessError {
    #[error(
        "RGBA buffer holds {actual} bytes, expected {expected} for a {width}x{height} image"
    )]
    BufferSize {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("image must have non-zero dimensions, got {width}x{height}")]
    EmptyImage { width: usize, height: usize },

    #[error("invalid preprocessing options: {0}")]
    InvalidOptions(String),
}
