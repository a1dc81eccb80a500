use crate::error::PreprocessError;
use crate::filters::DEFAULT_SIGMA;
use serde::{Deserialize, Serialize};

/// Switches controlling the optional stages.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessOptions {
    /// Apply separable Gaussian smoothing before normalization.
    pub blur: bool,
    /// Recenter the canvas on its intensity centroid.
    pub center: bool,
    /// Gaussian sigma used when `blur` is set.
    pub sigma: f32,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            blur: false,
            center: true,
            sigma: DEFAULT_SIGMA,
        }
    }
}

impl PreprocessOptions {
    pub fn new(blur: bool, center: bool) -> Self {
        Self {
            blur,
            center,
            ..Default::default()
        }
    }

    pub fn with_sigma(mut self, sigma: f32) -> Self {
        self.sigma = sigma;
        self
    }

    pub fn validate(&self) -> Result<(), PreprocessError> {
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(PreprocessError::InvalidOptions(format!(
                "sigma must be a positive finite number, got {}",
                self.sigma
            )));
        }
        Ok(())
    }
}
