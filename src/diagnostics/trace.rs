use crate::types::Roi;
use serde::Serialize;
use std::fmt;

/// Summary of the decisions taken for one image.
///
/// `Display` renders the fixed diagnostic line
/// `th=0.000 invert=true roi=[10,10..13,13] w×h=4×4 scale=5.000`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugTrace {
    pub threshold: f32,
    pub invert: bool,
    pub roi: Roi,
    pub region_width: usize,
    pub region_height: usize,
    pub scale: f32,
}

impl fmt::Display for DebugTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "th={:.3} invert={} roi={} w×h={}×{} scale={:.3}",
            self.threshold,
            self.invert,
            self.roi,
            self.region_width,
            self.region_height,
            self.scale
        )
    }
}
