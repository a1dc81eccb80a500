//! Diagnostics produced by every preprocessing call.
//!
//! [`DebugTrace`] is the stable one-line contract shown by front ends and
//! asserted by tests. [`PreprocessReport`] carries the richer per-stage data
//! and timings for tools that dump JSON.
pub mod timing;
pub mod trace;

pub use timing::{StageTiming, TimingBreakdown};
pub use trace::DebugTrace;

use crate::components::Component;
use crate::threshold::ThresholdDecision;
use serde::Serialize;

/// Structured record of one pipeline run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreprocessReport {
    pub trace: DebugTrace,
    pub input_width: usize,
    pub input_height: usize,
    pub threshold: ThresholdDecision,
    pub foreground_pixels: usize,
    pub component_count: usize,
    /// `None` when the ROI fell back to the full image.
    pub selected_component: Option<Component>,
    pub resampled_width: usize,
    pub resampled_height: usize,
    /// Shift applied by the centroid aligner; `None` when alignment was
    /// disabled or the canvas had no mass.
    pub centroid_shift: Option<[i32; 2]>,
    pub blurred: bool,
    /// Canvas `(min, max)` before normalization.
    pub value_range: [f32; 2],
    pub timings: TimingBreakdown,
}
