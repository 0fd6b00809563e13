//! Lane-Corridor Geometry Pipeline
//!
//! Per-frame, synchronous transformation chain:
//! edge extraction, region-of-interest masking, probabilistic line
//! detection, midpoint clustering, lane-pair selection, outline
//! extrapolation and alignment scoring.
//!
//! Every stage is a bounded, pure function of its input. An empty
//! result at any stage ("no geometry found") is a normal steady-state
//! outcome, represented as `None` or an empty collection, never as an
//! error.

pub mod clahe;
pub mod cluster;
pub mod config;
pub mod edge;
pub mod hough;
pub mod morphology;
pub mod outline;
pub mod roi;
pub mod score;
pub mod select;
pub mod types;

pub use cluster::merge_close_segments;
pub use config::PipelineConfig;
pub use outline::extrapolate_outline;
pub use score::evaluate_score;
pub use select::{select_lane_pair, LanePair};
pub use types::{LineCluster, LineSegment, RoadOutline};

use frame_ingest::RgbFrame;
use tracing::debug;

/// Run detection stages over one frame: edge map, mask, line segments,
/// cluster filtering and lane-pair selection.
///
/// `None` means no corridor was found this frame.
pub fn detect_lane_pair(frame: &RgbFrame, config: &PipelineConfig) -> Option<LanePair> {
    let gray = frame.to_grayscale();
    let edges = edge::edge_map(&gray, config);
    let masked = roi::mask_region(&edges, config);
    let segments = hough::detect_segments(&masked, config);
    if segments.is_empty() {
        debug!("No line segments detected");
        return None;
    }
    debug!("Detected {} raw segments", segments.len());
    select_lane_pair(&segments, frame.height, config)
}

/// Full stateless geometry pass: lane pair, outline and score.
///
/// Returns `(outline, score)`; both are `None` when no plausible
/// corridor exists in the frame.
pub fn analyze_geometry(
    frame: &RgbFrame,
    config: &PipelineConfig,
) -> (Option<RoadOutline>, Option<f32>) {
    let outline = detect_lane_pair(frame, config)
        .and_then(|pair| extrapolate_outline(&pair, frame.height, config));
    let score = outline.as_ref().map(|o| evaluate_score(o, frame.width));
    (outline, score)
}
