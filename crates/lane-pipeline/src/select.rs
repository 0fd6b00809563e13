//! Lane-pair selection
//!
//! Filters raw segments down to plausible boundary candidates, merges
//! them into clusters and picks the two rightmost as the corridor
//! boundary. There is no explicit left/right model: the corridor is
//! always the region between the two rightmost surviving clusters.

use crate::cluster::merge_close_segments;
use crate::config::PipelineConfig;
use crate::types::{LineCluster, LineSegment};
use std::cmp::Ordering;
use tracing::debug;

/// The two rightmost boundary clusters, ordered by horizontal midpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanePair {
    /// Rightmost cluster
    pub rightmost: LineCluster,
    /// Second-rightmost cluster
    pub second: LineCluster,
}

/// Select the corridor boundary pair from raw detected segments.
///
/// Segments must lie fully within the ROI row range and carry a dy/dx
/// slope above `slope_min_positive` or below `slope_max_negative`
/// (asymmetric bounds; the two boundaries have different
/// characteristic slopes). Vertical segments carry no dy/dx slope and
/// are excluded. `None` when fewer than two clusters survive.
pub fn select_lane_pair(
    segments: &[LineSegment],
    frame_height: u32,
    config: &PipelineConfig,
) -> Option<LanePair> {
    let roi_top = config.top_row(frame_height);

    let filtered: Vec<LineSegment> = segments
        .iter()
        .copied()
        .filter(|s| s.y1 >= roi_top && s.y2 >= roi_top)
        .filter(|s| match s.slope() {
            Some(m) => m > config.slope_min_positive || m < config.slope_max_negative,
            None => false,
        })
        .collect();

    if filtered.is_empty() {
        return None;
    }

    let mut clusters = merge_close_segments(&filtered, config.cluster_distance);
    if clusters.len() < 2 {
        debug!("Only {} boundary cluster(s); no corridor", clusters.len());
        return None;
    }

    clusters.sort_by(|a, b| b.mid_x.partial_cmp(&a.mid_x).unwrap_or(Ordering::Equal));
    Some(LanePair {
        rightmost: clusters[0],
        second: clusters[1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: f32, y1: f32, x2: f32, y2: f32) -> LineSegment {
        LineSegment::new(x1, y1, x2, y2)
    }

    fn config() -> PipelineConfig {
        PipelineConfig::default()
    }

    #[test]
    fn test_needs_two_clusters() {
        // One steep segment inside the ROI of a 960x540 frame
        let segments = [seg(500.0, 510.0, 520.0, 324.0)];
        assert!(select_lane_pair(&segments, 540, &config()).is_none());
    }

    #[test]
    fn test_rejects_segments_above_roi() {
        // Second segment pokes above row 324 (540 * 0.6)
        let segments = [
            seg(500.0, 510.0, 520.0, 324.0),
            seg(700.0, 510.0, 640.0, 300.0),
        ];
        assert!(select_lane_pair(&segments, 540, &config()).is_none());
    }

    #[test]
    fn test_excludes_vertical_and_shallow_slopes() {
        let segments = [
            // Vertical: no dy/dx slope
            seg(400.0, 510.0, 400.0, 330.0),
            // Shallow: slope -0.2, outside both bounds
            seg(500.0, 400.0, 600.0, 380.0),
            // Shallow positive but above 0.05 passes
            seg(600.0, 510.0, 660.0, 516.0),
        ];
        let pair = select_lane_pair(&segments, 540, &config());
        // Only one survivor; no corridor
        assert!(pair.is_none());
    }

    #[test]
    fn test_picks_two_rightmost_clusters() {
        let segments = [
            seg(200.0, 510.0, 230.0, 330.0),
            seg(500.0, 510.0, 530.0, 330.0),
            seg(700.0, 510.0, 660.0, 330.0),
        ];
        let pair = select_lane_pair(&segments, 540, &config()).unwrap();
        assert_eq!(pair.rightmost.mid_x, 680.0);
        assert_eq!(pair.second.mid_x, 515.0);
    }

    #[test]
    fn test_scenario_shallow_boundaries_still_selected() {
        // Steepness is judged later by the extrapolator; selection only
        // filters dy/dx slopes.
        let segments = [
            seg(400.0, 510.0, 430.0, 330.0),
            seg(600.0, 510.0, 560.0, 330.0),
        ];
        let pair = select_lane_pair(&segments, 540, &config()).unwrap();
        assert_eq!(pair.rightmost.mid_x, 580.0);
        assert_eq!(pair.second.mid_x, 415.0);
    }
}
