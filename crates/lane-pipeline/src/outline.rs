//! Corridor outline extrapolation
//!
//! Projects the two selected boundary lines to the fixed near/far scan
//! rows and rejects corridors that cannot be a real lane: boundaries
//! too close to horizontal, or a corridor implausibly narrow or wide
//! for the expected lane width at this camera scale.

use crate::config::PipelineConfig;
use crate::select::LanePair;
use crate::types::RoadOutline;
use tracing::debug;

/// Extrapolate the boundary pair to a road outline.
///
/// Uses the near-vertical parameterization `x(y) = x1 + (dx/dy)(y -
/// y1)`. Returns `None` when either boundary has `|dx/dy| <=
/// min_boundary_slope`, is horizontal (no dx/dy slope), or when the
/// bottom-row corridor width falls outside the configured bounds.
pub fn extrapolate_outline(
    pair: &LanePair,
    frame_height: u32,
    config: &PipelineConfig,
) -> Option<RoadOutline> {
    let r = pair.rightmost.segment;
    let s = pair.second.segment;

    let slope_r = r.inverse_slope()?;
    let slope_s = s.inverse_slope()?;
    if slope_r.abs() <= config.min_boundary_slope || slope_s.abs() <= config.min_boundary_slope {
        debug!(
            "Boundary slopes {:.3}/{:.3} below steepness bound",
            slope_r, slope_s
        );
        return None;
    }

    let bottom_y = config.bottom_row(frame_height);
    let top_y = config.top_row(frame_height);

    let bottom_x_r = r.x1 + slope_r * (bottom_y - r.y1);
    let bottom_x_s = s.x1 + slope_s * (bottom_y - s.y1);
    let top_x_r = r.x1 + slope_r * (top_y - r.y1);
    let top_x_s = s.x1 + slope_s * (top_y - s.y1);

    let lane_width = (bottom_x_r - bottom_x_s).abs();
    if lane_width <= config.corridor_width_min || lane_width >= config.corridor_width_max {
        debug!("Corridor width {:.1}px out of bounds", lane_width);
        return None;
    }

    Some(RoadOutline {
        bottom_x_r,
        bottom_x_s,
        bottom_y,
        top_x_r,
        top_x_s,
        top_y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LineCluster, LineSegment};

    fn pair(r: LineSegment, s: LineSegment) -> LanePair {
        LanePair {
            rightmost: LineCluster::from_segment(r),
            second: LineCluster::from_segment(s),
        }
    }

    fn config() -> PipelineConfig {
        PipelineConfig::default()
    }

    #[test]
    fn test_shallow_boundaries_rejected() {
        // 960x540 frame; slopes dx/dy = 30/-180 and -40/-180, both
        // magnitudes below 0.5
        let p = pair(
            LineSegment::new(600.0, 510.0, 560.0, 330.0),
            LineSegment::new(400.0, 510.0, 430.0, 330.0),
        );
        assert!(extrapolate_outline(&p, 540, &config()).is_none());
    }

    #[test]
    fn test_horizontal_boundary_rejected() {
        let p = pair(
            LineSegment::new(600.0, 400.0, 700.0, 400.0),
            LineSegment::new(400.0, 510.0, 300.0, 330.0),
        );
        assert!(extrapolate_outline(&p, 540, &config()).is_none());
    }

    #[test]
    fn test_narrow_corridor_rejected() {
        // Steep boundaries 80px apart at the bottom row
        let p = pair(
            LineSegment::new(480.0, 510.0, 330.0, 330.0),
            LineSegment::new(400.0, 510.0, 250.0, 330.0),
        );
        assert!(extrapolate_outline(&p, 540, &config()).is_none());
    }

    #[test]
    fn test_wide_corridor_rejected() {
        let p = pair(
            LineSegment::new(900.0, 510.0, 750.0, 330.0),
            LineSegment::new(300.0, 510.0, 150.0, 330.0),
        );
        assert!(extrapolate_outline(&p, 540, &config()).is_none());
    }

    #[test]
    fn test_valid_corridor_extrapolates_to_scan_rows() {
        // 960x540, ratio 0.6: bottom row 510, top row 324.
        // Boundaries with dx/dy = +0.6 and -0.6, 200px apart at y=510.
        let r = LineSegment::new(700.0, 510.0, 610.0, 360.0);
        let s = LineSegment::new(500.0, 510.0, 590.0, 360.0);
        let outline = extrapolate_outline(&pair(r, s), 540, &config()).unwrap();

        assert_eq!(outline.bottom_y, 510.0);
        assert_eq!(outline.top_y, 324.0);
        assert!((outline.bottom_x_r - 700.0).abs() < 1e-3);
        assert!((outline.bottom_x_s - 500.0).abs() < 1e-3);
        // x(324) = x(510) + slope * (324 - 510)
        assert!((outline.top_x_r - (700.0 + 0.6 * -186.0)).abs() < 1e-3);
        assert!((outline.top_x_s - (500.0 - 0.6 * -186.0)).abs() < 1e-3);
        assert!((outline.bottom_width() - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_width_measured_at_bottom_row_not_endpoints() {
        // Segment endpoints sit 500px apart, which would fail the
        // width bound; the corridor converges to ~200px at the bottom
        // scan row and is accepted.
        let r = LineSegment::new(600.0, 300.0, 707.0, 150.0);
        let s = LineSegment::new(100.0, 300.0, -7.0, 150.0);
        let outline = extrapolate_outline(&pair(r, s), 540, &config()).unwrap();
        assert_eq!(outline.bottom_y, 510.0);
        assert!((outline.bottom_width() - 200.4).abs() < 1.0);
    }
}
