//! Pipeline configuration
//!
//! One canonical constant set for the whole detection chain. Earlier
//! prototypes of this system carried diverging thresholds between the
//! video and single-image paths; these values are the reconciled set
//! and every stage reads them from here.

use serde::{Deserialize, Serialize};

/// Lane pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Fraction of the image height, measured from the bottom, that is
    /// searched for lane geometry. Also fixes the far scan row at
    /// `height * roi_height_ratio`.
    pub roi_height_ratio: f32,

    /// Side inset of the ROI trapezoid at the bottom row (px)
    pub roi_bottom_inset: u32,

    /// Side inset of the ROI trapezoid at the far row (px)
    pub roi_top_inset: u32,

    /// Gaussian blur sigma (the 7x7-kernel equivalent)
    pub blur_sigma: f32,

    /// CLAHE clip limit
    pub clahe_clip_limit: f32,

    /// CLAHE tile grid size per axis
    pub clahe_tiles: u32,

    /// Square structuring element side for the dashed-marking closing pass
    pub closing_kernel: u32,

    /// Canny hysteresis thresholds
    pub canny_low: f32,
    pub canny_high: f32,

    /// Bridge kernel (width, height) applied to the masked edge map
    /// before line detection; tall to merge fragments along the
    /// near-vertical lane direction.
    pub bridge_kernel: (u32, u32),

    /// Hough accumulator vote threshold
    pub hough_threshold: i32,

    /// Minimum accepted segment extent (px, per axis)
    pub hough_min_length: u32,

    /// Maximum bridged gap when walking a candidate line (px)
    pub hough_max_gap: u32,

    /// Midpoint distance under which segments merge into one cluster (px)
    pub cluster_distance: f32,

    /// Slope filter lower bound for positive dy/dx slopes
    pub slope_min_positive: f32,

    /// Slope filter upper bound for negative dy/dx slopes.
    /// Asymmetric with `slope_min_positive` on purpose: the camera sits
    /// closer to one corridor edge, so the two boundaries have
    /// different characteristic slopes.
    pub slope_max_negative: f32,

    /// Minimum |dx/dy| for a plausible boundary line
    pub min_boundary_slope: f32,

    /// Corridor width bounds at the bottom scan row (px, exclusive)
    pub corridor_width_min: f32,
    pub corridor_width_max: f32,

    /// Bottom scan row offset from the image bottom (px)
    pub bottom_row_offset: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            roi_height_ratio: 0.6,
            roi_bottom_inset: 50,
            roi_top_inset: 100,
            // sigma for a 7x7 Gaussian kernel: 0.3*((7-1)*0.5 - 1) + 0.8
            blur_sigma: 1.4,
            clahe_clip_limit: 2.0,
            clahe_tiles: 8,
            closing_kernel: 5,
            canny_low: 30.0,
            canny_high: 150.0,
            bridge_kernel: (3, 15),
            hough_threshold: 40,
            hough_min_length: 35,
            hough_max_gap: 100,
            cluster_distance: 50.0,
            slope_min_positive: 0.05,
            slope_max_negative: -0.5,
            min_boundary_slope: 0.5,
            corridor_width_min: 100.0,
            corridor_width_max: 500.0,
            bottom_row_offset: 30.0,
        }
    }
}

impl PipelineConfig {
    /// Far scan row for a frame of the given height
    pub fn top_row(&self, height: u32) -> f32 {
        height as f32 * self.roi_height_ratio
    }

    /// Bottom scan row for a frame of the given height
    pub fn bottom_row(&self, height: u32) -> f32 {
        height as f32 - self.bottom_row_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_rows() {
        let config = PipelineConfig::default();
        assert_eq!(config.top_row(540), 324.0);
        assert_eq!(config.bottom_row(540), 510.0);
    }

    #[test]
    fn test_default_roundtrips_through_json() {
        let config = PipelineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: PipelineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.hough_threshold, config.hough_threshold);
        assert_eq!(back.roi_height_ratio, config.roi_height_ratio);
    }
}
