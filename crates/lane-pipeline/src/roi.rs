//! Region-of-interest masking
//!
//! Lane geometry lives in the lower part of the frame; sky and
//! background above the search region are discarded before line
//! detection. The region is a trapezoid narrowing toward the far row.

use crate::config::PipelineConfig;
use image::GrayImage;

/// Zero out every pixel outside the lane-search trapezoid.
///
/// The trapezoid spans from the image bottom (inset by
/// `roi_bottom_inset` on each side) up to `height * (1 -
/// roi_height_ratio)` (inset by `roi_top_inset` on each side).
pub fn mask_region(edges: &GrayImage, config: &PipelineConfig) -> GrayImage {
    let (width, height) = edges.dimensions();
    let mut out = GrayImage::new(width, height);
    if width == 0 || height == 0 {
        return out;
    }

    let top_y = (height as f32 * (1.0 - config.roi_height_ratio)).round() as u32;
    let top_y = top_y.min(height.saturating_sub(1));
    let bottom_y = height - 1;
    let span = (bottom_y - top_y).max(1) as f32;

    let bottom_inset = config.roi_bottom_inset as f32;
    let top_inset = config.roi_top_inset as f32;

    for y in top_y..height {
        // Interpolate the side edges between the far and near rows
        let t = (y - top_y) as f32 / span;
        let left = top_inset + t * (bottom_inset - top_inset);
        let right = (width as f32 - top_inset) + t * (top_inset - bottom_inset);
        let x0 = left.ceil().max(0.0) as u32;
        let x1 = right.floor().min((width - 1) as f32) as u32;
        for x in x0..=x1.min(width - 1) {
            let v = edges.get_pixel(x, y).0[0];
            if v > 0 {
                out.put_pixel(x, y, image::Luma([v]));
            }
        }
    }
    out
}
