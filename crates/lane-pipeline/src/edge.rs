//! Edge extraction
//!
//! Grayscale conditioning followed by Canny. Dashed lane markings
//! produce disconnected edge fragments; the grayscale closing pass
//! bridges them into continuous strokes before edge detection, and
//! CLAHE normalizes shadow/glare variance that raw Canny is sensitive
//! to.

use crate::clahe;
use crate::config::PipelineConfig;
use crate::morphology::close_rect;
use image::GrayImage;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

/// Produce a binary edge map of the same dimensions as the input
pub fn edge_map(gray: &GrayImage, config: &PipelineConfig) -> GrayImage {
    let blurred = gaussian_blur_f32(gray, config.blur_sigma);
    let enhanced = clahe::equalize(&blurred, config.clahe_clip_limit, config.clahe_tiles);
    let k = config.closing_kernel;
    let closed = close_rect(&enhanced, k, k);
    canny(&closed, config.canny_low, config.canny_high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_frame_has_no_edges() {
        let gray = GrayImage::from_pixel(320, 240, image::Luma([0]));
        let edges = edge_map(&gray, &PipelineConfig::default());
        assert_eq!(edges.dimensions(), (320, 240));
        assert!(edges.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn test_bright_stripe_produces_edges() {
        let mut gray = GrayImage::from_pixel(160, 160, image::Luma([20]));
        for y in 0..160 {
            for x in 70..78 {
                gray.put_pixel(x, y, image::Luma([230]));
            }
        }
        let edges = edge_map(&gray, &PipelineConfig::default());
        let edge_count = edges.pixels().filter(|p| p.0[0] > 0).count();
        assert!(edge_count > 100, "expected stripe borders, got {edge_count} edge pixels");
    }
}
