//! Rectangular-kernel grayscale morphology
//!
//! Max/min filters with independent kernel width and height, run as
//! two separable passes. Border pixels use the clamped window, which
//! matches replicate-border semantics.

use image::GrayImage;

/// Grayscale dilation with a `kw` x `kh` rectangular structuring element
pub fn dilate_rect(image: &GrayImage, kw: u32, kh: u32) -> GrayImage {
    let horizontal = extrema_rows(image, kw / 2, true);
    extrema_cols(&horizontal, kh / 2, true)
}

/// Grayscale erosion with a `kw` x `kh` rectangular structuring element
pub fn erode_rect(image: &GrayImage, kw: u32, kh: u32) -> GrayImage {
    let horizontal = extrema_rows(image, kw / 2, false);
    extrema_cols(&horizontal, kh / 2, false)
}

/// Dilation followed by erosion; bridges gaps up to the kernel size
pub fn close_rect(image: &GrayImage, kw: u32, kh: u32) -> GrayImage {
    erode_rect(&dilate_rect(image, kw, kh), kw, kh)
}

fn extrema_rows(image: &GrayImage, radius: u32, take_max: bool) -> GrayImage {
    let (width, height) = image.dimensions();
    let mut out = GrayImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let lo = x.saturating_sub(radius);
            let hi = (x + radius).min(width - 1);
            let mut value = image.get_pixel(lo, y).0[0];
            for sx in (lo + 1)..=hi {
                let v = image.get_pixel(sx, y).0[0];
                value = if take_max { value.max(v) } else { value.min(v) };
            }
            out.put_pixel(x, y, image::Luma([value]));
        }
    }
    out
}

fn extrema_cols(image: &GrayImage, radius: u32, take_max: bool) -> GrayImage {
    let (width, height) = image.dimensions();
    let mut out = GrayImage::new(width, height);
    for y in 0..height {
        let lo = y.saturating_sub(radius);
        let hi = (y + radius).min(height - 1);
        for x in 0..width {
            let mut value = image.get_pixel(x, lo).0[0];
            for sy in (lo + 1)..=hi {
                let v = image.get_pixel(x, sy).0[0];
                value = if take_max { value.max(v) } else { value.min(v) };
            }
            out.put_pixel(x, y, image::Luma([value]));
        }
    }
    out
}
