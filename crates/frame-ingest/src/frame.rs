//! RGB frame raster and decode helpers

use crate::FrameError;
use image::GrayImage;
use std::path::Path;
use tracing::debug;

/// Decoded RGB frame
///
/// Immutable input to the analysis pipeline; one raster per invocation.
#[derive(Debug, Clone)]
pub struct RgbFrame {
    /// RGB pixel data (width * height * 3)
    pub data: Vec<u8>,
    /// Frame width
    pub width: u32,
    /// Frame height
    pub height: u32,
}

impl RgbFrame {
    /// Create a frame from raw RGB24 data
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self, FrameError> {
        let expected = (width as usize) * (height as usize) * 3;
        if data.len() != expected {
            return Err(FrameError::Layout {
                len: data.len(),
                width,
                height,
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Get pixel at (x, y)
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 3) as usize;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Convert to a single-channel grayscale image
    pub fn to_grayscale(&self) -> GrayImage {
        let mut gray = Vec::with_capacity((self.width * self.height) as usize);
        for pixel in self.data.chunks(3) {
            // Luminance formula: 0.299*R + 0.587*G + 0.114*B
            let y = (pixel[0] as f32 * 0.299
                   + pixel[1] as f32 * 0.587
                   + pixel[2] as f32 * 0.114) as u8;
            gray.push(y);
        }
        GrayImage::from_raw(self.width, self.height, gray)
            .unwrap_or_else(|| GrayImage::new(self.width, self.height))
    }
}

/// Decode an image file into a frame
pub fn decode_path(path: impl AsRef<Path>) -> Result<RgbFrame, FrameError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| FrameError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let rgb = img.to_rgb8();
    debug!("Decoded {} ({}x{})", path.display(), rgb.width(), rgb.height());
    let (width, height) = (rgb.width(), rgb.height());
    RgbFrame::new(rgb.into_raw(), width, height)
}

/// Decode an in-memory image buffer into a frame
pub fn decode_bytes(bytes: &[u8]) -> Result<RgbFrame, FrameError> {
    let img = image::load_from_memory(bytes).map_err(|e| FrameError::Decode(e.to_string()))?;
    let rgb = img.to_rgb8();
    let (width, height) = (rgb.width(), rgb.height());
    RgbFrame::new(rgb.into_raw(), width, height)
}
