//! Frame Ingestion for Lane Analysis
//!
//! Decodes uploaded images or captured video frames into owned RGB
//! rasters. Decode failures are surfaced here; the analysis core is
//! never invoked on a frame that could not be materialized.

pub mod frame;

pub use frame::{decode_bytes, decode_path, RgbFrame};

use thiserror::Error;

/// Frame ingestion error types
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Raster buffer length {len} does not match {width}x{height} RGB layout")]
    Layout { len: usize, width: u32, height: u32 },
}
