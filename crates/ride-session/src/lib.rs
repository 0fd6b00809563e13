//! Ride Analysis Sessions
//!
//! Stateful orchestration above the geometry pipeline:
//! - Stateless single-frame analysis for one-off uploads
//! - Streaming sessions that amortize detection across a frame window
//! - Coin guidance markers animated along the detected corridor
//!
//! All session state (detection cache, live coin set) is owned by one
//! `RideSession` instance per camera stream. Frames must be submitted
//! in temporal order; the detection counter and coin trajectories are
//! order-dependent.

pub mod analyzer;
pub mod cache;
pub mod coin;

pub use analyzer::{analyze_frame, FrameAnalysis, RideSession, SessionConfig};
pub use cache::DetectionCache;
pub use coin::{CoinAnimator, CoinMarker};
