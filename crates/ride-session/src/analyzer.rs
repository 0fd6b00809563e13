//! Frame analysis orchestration
//!
//! Two entry points over the same geometry pipeline:
//! - `analyze_frame` for stateless single-image analysis
//! - `RideSession::process` for streaming analysis with detection
//!   caching and coin animation

use crate::cache::DetectionCache;
use crate::coin::{anchor_marker, CoinAnimator, CoinMarker};
use frame_ingest::RgbFrame;
use lane_pipeline::{
    detect_lane_pair, evaluate_score, extrapolate_outline, PipelineConfig, RoadOutline,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Per-invocation analysis record
///
/// `score` and `road_outline` are null when no plausible corridor was
/// found; that is a normal steady-state outcome, distinct from a frame
/// judged misaligned (score 0.0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameAnalysis {
    pub score: Option<f32>,
    pub frame_id: u64,
    pub road_outline: Option<RoadOutline>,
    pub coins: Vec<CoinMarker>,
}

/// Analyze a single frame with no session state.
///
/// Runs the full geometry pipeline; `coins` carries the spawn-anchor
/// marker when a corridor exists, so one-off uploads still get a
/// guidance position.
pub fn analyze_frame(frame: &RgbFrame, frame_id: u64, config: &PipelineConfig) -> FrameAnalysis {
    let outline = detect_lane_pair(frame, config)
        .and_then(|pair| extrapolate_outline(&pair, frame.height, config));
    let score = outline.as_ref().map(|o| evaluate_score(o, frame.width));
    let coins = outline.as_ref().map(|o| vec![anchor_marker(o)]).unwrap_or_default();

    FrameAnalysis {
        score,
        frame_id,
        road_outline: outline,
        coins,
    }
}

/// Streaming session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Geometry pipeline constants
    pub pipeline: PipelineConfig,
    /// Full detection runs on every N-th frame
    pub detection_interval: u64,
    /// A coin may spawn on every N-th frame
    pub coin_spawn_period: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            detection_interval: 20,
            coin_spawn_period: 15,
        }
    }
}

/// Stateful analyzer for one camera stream.
///
/// Owns the detection cache and the live coin set for exactly one
/// ride. Frames must be submitted in strictly increasing temporal
/// order; analyzing several streams concurrently requires one session
/// per stream.
pub struct RideSession {
    config: SessionConfig,
    cache: DetectionCache,
    coins: CoinAnimator,
}

impl RideSession {
    pub fn new(config: SessionConfig) -> Self {
        let cache = DetectionCache::new(config.detection_interval);
        let coins = CoinAnimator::new(config.coin_spawn_period);
        Self {
            config,
            cache,
            coins,
        }
    }

    /// Analyze the next frame of the stream.
    ///
    /// Full detection runs only when the interval counter wraps; other
    /// frames reuse the cached boundary pair for scoring and coin
    /// animation. An empty detection never clears the cache.
    pub fn process(&mut self, frame: &RgbFrame, frame_id: u64) -> FrameAnalysis {
        if self.cache.due() {
            let pair = detect_lane_pair(frame, &self.config.pipeline);
            debug!(
                "Detection at frame {} (id {frame_id}): pair {}",
                self.cache.frames_seen(),
                if pair.is_some() { "found" } else { "missing" },
            );
            self.cache.store(pair);
        }
        self.cache.advance();

        let outline = self
            .cache
            .pair()
            .and_then(|pair| extrapolate_outline(pair, frame.height, &self.config.pipeline));
        let score = outline.as_ref().map(|o| evaluate_score(o, frame.width));

        self.coins.tick(outline.as_ref(), frame.height);

        FrameAnalysis {
            score,
            frame_id,
            road_outline: outline,
            coins: self.coins.markers(),
        }
    }

    /// Restart for a new video or ride: drops the cached pair, the
    /// live coins and both counters.
    pub fn reset(&mut self) {
        info!("Resetting ride session");
        self.cache.reset();
        self.coins.reset();
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
