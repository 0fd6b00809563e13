//! Coin guidance markers
//!
//! Ephemeral reward markers anchored to the corridor's far edge. A
//! coin drifts down the frame with the corridor, growing toward the
//! viewer, and is retired the moment it crosses the bottom edge. The
//! core only exposes marker geometry; rasterization belongs to the
//! render layer.

use lane_pipeline::RoadOutline;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Downward drift per tick (px)
const COIN_SPEED: f32 = 5.0;
/// Spawn radius
const COIN_INITIAL_SIZE: f32 = 10.0;
/// Radius ceiling
const COIN_MAX_SIZE: f32 = 25.0;
/// Growth per tick
const COIN_GROWTH: f32 = 0.5;

/// Live coin state
#[derive(Debug, Clone, Copy)]
struct Coin {
    x: f32,
    y: f32,
    size: f32,
    speed: f32,
}

impl Coin {
    fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            size: COIN_INITIAL_SIZE,
            speed: COIN_SPEED,
        }
    }

    /// Advance one tick, drifting with the given corridor slope
    fn advance(&mut self, slope: f32) {
        self.y += self.speed;
        self.x += self.speed * slope;
        self.size = (self.size + COIN_GROWTH).min(COIN_MAX_SIZE);
    }
}

/// Marker geometry handed to the external render layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinMarker {
    pub x: f32,
    pub y: f32,
    pub r: f32,
}

/// Spawn-anchor marker for a corridor, used by stateless analysis
pub fn anchor_marker(outline: &RoadOutline) -> CoinMarker {
    CoinMarker {
        x: outline.top_center_x(),
        y: outline.top_y,
        r: COIN_INITIAL_SIZE,
    }
}

/// Spawns, advances and retires coins for one ride session
#[derive(Debug)]
pub struct CoinAnimator {
    coins: Vec<Coin>,
    frames_seen: u64,
    spawn_period: u64,
}

impl CoinAnimator {
    /// Create an animator spawning at most one coin every
    /// `spawn_period` frames
    pub fn new(spawn_period: u64) -> Self {
        Self {
            coins: Vec::new(),
            frames_seen: 0,
            spawn_period: spawn_period.max(1),
        }
    }

    /// Advance one frame.
    ///
    /// With a corridor present, a coin may spawn on every
    /// `spawn_period`-th processed frame at the far-edge midpoint;
    /// every live coin then drifts with the current frame's mean
    /// boundary slope and coins past the bottom edge are retired for
    /// good. Without a corridor the live set is left untouched.
    pub fn tick(&mut self, outline: Option<&RoadOutline>, frame_height: u32) {
        self.frames_seen += 1;
        let Some(outline) = outline else {
            return;
        };

        if self.frames_seen % self.spawn_period == 0 {
            trace!("Spawning coin at frame {}", self.frames_seen);
            self.coins.push(Coin::new(outline.top_center_x(), outline.top_y));
        }

        let slope = outline.mean_boundary_slope();
        let height = frame_height as f32;
        for coin in &mut self.coins {
            coin.advance(slope);
        }
        self.coins.retain(|c| c.y < height);
    }

    /// Marker geometry for every live coin
    pub fn markers(&self) -> Vec<CoinMarker> {
        self.coins
            .iter()
            .map(|c| CoinMarker {
                x: c.x,
                y: c.y,
                r: c.size,
            })
            .collect()
    }

    /// Number of live coins
    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Drop all coins and restart the frame counter
    pub fn reset(&mut self) {
        self.coins.clear();
        self.frames_seen = 0;
    }
}
