//! Session-scoped detection cache
//!
//! Full detection is the expensive part of the pipeline while lane
//! geometry changes slowly relative to frame rate, so the boundary
//! pair is recomputed only on every `interval`-th frame and reused in
//! between. The cache is owned by exactly one session; independent
//! camera streams use independent instances.

use lane_pipeline::LanePair;

/// Cached boundary pair plus the detection-interval counter
#[derive(Debug)]
pub struct DetectionCache {
    last_pair: Option<LanePair>,
    frames_seen: u64,
    interval: u64,
}

impl DetectionCache {
    pub fn new(interval: u64) -> Self {
        Self {
            last_pair: None,
            frames_seen: 0,
            interval: interval.max(1),
        }
    }

    /// True when the current frame must run full detection
    pub fn due(&self) -> bool {
        self.frames_seen % self.interval == 0
    }

    /// Record a detection outcome.
    ///
    /// An empty result keeps the previously cached pair; a frame with
    /// no detectable geometry must not erase what the session knows.
    pub fn store(&mut self, pair: Option<LanePair>) {
        if pair.is_some() {
            self.last_pair = pair;
        }
    }

    /// The most recent boundary pair, if any frame produced one
    pub fn pair(&self) -> Option<&LanePair> {
        self.last_pair.as_ref()
    }

    /// Count the current frame as processed
    pub fn advance(&mut self) {
        self.frames_seen += 1;
    }

    /// Frames processed since creation or the last reset
    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }

    /// Forget the cached pair and restart the counter; required at the
    /// start of a new video or ride
    pub fn reset(&mut self) {
        self.last_pair = None;
        self.frames_seen = 0;
    }
}
