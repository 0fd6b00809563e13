//! Alignment scoring
//!
//! A frame is "aligned" when the horizontal frame center sits inside
//! the corridor at both scan rows. The score is binary by design;
//! frames without a corridor carry no judgment at all (see the
//! orchestrator, which maps absence to null rather than zero).

use crate::types::RoadOutline;

/// Score an outline against the frame center: 100.0 aligned, 0.0 not.
pub fn evaluate_score(outline: &RoadOutline, frame_width: u32) -> f32 {
    let center_x = frame_width as f32 / 2.0;

    let bottom_lo = outline.bottom_x_r.min(outline.bottom_x_s);
    let bottom_hi = outline.bottom_x_r.max(outline.bottom_x_s);
    let top_lo = outline.top_x_r.min(outline.top_x_s);
    let top_hi = outline.top_x_r.max(outline.top_x_s);

    let inside = bottom_lo <= center_x
        && center_x <= bottom_hi
        && top_lo <= center_x
        && center_x <= top_hi;

    if inside {
        100.0
    } else {
        0.0
    }
}
