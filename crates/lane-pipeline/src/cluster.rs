//! Midpoint clustering of line segments
//!
//! The probabilistic transform reports several segments per physical
//! lane marking (both paint borders, bridged fragments). Segments
//! whose horizontal midpoints sit close together are merged into one
//! averaged representative before lane selection.

use crate::types::{LineCluster, LineSegment};

/// Merge segments whose horizontal midpoints fall within `distance`.
///
/// Greedy single pass: each not-yet-consumed segment, in input order,
/// seeds a cluster and absorbs every remaining segment close to the
/// seed's midpoint. Membership is decided against the seed only, never
/// transitively, so a chain of segments can split across clusters
/// depending on scan order. The representative is the elementwise mean
/// of the member endpoints.
///
/// Inputs with fewer than two segments pass through unchanged.
pub fn merge_close_segments(segments: &[LineSegment], distance: f32) -> Vec<LineCluster> {
    if segments.len() < 2 {
        return segments.iter().copied().map(LineCluster::from_segment).collect();
    }

    let mut used = vec![false; segments.len()];
    let mut clusters = Vec::new();

    for i in 0..segments.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        let seed_mid = segments[i].mid_x();
        let mut members = vec![segments[i]];

        for j in (i + 1)..segments.len() {
            if used[j] {
                continue;
            }
            if (seed_mid - segments[j].mid_x()).abs() < distance {
                members.push(segments[j]);
                used[j] = true;
            }
        }

        let n = members.len() as f32;
        let representative = LineSegment::new(
            members.iter().map(|s| s.x1).sum::<f32>() / n,
            members.iter().map(|s| s.y1).sum::<f32>() / n,
            members.iter().map(|s| s.x2).sum::<f32>() / n,
            members.iter().map(|s| s.y2).sum::<f32>() / n,
        );
        clusters.push(LineCluster::from_segment(representative));
    }

    clusters
}
