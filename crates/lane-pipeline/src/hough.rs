//! Probabilistic line-segment detection
//!
//! A vertical bridging pass merges near-collinear edge fragments along
//! the expected lane direction, then a progressive probabilistic Hough
//! transform extracts finite segments. Points are visited in a
//! fixed-seed shuffled order so results are reproducible run to run.

use crate::config::PipelineConfig;
use crate::morphology::close_rect;
use crate::types::LineSegment;
use image::GrayImage;
use tracing::trace;

/// Detect raw line segments in a masked edge map.
///
/// An empty result is a normal outcome, not an error.
pub fn detect_segments(edges: &GrayImage, config: &PipelineConfig) -> Vec<LineSegment> {
    let (bw, bh) = config.bridge_kernel;
    let bridged = close_rect(edges, bw, bh);
    probabilistic_hough(
        &bridged,
        config.hough_threshold,
        config.hough_min_length,
        config.hough_max_gap,
    )
}

const NUM_ANGLE: usize = 180; // 1 degree angular resolution
const RHO_RES: f32 = 1.0; // 1 px distance resolution
const SHUFFLE_SEED: u32 = 0x2F6E_2B1D;

/// Progressive probabilistic Hough transform over a binary edge map.
///
/// Each visited point votes across all angles; once its strongest bin
/// reaches `threshold`, the corresponding line is walked in both
/// directions, bridging gaps up to `max_gap`, and the covered points
/// are retired from the accumulator. Segments shorter than `min_length`
/// along both axes are walked and retired but not emitted.
pub fn probabilistic_hough(
    edges: &GrayImage,
    threshold: i32,
    min_length: u32,
    max_gap: u32,
) -> Vec<LineSegment> {
    let (width, height) = edges.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let w = width as usize;

    let mut mask = vec![false; w * height as usize];
    let mut points: Vec<(u32, u32)> = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if edges.get_pixel(x, y).0[0] > 0 {
                mask[y as usize * w + x as usize] = true;
                points.push((x, y));
            }
        }
    }
    if points.is_empty() {
        return Vec::new();
    }
    shuffle(&mut points, SHUFFLE_SEED);

    let (cos_t, sin_t) = angle_tables();
    let num_rho = (2.0 * (width + height) as f32 / RHO_RES) as usize + 1;
    let rho_offset = (num_rho - 1) / 2;
    let mut accum = vec![0i32; NUM_ANGLE * num_rho];

    let mut segments = Vec::new();

    for &(px, py) in &points {
        // May have been retired by a previously extracted segment
        if !mask[py as usize * w + px as usize] {
            continue;
        }

        // Vote across all angles; track the strongest bin
        let mut max_val = threshold - 1;
        let mut max_n = 0usize;
        for n in 0..NUM_ANGLE {
            let rho = px as f32 * cos_t[n] + py as f32 * sin_t[n];
            let r = (rho / RHO_RES).round() as isize + rho_offset as isize;
            let bin = &mut accum[n * num_rho + r as usize];
            *bin += 1;
            if *bin > max_val {
                max_val = *bin;
                max_n = n;
            }
        }
        if max_val < threshold {
            continue;
        }

        // Walk the candidate line in both directions, bridging gaps
        let a = -sin_t[max_n];
        let b = cos_t[max_n];
        let (dx0, dy0) = if a.abs() > b.abs() {
            (a.signum(), b / a.abs())
        } else {
            (a / b.abs(), b.signum())
        };

        let mut line_end = [(px, py); 2];
        for (k, end) in line_end.iter_mut().enumerate() {
            let dir = if k == 0 { 1.0 } else { -1.0 };
            let (sdx, sdy) = (dx0 * dir, dy0 * dir);
            let (mut x, mut y) = (px as f32, py as f32);
            let mut gap = 0u32;
            loop {
                x += sdx;
                y += sdy;
                let xi = x.round() as i64;
                let yi = y.round() as i64;
                if xi < 0 || yi < 0 || xi >= width as i64 || yi >= height as i64 {
                    break;
                }
                if mask[yi as usize * w + xi as usize] {
                    gap = 0;
                    *end = (xi as u32, yi as u32);
                } else {
                    gap += 1;
                    if gap > max_gap {
                        break;
                    }
                }
            }
        }

        let good_line = line_end[0].0.abs_diff(line_end[1].0) >= min_length
            || line_end[0].1.abs_diff(line_end[1].1) >= min_length;

        // Retire covered points; remove their votes when the segment
        // is emitted so residual bins do not spawn duplicates
        for (k, end) in line_end.iter().enumerate() {
            let dir = if k == 0 { 1.0 } else { -1.0 };
            let (sdx, sdy) = (dx0 * dir, dy0 * dir);
            let (mut x, mut y) = (px as f32, py as f32);
            loop {
                let xi = x.round() as u32;
                let yi = y.round() as u32;
                let idx = yi as usize * w + xi as usize;
                if mask[idx] {
                    if good_line {
                        for n in 0..NUM_ANGLE {
                            let rho = xi as f32 * cos_t[n] + yi as f32 * sin_t[n];
                            let r = (rho / RHO_RES).round() as isize + rho_offset as isize;
                            accum[n * num_rho + r as usize] -= 1;
                        }
                    }
                    mask[idx] = false;
                }
                if (xi, yi) == *end {
                    break;
                }
                x += sdx;
                y += sdy;
            }
        }

        if good_line {
            trace!(
                "segment ({}, {}) -> ({}, {})",
                line_end[0].0,
                line_end[0].1,
                line_end[1].0,
                line_end[1].1
            );
            segments.push(LineSegment::new(
                line_end[0].0 as f32,
                line_end[0].1 as f32,
                line_end[1].0 as f32,
                line_end[1].1 as f32,
            ));
        }
    }

    segments
}

fn angle_tables() -> ([f32; NUM_ANGLE], [f32; NUM_ANGLE]) {
    let mut cos_t = [0.0f32; NUM_ANGLE];
    let mut sin_t = [0.0f32; NUM_ANGLE];
    for n in 0..NUM_ANGLE {
        let theta = n as f32 * std::f32::consts::PI / NUM_ANGLE as f32;
        cos_t[n] = theta.cos();
        sin_t[n] = theta.sin();
    }
    (cos_t, sin_t)
}

/// Fisher-Yates shuffle driven by a xorshift generator with a fixed seed
fn shuffle(points: &mut [(u32, u32)], seed: u32) {
    let mut state = seed;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    for i in (1..points.len()).rev() {
        let j = (next() as usize) % (i + 1);
        points.swap(i, j);
    }
}
