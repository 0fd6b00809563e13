//! Geometry primitives

use serde::{Deserialize, Serialize};

/// Finite line segment in image coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl LineSegment {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Horizontal midpoint, the clustering key
    pub fn mid_x(&self) -> f32 {
        (self.x1 + self.x2) / 2.0
    }

    /// Slope dy/dx; `None` for vertical segments
    pub fn slope(&self) -> Option<f32> {
        if self.x2 == self.x1 {
            None
        } else {
            Some((self.y2 - self.y1) / (self.x2 - self.x1))
        }
    }

    /// Slope dx/dy, x as a function of y; `None` for horizontal segments
    pub fn inverse_slope(&self) -> Option<f32> {
        if self.y2 == self.y1 {
            None
        } else {
            Some((self.x2 - self.x1) / (self.y2 - self.y1))
        }
    }

    /// Extrapolated x at the given row, in the dx/dy parameterization
    pub fn x_at(&self, y: f32) -> Option<f32> {
        self.inverse_slope().map(|s| self.x1 + s * (y - self.y1))
    }
}

/// Averaged representative of nearby segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCluster {
    /// Elementwise mean of member endpoints
    pub segment: LineSegment,
    /// Horizontal midpoint of the representative, the sort key
    pub mid_x: f32,
}

impl LineCluster {
    pub fn from_segment(segment: LineSegment) -> Self {
        Self {
            mid_x: segment.mid_x(),
            segment,
        }
    }
}

/// Road corridor evaluated at the two fixed scan rows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadOutline {
    pub bottom_x_r: f32,
    pub bottom_x_s: f32,
    pub bottom_y: f32,
    pub top_x_r: f32,
    pub top_x_s: f32,
    pub top_y: f32,
}

impl RoadOutline {
    /// Corridor width at the bottom scan row
    pub fn bottom_width(&self) -> f32 {
        (self.bottom_x_r - self.bottom_x_s).abs()
    }

    /// Horizontal midpoint of the far edge, where new coins anchor
    pub fn top_center_x(&self) -> f32 {
        (self.top_x_r + self.top_x_s) / 2.0
    }

    /// Boundary slopes (dx/dy) recovered from the two scan rows
    pub fn boundary_slopes(&self) -> (f32, f32) {
        let dy = self.top_y - self.bottom_y;
        (
            (self.top_x_r - self.bottom_x_r) / dy,
            (self.top_x_s - self.bottom_x_s) / dy,
        )
    }

    /// Mean of the two boundary slopes, the coin drift rate
    pub fn mean_boundary_slope(&self) -> f32 {
        let (r, s) = self.boundary_slopes();
        (r + s) / 2.0
    }
}
