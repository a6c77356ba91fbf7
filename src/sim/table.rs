//! Table geometry: bounds, pockets and cushion segments
//!
//! The playing field is the rectangle [0, length] × [0, width]. Pockets sit
//! at the four corners and the two long-edge midpoints. Cushions are the
//! table edges minus a `hole_size` gap on either side of every pocket, so
//! each cushion is axis-aligned.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{HOLE_SIZE, TABLE_LENGTH, TABLE_WIDTH};

/// Which axis a cushion runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Constant x, spans a y-range
    Vertical,
    /// Constant y, spans an x-range
    Horizontal,
}

/// An axis-aligned cushion segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cushion {
    pub orientation: Orientation,
    /// The constant coordinate (x for vertical, y for horizontal)
    pub fixed: f64,
    /// Open interval covered along the segment
    pub span: (f64, f64),
}

impl Cushion {
    pub fn vertical(x: f64, y_start: f64, y_end: f64) -> Self {
        Self {
            orientation: Orientation::Vertical,
            fixed: x,
            span: (y_start, y_end),
        }
    }

    pub fn horizontal(y: f64, x_start: f64, x_end: f64) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            fixed: y,
            span: (x_start, x_end),
        }
    }

    /// Component of `v` normal to the cushion
    #[inline]
    pub fn normal_component(&self, v: DVec2) -> f64 {
        match self.orientation {
            Orientation::Vertical => v.x,
            Orientation::Horizontal => v.y,
        }
    }

    /// Component of `v` along the cushion
    #[inline]
    pub fn tangent_component(&self, v: DVec2) -> f64 {
        match self.orientation {
            Orientation::Vertical => v.y,
            Orientation::Horizontal => v.x,
        }
    }

    /// Strict containment of a coordinate inside the span
    #[inline]
    pub fn span_contains(&self, along: f64) -> bool {
        self.span.0 < along && along < self.span.1
    }

    /// Negate the normal component of a velocity
    #[inline]
    pub fn reflect(&self, v: DVec2) -> DVec2 {
        match self.orientation {
            Orientation::Vertical => DVec2::new(-v.x, v.y),
            Orientation::Horizontal => DVec2::new(v.x, -v.y),
        }
    }

    /// Segment endpoints (for rendering)
    pub fn endpoints(&self) -> [DVec2; 2] {
        match self.orientation {
            Orientation::Vertical => [
                DVec2::new(self.fixed, self.span.0),
                DVec2::new(self.fixed, self.span.1),
            ],
            Orientation::Horizontal => [
                DVec2::new(self.span.0, self.fixed),
                DVec2::new(self.span.1, self.fixed),
            ],
        }
    }
}

/// Immutable table geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub length: f64,
    pub width: f64,
    pub hole_size: f64,
    pockets: [DVec2; 6],
    /// Order is fixed: it is the tie-break when several cushions match
    cushions: Vec<Cushion>,
}

impl Table {
    pub fn new(length: f64, width: f64, hole_size: f64) -> Self {
        assert!(length > 0.0 && width > 0.0, "table extents must be positive");
        assert!(hole_size >= 0.0, "hole size must be non-negative");

        let half = length / 2.0;
        let pockets = [
            DVec2::new(0.0, 0.0),
            DVec2::new(half, 0.0),
            DVec2::new(length, 0.0),
            DVec2::new(0.0, width),
            DVec2::new(half, width),
            DVec2::new(length, width),
        ];

        let cushions = vec![
            Cushion::horizontal(0.0, hole_size, half - hole_size),
            Cushion::horizontal(0.0, half + hole_size, length - hole_size),
            Cushion::horizontal(width, hole_size, half - hole_size),
            Cushion::horizontal(width, half + hole_size, length - hole_size),
            Cushion::vertical(0.0, hole_size, width - hole_size),
            Cushion::vertical(length, hole_size, width - hole_size),
        ];

        Self {
            length,
            width,
            hole_size,
            pockets,
            cushions,
        }
    }

    #[inline]
    pub fn pockets(&self) -> &[DVec2; 6] {
        &self.pockets
    }

    #[inline]
    pub fn cushions(&self) -> &[Cushion] {
        &self.cushions
    }

    /// True if `p` lies strictly inside (0, length) × (0, width)
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        0.0 < p.x && p.x < self.length && 0.0 < p.y && p.y < self.width
    }

    /// Clamp a point onto the closed table rectangle
    pub fn clamp(&self, p: DVec2) -> DVec2 {
        DVec2::new(p.x.clamp(0.0, self.length), p.y.clamp(0.0, self.width))
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(TABLE_LENGTH, TABLE_WIDTH, HOLE_SIZE)
    }
}
