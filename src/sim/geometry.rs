//! Axis-aligned box geometry on the tile grid
//!
//! Positions, sizes and velocities are plain `Vec2` values: `a + b` adds,
//! `a * k` scales. A box is described by its top-left corner and its size,
//! with `y` growing downward (row 0 is the top of the level).

use std::ops::Range;

use glam::Vec2;

/// Point or displacement in grid units
pub type Vector = Vec2;

/// Edge coordinates of an axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    #[inline]
    pub fn new(pos: Vector, size: Vector) -> Self {
        Self {
            left: pos.x,
            top: pos.y,
            right: pos.x + size.x,
            bottom: pos.y + size.y,
        }
    }

    /// Positive-area intersection test.
    ///
    /// Intervals are half-open, so boxes that only share an edge or a
    /// corner do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// Column and row index ranges of every tile the box touches
    /// (start edges rounded down, end edges rounded up)
    pub fn tile_span(&self) -> (Range<i32>, Range<i32>) {
        let cols = self.left.floor() as i32..self.right.ceil() as i32;
        let rows = self.top.floor() as i32..self.bottom.ceil() as i32;
        (cols, rows)
    }
}
