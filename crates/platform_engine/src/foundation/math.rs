//! Math utilities and types
//!
//! Provides the fundamental math types for 2D game development.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Axis-aligned rectangle with float position and size
///
/// Positions grow rightward in x and downward in y, matching screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Bottom edge (y + h)
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Right edge (x + w)
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Truncate position and size toward zero
    ///
    /// Overlap tests run on truncated rectangles, so sub-pixel overlap near
    /// boundaries is not guaranteed precise.
    pub fn truncated(&self) -> (i32, i32, i32, i32) {
        (self.x as i32, self.y as i32, self.w as i32, self.h as i32)
    }

    /// Axis-aligned overlap test on the integer-truncated rectangles
    ///
    /// Empty rectangles (zero or negative truncated extent) never intersect,
    /// and rectangles that merely touch along an edge do not count as
    /// overlapping.
    pub fn intersects(&self, other: &Rect) -> bool {
        let (ax, ay, aw, ah) = self.truncated();
        let (bx, by, bw, bh) = other.truncated();

        if aw <= 0 || ah <= 0 || bw <= 0 || bh <= 0 {
            return false;
        }

        ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
    }
}
