//! Axis-aligned rectangle

use serde::{Serialize, Deserialize};

use crate::Vec2;

/// Axis-aligned rectangle with a top-left origin
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from origin and size
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle at the origin with the given size
    #[inline]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Top-left corner
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// True if the point lies inside the rectangle
    ///
    /// The left/top edges are inclusive, the right/bottom edges exclusive.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.x + self.width && p.y < self.y + self.height
    }

    /// Same size, moved by `offset`
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// True if width or height is zero or negative
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let r = Rect::from_size(600.0, 600.0);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(599.9, 599.9)));
        assert!(!r.contains(Vec2::new(600.0, 10.0)));
        assert!(!r.contains(Vec2::new(-0.1, 10.0)));
    }

    #[test]
    fn test_translated() {
        let r = Rect::new(10.0, 20.0, 5.0, 5.0).translated(Vec2::new(-10.0, 5.0));
        assert_eq!(r, Rect::new(0.0, 25.0, 5.0, 5.0));
    }

    #[test]
    fn test_center() {
        assert_eq!(Rect::new(10.0, 10.0, 20.0, 40.0).center(), Vec2::new(20.0, 30.0));
    }

    #[test]
    fn test_is_empty() {
        assert!(Rect::from_size(0.0, 10.0).is_empty());
        assert!(!Rect::from_size(1.0, 1.0).is_empty());
    }
}
