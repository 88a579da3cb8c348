//! Aspect-preserving fit of content into a target area

use crate::{Rect, Vec2};

/// Uniform scale plus centering offset that maps content space into a
/// target area; the unused strips are left as bars
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Letterbox {
    /// Target units per content unit
    pub scale: f32,
    /// Top-left of the content in target space
    pub offset: Vec2,
    content: Vec2,
}

impl Letterbox {
    /// Fit `content` into `target`, centered
    ///
    /// Degenerate sizes give the identity mapping.
    pub fn fit(content: Vec2, target: Vec2) -> Self {
        if content.x <= 0.0 || content.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
            return Self {
                scale: 1.0,
                offset: Vec2::ZERO,
                content,
            };
        }

        let scale = (target.x / content.x).min(target.y / content.y);
        Self {
            scale,
            offset: (target - content * scale) / 2.0,
            content,
        }
    }

    /// Area the content covers in target space
    pub fn viewport(&self) -> Rect {
        Rect::new(
            self.offset.x,
            self.offset.y,
            self.content.x * self.scale,
            self.content.y * self.scale,
        )
    }

    /// Map a target-space point back into content space
    pub fn to_content(&self, p: Vec2) -> Vec2 {
        (p - self.offset) / self.scale
    }
}
