//! GPU-compatible data types for the quad pipeline
//!
//! These types match the layouts in `quad.wgsl`.

use bytemuck::{Pod, Zeroable};
use sparkle_math::{Color, Rect};

/// How the fragment shader fills a quad
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum QuadShape {
    Rect = 0,
    /// Ellipse inscribed in the quad
    Oval = 1,
    /// Glyph coverage sampled from the font atlas
    Glyph = 2,
}

/// One instanced quad in window pixels
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    /// x, y, width, height (top-left origin)
    pub rect: [f32; 4],
    /// RGBA color, alpha not premultiplied
    pub color: [f32; 4],
    /// Atlas texture coordinates u0, v0, u1, v1 (glyphs only)
    pub uv: [f32; 4],
    pub shape: u32,
    pub _padding: [u32; 3],
}

impl QuadInstance {
    pub fn new(rect: Rect, color: Color, shape: QuadShape) -> Self {
        Self {
            rect: [rect.x, rect.y, rect.width, rect.height],
            color: color.to_array(),
            uv: [0.0; 4],
            shape: shape as u32,
            _padding: [0; 3],
        }
    }

    pub fn rect(rect: Rect, color: Color) -> Self {
        Self::new(rect, color, QuadShape::Rect)
    }

    pub fn oval(rect: Rect, color: Color) -> Self {
        Self::new(rect, color, QuadShape::Oval)
    }

    pub fn glyph(rect: Rect, uv: [f32; 4], color: Color) -> Self {
        Self {
            uv,
            ..Self::new(rect, color, QuadShape::Glyph)
        }
    }
}

/// Viewport uniforms
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ViewportUniforms {
    /// Logical size the draw list was recorded for
    pub size: [f32; 2],
    pub _padding: [f32; 2],
}

impl ViewportUniforms {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: [width.max(1.0), height.max(1.0)],
            _padding: [0.0; 2],
        }
    }
}

impl Default for ViewportUniforms {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout() {
        // 16 (rect) + 16 (color) + 16 (uv) + 4 (shape) + 12 (padding)
        assert_eq!(std::mem::size_of::<QuadInstance>(), 64);
        assert_eq!(std::mem::size_of::<ViewportUniforms>(), 16);
    }

    #[test]
    fn test_instance_from_rect() {
        let q = QuadInstance::oval(Rect::new(1.0, 2.0, 3.0, 4.0), Color::WHITE.with_alpha(0.5));
        assert_eq!(q.rect, [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(q.color, [1.0, 1.0, 1.0, 0.5]);
        assert_eq!(q.shape, QuadShape::Oval as u32);
    }

    #[test]
    fn test_glyph_instance_keeps_uv() {
        let q = QuadInstance::glyph(Rect::new(0.0, 0.0, 8.0, 9.0), [0.0, 0.5, 0.25, 0.75], Color::BLACK);
        assert_eq!(q.uv, [0.0, 0.5, 0.25, 0.75]);
        assert_eq!(q.shape, QuadShape::Glyph as u32);
        assert_eq!(QuadInstance::rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK).uv, [0.0; 4]);
    }

    #[test]
    fn test_viewport_never_zero() {
        let v = ViewportUniforms::new(0.0, 600.0);
        assert_eq!(v.size, [1.0, 600.0]);
    }
}
