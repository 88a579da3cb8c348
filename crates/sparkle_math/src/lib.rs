//! 2D Mathematics Library
//!
//! Small value types shared by the Sparkle crates.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector / point in logical pixels
//! - [`Color`] - RGBA color with components in 0.0-1.0
//! - [`Rect`] - Axis-aligned rectangle (top-left origin)
//! - [`Letterbox`] - Aspect-preserving fit of one area into another

mod vec2;
mod color;
mod rect;
mod letterbox;

pub use vec2::Vec2;
pub use color::Color;
pub use rect::Rect;
pub use letterbox::Letterbox;
