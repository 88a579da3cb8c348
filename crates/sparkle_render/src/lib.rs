//! 2D Rendering Library
//!
//! This crate draws the recorded [`sparkle_core::DrawList`] of a frame with wgpu.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::QuadPipeline`] - Instanced rectangles and ovals with alpha blending
//! - [`batch::DrawBatch`] - Converts draw commands into GPU quad instances
//! - [`font::GlyphAtlas`] - fontdue rasterization of labels and hints into a glyph atlas

pub mod batch;
pub mod context;
pub mod font;
pub mod pipeline;

pub use batch::DrawBatch;
pub use context::{ContextError, RenderContext};
pub use font::{FontError, GlyphAtlas};
pub use pipeline::{QuadInstance, QuadPipeline, QuadShape, ViewportUniforms};
