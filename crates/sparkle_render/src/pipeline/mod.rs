//! Rendering pipeline components

pub mod types;
pub mod quad_pipeline;

pub use types::{QuadInstance, QuadShape, ViewportUniforms};
pub use quad_pipeline::QuadPipeline;
