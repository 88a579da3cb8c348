//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Quad pipeline and draw batching
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;

use sparkle_core::{Color, DrawList, Letterbox, Vec2};
use sparkle_render::{
    context::{ContextError, RenderContext},
    DrawBatch, FontError, GlyphAtlas, QuadPipeline, ViewportUniforms,
};

use crate::config::RenderingConfig;

/// Renderer setup error
#[derive(Debug)]
pub enum RenderInitError {
    Context(ContextError),
    Font(FontError),
}

impl std::fmt::Display for RenderInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderInitError::Context(e) => write!(f, "{}", e),
            RenderInitError::Font(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RenderInitError {}

impl From<ContextError> for RenderInitError {
    fn from(e: ContextError) -> Self {
        RenderInitError::Context(e)
    }
}

impl From<FontError> for RenderInitError {
    fn from(e: FontError) -> Self {
        RenderInitError::Font(e)
    }
}

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

fn clear_color(color: Color) -> wgpu::Color {
    wgpu::Color {
        r: color.r as f64,
        g: color.g as f64,
        b: color.b as f64,
        a: color.a as f64,
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: QuadPipeline,
    batch: DrawBatch,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(window: Arc<Window>, config: &RenderingConfig, vsync: bool) -> Result<Self, RenderInitError> {
        let atlas = GlyphAtlas::load(&config.font_path, config.text_size)?;
        let context = pollster::block_on(RenderContext::new(window, vsync))?;
        let pipeline = QuadPipeline::new(&context.device, context.config.format);
        let batch = DrawBatch::new().with_atlas(atlas);

        Ok(Self {
            context,
            pipeline,
            batch,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface after it was lost
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }

    /// Render a recorded frame
    ///
    /// The draw list is in logical pixels. It is scaled uniformly to fit the
    /// surface and centered; the bars keep the background color.
    pub fn render_frame(&mut self, list: &DrawList, background: Color) -> Result<(), RenderError> {
        let size = list.size();
        let surface = Vec2::new(self.context.config.width as f32, self.context.config.height as f32);
        let viewport = Letterbox::fit(size, surface).viewport();

        let instances = self.batch.build(list);
        self.pipeline.prepare(
            &self.context.device,
            &self.context.queue,
            ViewportUniforms::new(size.x, size.y),
            instances,
        );
        if let Some(atlas) = self.batch.atlas_mut() {
            if atlas.take_dirty() {
                self.pipeline.upload_atlas(&self.context.queue, atlas.pixels());
            }
        }

        let output = self.context.surface.get_current_texture()?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(&mut encoder, &view, clear_color(background), viewport);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
