//! Window management system
//!
//! Owns the single application window. As the navigator's [`Stage`] it
//! takes the title and content size of whatever view is shown.

use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};

use sparkle_core::{Stage, Vec2};

use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(false);

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        log::info!(
            "Created window {}x{} (scale factor {})",
            config.width,
            config.height,
            window.scale_factor()
        );

        Ok(Self { window })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    pub fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }

    /// Inner size in logical pixels
    pub fn logical_size(&self) -> Vec2 {
        let size: LogicalSize<f32> = self.window.inner_size().to_logical(self.window.scale_factor());
        Vec2::new(size.width, size.height)
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

impl Stage for WindowSystem {
    fn show_view(&mut self, title: &str, width: u32, height: u32) {
        self.window.set_title(title);
        // None means the request is pending; a Resized event follows
        if let Some(size) = self.window.request_inner_size(LogicalSize::new(width, height)) {
            log::debug!("Window resized immediately to {}x{}", size.width, size.height);
        }
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
