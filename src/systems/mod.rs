//! Application systems
//!
//! The window, the GPU renderer and the frame clock, kept out of main.rs.

mod frame_clock;
mod render;
mod window;

pub use frame_clock::FrameClock;
pub use render::{RenderError, RenderInitError, RenderSystem};
pub use window::{WindowError, WindowSystem};
