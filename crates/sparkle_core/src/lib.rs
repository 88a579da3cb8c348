//! Core types for Sparkle
//!
//! This crate holds everything that is not window or GPU plumbing:
//!
//! - [`Particle`] / [`ParticleSet`] - Fading explosion dots and the active set
//! - [`BurstSpawn`] - Randomized burst of particles for one click
//! - [`CanvasState`] / [`render_frame`] - Canvas state and its frame callback
//! - [`DrawSurface`] / [`DrawList`] - Immediate-mode drawing target
//! - [`ViewDescription`] - Serializable view (RON)
//! - [`ActiveView`] - Runtime state of the view on screen
//! - [`Navigator`] - Owns the stage and swaps views in it

mod particle;
mod spawn;
mod cursor;
mod canvas;
mod draw;
mod view;
mod view_validator;
mod active_view;
mod navigator;

pub use particle::{Particle, ParticleSet, DEFAULT_LIFETIME_FRAMES};
pub use spawn::{BurstSpawn, DEFAULT_BURST_COUNT, DEFAULT_MAX_SPEED};
pub use cursor::{CursorState, IDLE_HINT, CLICK_HINT};
pub use canvas::{CanvasSettings, CanvasState, FrameStats, render_frame};
pub use draw::{DrawCommand, DrawList, DrawSurface, TextAlign, Translated};
pub use view::{UiAction, ViewDescription, ViewLoadError, Widget};
pub use view_validator::{ValidationError, ViewValidator};
pub use active_view::{ActiveView, ButtonState, CanvasRegion, LabelState};
pub use navigator::{NavigationError, Navigator, Stage, VIEW_EXTENSION};

// Re-export commonly used math types for convenience
pub use sparkle_math::{Color, Letterbox, Rect, Vec2};
