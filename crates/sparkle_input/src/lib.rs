//! Pointer input handling
//!
//! This crate turns raw winit mouse events into the pointer events the
//! views understand: moves and clicks with a click count.

mod pointer_tracker;

pub use pointer_tracker::{PointerEvent, PointerTracker};
