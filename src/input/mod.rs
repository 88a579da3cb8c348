//! Input handling module
//!
//! Maps keys to application actions. Pointer input goes through
//! `sparkle_input::PointerTracker`.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};
