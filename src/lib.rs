//! Sparkle application library
//!
//! Configuration, key mapping and the window/render systems used by the
//! `sparkle` binary.

pub mod config;
pub mod input;
pub mod systems;
