//! Pointer tracker
//!
//! - Cursor moves: converted from physical to logical pixels
//! - Left button release: a click at the last cursor position
//! - Clicks close together in time and space raise the click count

use std::time::{Duration, Instant};

use sparkle_math::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton};

/// Semantic pointer event in logical window coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Moved(Vec2),
    Clicked { position: Vec2, clicks: u32 },
}

/// Tracks cursor position and multi-click state
pub struct PointerTracker {
    position: Option<Vec2>,
    scale_factor: f64,
    pressed: bool,
    last_click: Option<(Instant, Vec2)>,
    click_count: u32,

    // Configuration
    pub multi_click_time: Duration,
    pub multi_click_distance: f32,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            position: None,
            scale_factor: 1.0,
            pressed: false,
            last_click: None,
            click_count: 0,

            multi_click_time: Duration::from_millis(500),
            multi_click_distance: 4.0,
        }
    }

    /// Builder: set the window scale factor
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Builder: set the multi-click window
    pub fn with_multi_click_time(mut self, time: Duration) -> Self {
        self.multi_click_time = time;
        self
    }

    /// Window moved to a monitor with a different DPI
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Last known position in logical pixels
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Process a cursor move (physical pixels)
    pub fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) -> PointerEvent {
        let logical = position.to_logical::<f64>(self.scale_factor);
        let p = Vec2::new(logical.x as f32, logical.y as f32);
        self.position = Some(p);
        PointerEvent::Moved(p)
    }

    /// Cursor left the window; the next click starts a fresh count
    pub fn process_cursor_left(&mut self) {
        self.pressed = false;
        self.last_click = None;
        self.click_count = 0;
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) -> Option<PointerEvent> {
        self.process_mouse_button_at(button, state, Instant::now())
    }

    /// Process mouse button input with an explicit timestamp
    pub fn process_mouse_button_at(
        &mut self,
        button: MouseButton,
        state: ElementState,
        now: Instant,
    ) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed => {
                self.pressed = true;
                None
            }
            ElementState::Released => {
                // A release without a press (e.g. pressed outside the window) is not a click
                if !std::mem::replace(&mut self.pressed, false) {
                    return None;
                }
                let position = self.position?;
                let clicks = self.register_click(position, now);
                Some(PointerEvent::Clicked { position, clicks })
            }
        }
    }

    fn register_click(&mut self, position: Vec2, now: Instant) -> u32 {
        let continues = match self.last_click {
            Some((at, last)) => {
                now.saturating_duration_since(at) <= self.multi_click_time
                    && last.distance(position) <= self.multi_click_distance
            }
            None => false,
        };

        self.click_count = if continues { self.click_count + 1 } else { 1 };
        self.last_click = Some((now, position));
        self.click_count
    }
}
