//! Cursor state for the canvas

use sparkle_math::Vec2;

/// Hint shown next to the cursor before the first burst
pub const IDLE_HINT: &str = "Try clicking!";

/// Hint shown once the user has clicked
pub const CLICK_HINT: &str = "Pretty cool eh?!";

/// Last known pointer position and the hint drawn under it
#[derive(Clone, Debug, PartialEq)]
pub struct CursorState {
    position: Vec2,
    hint: String,
}

impl CursorState {
    pub fn new(hint: impl Into<String>) -> Self {
        Self {
            position: Vec2::ZERO,
            hint: hint.into(),
        }
    }

    /// Last pointer position; the origin until the first pointer event
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_hint(&mut self, hint: impl Into<String>) {
        self.hint = hint.into();
    }
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new(IDLE_HINT)
    }
}
