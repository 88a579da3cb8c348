//! Keyboard mapping from raw events to semantic actions

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Return to the previous view (Backspace)
    NavigateBack,
    /// Drop all particles on the current canvas (C key)
    ClearCanvas,
}

/// Maps raw key events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::Backspace => Some(InputAction::NavigateBack),
            KeyCode::KeyC => Some(InputAction::ClearCanvas),
            _ => None,
        }
    }
}
