//! Input snapshot consumed by the scene runtime
//!
//! The host polls its window system once per frame and feeds the result in
//! through [`InputState::begin_frame`]. Everything downstream (camera,
//! components, editor) only reads this already-debounced snapshot.

use crate::foundation::math::Vec2;
use std::collections::HashSet;

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// E key
    E,
    /// Q key
    Q,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Left shift
    LeftShift,
    /// F1, toggles editor mode
    F1,
    /// F2, toggles the collider overlay
    F2,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Raw device state captured by the host for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInput {
    /// Keys held down this frame
    pub keys: HashSet<KeyCode>,
    /// Pointer buttons held down this frame
    pub buttons: HashSet<MouseButton>,
    /// Pointer position in window pixels
    pub pointer: Vec2,
}

impl RawInput {
    /// Builder: mark a key as held
    pub fn with_key(mut self, key: KeyCode) -> Self {
        self.keys.insert(key);
        self
    }

    /// Builder: mark a pointer button as held
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.buttons.insert(button);
        self
    }

    /// Builder: set the pointer position
    pub fn with_pointer(mut self, x: f32, y: f32) -> Self {
        self.pointer = Vec2::new(x, y);
        self
    }
}

/// Current and previous frame input, answering held / pressed queries
#[derive(Debug, Clone, Default)]
pub struct InputState {
    current: RawInput,
    previous: RawInput,
}

impl InputState {
    /// Create an empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift the current snapshot to previous and install a new one
    pub fn begin_frame(&mut self, raw: RawInput) {
        self.previous = std::mem::replace(&mut self.current, raw);
    }

    /// Key is held this frame
    pub fn key_held(&self, key: KeyCode) -> bool {
        self.current.keys.contains(&key)
    }

    /// Key went down this frame
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.current.keys.contains(&key) && !self.previous.keys.contains(&key)
    }

    /// Pointer button is held this frame
    pub fn button_held(&self, button: MouseButton) -> bool {
        self.current.buttons.contains(&button)
    }

    /// Pointer button went down this frame
    pub fn button_pressed(&self, button: MouseButton) -> bool {
        self.current.buttons.contains(&button) && !self.previous.buttons.contains(&button)
    }

    /// Pointer position in window pixels
    pub fn pointer_position(&self) -> Vec2 {
        self.current.pointer
    }

    /// Pointer movement since the previous frame
    pub fn pointer_delta(&self) -> Vec2 {
        self.current.pointer - self.previous.pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_only_on_first_frame() {
        let mut input = InputState::new();
        input.begin_frame(RawInput::default().with_key(KeyCode::F1));
        assert!(input.key_pressed(KeyCode::F1));
        assert!(input.key_held(KeyCode::F1));

        input.begin_frame(RawInput::default().with_key(KeyCode::F1));
        assert!(!input.key_pressed(KeyCode::F1));
        assert!(input.key_held(KeyCode::F1));

        input.begin_frame(RawInput::default());
        assert!(!input.key_held(KeyCode::F1));
    }

    #[test]
    fn test_pointer_delta() {
        let mut input = InputState::new();
        input.begin_frame(RawInput::default().with_pointer(10.0, 20.0));
        input.begin_frame(RawInput::default().with_pointer(13.0, 16.0).with_button(MouseButton::Left));
        assert_eq!(input.pointer_delta(), Vec2::new(3.0, -4.0));
        assert!(input.button_pressed(MouseButton::Left));
        assert!(!input.button_held(MouseButton::Right));
    }
}
