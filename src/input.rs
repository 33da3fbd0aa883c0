//! Input handling.
//!
//! Raw winit window events are translated into two kinds of input the
//! session understands: pointer events, which feed the drag-to-rotate
//! control, and discrete [`Action`]s bound to keys.
//!
//! ```ignore
//! if let Some(event) = input.handle_event(&window_event) {
//!     session.handle_input(event, clock.elapsed());
//! }
//! ```

use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// Keys the application cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    C,
    H,
    L,
    R,
    Space,
    Enter,
    Escape,
    Other(u32),
}

impl From<WinitKeyCode> for KeyCode {
    fn from(key: WinitKeyCode) -> Self {
        match key {
            WinitKeyCode::KeyC => KeyCode::C,
            WinitKeyCode::KeyH => KeyCode::H,
            WinitKeyCode::KeyL => KeyCode::L,
            WinitKeyCode::KeyR => KeyCode::R,
            WinitKeyCode::Space => KeyCode::Space,
            WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => KeyCode::Enter,
            WinitKeyCode::Escape => KeyCode::Escape,
            _ => KeyCode::Other(key as u32),
        }
    }
}

/// A discrete command from the keyboard or the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    DrawReading,
    Dismiss,
    ToggleSensors,
    ToggleLanguage,
    Regenerate,
    ToggleHelp,
}

impl Action {
    /// The action bound to `key`, if any.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Space | KeyCode::Enter => Some(Action::DrawReading),
            KeyCode::Escape => Some(Action::Dismiss),
            KeyCode::C => Some(Action::ToggleSensors),
            KeyCode::L => Some(Action::ToggleLanguage),
            KeyCode::R => Some(Action::Regenerate),
            KeyCode::H => Some(Action::ToggleHelp),
            KeyCode::Other(_) => None,
        }
    }
}

/// Primary-button pointer activity, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(Vec2),
    Moved(Vec2),
    Released,
}

/// Anything the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Action(Action),
}

/// Drag tracker for the rotate gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerDrag {
    held: bool,
    last: Vec2,
}

impl PointerDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Feed one pointer event; returns the movement since the previous
    /// event while the button is held.
    pub fn handle(&mut self, event: PointerEvent) -> Option<Vec2> {
        match event {
            PointerEvent::Pressed(at) => {
                self.held = true;
                self.last = at;
                None
            }
            PointerEvent::Moved(at) => {
                let delta = at - self.last;
                self.last = at;
                self.held.then_some(delta)
            }
            PointerEvent::Released => {
                self.held = false;
                None
            }
        }
    }
}

/// Translates window events, suppressing key repeat.
#[derive(Debug, Default)]
pub struct Input {
    keys_held: HashSet<KeyCode>,
    mouse_position: Vec2,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                let key = KeyCode::from(code);
                match event.state {
                    ElementState::Pressed => self.press_key(key).map(InputEvent::Action),
                    ElementState::Released => {
                        self.release_key(key);
                        None
                    }
                }
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => Some(InputEvent::Pointer(match state {
                ElementState::Pressed => PointerEvent::Pressed(self.mouse_position),
                ElementState::Released => PointerEvent::Released,
            })),

            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Vec2::new(position.x as f32, position.y as f32);
                Some(InputEvent::Pointer(PointerEvent::Moved(self.mouse_position)))
            }

            // Losing the cursor mid-drag must not leave the galaxy spinning
            // under a phantom hold.
            WindowEvent::CursorLeft { .. } | WindowEvent::Focused(false) => {
                self.keys_held.clear();
                Some(InputEvent::Pointer(PointerEvent::Released))
            }

            _ => None,
        }
    }

    /// Only the first press fires an action; auto-repeat is ignored.
    fn press_key(&mut self, key: KeyCode) -> Option<Action> {
        if !self.keys_held.insert(key) {
            return None;
        }
        Action::from_key(key)
    }

    fn release_key(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
    }
}
