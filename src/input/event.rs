//! Input events
//!
//! The simulation consumes a plain event queue rather than polling key
//! state, so edge-triggered velocity changes stay testable without a
//! window. `poll_events` drains macroquad's per-frame press/release sets
//! once per tick; everything else constructs events directly.

// Modifier fields surface through Debug logging and the test constructors
#![allow(dead_code)]

use macroquad::input::{
    get_keys_pressed, get_keys_released, is_key_down, is_quit_requested, KeyCode,
};

/// Modifier state captured alongside a key press.
///
/// Only used for debug event logging; no binding depends on modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyMods {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyMods {
    fn current() -> Self {
        Self {
            shift: is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift),
            ctrl: is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl),
            alt: is_key_down(KeyCode::LeftAlt) || is_key_down(KeyCode::RightAlt),
        }
    }
}

/// One input event, drained once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown { key: KeyCode, mods: KeyMods },
    KeyUp { key: KeyCode },
    /// Window close requested.
    Quit,
}

impl InputEvent {
    /// Convenience constructor for a modifier-less key press.
    pub fn key_down(key: KeyCode) -> Self {
        InputEvent::KeyDown {
            key,
            mods: KeyMods::default(),
        }
    }

    /// Convenience constructor for a key release.
    pub fn key_up(key: KeyCode) -> Self {
        InputEvent::KeyUp { key }
    }
}

/// Drain this frame's input into an event list.
///
/// Must be called exactly once per frame, after `prevent_quit()` has been
/// armed so window-close arrives as an event instead of killing the loop.
pub fn poll_events() -> Vec<InputEvent> {
    let mods = KeyMods::current();
    let mut events = Vec::new();
    for key in get_keys_pressed() {
        events.push(InputEvent::KeyDown { key, mods });
    }
    for key in get_keys_released() {
        events.push(InputEvent::KeyUp { key });
    }
    if is_quit_requested() {
        events.push(InputEvent::Quit);
    }
    events
}
