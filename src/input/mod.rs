//! Input handling
//!
//! Action-based input: raw key events resolve through an explicit
//! `ControlMap` built once at startup. The simulation never touches key
//! state directly, it only sees `InputEvent`s and `Action`s.

mod actions;
mod controls;
mod event;

pub use actions::Action;
pub use controls::{ControlMap, ControlsFile};
pub use event::{poll_events, InputEvent, KeyMods};
