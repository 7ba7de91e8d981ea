//! Game action definitions
//!
//! The union of the control verbs from both supported schemes: absolute
//! cardinal movement (arrows/WASD) and orientation-relative movement
//! (forward/backward/strafe). The bindings decide which scheme is live;
//! the player understands all of them.

use serde::{Deserialize, Serialize};

/// A player verb that keys can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Absolute movement - also faces the player that way
    MoveNorth,
    MoveSouth,
    MoveEast,
    MoveWest,

    // Orientation-relative movement
    MoveForward,
    MoveBackward,
    StrafeLeft,
    StrafeRight,

    // Facing
    RotateLeft,
    RotateRight,

    // Vestigial verbs kept so binding tables stay complete; currently no-ops
    Attack,
    Inventory,
}

impl Action {
    /// Fixed dispatch order: when one key is bound to several actions they
    /// apply in this order.
    pub const ALL: [Action; 12] = [
        Action::MoveNorth,
        Action::MoveSouth,
        Action::MoveEast,
        Action::MoveWest,
        Action::MoveForward,
        Action::MoveBackward,
        Action::StrafeLeft,
        Action::StrafeRight,
        Action::RotateLeft,
        Action::RotateRight,
        Action::Attack,
        Action::Inventory,
    ];
}
