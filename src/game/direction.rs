//! Cardinal orientation and movement vectors
//!
//! Facing is one of the four cardinal directions. With only four discrete
//! facings there is no trigonometry anywhere: rotations walk a fixed ring
//! and every movement vector comes out of a match lookup.
//!
//! Screen coordinates: +x is east, +y is south (y grows downward).

use macroquad::math::{vec2, Vec2};

/// One of the four cardinal facings.
///
/// Governs which way "forward" points, which axis strafing moves along,
/// and which sprite-sheet row is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    South,
    East,
    West,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::South,
        Orientation::East,
        Orientation::West,
    ];

    /// Rotate counter-clockwise: N -> W -> S -> E -> N.
    pub fn rotate_left(self) -> Self {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    /// Rotate clockwise: N -> E -> S -> W -> N.
    pub fn rotate_right(self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    /// Unit vector pointing the way this orientation faces.
    pub fn forward_vector(self) -> Vec2 {
        match self {
            Orientation::North => vec2(0.0, -1.0),
            Orientation::South => vec2(0.0, 1.0),
            Orientation::East => vec2(1.0, 0.0),
            Orientation::West => vec2(-1.0, 0.0),
        }
    }

    /// Unit vector pointing directly away from the facing.
    pub fn backward_vector(self) -> Vec2 {
        -self.forward_vector()
    }

    /// Unit vector for a left strafe: forward rotated a quarter turn.
    pub fn strafe_left_vector(self) -> Vec2 {
        self.rotate_right().forward_vector()
    }

    /// Unit vector for a right strafe: forward rotated the other quarter turn.
    pub fn strafe_right_vector(self) -> Vec2 {
        self.rotate_left().forward_vector()
    }

    /// Row in the 24x24 sprite sheet holding this facing's frame.
    pub fn sheet_row(self) -> usize {
        match self {
            Orientation::West => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::North => 3,
        }
    }
}
