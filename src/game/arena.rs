//! Arena bounds and bounded motion
//!
//! The arena is a fixed axis-aligned rectangle that every actor stays
//! inside. Movement goes through a two-stage policy:
//!
//! 1. Accept the candidate rectangle if it is fully contained.
//! 2. Otherwise, on each axis where the candidate lies past the arena's
//!    origin, subtract the arena's origin offset and retry.
//!
//! Stage 2 is a wrap-toward-zero correction, not a clamp to the far edge.
//! With the arena at the origin the correction is a no-op and out-of-bounds
//! movement is simply rejected; actors then stop at the wall. The exact
//! policy is load-bearing for how actors hug the arena edges.

use macroquad::math::{Rect, Vec2};

/// The bounded play area.
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    rect: Rect,
}

impl Arena {
    /// Arena of the given size with its origin at (0, 0).
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, width, height),
        }
    }

    /// Arena covering an arbitrary rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Is `r` fully inside the arena? Touching an edge counts as inside.
    pub fn contains_rect(&self, r: &Rect) -> bool {
        r.x >= self.rect.x
            && r.y >= self.rect.y
            && r.x + r.w <= self.rect.x + self.rect.w
            && r.y + r.h <= self.rect.y + self.rect.h
    }

    /// Move `rect` by `velocity`, keeping it inside the arena.
    ///
    /// Returns the resolved rectangle and whether any movement happened.
    /// A zero velocity reports no movement.
    pub fn advance(&self, rect: Rect, velocity: Vec2) -> (Rect, bool) {
        if velocity == Vec2::ZERO {
            return (rect, false);
        }
        let mut candidate = rect.offset(velocity);
        if self.contains_rect(&candidate) {
            return (candidate, true);
        }
        // Wrap-toward-zero correction, per axis.
        if self.rect.x < candidate.x {
            candidate.x -= self.rect.x;
        }
        if self.rect.y < candidate.y {
            candidate.y -= self.rect.y;
        }
        if self.contains_rect(&candidate) {
            (candidate, true)
        } else {
            (rect, false)
        }
    }
}
