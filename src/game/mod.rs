//! Core simulation
//!
//! Everything that makes the game tick, kept free of rendering:
//! - direction: cardinal facings and movement vectors
//! - arena: bounds and the two-stage bounded-motion policy
//! - player: input-driven actor with health, score and facing
//! - zombie: corner-spawned chaser dealing contact damage
//! - session: spawner, phase machine and the per-tick update order
//!
//! The only macroquad surface used here is its math and key-code types,
//! so the whole module tests headless.

// Several accessors and constants are exercised only by the test suite
#![allow(dead_code)]

pub mod arena;
pub mod direction;
pub mod player;
pub mod session;
pub mod zombie;

pub use arena::Arena;
pub use direction::Orientation;
pub use player::{DamageOutcome, Player, PlayerState};
pub use session::{Phase, Session, SessionCommand};
pub use zombie::Zombie;
