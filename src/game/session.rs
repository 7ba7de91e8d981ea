//! Session loop and zombie spawner
//!
//! Owns the player and the horde, paces spawning on a decaying interval,
//! and runs the Playing/GameOver phase machine. Simulation freezes in
//! GameOver; the last frame keeps rendering under the overlay until any
//! key restarts a fresh session.

use macroquad::input::KeyCode;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::arena::Arena;
use super::player::{DamageOutcome, Player, PLAYER_SIZE};
use super::zombie::Zombie;
use crate::input::{ControlMap, InputEvent};
use crate::logging::GameLog;

/// Ticks between spawns at session start.
pub const SPAWN_INTERVAL_BASE: u32 = 160;
/// How much the interval shrinks each time it fires.
pub const SPAWN_INTERVAL_STEP: u32 = 20;
/// Decay guard: the interval only shrinks while above this, so from the
/// base of 160 it settles at 20 and spawning never stops.
pub const SPAWN_INTERVAL_FLOOR: u32 = 21;

/// Session-level state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// What the outer frame loop should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Continue,
    Quit,
}

pub struct Session {
    arena: Arena,
    pub player: Player,
    pub zombies: Vec<Zombie>,
    frames: u32,
    spawn_interval: u32,
    phase: Phase,
    controls: ControlMap,
    rng: StdRng,
    log: Box<dyn GameLog>,
}

impl Session {
    pub fn new(arena: Arena, controls: ControlMap, log: Box<dyn GameLog>) -> Self {
        Self::with_rng(arena, controls, log, StdRng::from_entropy())
    }

    /// Deterministic construction for tests.
    pub fn with_rng(
        arena: Arena,
        controls: ControlMap,
        log: Box<dyn GameLog>,
        mut rng: StdRng,
    ) -> Self {
        let player = Self::fresh_player(&arena);
        let zombies = vec![Zombie::spawn(&arena, &mut rng)];
        Self {
            arena,
            player,
            zombies,
            frames: 0,
            spawn_interval: SPAWN_INTERVAL_BASE,
            phase: Phase::Playing,
            controls,
            rng,
            log,
        }
    }

    fn fresh_player(arena: &Arena) -> Player {
        let area = arena.rect();
        Player::new(
            area.x + (area.w - PLAYER_SIZE) / 2.0,
            area.y + (area.h - PLAYER_SIZE) / 2.0,
        )
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn zombie_count(&self) -> usize {
        self.zombies.len()
    }

    pub fn spawn_interval(&self) -> u32 {
        self.spawn_interval
    }

    pub fn log(&self) -> &dyn GameLog {
        self.log.as_ref()
    }

    /// Fresh player, a single zombie, and the timer back at base.
    pub fn restart(&mut self) {
        self.log.debug("restarting session");
        self.player = Self::fresh_player(&self.arena);
        self.zombies = vec![Zombie::spawn(&self.arena, &mut self.rng)];
        self.frames = 0;
        self.spawn_interval = SPAWN_INTERVAL_BASE;
        self.phase = Phase::Playing;
    }

    /// Advance the session by one tick, consuming this frame's events.
    pub fn tick(&mut self, events: &[InputEvent]) -> SessionCommand {
        for event in events {
            match event {
                InputEvent::Quit => {
                    self.log.debug("window close requested, quitting");
                    return SessionCommand::Quit;
                }
                InputEvent::KeyDown {
                    key: KeyCode::Escape,
                    ..
                } => {
                    self.log.debug("escape pressed, quitting");
                    return SessionCommand::Quit;
                }
                _ => {}
            }
        }

        match self.phase {
            Phase::GameOver => {
                // Simulation stays frozen; any key restarts.
                let any_key = events
                    .iter()
                    .any(|e| matches!(e, InputEvent::KeyDown { .. }));
                if any_key {
                    self.restart();
                }
            }
            Phase::Playing => self.tick_playing(events),
        }
        SessionCommand::Continue
    }

    fn tick_playing(&mut self, events: &[InputEvent]) {
        self.frames += 1;
        if self.frames > self.spawn_interval {
            self.frames = 0;
            if self.spawn_interval > SPAWN_INTERVAL_FLOOR {
                self.spawn_interval -= SPAWN_INTERVAL_STEP;
            }
            self.zombies.push(Zombie::spawn(&self.arena, &mut self.rng));
            self.log.debug(&format!(
                "spawned zombie #{}, next in {} ticks",
                self.zombies.len(),
                self.spawn_interval
            ));
        }

        for event in events {
            self.log.debug(&format!("dispatching {event:?}"));
            self.player.handle_event(event, &self.controls);
        }

        self.player.tick(&self.arena, self.zombies.len());

        let mut died = false;
        for zombie in &mut self.zombies {
            let outcome = zombie.tick(&mut self.player, &self.arena, self.log.as_ref());
            if outcome == DamageOutcome::Died {
                died = true;
            }
        }
        if died {
            self.log.debug("game over");
            self.phase = Phase::GameOver;
        }
    }
}
