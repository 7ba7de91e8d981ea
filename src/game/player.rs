//! Player actor
//!
//! Owns health, score, facing and velocity. Velocity is edge-triggered:
//! a key-down sets the affected component through the directional model,
//! the matching key-up zeroes it. Damage reports an explicit outcome value
//! instead of unwinding; the session turns `Died` into the game-over
//! transition the same tick.

use macroquad::math::{Rect, Vec2};

use super::arena::Arena;
use super::direction::Orientation;
use crate::input::{Action, ControlMap, InputEvent};
use crate::logging::GameLog;

pub const PLAYER_SIZE: f32 = 24.0;
pub const PLAYER_SPEED: f32 = 10.0;
pub const PLAYER_START_HEALTH: i32 = 3;
/// Score accrued per tick per live zombie. Fractional on purpose; rounding
/// happens only at display time.
pub const SCORE_PER_ZOMBIE_TICK: f32 = 0.1;

/// Movement state. The prototype's longer label list (sneaking, dancing,
/// dying, ...) never gated behavior, so only the load-bearing pair exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Standing,
    Walking,
}

/// Result of applying damage: the terminal signal as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    Alive,
    Died,
}

pub struct Player {
    pub rect: Rect,
    velocity: Vec2,
    speed: f32,
    pub orientation: Orientation,
    pub state: PlayerState,
    health: i32,
    score: f32,
}

impl Player {
    /// New player with full health and zero score at the given top-left.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, PLAYER_SIZE, PLAYER_SIZE),
            velocity: Vec2::ZERO,
            speed: PLAYER_SPEED,
            orientation: Orientation::South,
            state: PlayerState::Standing,
            health: PLAYER_START_HEALTH,
            score: 0.0,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Raw fractional score accumulator.
    pub fn score(&self) -> f32 {
        self.score
    }

    /// Score as shown on screen.
    pub fn display_score(&self) -> i32 {
        self.score.round() as i32
    }

    /// Sprite-sheet cell for the current facing.
    pub fn sprite_cell(&self) -> (usize, usize) {
        (0, self.orientation.sheet_row())
    }

    /// Map a raw key event through the bindings. Keys bound to nothing are
    /// ignored; one key may drive several actions.
    pub fn handle_event(&mut self, event: &InputEvent, controls: &ControlMap) {
        let (key, pressed) = match event {
            InputEvent::KeyDown { key, .. } => (*key, true),
            InputEvent::KeyUp { key } => (*key, false),
            InputEvent::Quit => return,
        };
        for action in controls.actions_for(key) {
            self.apply_action(action, pressed);
        }
    }

    fn apply_action(&mut self, action: Action, pressed: bool) {
        match action {
            Action::MoveNorth => self.absolute_move(Orientation::North, pressed),
            Action::MoveSouth => self.absolute_move(Orientation::South, pressed),
            Action::MoveEast => self.absolute_move(Orientation::East, pressed),
            Action::MoveWest => self.absolute_move(Orientation::West, pressed),
            Action::MoveForward => {
                self.set_axis_velocity(self.orientation.forward_vector(), pressed)
            }
            Action::MoveBackward => {
                self.set_axis_velocity(self.orientation.backward_vector(), pressed)
            }
            Action::StrafeLeft => {
                self.set_axis_velocity(self.orientation.strafe_left_vector(), pressed)
            }
            Action::StrafeRight => {
                self.set_axis_velocity(self.orientation.strafe_right_vector(), pressed)
            }
            Action::RotateLeft => {
                if pressed {
                    self.orientation = self.orientation.rotate_left();
                }
            }
            Action::RotateRight => {
                if pressed {
                    self.orientation = self.orientation.rotate_right();
                }
            }
            Action::Attack | Action::Inventory => {}
        }
    }

    /// Absolute moves face the direction they move.
    fn absolute_move(&mut self, towards: Orientation, pressed: bool) {
        if pressed {
            self.orientation = towards;
        }
        self.set_axis_velocity(towards.forward_vector(), pressed);
    }

    /// Set (on press) or zero (on release) the velocity component the unit
    /// vector lies on. Only the affected axis changes, so e.g. releasing a
    /// vertical key keeps horizontal motion.
    fn set_axis_velocity(&mut self, dir: Vec2, pressed: bool) {
        if dir.x != 0.0 {
            self.velocity.x = if pressed { dir.x * self.speed } else { 0.0 };
        }
        if dir.y != 0.0 {
            self.velocity.y = if pressed { dir.y * self.speed } else { 0.0 };
        }
    }

    /// One simulation step: accrue score, move through the arena, settle
    /// the standing/walking state.
    pub fn tick(&mut self, arena: &Arena, zombie_count: usize) {
        self.score += SCORE_PER_ZOMBIE_TICK * zombie_count as f32;
        let (rect, moved) = arena.advance(self.rect, self.velocity);
        self.rect = rect;
        if !moved {
            self.state = PlayerState::Standing;
        }
        if self.velocity == Vec2::ZERO {
            self.state = PlayerState::Standing;
        } else if self.state == PlayerState::Standing {
            self.state = PlayerState::Walking;
        }
    }

    /// Apply damage, clamping health at zero. Returns `Died` exactly when
    /// health hits zero; the caller must consume it within the same tick.
    pub fn take_damage(&mut self, amount: i32, log: &dyn GameLog) -> DamageOutcome {
        self.set_health(self.health - amount, log)
    }

    fn set_health(&mut self, value: i32, log: &dyn GameLog) -> DamageOutcome {
        self.health = value.max(0);
        if self.health == 0 {
            log.debug("player is dead");
            DamageOutcome::Died
        } else {
            log.debug(&format!("player health = {}", self.health));
            DamageOutcome::Alive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NopLog;
    use macroquad::input::KeyCode;
    use macroquad::math::vec2;

    fn arena() -> Arena {
        Arena::new(800.0, 600.0)
    }

    fn press(player: &mut Player, key: KeyCode) {
        player.handle_event(&InputEvent::key_down(key), &ControlMap::default_bindings());
    }

    fn release(player: &mut Player, key: KeyCode) {
        player.handle_event(&InputEvent::key_up(key), &ControlMap::default_bindings());
    }

    #[test]
    fn test_key_down_sets_velocity_and_key_up_zeroes_it() {
        let mut player = Player::new(400.0, 300.0);
        press(&mut player, KeyCode::W);
        assert_eq!(player.velocity(), vec2(0.0, -10.0));
        assert_eq!(player.orientation, Orientation::North);

        press(&mut player, KeyCode::D);
        assert_eq!(player.velocity(), vec2(10.0, -10.0));

        release(&mut player, KeyCode::W);
        // Only the vertical component clears.
        assert_eq!(player.velocity(), vec2(10.0, 0.0));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut player = Player::new(400.0, 300.0);
        press(&mut player, KeyCode::Z);
        press(&mut player, KeyCode::F12);
        assert_eq!(player.velocity(), Vec2::ZERO);
        assert_eq!(player.orientation, Orientation::South);
    }

    #[test]
    fn test_rotate_fires_on_key_down_only() {
        let mut player = Player::new(400.0, 300.0);
        press(&mut player, KeyCode::Q);
        assert_eq!(player.orientation, Orientation::East); // south rotated left
        release(&mut player, KeyCode::Q);
        assert_eq!(player.orientation, Orientation::East);
        press(&mut player, KeyCode::E);
        assert_eq!(player.orientation, Orientation::South);
    }

    #[test]
    fn test_relative_movement_follows_facing() {
        let controls = {
            let mut map = ControlMap::empty();
            map.bind(Action::MoveForward, vec![KeyCode::Up]);
            map.bind(Action::StrafeLeft, vec![KeyCode::Right]);
            map
        };
        let mut player = Player::new(400.0, 300.0);
        player.orientation = Orientation::North;

        player.handle_event(&InputEvent::key_down(KeyCode::Up), &controls);
        assert_eq!(player.velocity(), vec2(0.0, -10.0));
        player.handle_event(&InputEvent::key_up(KeyCode::Up), &controls);

        player.handle_event(&InputEvent::key_down(KeyCode::Right), &controls);
        // Facing north, a left strafe slides east.
        assert_eq!(player.velocity(), vec2(10.0, 0.0));
    }

    #[test]
    fn test_state_machine_standing_walking() {
        let mut player = Player::new(400.0, 300.0);
        assert_eq!(player.state, PlayerState::Standing);

        press(&mut player, KeyCode::S);
        player.tick(&arena(), 0);
        assert_eq!(player.state, PlayerState::Walking);

        release(&mut player, KeyCode::S);
        player.tick(&arena(), 0);
        assert_eq!(player.state, PlayerState::Standing);
    }

    #[test]
    fn test_blocked_at_wall_still_counts_as_walking() {
        let mut player = Player::new(0.0, 300.0);
        press(&mut player, KeyCode::A);
        player.tick(&arena(), 0);
        assert_eq!(player.rect.x, 0.0);
        assert_eq!(player.state, PlayerState::Walking);
    }

    #[test]
    fn test_take_damage_and_clamp() {
        let mut player = Player::new(0.0, 0.0);
        assert_eq!(player.take_damage(1, &NopLog), DamageOutcome::Alive);
        assert_eq!(player.health(), 2);
        assert_eq!(player.take_damage(2, &NopLog), DamageOutcome::Died);
        assert_eq!(player.health(), 0);
        // Overkill never goes negative.
        assert_eq!(player.take_damage(5, &NopLog), DamageOutcome::Died);
        assert_eq!(player.health(), 0);
    }

    #[test]
    fn test_score_accrues_per_tick_per_zombie() {
        let mut player = Player::new(400.0, 300.0);
        let arena = arena();
        for _ in 0..7 {
            player.tick(&arena, 3);
        }
        assert!((player.score() - 0.1 * 3.0 * 7.0).abs() < 1e-4);
        assert_eq!(player.display_score(), 2);
    }
}
