//! Zombie actor
//!
//! Spawns snapped to an arena corner, shambles toward the player along the
//! rounded unit direction (8-way movement, no smooth angles), and deals
//! contact damage every tick the rectangles overlap. Zombies are never
//! removed during a session; the horde only grows until the restart.

use macroquad::math::{vec2, Rect, Vec2};
use rand::Rng;

use super::arena::Arena;
use super::player::{DamageOutcome, Player};
use crate::logging::GameLog;

pub const ZOMBIE_SIZE: f32 = 24.0;
pub const ZOMBIE_SPEED: f32 = 2.0;
pub const ZOMBIE_HEALTH: i32 = 1;
pub const ZOMBIE_ATTACK: i32 = 1;

pub struct Zombie {
    pub rect: Rect,
    velocity: Vec2,
    speed: f32,
    health: i32,
    attack: i32,
}

impl Zombie {
    /// Spawn at one of the four arena corners.
    ///
    /// A uniform point is drawn inside the arena, then each axis snaps to
    /// the near or far edge depending on which half the point fell in.
    /// Corner-biased on purpose; not uniform placement.
    pub fn spawn(arena: &Arena, rng: &mut impl Rng) -> Self {
        let area = arena.rect();
        let x = rng.gen_range(0.0..area.w);
        let y = rng.gen_range(0.0..area.h);
        let x = if x < area.w / 2.0 {
            0.0
        } else {
            area.w - ZOMBIE_SIZE
        };
        let y = if y < area.h / 2.0 {
            0.0
        } else {
            area.h - ZOMBIE_SIZE
        };
        Self {
            rect: Rect::new(area.x + x, area.y + y, ZOMBIE_SIZE, ZOMBIE_SIZE),
            velocity: Vec2::ZERO,
            speed: ZOMBIE_SPEED,
            health: ZOMBIE_HEALTH,
            attack: ZOMBIE_ATTACK,
        }
    }

    /// Spawn at an exact position; used by tests.
    #[cfg(test)]
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, ZOMBIE_SIZE, ZOMBIE_SIZE),
            velocity: Vec2::ZERO,
            speed: ZOMBIE_SPEED,
            health: ZOMBIE_HEALTH,
            attack: ZOMBIE_ATTACK,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Unit direction toward the target, each axis rounded to -1, 0 or 1.
    ///
    /// Exact overlap short-circuits to zero before any division happens.
    pub fn chase_direction(&self, target: &Rect) -> Vec2 {
        let dx = target.x - self.rect.x;
        let dy = target.y - self.rect.y;
        if dx == 0.0 && dy == 0.0 {
            return Vec2::ZERO;
        }
        let len = (dx * dx + dy * dy).sqrt();
        vec2((dx / len).round(), (dy / len).round())
    }

    /// One simulation step: bite if overlapping, then close in while the
    /// player is still alive. Contact damage repeats every tick of overlap.
    pub fn tick(&mut self, player: &mut Player, arena: &Arena, log: &dyn GameLog) -> DamageOutcome {
        let mut outcome = DamageOutcome::Alive;
        if self.rect.overlaps(&player.rect) {
            outcome = player.take_damage(self.attack, log);
        }
        if player.is_alive() {
            self.velocity = self.chase_direction(&player.rect) * self.speed;
            let (rect, _) = arena.advance(self.rect, self.velocity);
            self.rect = rect;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NopLog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn arena() -> Arena {
        Arena::new(800.0, 600.0)
    }

    #[test]
    fn test_spawn_lands_on_a_corner() {
        let arena = arena();
        let mut rng = StdRng::seed_from_u64(7);
        let corners = [
            (0.0, 0.0),
            (0.0, 576.0),
            (776.0, 0.0),
            (776.0, 576.0),
        ];
        for _ in 0..32 {
            let z = Zombie::spawn(&arena, &mut rng);
            assert!(
                corners.contains(&(z.rect.x, z.rect.y)),
                "spawned off-corner at ({}, {})",
                z.rect.x,
                z.rect.y
            );
        }
    }

    #[test]
    fn test_chase_direction_is_axis_rounded() {
        let z = Zombie::at(100.0, 100.0);
        // Player due north: straight up.
        assert_eq!(z.chase_direction(&Rect::new(100.0, 40.0, 24.0, 24.0)), vec2(0.0, -1.0));
        // Player far east, slightly south: the shallow axis rounds to zero.
        assert_eq!(z.chase_direction(&Rect::new(400.0, 110.0, 24.0, 24.0)), vec2(1.0, 0.0));
        // Perfect diagonal rounds both axes to one.
        assert_eq!(z.chase_direction(&Rect::new(200.0, 200.0, 24.0, 24.0)), vec2(1.0, 1.0));
    }

    #[test]
    fn test_chase_direction_on_exact_overlap_is_zero() {
        let z = Zombie::at(100.0, 100.0);
        assert_eq!(z.chase_direction(&Rect::new(100.0, 100.0, 24.0, 24.0)), Vec2::ZERO);
    }

    #[test]
    fn test_tick_moves_toward_player() {
        let mut z = Zombie::at(100.0, 100.0);
        let mut player = Player::new(400.0, 100.0);
        z.tick(&mut player, &arena(), &NopLog);
        assert_eq!((z.rect.x, z.rect.y), (102.0, 100.0));
    }

    #[test]
    fn test_overlapping_zombie_stays_put_and_bites() {
        let mut z = Zombie::at(400.0, 300.0);
        let mut player = Player::new(400.0, 300.0);
        let outcome = z.tick(&mut player, &arena(), &NopLog);
        assert_eq!(outcome, DamageOutcome::Alive);
        assert_eq!(player.health(), 2);
        assert_eq!((z.rect.x, z.rect.y), (400.0, 300.0));
    }

    #[test]
    fn test_contact_damage_repeats_every_tick() {
        let mut z = Zombie::at(400.0, 300.0);
        let mut player = Player::new(400.0, 300.0);
        let a = arena();
        assert_eq!(z.tick(&mut player, &a, &NopLog), DamageOutcome::Alive);
        assert_eq!(z.tick(&mut player, &a, &NopLog), DamageOutcome::Alive);
        assert_eq!(z.tick(&mut player, &a, &NopLog), DamageOutcome::Died);
        assert_eq!(player.health(), 0);
        // Once the player is down the zombie freezes in place.
        let before = (z.rect.x, z.rect.y);
        let _ = z.tick(&mut player, &a, &NopLog);
        assert_eq!((z.rect.x, z.rect.y), before);
    }
}
