//! Frame composition
//!
//! Pure presentation: black background, the horde, the player frame for
//! the current facing, the score and zombie-count labels, and the GAME
//! OVER overlay. Reads the session, never mutates it.

use macroquad::prelude::*;

use crate::game::{Phase, Session};
use crate::sprite::SpriteSheet;

const LABEL_COLOR: Color = Color::new(1.0, 1.0, 0.5, 1.0);
const LABEL_FONT_SIZE: u16 = 15;
const OVERLAY_FONT_SIZE: u16 = 45;
const LABEL_MARGIN: f32 = 10.0;

/// The sheets the frame is drawn from. Either may be missing, in which
/// case its actors are invisible but the game still runs.
pub struct Sprites {
    pub player: SpriteSheet,
    pub zombie: SpriteSheet,
}

/// Draw one complete frame for the current session state.
pub fn draw_frame(session: &Session, sprites: &Sprites, font: Option<&Font>) {
    clear_background(BLACK);

    for zombie in &session.zombies {
        sprites.zombie.draw((0, 0), zombie.rect.x, zombie.rect.y);
    }
    let player = &session.player;
    sprites.player.draw(player.sprite_cell(), player.rect.x, player.rect.y);

    let score = format!("Score: {}", player.display_score());
    draw_label_right(&score, font);
    let count = format!("Zombies: {}", session.zombie_count());
    draw_label_left(&count, font);

    if session.phase() == Phase::GameOver {
        draw_overlay("GAME OVER", font);
    }
}

fn text_params(font: Option<&Font>, font_size: u16) -> TextParams<'_> {
    TextParams {
        font,
        font_size,
        color: LABEL_COLOR,
        ..Default::default()
    }
}

fn draw_label_left(text: &str, font: Option<&Font>) {
    let dims = measure_text(text, font, LABEL_FONT_SIZE, 1.0);
    draw_text_ex(
        text,
        LABEL_MARGIN,
        LABEL_MARGIN + dims.offset_y,
        text_params(font, LABEL_FONT_SIZE),
    );
}

fn draw_label_right(text: &str, font: Option<&Font>) {
    let dims = measure_text(text, font, LABEL_FONT_SIZE, 1.0);
    draw_text_ex(
        text,
        screen_width() - dims.width - LABEL_MARGIN,
        LABEL_MARGIN + dims.offset_y,
        text_params(font, LABEL_FONT_SIZE),
    );
}

fn draw_overlay(text: &str, font: Option<&Font>) {
    let dims = measure_text(text, font, OVERLAY_FONT_SIZE, 1.0);
    draw_text_ex(
        text,
        (screen_width() - dims.width) / 2.0,
        (screen_height() - dims.height) / 2.0 + dims.offset_y,
        text_params(font, OVERLAY_FONT_SIZE),
    );
}
