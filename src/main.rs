//! Flee: a top-down arena survival game
//!
//! One bounded arena, one player, an ever-growing horde. Zombies spawn on
//! a decaying timer and chase the player; contact drains health; death
//! shows the score until any key starts a fresh run.
//!
//! The simulation lives in `game` and is strictly sequential: poll input,
//! tick the session, draw the frame, wait for the next one.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod cli;
mod game;
mod input;
mod logging;
mod render;
mod sprite;

use std::path::Path;

use macroquad::prelude::*;

use game::{Arena, Session, SessionCommand};
use input::ControlMap;
use logging::{GameLog, LogLevel, NopLog, StderrLog};
use render::Sprites;
use sprite::SpriteSheet;

/// Optional key-binding override file.
const BINDINGS_PATH: &str = "resources/controls.ron";
/// Optional label font; the built-in font is the fallback.
const FONT_PATH: &str = "resources/Tahoma.ttf";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Flee v{VERSION}"),
        window_width: 800,
        window_height: 600,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = cli::parse_or_default();
    let log: Box<dyn GameLog> = if args.debug {
        Box::new(StderrLog::new(LogLevel::Debug))
    } else {
        Box::new(NopLog)
    };

    // Window close must surface as an event, not kill the loop outright.
    prevent_quit();

    let sprites = Sprites {
        player: SpriteSheet::load("player").await,
        zombie: SpriteSheet::load("zombie").await,
    };
    if !sprites.player.is_loaded() {
        log.warning("player sheet not found, player will be invisible");
    }
    if !sprites.zombie.is_loaded() {
        log.warning("zombie sheet not found, zombies will be invisible");
    }

    let font = match load_ttf_font(FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            log.debug(&format!("label font unavailable ({err}), using built-in"));
            None
        }
    };

    let controls = ControlMap::load_or_default(Path::new(BINDINGS_PATH), log.as_ref());
    let arena = Arena::new(screen_width(), screen_height());
    let mut session = Session::new(arena, controls, log);

    loop {
        let events = input::poll_events();
        if session.tick(&events) == SessionCommand::Quit {
            break;
        }
        render::draw_frame(&session, &sprites, font.as_ref());
        next_frame().await;
    }
    session.log().debug("done");
}
