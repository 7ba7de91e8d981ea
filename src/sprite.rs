//! Sprite sheets
//!
//! Assets are looked up in `resources/` by exact file stem or exact file
//! name, first match wins (names are unique in practice, so scan order is
//! irrelevant). A missing or unloadable sheet is not an error: the sheet
//! simply carries no texture and every draw through it is skipped.

use std::fs;
use std::path::{Path, PathBuf};

use macroquad::prelude::*;

/// Cell edge length in the sheet grid.
pub const SPRITE_SIZE: f32 = 24.0;

/// Directory scanned for sheet images.
pub const RESOURCE_DIR: &str = "resources";

/// A grid-indexed sprite sheet over an optional texture.
pub struct SpriteSheet {
    texture: Option<Texture2D>,
}

impl SpriteSheet {
    /// Load the sheet named `name` from the resource directory.
    pub async fn load(name: &str) -> Self {
        let texture = match find_resource(Path::new(RESOURCE_DIR), name) {
            Some(path) => match load_texture(&path.to_string_lossy()).await {
                Ok(texture) => {
                    texture.set_filter(FilterMode::Nearest);
                    Some(texture)
                }
                Err(_) => None,
            },
            None => None,
        };
        Self { texture }
    }

    /// Sheet with no backing texture; draws are skipped.
    #[cfg(test)]
    pub fn missing() -> Self {
        Self { texture: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    /// Source rectangle for cell `(col, row)`.
    ///
    /// Cells crop one pixel short of the full grid step; the sheets were
    /// authored that way and the frame data includes the margin.
    pub fn cell_source(col: usize, row: usize) -> Rect {
        Rect::new(
            col as f32 * SPRITE_SIZE,
            row as f32 * SPRITE_SIZE,
            SPRITE_SIZE - 1.0,
            SPRITE_SIZE - 1.0,
        )
    }

    /// Draw cell `(col, row)` with its top-left at `(x, y)`. A sheet with
    /// no texture draws nothing.
    pub fn draw(&self, (col, row): (usize, usize), x: f32, y: f32) {
        let Some(texture) = &self.texture else {
            return;
        };
        draw_texture_ex(
            texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                source: Some(Self::cell_source(col, row)),
                ..Default::default()
            },
        );
    }
}

/// Find a file in `dir` whose stem or full name equals `name`.
fn find_resource(dir: &Path, name: &str) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    for entry in entries.flatten() {
        let path = entry.path();
        let stem_matches = path
            .file_stem()
            .is_some_and(|stem| stem.to_string_lossy() == name);
        let name_matches = path
            .file_name()
            .is_some_and(|fname| fname.to_string_lossy() == name);
        if stem_matches || name_matches {
            return Some(path);
        }
    }
    None
}
