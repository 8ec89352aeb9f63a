//! Sprite loading.
//!
//! A sprite is a small block of text art stored as `<asset_dir>/<name>.txt`
//! (a bare `<name>` file is accepted too).  Nothing here is required for the
//! game to work: every missing sprite is logged and the renderer draws a
//! primitive shape instead.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::GameError;

/// Number of per-level enemy sprites (`enemy1` .. `enemy9`).
pub const ENEMY_SPRITE_COUNT: usize = 9;

/// Rows of text art, drawn top-left anchored.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub rows: Vec<String>,
}

impl Sprite {
    pub fn from_text(name: &str, text: &str) -> Result<Self, GameError> {
        let rows: Vec<String> = text
            .lines()
            .map(|l| l.trim_end().to_string())
            .collect();
        // Drop trailing blank lines so the sprite height is what is drawn.
        let used = rows.iter().rposition(|r| !r.is_empty()).map_or(0, |i| i + 1);
        if used == 0 {
            return Err(GameError::AssetEmpty(name.to_string()));
        }
        Ok(Self {
            rows: rows[..used].to_vec(),
        })
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Load one named sprite from `dir`.
pub fn load_sprite(dir: &Path, name: &str) -> Result<Sprite, GameError> {
    for candidate in [format!("{name}.txt"), name.to_string()] {
        let path = dir.join(&candidate);
        match fs::read_to_string(&path) {
            Ok(text) => return Sprite::from_text(name, &text),
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(GameError::io(path, e)),
        }
    }
    Err(GameError::AssetMissing(name.to_string()))
}

fn load_logged(dir: &Path, name: &str) -> Option<Sprite> {
    match load_sprite(dir, name) {
        Ok(sprite) => {
            log::info!(
                "{name} loaded ({}x{} cells)",
                sprite.width(),
                sprite.height()
            );
            Some(sprite)
        }
        Err(err) => {
            log::warn!("Failed to load {name}: {err}");
            None
        }
    }
}

/// Every sprite the game knows about, each optional.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssetSet {
    pub background: Option<Sprite>,
    pub mech: Option<Sprite>,
    pub bullet: Option<Sprite>,
    pub boss: Option<Sprite>,
    /// Indexed by `level - 1`.
    pub enemies: Vec<Option<Sprite>>,
}

impl AssetSet {
    pub fn load(dir: &Path) -> Self {
        Self {
            background: load_logged(dir, "background"),
            mech: load_logged(dir, "mech"),
            bullet: load_logged(dir, "bullet"),
            boss: load_logged(dir, "boss"),
            enemies: (1..=ENEMY_SPRITE_COUNT)
                .map(|i| load_logged(dir, &format!("enemy{i}")))
                .collect(),
        }
    }

    /// The sprites a sprite renderer cannot do without.
    pub fn has_core_sprites(&self) -> bool {
        self.mech.is_some() && self.bullet.is_some() && self.boss.is_some()
    }

    /// Enemy sprite for `level`, if that level has one.
    pub fn enemy_sprite(&self, level: u32) -> Option<&Sprite> {
        let index = usize::try_from(level).ok()?.checked_sub(1)?;
        self.enemies.get(index)?.as_ref()
    }
}
