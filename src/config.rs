//! Game configuration loaded from an optional RON file.
//!
//! Every tuning constant lives in [`Rules`] so the play area and pacing can be
//! changed without touching the core logic.  Missing fields fall back to the
//! reference values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::GameError;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mech_shooter.ron";

/// Play-area dimensions and gameplay tuning.  `Copy` so it can ride along in
/// every `GameState` clone.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Rules {
    // ── Play area ──
    pub width: f32,
    pub height: f32,

    // ── Levels ──
    /// The last level; it holds the boss fight instead of a wave.
    pub max_levels: u32,
    pub enemies_per_wave: usize,

    // ── Enemies ──
    pub enemy_radius: f32,
    /// Enemy speed is drawn uniformly from `[enemy_speed_min, enemy_speed_max)`.
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    /// Descending waves spawn with `y` in `[-height, -enemy_spawn_top_gap)`.
    pub enemy_spawn_top_gap: f32,
    /// Horizontal waves spawn up to this far outside the side edge.
    pub enemy_spawn_side_margin: f32,

    // ── Boss ──
    pub boss_radius: f32,
    pub boss_speed: f32,
    pub boss_base_y: f32,
    pub boss_amplitude: f32,
    pub boss_phase_step: f32,
    pub boss_hits_to_kill: u32,
    pub boss_kill_bonus: u32,

    // ── Bullets ──
    pub bullet_speed: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_collision_radius: f32,

    // ── Player ──
    pub player_size: f32,
    pub player_speed: f32,
    /// Ticks between shots while fire is held.
    pub shoot_delay: i32,

    // ── Pacing ──
    pub tick_rate: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            max_levels: 10,
            enemies_per_wave: 100,
            enemy_radius: 16.0,
            enemy_speed_min: 1.0,
            enemy_speed_max: 3.0,
            enemy_spawn_top_gap: 50.0,
            enemy_spawn_side_margin: 100.0,
            boss_radius: 50.0,
            boss_speed: 2.0,
            boss_base_y: 50.0,
            boss_amplitude: 100.0,
            boss_phase_step: 0.05,
            boss_hits_to_kill: 100,
            boss_kill_bonus: 50,
            bullet_speed: 10.0,
            bullet_width: 8.0,
            bullet_height: 16.0,
            bullet_collision_radius: 4.0,
            player_size: 64.0,
            player_speed: 5.0,
            shoot_delay: 10,
            tick_rate: 60,
        }
    }
}

impl Rules {
    /// Largest x the player's left edge may reach.
    pub fn player_max_x(&self) -> f32 {
        (self.width - self.player_size).max(0.0)
    }

    /// Reject values the spawn and motion code cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        let lengths = [
            ("width", self.width),
            ("height", self.height),
            ("enemy_radius", self.enemy_radius),
            ("boss_radius", self.boss_radius),
            ("bullet_speed", self.bullet_speed),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("player_size", self.player_size),
            ("player_speed", self.player_speed),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{name} must be a positive number, got {value}"));
            }
        }
        let non_negative = [
            ("enemy_speed_min", self.enemy_speed_min),
            ("enemy_spawn_top_gap", self.enemy_spawn_top_gap),
            ("enemy_spawn_side_margin", self.enemy_spawn_side_margin),
            ("boss_speed", self.boss_speed),
            ("boss_amplitude", self.boss_amplitude),
            ("bullet_collision_radius", self.bullet_collision_radius),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{name} must not be negative, got {value}"));
            }
        }
        if !(self.boss_base_y.is_finite() && self.boss_phase_step.is_finite()) {
            return Err("boss_base_y and boss_phase_step must be finite".to_string());
        }
        if !(self.enemy_speed_max.is_finite() && self.enemy_speed_min <= self.enemy_speed_max) {
            return Err(format!(
                "enemy_speed_max ({}) must not be below enemy_speed_min ({})",
                self.enemy_speed_max, self.enemy_speed_min
            ));
        }
        if self.enemy_spawn_top_gap >= self.height {
            return Err(format!(
                "enemy_spawn_top_gap ({}) must be smaller than height ({})",
                self.enemy_spawn_top_gap, self.height
            ));
        }
        if 2.0 * self.enemy_radius >= self.width || 2.0 * self.boss_radius >= self.width {
            return Err(format!(
                "enemies and the boss must fit inside width ({})",
                self.width
            ));
        }
        if self.player_size > self.width || self.player_size > self.height {
            return Err(format!(
                "player_size ({}) does not fit the play area",
                self.player_size
            ));
        }
        if self.max_levels == 0 || self.boss_hits_to_kill == 0 || self.tick_rate == 0 {
            return Err("max_levels, boss_hits_to_kill and tick_rate must be at least 1".to_string());
        }
        if self.shoot_delay < 0 {
            return Err(format!("shoot_delay must not be negative, got {}", self.shoot_delay));
        }
        Ok(())
    }
}

/// Full runtime configuration: rules plus where things live on disk.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rules: Rules,
    pub high_score_path: PathBuf,
    pub asset_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            high_score_path: default_high_score_path(),
            asset_dir: PathBuf::from("assets"),
        }
    }
}

/// High scores live next to the user's home directory, like other
/// terminal games do.
fn default_high_score_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".mech_shooter_scores.json")
}

impl GameConfig {
    /// Parse a RON document.  Fields left out keep their defaults; rules
    /// that parse but cannot be played are a format error too.
    pub fn from_ron_str(contents: &str, origin: &Path) -> Result<Self, GameError> {
        let config: Self = ron::from_str(contents).map_err(|e| GameError::ConfigFormat {
            path: origin.to_path_buf(),
            details: e.to_string(),
        })?;
        config.rules.validate().map_err(|details| GameError::ConfigFormat {
            path: origin.to_path_buf(),
            details,
        })?;
        Ok(config)
    }

    /// Read and parse the config at `path`.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let contents = fs::read_to_string(path).map_err(|e| GameError::io(path, e))?;
        Self::from_ron_str(&contents, path)
    }

    /// Load the config, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err @ GameError::ConfigFormat { .. }) => {
                log::error!("{err}. Using defaults.");
                Self::default()
            }
            Err(err) => {
                log::warn!("{err}. Using defaults.");
                Self::default()
            }
        }
    }
}
