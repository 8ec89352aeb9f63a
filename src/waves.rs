//! Wave generation: which enemies (or which boss) a level starts with.
//!
//! All randomness comes through the injected RNG so tests can seed it.

use rand::Rng;

use crate::config::Rules;
use crate::entities::{Boss, Enemy};

/// Where a wave enters the play area, picked by `level % 4`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WavePattern {
    /// Levels 1, 3, 5, …: drop in from above.
    Descending,
    /// Levels 2, 6, …: enter from the right edge.
    RightToLeft,
    /// Levels 4, 8, …: enter from the left edge.
    LeftToRight,
}

impl WavePattern {
    pub fn for_level(level: u32) -> Self {
        match level % 4 {
            1 | 3 => WavePattern::Descending,
            2 => WavePattern::RightToLeft,
            _ => WavePattern::LeftToRight,
        }
    }
}

/// Everything a level starts with.  A boss level has no enemies.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelSpawn {
    pub enemies: Vec<Enemy>,
    pub boss: Option<Boss>,
}

/// Build the opening entities for `level`.
///
/// Levels below `max_levels` get a full wave; `max_levels` gets the boss.
/// Anything past that is empty.
pub fn spawn_level(rules: &Rules, level: u32, rng: &mut impl Rng) -> LevelSpawn {
    if level < rules.max_levels {
        let pattern = WavePattern::for_level(level);
        let enemies = (0..rules.enemies_per_wave)
            .map(|_| spawn_enemy(rules, pattern, rng))
            .collect();
        LevelSpawn {
            enemies,
            boss: None,
        }
    } else if level == rules.max_levels {
        LevelSpawn {
            enemies: Vec::new(),
            boss: Some(spawn_boss(rules)),
        }
    } else {
        LevelSpawn {
            enemies: Vec::new(),
            boss: None,
        }
    }
}

/// Uniform draw from `[lo, hi)`; a collapsed range yields `lo`.
fn uniform(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    if lo < hi {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

fn spawn_enemy(rules: &Rules, pattern: WavePattern, rng: &mut impl Rng) -> Enemy {
    let r = rules.enemy_radius;
    let (speed_min, speed_max) = (rules.enemy_speed_min, rules.enemy_speed_max);
    let half = rules.height / 2.0;
    let margin = rules.enemy_spawn_side_margin;

    let (x, y, vx, vy) = match pattern {
        WavePattern::Descending => (
            uniform(rng, 0.0, rules.width - 2.0 * r),
            uniform(rng, -rules.height, -rules.enemy_spawn_top_gap),
            0.0,
            uniform(rng, speed_min, speed_max),
        ),
        WavePattern::RightToLeft => (
            uniform(rng, rules.width, rules.width + margin),
            uniform(rng, 0.0, half),
            uniform(rng, -speed_max, -speed_min),
            0.0,
        ),
        WavePattern::LeftToRight => (
            uniform(rng, -margin, 0.0),
            uniform(rng, 0.0, half),
            uniform(rng, speed_min, speed_max),
            0.0,
        ),
    };

    Enemy {
        x,
        y,
        radius: r,
        vx,
        vy,
    }
}

/// The boss starts horizontally centred at its base height.
pub fn spawn_boss(rules: &Rules) -> Boss {
    Boss {
        x: rules.width / 2.0 - rules.boss_radius,
        y: rules.boss_base_y,
        radius: rules.boss_radius,
        x_speed: rules.boss_speed,
        phase: 0.0,
        hits: 0,
    }
}
