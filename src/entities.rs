//! All game entity types: pure data, no logic beyond geometry helpers.
//!
//! Enemies and the boss are anchored at their top-left corner; their
//! collision centre sits one radius in from that corner.

use crate::config::Rules;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    Finished,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A player bullet.  Always travels straight up at `Rules::bullet_speed`.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bullet {
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

// ── Player, enemies & boss ────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Side length of the (square) mech.
    pub size: f32,
    /// Counts down while fire is held; a shot leaves when it reaches zero.
    pub shoot_timer: i32,
}

impl Player {
    pub fn center_x(&self) -> f32 {
        self.x + self.size / 2.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Velocity per tick.  Exactly one axis is non-zero.
    pub vx: f32,
    pub vy: f32,
}

impl Enemy {
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.radius, self.y + self.radius)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boss {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub x_speed: f32,
    /// Drives the vertical sine wave.
    pub phase: f32,
    pub hits: u32,
}

impl Boss {
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.radius, self.y + self.radius)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so update functions can return a new
/// copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    /// Live bullets in spawn order.
    pub bullets: Vec<Bullet>,
    /// Live enemies in spawn order.
    pub enemies: Vec<Enemy>,
    /// Present only during the boss fight.
    pub boss: Option<Boss>,
    pub level: u32,
    pub kills: u32,
    pub status: GameStatus,
    pub frame: u64,
    pub rules: Rules,
}
