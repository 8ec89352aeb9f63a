//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` and returns a brand-new `GameState`.  The only function that
//! needs randomness (`init_state`) takes the RNG as a parameter.

use rand::Rng;

use crate::config::Rules;
use crate::entities::{Boss, Bullet, Enemy, GameState, GameStatus, Player};
use crate::waves::spawn_level;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the opening state: mech centred on the bottom edge, level 1 wave
/// already spawned.
pub fn init_state(rules: Rules, rng: &mut impl Rng) -> GameState {
    let opening = spawn_level(&rules, 1, rng);
    GameState {
        player: Player {
            x: rules.player_max_x() / 2.0, // centred: (width - size) / 2
            y: rules.height - rules.player_size,
            size: rules.player_size,
            shoot_timer: 0,
        },
        bullets: Vec::new(),
        enemies: opening.enemies,
        boss: opening.boss,
        level: 1,
        kills: 0,
        status: GameStatus::Playing,
        frame: 0,
        rules,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    let new_x = (state.player.x - state.rules.player_speed).max(0.0);
    GameState {
        player: Player {
            x: new_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

pub fn move_player_right(state: &GameState) -> GameState {
    let new_x = (state.player.x + state.rules.player_speed).min(state.rules.player_max_x());
    GameState {
        player: Player {
            x: new_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Apply one tick of the fire button.
///
/// While held the cooldown counts down and a bullet leaves whenever it
/// reaches zero, re-arming the full delay.  Releasing the button resets the
/// cooldown so the next press fires immediately.
pub fn apply_fire(state: &GameState, fire_held: bool) -> GameState {
    if !fire_held {
        return GameState {
            player: Player {
                shoot_timer: 0,
                ..state.player.clone()
            },
            ..state.clone()
        };
    }

    let rules = &state.rules;
    let mut shoot_timer = state.player.shoot_timer - 1;
    let mut bullets = state.bullets.clone();
    if shoot_timer <= 0 {
        bullets.push(Bullet {
            x: state.player.center_x() - rules.bullet_width / 2.0,
            y: state.player.y,
            width: rules.bullet_width,
            height: rules.bullet_height,
        });
        shoot_timer = rules.shoot_delay;
    }

    GameState {
        player: Player {
            shoot_timer,
            ..state.player.clone()
        },
        bullets,
        ..state.clone()
    }
}

// ── Motion ───────────────────────────────────────────────────────────────────

/// Move every bullet up and drop the ones that left through the top.
fn advance_bullets(bullets: &[Bullet], rules: &Rules) -> Vec<Bullet> {
    bullets
        .iter()
        .map(|b| Bullet {
            y: b.y - rules.bullet_speed,
            ..b.clone()
        })
        .filter(|b| b.y >= 0.0)
        .collect()
}

/// An enemy is gone once it crosses the edge it is heading towards.
fn has_exited(enemy: &Enemy, rules: &Rules) -> bool {
    (enemy.vy > 0.0 && enemy.y > rules.height)
        || (enemy.vx < 0.0 && enemy.x < -enemy.radius)
        || (enemy.vx > 0.0 && enemy.x > rules.width + enemy.radius)
}

fn advance_enemies(enemies: &[Enemy], rules: &Rules) -> Vec<Enemy> {
    enemies
        .iter()
        .map(|e| Enemy {
            x: e.x + e.vx,
            y: e.y + e.vy,
            ..e.clone()
        })
        .filter(|e| !has_exited(e, rules))
        .collect()
}

/// Horizontal bounce between the walls, vertical sine wave around the base
/// height.
pub fn advance_boss(boss: &Boss, rules: &Rules) -> Boss {
    let x = boss.x + boss.x_speed;
    let x_speed = if x > rules.width - 2.0 * boss.radius {
        -rules.boss_speed
    } else if x < 0.0 {
        rules.boss_speed
    } else {
        boss.x_speed
    };

    Boss {
        x,
        y: rules.boss_base_y + boss.phase.sin() * rules.boss_amplitude,
        x_speed,
        phase: boss.phase + rules.boss_phase_step,
        ..boss.clone()
    }
}

// ── Collision ────────────────────────────────────────────────────────────────

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

fn bullet_hits(bullet: &Bullet, target: (f32, f32), radius: f32, rules: &Rules) -> bool {
    distance(bullet.center(), target) < radius + rules.bullet_collision_radius
}

/// What survived one round of bullet-vs-target checks.
struct Collisions {
    bullets: Vec<Bullet>,
    enemies: Vec<Enemy>,
    boss: Option<Boss>,
    kills: u32,
    boss_defeated: bool,
}

/// Bullets are checked in spawn order against targets in spawn order.  Each
/// bullet destroys at most one enemy (the first within reach); the boss soaks
/// hits until its counter reaches `boss_hits_to_kill`.
fn resolve_collisions(
    bullets: Vec<Bullet>,
    enemies: Vec<Enemy>,
    boss: Option<Boss>,
    rules: &Rules,
) -> Collisions {
    let mut enemy_alive = vec![true; enemies.len()];
    let mut surviving_bullets = Vec::with_capacity(bullets.len());
    let mut boss = boss;
    let mut kills = 0;
    let mut boss_defeated = false;

    for bullet in bullets {
        let hit_enemy = enemies
            .iter()
            .enumerate()
            .find(|(i, e)| enemy_alive[*i] && bullet_hits(&bullet, e.center(), e.radius, rules))
            .map(|(i, _)| i);

        if let Some(i) = hit_enemy {
            enemy_alive[i] = false;
            kills += 1;
            continue;
        }

        if let Some(b) = boss.as_mut() {
            if bullet_hits(&bullet, b.center(), b.radius, rules) {
                b.hits += 1;
                if b.hits >= rules.boss_hits_to_kill {
                    boss = None;
                    kills += rules.boss_kill_bonus;
                    boss_defeated = true;
                }
                continue;
            }
        }

        surviving_bullets.push(bullet);
    }

    let enemies = enemies
        .into_iter()
        .zip(enemy_alive)
        .filter_map(|(e, alive)| alive.then_some(e))
        .collect();

    Collisions {
        bullets: surviving_bullets,
        enemies,
        boss,
        kills,
        boss_defeated,
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame: move bullets, move enemies (or the
/// boss on the final level), then resolve hits.  Level transitions are left
/// to `progression::advance`, except the level bump that comes with the boss
/// going down.
pub fn tick(state: &GameState) -> GameState {
    if state.status == GameStatus::Finished {
        return state.clone();
    }
    let rules = &state.rules;

    // ── 1. Move bullets ──────────────────────────────────────────────────────
    let bullets = advance_bullets(&state.bullets, rules);

    // ── 2. Move enemies, or the boss on the boss level ───────────────────────
    let (enemies, boss) = if state.level < rules.max_levels {
        (advance_enemies(&state.enemies, rules), state.boss.clone())
    } else {
        (
            state.enemies.clone(),
            state.boss.as_ref().map(|b| advance_boss(b, rules)),
        )
    };

    // ── 3. Bullets ↔ enemies / boss ──────────────────────────────────────────
    let hits = resolve_collisions(bullets, enemies, boss, rules);
    if hits.boss_defeated {
        log::info!("Boss defeated at frame {}", state.frame + 1);
    }

    GameState {
        bullets: hits.bullets,
        enemies: hits.enemies,
        boss: hits.boss,
        kills: state.kills + hits.kills,
        level: state.level + u32::from(hits.boss_defeated),
        frame: state.frame + 1,
        ..state.clone()
    }
}
