//! Level progression: wave → next wave → boss fight → finished.

use rand::Rng;

use crate::entities::{GameState, GameStatus};
use crate::waves::spawn_level;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Wave(u32),
    BossFight,
    Finished,
}

/// Which phase of the session `state` is in.
pub fn phase(state: &GameState) -> Phase {
    if state.status == GameStatus::Finished {
        Phase::Finished
    } else if state.level >= state.rules.max_levels {
        Phase::BossFight
    } else {
        Phase::Wave(state.level)
    }
}

/// Evaluate the level transitions after a tick.
///
/// * An emptied wave moves on to the next level and spawns it (the boss, once
///   the final level is reached).
/// * Once the boss is gone and no enemies remain the session is finished.
pub fn advance(state: &GameState, rng: &mut impl Rng) -> GameState {
    let rules = &state.rules;
    match phase(state) {
        Phase::Wave(level) if state.enemies.is_empty() => {
            let next = level + 1;
            let spawn = spawn_level(rules, next, rng);
            if spawn.boss.is_some() {
                log::info!("Level {next} started: boss incoming!");
            } else {
                log::info!("Level {next} started with {} enemies", spawn.enemies.len());
            }
            GameState {
                level: next,
                enemies: spawn.enemies,
                boss: spawn.boss,
                ..state.clone()
            }
        }
        Phase::BossFight if state.boss.is_none() && state.enemies.is_empty() => {
            log::info!("All levels cleared with {} kills", state.kills);
            GameState {
                status: GameStatus::Finished,
                ..state.clone()
            }
        }
        _ => state.clone(),
    }
}
