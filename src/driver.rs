//! Frame-loop core that does not touch the terminal: per-tick input
//! application and fixed-timestep pacing.

use std::time::Duration;

use rand::Rng;

use crate::compute::{apply_fire, move_player_left, move_player_right, tick};
use crate::entities::{GameState, GameStatus};
use crate::progression;

/// The three logical actions sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Run one full tick: movement, firing, motion + collision, progression.
///
/// Left wins when both directions are held.
pub fn step(state: &GameState, controls: Controls, rng: &mut impl Rng) -> GameState {
    if state.status == GameStatus::Finished {
        return state.clone();
    }

    let moved = if controls.left {
        move_player_left(state)
    } else if controls.right {
        move_player_right(state)
    } else {
        state.clone()
    };
    let armed = apply_fire(&moved, controls.fire);
    let advanced = tick(&armed);
    progression::advance(&advanced, rng)
}

/// Fixed tick length for a target rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedTimestep {
    frame: Duration,
}

impl FixedTimestep {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / ticks_per_second.max(1),
        }
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// How long to sleep after a tick that took `elapsed`, if at all.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.frame.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Block until the tick that started `elapsed` ago has used its slot.
    pub fn wait(&self, elapsed: Duration) {
        if let Some(rest) = self.remaining(elapsed) {
            std::thread::sleep(rest);
        }
    }
}
