//! Mech Shooter: a single-screen arcade shoot-em-up.
//!
//! The library holds the whole game core (entities, wave generation, motion,
//! collision, level progression) plus the thin collaborators around it
//! (config, high scores, assets, terminal rendering).  `main.rs` only wires
//! the terminal and the frame loop together.

pub mod assets;
pub mod compute;
pub mod config;
pub mod display;
pub mod driver;
pub mod entities;
pub mod error;
pub mod highscores;
pub mod progression;
pub mod waves;
