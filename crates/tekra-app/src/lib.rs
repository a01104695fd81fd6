//! Tekra headless driver.
//!
//! Wires content, progress and the battle engine together, runs the engine
//! on a fixed-rate game loop thread and provides an autoplay pilot for
//! headless runs.

pub mod autoplay;
pub mod config;
pub mod game_loop;
pub mod state;

pub use tekra_core as core;
