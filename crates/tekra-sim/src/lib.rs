//! Battle engine for Tekra.
//!
//! Owns one live encounter, sequences player actions and enemy replies
//! through a timed step queue, and produces `EncounterSnapshot`s for the
//! presentation layer. Headless and deterministic for a given seed.

pub mod encounter;
pub mod engine;
pub mod error;
pub mod scenario;
pub mod scheduler;
pub mod systems;

pub use engine::{BattleEngine, SimConfig};
pub use error::SetupError;
pub use tekra_core as core;
