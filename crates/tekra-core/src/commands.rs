//! Commands sent from the driver to the battle engine.
//!
//! Commands are queued and applied at the next tick boundary. Commands
//! that are not valid in the current state are dropped silently.

use serde::{Deserialize, Serialize};

use crate::types::AbilityId;

/// All in-battle inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleCommand {
    /// Play an ability from the hand.
    PlayCard { ability_id: AbilityId },
    /// Restart the current encounter with the same setup.
    SoftReset,
    /// Tear the current encounter down.
    HardReset,
    /// Load the next round of the running arcade wave.
    NextArcadeRound,
    /// Set time scale (1.0 = normal, 2.0 = double).
    SetTimeScale { scale: f64 },
}
