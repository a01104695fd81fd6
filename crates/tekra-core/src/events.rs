//! Notifications emitted by the engine for effects, audio and HUD.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{AbilityId, Reward};

/// Fire-and-forget notifications, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleEvent {
    /// A new encounter was set up.
    EncounterStarted { mode: GameMode, enemy_id: String },
    /// The player committed an ability; its script has begun.
    ActionStarted { ability_id: AbilityId },
    /// The enemy behavior model picked its reply.
    EnemyIntent { action: EnemyAction },
    /// Damage landed on one side.
    DamageApplied { target: Side, amount: f64, remaining: f64 },
    /// The enemy advanced to a more aggressive phase.
    PhaseChanged { from: EnemyPhase, to: EnemyPhase },
    /// The enemy was defeated.
    Victory { reward: Reward },
    /// The player was defeated.
    Defeat,
    /// The last round of an arcade wave was cleared.
    WaveCleared { wave_id: String },
}
