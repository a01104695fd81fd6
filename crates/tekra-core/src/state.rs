//! Encounter snapshot, the complete visible state handed to the
//! presentation layer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::BattleEvent;
use crate::types::{AbilityId, SimTime};

/// Complete encounter state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub time: SimTime,
    pub mode: GameMode,
    pub turn: Turn,
    /// Bumped on every encounter setup and reset.
    pub generation: u64,
    /// `None` when no encounter is running.
    pub player: Option<CombatantView>,
    pub enemy: Option<CombatantView>,
    pub enemy_phase: EnemyPhase,
    pub hand: Vec<HandCardView>,
    pub is_action_in_flight: bool,
    pub is_resolved: bool,
    pub outcome: Option<EncounterOutcome>,
    pub background: Option<String>,
    pub arcade: Option<ArcadeProgressView>,
    pub events: Vec<BattleEvent>,
}

/// One side of the encounter for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatantView {
    pub id: String,
    pub name: String,
    pub health: f64,
    pub max_health: f64,
    pub pose: ActionKind,
}

/// An ability in hand, with its cooldown state at snapshot time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandCardView {
    pub id: AbilityId,
    pub title: String,
    pub damage: f64,
    pub category: AbilityCategory,
    pub ready: bool,
    /// Fraction of the cooldown elapsed (1.0 = ready).
    pub cooldown_progress: f64,
}

/// Position within a running arcade wave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcadeProgressView {
    pub wave_id: String,
    /// Zero-based index of the round being fought.
    pub round: usize,
    pub total_rounds: usize,
}
