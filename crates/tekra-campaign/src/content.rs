//! Raid bosses, arcade waves and world events.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use tekra_core::components::Combatant;
use tekra_core::constants::{
    BOSS_ABILITY_GROUP, EVENT_FALLBACK_ATTACK, EVENT_FALLBACK_HEALTH, GENERIC_ABILITY_GROUP,
};

/// Poses every boss is drawn with unless the data says otherwise.
pub const DEFAULT_BOSS_POSES: [&str; 4] = ["idle", "punch", "kick", "special"];

fn default_boss_poses() -> BTreeSet<String> {
    DEFAULT_BOSS_POSES.iter().map(|p| p.to_string()).collect()
}

/// A raid boss definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaidBoss {
    pub id: String,
    pub name: String,
    pub max_health: f64,
    pub attack: f64,
    pub background: String,
    #[serde(default = "default_boss_poses")]
    pub poses: BTreeSet<String>,
}

impl RaidBoss {
    /// Combatant for this boss, stats multiplied by `phase_multiplier`.
    pub fn to_combatant(&self, phase_multiplier: f64) -> Combatant {
        Combatant::new(
            self.id.clone(),
            self.name.clone(),
            self.max_health * phase_multiplier,
            self.attack * phase_multiplier,
        )
        .with_poses(self.poses.iter().cloned())
        .with_ability_groups([
            self.id.as_str(),
            BOSS_ABILITY_GROUP,
            GENERIC_ABILITY_GROUP,
        ])
    }
}

/// An arcade wave: a fixed run of rounds fought back to back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcadeWave {
    pub id: String,
    pub title: String,
    /// Each round lists its enemies; the first one is fought.
    pub rounds: Vec<Vec<Combatant>>,
    #[serde(default)]
    pub background: Option<String>,
}

impl ArcadeWave {
    /// Enemy of round `index`, if the round exists and is not empty.
    pub fn round_enemy(&self, index: usize) -> Option<&Combatant> {
        self.rounds.get(index).and_then(|round| round.first())
    }

    pub fn total_rounds(&self) -> usize {
        self.rounds.len()
    }
}

/// A limited-time world event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Catalog enemy to fight. Events without one fight a stock enemy.
    #[serde(default)]
    pub enemy_id: Option<String>,
    pub background: String,
}

impl GameEvent {
    /// Stock enemy for events whose enemy is not in the catalog.
    pub fn fallback_enemy(&self) -> Combatant {
        Combatant::new(
            self.id.clone(),
            self.title.clone(),
            EVENT_FALLBACK_HEALTH,
            EVENT_FALLBACK_ATTACK,
        )
        .with_poses(["idle", "punch", "kick"])
        .with_ability_groups([GENERIC_ABILITY_GROUP])
    }
}

/// On-disk wrapper of `events.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventFile {
    pub events: Vec<GameEvent>,
}
