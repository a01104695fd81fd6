//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

/// Game mode an encounter was started from. Drives scaling and rewards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Arcade,
    Raid,
    Event,
    /// Story stages scale like arcade and carry their own rewards.
    Story,
}

/// Category of an ability. Used only to select the strike pose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityCategory {
    #[default]
    Punch,
    Kick,
    Special,
    Run,
}

impl AbilityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbilityCategory::Punch => "punch",
            AbilityCategory::Kick => "kick",
            AbilityCategory::Special => "special",
            AbilityCategory::Run => "run",
        }
    }

    /// Parse a category name. Unknown names fall back to `Punch`.
    pub fn parse_lossy(raw: &str) -> Self {
        match raw {
            "kick" => AbilityCategory::Kick,
            "special" => AbilityCategory::Special,
            "run" => AbilityCategory::Run,
            _ => AbilityCategory::Punch,
        }
    }
}

// Catalogs are authored by hand; an unknown category must not reject the
// whole ability file.
impl<'de> Deserialize<'de> for AbilityCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(AbilityCategory::parse_lossy(&raw))
    }
}

/// Which side of the encounter something applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

/// Whose action is currently permitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    #[default]
    Player,
    Enemy,
    /// An action script is executing, or the encounter is resolved.
    Locked,
}

/// Enemy aggression tier. Ordering follows aggression: `Phase1 < Phase2 < Enraged`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EnemyPhase {
    #[default]
    Phase1,
    Phase2,
    Enraged,
}

/// Action the enemy behavior model picked for its reply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EnemyAction {
    BasicAttack { multiplier: f64 },
    HeavyAttack,
    Wait,
    /// Reserved for a buff mechanic; applies no damage.
    Enrage,
}

impl EnemyAction {
    /// Pose signal for the presentation layer.
    pub fn kind(&self) -> ActionKind {
        match self {
            EnemyAction::BasicAttack { .. } => ActionKind::Attack,
            EnemyAction::HeavyAttack => ActionKind::HeavyAttack,
            EnemyAction::Wait => ActionKind::Wait,
            EnemyAction::Enrage => ActionKind::Enrage,
        }
    }
}

/// Abstract pose signal. The presentation layer maps these to sprites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "category")]
pub enum ActionKind {
    #[default]
    Idle,
    WindUp,
    Strike(AbilityCategory),
    Attack,
    HeavyAttack,
    Wait,
    Enrage,
}

/// How a resolved encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterOutcome {
    Victory,
    Defeat,
}
