//! Combatant and ability definitions.
//!
//! Both are immutable once loaded. Scaling for an encounter produces a new
//! `Combatant` value and never touches the catalog definition.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::enums::AbilityCategory;
use crate::types::{AbilityId, CombatantId};

/// A player or enemy entity with the stats needed for one encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub max_health: f64,
    pub attack: f64,
    /// Pose identifiers the presentation layer has sprites for.
    #[serde(default)]
    pub poses: BTreeSet<String>,
    /// Ability groups this combatant may draw abilities from.
    #[serde(default)]
    pub ability_groups: BTreeSet<String>,
}

impl Combatant {
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_health: f64, attack: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_health,
            attack,
            poses: BTreeSet::new(),
            ability_groups: BTreeSet::new(),
        }
    }

    pub fn with_poses<I, S>(mut self, poses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.poses = poses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ability_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ability_groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// A copy of this combatant with replaced stats.
    pub fn scaled(&self, max_health: f64, attack: f64) -> Self {
        Self {
            max_health,
            attack,
            ..self.clone()
        }
    }

    pub fn supports_pose(&self, pose: &str) -> bool {
        self.poses.contains(pose)
    }

    pub fn can_draw_from(&self, group: &str) -> bool {
        self.ability_groups.contains(group)
    }
}

/// A player-selectable, cooldown-gated offensive action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub id: AbilityId,
    pub title: String,
    pub damage: f64,
    #[serde(rename = "type", default)]
    pub category: AbilityCategory,
    /// Cooldown in simulated seconds.
    #[serde(rename = "cooldown")]
    pub cooldown_secs: f64,
    /// Ability group tag matched against `Combatant::ability_groups`.
    #[serde(default = "default_group")]
    pub group: String,
}

fn default_group() -> String {
    crate::constants::GENERIC_ABILITY_GROUP.to_string()
}

impl Ability {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        damage: f64,
        category: AbilityCategory,
        cooldown_secs: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            damage,
            category,
            cooldown_secs,
            group: default_group(),
        }
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }
}
