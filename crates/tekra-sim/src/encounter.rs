//! The live encounter and the setup it was built from.

use tekra_core::components::{Ability, Combatant};
use tekra_core::enums::{ActionKind, EncounterOutcome, GameMode, Side};
use tekra_core::types::Reward;

/// Story milestones recorded on victory.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryMilestone {
    pub stage_id: String,
    pub unlocks_character: Option<String>,
}

/// Everything needed to (re)start an encounter. The enemy is the unscaled
/// definition; level and mode scaling happen at setup.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSetup {
    pub mode: GameMode,
    pub enemy: Combatant,
    pub background: String,
    /// Replaces the mode reward when set (story stages).
    pub reward: Option<Reward>,
    pub story: Option<StoryMilestone>,
}

impl MatchSetup {
    pub fn new(mode: GameMode, enemy: Combatant, background: impl Into<String>) -> Self {
        Self {
            mode,
            enemy,
            background: background.into(),
            reward: None,
            story: None,
        }
    }

    pub fn with_reward(mut self, reward: Reward) -> Self {
        self.reward = Some(reward);
        self
    }

    pub fn with_story(mut self, milestone: StoryMilestone) -> Self {
        self.story = Some(milestone);
        self
    }
}

/// One running battle between the selected hero and one enemy.
#[derive(Debug, Clone)]
pub struct Encounter {
    pub setup: MatchSetup,
    pub generation: u64,
    /// Scaled hero.
    pub player: Combatant,
    /// Scaled enemy.
    pub enemy: Combatant,
    pub player_health: f64,
    pub enemy_health: f64,
    pub hand: Vec<Ability>,
    pub player_pose: ActionKind,
    pub enemy_pose: ActionKind,
    pub is_action_in_flight: bool,
    pub is_resolved: bool,
    pub outcome: Option<EncounterOutcome>,
}

impl Encounter {
    pub fn new(setup: MatchSetup, generation: u64, player: Combatant, enemy: Combatant, hand: Vec<Ability>) -> Self {
        Self {
            player_health: player.max_health,
            enemy_health: enemy.max_health,
            setup,
            generation,
            player,
            enemy,
            hand,
            player_pose: ActionKind::Idle,
            enemy_pose: ActionKind::Idle,
            is_action_in_flight: false,
            is_resolved: false,
            outcome: None,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.setup.mode
    }

    pub fn health(&self, side: Side) -> f64 {
        match side {
            Side::Player => self.player_health,
            Side::Enemy => self.enemy_health,
        }
    }

    pub fn max_health(&self, side: Side) -> f64 {
        match side {
            Side::Player => self.player.max_health,
            Side::Enemy => self.enemy.max_health,
        }
    }

    pub fn hand_card(&self, ability_id: &str) -> Option<&Ability> {
        self.hand.iter().find(|ability| ability.id == ability_id)
    }
}
