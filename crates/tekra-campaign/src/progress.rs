//! Player progress: the sink victory rewards are granted to.
//!
//! The engine only computes what a victory is worth; persisting it is the
//! sink's job.

use serde::{Deserialize, Serialize};

/// XP needed to reach each level (index 0 = level 1).
pub const LEVEL_XP_THRESHOLDS: [u32; 6] = [0, 100, 250, 450, 700, 1000];

/// Receiver of victory rewards and story milestones.
pub trait ProgressSink {
    fn add_xp(&mut self, amount: u32);

    fn add_coins(&mut self, amount: u32);

    fn complete_stage(&mut self, _stage_id: &str) {}

    fn unlock_character(&mut self, _character_id: &str) {}

    /// Current player level, always at least 1.
    fn player_level(&self) -> u32;
}

/// In-memory progress record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProgress {
    pub selected_fighter_id: String,
    pub xp: u32,
    pub coins: u32,
    pub level: u32,
    /// Highest level ever reached.
    pub unlocked_levels: u32,
    pub unlocked_characters: Vec<String>,
    pub completed_stages: Vec<String>,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self::new("tekra_core")
    }
}

impl PlayerProgress {
    /// Fresh progress with `starter` as the only unlocked character.
    pub fn new(starter: impl Into<String>) -> Self {
        let starter = starter.into();
        Self {
            selected_fighter_id: starter.clone(),
            xp: 0,
            coins: 0,
            level: 1,
            unlocked_levels: 1,
            unlocked_characters: vec![starter],
            completed_stages: Vec::new(),
        }
    }

    pub fn is_character_unlocked(&self, id: &str) -> bool {
        self.unlocked_characters.iter().any(|c| c == id)
    }

    pub fn is_stage_completed(&self, id: &str) -> bool {
        self.completed_stages.iter().any(|s| s == id)
    }

    fn recalc_level(&mut self) {
        self.level = level_for_xp(self.xp);
        self.unlocked_levels = self.unlocked_levels.max(self.level);
    }
}

/// Level reached with `xp` experience.
pub fn level_for_xp(xp: u32) -> u32 {
    let reached = LEVEL_XP_THRESHOLDS
        .iter()
        .take_while(|&&threshold| xp >= threshold)
        .count();
    reached.max(1) as u32
}

impl ProgressSink for PlayerProgress {
    fn add_xp(&mut self, amount: u32) {
        if amount == 0 {
            return;
        }
        self.xp = self.xp.saturating_add(amount);
        self.recalc_level();
    }

    fn add_coins(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    fn complete_stage(&mut self, stage_id: &str) {
        if !self.is_stage_completed(stage_id) {
            self.completed_stages.push(stage_id.to_string());
        }
    }

    fn unlock_character(&mut self, character_id: &str) {
        if !self.is_character_unlocked(character_id) {
            self.unlocked_characters.push(character_id.to_string());
        }
    }

    fn player_level(&self) -> u32 {
        self.level.max(1)
    }
}
