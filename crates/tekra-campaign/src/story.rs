//! Story chapters and stages.

use serde::{Deserialize, Serialize};

use tekra_core::components::Combatant;
use tekra_core::constants::{BOSS_ABILITY_GROUP, GENERIC_ABILITY_GROUP};
use tekra_core::types::Reward;

/// Difficulty a story stage is attempted at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryDifficulty {
    #[default]
    Normal,
    Elite,
    Boss,
}

impl StoryDifficulty {
    pub fn health_multiplier(&self) -> f64 {
        match self {
            StoryDifficulty::Normal => 1.0,
            StoryDifficulty::Elite => 1.3,
            StoryDifficulty::Boss => 2.0,
        }
    }

    pub fn damage_multiplier(&self) -> f64 {
        match self {
            StoryDifficulty::Normal => 1.0,
            StoryDifficulty::Elite => 1.2,
            StoryDifficulty::Boss => 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryChapter {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub background: String,
    pub stages: Vec<StoryStage>,
}

impl StoryChapter {
    pub fn stage(&self, id: &str) -> Option<&StoryStage> {
        self.stages.iter().find(|s| s.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryStage {
    pub id: String,
    pub title: String,
    /// Enemy identity (asset key) of this stage.
    pub enemy: String,
    pub base_health: f64,
    pub base_attack: f64,
    #[serde(default)]
    pub boss: bool,
    #[serde(default)]
    pub difficulties: Vec<StoryDifficulty>,
    #[serde(default = "default_recommended_level")]
    pub recommended_level: u32,
    #[serde(default)]
    pub unlocks_character: Option<String>,
    pub rewards: Reward,
    /// Overrides the chapter background.
    #[serde(default)]
    pub background: Option<String>,
}

fn default_recommended_level() -> u32 {
    1
}

impl StoryStage {
    /// The stage enemy at the given difficulty.
    pub fn make_enemy(&self, difficulty: StoryDifficulty) -> Combatant {
        let poses: &[&str] = if self.boss {
            &["idle", "punch", "kick", "special"]
        } else {
            &["idle", "punch", "kick"]
        };
        Combatant::new(
            self.enemy.clone(),
            self.title.clone(),
            self.base_health * difficulty.health_multiplier(),
            self.base_attack * difficulty.damage_multiplier(),
        )
        .with_poses(poses.iter().copied())
        .with_ability_groups([self.id.as_str(), BOSS_ABILITY_GROUP, GENERIC_ABILITY_GROUP])
    }

    pub fn resolved_background<'a>(&'a self, chapter: &'a StoryChapter) -> &'a str {
        self.background.as_deref().unwrap_or(&chapter.background)
    }
}

/// On-disk wrapper of `story.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoryFile {
    pub chapters: Vec<StoryChapter>,
}
