//! Encounter setups for each game mode.
//!
//! Pure translations from campaign content into `MatchSetup`s; the engine
//! does the scaling, drawing and bookkeeping.

use tekra_campaign::content::{ArcadeWave, GameEvent, RaidBoss};
use tekra_campaign::story::{StoryChapter, StoryDifficulty, StoryStage};
use tekra_campaign::ContentLibrary;
use tekra_core::enums::GameMode;

use crate::encounter::{MatchSetup, StoryMilestone};

/// Background used when content does not name one.
pub const DEFAULT_BACKGROUND: &str = "skybox";

/// Position within a running arcade wave.
#[derive(Debug, Clone)]
pub struct ArcadeRun {
    pub wave: ArcadeWave,
    pub round: usize,
}

impl ArcadeRun {
    pub fn new(wave: ArcadeWave) -> Self {
        Self { wave, round: 0 }
    }

    pub fn is_last_round(&self) -> bool {
        self.round + 1 >= self.wave.total_rounds()
    }

    /// Setup for the current round, `None` once past the last round.
    pub fn current_setup(&self) -> Option<MatchSetup> {
        let enemy = self.wave.round_enemy(self.round)?.clone();
        let background = self
            .wave
            .background
            .clone()
            .unwrap_or_else(|| DEFAULT_BACKGROUND.to_string());
        Some(MatchSetup::new(GameMode::Arcade, enemy, background))
    }
}

pub fn raid_setup(boss: &RaidBoss) -> MatchSetup {
    MatchSetup::new(GameMode::Raid, boss.to_combatant(1.0), boss.background.clone())
}

/// Event enemies come from the catalog; unknown ids fight the event's
/// fallback enemy.
pub fn event_setup(event: &GameEvent, content: &ContentLibrary) -> MatchSetup {
    let enemy = event
        .enemy_id
        .as_deref()
        .and_then(|id| content.enemy(id))
        .unwrap_or_else(|| event.fallback_enemy());
    MatchSetup::new(GameMode::Event, enemy, event.background.clone())
}

pub fn story_setup(chapter: &StoryChapter, stage: &StoryStage, difficulty: StoryDifficulty) -> MatchSetup {
    MatchSetup::new(
        GameMode::Story,
        stage.make_enemy(difficulty),
        stage.resolved_background(chapter),
    )
    .with_reward(stage.rewards)
    .with_story(StoryMilestone {
        stage_id: stage.id.clone(),
        unlocks_character: stage.unlocks_character.clone(),
    })
}
