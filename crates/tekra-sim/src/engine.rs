//! Battle engine.
//!
//! `BattleEngine` owns the live encounter, processes battle commands, runs
//! action scripts off its step queue and produces `EncounterSnapshot`s.
//! Completely headless and deterministic for a given seed and input
//! sequence.

use std::collections::VecDeque;
use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use tekra_campaign::difficulty::DifficultyRating;
use tekra_campaign::story::StoryDifficulty;
use tekra_campaign::{ContentLibrary, ProgressSink};
use tekra_core::commands::BattleCommand;
use tekra_core::components::Combatant;
use tekra_core::enums::*;
use tekra_core::events::BattleEvent;
use tekra_core::state::EncounterSnapshot;
use tekra_core::tuning::BattleTuning;
use tekra_core::types::SimTime;
use tekra_enemy_ai::behavior::BehaviorConfig;
use tekra_enemy_ai::EnemyBehavior;

use crate::encounter::{Encounter, MatchSetup};
use crate::error::SetupError;
use crate::scenario::{self, ArcadeRun};
use crate::scheduler::{ScriptStep, StepQueue};
use crate::systems::cooldown::CooldownLedger;
use crate::systems::snapshot::SnapshotContext;
use crate::systems::turn::TurnSystem;
use crate::systems::{damage, hand, rewards, scaling, snapshot};

/// Configuration for a new engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for hand draws. Same seed = same hands.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Player level used when no progress sink is attached.
    pub player_level: u32,
    pub tuning: BattleTuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            player_level: 1,
            tuning: BattleTuning::default(),
        }
    }
}

/// The battle engine. Owns the encounter and all battle state.
pub struct BattleEngine {
    content: Arc<ContentLibrary>,
    tuning: BattleTuning,
    time: SimTime,
    time_scale: f64,
    rng: ChaCha8Rng,
    mode: GameMode,
    player_level: u32,
    selected_player: Option<Combatant>,
    encounter: Option<Encounter>,
    generation: u64,
    turn: TurnSystem,
    cooldowns: CooldownLedger,
    behavior: EnemyBehavior,
    steps: StepQueue,
    command_queue: VecDeque<BattleCommand>,
    events: Vec<BattleEvent>,
    arcade: Option<ArcadeRun>,
    progress: Option<Box<dyn ProgressSink + Send>>,
}

impl BattleEngine {
    /// Create a new engine over a read-only content library.
    pub fn new(config: SimConfig, content: Arc<ContentLibrary>) -> Self {
        let tuning = config.tuning.sanitized();
        let behavior = EnemyBehavior::new(BehaviorConfig::from(&tuning));
        Self {
            content,
            tuning,
            time: SimTime::default(),
            time_scale: sanitize_time_scale(config.time_scale),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            mode: GameMode::default(),
            player_level: config.player_level.max(1),
            selected_player: None,
            encounter: None,
            generation: 0,
            turn: TurnSystem::default(),
            cooldowns: CooldownLedger::new(),
            behavior,
            steps: StepQueue::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            arcade: None,
            progress: None,
        }
    }

    /// Attach the sink victory rewards and story milestones go to.
    /// Its level then replaces the configured player level.
    pub fn attach_progress(&mut self, sink: Box<dyn ProgressSink + Send>) {
        self.progress = Some(sink);
    }

    /// Detach and return the progress sink.
    pub fn take_progress(&mut self) -> Option<Box<dyn ProgressSink + Send>> {
        self.progress.take()
    }

    /// Pick the hero for subsequent encounters.
    pub fn select_player(&mut self, player: Combatant) {
        info!(player = %player.id, "Player selected");
        self.selected_player = Some(player);
    }

    /// Mode used by `start_encounter`. The mode-specific entry points set
    /// their own.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    pub fn set_player_level(&mut self, level: u32) {
        self.player_level = level.max(1);
    }

    /// Queue a battle command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: BattleCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = BattleCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one fixed tick and return the resulting snapshot.
    pub fn tick(&mut self) -> EncounterSnapshot {
        self.process_commands();
        self.time.advance();
        self.run_due_steps();
        self.snapshot()
    }

    /// Advance by a driver-supplied delta and return the resulting snapshot.
    pub fn advance(&mut self, dt_secs: f64) -> EncounterSnapshot {
        self.process_commands();
        self.time.advance_by(dt_secs);
        self.run_due_steps();
        self.snapshot()
    }

    /// Snapshot of the current state. Drains pending events.
    pub fn snapshot(&mut self) -> EncounterSnapshot {
        let events = std::mem::take(&mut self.events);
        snapshot::build_snapshot(
            SnapshotContext {
                time: &self.time,
                mode: self.mode,
                turn: self.turn.current(),
                generation: self.generation,
                encounter: self.encounter.as_ref(),
                behavior: &self.behavior,
                cooldowns: &self.cooldowns,
                arcade: self.arcade.as_ref(),
            },
            events,
        )
    }

    // --- Accessors ---

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn turn(&self) -> Turn {
        self.turn.current()
    }

    pub fn can_player_act(&self) -> bool {
        self.turn.can_player_act()
    }

    /// Bumped on every setup and reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn encounter(&self) -> Option<&Encounter> {
        self.encounter.as_ref()
    }

    pub fn behavior(&self) -> &EnemyBehavior {
        &self.behavior
    }

    pub fn cooldowns(&self) -> &CooldownLedger {
        &self.cooldowns
    }

    pub fn arcade_run(&self) -> Option<&ArcadeRun> {
        self.arcade.as_ref()
    }

    pub fn content(&self) -> &ContentLibrary {
        &self.content
    }

    pub fn tuning(&self) -> &BattleTuning {
        &self.tuning
    }

    pub fn selected_player(&self) -> Option<&Combatant> {
        self.selected_player.as_ref()
    }

    /// Number of script steps waiting to run.
    pub fn pending_steps(&self) -> usize {
        self.steps.len()
    }

    /// Level driving scaling and difficulty: the progress sink's when one
    /// is attached, the configured level otherwise.
    pub fn player_level(&self) -> u32 {
        self.progress
            .as_ref()
            .map_or(self.player_level, |sink| sink.player_level())
            .max(1)
    }

    // --- Encounter setup ---

    /// Start an encounter against `enemy` in the current mode.
    pub fn start_encounter(
        &mut self,
        enemy: Combatant,
        background: impl Into<String>,
    ) -> Result<(), SetupError> {
        self.start_single(MatchSetup::new(self.mode, enemy, background))
    }

    /// Start round one of an arcade wave.
    pub fn start_arcade(&mut self, wave_id: &str) -> Result<(), SetupError> {
        let wave = self
            .content
            .arcade_wave(wave_id)
            .cloned()
            .ok_or_else(|| SetupError::UnknownWave(wave_id.to_string()))?;
        let run = ArcadeRun::new(wave);
        let setup = run
            .current_setup()
            .ok_or_else(|| SetupError::WaveExhausted(wave_id.to_string()))?;
        self.apply_match_settings(setup)?;
        self.arcade = Some(run);
        Ok(())
    }

    /// Move the running arcade wave on to its next round.
    pub fn next_arcade_round(&mut self) -> Result<(), SetupError> {
        let mut next = self.arcade.clone().ok_or(SetupError::NoArcadeRun)?;
        next.round += 1;
        let setup = next
            .current_setup()
            .ok_or_else(|| SetupError::WaveExhausted(next.wave.id.clone()))?;
        self.apply_match_settings(setup)?;
        self.arcade = Some(next);
        Ok(())
    }

    pub fn start_raid(&mut self, boss_id: &str) -> Result<(), SetupError> {
        let setup = self
            .content
            .raid_boss(boss_id)
            .map(scenario::raid_setup)
            .ok_or_else(|| SetupError::UnknownRaidBoss(boss_id.to_string()))?;
        self.start_single(setup)
    }

    pub fn start_event(&mut self, event_id: &str) -> Result<(), SetupError> {
        let content = Arc::clone(&self.content);
        let event = content
            .event(event_id)
            .ok_or_else(|| SetupError::UnknownEvent(event_id.to_string()))?;
        self.start_single(scenario::event_setup(event, &content))
    }

    /// Start a story stage. Stages rated impossible for the current level
    /// are rejected.
    pub fn start_story(
        &mut self,
        stage_id: &str,
        difficulty: StoryDifficulty,
    ) -> Result<(), SetupError> {
        let content = Arc::clone(&self.content);
        let (chapter, stage) = content
            .story_stage(stage_id)
            .ok_or_else(|| SetupError::UnknownStage(stage_id.to_string()))?;

        if !stage.difficulties.is_empty() && !stage.difficulties.contains(&difficulty) {
            return Err(SetupError::UnsupportedDifficulty {
                stage_id: stage_id.to_string(),
                difficulty: format!("{difficulty:?}").to_lowercase(),
            });
        }

        let level = self.player_level();
        if DifficultyRating::evaluate(level, stage.recommended_level) == DifficultyRating::Impossible {
            return Err(SetupError::LevelTooLow {
                stage_id: stage_id.to_string(),
                player_level: level,
                recommended_level: stage.recommended_level,
            });
        }

        self.start_single(scenario::story_setup(chapter, stage, difficulty))
    }

    /// Set up a fresh encounter from `setup`: scale both sides for the
    /// current level, configure the enemy behavior, reset health, cooldowns
    /// and turn, and draw a new hand.
    pub fn apply_match_settings(&mut self, setup: MatchSetup) -> Result<(), SetupError> {
        let player = self
            .selected_player
            .as_ref()
            .ok_or(SetupError::MissingPlayer)?;
        if !setup.enemy.max_health.is_finite() || !setup.enemy.attack.is_finite() {
            return Err(SetupError::InvalidEnemy(setup.enemy.id.clone()));
        }

        let level = self.player_level();
        let player = scaling::scale_player(player, level);
        let enemy = scaling::scale_enemy(&setup.enemy, level, setup.mode);

        self.behavior.configure(&enemy);
        self.generation += 1;
        self.steps.clear();
        self.cooldowns.clear();
        self.turn.reset();

        let pool = self.content.abilities.pool_for(&player);
        if pool.is_empty() {
            warn!(player = %player.id, "Ability pool is empty, hand will be empty");
        }
        let hand = hand::draw_hand(&pool, &mut self.rng);

        self.mode = setup.mode;
        info!(
            mode = ?setup.mode,
            enemy = %enemy.id,
            enemy_health = enemy.max_health,
            level,
            generation = self.generation,
            "Encounter started"
        );
        self.events.push(BattleEvent::EncounterStarted {
            mode: setup.mode,
            enemy_id: enemy.id.clone(),
        });
        self.encounter = Some(Encounter::new(setup, self.generation, player, enemy, hand));
        Ok(())
    }

    /// Restart the current encounter with the same setup.
    pub fn soft_reset(&mut self) -> bool {
        let Some(setup) = self.encounter.as_ref().map(|encounter| encounter.setup.clone()) else {
            debug!("Soft reset ignored: no encounter");
            return false;
        };
        match self.apply_match_settings(setup) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "Soft reset failed");
                false
            }
        }
    }

    /// Tear the encounter down. Safe at any point of an action script.
    pub fn hard_reset(&mut self) {
        self.generation += 1;
        self.encounter = None;
        self.arcade = None;
        self.steps.clear();
        self.cooldowns.clear();
        self.turn.reset();
        self.behavior = EnemyBehavior::new(BehaviorConfig::from(&self.tuning));
        info!(generation = self.generation, "Encounter torn down");
    }

    // --- Player input ---

    /// Play an ability from the hand. Returns `false` (and changes nothing)
    /// when it is not the player's turn, an action is in flight, the
    /// encounter is resolved or absent, the ability is not in hand, or it
    /// is still cooling down.
    pub fn play_card(&mut self, ability_id: &str) -> bool {
        let now = self.time.elapsed_secs;
        let level = self.player_level();
        let can_act = self.turn.can_player_act();

        let Some(encounter) = self.encounter.as_mut() else {
            debug!(ability_id, "Play rejected: no encounter");
            return false;
        };
        if encounter.is_resolved || encounter.is_action_in_flight || !can_act {
            debug!(ability_id, "Play rejected: not the player's turn");
            return false;
        }
        let Some(ability) = encounter.hand_card(ability_id).cloned() else {
            debug!(ability_id, "Play rejected: not in hand");
            return false;
        };
        if !self.cooldowns.is_ready(&ability, now) {
            debug!(ability_id, remaining = self.cooldowns.remaining(&ability, now), "Play rejected: cooling down");
            return false;
        }

        self.turn.lock();
        encounter.is_action_in_flight = true;
        self.cooldowns.mark_played(&ability, now);

        let pool = self.content.abilities.pool_for(&encounter.player);
        if hand::replace_in_hand(&mut encounter.hand, &ability.id, &pool, &mut self.rng).is_none() {
            debug!(ability_id, "No replacement available, card stays in hand");
        }

        encounter.player_pose = ActionKind::WindUp;
        let raw_damage = if ability.damage.is_finite() { ability.damage.max(0.0) } else { 0.0 };
        let damage = raw_damage * scaling::player_damage_multiplier(level);
        self.steps.schedule(
            now,
            self.tuning.player_windup_secs,
            encounter.generation,
            ScriptStep::PlayerStrike {
                damage,
                category: ability.category,
            },
        );
        self.events.push(BattleEvent::ActionStarted {
            ability_id: ability.id.clone(),
        });
        debug!(ability_id, damage, "Action started");
        true
    }

    // --- Command handling ---

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: BattleCommand) {
        match command {
            BattleCommand::PlayCard { ability_id } => {
                self.play_card(&ability_id);
            }
            BattleCommand::SoftReset => {
                self.soft_reset();
            }
            BattleCommand::HardReset => self.hard_reset(),
            BattleCommand::NextArcadeRound => {
                if let Err(err) = self.next_arcade_round() {
                    debug!(%err, "Next arcade round rejected");
                }
            }
            BattleCommand::SetTimeScale { scale } => {
                self.time_scale = sanitize_time_scale(scale);
            }
        }
    }

    // --- Action script ---

    fn run_due_steps(&mut self) {
        let now = self.time.elapsed_secs;
        while let Some(scheduled) = self.steps.pop_due(now) {
            let live = self.encounter.as_ref().is_some_and(|encounter| {
                encounter.generation == scheduled.generation && !encounter.is_resolved
            });
            if !live {
                debug!(generation = scheduled.generation, "Dropping stale step");
                continue;
            }
            let at = scheduled.due_secs;
            match scheduled.step {
                ScriptStep::PlayerStrike { damage, category } => self.player_strike(damage, category, at),
                ScriptStep::PlayerRecover => self.player_recover(at),
                ScriptStep::EnemyStrike { action } => self.enemy_strike(action, at),
                ScriptStep::EnemyRecover => self.enemy_recover(),
            }
        }
    }

    fn player_strike(&mut self, damage: f64, category: AbilityCategory, at: f64) {
        let Some(encounter) = self.encounter.as_mut() else {
            return;
        };
        let outcome = damage::apply_damage(damage, encounter.enemy_health);
        encounter.enemy_health = outcome.new_health;
        encounter.player_pose = ActionKind::Strike(category);
        self.events.push(BattleEvent::DamageApplied {
            target: Side::Enemy,
            amount: damage,
            remaining: outcome.new_health,
        });

        if let Some(transition) = self.behavior.update_phase_if_needed(outcome.new_health) {
            self.events.push(BattleEvent::PhaseChanged {
                from: transition.from,
                to: transition.to,
            });
        }

        self.steps.schedule(
            at,
            self.tuning.player_recovery_secs,
            encounter.generation,
            ScriptStep::PlayerRecover,
        );
    }

    fn player_recover(&mut self, at: f64) {
        let Some(encounter) = self.encounter.as_mut() else {
            return;
        };
        encounter.player_pose = ActionKind::Idle;
        if encounter.enemy_health <= 0.0 {
            self.resolve(EncounterOutcome::Victory);
            return;
        }

        self.turn.start_enemy_turn();
        let action = self.behavior.choose_action(&encounter.enemy, encounter.player_health);
        encounter.enemy_pose = ActionKind::WindUp;
        self.events.push(BattleEvent::EnemyIntent { action });
        debug!(?action, combo = self.behavior.combo_counter(), "Enemy reply chosen");
        self.steps.schedule(
            at,
            self.tuning.enemy_windup_secs,
            encounter.generation,
            ScriptStep::EnemyStrike { action },
        );
    }

    fn enemy_strike(&mut self, action: EnemyAction, at: f64) {
        let heavy_multiplier = self.tuning.heavy_attack_multiplier;
        let Some(encounter) = self.encounter.as_mut() else {
            return;
        };
        encounter.enemy_pose = action.kind();

        let amount = damage::enemy_reply_damage(&action, encounter.enemy.attack, heavy_multiplier);
        if amount > 0.0 {
            let outcome = damage::apply_damage(amount, encounter.player_health);
            encounter.player_health = outcome.new_health;
            self.events.push(BattleEvent::DamageApplied {
                target: Side::Player,
                amount,
                remaining: outcome.new_health,
            });
            if outcome.is_lethal {
                self.resolve(EncounterOutcome::Defeat);
                return;
            }
        }

        self.steps.schedule(
            at,
            self.tuning.enemy_recovery_secs,
            encounter.generation,
            ScriptStep::EnemyRecover,
        );
    }

    fn enemy_recover(&mut self) {
        let Some(encounter) = self.encounter.as_mut() else {
            return;
        };
        encounter.enemy_pose = ActionKind::Idle;
        encounter.is_action_in_flight = false;
        self.turn.start_player_turn();
    }

    /// Resolve the encounter exactly once.
    fn resolve(&mut self, outcome: EncounterOutcome) {
        let Some(encounter) = self.encounter.as_mut() else {
            return;
        };
        if encounter.is_resolved {
            return;
        }
        encounter.is_resolved = true;
        encounter.is_action_in_flight = false;
        encounter.outcome = Some(outcome);
        encounter.player_pose = ActionKind::Idle;
        encounter.enemy_pose = ActionKind::Idle;
        self.turn.lock();

        match outcome {
            EncounterOutcome::Victory => {
                let reward = encounter
                    .setup
                    .reward
                    .unwrap_or_else(|| rewards::rewards_for(encounter.mode()));
                if let Some(sink) = self.progress.as_mut() {
                    rewards::apply_reward(sink.as_mut(), reward);
                    if let Some(story) = &encounter.setup.story {
                        sink.complete_stage(&story.stage_id);
                        if let Some(character) = &story.unlocks_character {
                            sink.unlock_character(character);
                        }
                    }
                }
                info!(
                    enemy = %encounter.enemy.id,
                    xp = reward.xp,
                    coins = reward.coins,
                    "Victory"
                );
                self.events.push(BattleEvent::Victory { reward });

                if encounter.mode() == GameMode::Arcade {
                    if let Some(run) = self.arcade.as_ref().filter(|run| run.is_last_round()) {
                        info!(wave = %run.wave.id, "Arcade wave cleared");
                        self.events.push(BattleEvent::WaveCleared {
                            wave_id: run.wave.id.clone(),
                        });
                    }
                }
            }
            EncounterOutcome::Defeat => {
                info!(enemy = %encounter.enemy.id, "Defeat");
                self.events.push(BattleEvent::Defeat);
            }
        }
    }

    fn start_single(&mut self, setup: MatchSetup) -> Result<(), SetupError> {
        self.apply_match_settings(setup)?;
        self.arcade = None;
        Ok(())
    }
}

fn sanitize_time_scale(scale: f64) -> f64 {
    if scale.is_finite() {
        scale.clamp(0.0, 4.0)
    } else {
        1.0
    }
}
