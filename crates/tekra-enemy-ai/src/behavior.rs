//! Enemy behavior state machine.
//!
//! Holds the enemy's phase, the active pattern and the combo counter, and
//! turns encounter state into the enemy's next action. Deterministic: the
//! same sequence of inputs always yields the same sequence of actions.
//!
//! Phases only ever advance (`Phase1 -> Phase2 -> Enraged`, or straight to
//! `Enraged`) and are driven by the health ratio at the time of the check.
//! Loading a new phase pattern resets the pattern cursor, never the combo
//! counter.

use tracing::{debug, info};

use tekra_core::components::Combatant;
use tekra_core::enums::{EnemyAction, EnemyPhase};
use tekra_core::tuning::BattleTuning;

use crate::pattern::{PatternState, PatternStep};
use crate::profiles::pattern_for;

/// Thresholds the state machine is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorConfig {
    pub phase2_threshold: f64,
    pub enraged_threshold: f64,
    pub max_combo: u32,
    pub finisher_player_health: f64,
    pub finisher_min_multiplier: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self::from(&BattleTuning::default())
    }
}

impl From<&BattleTuning> for BehaviorConfig {
    fn from(tuning: &BattleTuning) -> Self {
        Self {
            phase2_threshold: tuning.phase2_threshold,
            enraged_threshold: tuning.enraged_threshold,
            max_combo: tuning.max_combo,
            finisher_player_health: tuning.finisher_player_health,
            finisher_min_multiplier: tuning.finisher_min_multiplier,
        }
    }
}

/// A phase change produced by `update_phase_if_needed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition {
    pub from: EnemyPhase,
    pub to: EnemyPhase,
}

#[derive(Debug, Clone)]
pub struct EnemyBehavior {
    config: BehaviorConfig,
    phase: EnemyPhase,
    pattern: PatternState,
    combo_counter: u32,
    /// Max health captured by `configure`. Zero until configured.
    max_health: f64,
}

impl EnemyBehavior {
    pub fn new(config: BehaviorConfig) -> Self {
        Self {
            config,
            phase: EnemyPhase::Phase1,
            pattern: pattern_for(EnemyPhase::Phase1),
            combo_counter: 0,
            max_health: 0.0,
        }
    }

    /// Reset for a new encounter against `enemy` (already scaled).
    pub fn configure(&mut self, enemy: &Combatant) {
        self.max_health = enemy.max_health;
        self.phase = EnemyPhase::Phase1;
        self.combo_counter = 0;
        self.pattern = pattern_for(EnemyPhase::Phase1);
        debug!(enemy = %enemy.id, max_health = self.max_health, "Enemy behavior configured");
    }

    /// Re-evaluate the phase from the enemy's current health.
    ///
    /// Returns the transition when the phase advanced. A zero max health
    /// (unconfigured behavior) never transitions.
    pub fn update_phase_if_needed(&mut self, current_health: f64) -> Option<PhaseTransition> {
        if self.max_health <= 0.0 {
            return None;
        }
        let ratio = current_health / self.max_health;

        let next = if ratio < self.config.enraged_threshold && self.phase != EnemyPhase::Enraged {
            EnemyPhase::Enraged
        } else if ratio < self.config.phase2_threshold && self.phase == EnemyPhase::Phase1 {
            EnemyPhase::Phase2
        } else {
            return None;
        };

        let transition = PhaseTransition {
            from: self.phase,
            to: next,
        };
        self.phase = next;
        self.pattern = pattern_for(next);
        info!(from = ?transition.from, to = ?transition.to, ratio, "Enemy phase advanced");
        Some(transition)
    }

    /// Pick the enemy's reply.
    pub fn choose_action(&mut self, enemy: &Combatant, player_health: f64) -> EnemyAction {
        if self.combo_counter >= self.config.max_combo {
            self.combo_counter = 0;
            debug!(enemy = %enemy.id, "Combo limit reached, forcing wait");
            return EnemyAction::Wait;
        }

        let Some(step) = self.pattern.next_step() else {
            return EnemyAction::BasicAttack { multiplier: 1.0 };
        };

        let action = match step {
            PatternStep::Attack { multiplier } => {
                self.combo_counter += 1;
                if player_health < self.config.finisher_player_health
                    && multiplier >= self.config.finisher_min_multiplier
                {
                    self.combo_counter += 1;
                    EnemyAction::HeavyAttack
                } else {
                    EnemyAction::BasicAttack { multiplier }
                }
            }
            PatternStep::HeavyAttack => {
                self.combo_counter += 2;
                EnemyAction::HeavyAttack
            }
            PatternStep::Enrage => {
                self.combo_counter = 0;
                EnemyAction::Enrage
            }
            PatternStep::Wait => {
                self.combo_counter = 0;
                EnemyAction::Wait
            }
        };
        debug!(enemy = %enemy.id, ?action, combo = self.combo_counter, "Enemy action chosen");
        action
    }

    pub fn phase(&self) -> EnemyPhase {
        self.phase
    }

    pub fn combo_counter(&self) -> u32 {
        self.combo_counter
    }

    pub fn pattern(&self) -> &PatternState {
        &self.pattern
    }

    pub fn max_health(&self) -> f64 {
        self.max_health
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }
}

impl Default for EnemyBehavior {
    fn default() -> Self {
        Self::new(BehaviorConfig::default())
    }
}
