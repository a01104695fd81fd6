//! Timed step queue for action scripts.
//!
//! Each step of an action script is posted with a delay relative to the
//! time the previous step ran. Steps carry the encounter generation they
//! were posted under; the engine drops any step whose generation no longer
//! matches the live encounter.

use std::collections::VecDeque;

use tekra_core::enums::{AbilityCategory, EnemyAction};

/// Slack when comparing a due time against the accumulated clock.
pub const TIME_EPSILON: f64 = 1e-9;

/// One beat of an action script.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    /// The player's wind-up ends and the ability lands.
    PlayerStrike { damage: f64, category: AbilityCategory },
    /// The player's recovery ends; victory or enemy reply follows.
    PlayerRecover,
    /// The enemy's wind-up ends and its reply lands.
    EnemyStrike { action: EnemyAction },
    /// The enemy's recovery ends; control returns to the player.
    EnemyRecover,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledStep {
    pub due_secs: f64,
    pub seq: u64,
    pub generation: u64,
    pub step: ScriptStep,
}

/// Steps ordered by due time, then by scheduling order.
#[derive(Debug, Clone, Default)]
pub struct StepQueue {
    entries: VecDeque<ScheduledStep>,
    next_seq: u64,
}

impl StepQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post `step` to run `delay_secs` after `at_secs`.
    pub fn schedule(&mut self, at_secs: f64, delay_secs: f64, generation: u64, step: ScriptStep) {
        let due_secs = at_secs + delay_secs.max(0.0);
        let seq = self.next_seq;
        self.next_seq += 1;
        let index = self.entries.partition_point(|entry| entry.due_secs <= due_secs);
        self.entries.insert(
            index,
            ScheduledStep {
                due_secs,
                seq,
                generation,
                step,
            },
        );
    }

    /// Remove and return the earliest step due at or before `now_secs`.
    pub fn pop_due(&mut self, now_secs: f64) -> Option<ScheduledStep> {
        let front = self.entries.front()?;
        if front.due_secs <= now_secs + TIME_EPSILON {
            self.entries.pop_front()
        } else {
            None
        }
    }

    /// Due time of the earliest pending step.
    pub fn next_due(&self) -> Option<f64> {
        self.entries.front().map(|entry| entry.due_secs)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
