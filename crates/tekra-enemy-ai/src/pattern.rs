//! Cyclic action patterns.

use serde::{Deserialize, Serialize};

/// One step of an enemy pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PatternStep {
    Attack { multiplier: f64 },
    HeavyAttack,
    Wait,
    Enrage,
}

/// A fixed sequence of steps with a cursor that wraps forever.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternState {
    steps: Vec<PatternStep>,
    cursor: usize,
}

impl PatternState {
    pub fn new(steps: Vec<PatternStep>) -> Self {
        Self { steps, cursor: 0 }
    }

    /// Return the step under the cursor and advance it, wrapping at the end.
    /// `None` only for an empty pattern.
    pub fn next_step(&mut self) -> Option<PatternStep> {
        let step = *self.steps.get(self.cursor)?;
        self.cursor = (self.cursor + 1) % self.steps.len();
        Some(step)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[PatternStep] {
        &self.steps
    }
}
