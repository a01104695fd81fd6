//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Identifier of an ability (card) in the ability catalog.
pub type AbilityId = String;

/// Identifier of a combatant (hero, enemy or raid boss).
pub type CombatantId = String;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each fixed tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one fixed tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }

    /// Advance by an arbitrary delta supplied by the driver (e.g. a display
    /// link duration). Negative or non-finite deltas are ignored so the clock
    /// stays monotonic.
    pub fn advance_by(&mut self, dt_secs: f64) {
        if dt_secs.is_finite() && dt_secs > 0.0 {
            self.tick += 1;
            self.elapsed_secs += dt_secs;
        }
    }
}

/// Experience and currency granted for winning an encounter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub xp: u32,
    pub coins: u32,
}

impl Reward {
    pub const fn new(xp: u32, coins: u32) -> Self {
        Self { xp, coins }
    }
}
