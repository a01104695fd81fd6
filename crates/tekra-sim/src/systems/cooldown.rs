//! Cooldown ledger: per-ability availability against the sim clock.

use std::collections::HashMap;

use tekra_core::components::Ability;
use tekra_core::types::AbilityId;

/// Maps ability id to the time (seconds) it becomes ready again.
/// An ability without an entry is ready.
#[derive(Debug, Clone, Default)]
pub struct CooldownLedger {
    ready_at: HashMap<AbilityId, f64>,
}

impl CooldownLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self, ability: &Ability, now: f64) -> bool {
        self.ready_at
            .get(&ability.id)
            .map_or(true, |&ready_at| now >= ready_at)
    }

    /// Start the cooldown of `ability` at `now`. Negative cooldowns count as zero.
    pub fn mark_played(&mut self, ability: &Ability, now: f64) {
        let cooldown = sanitize(ability.cooldown_secs);
        self.ready_at.insert(ability.id.clone(), now + cooldown);
    }

    /// Fraction of the cooldown elapsed, in `[0, 1]`. `1.0` when ready,
    /// never played, or the ability has no cooldown.
    pub fn progress(&self, ability: &Ability, now: f64) -> f64 {
        let cooldown = sanitize(ability.cooldown_secs);
        let Some(&ready_at) = self.ready_at.get(&ability.id) else {
            return 1.0;
        };
        if cooldown <= 0.0 {
            return 1.0;
        }
        (1.0 - (ready_at - now) / cooldown).clamp(0.0, 1.0)
    }

    /// Seconds until `ability` is ready (0 when ready).
    pub fn remaining(&self, ability: &Ability, now: f64) -> f64 {
        self.ready_at
            .get(&ability.id)
            .map_or(0.0, |&ready_at| (ready_at - now).max(0.0))
    }

    pub fn clear(&mut self) {
        self.ready_at.clear();
    }
}

fn sanitize(cooldown: f64) -> f64 {
    if cooldown.is_finite() && cooldown > 0.0 {
        cooldown
    } else {
        0.0
    }
}
