//! Tunable battle parameters.
//!
//! Defaults come from `constants`; drivers may override any field from a
//! config file. Missing fields keep their default.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Timing and threshold parameters consumed by the battle engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleTuning {
    pub player_windup_secs: f64,
    pub player_recovery_secs: f64,
    pub enemy_windup_secs: f64,
    pub enemy_recovery_secs: f64,
    pub phase2_threshold: f64,
    pub enraged_threshold: f64,
    pub max_combo: u32,
    pub finisher_player_health: f64,
    pub finisher_min_multiplier: f64,
    pub heavy_attack_multiplier: f64,
}

impl Default for BattleTuning {
    fn default() -> Self {
        Self {
            player_windup_secs: PLAYER_WINDUP_SECS,
            player_recovery_secs: PLAYER_RECOVERY_SECS,
            enemy_windup_secs: ENEMY_WINDUP_SECS,
            enemy_recovery_secs: ENEMY_RECOVERY_SECS,
            phase2_threshold: PHASE2_HEALTH_RATIO,
            enraged_threshold: ENRAGED_HEALTH_RATIO,
            max_combo: MAX_COMBO,
            finisher_player_health: FINISHER_PLAYER_HEALTH,
            finisher_min_multiplier: FINISHER_MIN_MULTIPLIER,
            heavy_attack_multiplier: HEAVY_ATTACK_MULTIPLIER,
        }
    }
}

impl BattleTuning {
    /// Clamp values that would break the script or the phase model.
    /// Delays become non-negative, thresholds land in `[0, 1]` with the
    /// enraged threshold never above the phase 2 threshold.
    pub fn sanitized(mut self) -> Self {
        for delay in [
            &mut self.player_windup_secs,
            &mut self.player_recovery_secs,
            &mut self.enemy_windup_secs,
            &mut self.enemy_recovery_secs,
        ] {
            if !delay.is_finite() || *delay < 0.0 {
                *delay = 0.0;
            }
        }
        self.phase2_threshold = clamp_unit(self.phase2_threshold);
        self.enraged_threshold = clamp_unit(self.enraged_threshold).min(self.phase2_threshold);
        self.max_combo = self.max_combo.max(1);
        if !self.heavy_attack_multiplier.is_finite() || self.heavy_attack_multiplier < 0.0 {
            self.heavy_attack_multiplier = HEAVY_ATTACK_MULTIPLIER;
        }
        self
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
