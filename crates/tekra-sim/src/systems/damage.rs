//! Damage resolver.

use tekra_core::enums::EnemyAction;

/// Result of applying damage to a health value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageOutcome {
    pub new_health: f64,
    pub is_lethal: bool,
}

/// Subtract `amount` from `current_health`, never going below zero.
///
/// Callers pass already-scaled, non-negative damage; negative or
/// non-finite amounts are treated as zero.
pub fn apply_damage(amount: f64, current_health: f64) -> DamageOutcome {
    let amount = if amount.is_finite() { amount.max(0.0) } else { 0.0 };
    let new_health = (current_health - amount).max(0.0);
    DamageOutcome {
        new_health,
        is_lethal: new_health <= 0.0,
    }
}

/// Damage of an enemy reply. `Wait` and `Enrage` deal none.
pub fn enemy_reply_damage(action: &EnemyAction, attack: f64, heavy_multiplier: f64) -> f64 {
    let damage = match action {
        EnemyAction::BasicAttack { multiplier } => attack * multiplier,
        EnemyAction::HeavyAttack => attack * heavy_multiplier,
        EnemyAction::Wait | EnemyAction::Enrage => 0.0,
    };
    if damage.is_finite() {
        damage.max(0.0)
    } else {
        0.0
    }
}
