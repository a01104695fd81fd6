//! Level and mode scaling.
//!
//! Pure exponential growth curves. `player_level` below 1 is treated as 1
//! so exponents stay non-negative. Results are not rounded.

use tekra_core::components::Combatant;
use tekra_core::constants::*;
use tekra_core::enums::GameMode;

fn growth(rate: f64, player_level: u32) -> f64 {
    let exponent = player_level.max(1) - 1;
    rate.powi(exponent.min(i32::MAX as u32) as i32)
}

/// Enemy health multiplier per mode. Story stages scale through their
/// difficulty instead.
pub fn mode_health_multiplier(mode: GameMode) -> f64 {
    match mode {
        GameMode::Arcade | GameMode::Story => 1.0,
        GameMode::Event => 1.3,
        GameMode::Raid => 1.8,
    }
}

/// Enemy attack multiplier per mode.
pub fn mode_attack_multiplier(mode: GameMode) -> f64 {
    match mode {
        GameMode::Arcade | GameMode::Story => 1.0,
        GameMode::Event => 1.2,
        GameMode::Raid => 1.4,
    }
}

pub fn enemy_scaled_health(base_health: f64, player_level: u32, mode: GameMode) -> f64 {
    base_health * growth(ENEMY_HEALTH_GROWTH, player_level) * mode_health_multiplier(mode)
}

pub fn enemy_scaled_attack(base_attack: f64, player_level: u32, mode: GameMode) -> f64 {
    base_attack * growth(ENEMY_ATTACK_GROWTH, player_level) * mode_attack_multiplier(mode)
}

pub fn player_scaled_health(base_health: f64, player_level: u32) -> f64 {
    base_health * growth(PLAYER_HEALTH_GROWTH, player_level)
}

pub fn player_scaled_attack(base_attack: f64, player_level: u32) -> f64 {
    base_attack * growth(PLAYER_ATTACK_GROWTH, player_level)
}

/// Multiplier applied to the raw damage of every ability the player plays.
pub fn player_damage_multiplier(player_level: u32) -> f64 {
    growth(PLAYER_ATTACK_GROWTH, player_level)
}

/// Scaled copy of an enemy definition for this level and mode.
pub fn scale_enemy(enemy: &Combatant, player_level: u32, mode: GameMode) -> Combatant {
    enemy.scaled(
        enemy_scaled_health(enemy.max_health, player_level, mode).max(MIN_MAX_HEALTH),
        enemy_scaled_attack(enemy.attack, player_level, mode).max(0.0),
    )
}

/// Scaled copy of the player's hero for this level.
pub fn scale_player(player: &Combatant, player_level: u32) -> Combatant {
    player.scaled(
        player_scaled_health(player.max_health, player_level).max(MIN_MAX_HEALTH),
        player_scaled_attack(player.attack, player_level).max(0.0),
    )
}
