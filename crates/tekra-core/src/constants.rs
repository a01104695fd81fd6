//! Engine constants and tuning defaults.

/// Fixed tick rate of the driver loop (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per fixed tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Hand ---

/// Number of abilities held in hand.
pub const HAND_SIZE: usize = 3;

// --- Player action script (seconds) ---

/// Wind-up before the player's strike lands.
pub const PLAYER_WINDUP_SECS: f64 = 0.12;

/// Recovery after the strike before the outcome is evaluated.
pub const PLAYER_RECOVERY_SECS: f64 = 0.18;

// --- Enemy reply script (seconds) ---

/// Wind-up before the enemy reply lands.
pub const ENEMY_WINDUP_SECS: f64 = 0.3;

/// Recovery after the enemy reply before the player may act again.
pub const ENEMY_RECOVERY_SECS: f64 = 0.2;

// --- Enemy behavior ---

/// Health ratio below which an enemy in phase 1 moves to phase 2.
/// Earlier builds used 0.7; kept tunable through `BattleTuning`.
pub const PHASE2_HEALTH_RATIO: f64 = 0.5;

/// Health ratio below which an enemy becomes enraged.
pub const ENRAGED_HEALTH_RATIO: f64 = 0.2;

/// Offensive beats the enemy may chain before it is forced to wait.
pub const MAX_COMBO: u32 = 3;

/// Player health below which a strong attack is upgraded to a heavy attack.
pub const FINISHER_PLAYER_HEALTH: f64 = 40.0;

/// Minimum attack multiplier that qualifies for the finisher upgrade.
pub const FINISHER_MIN_MULTIPLIER: f64 = 1.2;

/// Damage multiplier of a heavy attack relative to the enemy's attack.
pub const HEAVY_ATTACK_MULTIPLIER: f64 = 2.0;

// --- Scaling ---

/// Per-level growth of enemy health.
pub const ENEMY_HEALTH_GROWTH: f64 = 1.08;

/// Per-level growth of enemy attack.
pub const ENEMY_ATTACK_GROWTH: f64 = 1.06;

/// Per-level growth of player health.
pub const PLAYER_HEALTH_GROWTH: f64 = 1.10;

/// Per-level growth of player attack (also applied to ability damage).
pub const PLAYER_ATTACK_GROWTH: f64 = 1.07;

/// Floor for any scaled maximum health, so health ratios stay defined.
pub const MIN_MAX_HEALTH: f64 = 1.0;

// --- Defaults for content without explicit stats ---

/// Health of the synthetic enemy used by events without a catalog enemy.
pub const EVENT_FALLBACK_HEALTH: f64 = 100.0;

/// Attack of the synthetic event enemy.
pub const EVENT_FALLBACK_ATTACK: f64 = 20.0;

/// Ability group every raid boss and story enemy may draw from.
pub const GENERIC_ABILITY_GROUP: &str = "generic";

/// Ability group shared by bosses.
pub const BOSS_ABILITY_GROUP: &str = "boss";
