//! Enemy AI for Tekra.
//!
//! Implements the phase state machine, the per-phase cyclic action
//! patterns and the combo breaker that forces periodic recovery.

pub mod behavior;
pub mod pattern;
pub mod profiles;

pub use behavior::EnemyBehavior;
pub use tekra_core as core;
