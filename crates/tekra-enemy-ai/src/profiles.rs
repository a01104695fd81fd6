//! Phase-specific patterns.
//!
//! Each phase owns one fixed cycle. Later phases hit harder and rest less.

use tekra_core::enums::EnemyPhase;

use crate::pattern::{PatternState, PatternStep};

/// Build the pattern for a given phase, cursor at the first step.
pub fn pattern_for(phase: EnemyPhase) -> PatternState {
    let steps = match phase {
        EnemyPhase::Phase1 => vec![
            PatternStep::Attack { multiplier: 1.0 },
            PatternStep::Attack { multiplier: 1.0 },
            PatternStep::Wait,
        ],
        EnemyPhase::Phase2 => vec![
            PatternStep::Attack { multiplier: 1.2 },
            PatternStep::HeavyAttack,
            PatternStep::Attack { multiplier: 1.0 },
        ],
        EnemyPhase::Enraged => vec![
            PatternStep::Attack { multiplier: 1.5 },
            PatternStep::HeavyAttack,
            PatternStep::Enrage,
        ],
    };
    PatternState::new(steps)
}
