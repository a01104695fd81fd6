//! Turn system. Arbitrates whose action is permitted.
//!
//! Has no timers of its own; the engine drives every transition from its
//! step queue.

use tekra_core::enums::Turn;

#[derive(Debug, Clone, Copy, Default)]
pub struct TurnSystem {
    current: Turn,
}

impl TurnSystem {
    pub fn current(&self) -> Turn {
        self.current
    }

    pub fn start_player_turn(&mut self) {
        self.current = Turn::Player;
    }

    pub fn start_enemy_turn(&mut self) {
        self.current = Turn::Enemy;
    }

    pub fn lock(&mut self) {
        self.current = Turn::Locked;
    }

    pub fn can_player_act(&self) -> bool {
        self.current == Turn::Player
    }

    /// New encounter: the player always opens.
    pub fn reset(&mut self) {
        self.current = Turn::Player;
    }
}
