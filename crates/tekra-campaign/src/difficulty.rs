//! Difficulty rating of a stage relative to the player's level.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyRating {
    Easy,
    Fair,
    Hard,
    Impossible,
}

impl DifficultyRating {
    /// Rate a stage from the gap between player and recommended level.
    pub fn evaluate(player_level: u32, recommended_level: u32) -> Self {
        let diff = i64::from(player_level) - i64::from(recommended_level);
        match diff {
            6.. => DifficultyRating::Easy,
            2..=5 => DifficultyRating::Fair,
            -2..=1 => DifficultyRating::Hard,
            _ => DifficultyRating::Impossible,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyRating::Easy => "OVERPOWERED",
            DifficultyRating::Fair => "EVEN MATCH",
            DifficultyRating::Hard => "BRUTAL",
            DifficultyRating::Impossible => "SUICIDE",
        }
    }
}
