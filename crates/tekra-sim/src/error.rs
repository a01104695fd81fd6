//! Errors raised when an encounter cannot be started.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SetupError {
    #[error("no player fighter selected")]
    MissingPlayer,

    #[error("unknown arcade wave `{0}`")]
    UnknownWave(String),

    #[error("unknown raid boss `{0}`")]
    UnknownRaidBoss(String),

    #[error("unknown event `{0}`")]
    UnknownEvent(String),

    #[error("unknown story stage `{0}`")]
    UnknownStage(String),

    #[error("enemy `{0}` has non-finite stats")]
    InvalidEnemy(String),

    #[error("stage `{stage_id}` does not offer {difficulty} difficulty")]
    UnsupportedDifficulty { stage_id: String, difficulty: String },

    #[error("stage `{stage_id}` needs level {recommended_level}, player is level {player_level}")]
    LevelTooLow {
        stage_id: String,
        player_level: u32,
        recommended_level: u32,
    },

    #[error("no arcade wave is running")]
    NoArcadeRun,

    #[error("arcade wave `{0}` has no rounds left")]
    WaveExhausted(String),
}
