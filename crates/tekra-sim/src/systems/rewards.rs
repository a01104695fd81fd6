//! Reward calculator.

use tekra_campaign::ProgressSink;
use tekra_core::enums::GameMode;
use tekra_core::types::Reward;

/// Fixed victory reward per mode.
///
/// Story stages carry their own reward; the arcade value is only used for
/// a story encounter set up without one.
pub fn rewards_for(mode: GameMode) -> Reward {
    match mode {
        GameMode::Arcade | GameMode::Story => Reward::new(75, 20),
        GameMode::Raid => Reward::new(50, 10),
        GameMode::Event => Reward::new(100, 30),
    }
}

/// Grant `reward` to the progress sink.
pub fn apply_reward<S: ProgressSink + ?Sized>(sink: &mut S, reward: Reward) {
    sink.add_xp(reward.xp);
    sink.add_coins(reward.coins);
}
