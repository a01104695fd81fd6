//! Hand drawing and replacement.

use rand::seq::SliceRandom;
use rand::Rng;

use tekra_core::components::Ability;
use tekra_core::constants::HAND_SIZE;

/// Draw a fresh hand of up to `HAND_SIZE` distinct abilities from `pool`.
pub fn draw_hand<R: Rng + ?Sized>(pool: &[&Ability], rng: &mut R) -> Vec<Ability> {
    let mut candidates: Vec<&Ability> = pool.to_vec();
    candidates.shuffle(rng);
    candidates
        .into_iter()
        .take(HAND_SIZE)
        .cloned()
        .collect()
}

/// Swap the played ability for a random pool ability not already in hand.
///
/// Returns the id of the replacement, or `None` when nothing is left to draw
/// (the played ability then stays in hand).
pub fn replace_in_hand<R: Rng + ?Sized>(
    hand: &mut [Ability],
    played_id: &str,
    pool: &[&Ability],
    rng: &mut R,
) -> Option<String> {
    let slot = hand.iter().position(|ability| ability.id == played_id)?;
    let unused: Vec<&Ability> = pool
        .iter()
        .copied()
        .filter(|candidate| hand.iter().all(|held| held.id != candidate.id))
        .collect();
    let replacement = unused.choose(rng)?;
    hand[slot] = (*replacement).clone();
    Some(replacement.id.clone())
}
