//! Snapshot builder. Assembles the visible encounter state after a tick.

use tekra_core::enums::{GameMode, Turn};
use tekra_core::events::BattleEvent;
use tekra_core::state::*;
use tekra_core::types::SimTime;
use tekra_enemy_ai::EnemyBehavior;

use super::cooldown::CooldownLedger;
use crate::encounter::Encounter;
use crate::scenario::ArcadeRun;

/// Inputs of a snapshot, borrowed from the engine.
pub struct SnapshotContext<'a> {
    pub time: &'a SimTime,
    pub mode: GameMode,
    pub turn: Turn,
    pub generation: u64,
    pub encounter: Option<&'a Encounter>,
    pub behavior: &'a EnemyBehavior,
    pub cooldowns: &'a CooldownLedger,
    pub arcade: Option<&'a ArcadeRun>,
}

pub fn build_snapshot(ctx: SnapshotContext<'_>, events: Vec<BattleEvent>) -> EncounterSnapshot {
    let now = ctx.time.elapsed_secs;
    let mut snapshot = EncounterSnapshot {
        time: *ctx.time,
        mode: ctx.mode,
        turn: ctx.turn,
        generation: ctx.generation,
        enemy_phase: ctx.behavior.phase(),
        arcade: ctx.arcade.map(|run| ArcadeProgressView {
            wave_id: run.wave.id.clone(),
            round: run.round,
            total_rounds: run.wave.total_rounds(),
        }),
        events,
        ..Default::default()
    };

    let Some(encounter) = ctx.encounter else {
        return snapshot;
    };

    snapshot.player = Some(CombatantView {
        id: encounter.player.id.clone(),
        name: encounter.player.name.clone(),
        health: encounter.player_health,
        max_health: encounter.player.max_health,
        pose: encounter.player_pose,
    });
    snapshot.enemy = Some(CombatantView {
        id: encounter.enemy.id.clone(),
        name: encounter.enemy.name.clone(),
        health: encounter.enemy_health,
        max_health: encounter.enemy.max_health,
        pose: encounter.enemy_pose,
    });
    snapshot.hand = encounter
        .hand
        .iter()
        .map(|ability| HandCardView {
            id: ability.id.clone(),
            title: ability.title.clone(),
            damage: ability.damage,
            category: ability.category,
            ready: ctx.cooldowns.is_ready(ability, now),
            cooldown_progress: ctx.cooldowns.progress(ability, now),
        })
        .collect();
    snapshot.is_action_in_flight = encounter.is_action_in_flight;
    snapshot.is_resolved = encounter.is_resolved;
    snapshot.outcome = encounter.outcome;
    snapshot.background = Some(encounter.setup.background.clone());
    snapshot
}
