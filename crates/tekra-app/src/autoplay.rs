//! Autoplay pilot for headless runs.
//!
//! Plays the first ready card whenever the player may act, until the
//! encounter resolves or the tick budget runs out.

use tracing::{debug, info};

use tekra_core::commands::BattleCommand;
use tekra_core::constants::TICK_RATE;
use tekra_core::enums::{EncounterOutcome, Turn};
use tekra_core::events::BattleEvent;
use tekra_core::state::EncounterSnapshot;
use tekra_core::types::AbilityId;
use tekra_sim::BattleEngine;

use crate::game_loop::TICK_DURATION;
use crate::state::{AppState, LoopError};

#[derive(Debug, Clone)]
pub struct AutoplayReport {
    pub ticks: u64,
    pub plays: u32,
    pub outcome: Option<EncounterOutcome>,
    pub final_snapshot: EncounterSnapshot,
}

/// First ready card in hand, if the player may act in `snapshot`.
pub fn pick_card(snapshot: &EncounterSnapshot) -> Option<AbilityId> {
    if snapshot.turn != Turn::Player || snapshot.is_action_in_flight || snapshot.is_resolved {
        return None;
    }
    snapshot
        .hand
        .iter()
        .find(|card| card.ready)
        .map(|card| card.id.clone())
}

/// Drive `engine` directly, one fixed tick at a time.
pub fn run_headless(engine: &mut BattleEngine, max_ticks: u64) -> AutoplayReport {
    let mut snapshot = engine.snapshot();
    log_events(&snapshot.events);
    let mut plays = 0;
    let mut ticks = 0;

    while ticks < max_ticks && !snapshot.is_resolved {
        if let Some(card) = pick_card(&snapshot) {
            if engine.play_card(&card) {
                plays += 1;
            }
        }
        snapshot = engine.tick();
        ticks += 1;
        log_events(&snapshot.events);
    }

    AutoplayReport {
        ticks,
        plays,
        outcome: snapshot.outcome,
        final_snapshot: snapshot,
    }
}

/// Drive a running game loop through its command channel, polling the
/// published snapshot once per tick.
pub fn run_realtime(state: &AppState, max_ticks: u64) -> Result<AutoplayReport, LoopError> {
    if !state.is_running() {
        return Err(LoopError::NotStarted);
    }
    let mut plays = 0;
    let mut last_played_at = None;
    let mut latest: Option<EncounterSnapshot> = None;
    // Slack for a loop running below 1x; a stalled loop ends the run.
    let poll_budget = max_ticks.saturating_mul(4).saturating_add(TICK_RATE as u64);

    for _ in 0..poll_budget {
        std::thread::sleep(TICK_DURATION);
        let Some(snapshot) = state.snapshot()? else {
            continue;
        };
        // Snapshots are polled, so events of skipped ticks are not seen here.
        if latest.as_ref().map(|s| s.time.tick) != Some(snapshot.time.tick) {
            log_events(&snapshot.events);
        }

        if snapshot.is_resolved || snapshot.time.tick >= max_ticks {
            return Ok(report(snapshot, plays));
        }

        // One command per published tick so a play is not queued twice.
        if last_played_at != Some(snapshot.time.tick) {
            if let Some(card) = pick_card(&snapshot) {
                state.send(BattleCommand::PlayCard { ability_id: card })?;
                last_played_at = Some(snapshot.time.tick);
                plays += 1;
            }
        }
        latest = Some(snapshot);
    }

    latest
        .map(|snapshot| report(snapshot, plays))
        .ok_or(LoopError::Disconnected)
}

fn report(snapshot: EncounterSnapshot, plays: u32) -> AutoplayReport {
    AutoplayReport {
        ticks: snapshot.time.tick,
        plays,
        outcome: snapshot.outcome,
        final_snapshot: snapshot,
    }
}

fn log_events(events: &[BattleEvent]) {
    for event in events {
        match event {
            BattleEvent::EncounterStarted { mode, enemy_id } => {
                info!(?mode, enemy = %enemy_id, "Encounter started")
            }
            BattleEvent::ActionStarted { ability_id } => debug!(ability = %ability_id, "Played"),
            BattleEvent::EnemyIntent { action } => debug!(?action, "Enemy intent"),
            BattleEvent::DamageApplied { target, amount, remaining } => {
                info!(?target, amount, remaining, "Hit")
            }
            BattleEvent::PhaseChanged { from, to } => info!(?from, ?to, "Enemy phase changed"),
            BattleEvent::Victory { reward } => info!(xp = reward.xp, coins = reward.coins, "Victory"),
            BattleEvent::Defeat => info!("Defeat"),
            BattleEvent::WaveCleared { wave_id } => info!(wave = %wave_id, "Wave cleared"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use tekra_campaign::{AbilityCatalog, ContentLibrary, FighterCatalog};
    use tekra_core::components::{Ability, Combatant};
    use tekra_core::enums::AbilityCategory;
    use tekra_core::state::HandCardView;
    use tekra_sim::SimConfig;

    fn engine(enemy_health: f64) -> BattleEngine {
        let hero = Combatant::new("tekra_core", "Tekra", 100.0, 10.0).with_ability_groups(["generic"]);
        let content = ContentLibrary {
            abilities: AbilityCatalog::new(vec![
                Ability::new("jab", "Jab", 20.0, AbilityCategory::Punch, 1.0),
                Ability::new("kick", "Kick", 30.0, AbilityCategory::Kick, 2.0),
            ])
            .unwrap(),
            fighters: FighterCatalog::new(vec![hero.clone()], vec![]).unwrap(),
            ..Default::default()
        };
        let mut engine = BattleEngine::new(SimConfig::default(), Arc::new(content));
        engine.select_player(hero);
        engine
            .start_encounter(Combatant::new("dummy", "Dummy", enemy_health, 5.0), "dojo")
            .unwrap();
        engine
    }

    fn card(id: &str, ready: bool) -> HandCardView {
        HandCardView {
            id: id.into(),
            title: id.into(),
            damage: 10.0,
            category: AbilityCategory::Punch,
            ready,
            cooldown_progress: if ready { 1.0 } else { 0.5 },
        }
    }

    #[test]
    fn test_pick_first_ready_card() {
        let snapshot = EncounterSnapshot {
            hand: vec![card("a", false), card("b", true), card("c", true)],
            ..Default::default()
        };
        assert_eq!(pick_card(&snapshot).as_deref(), Some("b"));
    }

    #[test]
    fn test_pick_nothing_off_turn() {
        let snapshot = EncounterSnapshot {
            turn: Turn::Locked,
            hand: vec![card("a", true)],
            ..Default::default()
        };
        assert_eq!(pick_card(&snapshot), None);

        let snapshot = EncounterSnapshot {
            is_resolved: true,
            hand: vec![card("a", true)],
            ..Default::default()
        };
        assert_eq!(pick_card(&snapshot), None);
    }

    #[test]
    fn test_headless_run_reaches_victory() {
        let mut engine = engine(100.0);
        let report = run_headless(&mut engine, 3_000);

        assert_eq!(report.outcome, Some(EncounterOutcome::Victory));
        assert!(report.plays >= 4);
        assert!(report.final_snapshot.is_resolved);
        assert!(report.ticks < 3_000);
    }

    #[test]
    fn test_headless_run_respects_tick_budget() {
        let mut engine = engine(1_000_000.0);
        let report = run_headless(&mut engine, 90);
        assert_eq!(report.ticks, 90);
        assert_eq!(report.outcome, None);
    }

    #[test]
    fn test_realtime_run_requires_started_loop() {
        let state = AppState::new();
        assert!(matches!(run_realtime(&state, 10), Err(LoopError::NotStarted)));
    }

    #[test]
    fn test_realtime_run_through_game_loop() {
        let state = AppState::new();
        state.start(|| engine(30.0)).unwrap();

        let report = run_realtime(&state, 600).unwrap();
        state.shutdown().unwrap();

        assert_eq!(report.outcome, Some(EncounterOutcome::Victory));
        assert!(report.plays >= 1);
        assert!(!state.is_running());
    }

    #[test]
    fn test_bundled_content_runs_every_mode() {
        use tekra_campaign::story::StoryDifficulty;

        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
        let content = Arc::new(ContentLibrary::load_dir(dir).unwrap());
        let hero = content.fighters.players()[0].clone();

        let starts: [&dyn Fn(&mut BattleEngine) -> Result<(), tekra_sim::SetupError>; 4] = [
            &|e: &mut BattleEngine| e.start_arcade("harbor_run"),
            &|e: &mut BattleEngine| e.start_raid("titan"),
            &|e: &mut BattleEngine| e.start_event("night_market"),
            &|e: &mut BattleEngine| e.start_story("ch1_s1", StoryDifficulty::Normal),
        ];
        for start in starts {
            let mut engine = BattleEngine::new(SimConfig::default(), Arc::clone(&content));
            engine.select_player(hero.clone());
            start(&mut engine).unwrap();
            assert_eq!(engine.encounter().unwrap().hand.len(), 3);

            let report = run_headless(&mut engine, 600);
            assert!(report.plays > 0);
        }
    }
}
