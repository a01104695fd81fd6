//! Game loop thread. Runs the battle engine at 30Hz and publishes snapshots.
//!
//! The engine is created inside this thread from a caller-supplied factory.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state
//! for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use tekra_core::constants::TICK_RATE;
use tekra_core::state::EncounterSnapshot;
use tekra_sim::BattleEngine;

use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop<F>(
    latest_snapshot: Arc<Mutex<Option<EncounterSnapshot>>>,
    make_engine: F,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)>
where
    F: FnOnce() -> BattleEngine + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("tekra-game-loop".into())
        .spawn(move || {
            let mut engine = make_engine();
            run_game_loop(&mut engine, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    engine: &mut BattleEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<EncounterSnapshot>>,
) {
    info!("Game loop started");
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        if !drain_commands(engine, &cmd_rx) {
            info!(tick = engine.time().tick, "Game loop stopped");
            return;
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick, adjusting for time_scale
        let effective_tick_duration = scaled_tick_duration(engine.time_scale());
        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind, reset to avoid catch-up spiral
            debug!("Game loop behind schedule, resetting tick clock");
            next_tick_time = now;
        }
    }
}

/// Queue every pending command on the engine. Returns `false` once the
/// loop should stop.
fn drain_commands(engine: &mut BattleEngine, cmd_rx: &mpsc::Receiver<GameLoopCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Battle(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// Wall-clock duration of one tick at `time_scale`. A zero scale keeps the
/// nominal pace so the loop still services commands.
pub fn scaled_tick_duration(time_scale: f64) -> Duration {
    if time_scale > 0.001 {
        TICK_DURATION.div_f64(time_scale)
    } else {
        TICK_DURATION
    }
}
