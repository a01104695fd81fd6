//! Driver state shared between callers and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use thiserror::Error;

use tekra_core::commands::BattleCommand;
use tekra_core::state::EncounterSnapshot;
use tekra_sim::BattleEngine;

use crate::game_loop;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A battle command to forward to the engine.
    Battle(BattleCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

#[derive(Debug, Error)]
pub enum LoopError {
    #[error("game loop already running")]
    AlreadyRunning,
    #[error("game loop not started")]
    NotStarted,
    #[error("game loop has stopped")]
    Disconnected,
    #[error("driver state lock poisoned")]
    Poisoned,
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Handle on a running (or not yet started) game loop.
///
/// `mpsc::Sender` is not `Sync`, so it sits behind a `Mutex`; the latest
/// snapshot is shared with the loop thread through an `Arc<Mutex<..>>`.
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<EncounterSnapshot>>>,
    loop_thread: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_thread: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop. The engine is built inside the loop thread.
    pub fn start<F>(&self, make_engine: F) -> Result<(), LoopError>
    where
        F: FnOnce() -> BattleEngine + Send + 'static,
    {
        let mut tx_lock = self.command_tx.lock().map_err(|_| LoopError::Poisoned)?;
        if tx_lock.is_some() {
            return Err(LoopError::AlreadyRunning);
        }
        let (cmd_tx, handle) = game_loop::spawn_game_loop(self.latest_snapshot.clone(), make_engine)?;
        *tx_lock = Some(cmd_tx);
        *self.loop_thread.lock().map_err(|_| LoopError::Poisoned)? = Some(handle);
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.command_tx.lock().map(|tx| tx.is_some()).unwrap_or(false)
    }

    /// Forward a battle command to the loop.
    pub fn send(&self, command: BattleCommand) -> Result<(), LoopError> {
        let tx_lock = self.command_tx.lock().map_err(|_| LoopError::Poisoned)?;
        let tx = tx_lock.as_ref().ok_or(LoopError::NotStarted)?;
        tx.send(GameLoopCommand::Battle(command))
            .map_err(|_| LoopError::Disconnected)
    }

    /// Latest published snapshot, if the loop has ticked at least once.
    pub fn snapshot(&self) -> Result<Option<EncounterSnapshot>, LoopError> {
        let lock = self.latest_snapshot.lock().map_err(|_| LoopError::Poisoned)?;
        Ok(lock.clone())
    }

    /// Ask the loop to stop and wait for its thread.
    pub fn shutdown(&self) -> Result<(), LoopError> {
        if let Some(tx) = self.command_tx.lock().map_err(|_| LoopError::Poisoned)?.take() {
            // The loop may already be gone; joining below is enough.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        let handle = self.loop_thread.lock().map_err(|_| LoopError::Poisoned)?.take();
        if let Some(handle) = handle {
            handle.join().map_err(|_| LoopError::Disconnected)?;
        }
        Ok(())
    }
}
