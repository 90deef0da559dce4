//! State shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use skystrike_core::commands::GameCommand;
use skystrike_core::snapshot::GameSnapshot;
use skystrike_flight::RawInput;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A lifecycle command to forward to the simulation engine.
    Game(GameCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared host state.
///
/// The game loop thread reads `input` at the top of every tick and writes
/// `latest_snapshot` at the bottom; the host writes input whenever its own
/// event source fires and polls snapshots at its own rate.
pub struct HostState {
    /// Channel sender to the game loop thread. `None` until the loop is
    /// spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Level-triggered input sampled by the loop every tick.
    pub input: Arc<Mutex<RawInput>>,
    /// Latest snapshot for synchronous queries.
    pub latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            input: Arc::new(Mutex::new(RawInput::default())),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl HostState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread and install its command sender.
    pub fn start_loop(&self) {
        let tx = crate::game_loop::spawn_game_loop(
            Arc::clone(&self.input),
            Arc::clone(&self.latest_snapshot),
        );
        if let Ok(mut slot) = self.command_tx.lock() {
            *slot = Some(tx);
        }
    }

    /// Send a command to the running loop. False when the loop was never
    /// started or has shut down.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        match self.command_tx.lock() {
            Ok(guard) => guard
                .as_ref()
                .map(|tx| tx.send(command).is_ok())
                .unwrap_or(false),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_state_creation() {
        let state = HostState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert_eq!(*state.input.lock().unwrap(), RawInput::default());
    }

    #[test]
    fn test_start_loop_installs_sender() {
        let state = HostState::new();
        assert!(!state.send(GameLoopCommand::Game(GameCommand::StartGame)));

        state.start_loop();
        assert!(state.command_tx.lock().unwrap().is_some());
        assert!(state.send(GameLoopCommand::Game(GameCommand::StartGame)));
        assert!(state.send(GameLoopCommand::Shutdown));
    }
}
