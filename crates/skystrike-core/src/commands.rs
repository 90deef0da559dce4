//! Game lifecycle commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. A command
//! that is invalid for the current phase is a silent no-op.

use serde::{Deserialize, Serialize};

/// All lifecycle actions. Flight controls are not commands — they arrive
/// every tick as `RawInput`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameCommand {
    /// Menu -> PickSpawn.
    StartGame,
    /// PickSpawn -> Transitioning. Resets the aircraft, weapons, and world
    /// and seeds the first NPC near the spawn point.
    ConfirmSpawn {
        lon: f64,
        lat: f64,
        /// Spawn altitude in meters (host computes terrain + clearance).
        alt: f64,
        heading: f64,
    },
    /// Transitioning -> Flying, once the host's fly-in camera settles.
    TransitionComplete,
    /// Flying -> Paused. Also issued by the host on window blur.
    Pause,
    /// Paused -> Flying.
    Resume,
    /// Crashed | Paused -> PickSpawn.
    Respawn,
    /// Any phase -> Menu, full reset.
    Quit,
}
