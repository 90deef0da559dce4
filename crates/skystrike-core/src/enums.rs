//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state). Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Main menu, nothing simulated.
    #[default]
    Menu,
    /// Player is choosing a spawn location on the globe.
    PickSpawn,
    /// Camera flying to the spawn point; simulation armed but frozen.
    Transitioning,
    /// Normal flight — the only phase in which the sim clock advances.
    Flying,
    Paused,
    /// Aircraft destroyed; input ignored until respawn.
    Crashed,
}

/// Selectable weapon station kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Revolver cannon, unlimited ammo, heat-limited.
    #[default]
    Gun,
    /// IR-guided missile, requires a seeker lock to fire.
    Missile,
    /// Countermeasure dispenser — not in the selection cycle.
    FlareDispenser,
}

/// Missile seeker lock progression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockStatus {
    /// No candidate in the seeker cone.
    #[default]
    None,
    /// Candidate in cone, lock timer accumulating.
    Locking,
    /// Lock complete; missile launch authorized.
    Locked,
}
