//! Game snapshot — the complete visible state sent to the host each tick.
//!
//! Snapshots are read-only: the host never feeds one back into the
//! simulation except through next-tick input.

use serde::{Deserialize, Serialize};

use crate::components::ProjectileKind;
use crate::enums::*;
use crate::events::{AudioEvent, UiEvent};
use crate::types::{GeoPos, SimTime};

/// Complete per-tick state broadcast to the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub flight: FlightView,
    pub weapons: Vec<WeaponView>,
    pub lock: LockView,
    pub npcs: Vec<NpcView>,
    pub projectiles: Vec<ProjectileView>,
    /// HUD pull-up flasher; true every tick the GPWS condition holds.
    pub pull_up_warning: bool,
    pub audio_events: Vec<AudioEvent>,
    pub ui_events: Vec<UiEvent>,
}

/// Player aircraft for the HUD and camera rig.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightView {
    pub position: GeoPos,
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,
    pub speed: f64,
    pub throttle: f64,
    pub boosting: bool,
    pub boost_remaining: f64,
    pub vertical_speed: f64,
    /// Orbit camera offsets accumulated from mouse input (degrees).
    pub camera_yaw: f64,
    pub camera_pitch: f64,
    pub score: i64,
}

/// One weapon station for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponView {
    pub kind: WeaponKind,
    pub name: String,
    /// None = unlimited.
    pub ammo: Option<u32>,
    pub max_ammo: Option<u32>,
    pub selected: bool,
    /// Barrel heat 0..1 (gun only, 0 elsewhere).
    pub heat: f64,
    pub overheated: bool,
    /// Remaining HUD empty-flash time (seconds, 0 = idle).
    pub empty_warning: f64,
}

/// Seeker status for the HUD lock diamond.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LockView {
    pub status: LockStatus,
    /// Locked or in-progress candidate NPC id.
    pub target: Option<u32>,
}

/// One AI aircraft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NpcView {
    pub id: u32,
    pub name: String,
    pub position: GeoPos,
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,
    pub speed: f64,
    pub boosting: bool,
}

/// One projectile with its smoke trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub kind: ProjectileKind,
    pub position: GeoPos,
    pub heading: f64,
    pub pitch: f64,
    /// False once expired/detonated; the trail below keeps fading.
    pub active: bool,
    /// Remaining-life fraction, drives flare brightness.
    pub life_fraction: f64,
    pub trail: Vec<PuffView>,
}

/// One trail smoke puff.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PuffView {
    pub pos: GeoPos,
    /// 1.0 fresh, 0.0 fully faded. Presentation scales size inversely.
    pub fade: f64,
}
