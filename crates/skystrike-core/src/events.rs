//! Events emitted by the simulation for audio and presentation feedback.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponKind;
use crate::types::GeoPos;

/// Audio cues for the host sound system. Loop-style sounds are emitted as
/// start/stop edge pairs; one-shots fire once per occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Selected weapon changed.
    WeaponSwitch { name: String },
    /// Cannon burst loop started.
    GunFireStart,
    /// Cannon burst loop stopped.
    GunFireStop,
    /// Missile left the rail.
    MissileAway,
    /// Fire attempt on an empty station. Rate-limited by the engine.
    AmmoEmpty { kind: WeaponKind },
    /// Gun reached overheat and latched.
    GunOverheat,
    /// Seeker started painting a candidate.
    LockSearchStart,
    /// Seeker stopped painting (went cold or achieved lock).
    LockSearchStop,
    /// Lock complete.
    LockAcquired,
    /// Established lock dropped.
    LockLost,
    /// One flare released.
    FlareDispense,
    /// Afterburner lit.
    Boost,
    /// An aircraft or missile detonated.
    Explosion { large: bool },
    /// Bullet terrain impact.
    BulletGroundHit,
    /// Ground-proximity pull-up call. Rate-limited while the condition holds.
    PullUp,
    /// Player aircraft hit the terrain.
    Crash,
}

/// Presentation events: HUD notifications and effect spawn requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiEvent {
    /// An NPC was destroyed by the player.
    Kill { npc_id: u32, name: String, points: i64 },
    /// Score total changed.
    ScoreChanged { score: i64 },
    /// Spawn an explosion effect.
    SpawnExplosion { pos: GeoPos, large: bool },
    /// Spawn falling wreckage inheriting the victim's motion.
    SpawnWreckage {
        pos: GeoPos,
        heading: f64,
        pitch: f64,
        speed: f64,
    },
    /// Spawn a terrain-impact spark.
    SpawnSpark { pos: GeoPos },
}

/// Internal kill record, produced by the projectile system and consumed by
/// the engine (score, HUD feed, explosion cue).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KillEvent {
    pub npc_id: u32,
    pub name: String,
}
