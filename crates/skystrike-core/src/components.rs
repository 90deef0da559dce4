//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::GeoPos;

/// AI-flown aircraft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    /// Stable id used by lock/missile target references.
    pub id: u32,
    /// Display callsign, e.g. "VIPER 472".
    pub name: String,
    /// Heading in degrees, [0, 360).
    pub heading: f64,
    /// Pitch in degrees.
    pub pitch: f64,
    /// Bank angle in degrees (presentation only — steering is heading-based).
    pub roll: f64,
    /// Speed in m/s.
    pub speed: f64,
    pub throttle: f64,
    pub boosting: bool,
    /// Heading the steering loop is converging toward.
    pub target_heading: f64,
    /// Pitch the steering loop is converging toward.
    pub target_pitch: f64,
    /// Seconds until the next behavior re-roll.
    pub behavior_timer: f64,
    /// Seconds until the next terrain-avoidance check.
    pub terrain_timer: f64,
    /// Set by a projectile hit; despawned by the cleanup pass.
    pub destroyed: bool,
}

/// What a projectile is, with per-kind state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProjectileKind {
    Bullet,
    Missile {
        /// NPC id the seeker was locked to at launch. Straight-line flight
        /// once the target is gone.
        target: Option<u32>,
    },
    Flare {
        /// Separate vertical integrator — flares fall ballistically while
        /// coasting along their ejection heading.
        vertical_velocity: f64,
    },
}

/// In-flight projectile. The entity also carries a `GeoPos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub kind: ProjectileKind,
    pub heading: f64,
    pub pitch: f64,
    pub speed: f64,
    /// Seconds since launch.
    pub age: f64,
    pub max_life: f64,
    /// False once expired or detonated. The entity survives until its
    /// trail has fully faded.
    pub active: bool,
    pub trail: Vec<SmokePuff>,
    /// Meters traveled since the last trail puff.
    pub dist_since_puff: f64,
}

/// One smoke puff of a projectile trail. Fades and grows monotonically
/// with its remaining-life fraction; never spawns children.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmokePuff {
    pub pos: GeoPos,
    pub life: f64,
    pub max_life: f64,
}

impl Projectile {
    /// Fraction of lifetime remaining, 1.0 at launch.
    pub fn life_fraction(&self) -> f64 {
        (1.0 - self.age / self.max_life).clamp(0.0, 1.0)
    }
}

impl SmokePuff {
    /// Fade fraction, 1.0 fresh, 0.0 fully faded.
    pub fn fade(&self) -> f64 {
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}
