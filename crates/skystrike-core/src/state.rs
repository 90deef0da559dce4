//! Player aircraft state.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::GeoPos;

/// The player aircraft's pose and energy state. Owned by the engine and
/// rewritten every flying tick from the flight-dynamics output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftState {
    pub position: GeoPos,
    /// Heading in degrees, [0, 360).
    pub heading: f64,
    /// Pitch in degrees, positive nose-up.
    pub pitch: f64,
    /// Bank in degrees, negative right-wing-down.
    pub roll: f64,
    /// Speed in m/s.
    pub speed: f64,
    pub throttle: f64,
    pub boosting: bool,
    pub boost_remaining: f64,
    /// Vertical speed in m/s, derived from the altitude delta each tick.
    pub vertical_speed: f64,
}

impl AircraftState {
    /// Fresh state at a spawn point.
    pub fn spawned(position: GeoPos, heading: f64) -> Self {
        Self {
            position,
            heading,
            pitch: 0.0,
            roll: 0.0,
            speed: SPAWN_SPEED,
            throttle: SPAWN_THROTTLE,
            boosting: false,
            boost_remaining: 0.0,
            vertical_speed: 0.0,
        }
    }
}

impl Default for AircraftState {
    fn default() -> Self {
        Self::spawned(GeoPos::default(), 0.0)
    }
}
