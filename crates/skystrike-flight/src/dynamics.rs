//! Quaternion attitude integrator and first-order speed model.
//!
//! Attitude lives in a single `DQuat` (world frame: +Z north, +X east,
//! +Y up; body frame: +Z forward, +X right, +Y up). Per-tick control
//! rotations compose in yaw, pitch, roll order about the *body* axes, so
//! a rolled aircraft pitching up turns — the coupling falls out of the
//! composition rather than being modeled explicitly. Euler angles are
//! only ever extracted for output, never integrated.

use glam::{DQuat, DVec3};

use skystrike_core::constants::*;
use skystrike_core::types::wrap_heading;

use crate::input::ControlInput;

/// Pose and energy output of one integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSample {
    /// Heading in degrees, [0, 360).
    pub heading: f64,
    /// Pitch in degrees, positive nose-up.
    pub pitch: f64,
    /// Bank in degrees, negative right-wing-down.
    pub roll: f64,
    /// Speed in m/s.
    pub speed: f64,
    pub boosting: bool,
    pub boost_remaining: f64,
}

/// The player aircraft's flight model.
#[derive(Debug, Clone)]
pub struct FlightDynamics {
    orientation: DQuat,
    speed: f64,
    boosting: bool,
    boost_remaining: f64,
}

impl FlightDynamics {
    /// Fresh model at the given attitude (degrees) and speed.
    pub fn new(heading: f64, pitch: f64, roll: f64, speed: f64) -> Self {
        Self {
            orientation: quat_from_euler(heading, pitch, roll),
            speed,
            boosting: false,
            boost_remaining: 0.0,
        }
    }

    /// Snap back to a spawn attitude, dropping any boost in progress.
    pub fn reset(&mut self, heading: f64, pitch: f64, roll: f64, speed: f64) {
        *self = Self::new(heading, pitch, roll, speed);
    }

    /// Advance attitude and speed by `dt` seconds under the given controls.
    pub fn advance(&mut self, input: &ControlInput, dt: f64) -> FlightSample {
        // Boost latch: edge-triggered, fixed burn, no retrigger mid-burn.
        if input.boost_pressed && !self.boosting {
            self.boosting = true;
            self.boost_remaining = BOOST_DURATION_SECS;
        }
        if self.boosting {
            self.boost_remaining -= dt;
            if self.boost_remaining <= 0.0 {
                self.boosting = false;
                self.boost_remaining = 0.0;
            }
        }

        // First-order speed lag toward the throttle (or afterburner) target.
        let (target, rate) = if self.boosting {
            (FLIGHT_MAX_SPEED * BOOST_SPEED_FACTOR, SPEED_LAG_RATE_BOOST)
        } else {
            (
                FLIGHT_MIN_SPEED + input.throttle * (FLIGHT_MAX_SPEED - FLIGHT_MIN_SPEED),
                SPEED_LAG_RATE,
            )
        };
        self.speed += (target - self.speed) * (rate * dt).min(1.0);

        // Controls lose authority below corner speed.
        let effectiveness = (self.speed / FLIGHT_MIN_SPEED).min(1.0);

        let yaw_step = input.yaw * YAW_RATE * effectiveness * dt;
        let pitch_step = input.pitch * PITCH_RATE * effectiveness * dt;
        let roll_step = input.roll * ROLL_RATE * effectiveness * dt;

        // Body-frame composition: yaw about body-up, pitch about body-right,
        // roll about body-forward, in that order.
        self.orientation = self.orientation
            * DQuat::from_rotation_y(yaw_step)
            * DQuat::from_rotation_x(-pitch_step)
            * DQuat::from_rotation_z(roll_step);
        // Renormalize every tick so float drift never accumulates.
        self.orientation = self.orientation.normalize();

        self.sample()
    }

    /// Current pose without advancing.
    pub fn sample(&self) -> FlightSample {
        let (heading, pitch, roll) = euler_from_quat(&self.orientation);
        FlightSample {
            heading,
            pitch,
            roll,
            speed: self.speed,
            boosting: self.boosting,
            boost_remaining: self.boost_remaining,
        }
    }

    /// Quaternion norm, for invariant checks.
    pub fn orientation_norm(&self) -> f64 {
        self.orientation.length()
    }
}

impl Default for FlightDynamics {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, SPAWN_SPEED)
    }
}

/// Build a world-from-body quaternion from aircraft Euler angles (degrees).
fn quat_from_euler(heading: f64, pitch: f64, roll: f64) -> DQuat {
    DQuat::from_rotation_y(heading.to_radians())
        * DQuat::from_rotation_x(-pitch.to_radians())
        * DQuat::from_rotation_z(roll.to_radians())
}

/// Extract (heading, pitch, roll) degrees from the basis vectors.
/// Well-defined for |pitch| < 90; at the poles heading/roll trade off,
/// as Euler angles always do.
fn euler_from_quat(q: &DQuat) -> (f64, f64, f64) {
    let fwd = *q * DVec3::Z;
    let right = *q * DVec3::X;
    let up = *q * DVec3::Y;

    let heading = wrap_heading(fwd.x.atan2(fwd.z).to_degrees());
    let pitch = fwd.y.clamp(-1.0, 1.0).asin().to_degrees();
    let roll = right.y.atan2(up.y).to_degrees();
    (heading, pitch, roll)
}
