//! Raw-input aggregation.
//!
//! The host samples its keyboard/mouse state into a `RawInput` every tick;
//! the aggregator smooths the digital key pairs into analog axes, ramps the
//! throttle, accumulates the camera orbit, and converts held buttons into
//! one-tick edge flags by remembering the previous tick's state.

use serde::{Deserialize, Serialize};

use skystrike_core::constants::*;

/// Host input state for one tick. All fields are level-triggered; edge
/// detection happens in the aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub throttle_up: bool,
    pub throttle_down: bool,
    pub boost: bool,
    pub fire: bool,
    pub fire_flare: bool,
    pub next_weapon: bool,
    /// Direct station selection (number row). Out-of-range is ignored.
    pub select_weapon: Option<usize>,
    /// Mouse drag deltas for the orbit camera.
    pub mouse_dx: f64,
    pub mouse_dy: f64,
}

/// Aggregated controls for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlInput {
    /// Absolute throttle, 0..1.
    pub throttle: f64,
    /// Smoothed axes in [-1, 1]. Positive pitch = nose up, positive roll =
    /// left bank, positive yaw = nose right.
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
    /// True only on the tick the boost key went down.
    pub boost_pressed: bool,
    /// Held, not edged — the gun autofires and the missile rate-limits.
    pub fire_held: bool,
    /// True only on the tick the flare key went down.
    pub flare_pressed: bool,
    /// True only on the tick the cycle-weapon key went down.
    pub next_weapon_pressed: bool,
    pub select_weapon: Option<usize>,
    /// Orbit camera angles (degrees), accumulated across ticks.
    pub camera_yaw: f64,
    pub camera_pitch: f64,
}

/// Converts `RawInput` streams into `ControlInput`s.
#[derive(Debug, Clone, Default)]
pub struct InputAggregator {
    throttle: f64,
    pitch_axis: f64,
    roll_axis: f64,
    yaw_axis: f64,
    camera_yaw: f64,
    camera_pitch: f64,
    prev_boost: bool,
    prev_flare: bool,
    prev_next_weapon: bool,
}

impl InputAggregator {
    pub fn new() -> Self {
        Self {
            throttle: SPAWN_THROTTLE,
            ..Default::default()
        }
    }

    /// Reset axes and throttle for a fresh spawn. Key memory is cleared so
    /// a button held across the respawn doesn't fire an edge.
    pub fn reset(&mut self) {
        *self = Self {
            throttle: SPAWN_THROTTLE,
            prev_boost: true,
            prev_flare: true,
            prev_next_weapon: true,
            ..Default::default()
        };
    }

    /// Fold one tick of raw input into aggregated controls.
    pub fn sample(&mut self, raw: &RawInput, dt: f64) -> ControlInput {
        let pitch_target = axis_target(raw.pitch_up, raw.pitch_down);
        let roll_target = axis_target(raw.roll_left, raw.roll_right);
        let yaw_target = axis_target(raw.yaw_right, raw.yaw_left);

        self.pitch_axis += (pitch_target - self.pitch_axis) * AXIS_SMOOTHING;
        self.roll_axis += (roll_target - self.roll_axis) * AXIS_SMOOTHING;
        self.yaw_axis += (yaw_target - self.yaw_axis) * AXIS_SMOOTHING;

        let throttle_dir = axis_target(raw.throttle_up, raw.throttle_down);
        self.throttle = (self.throttle + throttle_dir * THROTTLE_RATE * dt).clamp(0.0, 1.0);

        self.camera_yaw += raw.mouse_dx * CAMERA_SENSITIVITY;
        self.camera_pitch = (self.camera_pitch - raw.mouse_dy * CAMERA_SENSITIVITY)
            .clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT);

        let control = ControlInput {
            throttle: self.throttle,
            pitch: self.pitch_axis,
            roll: self.roll_axis,
            yaw: self.yaw_axis,
            boost_pressed: raw.boost && !self.prev_boost,
            fire_held: raw.fire,
            flare_pressed: raw.fire_flare && !self.prev_flare,
            next_weapon_pressed: raw.next_weapon && !self.prev_next_weapon,
            select_weapon: raw.select_weapon,
            camera_yaw: self.camera_yaw,
            camera_pitch: self.camera_pitch,
        };

        self.prev_boost = raw.boost;
        self.prev_flare = raw.fire_flare;
        self.prev_next_weapon = raw.next_weapon;

        control
    }

    /// Current throttle setting.
    pub fn throttle(&self) -> f64 {
        self.throttle
    }

    /// Current orbit camera angles (degrees).
    pub fn camera(&self) -> (f64, f64) {
        (self.camera_yaw, self.camera_pitch)
    }
}

/// +1 / -1 / 0 from an opposing key pair.
fn axis_target(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}
