//! Fundamental geographic and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{EARTH_RADIUS_M, METERS_PER_DEGREE};

/// Position on the spherical earth.
/// Longitude/latitude in degrees, altitude in meters above sea level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPos {
    pub lon: f64,
    pub lat: f64,
    pub alt: f64,
}

/// Simulation time tracking. Advances only while the aircraft is flying,
/// so every cooldown measured against it is immune to paused wall time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each flying tick).
    pub tick: u64,
    /// Elapsed flight time in seconds.
    pub elapsed_secs: f64,
}

impl GeoPos {
    pub fn new(lon: f64, lat: f64, alt: f64) -> Self {
        Self { lon, lat, alt }
    }

    /// East/north/up offset in meters from `self` to `other`, on a local
    /// tangent plane anchored at `self` (equirectangular approximation).
    pub fn enu_to(&self, other: &GeoPos) -> DVec3 {
        let east = (other.lon - self.lon) * METERS_PER_DEGREE * self.lat.to_radians().cos();
        let north = (other.lat - self.lat) * METERS_PER_DEGREE;
        let up = other.alt - self.alt;
        DVec3::new(east, north, up)
    }

    /// Squared straight-line distance in meters² on the local tangent plane.
    pub fn distance_sq(&self, other: &GeoPos) -> f64 {
        self.enu_to(other).length_squared()
    }

    /// Straight-line distance in meters on the local tangent plane.
    pub fn distance_to(&self, other: &GeoPos) -> f64 {
        self.enu_to(other).length()
    }

    /// Bearing from `self` to `other` in degrees (0 = North, clockwise).
    pub fn bearing_to(&self, other: &GeoPos) -> f64 {
        let enu = self.enu_to(other);
        wrap_heading(enu.x.atan2(enu.y).to_degrees())
    }
}

/// Advance a position along a heading/pitch by `distance` meters.
///
/// Horizontal travel is split into lat/lon deltas with the longitude step
/// scaled by cos(lat); vertical travel goes straight into altitude. Breaks
/// down at the poles, which the simulation never reaches.
pub fn move_position(pos: &GeoPos, heading_deg: f64, pitch_deg: f64, distance: f64) -> GeoPos {
    let heading = heading_deg.to_radians();
    let pitch = pitch_deg.to_radians();

    let horizontal = distance * pitch.cos();
    let vertical = distance * pitch.sin();

    let d_lat = horizontal * heading.cos() / METERS_PER_DEGREE;
    let d_lon = horizontal * heading.sin() / (METERS_PER_DEGREE * pos.lat.to_radians().cos());

    GeoPos {
        lon: pos.lon + d_lon,
        lat: pos.lat + d_lat,
        alt: pos.alt + vertical,
    }
}

/// Unit forward vector in the local east/north/up frame for a heading/pitch.
pub fn forward_vector(heading_deg: f64, pitch_deg: f64) -> DVec3 {
    let heading = heading_deg.to_radians();
    let pitch = pitch_deg.to_radians();
    DVec3::new(
        heading.sin() * pitch.cos(),
        heading.cos() * pitch.cos(),
        pitch.sin(),
    )
}

/// Normalize a heading to [0, 360).
pub fn wrap_heading(heading_deg: f64) -> f64 {
    heading_deg.rem_euclid(360.0)
}

/// Signed shortest rotation from `from` to `to`, in (-180, 180].
pub fn shortest_angle(from_deg: f64, to_deg: f64) -> f64 {
    let diff = (to_deg - from_deg).rem_euclid(360.0);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// Step a heading toward a target by at most `max_step` degrees along the
/// shortest direction. Returns the new (wrapped) heading.
pub fn approach_heading(current_deg: f64, target_deg: f64, max_step: f64) -> f64 {
    let diff = shortest_angle(current_deg, target_deg);
    let step = diff.clamp(-max_step, max_step);
    wrap_heading(current_deg + step)
}

/// Great-circle distance in meters (haversine). Used for ranges too long
/// for the tangent-plane approximation.
pub fn great_circle_distance(a: &GeoPos, b: &GeoPos) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
