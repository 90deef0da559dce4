//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Geographics ---

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters per degree of latitude (circumference / 360).
pub const METERS_PER_DEGREE: f64 = std::f64::consts::TAU * EARTH_RADIUS_M / 360.0;

// --- Flight dynamics ---

/// Stall floor — speed never drops below this (m/s).
pub const FLIGHT_MIN_SPEED: f64 = 80.0;

/// Maximum level speed at full throttle, without boost (m/s).
pub const FLIGHT_MAX_SPEED: f64 = 600.0;

/// Speed assigned on spawn (m/s).
pub const SPAWN_SPEED: f64 = 100.0;

/// Throttle setting assigned on spawn.
pub const SPAWN_THROTTLE: f64 = 0.5;

/// First-order speed lag rate toward the throttle target (1/s).
pub const SPEED_LAG_RATE: f64 = 2.2;

/// Speed lag rate while boosting (1/s) — the afterburner bites harder.
pub const SPEED_LAG_RATE_BOOST: f64 = 4.5;

/// Afterburner burn duration per activation (seconds).
pub const BOOST_DURATION_SECS: f64 = 3.0;

/// Boost speed target as a multiple of max speed.
pub const BOOST_SPEED_FACTOR: f64 = 1.6;

/// Full-deflection pitch rate (rad/s).
pub const PITCH_RATE: f64 = 1.4;

/// Full-deflection roll rate (rad/s).
pub const ROLL_RATE: f64 = 3.0;

/// Full-deflection yaw rate (rad/s).
pub const YAW_RATE: f64 = 0.6;

// --- Input aggregation ---

/// Per-tick lerp factor for control axis smoothing.
pub const AXIS_SMOOTHING: f64 = 0.1;

/// Throttle change rate while a throttle key is held (fraction/s).
pub const THROTTLE_RATE: f64 = 0.5;

/// Camera orbit pitch clamp (degrees above/below horizon).
pub const CAMERA_PITCH_LIMIT: f64 = 85.0;

/// Mouse-delta to camera-degrees sensitivity.
pub const CAMERA_SENSITIVITY: f64 = 0.2;

// --- Gun ---

/// Minimum interval between gun rounds (seconds) — 1500 rpm class.
pub const GUN_FIRE_INTERVAL: f64 = 0.04;

/// Barrel heat added per round (0..1 scale).
pub const GUN_HEAT_PER_SHOT: f64 = 0.025;

/// Barrel heat decay rate (1/s).
pub const GUN_HEAT_DECAY: f64 = 0.2;

/// Heat level below which an overheated gun becomes usable again.
pub const GUN_OVERHEAT_CLEAR: f64 = 0.3;

/// Muzzle offset ahead of the aircraft for bullet spawns (meters).
pub const GUN_MUZZLE_OFFSET: f64 = 10.0;

// --- Missile station ---

/// Missiles carried per sortie.
pub const MISSILE_AMMO: u32 = 4;

/// Minimum interval between missile launches (seconds).
pub const MISSILE_FIRE_INTERVAL: f64 = 1.0;

/// Lateral wingtip offset for alternating launch rails (meters).
pub const MISSILE_LAUNCH_OFFSET: f64 = 6.0;

/// Cosine of the seeker cone half-angle (~10°).
pub const LOCK_CONE_COS: f64 = 0.985;

/// Maximum seeker lock range (meters).
pub const LOCK_MAX_RANGE: f64 = 10_000.0;

/// Continuous in-cone time required to transition Locking -> Locked (seconds).
pub const LOCK_ACQUIRE_SECS: f64 = 1.5;

// --- Flare dispenser ---

/// Flare bursts carried per sortie.
pub const FLARE_AMMO: u32 = 40;

/// Minimum interval between flare burst triggers (seconds).
pub const FLARE_FIRE_INTERVAL: f64 = 1.0;

/// Flares per burst.
pub const FLARE_BURST_COUNT: u32 = 6;

/// Spacing between flares within a burst (seconds). The first flare
/// of a burst releases immediately.
pub const FLARE_BURST_SPACING: f64 = 0.12;

// --- Ammo warnings ---

/// Minimum interval between empty-ammo audio cues (seconds, sim clock).
pub const EMPTY_WARNING_INTERVAL: f64 = 2.0;

/// Duration the HUD empty-ammo flash stays armed (seconds).
pub const EMPTY_HUD_WARNING_SECS: f64 = 1.0;

// --- Bullets ---

/// Bullet muzzle velocity added to carrier speed (m/s).
pub const BULLET_SPEED_BONUS: f64 = 1500.0;

/// Bullet lifetime (seconds).
pub const BULLET_LIFE_SECS: f64 = 3.0;

/// Squared bullet hit radius (m²) — 20 m.
pub const BULLET_HIT_RADIUS_SQ: f64 = 400.0;

// --- Missiles (in flight) ---

/// Missile motor velocity added to carrier speed (m/s).
pub const MISSILE_SPEED_BONUS: f64 = 800.0;

/// Missile lifetime (seconds).
pub const MISSILE_LIFE_SECS: f64 = 10.0;

/// Squared missile proximity-kill radius (m²) — 100 m.
pub const MISSILE_HIT_RADIUS_SQ: f64 = 10_000.0;

/// Missile pursuit turn rate (deg/s), applied to heading and pitch.
pub const MISSILE_TURN_RATE: f64 = 90.0;

/// Meters of travel between missile smoke puffs.
pub const MISSILE_TRAIL_SPACING: f64 = 20.0;

/// Missile smoke puff lifetime (seconds).
pub const MISSILE_PUFF_LIFE_SECS: f64 = 4.0;

// --- Flares (in flight) ---

/// Flare ejection speed as a fraction of carrier speed.
pub const FLARE_SPEED_FACTOR: f64 = 0.5;

/// Flare heading spread around carrier-heading + 180° (degrees, ±).
pub const FLARE_SPREAD_DEG: f64 = 20.0;

/// Flare ejection pitch base (degrees, below horizon).
pub const FLARE_PITCH_BASE: f64 = -15.0;

/// Additional random downward pitch (degrees, 0..this).
pub const FLARE_PITCH_SPREAD: f64 = 20.0;

/// Gravity applied to the flare's vertical-velocity integrator (m/s²).
pub const FLARE_GRAVITY: f64 = 5.0;

/// Per-tick multiplicative speed decay.
pub const FLARE_DRAG: f64 = 0.98;

/// Flare burn time (seconds).
pub const FLARE_LIFE_SECS: f64 = 4.0;

/// Meters of travel between flare smoke puffs.
pub const FLARE_TRAIL_SPACING: f64 = 3.0;

/// Flare puff lifetime range (seconds).
pub const FLARE_PUFF_LIFE_MIN: f64 = 2.0;
pub const FLARE_PUFF_LIFE_MAX: f64 = 3.5;

// --- NPC aircraft ---

/// Population floor — below this the controller replenishes.
pub const NPC_MIN_COUNT: usize = 3;

/// Minimum sim-time between replenishment spawns (seconds).
pub const NPC_RESPAWN_INTERVAL: f64 = 5.0;

/// Spawn range band around the reference position (meters).
pub const NPC_SPAWN_RANGE_MIN: f64 = 5_000.0;
pub const NPC_SPAWN_RANGE_MAX: f64 = 20_000.0;

/// Spawn altitude jitter around the reference altitude (meters).
pub const NPC_SPAWN_ALT_JITTER: f64 = 500.0;

/// Spawn altitude floor (meters).
pub const NPC_SPAWN_ALT_MIN: f64 = 1_500.0;

/// NPC speed envelope (m/s).
pub const NPC_SPEED_MIN: f64 = 250.0;
pub const NPC_SPEED_MAX: f64 = 350.0;

/// NPC speed target multiplier while boosting.
pub const NPC_BOOST_FACTOR: f64 = 1.4;

/// NPC heading convergence rate (deg/s).
pub const NPC_TURN_RATE: f64 = 30.0;

/// NPC heading convergence rate while boosting (deg/s).
pub const NPC_TURN_RATE_BOOST: f64 = 90.0;

/// NPC pitch exponential smoothing rate (1/s).
pub const NPC_PITCH_SMOOTHING: f64 = 0.6;

/// First behavior timer roll after spawn (seconds).
pub const NPC_BEHAVIOR_FIRST_MIN: f64 = 5.0;
pub const NPC_BEHAVIOR_FIRST_MAX: f64 = 15.0;

/// Behavior timer re-roll range (seconds).
pub const NPC_BEHAVIOR_MIN: f64 = 8.0;
pub const NPC_BEHAVIOR_MAX: f64 = 23.0;

/// Wander band around the current heading on re-roll (degrees, ±).
pub const NPC_HEADING_WANDER: f64 = 60.0;

/// Wander band for target pitch on re-roll (degrees, ±).
pub const NPC_PITCH_WANDER: f64 = 12.5;

/// Probability of boosting on a behavior re-roll.
pub const NPC_BOOST_CHANCE: f64 = 0.3;

/// NPC throttle band on re-roll.
pub const NPC_THROTTLE_MIN: f64 = 0.6;
pub const NPC_THROTTLE_MAX: f64 = 1.0;

/// Interval between NPC terrain-avoidance checks (seconds).
pub const NPC_TERRAIN_CHECK_INTERVAL: f64 = 0.5;

/// AGL below which an NPC forces a climb (meters), and the forced pitch.
pub const NPC_TERRAIN_PANIC_AGL: f64 = 500.0;
pub const NPC_TERRAIN_PANIC_PITCH: f64 = 25.0;

/// AGL below which an NPC pitches to the emergency climb (meters / degrees).
pub const NPC_TERRAIN_EMERGENCY_AGL: f64 = 100.0;
pub const NPC_TERRAIN_EMERGENCY_PITCH: f64 = 45.0;

/// Bank-angle steering: heading-error deadband (degrees).
pub const NPC_ROLL_DEADBAND: f64 = 0.5;

/// Bank-angle steering: error magnitude at which bank saturates (degrees).
pub const NPC_ROLL_REF_ERROR: f64 = 45.0;

/// Maximum bank angle (degrees).
pub const NPC_ROLL_MAX: f64 = 90.0;

/// Bank angle lerp rate (1/s).
pub const NPC_ROLL_RATE: f64 = 3.0;

/// Callsign pool for NPC names; a 100-999 number is appended.
pub const NPC_CALLSIGNS: [&str; 12] = [
    "PHOENIX", "MARVEL", "VIPER", "GHOST", "RAVEN", "EAGLE", "FALCON", "BLADE", "STRIKER",
    "STORM", "KNIGHT", "TITAN",
];

// --- Game state machine ---

/// Altitude offset the player spawns at above terrain (meters).
pub const SPAWN_ALTITUDE_AGL: f64 = 1_500.0;

/// Minimum interval between crash-detection evaluations (seconds).
pub const CRASH_CHECK_INTERVAL: f64 = 0.1;

/// Crash detection is suppressed for this long after entering flight (seconds).
pub const CRASH_IMMUNITY_SECS: f64 = 3.0;

/// Terrain clearance below which the aircraft is considered crashed (meters).
pub const CRASH_CLEARANCE: f64 = 5.0;

/// Minimum interval between pull-up audio cues (seconds, sim clock).
pub const GPWS_COOLDOWN: f64 = 1.8;

/// Pull-up warning requires pitch below this (degrees).
pub const GPWS_PITCH_MAX: f64 = -1.0;

/// Pull-up warning: unconditional low-AGL threshold (meters).
pub const GPWS_LOW_AGL: f64 = 150.0;

/// Pull-up warning: sink-rate AGL threshold (meters) and rate (m/s).
pub const GPWS_SINK_AGL: f64 = 450.0;
pub const GPWS_SINK_RATE: f64 = -20.0;

/// Points awarded per NPC kill.
pub const KILL_POINTS: i64 = 1_000;
