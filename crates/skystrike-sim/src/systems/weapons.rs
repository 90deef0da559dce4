//! Weapon subsystem: station selection, the gun heat model, missile seeker
//! lock, launch gating, and the flare burst queue.

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::{Npc, Projectile, ProjectileKind};
use skystrike_core::constants::*;
use skystrike_core::enums::{LockStatus, WeaponKind};
use skystrike_core::events::AudioEvent;
use skystrike_core::state::AircraftState;
use skystrike_core::types::{forward_vector, move_position, wrap_heading, GeoPos, SimTime};

use skystrike_flight::ControlInput;

/// One weapon station.
#[derive(Debug, Clone)]
pub struct Station {
    pub kind: WeaponKind,
    pub name: &'static str,
    /// None = unlimited.
    pub ammo: Option<u32>,
    pub max_ammo: Option<u32>,
    pub fire_interval: f64,
    /// Sim time of the last accepted shot.
    pub last_fire: f64,
    /// Remaining HUD empty-flash time (seconds).
    pub empty_warning: f64,
}

impl Station {
    fn new(kind: WeaponKind, name: &'static str, ammo: Option<u32>, fire_interval: f64) -> Self {
        Self {
            kind,
            name,
            ammo,
            max_ammo: ammo,
            fire_interval,
            last_fire: f64::NEG_INFINITY,
            empty_warning: 0.0,
        }
    }

    fn ready(&self, now: f64) -> bool {
        now - self.last_fire >= self.fire_interval
    }

    fn is_empty(&self) -> bool {
        self.ammo == Some(0)
    }
}

/// All weapon-subsystem state. Owned by the engine, reset on each spawn.
#[derive(Debug, Clone)]
pub struct WeaponState {
    /// Selectable stations: gun, missile.
    pub stations: Vec<Station>,
    pub selected: usize,
    /// Countermeasures — outside the selection cycle.
    pub flare: Station,

    pub gun_heat: f64,
    pub overheated: bool,
    /// Loop-cue edge state for the cannon.
    pub gun_firing: bool,

    pub lock: LockStatus,
    /// Candidate being painted while Locking.
    pub locking_target: Option<u32>,
    /// Bound target while Locked.
    pub locked_target: Option<u32>,
    pub lock_timer: f64,

    /// Flares still owed by the current burst.
    pub flare_queue: u32,
    /// Seconds until the next flare of the burst.
    pub flare_timer: f64,

    /// Alternating wingtip rail for missile launches.
    pub launch_left: bool,

    /// Sim time of the last empty-ammo audio cue.
    pub last_empty_cue: f64,
}

impl WeaponState {
    pub fn new() -> Self {
        Self {
            stations: vec![
                Station::new(WeaponKind::Gun, "MAUSER BK-27", None, GUN_FIRE_INTERVAL),
                Station::new(
                    WeaponKind::Missile,
                    "IRIS-T",
                    Some(MISSILE_AMMO),
                    MISSILE_FIRE_INTERVAL,
                ),
            ],
            selected: 0,
            flare: Station::new(
                WeaponKind::FlareDispenser,
                "BOZ-101",
                Some(FLARE_AMMO),
                FLARE_FIRE_INTERVAL,
            ),
            gun_heat: 0.0,
            overheated: false,
            gun_firing: false,
            lock: LockStatus::None,
            locking_target: None,
            locked_target: None,
            lock_timer: 0.0,
            flare_queue: 0,
            flare_timer: 0.0,
            launch_left: false,
            last_empty_cue: f64::NEG_INFINITY,
        }
    }

    pub fn selected_station(&self) -> &Station {
        &self.stations[self.selected]
    }

    /// The lock target shown on the HUD (in-progress or bound).
    pub fn lock_target(&self) -> Option<u32> {
        match self.lock {
            LockStatus::None => None,
            LockStatus::Locking => self.locking_target,
            LockStatus::Locked => self.locked_target,
        }
    }
}

impl Default for WeaponState {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the weapon subsystem for one tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    state: &mut WeaponState,
    control: &ControlInput,
    aircraft: &AircraftState,
    time: &SimTime,
    rng: &mut ChaCha8Rng,
    next_projectile_id: &mut u32,
    audio: &mut Vec<AudioEvent>,
) {
    let now = time.elapsed_secs;
    let dt = time.dt();

    handle_selection(state, control, audio);
    cool_gun(state, dt);
    decay_empty_warnings(state, dt);
    update_lock(world, state, aircraft, dt, audio);
    handle_fire(world, state, control, aircraft, now, audio, next_projectile_id);
    handle_flare_trigger(state, control, now, audio);
    run_flare_queue(world, state, aircraft, rng, dt, audio, next_projectile_id);
}

/// Weapon switching: direct selection and cycle key. Out-of-range direct
/// selection is ignored.
fn handle_selection(state: &mut WeaponState, control: &ControlInput, audio: &mut Vec<AudioEvent>) {
    let mut new_selected = None;
    if let Some(index) = control.select_weapon {
        if index < state.stations.len() && index != state.selected {
            new_selected = Some(index);
        }
    }
    if control.next_weapon_pressed {
        new_selected = Some((state.selected + 1) % state.stations.len());
    }
    if let Some(index) = new_selected {
        state.selected = index;
        audio.push(AudioEvent::WeaponSwitch {
            name: state.stations[index].name.to_string(),
        });
    }
}

/// Barrel heat decay and the overheat-clear latch.
fn cool_gun(state: &mut WeaponState, dt: f64) {
    state.gun_heat = (state.gun_heat - GUN_HEAT_DECAY * dt).max(0.0);
    if state.overheated && state.gun_heat < GUN_OVERHEAT_CLEAR {
        state.overheated = false;
    }
}

fn decay_empty_warnings(state: &mut WeaponState, dt: f64) {
    for station in &mut state.stations {
        station.empty_warning = (station.empty_warning - dt).max(0.0);
    }
    state.flare.empty_warning = (state.flare.empty_warning - dt).max(0.0);
}

/// Seeker lock state machine. Runs only while the missile station is
/// selected; deselecting drops any lock in progress or held.
fn update_lock(
    world: &World,
    state: &mut WeaponState,
    aircraft: &AircraftState,
    dt: f64,
    audio: &mut Vec<AudioEvent>,
) {
    if state.selected_station().kind != WeaponKind::Missile {
        drop_lock(state, audio);
        return;
    }

    match state.lock {
        LockStatus::Locked => {
            // A held lock persists while the bound target stays alive,
            // in cone, and in range.
            let target = state.locked_target;
            let still_valid = target
                .map(|id| target_in_cone(world, aircraft, id))
                .unwrap_or(false);
            if !still_valid {
                state.lock = LockStatus::None;
                state.locked_target = None;
                state.lock_timer = 0.0;
                audio.push(AudioEvent::LockLost);
            }
        }
        LockStatus::None | LockStatus::Locking => {
            let candidate = best_candidate(world, aircraft);
            match candidate {
                Some(id) => {
                    if state.lock == LockStatus::None {
                        audio.push(AudioEvent::LockSearchStart);
                    }
                    if state.locking_target != Some(id) {
                        // New candidate: the accumulated time does not carry.
                        state.locking_target = Some(id);
                        state.lock_timer = 0.0;
                    }
                    state.lock = LockStatus::Locking;
                    state.lock_timer += dt;
                    if state.lock_timer >= LOCK_ACQUIRE_SECS {
                        state.lock = LockStatus::Locked;
                        state.locked_target = state.locking_target.take();
                        audio.push(AudioEvent::LockSearchStop);
                        audio.push(AudioEvent::LockAcquired);
                    }
                }
                None => {
                    if state.lock == LockStatus::Locking {
                        audio.push(AudioEvent::LockSearchStop);
                    }
                    state.lock = LockStatus::None;
                    state.locking_target = None;
                    state.lock_timer = 0.0;
                }
            }
        }
    }
}

/// Forced lock drop on deselection, with the matching cues.
fn drop_lock(state: &mut WeaponState, audio: &mut Vec<AudioEvent>) {
    match state.lock {
        LockStatus::Locking => audio.push(AudioEvent::LockSearchStop),
        LockStatus::Locked => audio.push(AudioEvent::LockLost),
        LockStatus::None => {}
    }
    state.lock = LockStatus::None;
    state.locking_target = None;
    state.locked_target = None;
    state.lock_timer = 0.0;
}

/// Best in-cone NPC by seeker-cone cosine. Strictly-greater replacement:
/// ties keep the first-scanned aircraft.
fn best_candidate(world: &World, aircraft: &AircraftState) -> Option<u32> {
    let fwd = forward_vector(aircraft.heading, aircraft.pitch);
    let mut best: Option<(u32, f64)> = None;

    for (_entity, (npc, pos)) in world
        .query::<(&Npc, &GeoPos)>()
        .iter()
    {
        if npc.destroyed {
            continue;
        }
        if let Some(cos) = cone_cosine(&fwd, &aircraft.position, pos) {
            if cos > LOCK_CONE_COS && best.map(|(_, b)| cos > b).unwrap_or(true) {
                best = Some((npc.id, cos));
            }
        }
    }
    best.map(|(id, _)| id)
}

/// Whether a specific NPC id is alive and inside the seeker cone/range.
fn target_in_cone(world: &World, aircraft: &AircraftState, target_id: u32) -> bool {
    let fwd = forward_vector(aircraft.heading, aircraft.pitch);
    for (_entity, (npc, pos)) in world
        .query::<(&Npc, &GeoPos)>()
        .iter()
    {
        if npc.id != target_id || npc.destroyed {
            continue;
        }
        return cone_cosine(&fwd, &aircraft.position, pos)
            .map(|cos| cos > LOCK_CONE_COS)
            .unwrap_or(false);
    }
    false
}

/// Cosine between the aircraft boresight and the line to a target, or
/// None when the target is out of seeker range.
fn cone_cosine(fwd: &DVec3, from: &GeoPos, to: &GeoPos) -> Option<f64> {
    let enu = from.enu_to(to);
    let dist = enu.length();
    if dist <= f64::EPSILON || dist > LOCK_MAX_RANGE {
        return None;
    }
    Some(fwd.dot(enu / dist))
}

/// Fire-key handling for the selected station.
#[allow(clippy::too_many_arguments)]
fn handle_fire(
    world: &mut World,
    state: &mut WeaponState,
    control: &ControlInput,
    aircraft: &AircraftState,
    now: f64,
    audio: &mut Vec<AudioEvent>,
    next_projectile_id: &mut u32,
) {
    let kind = state.selected_station().kind;

    // Cannon loop cue edges.
    let firing_now = kind == WeaponKind::Gun && control.fire_held && !state.overheated;
    if firing_now != state.gun_firing {
        audio.push(if firing_now {
            AudioEvent::GunFireStart
        } else {
            AudioEvent::GunFireStop
        });
        state.gun_firing = firing_now;
    }

    if !control.fire_held {
        return;
    }

    match kind {
        WeaponKind::Gun => fire_gun(world, state, aircraft, now, audio, next_projectile_id),
        WeaponKind::Missile => fire_missile(world, state, aircraft, now, audio, next_projectile_id),
        WeaponKind::FlareDispenser => {}
    }
}

fn fire_gun(
    world: &mut World,
    state: &mut WeaponState,
    aircraft: &AircraftState,
    now: f64,
    audio: &mut Vec<AudioEvent>,
    next_projectile_id: &mut u32,
) {
    if state.overheated || !state.stations[0].ready(now) {
        return;
    }
    state.stations[0].last_fire = now;

    state.gun_heat += GUN_HEAT_PER_SHOT;
    if state.gun_heat >= 1.0 && !state.overheated {
        state.overheated = true;
        audio.push(AudioEvent::GunOverheat);
    }

    let muzzle = move_position(
        &aircraft.position,
        aircraft.heading,
        aircraft.pitch,
        GUN_MUZZLE_OFFSET,
    );
    spawn_projectile(
        world,
        next_projectile_id,
        muzzle,
        Projectile {
            id: 0,
            kind: ProjectileKind::Bullet,
            heading: aircraft.heading,
            pitch: aircraft.pitch,
            speed: aircraft.speed + BULLET_SPEED_BONUS,
            age: 0.0,
            max_life: BULLET_LIFE_SECS,
            active: true,
            trail: Vec::new(),
            dist_since_puff: 0.0,
        },
    );
}

fn fire_missile(
    world: &mut World,
    state: &mut WeaponState,
    aircraft: &AircraftState,
    now: f64,
    audio: &mut Vec<AudioEvent>,
    next_projectile_id: &mut u32,
) {
    if state.stations[1].is_empty() {
        empty_rebuff(&mut state.stations[1], &mut state.last_empty_cue, now, audio);
        return;
    }
    if state.lock != LockStatus::Locked || !state.stations[1].ready(now) {
        return;
    }

    state.stations[1].last_fire = now;
    if let Some(ammo) = state.stations[1].ammo.as_mut() {
        *ammo -= 1;
    }

    // Alternate wingtip rails.
    state.launch_left = !state.launch_left;
    let side = if state.launch_left { -90.0 } else { 90.0 };
    let rail = move_position(
        &aircraft.position,
        wrap_heading(aircraft.heading + side),
        0.0,
        MISSILE_LAUNCH_OFFSET,
    );

    spawn_projectile(
        world,
        next_projectile_id,
        rail,
        Projectile {
            id: 0,
            kind: ProjectileKind::Missile {
                target: state.locked_target,
            },
            heading: aircraft.heading,
            pitch: aircraft.pitch,
            speed: aircraft.speed + MISSILE_SPEED_BONUS,
            age: 0.0,
            max_life: MISSILE_LIFE_SECS,
            active: true,
            trail: Vec::new(),
            dist_since_puff: 0.0,
        },
    );
    audio.push(AudioEvent::MissileAway);
}

/// Flare-key handling: arms a burst from the dispenser pool.
fn handle_flare_trigger(
    state: &mut WeaponState,
    control: &ControlInput,
    now: f64,
    audio: &mut Vec<AudioEvent>,
) {
    if !control.flare_pressed {
        return;
    }
    if state.flare.is_empty() {
        empty_rebuff(&mut state.flare, &mut state.last_empty_cue, now, audio);
        return;
    }
    if !state.flare.ready(now) {
        return;
    }

    state.flare.last_fire = now;
    if let Some(ammo) = state.flare.ammo.as_mut() {
        *ammo -= 1;
    }
    state.flare_queue = FLARE_BURST_COUNT;
    // First flare releases on this same tick.
    state.flare_timer = 0.0;
}

/// Pace the armed burst: one flare every FLARE_BURST_SPACING seconds.
#[allow(clippy::too_many_arguments)]
fn run_flare_queue(
    world: &mut World,
    state: &mut WeaponState,
    aircraft: &AircraftState,
    rng: &mut ChaCha8Rng,
    dt: f64,
    audio: &mut Vec<AudioEvent>,
    next_projectile_id: &mut u32,
) {
    if state.flare_queue == 0 {
        return;
    }
    state.flare_timer -= dt;
    if state.flare_timer > 0.0 {
        return;
    }
    state.flare_queue -= 1;
    state.flare_timer = FLARE_BURST_SPACING;

    let spread = rng.gen_range(-FLARE_SPREAD_DEG..FLARE_SPREAD_DEG);
    let heading = wrap_heading(aircraft.heading + 180.0 + spread);
    let pitch = FLARE_PITCH_BASE - rng.gen::<f64>() * FLARE_PITCH_SPREAD;

    spawn_projectile(
        world,
        next_projectile_id,
        aircraft.position,
        Projectile {
            id: 0,
            kind: ProjectileKind::Flare {
                vertical_velocity: 0.0,
            },
            heading,
            pitch,
            speed: aircraft.speed * FLARE_SPEED_FACTOR,
            age: 0.0,
            max_life: FLARE_LIFE_SECS,
            active: true,
            trail: Vec::new(),
            dist_since_puff: 0.0,
        },
    );
    audio.push(AudioEvent::FlareDispense);
}

/// Empty-station rebuff: HUD flash plus a rate-limited audio cue.
fn empty_rebuff(
    station: &mut Station,
    last_empty_cue: &mut f64,
    now: f64,
    audio: &mut Vec<AudioEvent>,
) {
    station.empty_warning = EMPTY_HUD_WARNING_SECS;
    if now - *last_empty_cue >= EMPTY_WARNING_INTERVAL {
        *last_empty_cue = now;
        audio.push(AudioEvent::AmmoEmpty { kind: station.kind });
    }
}

fn spawn_projectile(
    world: &mut World,
    next_projectile_id: &mut u32,
    pos: GeoPos,
    mut projectile: Projectile,
) {
    projectile.id = *next_projectile_id;
    *next_projectile_id += 1;
    world.spawn((pos, projectile));
}
