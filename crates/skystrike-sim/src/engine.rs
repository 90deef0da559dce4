//! Simulation engine — the core of the game.
//!
//! `FlightEngine` owns the hecs ECS world (NPCs and projectiles), the
//! player aircraft, the weapon subsystem, and the game state machine.
//! Completely headless, enabling deterministic testing.
//!
//! The sim clock only advances while `Flying`; every cooldown in the
//! engine and the weapon subsystem is measured on that clock, so pausing
//! never consumes fire intervals, warning suppressions, or spawn timers.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::commands::GameCommand;
use skystrike_core::constants::*;
use skystrike_core::enums::GamePhase;
use skystrike_core::events::{AudioEvent, KillEvent, UiEvent};
use skystrike_core::snapshot::GameSnapshot;
use skystrike_core::state::AircraftState;
use skystrike_core::types::{move_position, GeoPos, SimTime};

use skystrike_flight::{FlightDynamics, InputAggregator, RawInput};
use skystrike_terrain::{FlatTerrain, TerrainSampler};

use crate::systems;
use crate::systems::weapons::WeaponState;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct FlightEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    aircraft: AircraftState,
    dynamics: FlightDynamics,
    input: InputAggregator,
    weapons: WeaponState,
    terrain: Box<dyn TerrainSampler + Send>,
    rng: ChaCha8Rng,

    next_npc_id: u32,
    next_projectile_id: u32,
    command_queue: VecDeque<GameCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    ui_events: Vec<UiEvent>,
    kill_events: Vec<KillEvent>,

    score: i64,
    last_crash_check: f64,
    last_gpws_cue: f64,
    pull_up_warning: bool,
    last_npc_spawn: f64,
    prev_alt: f64,
}

impl FlightEngine {
    /// Create a new engine. Terrain defaults to sea level everywhere;
    /// install a real sampler with [`set_terrain`](Self::set_terrain).
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            aircraft: AircraftState::default(),
            dynamics: FlightDynamics::default(),
            input: InputAggregator::new(),
            weapons: WeaponState::new(),
            terrain: Box::new(FlatTerrain::default()),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_npc_id: 1,
            next_projectile_id: 1,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            ui_events: Vec::new(),
            kill_events: Vec::new(),
            score: 0,
            last_crash_check: f64::NEG_INFINITY,
            last_gpws_cue: f64::NEG_INFINITY,
            pull_up_warning: false,
            last_npc_spawn: f64::NEG_INFINITY,
            prev_alt: 0.0,
        }
    }

    /// Install the host's terrain sampler.
    pub fn set_terrain(&mut self, terrain: Box<dyn TerrainSampler + Send>) {
        self.terrain = terrain;
    }

    /// Queue a lifecycle command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: GameCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self, raw: &RawInput) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Flying {
            self.run_systems(raw);
            self.time.advance();
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        let ui_events = std::mem::take(&mut self.ui_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.aircraft,
            self.input.camera(),
            &self.weapons,
            self.score,
            self.pull_up_warning,
            audio_events,
            ui_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current score.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the weapon subsystem.
    pub fn weapons(&self) -> &WeaponState {
        &self.weapons
    }

    /// Spawn a non-maneuvering NPC flying straight and level at the speed
    /// envelope floor (for testing; wander and terrain reflexes disabled).
    #[cfg(test)]
    pub fn spawn_drone_npc_at(&mut self, lon: f64, lat: f64, alt: f64, heading: f64) -> u32 {
        let id = self.next_npc_id;
        self.next_npc_id += 1;
        let npc = skystrike_core::components::Npc {
            id,
            name: format!("TARGET {id}"),
            heading,
            pitch: 0.0,
            roll: 0.0,
            speed: NPC_SPEED_MIN,
            throttle: 0.0,
            boosting: false,
            target_heading: heading,
            target_pitch: 0.0,
            behavior_timer: f64::INFINITY,
            terrain_timer: f64::INFINITY,
            destroyed: false,
        };
        self.world.spawn((GeoPos::new(lon, lat, alt), npc));
        id
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single lifecycle command. Invalid for the current phase
    /// means a silent no-op.
    fn handle_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::StartGame => {
                if self.phase == GamePhase::Menu {
                    self.phase = GamePhase::PickSpawn;
                }
            }
            GameCommand::ConfirmSpawn {
                lon,
                lat,
                alt,
                heading,
            } => {
                if self.phase == GamePhase::PickSpawn {
                    self.reset_sortie(GeoPos::new(lon, lat, alt), heading);
                    self.phase = GamePhase::Transitioning;
                }
            }
            GameCommand::TransitionComplete => {
                if self.phase == GamePhase::Transitioning {
                    self.phase = GamePhase::Flying;
                }
            }
            GameCommand::Pause => {
                if self.phase == GamePhase::Flying {
                    self.phase = GamePhase::Paused;
                }
            }
            GameCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Flying;
                }
            }
            GameCommand::Respawn => {
                if matches!(self.phase, GamePhase::Crashed | GamePhase::Paused) {
                    self.phase = GamePhase::PickSpawn;
                }
            }
            GameCommand::Quit => {
                self.world.clear();
                self.score = 0;
                self.pull_up_warning = false;
                self.phase = GamePhase::Menu;
            }
        }
    }

    /// Reset everything for a fresh sortie and seed the first adversary.
    fn reset_sortie(&mut self, spawn: GeoPos, heading: f64) {
        self.world.clear();
        self.aircraft = AircraftState::spawned(spawn, heading);
        self.dynamics.reset(heading, 0.0, 0.0, SPAWN_SPEED);
        self.input.reset();
        self.weapons = WeaponState::new();
        self.time = SimTime::default();
        self.score = 0;
        self.prev_alt = spawn.alt;
        self.pull_up_warning = false;
        self.last_crash_check = f64::NEG_INFINITY;
        self.last_gpws_cue = f64::NEG_INFINITY;

        systems::npc::spawn_npc(
            &mut self.world,
            &mut self.rng,
            &mut self.next_npc_id,
            &self.aircraft.position,
        );
        self.last_npc_spawn = 0.0;
    }

    /// Run all systems in order.
    fn run_systems(&mut self, raw: &RawInput) {
        let control = self.input.sample(raw, DT);

        // 1. Flight dynamics + player movement.
        let sample = self.dynamics.advance(&control, DT);
        if sample.boosting && !self.aircraft.boosting {
            self.audio_events.push(AudioEvent::Boost);
        }
        self.aircraft.heading = sample.heading;
        self.aircraft.pitch = sample.pitch;
        self.aircraft.roll = sample.roll;
        self.aircraft.speed = sample.speed;
        self.aircraft.boosting = sample.boosting;
        self.aircraft.boost_remaining = sample.boost_remaining;
        self.aircraft.throttle = control.throttle;
        self.aircraft.position = move_position(
            &self.aircraft.position,
            sample.heading,
            sample.pitch,
            sample.speed * DT,
        );
        self.aircraft.vertical_speed = (self.aircraft.position.alt - self.prev_alt) / DT;
        self.prev_alt = self.aircraft.position.alt;

        // 2. Weapons: selection, heat, lock, launches, flare queue.
        systems::weapons::run(
            &mut self.world,
            &mut self.weapons,
            &control,
            &self.aircraft,
            &self.time,
            &mut self.rng,
            &mut self.next_projectile_id,
            &mut self.audio_events,
        );

        // 3. Projectiles, hitting NPC positions from the previous tick.
        systems::projectile::run(
            &mut self.world,
            DT,
            self.terrain.as_ref(),
            &mut self.rng,
            &mut self.kill_events,
            &mut self.ui_events,
            &mut self.audio_events,
        );

        // 4. NPC behavior, steering, movement, replenishment.
        systems::npc::run(
            &mut self.world,
            &mut self.rng,
            &self.aircraft.position,
            self.terrain.as_ref(),
            &self.time,
            &mut self.last_npc_spawn,
            &mut self.next_npc_id,
        );

        // 5. Kill routing: score, HUD feed, explosion cue.
        for kill in std::mem::take(&mut self.kill_events) {
            self.score += KILL_POINTS;
            self.audio_events.push(AudioEvent::Explosion { large: true });
            self.ui_events.push(UiEvent::Kill {
                npc_id: kill.npc_id,
                name: kill.name,
                points: KILL_POINTS,
            });
            self.ui_events.push(UiEvent::ScoreChanged { score: self.score });
        }

        // 6. Ground checks.
        self.check_gpws();
        self.check_crash();

        // 7. Despawn destroyed NPCs and fully-faded projectiles.
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Crash detection: throttled, suppressed during the spawn grace
    /// period, skipped while terrain has no data.
    fn check_crash(&mut self) {
        let now = self.time.elapsed_secs;
        if now < CRASH_IMMUNITY_SECS || now - self.last_crash_check < CRASH_CHECK_INTERVAL {
            return;
        }
        self.last_crash_check = now;

        let pos = self.aircraft.position;
        let Some(ground) = self.terrain.height_at(pos.lon, pos.lat) else {
            return;
        };
        if pos.alt <= ground + CRASH_CLEARANCE {
            self.phase = GamePhase::Crashed;
            self.pull_up_warning = false;
            self.audio_events.push(AudioEvent::Crash);
            self.ui_events.push(UiEvent::SpawnExplosion { pos, large: true });
        }
    }

    /// Ground-proximity warning: nose-down and either very low, or low
    /// with a high sink rate. The HUD flag tracks the condition every
    /// tick; the audio call is rate-limited on the sim clock.
    fn check_gpws(&mut self) {
        let pos = self.aircraft.position;
        let Some(ground) = self.terrain.height_at(pos.lon, pos.lat) else {
            self.pull_up_warning = false;
            return;
        };
        let agl = pos.alt - ground;

        let active = self.aircraft.pitch < GPWS_PITCH_MAX
            && (agl < GPWS_LOW_AGL
                || (self.aircraft.vertical_speed < GPWS_SINK_RATE && agl < GPWS_SINK_AGL));
        self.pull_up_warning = active;

        if active && self.time.elapsed_secs - self.last_gpws_cue >= GPWS_COOLDOWN {
            self.last_gpws_cue = self.time.elapsed_secs;
            self.audio_events.push(AudioEvent::PullUp);
        }
    }
}
