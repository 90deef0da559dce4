//! Snapshot system: queries the ECS world and builds a complete
//! `GameSnapshot`. Read-only — it never modifies the world.

use hecs::World;

use skystrike_core::components::{Npc, Projectile};
use skystrike_core::enums::GamePhase;
use skystrike_core::events::{AudioEvent, UiEvent};
use skystrike_core::snapshot::*;
use skystrike_core::state::AircraftState;
use skystrike_core::types::{GeoPos, SimTime};

use super::weapons::WeaponState;

/// Build a complete snapshot of the current tick.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    aircraft: &AircraftState,
    camera: (f64, f64),
    weapons: &WeaponState,
    score: i64,
    pull_up_warning: bool,
    audio_events: Vec<AudioEvent>,
    ui_events: Vec<UiEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        phase,
        flight: build_flight(aircraft, camera, score),
        weapons: build_weapons(weapons),
        lock: LockView {
            status: weapons.lock,
            target: weapons.lock_target(),
        },
        npcs: build_npcs(world),
        projectiles: build_projectiles(world),
        pull_up_warning,
        audio_events,
        ui_events,
    }
}

fn build_flight(aircraft: &AircraftState, camera: (f64, f64), score: i64) -> FlightView {
    FlightView {
        position: aircraft.position,
        heading: aircraft.heading,
        pitch: aircraft.pitch,
        roll: aircraft.roll,
        speed: aircraft.speed,
        throttle: aircraft.throttle,
        boosting: aircraft.boosting,
        boost_remaining: aircraft.boost_remaining,
        vertical_speed: aircraft.vertical_speed,
        camera_yaw: camera.0,
        camera_pitch: camera.1,
        score,
    }
}

/// Selectable stations first, then the dispenser, so HUD slot order is
/// stable.
fn build_weapons(weapons: &WeaponState) -> Vec<WeaponView> {
    let mut views: Vec<WeaponView> = weapons
        .stations
        .iter()
        .enumerate()
        .map(|(index, station)| WeaponView {
            kind: station.kind,
            name: station.name.to_string(),
            ammo: station.ammo,
            max_ammo: station.max_ammo,
            selected: index == weapons.selected,
            heat: if index == 0 { weapons.gun_heat } else { 0.0 },
            overheated: index == 0 && weapons.overheated,
            empty_warning: station.empty_warning,
        })
        .collect();

    views.push(WeaponView {
        kind: weapons.flare.kind,
        name: weapons.flare.name.to_string(),
        ammo: weapons.flare.ammo,
        max_ammo: weapons.flare.max_ammo,
        selected: false,
        heat: 0.0,
        overheated: false,
        empty_warning: weapons.flare.empty_warning,
    });
    views
}

fn build_npcs(world: &World) -> Vec<NpcView> {
    let mut npcs: Vec<NpcView> = world
        .query::<(&Npc, &GeoPos)>()
        .iter()
        .filter(|(_, (npc, _))| !npc.destroyed)
        .map(|(_, (npc, pos))| NpcView {
            id: npc.id,
            name: npc.name.clone(),
            position: *pos,
            heading: npc.heading,
            pitch: npc.pitch,
            roll: npc.roll,
            speed: npc.speed,
            boosting: npc.boosting,
        })
        .collect();
    npcs.sort_by_key(|n| n.id);
    npcs
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &GeoPos)>()
        .iter()
        .map(|(_, (proj, pos))| ProjectileView {
            id: proj.id,
            kind: proj.kind.clone(),
            position: *pos,
            heading: proj.heading,
            pitch: proj.pitch,
            active: proj.active,
            life_fraction: proj.life_fraction(),
            trail: proj
                .trail
                .iter()
                .map(|puff| PuffView {
                    pos: puff.pos,
                    fade: puff.fade(),
                })
                .collect(),
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}
