//! Projectile simulation: bullet ballistics, missile pursuit, flare
//! ballistics, terrain impacts, target hits, and smoke trails.
//!
//! Runs before the NPC update, so every hit test sees NPC positions as
//! they were at the end of the previous tick.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::{Npc, Projectile, ProjectileKind, SmokePuff};
use skystrike_core::constants::*;
use skystrike_core::events::{AudioEvent, KillEvent, UiEvent};
use skystrike_core::types::{approach_heading, move_position, wrap_heading, GeoPos};

use skystrike_terrain::TerrainSampler;

/// NPC state captured before the projectile pass.
struct TargetInfo {
    entity: hecs::Entity,
    id: u32,
    name: String,
    pos: GeoPos,
    heading: f64,
    pitch: f64,
    speed: f64,
}

/// Advance all projectiles by one tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    dt: f64,
    terrain: &dyn TerrainSampler,
    rng: &mut ChaCha8Rng,
    kills: &mut Vec<KillEvent>,
    ui: &mut Vec<UiEvent>,
    audio: &mut Vec<AudioEvent>,
) {
    let targets: Vec<TargetInfo> = world
        .query::<(&Npc, &GeoPos)>()
        .iter()
        .filter(|(_, (npc, _))| !npc.destroyed)
        .map(|(entity, (npc, pos))| TargetInfo {
            entity,
            id: npc.id,
            name: npc.name.clone(),
            pos: *pos,
            heading: npc.heading,
            pitch: npc.pitch,
            speed: npc.speed,
        })
        .collect();

    // Indexes into `targets` killed this tick; each NPC dies at most once.
    let mut killed: Vec<usize> = Vec::new();

    for (_entity, (proj, pos)) in world.query_mut::<(&mut Projectile, &mut GeoPos)>() {
        // Trails outlive their projectile; decay them unconditionally.
        for puff in &mut proj.trail {
            puff.life -= dt;
        }
        proj.trail.retain(|p| p.life > 0.0);

        if !proj.active {
            continue;
        }
        proj.age += dt;
        if proj.age >= proj.max_life {
            proj.active = false;
            continue;
        }

        match &mut proj.kind {
            ProjectileKind::Bullet => {
                let new_pos = move_position(pos, proj.heading, proj.pitch, proj.speed * dt);
                *pos = new_pos;

                if let Some(ground) = terrain.height_at(pos.lon, pos.lat) {
                    if pos.alt < ground {
                        let mut impact = *pos;
                        impact.alt = ground;
                        ui.push(UiEvent::SpawnSpark { pos: impact });
                        audio.push(AudioEvent::BulletGroundHit);
                        proj.active = false;
                        continue;
                    }
                }

                for (index, target) in targets.iter().enumerate() {
                    if killed.contains(&index) {
                        continue;
                    }
                    if pos.distance_sq(&target.pos) < BULLET_HIT_RADIUS_SQ {
                        killed.push(index);
                        record_kill(target, false, kills, ui);
                        proj.active = false;
                        break;
                    }
                }
            }
            ProjectileKind::Missile { target } => {
                // Turn-rate-limited pure pursuit toward the bound target;
                // straight-line flight once it is gone.
                let chased = target
                    .and_then(|id| targets.iter().position(|t| t.id == id))
                    .filter(|index| !killed.contains(index));
                if let Some(index) = chased {
                    let enu = pos.enu_to(&targets[index].pos);
                    let horizontal = (enu.x * enu.x + enu.y * enu.y).sqrt();
                    let desired_heading = wrap_heading(enu.x.atan2(enu.y).to_degrees());
                    let desired_pitch = enu.z.atan2(horizontal).to_degrees();

                    let step = MISSILE_TURN_RATE * dt;
                    proj.heading = approach_heading(proj.heading, desired_heading, step);
                    proj.pitch += (desired_pitch - proj.pitch).clamp(-step, step);
                }

                let distance = proj.speed * dt;
                *pos = move_position(pos, proj.heading, proj.pitch, distance);
                emit_puffs(proj, pos, distance, MISSILE_TRAIL_SPACING, MISSILE_PUFF_LIFE_SECS);

                if let Some(ground) = terrain.height_at(pos.lon, pos.lat) {
                    if pos.alt < ground {
                        let mut impact = *pos;
                        impact.alt = ground;
                        ui.push(UiEvent::SpawnExplosion {
                            pos: impact,
                            large: true,
                        });
                        audio.push(AudioEvent::Explosion { large: true });
                        proj.active = false;
                        continue;
                    }
                }

                if let Some(index) = chased {
                    if pos.distance_sq(&targets[index].pos) < MISSILE_HIT_RADIUS_SQ {
                        killed.push(index);
                        record_kill(&targets[index], true, kills, ui);
                        proj.active = false;
                    }
                }
            }
            ProjectileKind::Flare { vertical_velocity } => {
                *vertical_velocity -= FLARE_GRAVITY * dt;
                let distance = proj.speed * dt;
                let mut new_pos = move_position(pos, proj.heading, proj.pitch, distance);
                new_pos.alt += *vertical_velocity * dt;
                *pos = new_pos;
                proj.speed *= FLARE_DRAG;

                let life = rng.gen_range(FLARE_PUFF_LIFE_MIN..FLARE_PUFF_LIFE_MAX);
                emit_puffs(proj, pos, distance, FLARE_TRAIL_SPACING, life);
            }
        }
    }

    for index in killed {
        if let Ok(npc) = world.query_one_mut::<&mut Npc>(targets[index].entity) {
            npc.destroyed = true;
        }
    }
}

/// Queue the kill and its visual effects. The engine turns `KillEvent`s
/// into score and HUD feed entries.
fn record_kill(target: &TargetInfo, large: bool, kills: &mut Vec<KillEvent>, ui: &mut Vec<UiEvent>) {
    kills.push(KillEvent {
        npc_id: target.id,
        name: target.name.clone(),
    });
    ui.push(UiEvent::SpawnExplosion {
        pos: target.pos,
        large,
    });
    ui.push(UiEvent::SpawnWreckage {
        pos: target.pos,
        heading: target.heading,
        pitch: target.pitch,
        speed: target.speed,
    });
}

/// Drop trail puffs every `spacing` meters of travel.
fn emit_puffs(proj: &mut Projectile, pos: &GeoPos, distance: f64, spacing: f64, life: f64) {
    proj.dist_since_puff += distance;
    while proj.dist_since_puff >= spacing {
        proj.dist_since_puff -= spacing;
        proj.trail.push(SmokePuff {
            pos: *pos,
            life,
            max_life: life,
        });
    }
}
