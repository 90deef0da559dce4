//! NPC controller: seeded spawning, timer-driven behavior re-rolls,
//! terrain avoidance, bank-into-the-turn steering, and population
//! replenishment.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::Npc;
use skystrike_core::constants::*;
use skystrike_core::types::{
    approach_heading, move_position, shortest_angle, wrap_heading, GeoPos, SimTime,
};

use skystrike_terrain::TerrainSampler;

/// Advance all NPCs by one tick and keep the population topped up.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player_pos: &GeoPos,
    terrain: &dyn TerrainSampler,
    time: &SimTime,
    last_spawn: &mut f64,
    next_npc_id: &mut u32,
) {
    let dt = time.dt();

    for (_entity, (npc, pos)) in world.query_mut::<(&mut Npc, &mut GeoPos)>() {
        if npc.destroyed {
            continue;
        }

        // Behavior timer: new wander targets on expiry.
        npc.behavior_timer -= dt;
        if npc.behavior_timer <= 0.0 {
            npc.behavior_timer = rng.gen_range(NPC_BEHAVIOR_MIN..NPC_BEHAVIOR_MAX);
            npc.target_heading =
                wrap_heading(npc.heading + rng.gen_range(-NPC_HEADING_WANDER..NPC_HEADING_WANDER));
            npc.target_pitch = rng.gen_range(-NPC_PITCH_WANDER..NPC_PITCH_WANDER);
            npc.boosting = rng.gen_bool(NPC_BOOST_CHANCE);
            npc.throttle = rng.gen_range(NPC_THROTTLE_MIN..NPC_THROTTLE_MAX);
        }

        // Terrain reflex, throttled to twice a second. Overrides the
        // wander pitch with a forced climb when the ground closes in.
        npc.terrain_timer -= dt;
        if npc.terrain_timer <= 0.0 {
            npc.terrain_timer = NPC_TERRAIN_CHECK_INTERVAL;
            if let Some(ground) = terrain.height_at(pos.lon, pos.lat) {
                let agl = pos.alt - ground;
                if agl < NPC_TERRAIN_EMERGENCY_AGL {
                    npc.target_pitch = NPC_TERRAIN_EMERGENCY_PITCH;
                    npc.throttle = 1.0;
                    npc.boosting = true;
                } else if agl < NPC_TERRAIN_PANIC_AGL {
                    npc.target_pitch = npc.target_pitch.max(NPC_TERRAIN_PANIC_PITCH);
                    npc.throttle = 1.0;
                    npc.boosting = true;
                }
            }
        }

        // Heading converges at a fixed rate, faster under boost.
        let turn_rate = if npc.boosting {
            NPC_TURN_RATE_BOOST
        } else {
            NPC_TURN_RATE
        };
        npc.heading = approach_heading(npc.heading, npc.target_heading, turn_rate * dt);

        // Pitch is exponentially smoothed toward its target.
        npc.pitch += (npc.target_pitch - npc.pitch) * (NPC_PITCH_SMOOTHING * dt).min(1.0);

        // Bank into the turn: roll proportional to heading error, lerped
        // and clamped, with a deadband so level flight stays level.
        let error = shortest_angle(npc.heading, npc.target_heading);
        let desired_roll = if error.abs() > NPC_ROLL_DEADBAND {
            let intensity = (error.abs() / NPC_ROLL_REF_ERROR).min(1.0);
            -error.signum() * NPC_ROLL_MAX * intensity
        } else {
            0.0
        };
        npc.roll += (desired_roll - npc.roll) * (NPC_ROLL_RATE * dt).min(1.0);
        npc.roll = npc.roll.clamp(-NPC_ROLL_MAX, NPC_ROLL_MAX);

        // First-order speed lag, same shape as the player model.
        let mut target_speed = NPC_SPEED_MIN + npc.throttle * (NPC_SPEED_MAX - NPC_SPEED_MIN);
        let rate = if npc.boosting {
            target_speed *= NPC_BOOST_FACTOR;
            SPEED_LAG_RATE_BOOST
        } else {
            SPEED_LAG_RATE
        };
        npc.speed += (target_speed - npc.speed) * (rate * dt).min(1.0);

        *pos = move_position(pos, npc.heading, npc.pitch, npc.speed * dt);
    }

    // Replenish: one spawn per qualifying check, rate-limited.
    let alive = world
        .query_mut::<&Npc>()
        .into_iter()
        .filter(|(_, npc)| !npc.destroyed)
        .count();
    if alive < NPC_MIN_COUNT && time.elapsed_secs - *last_spawn >= NPC_RESPAWN_INTERVAL {
        *last_spawn = time.elapsed_secs;
        spawn_npc(world, rng, next_npc_id, player_pos);
    }
}

/// Spawn one NPC at a random bearing and range from `reference`.
pub fn spawn_npc(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_npc_id: &mut u32,
    reference: &GeoPos,
) -> u32 {
    let id = *next_npc_id;
    *next_npc_id += 1;

    let bearing = rng.gen_range(0.0..360.0);
    let range = rng.gen_range(NPC_SPAWN_RANGE_MIN..NPC_SPAWN_RANGE_MAX);
    let mut pos = move_position(reference, bearing, 0.0, range);
    pos.alt = (reference.alt + rng.gen_range(-NPC_SPAWN_ALT_JITTER..NPC_SPAWN_ALT_JITTER))
        .max(NPC_SPAWN_ALT_MIN);

    let callsign = NPC_CALLSIGNS[rng.gen_range(0..NPC_CALLSIGNS.len())];
    let number: u32 = rng.gen_range(100..1000);
    let heading = rng.gen_range(0.0..360.0);

    let npc = Npc {
        id,
        name: format!("{callsign} {number}"),
        heading,
        pitch: 0.0,
        roll: 0.0,
        speed: rng.gen_range(NPC_SPEED_MIN..NPC_SPEED_MAX),
        throttle: 0.7,
        boosting: false,
        target_heading: heading,
        target_pitch: 0.0,
        behavior_timer: rng.gen_range(NPC_BEHAVIOR_FIRST_MIN..NPC_BEHAVIOR_FIRST_MAX),
        terrain_timer: rng.gen_range(0.0..NPC_TERRAIN_CHECK_INTERVAL * 4.0),
        destroyed: false,
    };
    world.spawn((pos, npc));
    id
}
