//! Simulation systems, run in a fixed order each flying tick:
//! weapons, projectiles, NPCs, snapshot. Projectiles therefore always test
//! against NPC positions from before this tick's NPC update.

pub mod cleanup;
pub mod npc;
pub mod projectile;
pub mod snapshot;
pub mod weapons;
