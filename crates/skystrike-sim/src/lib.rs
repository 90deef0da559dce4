//! Simulation engine for SKYSTRIKE.
//!
//! Owns the hecs ECS world (AI aircraft and projectiles), runs systems at
//! a fixed tick rate, and produces `GameSnapshot`s for the host.

pub mod engine;
pub mod systems;

pub use skystrike_core as core;
pub use engine::FlightEngine;

#[cfg(test)]
mod tests;
