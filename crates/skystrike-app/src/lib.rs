//! SKYSTRIKE host shell.
//!
//! Owns the fixed-rate game loop thread and the shared cells the host
//! uses to talk to it: an input cell sampled every tick and a snapshot
//! cell refreshed after every tick.

pub mod game_loop;
pub mod state;

pub use skystrike_core as core;
