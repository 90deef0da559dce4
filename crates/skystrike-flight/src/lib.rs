//! Flight algorithms for SKYSTRIKE.
//!
//! Pure data-in/data-out: the quaternion attitude integrator and the
//! raw-input aggregator. No ECS or engine dependency, so both are
//! directly unit-testable.

pub mod dynamics;
pub mod input;

pub use skystrike_core as core;

pub use dynamics::{FlightDynamics, FlightSample};
pub use input::{ControlInput, InputAggregator, RawInput};
