//! Application layer: the simulation service
//!
//! Orchestrates domain values and the offset source boundary.

pub mod error;
pub mod simulation;

pub use error::{ApplicationError, ApplicationResult};
pub use simulation::{parse_iterations, Simulation, SimulationConfig, Walk, DEFAULT_ITERATIONS};
