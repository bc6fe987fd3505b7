//! Domain layer: lattice points and their renderings
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod point;

pub use error::DomainError;
pub use point::{Point, PointFormat};
