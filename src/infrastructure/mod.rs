//! Infrastructure layer: randomness implementations
//!
//! This layer implements the boundary traits the application layer draws from.

pub mod rng;
pub mod traits;

pub use rng::SeededOffsets;
pub use traits::OffsetSource;
