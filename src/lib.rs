//! rwalk: two-dimensional lattice random walk simulator
//!
//! Architecture:
//! - `domain`: lattice points and renderings (no I/O)
//! - `application`: walk iterator and simulation service
//! - `infrastructure`: offset sources (seeded RNG)
//! - `cli`: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
