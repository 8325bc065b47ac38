//! Falling Sand - Simulation Library
//!
//! Cellular automaton over a fixed 2D grid of materials:
//! - Sand falls, slides diagonally, and sinks through water
//! - Water falls under column pressure, spreads sideways with surface tension
//! - Multi-pass bottom-to-top scans with alternating direction
//!
//! This crate is framework-agnostic - it handles simulation only.
//! Use the `sandbox` crate for the window, input and rendering.

pub mod config;
pub mod error;
pub mod grid;
pub mod material;
pub mod pour;
pub mod sand;
pub mod simulation;
pub mod update;
pub mod water;

pub use config::{Brush, SimConfig};
pub use error::SimError;
pub use grid::{Grid, MaterialCounts};
pub use material::Material;
pub use pour::{PointerInput, PourRequest};
pub use simulation::{Simulation, TickReport};
pub use update::ScanDirection;
