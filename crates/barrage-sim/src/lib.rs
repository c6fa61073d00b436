//! Simulation engine for the barrage scene.
//!
//! Owns the hecs ECS world, runs the motion systems at a fixed tick
//! rate, and produces `SimSnapshot`s for rendering collaborators.
//! Completely headless, enabling deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
