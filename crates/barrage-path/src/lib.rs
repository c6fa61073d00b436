//! Flight-path algorithms for the barrage simulation.
//!
//! Pure curve math, windy Bezier path synthesis, and formation spiral
//! derivation. Operates on plain data with an injected random source,
//! with no ECS dependency, fully reproducible under a fixed seed.

pub mod curve;
pub mod formation;
pub mod path;
