//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World`; they do not own state.
//! All ordering is decided by the engine.

pub mod actor;
pub mod barrage;
pub mod cleanup;
pub mod projectile;
pub mod snapshot;
