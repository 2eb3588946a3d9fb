//! Wave director and headless session for the arena.
//!
//! `WaveDirector` owns the wave lifecycle and talks to the game engine only
//! through the `EntityHost` trait. `ArenaSession` drives a director over a
//! hecs world at a fixed tick rate for tests and tooling.

pub mod director;
pub mod ecs_host;
pub mod engine;
pub mod generator;
pub mod host;
pub mod registry;
pub mod systems;

pub use arena_core as core;
pub use director::WaveDirector;
pub use engine::{ArenaCommand, ArenaSession, SessionConfig};
pub use host::EntityHost;
