//! Terrain generation for the arena.
//!
//! Perlin noise field sampling and classification of grid cells into
//! obstacles, safe spots and spots adjacent to cover.

pub use arena_core as core;

pub mod classify;
pub mod grid;
pub mod noise_field;

// Re-export key types for convenience.
pub use classify::{TerrainClassifier, TerrainMap};
pub use grid::ScalarGrid;
pub use noise_field::{NoiseField, NoiseOffset};
