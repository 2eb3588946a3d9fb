//! Coherent noise field sampled onto the tile grid.
//!
//! Pure function of (dimensions, offset, scale): the generator's permutation
//! seed is fixed at construction, so the same inputs always yield the same
//! grid. Per-wave variety comes from moving the offset, not the seed.

use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use arena_core::types::{GridCoord, GridDims};

use crate::grid::ScalarGrid;

/// Scroll position of the sampling window inside the noise plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NoiseOffset {
    pub x: f64,
    pub y: f64,
}

impl NoiseOffset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Perlin noise sampler producing values in [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct NoiseField {
    perlin: Perlin,
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// Noise at a point of the noise plane, remapped from [-1, 1] to [0, 1].
    pub fn sample(&self, x: f64, y: f64) -> f32 {
        let raw = self.perlin.get([x, y]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0) as f32
    }

    /// Sample one value per cell at `(x * scale + offset.x, y * scale + offset.y)`.
    pub fn generate(&self, dims: GridDims, offset: NoiseOffset, scale: f64) -> ScalarGrid {
        ScalarGrid::from_fn(dims, |GridCoord { x, y }| {
            self.sample(x as f64 * scale + offset.x, y as f64 * scale + offset.y)
        })
    }
}
