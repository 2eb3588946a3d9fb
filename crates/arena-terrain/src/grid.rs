//! ScalarGrid: row-major grid of noise values with neighbor queries.

use arena_core::types::{GridCoord, GridDims};

/// Row-major grid of scalar values, one per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    dims: GridDims,
    values: Vec<f32>,
}

impl ScalarGrid {
    /// Build a grid from row-major values. Returns None on a size mismatch.
    pub fn new(dims: GridDims, values: Vec<f32>) -> Option<Self> {
        (values.len() == dims.cell_count()).then_some(Self { dims, values })
    }

    /// Build a grid by evaluating `f` once per cell in row-major order.
    pub fn from_fn(dims: GridDims, mut f: impl FnMut(GridCoord) -> f32) -> Self {
        let values = dims.coords().map(&mut f).collect();
        Self { dims, values }
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Value at a cell, None outside the grid.
    pub fn get(&self, coord: GridCoord) -> Option<f32> {
        self.dims.index_of(coord).map(|i| self.values[i])
    }

    /// In-bounds neighbors of a cell. The cell itself is not included.
    pub fn neighbors(&self, coord: GridCoord) -> impl Iterator<Item = (GridCoord, f32)> + '_ {
        coord
            .neighbors()
            .filter_map(move |n| self.get(n).map(|v| (n, v)))
    }

    /// Whether any in-bounds neighbor is strictly above `threshold`.
    pub fn any_neighbor_above(&self, coord: GridCoord, threshold: f32) -> bool {
        self.neighbors(coord).any(|(_, v)| v > threshold)
    }
}
