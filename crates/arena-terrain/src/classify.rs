//! Terrain classification: obstacles, safe spots and spots next to cover.

use tracing::debug;

use arena_core::enums::CellClass;
use arena_core::types::{GridCoord, GridDims};

use crate::grid::ScalarGrid;

/// Splits a noise grid into obstacle and free cells.
#[derive(Debug, Clone, Copy)]
pub struct TerrainClassifier {
    /// Values strictly above this are obstacle-valued.
    pub threshold: f32,
    /// Chebyshev radius around the grid center that is never an obstacle.
    pub center_clearance: u32,
}

impl TerrainClassifier {
    pub fn new(threshold: f32, center_clearance: u32) -> Self {
        Self {
            threshold,
            center_clearance,
        }
    }

    /// Label every cell of `grid`.
    ///
    /// Obstacle-valued cells inside the landing zone are labeled like free
    /// cells. Adjacency looks at noise values of the 8 in-bounds neighbors,
    /// never at the cell itself.
    pub fn classify(&self, grid: &ScalarGrid) -> TerrainMap {
        let dims = grid.dims();
        let center = dims.center();

        let classes: Vec<CellClass> = dims
            .coords()
            .zip(grid.values())
            .map(|(coord, &value)| {
                let in_landing_zone = coord.chebyshev(center) <= self.center_clearance;
                if value > self.threshold && !in_landing_zone {
                    CellClass::Obstacle
                } else if grid.any_neighbor_above(coord, self.threshold) {
                    CellClass::AdjacentSpot
                } else {
                    CellClass::SafeSpot
                }
            })
            .collect();

        let map = TerrainMap { dims, classes };
        debug!(
            obstacles = map.count(CellClass::Obstacle),
            safe = map.count(CellClass::SafeSpot),
            adjacent = map.count(CellClass::AdjacentSpot),
            "terrain classified"
        );
        map
    }
}

/// Per-cell labels for one wave's grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainMap {
    dims: GridDims,
    classes: Vec<CellClass>,
}

impl TerrainMap {
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn class_at(&self, coord: GridCoord) -> Option<CellClass> {
        self.dims.index_of(coord).map(|i| self.classes[i])
    }

    pub fn count(&self, class: CellClass) -> usize {
        self.classes.iter().filter(|c| **c == class).count()
    }

    /// Cells with the given label, in row-major order.
    pub fn cells(&self, class: CellClass) -> Vec<GridCoord> {
        self.dims
            .coords()
            .zip(&self.classes)
            .filter(|(_, c)| **c == class)
            .map(|(coord, _)| coord)
            .collect()
    }

    pub fn obstacles(&self) -> Vec<GridCoord> {
        self.cells(CellClass::Obstacle)
    }

    pub fn safe_spots(&self) -> Vec<GridCoord> {
        self.cells(CellClass::SafeSpot)
    }

    pub fn adjacent_spots(&self) -> Vec<GridCoord> {
        self.cells(CellClass::AdjacentSpot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise_field::{NoiseField, NoiseOffset};

    /// 7x7 grid, all zero except the listed cells which are 1.0.
    fn grid_with_peaks(peaks: &[(i32, i32)]) -> ScalarGrid {
        ScalarGrid::from_fn(GridDims::new(7, 7), |c| {
            if peaks.contains(&(c.x, c.y)) {
                1.0
            } else {
                0.0
            }
        })
    }

    #[test]
    fn test_single_peak_ring() {
        let grid = grid_with_peaks(&[(0, 0)]);
        let map = TerrainClassifier::new(0.5, 1).classify(&grid);

        assert_eq!(map.class_at(GridCoord::new(0, 0)), Some(CellClass::Obstacle));
        assert_eq!(
            map.adjacent_spots(),
            vec![GridCoord::new(1, 0), GridCoord::new(0, 1), GridCoord::new(1, 1)]
        );
        assert_eq!(map.count(CellClass::SafeSpot), 49 - 4);
    }

    #[test]
    fn test_landing_zone_never_obstacle() {
        // Center of a 7x7 grid is (3, 3); clearance 1 covers (2..=4, 2..=4).
        let grid = grid_with_peaks(&[(3, 3), (4, 2), (5, 5)]);
        let map = TerrainClassifier::new(0.5, 1).classify(&grid);

        // Peak at the center only has the (4, 2) peak as neighbor.
        assert_eq!(map.class_at(GridCoord::new(3, 3)), Some(CellClass::AdjacentSpot));
        assert_eq!(map.class_at(GridCoord::new(4, 2)), Some(CellClass::AdjacentSpot));
        // Outside the zone the same value is an obstacle.
        assert_eq!(map.class_at(GridCoord::new(5, 5)), Some(CellClass::Obstacle));
    }

    #[test]
    fn test_isolated_peak_in_landing_zone_is_safe() {
        let grid = grid_with_peaks(&[(3, 3)]);
        let map = TerrainClassifier::new(0.5, 0).classify(&grid);
        assert_eq!(map.class_at(GridCoord::new(3, 3)), Some(CellClass::SafeSpot));
        assert_eq!(map.count(CellClass::Obstacle), 0);
        assert_eq!(map.count(CellClass::AdjacentSpot), 8);
    }

    #[test]
    fn test_threshold_is_strict() {
        let grid = ScalarGrid::from_fn(GridDims::new(7, 7), |_| 0.5);
        let map = TerrainClassifier::new(0.5, 0).classify(&grid);
        assert_eq!(map.count(CellClass::SafeSpot), 49);
    }

    #[test]
    fn test_labels_match_noise_on_generated_arena() {
        let dims = GridDims::new(32, 18);
        let threshold = 0.5;
        let classifier = TerrainClassifier::new(threshold, 1);
        let field = NoiseField::default();

        for offset in [100.0, 777.0, 4_321.0] {
            let grid = field.generate(dims, NoiseOffset::new(offset, 30.0), 0.2);
            let map = classifier.classify(&grid);
            for coord in dims.coords() {
                let value = grid.get(coord).unwrap();
                let touching = grid.any_neighbor_above(coord, threshold);
                match map.class_at(coord).unwrap() {
                    CellClass::Obstacle => {
                        assert!(value > threshold);
                        assert!(coord.chebyshev(dims.center()) > 1);
                    }
                    CellClass::AdjacentSpot => assert!(touching),
                    CellClass::SafeSpot => assert!(!touching),
                }
            }
            let total = map.count(CellClass::Obstacle)
                + map.count(CellClass::SafeSpot)
                + map.count(CellClass::AdjacentSpot);
            assert_eq!(total, dims.cell_count());
        }
    }

    #[test]
    fn test_fixed_offset_arena_is_reproducible() {
        let dims = GridDims::new(32, 18);
        let field = NoiseField::default();
        let classifier = TerrainClassifier::new(0.5, 1);
        let offset = NoiseOffset::new(42.0, 42.0);

        let first = classifier.classify(&field.generate(dims, offset, 0.2));
        let second = classifier.classify(&field.generate(dims, offset, 0.2));
        assert_eq!(first.obstacles(), second.obstacles());

        // (0, 0) samples the lattice point (42, 42): value 0.5, not above threshold.
        let grid = field.generate(dims, offset, 0.2);
        assert_eq!(grid.get(GridCoord::new(0, 0)), Some(0.5));
        let expected = if grid.any_neighbor_above(GridCoord::new(0, 0), 0.5) {
            CellClass::AdjacentSpot
        } else {
            CellClass::SafeSpot
        };
        assert_eq!(first.class_at(GridCoord::new(0, 0)), Some(expected));
    }
}
