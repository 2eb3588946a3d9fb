//! Fundamental grid and world-space types.

use std::ops::{Index, IndexMut};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::error::{ArenaError, ArenaResult};

/// Integer cell coordinate in the tile grid.
/// x = column (left to right), y = row (bottom to top).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offsets of the 8 surrounding cells.
    pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];

    /// The 8 surrounding coordinates. May lie outside any grid.
    pub fn neighbors(self) -> impl Iterator<Item = GridCoord> {
        Self::NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| GridCoord::new(self.x + dx, self.y + dy))
    }

    /// Chebyshev distance between two cells.
    pub fn chebyshev(self, other: GridCoord) -> u32 {
        (self.x - other.x)
            .unsigned_abs()
            .max((self.y - other.y).unsigned_abs())
    }

    /// True when the cells touch in the 8-neighborhood, or are the same cell.
    pub fn touches(self, other: GridCoord) -> bool {
        self.chebyshev(other) <= 1
    }
}

/// Grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDims {
    pub width: u32,
    pub height: u32,
}

impl GridDims {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of whole tiles that fit in the world bounds.
    pub fn from_bounds(bounds: &WorldBounds) -> ArenaResult<Self> {
        bounds.validate()?;
        let full = bounds.half_extents * 2.0;
        let width = (full.x / bounds.tile_size.x).floor() as u32;
        let height = (full.y / bounds.tile_size.y).floor() as u32;
        if width == 0 || height == 0 {
            return Err(ArenaError::Bounds(format!(
                "world {full} holds no whole tile of size {}",
                bounds.tile_size
            )));
        }
        Ok(Self { width, height })
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0 && coord.y >= 0 && (coord.x as u32) < self.width && (coord.y as u32) < self.height
    }

    /// Row-major index of an in-bounds cell.
    pub fn index_of(&self, coord: GridCoord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.y as usize * self.width as usize + coord.x as usize)
    }

    /// Geometric center cell (integer halves, as the landing zone uses).
    pub fn center(&self) -> GridCoord {
        GridCoord::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// All cells in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = GridCoord> {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..h).flat_map(move |y| (0..w).map(move |x| GridCoord::new(x, y)))
    }
}

/// Visible world extents and tile size, as reported by the host.
///
/// The world is centered on the origin: it spans `-half_extents..half_extents`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub half_extents: Vec2,
    pub tile_size: Vec2,
}

impl Default for WorldBounds {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            half_extents: Vec2::new(WORLD_HALF_WIDTH, WORLD_HALF_HEIGHT),
            tile_size: Vec2::splat(TILE_SIZE),
        }
    }
}

impl WorldBounds {
    pub fn new(half_extents: Vec2, tile_size: Vec2) -> Self {
        Self {
            half_extents,
            tile_size,
        }
    }

    pub fn validate(&self) -> ArenaResult<()> {
        if !self.half_extents.is_finite() || self.half_extents.min_element() <= 0.0 {
            return Err(ArenaError::Bounds(format!(
                "half extents must be positive, got {}",
                self.half_extents
            )));
        }
        if !self.tile_size.is_finite() || self.tile_size.min_element() <= 0.0 {
            return Err(ArenaError::Bounds(format!(
                "tile size must be positive, got {}",
                self.tile_size
            )));
        }
        Ok(())
    }

    /// World-space center of a grid cell.
    pub fn cell_to_world(&self, coord: GridCoord) -> Vec2 {
        (Vec2::new(coord.x as f32, coord.y as f32) + 0.5) * self.tile_size - self.half_extents
    }

    /// Whether a world position lies strictly inside the visible arena.
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x.abs() < self.half_extents.x && pos.y.abs() < self.half_extents.y
    }
}

/// Fixed-size map keyed by `EntityKind`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindMap<T> {
    slots: [T; EntityKind::COUNT],
}

/// Per-kind counters (rosters, live counts).
pub type KindCounts = KindMap<u32>;

impl<T> KindMap<T> {
    pub fn from_fn(mut f: impl FnMut(EntityKind) -> T) -> Self {
        Self {
            slots: EntityKind::ALL.map(&mut f),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityKind, &T)> {
        EntityKind::ALL.into_iter().zip(self.slots.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityKind, &mut T)> {
        EntityKind::ALL.into_iter().zip(self.slots.iter_mut())
    }
}

impl KindCounts {
    pub fn total(&self) -> u32 {
        self.slots.iter().sum()
    }
}

impl<T> Index<EntityKind> for KindMap<T> {
    type Output = T;

    fn index(&self, kind: EntityKind) -> &T {
        &self.slots[kind.index()]
    }
}

impl<T> IndexMut<EntityKind> for KindMap<T> {
    fn index_mut(&mut self, kind: EntityKind) -> &mut T {
        &mut self.slots[kind.index()]
    }
}
