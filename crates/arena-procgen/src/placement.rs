//! Placement of spawned objects onto candidate grid cells.
//!
//! Random rejection sampling with a per-pick retry cap. When the cap runs
//! out the last drawn cell is accepted even if it collides, so placement
//! always terminates. Such picks are counted in `Selection::fallbacks`.
//! Requested counts are clamped to the pool size.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use arena_core::types::GridCoord;

/// Cells chosen for one placement request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub cells: Vec<GridCoord>,
    /// Count asked for, before clamping to the pool size.
    pub requested: u32,
    /// Picks accepted after the retry cap ran out.
    pub fallbacks: u32,
}

impl Selection {
    /// Every pick satisfied its constraint.
    pub fn is_exact(&self) -> bool {
        self.fallbacks == 0
    }

    /// Fewer cells than requested because the pool was too small.
    pub fn is_clamped(&self) -> bool {
        (self.cells.len() as u32) < self.requested
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Picks cells out of candidate pools.
#[derive(Debug, Clone, Copy)]
pub struct PlacementPlanner {
    retry_cap: u32,
}

impl PlacementPlanner {
    pub fn new(retry_cap: u32) -> Self {
        Self { retry_cap }
    }

    /// `count` distinct cells drawn at random from `pool`.
    pub fn plan<R: Rng + ?Sized>(&self, pool: &[GridCoord], count: u32, rng: &mut R) -> Selection {
        self.sample(pool, count, rng, |picked, _, idx, _| picked.contains(&idx))
    }

    /// `count` cells drawn at random from `pool`, no two of them touching.
    pub fn plan_non_adjacent<R: Rng + ?Sized>(
        &self,
        pool: &[GridCoord],
        count: u32,
        rng: &mut R,
    ) -> Selection {
        self.sample(pool, count, rng, |_, cells, _, cell| {
            cells.iter().any(|c| c.touches(cell))
        })
    }

    /// Shuffle `pool` and keep the first `count` cells. No adjacency rule.
    pub fn shuffle_take<R: Rng + ?Sized>(
        &self,
        pool: &[GridCoord],
        count: u32,
        rng: &mut R,
    ) -> Selection {
        let mut cells = pool.to_vec();
        cells.shuffle(rng);
        cells.truncate(clamp_count(pool, count));
        Selection {
            cells,
            requested: count,
            fallbacks: 0,
        }
    }

    /// Draw indices until one does not collide with the picks so far, or the
    /// retry cap runs out. `collides` sees the picked indices and cells.
    fn sample<R: Rng + ?Sized>(
        &self,
        pool: &[GridCoord],
        count: u32,
        rng: &mut R,
        collides: impl Fn(&[usize], &[GridCoord], usize, GridCoord) -> bool,
    ) -> Selection {
        let n = clamp_count(pool, count);
        let mut picked = Vec::with_capacity(n);
        let mut selection = Selection {
            cells: Vec::with_capacity(n),
            requested: count,
            fallbacks: 0,
        };

        for _ in 0..n {
            let mut idx = rng.gen_range(0..pool.len());
            let mut retries = 0;
            while collides(picked.as_slice(), selection.cells.as_slice(), idx, pool[idx]) {
                if retries >= self.retry_cap {
                    warn!(
                        cell = ?pool[idx],
                        retries,
                        "placement retry cap exhausted, accepting colliding cell"
                    );
                    selection.fallbacks += 1;
                    break;
                }
                idx = rng.gen_range(0..pool.len());
                retries += 1;
            }
            picked.push(idx);
            selection.cells.push(pool[idx]);
        }

        selection
    }
}

fn clamp_count(pool: &[GridCoord], count: u32) -> usize {
    let n = (count as usize).min(pool.len());
    if n < count as usize {
        debug!(requested = count, available = pool.len(), "placement clamped to pool size");
    }
    n
}
