//! One wave's map and roster: noise → terrain → budget → placement.
//!
//! The plan is ephemeral. The director turns it into a spawn queue and
//! drops it; tooling renders it.

use rand::Rng;
use tracing::info;

use arena_core::config::ArenaConfig;
use arena_core::enums::EntityKind;
use arena_core::events::DirectorEvent;
use arena_core::types::{GridCoord, GridDims, KindCounts};
use arena_procgen::{PlacementPlanner, Roster, Selection, SpawnBudgeter};
use arena_terrain::{NoiseField, NoiseOffset, TerrainClassifier, TerrainMap};

/// A single spawn request in wave order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedSpawn {
    pub kind: EntityKind,
    pub cell: GridCoord,
}

/// Everything decided for one wave.
#[derive(Debug, Clone)]
pub struct WavePlan {
    pub offset: NoiseOffset,
    pub terrain: TerrainMap,
    /// Roster as computed, before placement consumed it.
    pub roster: Roster,
    pub roaming: Selection,
    /// Turrets first, then props.
    pub stationary: Selection,
    /// Spawn requests: obstacles, roaming threats, turrets, props.
    pub spawns: Vec<PlannedSpawn>,
}

impl WavePlan {
    /// Placement groups that came out smaller or more crowded than asked.
    ///
    /// Turrets and props are placed as one group on cells next to cover;
    /// that group is reported under `StationaryThreat` even when it only
    /// asked for props.
    pub fn degraded(&self) -> Vec<DirectorEvent> {
        let groups = [
            (EntityKind::RoamingThreat, &self.roaming),
            (EntityKind::StationaryThreat, &self.stationary),
        ];
        groups
            .into_iter()
            .filter(|(_, sel)| sel.is_clamped() || !sel.is_exact())
            .map(|(kind, sel)| DirectorEvent::PlacementDegraded {
                kind,
                requested: sel.requested,
                placed: sel.len() as u32,
                fallbacks: sel.fallbacks,
            })
            .collect()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.spawns.iter().filter(|s| s.kind == kind).count()
    }
}

/// Builds wave plans for a fixed grid.
#[derive(Debug, Clone)]
pub struct WaveGenerator {
    config: ArenaConfig,
    dims: GridDims,
    noise: NoiseField,
    classifier: TerrainClassifier,
    planner: PlacementPlanner,
}

impl WaveGenerator {
    pub fn new(config: ArenaConfig, dims: GridDims) -> Self {
        Self {
            noise: NoiseField::new(config.noise_seed),
            classifier: TerrainClassifier::new(config.noise_threshold, config.center_clearance),
            planner: PlacementPlanner::new(config.placement_retry_cap),
            config,
            dims,
        }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Roll a fresh noise offset and plan the wave on it.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        carried_over: &KindCounts,
        budget: &mut u32,
        rng: &mut R,
    ) -> WavePlan {
        let x = rng.gen_range(self.config.noise_offset_min..self.config.noise_offset_max);
        let offset = NoiseOffset::new(x as f64, self.config.noise_offset_y);
        self.generate_at(offset, carried_over, budget, rng)
    }

    /// Plan a wave on a given noise offset.
    pub fn generate_at<R: Rng + ?Sized>(
        &self,
        offset: NoiseOffset,
        carried_over: &KindCounts,
        budget: &mut u32,
        rng: &mut R,
    ) -> WavePlan {
        let grid = self.noise.generate(self.dims, offset, self.config.noise_scale);
        let terrain = self.classifier.classify(&grid);

        let roster = SpawnBudgeter::new(
            &self.config.power_catalog,
            self.config.power_increment_per_wave,
        )
        .compute_roster(carried_over, budget, rng);
        let mut pending = roster.clone();

        let roaming = self.planner.shuffle_take(
            &terrain.safe_spots(),
            pending.take(EntityKind::RoamingThreat),
            rng,
        );
        let turrets = pending.take(EntityKind::StationaryThreat);
        let stationary = self.planner.plan_non_adjacent(
            &terrain.adjacent_spots(),
            turrets + self.config.stationary_object_count,
            rng,
        );

        let mut spawns: Vec<PlannedSpawn> = terrain
            .obstacles()
            .into_iter()
            .map(|cell| PlannedSpawn {
                kind: EntityKind::Obstacle,
                cell,
            })
            .collect();
        spawns.extend(roaming.cells.iter().map(|&cell| PlannedSpawn {
            kind: EntityKind::RoamingThreat,
            cell,
        }));
        spawns.extend(stationary.cells.iter().enumerate().map(|(i, &cell)| PlannedSpawn {
            kind: if (i as u32) < turrets {
                EntityKind::StationaryThreat
            } else {
                EntityKind::Prop
            },
            cell,
        }));

        info!(
            offset_x = offset.x,
            obstacles = terrain.obstacles().len(),
            roaming = roaming.len(),
            stationary = stationary.len(),
            budget_left = *budget,
            "wave planned"
        );

        WavePlan {
            offset,
            terrain,
            roster,
            roaming,
            stationary,
            spawns,
        }
    }
}
