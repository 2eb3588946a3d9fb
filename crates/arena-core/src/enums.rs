//! Enumeration types used throughout the arena.

use serde::{Deserialize, Serialize};

/// Kind of object the director places into the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    /// Terrain block carved out of the noise field.
    Obstacle,
    /// Turret, placed next to cover.
    StationaryThreat,
    /// Barrel, placed next to cover. Costs no power and is never carried over.
    Prop,
    /// Enemy that moves around, placed in open ground.
    RoamingThreat,
}

impl EntityKind {
    pub const COUNT: usize = 4;

    pub const ALL: [EntityKind; EntityKind::COUNT] = [
        EntityKind::Obstacle,
        EntityKind::StationaryThreat,
        EntityKind::Prop,
        EntityKind::RoamingThreat,
    ];

    /// Kinds that consume power budget and take part in carry-over.
    pub const THREATS: [EntityKind; 2] = [EntityKind::StationaryThreat, EntityKind::RoamingThreat];

    /// Order in which live entities are told to despawn: threats and props
    /// go first, the terrain they stand next to goes last.
    pub const DESPAWN_ORDER: [EntityKind; EntityKind::COUNT] = [
        EntityKind::StationaryThreat,
        EntityKind::Prop,
        EntityKind::RoamingThreat,
        EntityKind::Obstacle,
    ];

    /// Dense index used by `KindMap`.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn is_threat(self) -> bool {
        matches!(self, EntityKind::StationaryThreat | EntityKind::RoamingThreat)
    }

    /// Container the host should parent a freshly spawned entity under.
    pub fn container(self) -> Container {
        match self {
            EntityKind::Obstacle | EntityKind::StationaryThreat | EntityKind::Prop => {
                Container::Navigation
            }
            EntityKind::RoamingThreat => Container::Root,
        }
    }
}

/// Host-side container a spawned entity is parented under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Container {
    /// The navigation surface: anything that blocks or shapes paths.
    Navigation,
    /// Top level of the scene.
    #[default]
    Root,
}

/// Classification of one grid cell after terrain generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellClass {
    /// Noise above threshold, outside the landing zone.
    Obstacle,
    /// Free cell with no obstacle-valued neighbor.
    SafeSpot,
    /// Free cell touching at least one obstacle-valued neighbor.
    AdjacentSpot,
}

impl CellClass {
    pub fn is_free(self) -> bool {
        !matches!(self, CellClass::Obstacle)
    }
}

/// Wave director lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WavePhase {
    /// Counting down to the next wave.
    #[default]
    Idle,
    /// Telling every live entity to despawn, one per action interval.
    Clearing,
    /// Spawning the new map and roster, one per action interval.
    Generating,
}

impl WavePhase {
    /// The phase that always follows this one.
    pub fn next(self) -> WavePhase {
        match self {
            WavePhase::Idle => WavePhase::Clearing,
            WavePhase::Clearing => WavePhase::Generating,
            WavePhase::Generating => WavePhase::Idle,
        }
    }
}
