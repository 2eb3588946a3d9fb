//! Events emitted by the wave director for the host and for logging.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::GridCoord;

/// Something observable happened inside the director.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DirectorEvent {
    /// Lifecycle phase changed.
    PhaseChanged { from: WavePhase, to: WavePhase },
    /// A new map is being generated for this wave.
    WaveStarted { wave: u32 },
    /// Roster for the upcoming wave is known.
    RosterComputed {
        wave: u32,
        stationary_threats: u32,
        roaming_threats: u32,
        props: u32,
        budget_left: u32,
    },
    /// An entity was handed to the host.
    Spawned { kind: EntityKind, cell: GridCoord },
    /// A live entity was told to begin its destruction.
    DespawnRequested { kind: EntityKind },
    /// Placement could not honor the request exactly. `kind` is
    /// `RoamingThreat` for open-ground placement and `StationaryThreat` for
    /// the turret-plus-prop group placed next to cover.
    PlacementDegraded {
        kind: EntityKind,
        requested: u32,
        placed: u32,
        fallbacks: u32,
    },
}
