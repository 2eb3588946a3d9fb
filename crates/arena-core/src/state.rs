//! Director snapshot: the visible state handed to the host after each update.

use serde::{Deserialize, Serialize};

use crate::enums::WavePhase;
use crate::events::DirectorEvent;
use crate::types::KindCounts;

/// Complete director state after an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectorSnapshot {
    pub wave: u32,
    pub phase: WavePhase,
    /// Seconds left before the next wave (only counts down in Idle).
    pub timer_secs: f32,
    /// Unspent power carried into the next roster.
    pub power_budget: u32,
    /// Registered live entities per kind.
    pub live: KindCounts,
    /// Paced actions still queued in the current phase.
    pub pending_actions: u32,
    pub events: Vec<DirectorEvent>,
}
