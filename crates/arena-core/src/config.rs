//! Arena configuration.
//!
//! Every field has a default, so a partial JSON document is enough to
//! override a handful of knobs. `validate` runs at director construction so
//! a malformed configuration fails before the first wave, never mid-wave.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::EntityKind;
use crate::error::{ArenaError, ArenaResult};

/// Power cost of one threat kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub kind: EntityKind,
    pub cost: u32,
}

/// Ordered threat price list. Order is the tie-break for equal costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PowerCatalog {
    entries: Vec<CatalogEntry>,
}

impl Default for PowerCatalog {
    fn default() -> Self {
        Self::new(vec![
            CatalogEntry {
                kind: EntityKind::StationaryThreat,
                cost: STATIONARY_THREAT_COST,
            },
            CatalogEntry {
                kind: EntityKind::RoamingThreat,
                cost: ROAMING_THREAT_COST,
            },
        ])
    }
}

impl PowerCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Cost of a kind. Kinds absent from the catalog cost nothing.
    pub fn cost(&self, kind: EntityKind) -> u32 {
        self.entries
            .iter()
            .find(|e| e.kind == kind)
            .map_or(0, |e| e.cost)
    }

    /// Cheapest entry cost, `None` for an empty catalog.
    pub fn min_cost(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.cost).min()
    }

    /// Entries whose cost fits in `budget`, in catalog order.
    pub fn affordable(&self, budget: u32) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(move |e| e.cost <= budget)
    }

    /// Highest-cost affordable entry. Ties keep the earliest entry.
    pub fn strongest_affordable(&self, budget: u32) -> Option<&CatalogEntry> {
        self.affordable(budget)
            .fold(None, |best: Option<&CatalogEntry>, e| match best {
                Some(b) if b.cost >= e.cost => Some(b),
                _ => Some(e),
            })
    }

    fn validate(&self) -> ArenaResult<()> {
        if self.entries.is_empty() {
            return Err(ArenaError::Catalog("catalog has no entries".into()));
        }
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !entry.kind.is_threat() {
                return Err(ArenaError::Catalog(format!(
                    "{:?} is not a threat and cannot be priced",
                    entry.kind
                )));
            }
            if entry.cost == 0 {
                return Err(ArenaError::Catalog(format!(
                    "{:?} has zero cost",
                    entry.kind
                )));
            }
            if !seen.insert(entry.kind) {
                return Err(ArenaError::Catalog(format!(
                    "{:?} listed more than once",
                    entry.kind
                )));
            }
        }
        Ok(())
    }
}

/// Configuration for a wave director.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// RNG seed. Same seed = same sequence of waves.
    pub seed: u64,
    /// Seconds in Idle before the next wave starts on its own.
    pub wave_timer_max: f32,
    /// Seconds between two paced spawn/despawn actions.
    pub action_interval_secs: f32,
    /// Noise sampling step per cell.
    pub noise_scale: f64,
    /// Cells with noise strictly above this become obstacles.
    pub noise_threshold: f32,
    /// Permutation seed of the Perlin generator.
    pub noise_seed: u32,
    /// Horizontal noise offset range, re-rolled each wave (`min..max`).
    pub noise_offset_min: i32,
    pub noise_offset_max: i32,
    /// Fixed vertical noise offset.
    pub noise_offset_y: f64,
    /// Chebyshev radius around the grid center that never becomes an obstacle.
    pub center_clearance: u32,
    /// Props placed each wave in addition to the roster's turrets.
    pub stationary_object_count: u32,
    /// Redraws per placement before a colliding cell is accepted.
    pub placement_retry_cap: u32,
    pub power_catalog: PowerCatalog,
    pub power_increment_per_wave: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            wave_timer_max: WAVE_TIMER_MAX_SECS,
            action_interval_secs: ACTION_INTERVAL_SECS,
            noise_scale: NOISE_SCALE,
            noise_threshold: NOISE_THRESHOLD,
            noise_seed: 0,
            noise_offset_min: NOISE_OFFSET_MIN,
            noise_offset_max: NOISE_OFFSET_MAX,
            noise_offset_y: NOISE_OFFSET_Y,
            center_clearance: CENTER_CLEARANCE,
            stationary_object_count: STATIONARY_OBJECT_COUNT,
            placement_retry_cap: PLACEMENT_RETRY_CAP,
            power_catalog: PowerCatalog::default(),
            power_increment_per_wave: POWER_INCREMENT_PER_WAVE,
        }
    }
}

impl ArenaConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> ArenaResult<Self> {
        let config: ArenaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the director misbehave later.
    pub fn validate(&self) -> ArenaResult<()> {
        positive("wave_timer_max", self.wave_timer_max as f64)?;
        positive("action_interval_secs", self.action_interval_secs as f64)?;
        positive("noise_scale", self.noise_scale)?;
        if !(0.0..=1.0).contains(&self.noise_threshold) {
            return Err(ArenaError::InvalidConfig {
                field: "noise_threshold",
                reason: format!("must lie in [0, 1], got {}", self.noise_threshold),
            });
        }
        if !self.noise_offset_y.is_finite() {
            return Err(ArenaError::InvalidConfig {
                field: "noise_offset_y",
                reason: "must be finite".into(),
            });
        }
        if self.noise_offset_min >= self.noise_offset_max {
            return Err(ArenaError::InvalidConfig {
                field: "noise_offset_min",
                reason: format!(
                    "range {}..{} is empty",
                    self.noise_offset_min, self.noise_offset_max
                ),
            });
        }
        self.power_catalog.validate()?;
        if self.power_increment_per_wave == 0 {
            return Err(ArenaError::Unaffordable(
                "power_increment_per_wave is 0, the budget never grows".into(),
            ));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> ArenaResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ArenaError::InvalidConfig {
            field,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}
