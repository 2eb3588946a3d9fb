//! Power budget allocation: which threats, and how many, the next wave gets.
//!
//! The running budget grows by a fixed increment every wave. One unit of the
//! strongest affordable threat is bought first, then random affordable
//! threats until nothing more fits. Whatever is left (always less than the
//! cheapest threat) stays in the budget for the next wave.

use rand::Rng;
use serde::{Deserialize, Serialize};

use arena_core::config::PowerCatalog;
use arena_core::enums::EntityKind;
use arena_core::types::KindCounts;

/// Pending spawn counts for the upcoming wave.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    counts: KindCounts,
}

impl Roster {
    pub fn count(&self, kind: EntityKind) -> u32 {
        self.counts[kind]
    }

    pub fn add(&mut self, kind: EntityKind, n: u32) {
        self.counts[kind] += n;
    }

    /// Remove and return the pending count for a kind.
    pub fn take(&mut self, kind: EntityKind) -> u32 {
        std::mem::take(&mut self.counts[kind])
    }

    pub fn total(&self) -> u32 {
        self.counts.total()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn counts(&self) -> &KindCounts {
        &self.counts
    }

    /// Power the roster would cost if every unit were bought.
    pub fn cost(&self, catalog: &PowerCatalog) -> u32 {
        self.counts
            .iter()
            .map(|(kind, n)| catalog.cost(kind) * n)
            .sum()
    }
}

/// Spends a running power budget against a price catalog.
#[derive(Debug, Clone, Copy)]
pub struct SpawnBudgeter<'a> {
    catalog: &'a PowerCatalog,
    increment: u32,
}

impl<'a> SpawnBudgeter<'a> {
    pub fn new(catalog: &'a PowerCatalog, increment: u32) -> Self {
        Self { catalog, increment }
    }

    /// Grow `budget` by one wave's increment, spend it, and fold in survivors.
    ///
    /// `carried_over` holds the threats still alive from the previous wave;
    /// they are added to the roster free of charge. The caller owns the
    /// registry and clears its lists once the roster exists.
    pub fn compute_roster<R: Rng + ?Sized>(
        &self,
        carried_over: &KindCounts,
        budget: &mut u32,
        rng: &mut R,
    ) -> Roster {
        *budget += self.increment;
        let mut roster = self.spend(budget, rng);
        for kind in EntityKind::THREATS {
            roster.add(kind, carried_over[kind]);
        }
        roster
    }

    /// Greedy pick followed by random fill. Stops once `budget` is below
    /// the cheapest catalog cost.
    pub fn spend<R: Rng + ?Sized>(&self, budget: &mut u32, rng: &mut R) -> Roster {
        let mut roster = Roster::default();

        if let Some(strongest) = self.catalog.strongest_affordable(*budget) {
            roster.add(strongest.kind, 1);
            *budget -= strongest.cost;
        }

        // Drawing among affordable kinds only is the same distribution as
        // drawing among all kinds and skipping the ones that do not fit.
        loop {
            let affordable: Vec<_> = self.catalog.affordable(*budget).collect();
            if affordable.is_empty() {
                break;
            }
            let pick = affordable[rng.gen_range(0..affordable.len())];
            roster.add(pick.kind, 1);
            *budget -= pick.cost;
        }

        roster
    }
}
