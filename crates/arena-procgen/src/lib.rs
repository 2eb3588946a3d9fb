//! Procedural wave composition for the arena.
//!
//! Power-budgeted roster selection and retry-bounded placement of
//! spawned objects onto classified grid cells. Pure functions of their
//! inputs plus a caller-supplied RNG; no ECS or host dependency.

pub use arena_core as core;

pub mod budget;
pub mod placement;

pub use budget::{Roster, SpawnBudgeter};
pub use placement::{PlacementPlanner, Selection};
