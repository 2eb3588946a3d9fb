//! Core types and definitions for the arena wave generator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity kinds, grid coordinates, configuration, errors, events and
//! director snapshots. It has no dependency on any runtime or host engine.

pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use error::{ArenaError, ArenaResult};

#[cfg(test)]
mod tests;
