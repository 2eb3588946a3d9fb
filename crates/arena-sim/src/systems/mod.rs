//! Systems run on the host world once per session tick.

pub mod cleanup;
