//! Error type for construction-time failures.
//!
//! Only configuration loading and director construction can fail. Once a
//! director is running, every condition is handled locally.

use thiserror::Error;

/// Root error type for arena setup failures.
#[derive(Error, Debug)]
pub enum ArenaError {
    /// A configuration value is out of its valid range.
    #[error("invalid config value `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// The power catalog is empty or names a kind that cannot be priced.
    #[error("power catalog error: {0}")]
    Catalog(String),

    /// The budget can never afford any threat kind.
    #[error("no threat is ever affordable: {0}")]
    Unaffordable(String),

    /// World bounds or tile size reported by the host are unusable.
    #[error("invalid world bounds: {0}")]
    Bounds(String),

    /// Configuration JSON could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ArenaResult<T> = Result<T, ArenaError>;
