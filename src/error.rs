//! Error types
//!
//! Simulation queries never fail on their own; a [`SimError`] always means
//! the caller broke a contract (e.g. passed a stale actor handle).

use thiserror::Error;

use crate::sim::ActorId;

/// Contract violations reported by the simulation core
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// The handle does not name a live actor of this level
    #[error("{0} is not a live actor of this level")]
    NotAnActor(ActorId),
}

/// Failures while loading or using a [`crate::GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("no level at index {index} (config has {count})")]
    NoSuchLevel { index: usize, count: usize },
}
