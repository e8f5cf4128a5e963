//! Error types for flowscope operations.
//!
//! The graph analysis functions themselves never fail: semantically
//! inconsistent input (cycles, dangling edges, empty collections) is absorbed
//! as graceful degradation and reported through return values. The errors
//! here cover the surrounding plumbing - scenario files that cannot be read
//! or parsed, and lookups by id that miss.

use std::io;
use thiserror::Error;

/// The error type for flowscope operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Scenario file could not be parsed.
    #[error("scenario parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// No scenario with the given id.
    #[error("scenario not found: {0}")]
    ScenarioNotFound(String),

    /// No node with the given id in the selected scenario.
    #[error("node not found: {0}")]
    NodeNotFound(String),
}

/// A specialized Result type for flowscope operations.
pub type Result<T> = std::result::Result<T, Error>;
