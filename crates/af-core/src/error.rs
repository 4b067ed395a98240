//! Configuration error type.
//!
//! Sub-crates define their own error enums (`GraphError`, `RouteError`, …)
//! and convert between them via `From` impls where a failure crosses a crate
//! boundary.  Only configuration validation lives here because `SolveConfig`
//! does.

use thiserror::Error;

/// Errors from [`SolveConfig::validate`](crate::SolveConfig::validate).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_path_rooms is {0}, but a path needs at least 2 rooms")]
    PathBoundTooSmall(usize),

    #[error("max_candidate_paths must be at least 1")]
    ZeroCandidateCap,
}
