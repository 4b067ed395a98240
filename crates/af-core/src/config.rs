//! Solver configuration.
//!
//! The path search is exact on small graphs; the two bounds here exist only
//! to keep the simple-path enumeration from exploding combinatorially on
//! dense inputs.  They are performance safety valves, not correctness rules:
//! tightening them can change which path set is selected on large graphs,
//! but on graphs small enough to enumerate fully the defaults never bite.

use crate::error::ConfigError;

/// Tunable bounds for path discovery and selection.
///
/// Typically built from CLI flags by the application and passed to the
/// simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveConfig {
    /// Maximum rooms per candidate path (terminals included) during simple-
    /// path enumeration.  `None` = unbounded.  Paths exceeding the bound are
    /// discarded, never truncated.
    pub max_path_rooms: Option<usize>,

    /// Maximum equal-length candidates examined per selection round when
    /// tie-breaking.  Candidates beyond the cap fall back to first-found
    /// enumeration order.
    pub max_candidate_paths: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_path_rooms:      None,
            max_candidate_paths: 512,
        }
    }
}

impl SolveConfig {
    /// Check that the bounds are usable before any search begins.
    ///
    /// A path needs at least two rooms (start and end), so a smaller
    /// `max_path_rooms` would silently prune every path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(max) = self.max_path_rooms
            && max < 2
        {
            return Err(ConfigError::PathBoundTooSmall(max));
        }
        if self.max_candidate_paths == 0 {
            return Err(ConfigError::ZeroCandidateCap);
        }
        Ok(())
    }
}
