//! `af-sched` — ant scheduling over a selected path set.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`assign`]  | `AntAssignment` — greedy load balancing of ants       |
//! | [`planner`] | `TurnPlanner`, `AntMove` — per-turn move generation   |
//! | [`error`]   | `SchedError`, `SchedResult<T>`                        |
//!
//! # Scheduling model
//!
//! Each path admits at most one new ant per turn; once released, an ant
//! advances exactly one hop every turn until it reaches the end room.
//! Because the paths are pairwise room-disjoint and entry is throttled to
//! one per turn, no two ants can ever contend for the same interior room or
//! tunnel — the planner never has to stall anyone mid-path.

pub mod assign;
pub mod error;
pub mod planner;

#[cfg(test)]
mod tests;

pub use assign::AntAssignment;
pub use error::{SchedError, SchedResult};
pub use planner::{AntMove, TurnPlanner};
