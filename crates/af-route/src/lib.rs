//! `af-route` — path discovery and disjoint path-set selection.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`path`]     | `Path`, `PathSet` (and the projected-turn formula)      |
//! | [`finder`]   | `shortest_path` (BFS), `SimplePaths` lazy enumeration   |
//! | [`selector`] | `select_paths` — shortest-augmenting disjoint selection |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                          |
//!
//! # Algorithm
//!
//! The selector grows a room-disjoint path set one shortest residual path at
//! a time (augmentation in the Edmonds–Karp spirit, but the objective is the
//! projected turn count for N ants, not flow value).  It stops as soon as an
//! additional path would not lower the projection.  This is the single
//! canonical selection algorithm; there is deliberately no
//! enumerate-everything-then-filter fallback.

pub mod error;
pub mod finder;
pub mod path;
pub mod selector;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use finder::{shortest_path, SimplePaths};
pub use path::{Path, PathSet};
pub use selector::select_paths;
