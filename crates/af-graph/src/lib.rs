//! `af-graph` — validated farm graph and text-format loader.
//!
//! # Crate layout
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`graph`]  | `FarmGraph` (flat arena + CSR adjacency), `FarmGraphBuilder` |
//! | [`loader`] | `load_farm` / `load_farm_path` (farm description text) |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                         |
//!
//! The graph is built once — by the builder or the loader — and is immutable
//! afterward.  Every structural rule (unique room names, deduplicated
//! undirected tunnels, exactly one start and one end) is enforced at
//! construction time, so downstream crates can assume a well-formed graph.

pub mod error;
pub mod graph;
pub mod loader;


pub use error::{GraphError, GraphResult};
pub use graph::{FarmGraph, FarmGraphBuilder};
pub use loader::{load_farm, load_farm_path};
