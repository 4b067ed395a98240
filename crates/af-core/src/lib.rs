//! `af-core` — foundational types for the `rust_antfarm` routing engine.
//!
//! This crate is a dependency of every other `af-*` crate.  It intentionally
//! has no `af-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `RoomId`, `TunnelId`, `AntId`                     |
//! | [`grid`]   | `GridPoint` (display-only room coordinates)      |
//! | [`turn`]   | `Turn` counter                                    |
//! | [`config`] | `SolveConfig` (search pruning bounds)             |
//! | [`error`]  | `ConfigError`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod grid;
pub mod ids;
pub mod turn;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SolveConfig;
pub use error::ConfigError;
pub use grid::GridPoint;
pub use ids::{AntId, RoomId, TunnelId};
pub use turn::Turn;
