//! Routing error type.

use thiserror::Error;

use af_core::RoomId;

/// Errors produced by `af-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: RoomId, to: RoomId },
}

pub type RouteResult<T> = Result<T, RouteError>;
