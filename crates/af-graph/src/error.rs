//! Graph-construction error type.
//!
//! Every variant is a validation failure detected before any search begins;
//! construction fails fast and leaves no partial state behind.

use thiserror::Error;

/// Errors produced by `af-graph` during construction or loading.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("duplicate room name {0:?}")]
    DuplicateRoom(String),

    #[error("tunnel references undefined room {0:?}")]
    UndefinedRoom(String),

    #[error("room id {0} is out of range")]
    RoomIdOutOfRange(u32),

    #[error("duplicate tunnel {a}-{b}")]
    DuplicateTunnel { a: String, b: String },

    #[error("tunnel {0}-{0} links a room to itself")]
    SelfTunnel(String),

    #[error("no room marked ##start")]
    MissingStart,

    #[error("no room marked ##end")]
    MissingEnd,

    #[error("more than one room marked ##start")]
    DuplicateStart,

    #[error("more than one room marked ##end")]
    DuplicateEnd,

    #[error("room {0:?} is marked as both start and end")]
    StartEqualsEnd(String),

    #[error("parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
