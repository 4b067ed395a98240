//! Scheduling error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedError {
    #[error("cannot schedule {ants} ants over an empty path set")]
    EmptyPathSet { ants: u32 },
}

pub type SchedResult<T> = Result<T, SchedError>;
