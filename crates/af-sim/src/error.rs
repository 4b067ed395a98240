use af_core::Turn;
use af_route::RouteError;
use af_sched::SchedError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("path selection failed: {0}")]
    Route(#[from] RouteError),

    #[error("scheduling failed: {0}")]
    Sched(#[from] SchedError),

    #[error("no ant could move on {turn} with {waiting} still short of the end")]
    Deadlock { turn: Turn, waiting: u32 },

    #[error("schedule invariant violated on {turn}: {detail}")]
    InvariantViolation { turn: Turn, detail: String },
}

pub type SimResult<T> = Result<T, SimError>;
