//! The `ScheduleWriter` trait implemented by all backend writers.

use crate::{MoveRow, OutputResult};

/// Trait implemented by the text and CSV writers.
///
/// The observer never sees these errors directly; it buffers them for
/// retrieval with [`ScheduleObserver::take_error`] after the run.
pub trait ScheduleWriter {
    /// Write one turn's move batch.  Every row carries the same turn number,
    /// and rows arrive in ascending ant order.
    fn write_turn(&mut self, rows: &[MoveRow]) -> OutputResult<()>;

    /// Flush the underlying sink.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
