//! `ScheduleObserver<W>` — bridges `SimObserver` to a `ScheduleWriter`.

use af_core::Turn;
use af_graph::FarmGraph;
use af_sched::AntMove;
use af_sim::SimObserver;

use crate::row::MoveRow;
use crate::writer::ScheduleWriter;
use crate::OutputError;

/// A [`SimObserver`] that resolves room names and forwards every turn to a
/// [`ScheduleWriter`] backend (text or CSV).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct ScheduleObserver<'a, W: ScheduleWriter> {
    graph: &'a FarmGraph,
    writer: W,
    last_error: Option<OutputError>,
}

impl<'a, W: ScheduleWriter> ScheduleObserver<'a, W> {
    /// Create an observer backed by `writer`, resolving names against `graph`.
    pub fn new(graph: &'a FarmGraph, writer: W) -> Self {
        Self {
            graph,
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect its sink after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ScheduleWriter> SimObserver for ScheduleObserver<'_, W> {
    fn on_turn(&mut self, turn: Turn, moves: &[AntMove]) {
        let rows: Vec<MoveRow> = moves
            .iter()
            .map(|m| MoveRow {
                turn: turn.0,
                ant: m.ant.number(),
                room: self.graph.room_name(m.dest).to_owned(),
            })
            .collect();
        let result = self.writer.write_turn(&rows);
        self.store_err(result);
    }

    fn on_finish(&mut self, _total_turns: Turn) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
