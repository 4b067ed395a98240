//! Canonical text backend.
//!
//! One line per turn, every move as `L<ant>-<room>` separated by single
//! spaces:
//!
//! ```text
//! L1-a L2-b
//! L1-end L2-end L3-a
//! ```

use std::io::Write;

use crate::writer::ScheduleWriter;
use crate::{MoveRow, OutputResult};

/// Writes the schedule as move lines to any [`Write`] sink.
pub struct TextWriter<W: Write> {
    out: W,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the inner sink (e.g. to inspect a buffer in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScheduleWriter for TextWriter<W> {
    fn write_turn(&mut self, rows: &[MoveRow]) -> OutputResult<()> {
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                self.out.write_all(b" ")?;
            }
            write!(self.out, "L{}-{}", row.ant, row.room)?;
        }
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
