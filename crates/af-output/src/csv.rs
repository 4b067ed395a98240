//! CSV output backend.
//!
//! One `turn,ant,room` row per move, with a header row.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::writer::ScheduleWriter;
use crate::{MoveRow, OutputResult};

/// Writes the schedule as a flat CSV turn log.
pub struct CsvTurnWriter<W: Write> {
    out: Writer<W>,
    finished: bool,
}

impl CsvTurnWriter<File> {
    /// Create (or truncate) the log at `path` and write the header row.
    pub fn from_path(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvTurnWriter<W> {
    /// Wrap any sink and write the header row.
    pub fn from_writer(out: W) -> OutputResult<Self> {
        let mut out = Writer::from_writer(out);
        out.write_record(["turn", "ant", "room"])?;
        Ok(Self { out, finished: false })
    }

    /// Flush and unwrap the inner sink (e.g. to inspect a buffer in tests).
    pub fn into_inner(self) -> OutputResult<W> {
        self.out.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> ScheduleWriter for CsvTurnWriter<W> {
    fn write_turn(&mut self, rows: &[MoveRow]) -> OutputResult<()> {
        for row in rows {
            self.out.write_record(&[
                row.turn.to_string(),
                row.ant.to_string(),
                row.room.clone(),
            ])?;
        }
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
