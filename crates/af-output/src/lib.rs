//! `af-output` — schedule writers for the rust_antfarm engine.
//!
//! Two backends are provided:
//!
//! | Backend                     | Output                                          |
//! |-----------------------------|-------------------------------------------------|
//! | [`TextWriter`]              | one line per turn: `L1-a L2-b …`                |
//! | [`CsvTurnWriter`]           | `turn,ant,room` rows, one per move              |
//!
//! Both implement [`ScheduleWriter`] and are driven by [`ScheduleObserver`],
//! which implements `af_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use af_output::{ScheduleObserver, TextWriter};
//!
//! let stdout = std::io::stdout().lock();
//! let mut obs = ScheduleObserver::new(&graph, TextWriter::new(stdout));
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use csv::CsvTurnWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ScheduleObserver;
pub use row::MoveRow;
pub use text::TextWriter;
pub use writer::ScheduleWriter;
