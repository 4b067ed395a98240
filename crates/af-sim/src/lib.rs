//! `af-sim` — turn loop orchestrator for the rust_antfarm engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`builder`]  | `SimBuilder` — wires graph, paths, and schedule        |
//! | [`sim`]      | `Sim`, `SimReport` — the turn loop                     |
//! | [`observer`] | `SimObserver`, `NoopObserver`                          |
//! | [`error`]    | `SimError`, `SimResult<T>`                             |
//!
//! # Turn loop
//!
//! ```text
//! while ants remain short of the end room:
//!   ① Plan   — TurnPlanner emits this turn's move batch (sorted by ant id).
//!   ② Check  — every move is validated against the graph and the current
//!              occupancy: the hop must be a real tunnel, no tunnel may be
//!              crossed twice in one turn, and no interior room may end the
//!              turn holding two ants.
//!   ③ Apply  — positions and room occupancy are updated in one pass.
//!   ④ Notify — observer.on_turn(turn, &moves).
//! ```
//!
//! The occupancy checks are redundant with the disjointness the selector
//! guarantees; they exist so a scheduling bug surfaces as a
//! [`SimError::InvariantViolation`] instead of a silently malformed schedule.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use af_sim::{NoopObserver, SimBuilder};
//!
//! let (graph, ants) = af_graph::load_farm_path("farm.txt")?;
//! let mut sim = SimBuilder::new(&graph, ants).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("{} ants delivered in {}", report.ants_delivered, report.total_turns);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use af_sched::AntMove;
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, SimReport, SimState};
