//! Simulation observer trait for progress reporting and schedule output.

use af_core::Turn;
use af_sched::AntMove;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at every turn boundary.
///
/// Both methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — move printer
///
/// ```rust,ignore
/// struct MovePrinter;
///
/// impl SimObserver for MovePrinter {
///     fn on_turn(&mut self, turn: Turn, moves: &[AntMove]) {
///         println!("{turn}: {} moves", moves.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per turn, after the move batch has been validated and
    /// applied.  Moves arrive sorted by ant id.
    fn on_turn(&mut self, _turn: Turn, _moves: &[AntMove]) {}

    /// Called once after the last ant reaches the end room.
    ///
    /// `total_turns` is [`Turn::ZERO`] when there were no ants to move.
    fn on_finish(&mut self, _total_turns: Turn) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want the turn-by-turn schedule.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
