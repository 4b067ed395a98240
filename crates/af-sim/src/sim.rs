//! The `Sim` struct and its turn loop.

use af_core::{AntId, RoomId, Turn};
use af_graph::FarmGraph;
use af_sched::{AntMove, TurnPlanner};
use rustc_hash::FxHashSet;

use crate::{SimError, SimObserver, SimResult};

/// Where the run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    NotStarted,
    Running,
    Finished,
}

/// Summary returned by [`Sim::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimReport {
    /// Turn on which the last ant reached the end room; zero for zero ants.
    pub total_turns: Turn,
    /// Ants that reached the end room (always the full colony on success).
    pub ants_delivered: u32,
}

/// The simulation runner.
///
/// Holds the colony's positions and per-room occupancy, and replays the
/// [`TurnPlanner`]'s schedule one turn at a time, validating every batch
/// against the graph before applying it:
///
/// - each move must follow a real tunnel from the ant's current room;
/// - no tunnel is crossed twice in the same turn;
/// - no interior room ends a turn holding more than one ant (a room being
///   vacated this turn counts as free — moves are simultaneous).
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<'a> {
    graph: &'a FarmGraph,
    planner: TurnPlanner,
    state: SimState,
    /// Current room of each ant, indexed by zero-based `AntId`.
    positions: Vec<RoomId>,
    /// Which ant occupies each room; start and end are never tracked.
    room_holder: Vec<Option<AntId>>,
    delivered: u32,
}

impl<'a> Sim<'a> {
    pub(crate) fn new(graph: &'a FarmGraph, planner: TurnPlanner, ant_count: u32) -> Self {
        Self {
            graph,
            planner,
            state: SimState::NotStarted,
            positions: vec![graph.start(); ant_count as usize],
            room_holder: vec![None; graph.room_count()],
            delivered: 0,
        }
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    /// Ants that have reached the end room so far.
    pub fn ants_delivered(&self) -> u32 {
        self.delivered
    }

    /// Current room of `ant`.
    pub fn position(&self, ant: AntId) -> RoomId {
        self.positions[ant.index()]
    }

    // ── Public API ────────────────────────────────────────────────────────────

    /// Advance one turn: validate and apply the next move batch.
    ///
    /// Returns `Ok(None)` once every ant has been delivered (and on every
    /// call thereafter).
    pub fn step(&mut self) -> SimResult<Option<(Turn, Vec<AntMove>)>> {
        if self.state == SimState::Finished {
            return Ok(None);
        }

        let Some((turn, moves)) = self.planner.next_turn() else {
            self.state = SimState::Finished;
            return Ok(None);
        };
        self.state = SimState::Running;

        if moves.is_empty() {
            let waiting = self.positions.len() as u32 - self.delivered;
            return Err(SimError::Deadlock { turn, waiting });
        }

        self.check_batch(turn, &moves)?;
        self.apply_batch(&moves);

        if self.planner.is_done() {
            self.state = SimState::Finished;
        }
        Ok(Some((turn, moves)))
    }

    /// Run to completion, invoking `observer` at every turn boundary.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        let mut total = Turn::ZERO;
        while let Some((turn, moves)) = self.step()? {
            observer.on_turn(turn, &moves);
            total = turn;
        }
        observer.on_finish(total);
        Ok(SimReport {
            total_turns: total,
            ants_delivered: self.delivered,
        })
    }

    // ── Batch validation ──────────────────────────────────────────────────────

    fn check_batch(&self, turn: Turn, moves: &[AntMove]) -> SimResult<()> {
        let violation = |detail: String| SimError::InvariantViolation { turn, detail };

        let moving: FxHashSet<AntId> = moves.iter().map(|m| m.ant).collect();
        if moving.len() != moves.len() {
            return Err(violation("an ant moved twice in one turn".into()));
        }

        let mut tunnels_used = FxHashSet::default();
        let mut dests_taken = FxHashSet::default();

        for m in moves {
            let from = self.positions[m.ant.index()];

            let Some(tunnel) = self.graph.tunnel_between(from, m.dest) else {
                return Err(violation(format!(
                    "{} stepped from {} to {} with no tunnel between them",
                    m.ant,
                    self.graph.room_name(from),
                    self.graph.room_name(m.dest),
                )));
            };
            if !tunnels_used.insert(tunnel) {
                return Err(violation(format!(
                    "tunnel {}-{} crossed twice in one turn",
                    self.graph.room_name(from),
                    self.graph.room_name(m.dest),
                )));
            }

            if self.graph.is_terminal(m.dest) {
                continue; // start and end have unlimited capacity
            }
            if !dests_taken.insert(m.dest) {
                return Err(violation(format!(
                    "two ants entered {} in one turn",
                    self.graph.room_name(m.dest),
                )));
            }
            // An occupied room is fine only if its holder leaves this turn.
            if let Some(holder) = self.room_holder[m.dest.index()] {
                if !moving.contains(&holder) {
                    return Err(violation(format!(
                        "{} entered {} while {} was still there",
                        m.ant,
                        self.graph.room_name(m.dest),
                        holder,
                    )));
                }
            }
        }
        Ok(())
    }

    /// Clear all vacated rooms, then land every ant.  Two passes, so an ant
    /// moving into a simultaneously vacated room never clobbers occupancy.
    fn apply_batch(&mut self, moves: &[AntMove]) {
        for m in moves {
            let from = self.positions[m.ant.index()];
            if !self.graph.is_terminal(from) {
                self.room_holder[from.index()] = None;
            }
        }
        for m in moves {
            self.positions[m.ant.index()] = m.dest;
            if m.dest == self.graph.end() {
                self.delivered += 1;
            } else if !self.graph.is_terminal(m.dest) {
                self.room_holder[m.dest.index()] = Some(m.ant);
            }
        }
    }
}
