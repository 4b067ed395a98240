//! Per-turn move generation.

use af_core::{AntId, RoomId, Turn};
use af_route::PathSet;

use crate::assign::AntAssignment;

/// One ant advancing one hop: applied simultaneously with every other move
/// of the same turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AntMove {
    pub ant:  AntId,
    pub dest: RoomId,
}

/// Generates the move batch for each successive turn.
///
/// Owns its working state (a cursor into each path's entry queue and each
/// ant's index along its path), so one planner drives exactly one run;
/// construct a new one to replay.
///
/// Rules per turn, per path:
/// - every previously released, unfinished ant advances exactly one hop;
/// - then at most one queued ant is released onto the path's first hop.
///
/// Move batches come out sorted by ant id.
pub struct TurnPlanner {
    /// Room sequence per path (start first, end last).
    paths: Vec<Vec<RoomId>>,
    /// Entry queue per path, ascending ant id.
    queues: Vec<Vec<AntId>>,
    /// How many ants each path has released so far.
    released: Vec<usize>,
    /// Per-ant index along its path; 0 = still waiting in the start room.
    position: Vec<usize>,
    finished: u32,
    ant_count: u32,
    turn: Turn,
}

impl TurnPlanner {
    pub fn new(set: &PathSet, assignment: &AntAssignment) -> Self {
        let paths: Vec<Vec<RoomId>> = set.iter().map(|p| p.rooms().to_vec()).collect();
        let queues = assignment.queues().to_vec();
        let released = vec![0; paths.len()];
        let position = vec![0; assignment.ant_count() as usize];
        Self {
            paths,
            queues,
            released,
            position,
            finished: 0,
            ant_count: assignment.ant_count(),
            turn: Turn::ZERO,
        }
    }

    /// `true` once every ant has reached the end room (immediately true for
    /// zero ants).
    pub fn is_done(&self) -> bool {
        self.finished == self.ant_count
    }

    /// The last generated turn; [`Turn::ZERO`] before the first.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Generate the next turn's move batch, or `None` once done.
    ///
    /// The batch is never empty: as long as an ant is short of the end room,
    /// either it advances or its path releases it this turn.
    pub fn next_turn(&mut self) -> Option<(Turn, Vec<AntMove>)> {
        if self.is_done() {
            return None;
        }
        self.turn = self.turn.offset(1);
        let mut moves = Vec::new();

        for (path_idx, rooms) in self.paths.iter().enumerate() {
            let last_hop = rooms.len() - 1;
            let queue = &self.queues[path_idx];

            // Advance everyone already on the path.
            for &ant in &queue[..self.released[path_idx]] {
                let at = self.position[ant.index()];
                if at == last_hop {
                    continue; // already delivered
                }
                let next = at + 1;
                self.position[ant.index()] = next;
                moves.push(AntMove { ant, dest: rooms[next] });
                if next == last_hop {
                    self.finished += 1;
                }
            }

            // Release at most one new ant onto the path.
            if self.released[path_idx] < queue.len() {
                let ant = queue[self.released[path_idx]];
                self.released[path_idx] += 1;
                self.position[ant.index()] = 1;
                moves.push(AntMove { ant, dest: rooms[1] });
                if last_hop == 1 {
                    self.finished += 1;
                }
            }
        }

        moves.sort_by_key(|m| m.ant);
        Some((self.turn, moves))
    }
}
