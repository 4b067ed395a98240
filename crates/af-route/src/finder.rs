//! Breadth-first path discovery.
//!
//! Two searches live here:
//!
//! - [`shortest_path`] / [`shortest_residual`]: plain BFS from start to end,
//!   optionally treating claimed rooms and tunnels as absent.  Ties between
//!   equal-distance routes resolve by adjacency enumeration order, which the
//!   graph fixes to tunnel declaration order — the search is deterministic.
//! - [`SimplePaths`]: lazy breadth-first enumeration of every simple path
//!   from start to end.  Each queue entry owns its full room sequence, so a
//!   room consumed on one branch stays explorable on sibling branches; that
//!   is what lets the selector discover multiple disjoint routes instead of
//!   a single spanning tree.  The iterator is finite and restartable
//!   (construct a new one to restart).
//!
//! Tunnel blocking exists for the selector: a selected path claims its
//! interior rooms *and* its tunnels.  Room claims alone would let a direct
//! start-end tunnel — which has no interior — be selected twice.

use std::collections::VecDeque;

use af_core::{RoomId, SolveConfig};
use af_graph::FarmGraph;

use crate::path::Path;
use crate::{RouteError, RouteResult};

/// Claimed rooms and tunnels, treated as absent by the searches.
#[derive(Clone)]
pub(crate) struct Residual {
    pub rooms:   Vec<bool>,
    pub tunnels: Vec<bool>,
}

impl Residual {
    pub fn all_clear(graph: &FarmGraph) -> Self {
        Self {
            rooms:   vec![false; graph.room_count()],
            tunnels: vec![false; graph.tunnel_count()],
        }
    }

    /// Claim every interior room and every tunnel of `path`.
    pub fn claim(&mut self, graph: &FarmGraph, path: &Path) {
        for &room in path.interior() {
            self.rooms[room.index()] = true;
        }
        for pair in path.rooms().windows(2) {
            if let Some(tunnel) = graph.tunnel_between(pair[0], pair[1]) {
                self.tunnels[tunnel.index()] = true;
            }
        }
    }
}

// ── Shortest path ─────────────────────────────────────────────────────────────

/// BFS shortest path from start to end over the full graph.
///
/// Returns [`RouteError::NoRoute`] if the end room is unreachable.
pub fn shortest_path(graph: &FarmGraph) -> RouteResult<Path> {
    shortest_residual(graph, &Residual::all_clear(graph)).ok_or(RouteError::NoRoute {
        from: graph.start(),
        to:   graph.end(),
    })
}

/// BFS shortest path over the residual graph.  Callers never claim the
/// terminal rooms.
pub(crate) fn shortest_residual(graph: &FarmGraph, residual: &Residual) -> Option<Path> {
    let start = graph.start();
    let end   = graph.end();

    // prev[v] = room we reached v from; INVALID for unreached rooms.
    let mut prev    = vec![RoomId::INVALID; graph.room_count()];
    let mut visited = vec![false; graph.room_count()];
    visited[start.index()] = true;

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(room) = queue.pop_front() {
        if room == end {
            return Some(reconstruct(&prev, start, end));
        }
        for (next, tunnel) in graph.adjacency(room) {
            if visited[next.index()]
                || residual.rooms[next.index()]
                || residual.tunnels[tunnel.index()]
            {
                continue;
            }
            visited[next.index()] = true;
            prev[next.index()] = room;
            queue.push_back(next);
        }
    }
    None
}

fn reconstruct(prev: &[RoomId], start: RoomId, end: RoomId) -> Path {
    let mut rooms = vec![end];
    let mut cur = end;
    while cur != start {
        cur = prev[cur.index()];
        rooms.push(cur);
    }
    rooms.reverse();
    Path::from_rooms(rooms)
}

// ── Simple-path enumeration ───────────────────────────────────────────────────

/// Lazy breadth-first enumeration of every simple path from start to end,
/// shortest first.
///
/// The queue holds partial paths; extending a partial path copies its room
/// sequence, so each branch tracks its own visited set (membership is a scan
/// of the sequence — paths are short by construction).
///
/// [`SolveConfig::max_path_rooms`] bounds the rooms per path.  The bound is
/// a performance safety valve against combinatorial blow-up on dense graphs,
/// not a correctness rule: on graphs small enough to enumerate fully it
/// never changes the result.  Paths over the bound are discarded whole.
pub struct SimplePaths<'a> {
    graph:     &'a FarmGraph,
    residual:  Residual,
    queue:     VecDeque<Vec<RoomId>>,
    max_rooms: Option<usize>,
}

impl<'a> SimplePaths<'a> {
    /// Enumerate over the full graph.
    pub fn new(graph: &'a FarmGraph, config: &SolveConfig) -> Self {
        Self::with_residual(graph, Residual::all_clear(graph), config)
    }

    /// Enumerate over the residual graph (claimed rooms and tunnels absent).
    pub(crate) fn with_residual(
        graph:    &'a FarmGraph,
        residual: Residual,
        config:   &SolveConfig,
    ) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(vec![graph.start()]);
        Self {
            graph,
            residual,
            queue,
            max_rooms: config.max_path_rooms,
        }
    }
}

impl Iterator for SimplePaths<'_> {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        let end = self.graph.end();
        while let Some(partial) = self.queue.pop_front() {
            let last = *partial.last().unwrap_or(&RoomId::INVALID);
            if last == end {
                return Some(Path::from_rooms(partial));
            }
            if let Some(max) = self.max_rooms
                && partial.len() >= max
            {
                // Extending would exceed the room bound; discard the branch.
                continue;
            }
            for (next, tunnel) in self.graph.adjacency(last) {
                if self.residual.rooms[next.index()]
                    || self.residual.tunnels[tunnel.index()]
                    || partial.contains(&next)
                {
                    continue;
                }
                let mut extended = Vec::with_capacity(partial.len() + 1);
                extended.extend_from_slice(&partial);
                extended.push(next);
                self.queue.push_back(extended);
            }
        }
        None
    }
}
