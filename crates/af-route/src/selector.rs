//! Disjoint path-set selection.
//!
//! Shortest-augmenting selection: grow the set one shortest residual path at
//! a time, stopping when the projected turn count for the requested ant
//! count stops improving.  Every selected path claims its interior rooms and
//! its tunnels in the residual graph (the terminal rooms stay shared), so
//! the result is pairwise room-disjoint by construction.

use af_core::SolveConfig;
use af_graph::FarmGraph;

use crate::finder::{shortest_residual, Residual, SimplePaths};
use crate::path::{completion_turn, Path, PathSet};
use crate::{RouteError, RouteResult};

/// Select a room-disjoint path set that minimizes the projected number of
/// turns to move `ants` ants.
///
/// Returns [`RouteError::NoRoute`] when the end room is unreachable from the
/// start room — routing is required even for `ants == 0`, because a farm
/// with no start-to-end route is invalid for simulation.
///
/// Guarantees on success:
/// - at least one path;
/// - paths sorted by ascending hop count;
/// - no interior room appears in two paths;
/// - deterministic for identical inputs (BFS order, overlap scoring, and
///   enumeration order all derive from tunnel declaration order).
pub fn select_paths(graph: &FarmGraph, ants: u32, config: &SolveConfig) -> RouteResult<PathSet> {
    let mut residual = Residual::all_clear(graph);
    let mut chosen: Vec<Path> = Vec::new();
    let mut chosen_hops: Vec<u64> = Vec::new();
    let mut best_estimate: Option<u64> = None;

    while let Some(candidate) = best_candidate(graph, &residual, config) {
        // Projected turns if this candidate joined the set.
        let mut trial_hops = chosen_hops.clone();
        trial_hops.push(candidate.hops() as u64);
        trial_hops.sort_unstable();
        let estimate = completion_turn(&trial_hops, ants);

        if let Some(previous) = best_estimate
            && estimate >= previous
        {
            // One more path no longer helps; discard the candidate and stop.
            break;
        }
        best_estimate = Some(estimate);

        residual.claim(graph, &candidate);
        chosen_hops = trial_hops;
        chosen.push(candidate);
    }

    if chosen.is_empty() {
        return Err(RouteError::NoRoute {
            from: graph.start(),
            to:   graph.end(),
        });
    }
    Ok(PathSet::new(chosen))
}

/// The best next path in the residual graph, or `None` if the end room is no
/// longer reachable.
///
/// The BFS result fixes the minimum length.  Among equal-length candidates
/// the winner is the one whose interior touches the fewest already-claimed
/// rooms (least overlap potential — it leaves the most future disjoint
/// routes open); remaining ties resolve to the first candidate in
/// enumeration order, and the BFS path *is* the first enumerated candidate.
fn best_candidate(graph: &FarmGraph, residual: &Residual, config: &SolveConfig) -> Option<Path> {
    let base = shortest_residual(graph, residual)?;
    let min_hops = base.hops();

    // The enumeration bound may be tighter than the BFS result; the BFS path
    // is then the only candidate worth considering.
    if let Some(max) = config.max_path_rooms
        && min_hops + 1 > max
    {
        return Some(base);
    }

    let mut best = base;
    let mut best_score = overlap_score(graph, residual, &best);

    let ties = SimplePaths::with_residual(graph, residual.clone(), config)
        .take_while(|p| p.hops() <= min_hops)
        .take(config.max_candidate_paths);

    for candidate in ties {
        let score = overlap_score(graph, residual, &candidate);
        if score < best_score {
            best = candidate;
            best_score = score;
        }
    }
    Some(best)
}

/// How many of the candidate's interior rooms sit next to a room already
/// claimed by a selected path.
fn overlap_score(graph: &FarmGraph, residual: &Residual, path: &Path) -> usize {
    path.interior()
        .iter()
        .filter(|&&room| {
            graph
                .neighbors(room)
                .iter()
                .any(|n| residual.rooms[n.index()])
        })
        .count()
}
