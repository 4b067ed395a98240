//! Ant-to-path assignment.

use af_core::{AntId, Turn};
use af_route::PathSet;

use crate::{SchedError, SchedResult};

/// The result of distributing `ant_count` ants across a path set.
///
/// Assignment is greedy load balancing: ants are processed in id order, and
/// each goes to whichever path currently yields the smallest projected
/// completion turn if that ant were appended (`c_i + L_i` for a path with
/// `c_i` ants and `L_i` hops), ties toward the shortest path.  This is the
/// same policy [`PathSet::projected_turns`] models, so
/// [`total_turns`](Self::total_turns) always equals that projection.
#[derive(Debug, Clone)]
pub struct AntAssignment {
    /// Path index for each ant, indexed by zero-based `AntId`.
    path_of: Vec<usize>,
    /// Entry queue per path: ants in release order (ascending id — the order
    /// they were assigned).
    queues: Vec<Vec<AntId>>,
    /// Turn on which the last ant reaches the end room; zero for zero ants.
    total_turns: Turn,
}

impl AntAssignment {
    /// Distribute `ant_count` ants across `set`.
    ///
    /// Fails only when there are ants to move but no path to put them on.
    /// Zero ants over any set (even an empty one) is a valid, empty
    /// assignment.
    pub fn new(set: &PathSet, ant_count: u32) -> SchedResult<Self> {
        if set.is_empty() && ant_count > 0 {
            return Err(SchedError::EmptyPathSet { ants: ant_count });
        }

        let hops: Vec<u64> = set.iter().map(|p| p.hops() as u64).collect();
        let mut counts = vec![0u64; set.len()];
        let mut path_of = Vec::with_capacity(ant_count as usize);
        let mut queues: Vec<Vec<AntId>> = vec![Vec::new(); set.len()];

        for ant in 0..ant_count {
            // Appending to path i finishes on counts[i] + hops[i]; the set is
            // sorted ascending, so min_by_key's first-wins tie rule prefers
            // the shortest path.
            let best = (0..hops.len())
                .min_by_key(|&i| counts[i] + hops[i])
                .unwrap_or(0);
            counts[best] += 1;
            path_of.push(best);
            queues[best].push(AntId(ant));
        }

        let total_turns = Turn(counts
            .iter()
            .zip(&hops)
            .filter(|&(&c, _)| c > 0)
            .map(|(&c, &l)| c + l - 1)
            .max()
            .unwrap_or(0));

        Ok(Self { path_of, queues, total_turns })
    }

    /// Number of ants in the assignment.
    pub fn ant_count(&self) -> u32 {
        self.path_of.len() as u32
    }

    /// Index (into the path set) of the path `ant` travels.
    pub fn path_for(&self, ant: AntId) -> usize {
        self.path_of[ant.index()]
    }

    /// Ants assigned to path `path`, in release order.
    pub fn ants_on(&self, path: usize) -> &[AntId] {
        &self.queues[path]
    }

    /// Per-path entry queues, indexed like the path set.
    pub fn queues(&self) -> &[Vec<AntId>] {
        &self.queues
    }

    /// Projected completion turn of the busiest path (`max_i (c_i + L_i − 1)`);
    /// [`Turn::ZERO`] for zero ants.
    pub fn total_turns(&self) -> Turn {
        self.total_turns
    }
}
