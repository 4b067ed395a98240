//! Path and path-set types, plus the projected-turn formula.

use af_core::{RoomId, Turn};

// ── Path ──────────────────────────────────────────────────────────────────────

/// A simple (no repeated room) route from the start room to the end room.
///
/// Stored as the full ordered room sequence, terminals included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    rooms: Vec<RoomId>,
}

impl Path {
    /// Construct from an ordered room sequence.
    ///
    /// Callers (the finders in this crate) guarantee the sequence starts at
    /// start, ends at end, and repeats no room; the invariant is re-checked
    /// in debug builds only.
    pub(crate) fn from_rooms(rooms: Vec<RoomId>) -> Self {
        debug_assert!(rooms.len() >= 2);
        debug_assert!({
            let mut sorted = rooms.clone();
            sorted.sort_unstable();
            sorted.windows(2).all(|w| w[0] != w[1])
        });
        Self { rooms }
    }

    /// The full room sequence, start first, end last.
    #[inline]
    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Number of tunnel hops (= rooms − 1).
    #[inline]
    pub fn hops(&self) -> usize {
        self.rooms.len() - 1
    }

    /// The interior rooms — everything except the two terminals.  Empty for
    /// a direct start-end tunnel.
    #[inline]
    pub fn interior(&self) -> &[RoomId] {
        &self.rooms[1..self.rooms.len() - 1]
    }
}

// ── PathSet ───────────────────────────────────────────────────────────────────

/// A collection of paths that are pairwise room-disjoint except at the
/// terminals, ordered by ascending hop count.
#[derive(Debug, Clone, Default)]
pub struct PathSet {
    paths: Vec<Path>,
}

impl PathSet {
    /// Sort by ascending hop count (stable, so equal-length paths keep their
    /// selection order) and check interior disjointness in debug builds.
    pub(crate) fn new(mut paths: Vec<Path>) -> Self {
        paths.sort_by_key(Path::hops);
        debug_assert!(interiors_disjoint(&paths));
        Self { paths }
    }

    #[inline]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    /// Projected completion turn for `ants` ants distributed across this set.
    ///
    /// With `c_i` ants on path `i` of `L_i` hops, entering one per turn, the
    /// last ant enters on turn `c_i` and needs `L_i − 1` further hops, so the
    /// path finishes on turn `c_i + L_i − 1`.  Ants are distributed greedily:
    /// each goes to whichever path currently yields the smallest completion
    /// turn (ties toward the shortest path) — exactly the policy the
    /// scheduler applies, so this projection is exact, not a bound.
    ///
    /// Returns [`Turn::ZERO`] when `ants` is 0 or the set is empty.
    pub fn projected_turns(&self, ants: u32) -> Turn {
        Turn(completion_turn(&self.path_hops(), ants))
    }

    fn path_hops(&self) -> Vec<u64> {
        self.paths.iter().map(|p| p.hops() as u64).collect()
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;
    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

// ── Formula internals ─────────────────────────────────────────────────────────

/// Greedy completion turn for `ants` ants over paths with the given hop
/// counts (ascending).  Shared by `projected_turns` and the selector.
pub(crate) fn completion_turn(hops: &[u64], ants: u32) -> u64 {
    if ants == 0 || hops.is_empty() {
        return 0;
    }
    let mut counts = vec![0u64; hops.len()];
    for _ in 0..ants {
        // Appending an ant to path i makes it finish on counts[i]+1 + L_i - 1
        // = counts[i] + L_i.  Pick the minimum; ties go to the first (i.e.
        // shortest) path because hops are sorted ascending.
        let best = (0..hops.len())
            .min_by_key(|&i| counts[i] + hops[i])
            .unwrap_or(0);
        counts[best] += 1;
    }
    counts
        .iter()
        .zip(hops)
        .filter(|&(&c, _)| c > 0)
        .map(|(&c, &l)| c + l - 1)
        .max()
        .unwrap_or(0)
}

fn interiors_disjoint(paths: &[Path]) -> bool {
    let mut seen = std::collections::HashSet::new();
    paths
        .iter()
        .flat_map(|p| p.interior())
        .all(|room| seen.insert(*room))
}
