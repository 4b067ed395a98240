//! Simulation turn counter.
//!
//! A turn is one synchronous step in which every eligible ant advances at
//! most one hop.  All moves within a turn are computed and applied as an
//! atomic batch, so `Turn` is the only unit of time the engine knows about.
//! Using an integer counter keeps all schedule arithmetic exact and
//! comparisons O(1).

use std::fmt;

/// An absolute simulation turn counter.
///
/// Turn 0 is "before anything moved"; the first batch of moves happens on
/// turn 1.  Stored as `u64` so the projected-turn arithmetic
/// (`ant_count + path_hops - 1`) can never overflow.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u64);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// Return the turn `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Turn {
        Turn(self.0 + n)
    }
}

impl std::ops::Add<u64> for Turn {
    type Output = Turn;
    #[inline]
    fn add(self, rhs: u64) -> Turn {
        Turn(self.0 + rhs)
    }
}

impl std::ops::Sub for Turn {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Turn) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "turn {}", self.0)
    }
}
