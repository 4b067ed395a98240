//! Flat row type shared by all writer backends.

/// One ant's move during one turn, with the room name already resolved so
/// backends never need graph access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRow {
    /// Turn the move happened on (1-based; turn 0 never has moves).
    pub turn: u64,
    /// One-based ant number, as printed (`L1`, `L2`, …).
    pub ant: u32,
    /// Destination room name.
    pub room: String,
}
