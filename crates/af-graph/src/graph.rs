//! Farm graph representation and builder.
//!
//! # Data layout
//!
//! Rooms live in a flat arena indexed by `RoomId` (assignment order = input
//! declaration order).  Adjacency uses **Compressed Sparse Row (CSR)**
//! format: given a `RoomId r`, its neighbors occupy the slice:
//!
//! ```text
//! adj_room[ room_adj_start[r] .. room_adj_start[r+1] ]
//! ```
//!
//! Each undirected tunnel contributes one half-edge to both endpoints'
//! slices, and `adj_tunnel` maps every half-edge back to its `TunnelId` so
//! the simulator can check per-tunnel capacity without pair lookups.
//! Within a room's slice, neighbors appear in tunnel declaration order —
//! breadth-first search over this layout is therefore fully deterministic.
//!
//! # Validation
//!
//! All structural rules are enforced at construction time: duplicate room
//! names, tunnels naming undefined rooms, repeated tunnels (either
//! direction), self-tunnels, and missing or doubled terminals are rejected
//! by [`FarmGraphBuilder`] before a `FarmGraph` ever exists.

use rustc_hash::{FxHashMap, FxHashSet};

use af_core::{GridPoint, RoomId, TunnelId};

use crate::{GraphError, GraphResult};

// ── FarmGraph ─────────────────────────────────────────────────────────────────

/// Immutable room/tunnel graph with exactly one start and one end room.
///
/// Construct via [`FarmGraphBuilder`] or [`load_farm`](crate::load_farm);
/// read-only afterward.
#[derive(Debug)]
pub struct FarmGraph {
    // ── Room data (indexed by RoomId) ─────────────────────────────────────
    room_name: Vec<Box<str>>,
    room_pos:  Vec<GridPoint>,

    /// Reverse lookup from room name to its arena index.
    name_index: FxHashMap<Box<str>, RoomId>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// CSR row pointer.  Neighbors of room `r` are at half-edge slots
    /// `room_adj_start[r] .. room_adj_start[r+1]`.  Length = rooms + 1.
    room_adj_start: Vec<u32>,
    /// Neighbor room of each half-edge.
    adj_room: Vec<RoomId>,
    /// Undirected tunnel backing each half-edge.
    adj_tunnel: Vec<TunnelId>,

    // ── Tunnel data (indexed by TunnelId) ─────────────────────────────────
    tunnel_ends: Vec<(RoomId, RoomId)>,

    // ── Terminals ─────────────────────────────────────────────────────────
    start: RoomId,
    end:   RoomId,
}

impl FarmGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.room_name.len()
    }

    pub fn tunnel_count(&self) -> usize {
        self.tunnel_ends.len()
    }

    // ── Terminals ─────────────────────────────────────────────────────────

    #[inline]
    pub fn start(&self) -> RoomId {
        self.start
    }

    #[inline]
    pub fn end(&self) -> RoomId {
        self.end
    }

    /// `true` for the start and end rooms — the two rooms with no occupancy
    /// limit.
    #[inline]
    pub fn is_terminal(&self, room: RoomId) -> bool {
        room == self.start || room == self.end
    }

    // ── Room lookups ──────────────────────────────────────────────────────

    pub fn room_name(&self, room: RoomId) -> &str {
        &self.room_name[room.index()]
    }

    pub fn room_pos(&self, room: RoomId) -> GridPoint {
        self.room_pos[room.index()]
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.name_index.get(name).copied()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbors of `room` in tunnel declaration order.
    ///
    /// A contiguous slice — no heap allocation.
    #[inline]
    pub fn neighbors(&self, room: RoomId) -> &[RoomId] {
        let start = self.room_adj_start[room.index()] as usize;
        let end   = self.room_adj_start[room.index() + 1] as usize;
        &self.adj_room[start..end]
    }

    /// Iterator over `(neighbor, tunnel)` pairs for `room`, in tunnel
    /// declaration order.
    #[inline]
    pub fn adjacency(&self, room: RoomId) -> impl Iterator<Item = (RoomId, TunnelId)> + '_ {
        let start = self.room_adj_start[room.index()] as usize;
        let end   = self.room_adj_start[room.index() + 1] as usize;
        (start..end).map(|i| (self.adj_room[i], self.adj_tunnel[i]))
    }

    /// Degree of `room` (number of tunnels touching it).
    #[inline]
    pub fn degree(&self, room: RoomId) -> usize {
        self.neighbors(room).len()
    }

    // ── Tunnel lookups ────────────────────────────────────────────────────

    /// The tunnel connecting `a` and `b`, if one exists (direction-agnostic).
    ///
    /// Linear in `degree(a)` — fine for the per-turn capacity check, where
    /// every move is along exactly one of the mover's adjacent tunnels.
    pub fn tunnel_between(&self, a: RoomId, b: RoomId) -> Option<TunnelId> {
        self.adjacency(a)
            .find(|&(neighbor, _)| neighbor == b)
            .map(|(_, tunnel)| tunnel)
    }

    /// Endpoint pair of `tunnel`, in declaration order.
    pub fn tunnel_ends(&self, tunnel: TunnelId) -> (RoomId, RoomId) {
        self.tunnel_ends[tunnel.index()]
    }
}

// ── FarmGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`FarmGraph`] incrementally, then call [`build`](Self::build).
///
/// Rooms and tunnels are validated as they arrive; `build()` checks the
/// terminal rules and assembles the CSR arrays.
///
/// # Example
///
/// ```
/// use af_core::GridPoint;
/// use af_graph::FarmGraphBuilder;
///
/// let mut b = FarmGraphBuilder::new();
/// let s = b.add_room("s", GridPoint::new(0, 0)).unwrap();
/// let e = b.add_room("e", GridPoint::new(2, 0)).unwrap();
/// b.mark_start(s).unwrap();
/// b.mark_end(e).unwrap();
/// b.add_tunnel(s, e).unwrap();
/// let graph = b.build().unwrap();
/// assert_eq!(graph.room_count(), 2);
/// assert_eq!(graph.tunnel_count(), 1);
/// ```
pub struct FarmGraphBuilder {
    names:      Vec<Box<str>>,
    pos:        Vec<GridPoint>,
    name_index: FxHashMap<Box<str>, RoomId>,
    tunnels:    Vec<(RoomId, RoomId)>,
    /// Normalized (min, max) endpoint pairs for duplicate detection.
    tunnel_set: FxHashSet<(RoomId, RoomId)>,
    start:      Option<RoomId>,
    end:        Option<RoomId>,
}

impl FarmGraphBuilder {
    pub fn new() -> Self {
        Self {
            names:      Vec::new(),
            pos:        Vec::new(),
            name_index: FxHashMap::default(),
            tunnels:    Vec::new(),
            tunnel_set: FxHashSet::default(),
            start:      None,
            end:        None,
        }
    }

    /// Pre-allocate for the expected number of rooms and tunnels.
    pub fn with_capacity(rooms: usize, tunnels: usize) -> Self {
        Self {
            names:      Vec::with_capacity(rooms),
            pos:        Vec::with_capacity(rooms),
            name_index: FxHashMap::with_capacity_and_hasher(rooms, Default::default()),
            tunnels:    Vec::with_capacity(tunnels),
            tunnel_set: FxHashSet::with_capacity_and_hasher(tunnels, Default::default()),
            start:      None,
            end:        None,
        }
    }

    /// Add a room and return its `RoomId` (sequential from 0, in declaration
    /// order).  Rejects a name already present.
    pub fn add_room(&mut self, name: &str, pos: GridPoint) -> GraphResult<RoomId> {
        if self.name_index.contains_key(name) {
            return Err(GraphError::DuplicateRoom(name.to_owned()));
        }
        let id = RoomId(self.names.len() as u32);
        let boxed: Box<str> = name.into();
        self.name_index.insert(boxed.clone(), id);
        self.names.push(boxed);
        self.pos.push(pos);
        Ok(id)
    }

    /// Look up a previously added room by name.
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.name_index.get(name).copied()
    }

    pub fn room_count(&self) -> usize {
        self.names.len()
    }

    pub fn tunnel_count(&self) -> usize {
        self.tunnels.len()
    }

    /// Tag `room` as the start room.  At most one room may carry the tag.
    pub fn mark_start(&mut self, room: RoomId) -> GraphResult<()> {
        self.check_room(room)?;
        if self.start.is_some() {
            return Err(GraphError::DuplicateStart);
        }
        self.start = Some(room);
        Ok(())
    }

    /// Tag `room` as the end room.  At most one room may carry the tag.
    pub fn mark_end(&mut self, room: RoomId) -> GraphResult<()> {
        self.check_room(room)?;
        if self.end.is_some() {
            return Err(GraphError::DuplicateEnd);
        }
        self.end = Some(room);
        Ok(())
    }

    /// Add an **undirected** tunnel between `a` and `b`.
    ///
    /// Rejects self-tunnels and tunnels already present in either direction.
    pub fn add_tunnel(&mut self, a: RoomId, b: RoomId) -> GraphResult<TunnelId> {
        self.check_room(a)?;
        self.check_room(b)?;
        if a == b {
            return Err(GraphError::SelfTunnel(self.names[a.index()].to_string()));
        }
        let key = if a < b { (a, b) } else { (b, a) };
        if !self.tunnel_set.insert(key) {
            return Err(GraphError::DuplicateTunnel {
                a: self.names[a.index()].to_string(),
                b: self.names[b.index()].to_string(),
            });
        }
        let id = TunnelId(self.tunnels.len() as u32);
        self.tunnels.push((a, b));
        Ok(id)
    }

    fn check_room(&self, room: RoomId) -> GraphResult<()> {
        if room.index() >= self.names.len() {
            return Err(GraphError::RoomIdOutOfRange(room.0));
        }
        Ok(())
    }

    /// Consume the builder and produce a [`FarmGraph`].
    ///
    /// Requires exactly one start and one end room, and start ≠ end.
    pub fn build(self) -> GraphResult<FarmGraph> {
        let start = self.start.ok_or(GraphError::MissingStart)?;
        let end   = self.end.ok_or(GraphError::MissingEnd)?;
        if start == end {
            return Err(GraphError::StartEqualsEnd(
                self.names[start.index()].to_string(),
            ));
        }

        let room_count = self.names.len();
        let half_edges = self.tunnels.len() * 2;

        // CSR row pointer: count half-edges per room, then prefix-sum.
        let mut room_adj_start = vec![0u32; room_count + 1];
        for &(a, b) in &self.tunnels {
            room_adj_start[a.index() + 1] += 1;
            room_adj_start[b.index() + 1] += 1;
        }
        for i in 1..=room_count {
            room_adj_start[i] += room_adj_start[i - 1];
        }
        debug_assert_eq!(room_adj_start[room_count] as usize, half_edges);

        // Fill slots in tunnel declaration order so each room's neighbor
        // slice preserves input order (deterministic BFS tie-breaking).
        let mut adj_room   = vec![RoomId::INVALID; half_edges];
        let mut adj_tunnel = vec![TunnelId::INVALID; half_edges];
        let mut cursor: Vec<u32> = room_adj_start[..room_count].to_vec();
        for (t, &(a, b)) in self.tunnels.iter().enumerate() {
            let tunnel = TunnelId(t as u32);
            let slot = cursor[a.index()] as usize;
            adj_room[slot]   = b;
            adj_tunnel[slot] = tunnel;
            cursor[a.index()] += 1;

            let slot = cursor[b.index()] as usize;
            adj_room[slot]   = a;
            adj_tunnel[slot] = tunnel;
            cursor[b.index()] += 1;
        }

        Ok(FarmGraph {
            room_name: self.names,
            room_pos: self.pos,
            name_index: self.name_index,
            room_adj_start,
            adj_room,
            adj_tunnel,
            tunnel_ends: self.tunnels,
            start,
            end,
        })
    }
}

impl Default for FarmGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
