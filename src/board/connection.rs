//! Connections: tracked runs of same-player pieces along one direction.
//!
//! ## Connection log
//!
//! Connections live in the append-only `Game::connections` log. A
//! [`ConnectionIndex`] is a permanent handle: entries are never deleted.
//! When a new piece bridges two runs of the same direction, both old entries
//! are superseded in place by forwarding entries and the merged run is
//! appended as a brand-new entry, so every previously issued index stays
//! stable.
//!
//! ## Subgraph
//!
//! Each occupied cell carries a [`Subgraph`] relating its piece to the
//! connections (by direction) the piece currently participates in. Only
//! cells that have received a piece have a subgraph.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::piece::PieceIndex;

/// The four directions a connection can form, named by their ASCII shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionType {
    /// `-`: left/right along a row.
    Horizontal,
    /// `|`: up/down along a column.
    Vertical,
    /// `/`: rising diagonal (column and row grow together).
    Diagonal,
    /// `\`: falling diagonal (column grows as row shrinks).
    AntiDiagonal,
}

impl ConnectionType {
    /// All four directions, in slot order.
    pub const ALL: [ConnectionType; 4] = [
        ConnectionType::Horizontal,
        ConnectionType::Vertical,
        ConnectionType::Diagonal,
        ConnectionType::AntiDiagonal,
    ];

    /// Slot index for [`DirectionMap`] storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// ASCII representation of the line this direction forms.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            ConnectionType::Horizontal => '-',
            ConnectionType::Vertical => '|',
            ConnectionType::Diagonal => '/',
            ConnectionType::AntiDiagonal => '\\',
        }
    }

    /// The step `(column, row)` from a run's lowest-sorted piece toward its
    /// highest-sorted piece.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            ConnectionType::Horizontal => (1, 0),
            ConnectionType::Vertical => (0, 1),
            ConnectionType::Diagonal => (1, 1),
            ConnectionType::AntiDiagonal => (-1, 1),
        }
    }
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The 7 neighbor offsets inspected when a piece lands, as
/// `(direction, column offset, row offset)`.
///
/// Straight up is omitted: a dropped piece is always the topmost piece in
/// its column, so the cell above it is empty.
pub(crate) const LINK_OFFSETS: [(ConnectionType, isize, isize); 7] = [
    (ConnectionType::Horizontal, -1, 0),   // left
    (ConnectionType::Horizontal, 1, 0),    // right
    (ConnectionType::Vertical, 0, -1),     // down
    (ConnectionType::Diagonal, -1, -1),    // left & down
    (ConnectionType::Diagonal, 1, 1),      // right & up
    (ConnectionType::AntiDiagonal, 1, -1), // right & down
    (ConnectionType::AntiDiagonal, -1, 1), // left & up
];

/// Permanent handle to an entry in the connection log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionIndex(pub u32);

impl ConnectionIndex {
    /// Create a new connection index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index into `Game::connections`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// An entry in the connection log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connection {
    /// A live run: piece indices sorted ascending by `(row, column)`,
    /// contiguously adjacent along one direction for one player. Always
    /// holds at least two pieces.
    Run(Vector<PieceIndex>),

    /// A merged-away entry, forwarding to the run that replaced it. No
    /// subgraph references it anymore; the entry only exists to keep later
    /// indices stable.
    Superseded(ConnectionIndex),
}

impl Connection {
    /// The run's pieces, or `None` for a superseded entry.
    #[must_use]
    pub fn run(&self) -> Option<&Vector<PieceIndex>> {
        match self {
            Connection::Run(pieces) => Some(pieces),
            Connection::Superseded(_) => None,
        }
    }

    /// Number of pieces in the run (0 for a superseded entry).
    #[must_use]
    pub fn len(&self) -> usize {
        self.run().map_or(0, Vector::len)
    }

    /// True for superseded entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-direction connection slots for one cell.
///
/// Fixed-size storage keyed by [`ConnectionType`]: a slot is occupied only
/// once the cell's piece has an adjacency in that direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionMap {
    slots: [Option<ConnectionIndex>; 4],
}

impl DirectionMap {
    /// An empty map: no direction recorded yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: [None; 4] }
    }

    /// The connection recorded for a direction, if any.
    #[must_use]
    pub fn get(&self, direction: ConnectionType) -> Option<ConnectionIndex> {
        self.slots[direction.index()]
    }

    /// Record (or retarget) the connection for a direction.
    pub fn set(&mut self, direction: ConnectionType, connection: ConnectionIndex) {
        self.slots[direction.index()] = Some(connection);
    }

    /// True if no direction has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterate over occupied `(direction, connection)` slots.
    pub fn iter(&self) -> impl Iterator<Item = (ConnectionType, ConnectionIndex)> + '_ {
        ConnectionType::ALL
            .into_iter()
            .filter_map(|ty| self.slots[ty.index()].map(|i| (ty, i)))
    }
}

/// Per-cell adjacency record: which piece sits here and which connections
/// (by direction) it currently participates in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subgraph {
    /// The piece occupying this cell.
    pub piece: PieceIndex,

    /// Connection handles by direction.
    pub connections: DirectionMap,
}

impl Subgraph {
    /// Create a subgraph for a freshly dropped piece with no adjacencies.
    #[must_use]
    pub fn new(piece: PieceIndex) -> Self {
        Self {
            piece,
            connections: DirectionMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_type_symbols() {
        assert_eq!(ConnectionType::Horizontal.symbol(), '-');
        assert_eq!(ConnectionType::Vertical.symbol(), '|');
        assert_eq!(ConnectionType::Diagonal.symbol(), '/');
        assert_eq!(ConnectionType::AntiDiagonal.symbol(), '\\');
    }

    #[test]
    fn test_connection_type_slots_are_distinct() {
        let indices: Vec<_> = ConnectionType::ALL.iter().map(|ty| ty.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_link_offsets_skip_straight_up() {
        assert_eq!(LINK_OFFSETS.len(), 7);
        assert!(!LINK_OFFSETS.iter().any(|&(_, dc, dr)| dc == 0 && dr == 1));
    }

    #[test]
    fn test_connection_run_accessors() {
        let run = Connection::Run(Vector::from(vec![PieceIndex::new(0), PieceIndex::new(1)]));
        assert_eq!(run.len(), 2);
        assert!(!run.is_empty());
        assert!(run.run().is_some());

        let superseded = Connection::Superseded(ConnectionIndex::new(5));
        assert_eq!(superseded.len(), 0);
        assert!(superseded.is_empty());
        assert!(superseded.run().is_none());
    }

    #[test]
    fn test_direction_map() {
        let mut map = DirectionMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get(ConnectionType::Horizontal), None);

        map.set(ConnectionType::Horizontal, ConnectionIndex::new(2));
        assert!(!map.is_empty());
        assert_eq!(map.get(ConnectionType::Horizontal), Some(ConnectionIndex::new(2)));
        assert_eq!(map.get(ConnectionType::Vertical), None);

        // Retarget an occupied slot
        map.set(ConnectionType::Horizontal, ConnectionIndex::new(7));
        assert_eq!(map.get(ConnectionType::Horizontal), Some(ConnectionIndex::new(7)));
    }

    #[test]
    fn test_direction_map_iter() {
        let mut map = DirectionMap::new();
        map.set(ConnectionType::Vertical, ConnectionIndex::new(1));
        map.set(ConnectionType::AntiDiagonal, ConnectionIndex::new(3));

        let entries: Vec<_> = map.iter().collect();
        assert_eq!(
            entries,
            vec![
                (ConnectionType::Vertical, ConnectionIndex::new(1)),
                (ConnectionType::AntiDiagonal, ConnectionIndex::new(3)),
            ]
        );
    }

    #[test]
    fn test_subgraph_new() {
        let subgraph = Subgraph::new(PieceIndex::new(9));
        assert_eq!(subgraph.piece, PieceIndex::new(9));
        assert!(subgraph.connections.is_empty());
    }

    #[test]
    fn test_serialization() {
        let run = Connection::Run(Vector::from(vec![PieceIndex::new(0), PieceIndex::new(3)]));
        let json = serde_json::to_string(&run).unwrap();
        let deserialized: Connection = serde_json::from_str(&json).unwrap();
        assert_eq!(run, deserialized);
    }
}
