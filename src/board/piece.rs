//! Pieces and their permanent handles.
//!
//! Pieces live in the append-only `Game::pieces` sequence; a piece's
//! position in that sequence is its identity for the lifetime of the game.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Permanent handle to a piece: its index in the append-only piece log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceIndex(pub u32);

impl PieceIndex {
    /// Create a new piece index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index into `Game::pieces`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A played piece: where it sits and who played it. Immutable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    /// 0-based column index.
    pub column: usize,

    /// 0-based row index; row 0 is the bottom of the board.
    pub row: usize,

    /// The player who played the piece.
    pub player: PlayerId,
}

impl Piece {
    /// Sort key for connection ordering: ascending by row, then column.
    #[must_use]
    pub fn position_key(&self) -> (usize, usize) {
        (self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_index() {
        let idx = PieceIndex::new(3);
        assert_eq!(idx.index(), 3);
    }

    #[test]
    fn test_position_key_orders_row_first() {
        let low = Piece { column: 6, row: 0, player: PlayerId::new(0) };
        let high = Piece { column: 0, row: 1, player: PlayerId::new(0) };
        assert!(low.position_key() < high.position_key());
    }

    #[test]
    fn test_serialization() {
        let piece = Piece { column: 2, row: 5, player: PlayerId::new(1) };
        let json = serde_json::to_string(&piece).unwrap();
        let deserialized: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(piece, deserialized);
    }
}
