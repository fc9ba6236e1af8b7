//! Board state: pieces, connections, the adjacency graph, and the single
//! `play_column` state transition.
//!
//! All board state is immutable once returned; `Game::play_column` builds a
//! new snapshot that shares untouched substructure with its predecessor.

pub mod piece;
pub mod connection;
pub mod game;
pub mod queries;

pub use piece::{Piece, PieceIndex};
pub use connection::{Connection, ConnectionIndex, ConnectionType, DirectionMap, Subgraph};
pub use game::Game;
pub use queries::{FIRST_COLUMN, FIRST_ROW};
