//! # connect-n-engine
//!
//! A generalized Connect-N board-game engine: pieces drop into columns and
//! stack under gravity, and the first player to align `win_condition` pieces
//! along a row, column, or diagonal wins.
//!
//! ## Design Principles
//!
//! 1. **Immutable snapshots**: Every [`Game`] value is immutable once
//!    returned. [`Game::play_column`] produces a new snapshot that shares all
//!    untouched substructure with its predecessor via `im` persistent
//!    collections, so cloning is O(1) and concurrent readers never race.
//!
//! 2. **Incremental win tracking**: Each drop updates a per-cell adjacency
//!    record ([`Subgraph`]) and an append-only connection log instead of
//!    rescanning the board. Connection indices are permanent handles; merged
//!    entries are superseded in place, never deleted.
//!
//! 3. **Deterministic search**: The alpha-beta move search draws all of its
//!    randomness from an injectable seeded RNG ([`SearchRng`]), so
//!    suggestions are reproducible under a fixed seed.
//!
//! ## Modules
//!
//! - `core`: Player identifiers and validated game settings
//! - `board`: Pieces, connections, the adjacency graph, and the `Game`
//!   state transition
//! - `search`: Depth-limited minimax with alpha-beta pruning and the static
//!   position heuristic

pub mod core;
pub mod board;
pub mod search;

// Re-export commonly used types
pub use crate::core::{PlayerId, Settings};

pub use crate::board::{
    Connection, ConnectionIndex, ConnectionType, DirectionMap, Game, Piece, PieceIndex, Subgraph,
};

pub use crate::search::{MoveSearch, SearchConfig, SearchRng, SuggestedMove};
