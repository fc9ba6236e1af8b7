//! Game state and the `play_column` transition.
//!
//! ## Snapshots
//!
//! A `Game` is an immutable snapshot. `play_column` never mutates its
//! input; it clones the snapshot (O(1) via `im`), applies the drop to the
//! clone, and returns it. Untouched columns, pieces, and connections are
//! shared between the old and new snapshots.
//!
//! ## Incremental win tracking
//!
//! Instead of rescanning the board, each drop inspects at most 7 neighbor
//! cells and links the new piece into the per-direction connection runs
//! recorded on those cells. A run reaching `win_condition` pieces decides
//! the game.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Settings};

use super::connection::{
    Connection, ConnectionIndex, ConnectionType, Subgraph, LINK_OFFSETS,
};
use super::piece::{Piece, PieceIndex};

/// Full game state. Immutable once returned; advance with
/// [`Game::play_column`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// The settings the game was created from.
    pub settings: Settings,

    /// The player to make the next move.
    pub current_player: PlayerId,

    /// The winning player, once a run reaches `win_condition`.
    pub winner: Option<PlayerId>,

    /// True once a winner exists or no playable columns remain.
    pub over: bool,

    /// Columns that are not yet full, in board order.
    pub playable_columns: Vector<usize>,

    /// Append-only piece log, in play order. A piece's index here is its
    /// permanent identity.
    pub pieces: Vector<Piece>,

    /// Append-only connection log. Entries are superseded in place on
    /// merge, never deleted.
    pub connections: Vector<Connection>,

    /// Per-column stacks of cell records, indexed by row. `graph[c].len()`
    /// is the next free row of column `c`.
    pub graph: Vector<Vector<Subgraph>>,
}

impl Game {
    /// Create the empty-board state for the given settings.
    ///
    /// A game created from invalid settings is immediately `over` with no
    /// playable columns and no graph; check [`Game::over`](Game) before
    /// using the state for play.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let over = settings.invalid;
        let column_count = if over { 0 } else { settings.column_count };

        Self {
            settings,
            current_player: PlayerId::new(0),
            winner: None,
            over,
            playable_columns: (0..column_count).collect(),
            pieces: Vector::new(),
            connections: Vector::new(),
            graph: (0..column_count).map(|_| Vector::new()).collect(),
        }
    }

    /// Drop a piece for the current player into the given column.
    ///
    /// Returns a new snapshot; the receiver is untouched. If the game is
    /// already over or the column is full, this is a deliberate no-op that
    /// returns an identical snapshot sharing all structure with the
    /// receiver.
    ///
    /// # Panics
    ///
    /// Panics if the game is still live and `column >=
    /// settings.column_count`. An out-of-range column is a programming
    /// error, distinct from a full column (silent no-op).
    #[must_use]
    pub fn play_column(&self, column: usize) -> Game {
        if self.over {
            return self.clone();
        }

        assert!(
            column < self.settings.column_count,
            "column {} out of range [0, {})",
            column,
            self.settings.column_count,
        );

        if !self.playable_columns.contains(&column) {
            return self.clone();
        }

        let mut next = self.clone();
        let mover = next.current_player;
        let row = next.graph[column].len();

        if row + 1 == next.settings.row_count {
            // The drop fills the column.
            next.playable_columns.retain(|&c| c != column);
        }

        let piece_index = PieceIndex::new(next.pieces.len() as u32);
        next.pieces.push_back(Piece { column, row, player: mover });
        next.graph[column].push_back(Subgraph::new(piece_index));

        if next.settings.win_condition <= 1 {
            // No run is ever formed: the first move already wins.
            next.winner = Some(mover);
        } else {
            for &(direction, column_offset, row_offset) in &LINK_OFFSETS {
                next.link_neighbor(column, row, direction, column_offset, row_offset);
            }
        }

        next.current_player = mover.next(next.settings.player_count);
        next.over = next.winner.is_some() || next.playable_columns.is_empty();
        next
    }

    /// Link the freshly dropped piece at `(column, row)` with the neighbor
    /// cell at the given offset, if that cell holds a same-player piece.
    ///
    /// Four cases, keyed on whether the neighbor (`a`) and the new piece
    /// (`b`) already participate in a run of this direction:
    ///
    /// - `a && b`: the new piece bridges two runs; merge them into a
    ///   brand-new log entry and supersede both old ones.
    /// - `a && !b`: the new piece joins the neighbor's run.
    /// - `!a && b`: the neighbor joins the new piece's run (possible when an
    ///   earlier offset of the same direction already linked the new piece).
    /// - `!a && !b`: a fresh 2-piece run.
    fn link_neighbor(
        &mut self,
        column: usize,
        row: usize,
        direction: ConnectionType,
        column_offset: isize,
        row_offset: isize,
    ) {
        let mover = self.current_player;

        let Some(neighbor_column) = column.checked_add_signed(column_offset) else {
            return;
        };
        let Some(neighbor_row) = row.checked_add_signed(row_offset) else {
            return;
        };
        let Some(neighbor) = self
            .graph
            .get(neighbor_column)
            .and_then(|stack| stack.get(neighbor_row))
            .copied()
        else {
            return;
        };
        if self.pieces[neighbor.piece.index()].player != mover {
            return;
        }

        let own = self.graph[column][row];
        let a = neighbor.connections.get(direction);
        let b = own.connections.get(direction);

        let linked = match (a, b) {
            (Some(j), Some(k)) => self.merge_runs(direction, j, k),
            (Some(j), None) => {
                self.insert_into_run(j, own.piece);
                j
            }
            (None, Some(k)) => {
                self.insert_into_run(k, neighbor.piece);
                k
            }
            (None, None) => {
                let index = ConnectionIndex::new(self.connections.len() as u32);
                let run = self.sorted_run(vec![neighbor.piece, own.piece]);
                self.connections.push_back(Connection::Run(run));
                index
            }
        };

        if a.is_none() {
            self.graph[neighbor_column][neighbor_row]
                .connections
                .set(direction, linked);
        }
        if b.is_none() {
            self.graph[column][row].connections.set(direction, linked);
        }

        // Checked per direction; several directions may redundantly confirm
        // the same winner.
        if self.connections[linked.index()].len() >= self.settings.win_condition {
            self.winner = Some(mover);
        }
    }

    /// Merge two runs of the same direction into a brand-new log entry.
    ///
    /// Both old entries become forwarding stubs and every piece of the
    /// merged run is retargeted to the new entry, so no subgraph references
    /// the old indices afterwards.
    fn merge_runs(
        &mut self,
        direction: ConnectionType,
        first: ConnectionIndex,
        second: ConnectionIndex,
    ) -> ConnectionIndex {
        let merged_index = ConnectionIndex::new(self.connections.len() as u32);

        let mut merged: Vec<PieceIndex> = Vec::with_capacity(
            self.connections[first.index()].len() + self.connections[second.index()].len(),
        );
        merged.extend(self.connections[first.index()].run().into_iter().flatten().copied());
        merged.extend(self.connections[second.index()].run().into_iter().flatten().copied());

        let run = self.sorted_run(merged);
        self.connections[first.index()] = Connection::Superseded(merged_index);
        self.connections[second.index()] = Connection::Superseded(merged_index);

        for &piece_index in &run {
            let piece = self.pieces[piece_index.index()];
            self.graph[piece.column][piece.row]
                .connections
                .set(direction, merged_index);
        }

        self.connections.push_back(Connection::Run(run));
        merged_index
    }

    /// Insert one more piece into an existing run, keeping it sorted.
    fn insert_into_run(&mut self, index: ConnectionIndex, piece: PieceIndex) {
        let mut run: Vec<PieceIndex> = self.connections[index.index()]
            .run()
            .into_iter()
            .flatten()
            .copied()
            .collect();
        run.push(piece);
        self.connections[index.index()] = Connection::Run(self.sorted_run(run));
    }

    /// Sort piece indices ascending by `(row, column)` of the pieces they
    /// reference.
    fn sorted_run(&self, mut run: Vec<PieceIndex>) -> Vector<PieceIndex> {
        run.sort_unstable_by_key(|p| self.pieces[p.index()].position_key());
        run.into_iter().collect()
    }
}
