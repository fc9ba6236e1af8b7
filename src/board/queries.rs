//! Read-only queries over a game snapshot.
//!
//! Consumed by rendering layers (board drawing, winning-connection
//! highlights, pointer tracking) and by the search heuristic. None of these
//! mutate the snapshot; the fractional-input queries exist so hosts can map
//! pointer coordinates onto board cells.

use im::Vector;
use smallvec::SmallVec;

use super::game::Game;
use super::piece::PieceIndex;

/// Index of the first column of any game.
pub const FIRST_COLUMN: usize = 0;

/// Index of the first row of any game.
pub const FIRST_ROW: usize = 0;

impl Game {
    /// Check if two games have the same number of columns and rows.
    #[must_use]
    pub fn has_same_geometry(&self, other: &Game) -> bool {
        self.settings.column_count == other.settings.column_count
            && self.settings.row_count == other.settings.row_count
    }

    /// Check if the game has a winner.
    #[must_use]
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// The runs worth showing: winning runs if there is a winner, otherwise
    /// every live run (two or more pieces). Superseded entries never
    /// appear.
    #[must_use]
    pub fn valid_connections(&self) -> Vec<Vector<PieceIndex>> {
        let threshold = if self.has_winner() {
            self.settings.win_condition
        } else {
            2
        };

        self.connections
            .iter()
            .filter_map(|connection| connection.run())
            .filter(|run| run.len() >= threshold)
            .cloned()
            .collect()
    }

    /// The point halfway between the first and last column indices. Has a
    /// fractional part when the column count is even.
    #[must_use]
    pub fn column_midpoint(&self) -> f64 {
        (self.settings.column_count as f64 - 1.0) / 2.0
    }

    /// The middle column (odd column count) or the two middle columns
    /// (even column count), ascending.
    #[must_use]
    pub fn middle_columns(&self) -> SmallVec<[usize; 2]> {
        if self.settings.column_count == 0 {
            return SmallVec::new();
        }

        let midpoint = self.column_midpoint();
        let mut columns = SmallVec::new();
        columns.push(midpoint.floor() as usize);
        if midpoint.fract() != 0.0 {
            columns.push(midpoint.ceil() as usize);
        }
        columns
    }

    /// Index of the last column.
    #[must_use]
    pub fn last_column(&self) -> usize {
        self.settings.column_count.saturating_sub(1)
    }

    /// Row index of the topmost piece in a column, or `None` if the column
    /// is empty (or out of range).
    #[must_use]
    pub fn last_row_at(&self, column: usize) -> Option<usize> {
        self.graph.get(column)?.len().checked_sub(1)
    }

    /// Check if a possibly fractional value lies within the column range.
    #[must_use]
    pub fn is_valid_column(&self, column: f64) -> bool {
        column >= FIRST_COLUMN as f64 && column <= self.settings.column_count as f64 - 1.0
    }

    /// Check if a possibly fractional value lies within the row range.
    #[must_use]
    pub fn is_valid_row(&self, row: f64) -> bool {
        row >= FIRST_ROW as f64 && row <= self.settings.row_count as f64 - 1.0
    }

    /// Restrict a possibly fractional value to the valid column range.
    #[must_use]
    pub fn clamp_column(&self, column: f64) -> f64 {
        column
            .max(FIRST_COLUMN as f64)
            .min(self.settings.column_count as f64 - 1.0)
    }
}
