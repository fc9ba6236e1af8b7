//! Static position heuristic, evaluated at the search frontier.
//!
//! Two signals on top of the win/loss base case:
//!
//! - **Center control**: pieces in the middle column(s) participate in the
//!   most potential runs, so each one the perspective player owns is worth
//!   `win_condition - 1`.
//! - **Open threats**: for every still-playable column, the run records on
//!   the column's topmost piece are checked for room to grow ("holes" -
//!   empty cells immediately beyond the run's endpoints along its own
//!   direction). A run one short of winning with a hole is an imminent
//!   threat, for or against; a perspective-owned run two short with two
//!   holes is a developing one.

use im::Vector;
use smallvec::SmallVec;

use crate::board::{ConnectionType, Game, PieceIndex};
use crate::core::PlayerId;

/// Score a game for the given perspective player.
///
/// A decided game scores `+inf` when the perspective player won and `-inf`
/// otherwise; undecided games accumulate the finite heuristic signals.
#[must_use]
pub fn evaluate(game: &Game, perspective: PlayerId) -> f64 {
    if let Some(winner) = game.winner {
        return if winner == perspective {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        };
    }

    let win_condition = game.settings.win_condition;
    let mut score = 0.0;

    for column in game.middle_columns() {
        for cell in &game.graph[column] {
            if game.pieces[cell.piece.index()].player == perspective {
                score += (win_condition - 1) as f64;
            }
        }
    }

    for &column in &game.playable_columns {
        let Some(row) = game.last_row_at(column) else {
            continue;
        };
        let cell = game.graph[column][row];
        let owner = game.pieces[cell.piece.index()].player;

        for (direction, index) in cell.connections.iter() {
            let Some(run) = game.connections[index.index()].run() else {
                continue;
            };
            let holes = count_holes(game, run, direction);

            if run.len() + 1 >= win_condition && holes >= 1 {
                if owner == perspective {
                    score += (win_condition + 1) as f64;
                } else {
                    score -= win_condition as f64;
                }
            } else if run.len() + 2 >= win_condition && holes >= 2 && owner == perspective {
                score += win_condition.saturating_sub(2) as f64;
            }
        }
    }

    score
}

/// Count empty in-bounds cells immediately beyond a run's endpoints, along
/// the run's own direction.
///
/// Vertical runs only probe above: under gravity the cell below a vertical
/// run is never empty.
fn count_holes(game: &Game, run: &Vector<PieceIndex>, direction: ConnectionType) -> usize {
    let (step_column, step_row) = direction.step();

    // (endpoint, column offset, row offset) probes; runs are sorted, so the
    // first entry is the lowest endpoint and the last the highest.
    let mut probes: SmallVec<[(PieceIndex, isize, isize); 2]> = SmallVec::new();
    if direction != ConnectionType::Vertical {
        probes.push((run[0], -step_column, -step_row));
    }
    probes.push((run[run.len() - 1], step_column, step_row));

    let mut holes = 0;
    for (endpoint, column_offset, row_offset) in probes {
        let piece = game.pieces[endpoint.index()];

        let Some(column) = piece.column.checked_add_signed(column_offset) else {
            continue;
        };
        if column >= game.settings.column_count {
            continue;
        }
        let Some(row) = piece.row.checked_add_signed(row_offset) else {
            continue;
        };
        if row >= game.settings.row_count {
            continue;
        }

        if game.graph[column].get(row).is_none() {
            holes += 1;
        }
    }

    holes
}
