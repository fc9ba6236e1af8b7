//! Depth-limited minimax with alpha-beta pruning.
//!
//! The search maximizes for the *perspective player* - the player to move
//! at the root - and minimizes on every other player's turn. With more than
//! two players this is a two-player-style reduction: any opponent turn is
//! treated as minimizing against the perspective player.
//!
//! Candidate columns are visited in a shuffled order so equal-score moves
//! carry no fixed bias; under a fixed seed the whole search is
//! deterministic, and the returned *score* is independent of shuffle order
//! either way (pruning order never changes the optimal value).

use serde::{Deserialize, Serialize};

use crate::board::Game;
use crate::core::PlayerId;

use super::config::SearchConfig;
use super::rng::SearchRng;
use super::score::evaluate;

/// A suggested column to play and its score.
///
/// `column` is `None` only at the search frontier (game over or depth
/// exhausted); a suggestion returned from a live position always names a
/// playable column. Positive scores favor the player the search ran for.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuggestedMove {
    /// The column to play, if the position admits a move.
    pub column: Option<usize>,

    /// Minimax score of the suggestion for the perspective player.
    pub score: f64,
}

/// Move search context: owns the configuration and the move-ordering RNG.
pub struct MoveSearch {
    config: SearchConfig,
    rng: SearchRng,
}

impl MoveSearch {
    /// Create a new search context.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            rng: SearchRng::new(config.seed),
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Suggest a column for the current player at the configured depth.
    pub fn suggest(&mut self, game: &Game) -> SuggestedMove {
        self.suggest_at_depth(game, self.config.depth)
    }

    /// Suggest a column for the current player at an explicit depth.
    ///
    /// Runtime grows exponentially with depth; hosts should run deep
    /// searches behind their own execution boundary (see the module docs).
    pub fn suggest_at_depth(&mut self, game: &Game, depth: u32) -> SuggestedMove {
        self.minimax(
            game,
            depth,
            game.current_player,
            f64::NEG_INFINITY,
            f64::INFINITY,
        )
    }

    fn minimax(
        &mut self,
        game: &Game,
        depth: u32,
        perspective: PlayerId,
        mut alpha: f64,
        mut beta: f64,
    ) -> SuggestedMove {
        if game.over || depth == 0 {
            return SuggestedMove {
                column: None,
                score: evaluate(game, perspective),
            };
        }

        let mut columns: Vec<usize> = game.playable_columns.iter().copied().collect();
        self.rng.shuffle(&mut columns);

        let maximizing = game.current_player == perspective;

        // The game is not over, so at least one column is playable; the
        // shuffled head doubles as the random fallback candidate.
        let mut best_column = columns[0];
        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for &column in &columns {
            let score = self
                .minimax(&game.play_column(column), depth - 1, perspective, alpha, beta)
                .score;

            if maximizing {
                if score > best_score {
                    best_column = column;
                    best_score = score;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_column = column;
                    best_score = score;
                }
                beta = beta.min(best_score);
            }

            if alpha >= beta {
                break;
            }
        }

        SuggestedMove {
            column: Some(best_column),
            score: best_score,
        }
    }
}
