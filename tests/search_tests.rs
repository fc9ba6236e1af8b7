//! Move search integration tests.

use connect_n::search::evaluate;
use connect_n::{Game, MoveSearch, PlayerId, SearchConfig, Settings};

fn play_all(game: Game, columns: &[usize]) -> Game {
    columns.iter().fold(game, |g, &c| g.play_column(c))
}

/// Plain minimax without pruning, as a reference for the alpha-beta
/// implementation. Only the optimal score is comparable: tie-breaking among
/// equally scored columns is randomized in the real search.
fn exhaustive_minimax(game: &Game, depth: u32, perspective: PlayerId) -> f64 {
    if game.over || depth == 0 {
        return evaluate(game, perspective);
    }

    let maximizing = game.current_player == perspective;
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for &column in &game.playable_columns {
        let score = exhaustive_minimax(&game.play_column(column), depth - 1, perspective);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

// =============================================================================
// Alpha-Beta Equivalence
// =============================================================================

#[test]
fn test_alpha_beta_matches_exhaustive_on_empty_board() {
    let game = Game::new(Settings::classic());

    for depth in 1..=3 {
        let expected = exhaustive_minimax(&game, depth, game.current_player);

        for seed in 0..5 {
            let mut search = MoveSearch::new(SearchConfig::default().with_seed(seed));
            let suggestion = search.suggest_at_depth(&game, depth);
            assert_eq!(
                suggestion.score, expected,
                "depth {depth}, seed {seed}"
            );
        }
    }
}

#[test]
fn test_alpha_beta_matches_exhaustive_midgame() {
    let game = play_all(Game::new(Settings::classic()), &[3, 3, 2, 4, 2, 1]);
    assert!(!game.over);

    for depth in 1..=4 {
        let expected = exhaustive_minimax(&game, depth, game.current_player);

        for seed in [0, 7, 99] {
            let mut search = MoveSearch::new(SearchConfig::default().with_seed(seed));
            let suggestion = search.suggest_at_depth(&game, depth);
            assert_eq!(suggestion.score, expected, "depth {depth}, seed {seed}");
        }
    }
}

#[test]
fn test_alpha_beta_matches_exhaustive_three_players() {
    let game = play_all(Game::new(Settings::new(5, 4, 3, 3)), &[2, 2, 1, 0]);
    assert!(!game.over);

    let expected = exhaustive_minimax(&game, 3, game.current_player);
    let mut search = MoveSearch::new(SearchConfig::default().with_seed(11));

    assert_eq!(search.suggest_at_depth(&game, 3).score, expected);
}

// =============================================================================
// Optimality
// =============================================================================

#[test]
fn test_forced_win_in_one_is_always_taken() {
    // Player 0 to move with three stacked in column 0.
    let game = play_all(Game::new(Settings::classic()), &[0, 1, 0, 1, 0, 1]);

    for seed in 0..32 {
        for depth in [1, 2, 4] {
            let mut search = MoveSearch::new(SearchConfig::default().with_seed(seed));
            let suggestion = search.suggest_at_depth(&game, depth);

            assert_eq!(suggestion.column, Some(0), "seed {seed}, depth {depth}");
            assert_eq!(suggestion.score, f64::INFINITY);
        }
    }
}

#[test]
fn test_imminent_loss_is_blocked() {
    // Player 1 must answer player 0's open vertical three.
    let game = play_all(Game::new(Settings::classic()), &[0, 1, 0, 1, 0]);

    for seed in 0..32 {
        let mut search = MoveSearch::new(SearchConfig::default().with_seed(seed));
        let suggestion = search.suggest_at_depth(&game, 2);

        assert_eq!(suggestion.column, Some(0), "seed {seed}");
    }
}

// =============================================================================
// Determinism & Purity
// =============================================================================

#[test]
fn test_same_seed_same_suggestion() {
    let game = play_all(Game::new(Settings::classic()), &[3, 2, 3]);
    let config = SearchConfig::default().with_depth(3).with_seed(12345);

    let suggestion1 = MoveSearch::new(config).suggest(&game);
    let suggestion2 = MoveSearch::new(config).suggest(&game);

    assert_eq!(suggestion1, suggestion2);
}

#[test]
fn test_score_is_seed_independent() {
    let game = play_all(Game::new(Settings::classic()), &[3, 2, 3, 4]);

    let scores: Vec<f64> = (0..10)
        .map(|seed| {
            MoveSearch::new(SearchConfig::default().with_seed(seed))
                .suggest_at_depth(&game, 3)
                .score
        })
        .collect();

    assert!(scores.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_search_does_not_mutate_snapshot() {
    let game = play_all(Game::new(Settings::classic()), &[3, 2, 3]);
    let before = game.clone();

    let mut search = MoveSearch::new(SearchConfig::default().with_depth(4));
    let _ = search.suggest(&game);

    assert_eq!(game, before);
}

#[test]
fn test_search_on_draw_position() {
    let game = play_all(
        Game::new(Settings::new(3, 3, 4, 2)),
        &[0, 0, 0, 1, 1, 1, 2, 2, 2],
    );
    assert!(game.over);
    assert_eq!(game.winner, None);

    let mut search = MoveSearch::new(SearchConfig::default());
    let suggestion = search.suggest(&game);

    assert_eq!(suggestion.column, None);
    assert!(suggestion.score.is_finite());
}
