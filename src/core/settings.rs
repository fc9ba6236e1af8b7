//! Validated, immutable game settings.
//!
//! Settings never reject their inputs: out-of-range values set the
//! `invalid` flag instead, and a game created from invalid settings starts
//! already over with no playable columns. Callers check `Game::over`, not an
//! error value.

use serde::{Deserialize, Serialize};

/// Inclusive bounds for every setting value.
const MIN_SETTING: i64 = 1;
const MAX_SETTING: i64 = u32::MAX as i64;

fn is_invalid_setting(value: i64) -> bool {
    !(MIN_SETTING..=MAX_SETTING).contains(&value)
}

/// Immutable game settings: board shape, win condition, player count.
///
/// Built once via [`Settings::new`]; the stored fields are only meaningful
/// when `invalid` is false.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Number of columns on the board.
    pub column_count: usize,

    /// Number of rows on the board.
    pub row_count: usize,

    /// Minimum number of connected pieces needed to win.
    pub win_condition: usize,

    /// Number of players.
    pub player_count: usize,

    /// True if any input fell outside `1 ..= u32::MAX`.
    pub invalid: bool,
}

impl Settings {
    /// Create settings from raw inputs.
    ///
    /// Any value outside `1 ..= u32::MAX` (zero, negative, oversized) marks
    /// the whole settings value invalid. Invalid inputs are clamped to zero
    /// in the stored fields so they can never index anything.
    #[must_use]
    pub fn new(column_count: i64, row_count: i64, win_condition: i64, player_count: i64) -> Self {
        let invalid = is_invalid_setting(column_count)
            || is_invalid_setting(row_count)
            || is_invalid_setting(win_condition)
            || is_invalid_setting(player_count);

        let store = |value: i64| if invalid { 0 } else { value as usize };

        Self {
            column_count: store(column_count),
            row_count: store(row_count),
            win_condition: store(win_condition),
            player_count: store(player_count),
            invalid,
        }
    }

    /// Classic Connect Four: 7 columns, 6 rows, 4 to win, 2 players.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(7, 6, 4, 2)
    }

    /// Total number of slots on the board.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.column_count * self.row_count
    }
}
