//! Game rules for tic-tac-toe.
//!
//! Pure functions over board state, kept apart from board storage so the
//! engine and its tests can use them directly.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{
    RULES, WinningRule, anti_diagonal_match, check_winner, column_match, diagonal_match, is_winner,
    row_match,
};
