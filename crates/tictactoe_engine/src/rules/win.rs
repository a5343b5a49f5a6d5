//! Win detection for tic-tac-toe.
//!
//! Each rule is a predicate over the cells one player owns. A rule matches
//! when the cells contain a complete line of its kind, no matter how many
//! other cells the player also holds.

use crate::player::Players;
use crate::types::{Board, Cell, N, Seat};
use tracing::{instrument, trace};

/// Predicate over the distinct cells owned by one player.
pub type WinningRule = fn(&[Cell]) -> bool;

/// Rules tried in order; the first match wins.
pub const RULES: [(&str, WinningRule); 4] = [
    ("row", row_match),
    ("column", column_match),
    ("diagonal", diagonal_match),
    ("anti-diagonal", anti_diagonal_match),
];

/// Some row is entirely contained in `cells`.
pub fn row_match(cells: &[Cell]) -> bool {
    (0..N).any(|row| cells.iter().filter(|c| c.row() == row).count() == N)
}

/// Some column is entirely contained in `cells`.
pub fn column_match(cells: &[Cell]) -> bool {
    (0..N).any(|col| cells.iter().filter(|c| c.col() == col).count() == N)
}

/// The main diagonal (row == col) is contained in `cells`.
pub fn diagonal_match(cells: &[Cell]) -> bool {
    cells.iter().filter(|c| c.row() == c.col()).count() == N
}

/// The anti-diagonal (row + col == N - 1) is contained in `cells`.
pub fn anti_diagonal_match(cells: &[Cell]) -> bool {
    cells.iter().filter(|c| c.row() + c.col() == N - 1).count() == N
}

/// Whether the owned cells form at least one complete line.
#[instrument(level = "trace")]
pub fn is_winner(cells: &[Cell]) -> bool {
    if cells.len() < N {
        return false;
    }
    RULES.iter().any(|(name, rule)| {
        let matched = rule(cells);
        if matched {
            trace!(rule = *name, "Winning line found");
        }
        matched
    })
}

/// Seat of the first player, in seat order, holding a complete line.
#[instrument(skip_all)]
pub fn check_winner(board: &Board, players: &Players) -> Option<Seat> {
    players
        .iter()
        .find(|(_, player)| is_winner(&board.cells_of(player.marker())))
        .map(|(seat, _)| seat)
}
