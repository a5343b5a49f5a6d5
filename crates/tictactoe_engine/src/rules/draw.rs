//! Tie detection for tic-tac-toe.

use crate::types::{Board, CELLS};
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// Only a tie when no winner was found first.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.filled() == CELLS
}
