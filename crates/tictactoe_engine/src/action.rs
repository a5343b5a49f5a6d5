//! Move rejection reasons.

use crate::types::Cell;
use derive_more::{Display, Error};

/// Why a move was refused. Always recoverable: the board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Linear position outside `0..9`.
    #[display("Position {} is off the board", _0)]
    OutOfRange(#[error(not(source))] i64),

    /// The target cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] Cell),

    /// The match already has a winner or is tied.
    #[display("Match is already over")]
    MatchOver,
}
