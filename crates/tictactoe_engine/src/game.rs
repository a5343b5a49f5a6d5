//! Board ownership and move application.

use crate::action::MoveError;
use crate::player::{Player, Players};
use crate::rules;
use crate::types::{Board, Cell, Seat};
use tracing::{debug, instrument};

/// One match worth of board state.
///
/// A fresh `Game` (and so a fresh board) is created for every match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Creates a game on an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marks `position` with the player's marker.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] for positions outside `0..9` and
    /// [`MoveError::Occupied`] for taken cells. The board is unchanged on error.
    #[instrument(skip(self, player), fields(player = %player.name(), marker = %player.marker()))]
    pub fn mark(&mut self, player: &Player, position: i64) -> Result<Cell, MoveError> {
        let cell = Cell::from_index(position).ok_or(MoveError::OutOfRange(position))?;
        if !self.board.is_free(cell) {
            debug!(%cell, "Rejected move on occupied cell");
            return Err(MoveError::Occupied(cell));
        }
        self.board.fill(cell, player.marker());
        debug!(%cell, "Cell marked");
        Ok(cell)
    }

    /// Seat of the winning player, if any.
    pub fn winning_seat(&self, players: &Players) -> Option<Seat> {
        rules::check_winner(&self.board, players)
    }

    /// The winning player, checking the first seat before the second.
    pub fn winner<'p>(&self, players: &'p Players) -> Option<&'p Player> {
        self.winning_seat(players).map(|seat| &players[seat])
    }

    /// True once all nine cells are filled.
    ///
    /// Check [`Game::winner`] first: a board completed by a winning move is a
    /// win, not a tie.
    pub fn is_tie(&self) -> bool {
        rules::is_full(&self.board)
    }
}
