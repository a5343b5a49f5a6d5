//! Per-match turn state machine.
//!
//! `AwaitingMove(seat) -> {AwaitingMove(other) | WinnerDeclared(seat) | TieDeclared}`

use crate::action::MoveError;
use crate::game::Game;
use crate::player::Players;
use crate::types::{Board, Cell, Seat};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Where a match currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchState {
    /// Waiting for the given seat to play.
    AwaitingMove(Seat),
    /// The seat completed a line.
    WinnerDeclared(Seat),
    /// Board filled without a line.
    TieDeclared,
}

impl MatchState {
    /// Whether no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, MatchState::AwaitingMove(_))
    }
}

/// A single match between the seated players.
#[derive(Debug, Clone)]
pub struct Match {
    game: Game,
    state: MatchState,
}

impl Match {
    /// Starts a match on an empty board with the first seat to move.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            state: MatchState::AwaitingMove(Seat::First),
        }
    }

    /// Current state.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// The board being played.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Seat expected to play next, if the match is still running.
    pub fn to_move(&self) -> Option<Seat> {
        match self.state {
            MatchState::AwaitingMove(seat) => Some(seat),
            _ => None,
        }
    }

    /// Plays `position` for the seat to move and advances the state.
    ///
    /// Winner is checked before tie. A rejected move keeps both the board and
    /// the state as they were.
    ///
    /// # Errors
    ///
    /// [`MoveError::MatchOver`] in a terminal state, otherwise whatever
    /// [`Game::mark`] rejects.
    #[instrument(skip(self, players), fields(state = ?self.state))]
    pub fn submit(&mut self, players: &Players, position: i64) -> Result<(Cell, MatchState), MoveError> {
        let seat = self.to_move().ok_or(MoveError::MatchOver)?;
        let cell = self.game.mark(&players[seat], position)?;

        self.state = if let Some(winner) = self.game.winning_seat(players) {
            info!(winner = %players[winner].name(), "Winner declared");
            MatchState::WinnerDeclared(winner)
        } else if self.game.is_tie() {
            info!("Tie declared");
            MatchState::TieDeclared
        } else {
            MatchState::AwaitingMove(seat.other())
        };
        Ok((cell, self.state))
    }

    /// Discards the board and starts over with the first seat.
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
