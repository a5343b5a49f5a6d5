//! Tic-tac-toe game engine.
//!
//! Board representation, move validation, win/tie detection and text
//! rendering, shared by the local terminal game and the TCP server.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Marker, Match, MatchState, Players, Seat};
//!
//! let players = Players::new("Ann", Marker::X, "Bob").unwrap();
//! let mut game = Match::new();
//! for position in [0, 3, 1, 4, 2] {
//!     game.submit(&players, position).unwrap();
//! }
//! assert_eq!(game.state(), MatchState::WinnerDeclared(Seat::First));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod phases;
mod player;
mod render;
pub mod rules;
mod types;

pub use action::MoveError;
pub use game::Game;
pub use phases::{Match, MatchState};
pub use player::{Player, PlayerError, Players};
pub use render::render;
pub use types::{Board, CELLS, Cell, Marker, N, ParseMarkerError, Seat};
