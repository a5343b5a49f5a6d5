//! Players and the pair seated for a session.

use crate::types::{Marker, Seat};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error building a player.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PlayerError {
    /// Players must hold X or O.
    #[display("Player must use X or O, not an empty marker")]
    NoMarker,
}

/// A named participant holding one marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    marker: Marker,
}

impl Player {
    /// Creates a player.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NoMarker`] when `marker` is [`Marker::Empty`].
    pub fn new(name: impl Into<String>, marker: Marker) -> Result<Self, PlayerError> {
        if !marker.is_filled() {
            return Err(PlayerError::NoMarker);
        }
        Ok(Self {
            name: name.into(),
            marker,
        })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Either X or O.
    pub fn marker(&self) -> Marker {
        self.marker
    }
}

/// The two players of a session, first seat moves first.
///
/// Markers are always complementary. The pair lives for the whole session and
/// is reused on every replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    first: Player,
    second: Player,
}

impl Players {
    /// Seats two players; the second gets the complement of `first_marker`.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NoMarker`] when `first_marker` is empty.
    #[instrument(skip(first_name, second_name))]
    pub fn new(
        first_name: impl Into<String>,
        first_marker: Marker,
        second_name: impl Into<String>,
    ) -> Result<Self, PlayerError> {
        let second_marker = first_marker.complement().ok_or(PlayerError::NoMarker)?;
        let players = Self {
            first: Player::new(first_name, first_marker)?,
            second: Player::new(second_name, second_marker)?,
        };
        debug!(
            first = %players.first.name,
            first_marker = %first_marker,
            second = %players.second.name,
            second_marker = %second_marker,
            "Players seated"
        );
        Ok(players)
    }

    /// Player in the given seat.
    pub fn get(&self, seat: Seat) -> &Player {
        match seat {
            Seat::First => &self.first,
            Seat::Second => &self.second,
        }
    }

    /// Seat of the player using `marker`, if any.
    pub fn seat_of(&self, marker: Marker) -> Option<Seat> {
        if self.first.marker == marker {
            Some(Seat::First)
        } else if self.second.marker == marker {
            Some(Seat::Second)
        } else {
            None
        }
    }

    /// Both players in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &Player)> {
        [(Seat::First, &self.first), (Seat::Second, &self.second)].into_iter()
    }
}

impl std::ops::Index<Seat> for Players {
    type Output = Player;

    fn index(&self, seat: Seat) -> &Player {
        self.get(seat)
    }
}
