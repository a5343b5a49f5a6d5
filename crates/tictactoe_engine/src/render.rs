//! Text rendering of the board and the seated players.

use crate::player::Players;
use crate::types::Board;
use std::fmt::Write;

/// Formats the player header followed by the board grid.
///
/// ```text
/// Name: Ann Choice: X
/// Name: Bob Choice: O
///
/// -------------
/// | X | _ | _ |
/// -------------
/// ...
/// ```
pub fn render(board: &Board, players: &Players) -> String {
    let mut out = String::new();
    for (_, player) in players.iter() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Name: {} Choice: {}", player.name(), player.marker());
    }
    out.push('\n');
    out.push_str(&board.to_string());
    out
}
