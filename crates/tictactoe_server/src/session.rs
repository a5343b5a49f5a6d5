//! Prompt-driven game session over any line-oriented text channel.
//!
//! The same loop runs on a terminal (stdin/stdout) and on a TCP connection.
//! Bad input is never an error: every prompt simply asks again.

use crate::config::Config;
use derive_more::{Display, Error, From};
use std::time::Duration;
use tictactoe_engine::{Board, Marker, Match, MatchState, PlayerError, Players, render};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument};

/// Clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const LOADING: &str =
    "TIC TAC TOE LOADING ..................................................";

/// Why a session stopped before the players declined a replay.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Reading or writing the channel failed.
    #[display("I/O error: {}", _0)]
    #[from]
    Io(std::io::Error),

    /// The other end closed the channel mid-session.
    #[display("Client disconnected")]
    Disconnected,

    /// Players could not be seated. Only reachable if a marker other than X
    /// or O gets past the marker prompt.
    #[display("Player setup failed: {}", _0)]
    #[from]
    Setup(PlayerError),
}

/// Terminal states of every match played in a session, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    outcomes: Vec<MatchState>,
}

impl SessionSummary {
    /// Outcome of each finished match.
    pub fn outcomes(&self) -> &[MatchState] {
        &self.outcomes
    }

    /// Number of matches played.
    pub fn matches(&self) -> usize {
        self.outcomes.len()
    }
}

/// One session: two players, any number of matches.
#[derive(Debug)]
pub struct Session<R, W> {
    reader: R,
    writer: W,
    config: Config,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Wraps a channel.
    pub fn new(reader: R, writer: W, config: Config) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Gives the channel back.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Runs splash, player setup and matches until a replay is declined.
    ///
    /// # Errors
    ///
    /// [`SessionError::Disconnected`] if input ends at any prompt, or
    /// [`SessionError::Io`] if the channel fails.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<SessionSummary, SessionError> {
        if *self.config.splash() {
            self.splash().await?;
        }

        let players = self.read_players().await?;
        let mut summary = SessionSummary::default();
        let mut game = Match::new();

        loop {
            let outcome = self.play_match(&mut game, &players).await?;
            summary.outcomes.push(outcome);
            info!(matches = summary.matches(), ?outcome, "Match finished");

            if !self.confirm("Do you want to Play Again [y/n]: ").await? {
                break;
            }
            game.restart();
        }

        Ok(summary)
    }

    /// Loading animation followed by an empty board.
    async fn splash(&mut self) -> Result<(), SessionError> {
        let delay = self.config.slow_print_delay();
        self.clear_screen().await?;
        self.slow_print(LOADING, delay).await?;
        self.clear_screen().await?;
        self.slow_print("\nGame Started\n", delay).await?;
        let board = Board::new().to_string();
        self.slow_print(&board, self.config.board_print_delay()).await
    }

    /// Asks for both names and the first player's marker.
    #[instrument(skip(self))]
    pub async fn read_players(&mut self) -> Result<Players, SessionError> {
        let first = self.prompt("Enter Player1 Name: ").await?;

        let mut answer = self
            .prompt(&format!("Enter Marker Choice For {first} [X/O]: "))
            .await?;
        let marker = loop {
            match answer.parse::<Marker>() {
                Ok(marker) => break marker,
                Err(e) => {
                    debug!(error = %e, "Rejected marker choice");
                    answer = self
                        .prompt("Invalid Input, Please Enter Marker Choice [X/O]: ")
                        .await?;
                }
            }
        };

        let second = self.prompt("Enter Player2 Name: ").await?;
        Ok(Players::new(first, marker, second)?)
    }

    /// Plays `game` to a win or tie and announces the result.
    #[instrument(skip_all)]
    pub async fn play_match(
        &mut self,
        game: &mut Match,
        players: &Players,
    ) -> Result<MatchState, SessionError> {
        loop {
            let seat = match game.state() {
                MatchState::AwaitingMove(seat) => seat,
                MatchState::WinnerDeclared(seat) => {
                    self.show_board(game.board(), players).await?;
                    self.write(&format!("Congrats {} Wins\n", players[seat].name()))
                        .await?;
                    return Ok(game.state());
                }
                MatchState::TieDeclared => {
                    self.show_board(game.board(), players).await?;
                    self.write("Match Got Tie\n").await?;
                    return Ok(game.state());
                }
            };

            self.show_board(game.board(), players).await?;
            let name = players[seat].name();
            let mut answer = self
                .prompt(&format!("Enter Marker Position ({name}): "))
                .await?;

            loop {
                match answer.parse::<i64>() {
                    Ok(position) => match game.submit(players, position) {
                        Ok((cell, _)) => {
                            debug!(player = name, %cell, "Move accepted");
                            break;
                        }
                        Err(e) => debug!(player = name, error = %e, "Move rejected"),
                    },
                    Err(_) => debug!(player = name, input = %answer, "Position is not a number"),
                }
                answer = self
                    .prompt(&format!(
                        "Invalid Position, Enter Correct Marker Position ({name}): "
                    ))
                    .await?;
            }
        }
    }

    /// Asks a yes/no question until the answer is recognised.
    pub async fn confirm(&mut self, question: &str) -> Result<bool, SessionError> {
        loop {
            match self.prompt(question).await?.as_str() {
                "y" | "Y" | "yes" => return Ok(true),
                "n" | "N" | "no" => return Ok(false),
                other => debug!(answer = other, "Unrecognised replay answer"),
            }
        }
    }

    async fn show_board(&mut self, board: &Board, players: &Players) -> Result<(), SessionError> {
        self.clear_screen().await?;
        self.write(&render(board, players)).await?;
        self.write("\n").await
    }

    async fn clear_screen(&mut self) -> Result<(), SessionError> {
        if *self.config.clear_screen() {
            self.write(CLEAR_SCREEN).await?;
        }
        Ok(())
    }

    /// Writes `text` and returns the next input line, trimmed.
    async fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        self.write(text).await?;
        self.read_line().await
    }

    async fn read_line(&mut self) -> Result<String, SessionError> {
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line).await? == 0 {
            return Err(SessionError::Disconnected);
        }
        // Invalid UTF-8 is replaced, not rejected.
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    async fn write(&mut self, text: &str) -> Result<(), SessionError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn slow_print(&mut self, text: &str, delay: Duration) -> Result<(), SessionError> {
        if delay.is_zero() {
            return self.write(text).await;
        }
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            self.write(ch.encode_utf8(&mut buf)).await?;
            tokio::time::sleep(delay).await;
        }
        Ok(())
    }
}
