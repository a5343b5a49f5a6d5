//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};

/// Two-player tic-tac-toe in a terminal or over TCP
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in a terminal or over TCP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Optional TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run, `play` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

static PLAY: Command = Command::Play;

impl Cli {
    /// The requested command; no subcommand starts a local game.
    pub fn command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&PLAY)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in this terminal
    Play,

    /// Serve games to TCP clients, one independent session per connection
    Serve {
        /// Port to listen on [default: 8000, or the config file's port]
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to [default: 0.0.0.0, or the config file's host]
        #[arg(long)]
        host: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_port_flag() {
        let cli = Cli::parse_from(["tictactoe", "serve", "--port", "1200"]);
        assert!(matches!(cli.command(), Command::Serve { port: Some(1200), host: None }));
    }

    #[test]
    fn test_play_takes_no_flags() {
        let cli = Cli::parse_from(["tictactoe", "play"]);
        assert!(matches!(cli.command(), Command::Play));
        assert!(Cli::try_parse_from(["tictactoe", "play", "--port", "1"]).is_err());
    }

    #[test]
    fn test_no_subcommand_plays_locally() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command(), Command::Play));
    }

    #[test]
    fn test_config_is_global() {
        let cli = Cli::parse_from(["tictactoe", "serve", "--config", "game.toml"]);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("game.toml")));
    }
}
