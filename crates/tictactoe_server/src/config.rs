//! Runtime configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings shared by the local game and the TCP server.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct Config {
    /// Address the server binds to.
    #[serde(default = "default_host")]
    #[setters(into)]
    host: String,

    /// TCP port the server listens on.
    #[serde(default = "default_port")]
    port: u16,

    /// Play the loading animation before asking for players.
    #[serde(default = "default_splash")]
    splash: bool,

    /// Per-character delay of the loading text, in milliseconds.
    #[serde(default = "default_slow_print_ms")]
    slow_print_ms: u64,

    /// Per-character delay when the empty board is first drawn.
    #[serde(default = "default_board_print_ms")]
    board_print_ms: u64,

    /// Send the clear-screen sequence before every board.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_splash() -> bool {
    true
}

fn default_slow_print_ms() -> u64 {
    50
}

fn default_board_print_ms() -> u64 {
    30
}

fn default_clear_screen() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            splash: default_splash(),
            slow_print_ms: default_slow_print_ms(),
            board_print_ms: default_board_print_ms(),
            clear_screen: default_clear_screen(),
        }
    }
}

impl Config {
    /// Settings with no animation or screen clearing, for scripted clients.
    pub fn quiet() -> Self {
        Self::default()
            .with_splash(false)
            .with_slow_print_ms(0)
            .with_board_print_ms(0)
            .with_clear_screen(false)
    }

    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(port = config.port, host = %config.host, "Config loaded successfully");
        Ok(config)
    }

    /// Reads `path` when given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Delay between characters of animated text.
    pub fn slow_print_delay(&self) -> Duration {
        Duration::from_millis(self.slow_print_ms)
    }

    /// Delay between characters of the first board render.
    pub fn board_print_delay(&self) -> Duration {
        Duration::from_millis(self.board_print_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
