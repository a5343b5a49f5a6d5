//! Tic-tac-toe sessions for a local terminal and for TCP clients.
//!
//! # Architecture
//!
//! - **Session**: prompt loop driving the engine over any async text channel
//! - **Server**: TCP accept loop, one task and one session per connection
//! - **Local**: the same session on stdin/stdout
//! - **Config**: optional TOML settings for binding and animation
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_server::{Config, Server};
//!
//! # async fn example() -> std::io::Result<()> {
//! let server = Server::bind(Config::default().with_port(1200)).await?;
//! server.run().await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
pub mod local;
pub mod logging;
mod server;
mod session;

pub use config::{Config, ConfigError};
pub use server::Server;
pub use session::{CLEAR_SCREEN, Session, SessionError, SessionSummary};
