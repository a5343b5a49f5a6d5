//! TCP front end: one independent session per accepted connection.

use crate::config::Config;
use crate::session::{Session, SessionError};
use std::net::SocketAddr;
use tokio::io::BufReader;
use tokio::net::{TcpListener, TcpStream};
use tracing::{Instrument, info, info_span, instrument, warn};

/// Listening socket plus the settings handed to every session.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    config: Config,
}

impl Server {
    /// Binds `config.host():config.port()`.
    ///
    /// # Errors
    ///
    /// Returns the bind error; callers treat it as fatal.
    #[instrument(skip(config), fields(host = %config.host(), port = *config.port()))]
    pub async fn bind(config: Config) -> std::io::Result<Self> {
        let listener = TcpListener::bind((config.host().as_str(), *config.port())).await?;
        info!(addr = %listener.local_addr()?, "Listening");
        Ok(Self { listener, config })
    }

    /// Address actually bound, useful when port 0 was requested.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections forever, spawning a task for each.
    ///
    /// Accept failures are logged and skipped. Tasks share nothing.
    pub async fn run(self) {
        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    let config = self.config.clone();
                    tokio::spawn(
                        serve_connection(stream, config).instrument(info_span!("connection", %peer)),
                    );
                }
                Err(e) => warn!(error = %e, "Failed to accept connection"),
            }
        }
    }
}

/// Plays a whole session on `stream`, then drops it.
async fn serve_connection(stream: TcpStream, config: Config) {
    info!("Client connected");
    let (reader, writer) = stream.into_split();
    let mut session = Session::new(BufReader::new(reader), writer, config);

    match session.run().await {
        Ok(summary) => info!(matches = summary.matches(), "Session ended"),
        Err(SessionError::Disconnected) => info!("Client disconnected mid-session"),
        Err(e) => warn!(error = %e, "Session failed"),
    }
}
