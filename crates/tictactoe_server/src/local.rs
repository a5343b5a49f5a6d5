//! Interactive game on the process's own terminal.

use crate::config::Config;
use crate::session::{Session, SessionError, SessionSummary};
use tokio::io::BufReader;
use tracing::instrument;

/// Runs one session on stdin/stdout.
#[instrument(skip(config))]
pub async fn run(config: Config) -> Result<SessionSummary, SessionError> {
    let mut session = Session::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), config);
    session.run().await
}
