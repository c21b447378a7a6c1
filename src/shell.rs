//! Interactive shell loop.
//!
//! Lines are read on a dedicated OS thread and forwarded over a channel, so
//! the async loop can stop on a shutdown signal even while the reader is
//! blocked waiting for input. The reader thread is never joined.
//!
//! ```text
//!  stdin ──> [mdb-stdin thread] ──mpsc──> run() ──> Database::interpret
//!                                           ▲
//!                              shutdown ────┘ (Ctrl+C)
//! ```

use crate::{Database, PROMPT};
use std::future::Future;
use std::io::{self, BufRead};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::info;

/// Lines buffered between the reader thread and the shell loop.
const LINE_BUFFER: usize = 16;

/// Starts a thread that reads `reader` line by line into a channel.
///
/// The thread exits after EOF, after forwarding a read error, or once the
/// receiver has been dropped.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<mpsc::Receiver<io::Result<String>>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);

    std::thread::Builder::new()
        .name("mdb-stdin".into())
        .spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.blocking_send(line).is_err() || failed {
                    break;
                }
            }
        })?;

    Ok(rx)
}

/// Text printed for the outcome of one command.
pub fn render_reply(outcome: crate::Result<String>) -> String {
    match outcome {
        Ok(result) if result.is_empty() => "OK".to_string(),
        Ok(result) => result.trim_end_matches('\n').to_string(),
        Err(e) => format!("(error) {e}"),
    }
}

/// Prompts, interprets and prints until EOF or until `shutdown` resolves.
pub async fn run<W, F>(
    db: &Database,
    mut lines: mpsc::Receiver<io::Result<String>>,
    out: &mut W,
    shutdown: F,
) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        out.write_all(PROMPT.as_bytes()).await?;
        out.flush().await?;

        let next = tokio::select! {
            next = lines.recv() => next,
            _ = &mut shutdown => {
                info!("Shutdown signal received, stopping...");
                return Ok(());
            }
        };

        let Some(line) = next.transpose()? else {
            info!("End of input");
            return Ok(());
        };

        let line = line.trim();
        if line.is_empty() {
            info!("Empty command received");
            continue;
        }

        let reply = render_reply(db.interpret(line));
        out.write_all(reply.as_bytes()).await?;
        out.write_all(b"\n").await?;
    }
}
