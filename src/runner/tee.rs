use std::fmt;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Stdout,
    Stderr,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdout => f.write_str("stdout"),
            Source::Stderr => f.write_str("stderr"),
        }
    }
}

pub struct LineTap {
    pub source: Source,
    pub line: String,
}

/// Pumps one child pipe into the shared tap channel, line by line.
/// The buffer grows with the line, so line length is unbounded. Ends at
/// EOF, on a read error, or when the receiver goes away; the channel
/// closes once every pump has ended.
pub fn pump<R>(source: Source, reader: R, tx: mpsc::Sender<LineTap>) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(reader).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(LineTap { source, line }).await.is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(source = %source, error = %e, "read failed on child pipe");
                    break;
                }
            }
        }
    })
}
