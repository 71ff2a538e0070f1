//! Stdin push-message feed
//!
//! Portable fallback for the Unix socket channel: frames arrive as
//! newline-delimited JSON on stdin, e.g. piped from an OctoPrint push
//! bridge. EOF ends the feed.

use std::io;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::domain::message::MessageFrame;

/// Read frames from stdin until EOF, forwarding each to the channel.
///
/// Malformed lines are reported on stderr and skipped.
pub async fn run_stdin_feed(tx: mpsc::Sender<MessageFrame>) -> io::Result<()> {
    let stdin = tokio::io::stdin();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    loop {
        line.clear();
        let read = reader.read_line(&mut line).await?;
        if read == 0 {
            return Ok(());
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match serde_json::from_str::<MessageFrame>(trimmed) {
            Ok(frame) => {
                if tx.send(frame).await.is_err() {
                    return Ok(());
                }
            }
            Err(e) => {
                eprintln!("Skipping malformed frame: {}", e);
            }
        }
    }
}
