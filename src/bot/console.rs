//! Local line-oriented front-end.
//!
//! Drives the dispatcher from stdin as a single user, which is enough to
//! exercise every command end-to-end without a chat gateway attached. Each
//! line is one slash command; `quit` leaves the session.

use anyhow::Result;
use log::info;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::bot::dispatch::{CommandRequest, Dispatcher};
use crate::game::types::UserId;

pub async fn run(dispatcher: &mut Dispatcher, user_id: UserId, display_name: &str) -> Result<()> {
    info!(
        "console session for {} ({}); type /help for commands, quit to exit",
        display_name, user_id
    );
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(b"> ").await?;
    stdout.flush().await?;
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }
        if !trimmed.is_empty() {
            let request = CommandRequest {
                user_id,
                display_name: display_name.to_string(),
                line: trimmed.to_string(),
            };
            for reply in dispatcher.handle(&request).await {
                stdout.write_all(reply.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
            }
        }
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }
    info!("console session closed");
    Ok(())
}
