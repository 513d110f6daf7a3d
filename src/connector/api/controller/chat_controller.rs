use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::ChatMessage;

use super::super::Container;

const PROMPT: &str = "> ";
const QUIT_COMMANDS: &[&str] = &["/quit", "/exit"];

/// Line-oriented chat loop. One request is outstanding at a time: the next line
/// is not read until the current turn has finished.
pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn run<R, W>(&self, mut input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let dispatcher = self.container.dispatcher();
        let mut line = String::new();

        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            line.clear();
            if input.read_line(&mut line).await? == 0 {
                debug!("Chat input closed");
                break;
            }
            let text = line.trim_end_matches(['\r', '\n']);
            if QUIT_COMMANDS.contains(&text) {
                break;
            }

            let message = match ChatMessage::new(text) {
                Ok(message) => message,
                Err(e) => {
                    output.write_all(format!("{e}\n").as_bytes()).await?;
                    continue;
                }
            };

            output.write_all(b"Waiting for cooldown...\n").await?;
            output.flush().await?;

            let reply = match dispatcher.send(&message).await {
                Ok(response) => response.into_text(),
                Err(e) => e.to_string(),
            };
            output.write_all(format!("{reply}\n").as_bytes()).await?;
        }

        output.flush().await?;
        Ok(())
    }
}
