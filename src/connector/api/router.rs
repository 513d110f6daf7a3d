use anyhow::Result;
use tokio::io::{stdin, stdout, BufReader};

use crate::Commands;

use super::container::Container;
use super::controller::{ChatController, SendController};

pub struct Router<'a> {
    send_controller: SendController<'a>,
    chat_controller: ChatController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            send_controller: SendController::new(container),
            chat_controller: ChatController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Send { message } => self.send_controller.send(message).await,
            Commands::Chat => {
                self.chat_controller
                    .run(BufReader::new(stdin()), stdout())
                    .await?;
                Ok(String::new())
            }
        }
    }
}
