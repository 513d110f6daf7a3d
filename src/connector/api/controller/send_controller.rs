use anyhow::Result;

use crate::ChatMessage;

use super::super::Container;

pub struct SendController<'a> {
    container: &'a Container,
}

impl<'a> SendController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn send(&self, message: String) -> Result<String> {
        let message = ChatMessage::new(message)?;
        let response = self.container.dispatcher().send(&message).await?;
        Ok(response.into_text())
    }
}
