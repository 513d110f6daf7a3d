use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{CompletionTransport, Dispatcher};
use crate::connector::{ChatConfig, OpenAiClient, ScriptedTransport};

pub struct ContainerConfig {
    /// Answer locally instead of calling the API. No credentials are read.
    pub dry_run: bool,
}

pub struct Container {
    dispatcher: Arc<Dispatcher>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let transport: Arc<dyn CompletionTransport> = if config.dry_run {
            debug!("Using scripted echo transport");
            Arc::new(ScriptedTransport::echo())
        } else {
            let chat_config = ChatConfig::from_env()?;
            debug!("Using completion endpoint {}", chat_config.api_url());
            Arc::new(OpenAiClient::from_config(&chat_config))
        };

        Ok(Self::with_transport(transport))
    }

    pub fn with_transport(transport: Arc<dyn CompletionTransport>) -> Self {
        Self::with_dispatcher(Dispatcher::new(transport))
    }

    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        self.dispatcher.clone()
    }
}
