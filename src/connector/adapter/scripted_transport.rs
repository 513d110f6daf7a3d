use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

use crate::application::{CompletionTransport, TransportFailure};
use crate::domain::CompletionRequest;

/// A request observed by [`ScriptedTransport`] and the instant it was issued.
#[derive(Debug, Clone)]
pub struct ScriptedRequest {
    pub issued_at: Instant,
    pub request: CompletionRequest,
}

/// In-memory [`CompletionTransport`] that replays canned outcomes in order.
///
/// Once the script runs out it either echoes the user's message back (`echo`
/// mode, used by `--dry-run`) or fails with a setup error.
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<String, TransportFailure>>>,
    requests: Mutex<Vec<ScriptedRequest>>,
    echo_when_exhausted: bool,
}

impl ScriptedTransport {
    pub fn new(replies: impl IntoIterator<Item = Result<String, TransportFailure>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
            echo_when_exhausted: false,
        }
    }

    pub fn echo() -> Self {
        Self {
            echo_when_exhausted: true,
            ..Self::new([])
        }
    }

    pub async fn requests(&self) -> Vec<ScriptedRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl CompletionTransport for ScriptedTransport {
    async fn post(&self, request: &CompletionRequest) -> Result<String, TransportFailure> {
        self.requests.lock().await.push(ScriptedRequest {
            issued_at: Instant::now(),
            request: request.clone(),
        });

        if let Some(reply) = self.replies.lock().await.pop_front() {
            return reply;
        }

        if self.echo_when_exhausted {
            let content = request.user_content().unwrap_or_default();
            debug!("ScriptedTransport: echoing {} bytes", content.len());
            return Ok(format!("(dry run) {content}"));
        }

        Err(TransportFailure::Setup(
            "ScriptedTransport: no scripted reply left".to_string(),
        ))
    }
}
