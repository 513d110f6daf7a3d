use async_trait::async_trait;
use thiserror::Error;

use crate::domain::CompletionRequest;

/// Raw outcome of a failed completion call, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    /// The endpoint answered with a non-success status.
    #[error("upstream returned HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    /// The request went out but no response came back.
    #[error("no response: {0}")]
    NoResponse(String),

    /// The request could not be built or sent, or the reply was unusable.
    #[error("request setup failed: {0}")]
    Setup(String),
}

impl TransportFailure {
    pub fn status(status: u16) -> Self {
        Self::Status {
            status,
            detail: None,
        }
    }

    pub fn status_with_detail(status: u16, detail: impl Into<String>) -> Self {
        Self::Status {
            status,
            detail: Some(detail.into()),
        }
    }
}

/// Sends one chat-completion request and returns the first choice's text.
///
/// Implementors own transport, authentication and wire parsing. Pacing and
/// retry live in [`crate::application::Dispatcher`], so a transport must issue
/// exactly one request per call.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn post(&self, request: &CompletionRequest) -> Result<String, TransportFailure>;
}
