use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::{CompletionTransport, TransportFailure};
use crate::connector::ChatConfig;
use crate::domain::CompletionRequest;

/// Minimal subset of the chat-completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// HTTP client for an OpenAI-compatible chat-completions endpoint.
///
/// `url` is the full endpoint (e.g. `https://api.openai.com/v1/chat/completions`);
/// nothing is appended to it. No request timeout is configured, so a call lasts
/// as long as the underlying connection does.
pub struct OpenAiClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.api_url(), config.api_key())
    }

    /// Pull `error.message` out of an upstream error body, if it has one.
    fn error_detail(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .and_then(|e| e.message)
    }
}

fn send_failure(e: reqwest::Error) -> TransportFailure {
    if e.is_builder() {
        TransportFailure::Setup(e.to_string())
    } else {
        TransportFailure::NoResponse(e.to_string())
    }
}

#[async_trait]
impl CompletionTransport for OpenAiClient {
    async fn post(&self, request: &CompletionRequest) -> Result<String, TransportFailure> {
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(send_failure)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!("OpenAiClient: failed to read error body: {e}");
                    String::new()
                }
            };
            warn!("OpenAiClient: API returned {status}");
            debug!("OpenAiClient: error body: {body}");
            return Err(TransportFailure::Status {
                status: status.as_u16(),
                detail: Self::error_detail(&body),
            });
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            if e.is_decode() {
                TransportFailure::Setup(format!("failed to parse completion response: {e}"))
            } else {
                TransportFailure::NoResponse(e.to_string())
            }
        })?;

        api_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| {
                TransportFailure::Setup("completion response contained no choices".to_string())
            })
    }
}
