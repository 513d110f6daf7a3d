use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Category of a failed completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Upstream answered 429. Only ever seen by the dispatcher, which retries it.
    RateLimited,
    RateLimitPersisted,
    InvalidCredential,
    UpstreamServerError,
    UpstreamUnavailable,
    UpstreamError,
    NetworkUnreachable,
    RequestSetupError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::RateLimited => "rate_limited",
            ErrorKind::RateLimitPersisted => "rate_limit_persisted",
            ErrorKind::InvalidCredential => "invalid_credential",
            ErrorKind::UpstreamServerError => "upstream_server_error",
            ErrorKind::UpstreamUnavailable => "upstream_unavailable",
            ErrorKind::UpstreamError => "upstream_error",
            ErrorKind::NetworkUnreachable => "network_unreachable",
            ErrorKind::RequestSetupError => "request_setup_error",
        }
    }
}

/// A dispatch failure tagged with its [`ErrorKind`].
///
/// `Display` yields the operator-facing message and nothing else, so shells can
/// print it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ClassifiedError {
    kind: ErrorKind,
    message: String,
}

impl ClassifiedError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn rate_limited() -> Self {
        Self::new(ErrorKind::RateLimited, "Rate limit exceeded.")
    }

    pub fn rate_limit_persisted() -> Self {
        Self::new(
            ErrorKind::RateLimitPersisted,
            "Rate limit still exceeded. Please try again in a few minutes.",
        )
    }

    pub fn invalid_credential() -> Self {
        Self::new(
            ErrorKind::InvalidCredential,
            "Invalid API key. Please check your environment variables.",
        )
    }

    pub fn upstream_server_error() -> Self {
        Self::new(
            ErrorKind::UpstreamServerError,
            "OpenAI server error. Please try again later.",
        )
    }

    pub fn upstream_unavailable() -> Self {
        Self::new(
            ErrorKind::UpstreamUnavailable,
            "OpenAI service is unavailable. Please try again later.",
        )
    }

    pub fn upstream_error(detail: Option<&str>) -> Self {
        let detail = detail
            .filter(|d| !d.is_empty())
            .unwrap_or("Unknown error occurred");
        Self::new(ErrorKind::UpstreamError, format!("OpenAI API Error: {detail}"))
    }

    pub fn network_unreachable() -> Self {
        Self::new(
            ErrorKind::NetworkUnreachable,
            "No response from OpenAI. Please check your internet connection.",
        )
    }

    pub fn request_setup(detail: impl AsRef<str>) -> Self {
        Self::new(
            ErrorKind::RequestSetupError,
            format!("Error setting up the request: {}", detail.as_ref()),
        )
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_rate_limited(&self) -> bool {
        self.kind == ErrorKind::RateLimited
    }
}
