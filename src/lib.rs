pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use cli::Commands;

pub use application::{
    classify, delay_since, CompletionTransport, DispatchPolicy, Dispatcher, RateLimiter,
    TransportFailure, MIN_DELAY_BETWEEN_REQUESTS, RATE_LIMIT_COOLDOWN,
};

pub use connector::{ChatConfig, OpenAiClient, ScriptedRequest, ScriptedTransport};

pub use domain::{
    ChatMessage, ChatResponse, ClassifiedError, CompletionMessage, CompletionRequest,
    DomainError, ErrorKind,
};
