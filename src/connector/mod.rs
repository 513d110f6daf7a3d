//! # Connector Layer
//!
//! External integrations implementing application ports:
//! - HTTP transport to an OpenAI-compatible chat-completions endpoint
//! - Scripted in-memory transport for tests and dry runs
//! - Environment configuration and CLI wiring

pub mod adapter;
pub mod api;
pub mod config;

pub use adapter::*;
pub use config::*;
