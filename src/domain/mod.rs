//! # Domain Layer
//!
//! Chat models, the completion wire request, and error types.
//! This layer is independent of transports and runtime wiring.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
