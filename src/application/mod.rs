//! # Application Layer
//!
//! Ports and the dispatch use case coordinating pacing, retry and classification.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
