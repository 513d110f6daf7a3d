use std::fmt;

use crate::domain::DomainError;

pub const API_URL_VAR: &str = "API_URL";
pub const API_KEY_VAR: &str = "API_KEY";

/// Endpoint and bearer credential for the completion API.
#[derive(Clone)]
pub struct ChatConfig {
    api_url: String,
    api_key: String,
}

impl ChatConfig {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Read `API_URL` and `API_KEY` from the process environment.
    ///
    /// These are the only configuration variables recognized. Missing or empty
    /// values are rejected.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let require = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| DomainError::config(format!("{name} is not set")))
        };
        Ok(Self::new(require(API_URL_VAR)?, require(API_KEY_VAR)?))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
