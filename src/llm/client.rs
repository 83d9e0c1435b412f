// ABOUTME: Defines the LlmClient trait - the abstraction layer that lets the
// ABOUTME: pipelines talk to any text-completion provider.

use std::time::Duration;

use async_trait::async_trait;

use super::{Request, Response};
use crate::error::LlmError;

/// Bounded wait applied to every completion request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Trait for LLM client implementations.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Create a message (non-streaming).
    async fn create_message(&self, req: &Request) -> Result<Response, LlmError>;
}

/// Build the shared HTTP client with the request timeout applied.
pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LlmError::Configuration(format!("failed to build HTTP client: {}", e)))
}
