// ABOUTME: CompletionClient - single-prompt completions that never fail loudly.
// ABOUTME: Times every call and folds transport/API errors into a result value.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::{LlmClient, Message, Request, Usage};
use crate::error::LlmError;

/// Sampling options for one completion call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionOptions {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl CompletionOptions {
    pub fn new(temperature: f64, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }
}

/// Why a completion call produced no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionFailure {
    /// The endpoint could not be reached or did not answer in time.
    ConnectionError(String),
    /// The endpoint answered with a non-2xx status.
    ApiError { status: u16, message: String },
    /// The endpoint answered 2xx with no choices.
    EmptyResponse,
    Other(String),
}

impl fmt::Display for CompletionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionFailure::ConnectionError(detail) => write!(f, "Connection error: {}", detail),
            CompletionFailure::ApiError { status, message } if message.is_empty() => {
                write!(f, "API error: {}", status)
            }
            CompletionFailure::ApiError { status, message } => {
                write!(f, "API error: {} ({})", status, message)
            }
            CompletionFailure::EmptyResponse => write!(f, "No response from model"),
            CompletionFailure::Other(detail) => write!(f, "Error: {}", detail),
        }
    }
}

impl From<LlmError> for CompletionFailure {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Connection(detail) => CompletionFailure::ConnectionError(detail),
            LlmError::Http(e) if e.is_connect() || e.is_timeout() => {
                CompletionFailure::ConnectionError(e.to_string())
            }
            LlmError::Api { status, message } => CompletionFailure::ApiError { status, message },
            LlmError::EmptyResponse => CompletionFailure::EmptyResponse,
            other => CompletionFailure::Other(other.to_string()),
        }
    }
}

/// Text produced by a successful completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    pub usage: Usage,
}

/// Outcome of a completion call plus how long it took.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResult {
    pub outcome: Result<Completion, CompletionFailure>,
    pub elapsed: Duration,
}

impl CompletionResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Generated text, if the call succeeded.
    pub fn text(&self) -> Option<&str> {
        self.outcome.as_ref().ok().map(|c| c.text.as_str())
    }

    pub fn failure(&self) -> Option<&CompletionFailure> {
        self.outcome.as_ref().err()
    }
}

/// Sends single user prompts to a configured model.
#[derive(Clone)]
pub struct CompletionClient {
    client: Arc<dyn LlmClient>,
    model: String,
}

impl CompletionClient {
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `prompt` as a single user message and wait for the answer.
    pub async fn complete(&self, prompt: &str, options: &CompletionOptions) -> CompletionResult {
        let request = Request::new(self.model.clone())
            .message(Message::user(prompt))
            .temperature(options.temperature)
            .max_tokens(options.max_tokens);

        let started = Instant::now();
        let outcome = self.client.create_message(&request).await;
        let elapsed = started.elapsed();

        let outcome = match outcome {
            Ok(response) => {
                debug!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis() as u64,
                    total_tokens = response.usage.total_tokens,
                    "completion succeeded"
                );
                Ok(Completion {
                    text: response.text,
                    usage: response.usage,
                })
            }
            Err(err) => {
                warn!(model = %self.model, error = %err, "completion failed");
                Err(CompletionFailure::from(err))
            }
        };

        CompletionResult { outcome, elapsed }
    }
}
