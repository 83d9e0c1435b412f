// ABOUTME: Defines all error types for the reckon library using thiserror.
// ABOUTME: Each subsystem has its own error enum, unified under ReckonError.

use crate::llm::CompletionFailure;

/// Top-level error type for the reckon library.
#[derive(Debug, thiserror::Error)]
pub enum ReckonError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Reasoning error: {0}")]
    Reasoning(#[from] ReasoningError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("No response from model")]
    EmptyResponse,

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl LlmError {
    /// Classify an error raised while sending a request.
    ///
    /// Timeouts and refused connections mean the endpoint was never reached,
    /// everything else stays a plain HTTP error.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            LlmError::Connection(err.to_string())
        } else {
            LlmError::Http(err)
        }
    }
}

/// A malformed argument literal inside a tool call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at offset {offset}")]
pub struct LiteralError {
    /// Byte offset into the parsed text.
    pub offset: usize,
    pub message: String,
}

impl LiteralError {
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

/// Domain failures a tool function can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolErrorKind {
    DivisionByZero,
    InvalidDomain,
    EmptyInput,
    Overflow,
}

/// Errors from tool operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ToolError {
    #[error("Parse error: {0}")]
    Parse(#[from] LiteralError),

    #[error("Unknown tool type: {0}")]
    UnknownNamespace(String),

    #[error("Function '{name}' not found. Available functions: {available}")]
    NotFound { name: String, available: String },

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("{message}")]
    Execution {
        kind: ToolErrorKind,
        message: String,
    },
}

impl ToolError {
    /// Create a domain error raised by a tool function.
    pub fn execution(kind: ToolErrorKind, message: impl Into<String>) -> Self {
        ToolError::Execution {
            kind,
            message: message.into(),
        }
    }

    /// The domain error kind, if this is an execution failure.
    pub fn kind(&self) -> Option<ToolErrorKind> {
        match self {
            ToolError::Execution { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Errors from loading configuration. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingCredential(String),

    #[error("invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

/// Errors from the tool-reasoning pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ReasoningError {
    #[error("Error getting LLM response: {0}")]
    Completion(CompletionFailure),
}
