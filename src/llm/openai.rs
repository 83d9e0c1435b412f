// ABOUTME: OpenAI-compatible chat completion client (OpenAI, LM Studio, Ollama).
// ABOUTME: Implements LlmClient against <base_url>/v1/chat/completions.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::client::{DEFAULT_TIMEOUT, http_client};
use super::{Message, Request, Response, Usage};
use crate::error::LlmError;

/// Base URL of the hosted OpenAI API.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Base URL of a local LM Studio server.
pub const LM_STUDIO_BASE_URL: &str = "http://localhost:1234";

/// OpenAI API request format.
#[derive(Debug, Serialize)]
pub struct OpenAIRequest {
    pub model: String,
    pub messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    pub stream: bool,
}

/// OpenAI message format.
#[derive(Debug, Serialize, Deserialize)]
pub struct OpenAIMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// OpenAI API response format.
#[derive(Debug, Deserialize)]
pub struct OpenAIResponse {
    #[serde(default)]
    pub choices: Vec<OpenAIChoice>,
    pub usage: Option<OpenAIUsage>,
}

/// OpenAI response choice.
#[derive(Debug, Deserialize)]
pub struct OpenAIChoice {
    pub message: OpenAIMessage,
}

/// OpenAI usage stats.
#[derive(Debug, Default, Deserialize)]
pub struct OpenAIUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// OpenAI API error response.
#[derive(Debug, Deserialize)]
pub struct OpenAIError {
    pub error: OpenAIErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct OpenAIErrorDetail {
    pub message: String,
}

/// Client for OpenAI-compatible chat completion endpoints.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    base_url: String,
    api_key: Option<String>,
    http: reqwest::Client,
}

impl OpenAIClient {
    /// Create a client for the server at `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, LlmError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LlmError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            base_url,
            api_key: None,
            http: http_client(timeout)?,
        })
    }

    /// Send `Authorization: Bearer <key>` with every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Full URL of the chat completions endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

impl From<&Message> for OpenAIMessage {
    fn from(msg: &Message) -> Self {
        OpenAIMessage {
            role: "user".to_string(),
            content: Some(msg.content.clone()),
        }
    }
}

impl From<&Request> for OpenAIRequest {
    fn from(req: &Request) -> Self {
        OpenAIRequest {
            model: req.model.clone(),
            messages: req.messages.iter().map(OpenAIMessage::from).collect(),
            max_tokens: req.max_tokens,
            temperature: req.temperature,
            stream: false,
        }
    }
}

impl TryFrom<OpenAIResponse> for Response {
    type Error = LlmError;

    fn try_from(resp: OpenAIResponse) -> Result<Self, Self::Error> {
        let choice = resp
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyResponse)?;
        let usage = resp.usage.unwrap_or_default();

        Ok(Response {
            text: choice.message.content.unwrap_or_default(),
            usage: Usage {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
                total_tokens: usage.total_tokens,
            },
        })
    }
}

/// Pull a readable message out of an error body, preferring the JSON detail.
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<OpenAIError>(body) {
        Ok(error) => error.error.message,
        Err(_) => body.trim().to_string(),
    }
}

#[async_trait]
impl super::client::LlmClient for OpenAIClient {
    async fn create_message(&self, req: &Request) -> Result<Response, LlmError> {
        let openai_req = OpenAIRequest::from(req);
        let url = self.endpoint();
        debug!(url = %url, model = %openai_req.model, "sending chat completion");

        let mut builder = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&openai_req);
        if let Some(ref key) = self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", key));
        }

        let response = builder.send().await.map_err(LlmError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let openai_resp: OpenAIResponse = response.json().await?;
        Response::try_from(openai_resp)
    }
}

#[cfg(test)]
mod openai_test {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let req = Request::new("local-model")
            .message(Message::user("Hello"))
            .temperature(0.7)
            .max_tokens(500);

        let openai_req = OpenAIRequest::from(&req);
        assert_eq!(openai_req.model, "local-model");
        assert_eq!(openai_req.messages.len(), 1);
        assert_eq!(openai_req.messages[0].role, "user");

        let json = serde_json::to_value(&openai_req).unwrap();
        assert_eq!(json["stream"], false);
        assert_eq!(json["max_tokens"], 500);
        assert_eq!(json["temperature"], 0.7);
        assert_eq!(json["messages"][0]["content"], "Hello");
    }

    #[test]
    fn test_response_conversion() {
        let json = r#"{
            "id": "chatcmpl-1",
            "model": "local-model",
            "choices": [{"message": {"role": "assistant", "content": "Hi!"}, "finish_reason": "stop"}],
            "usage": {"prompt_tokens": 5, "completion_tokens": 2, "total_tokens": 7}
        }"#;
        let resp: OpenAIResponse = serde_json::from_str(json).unwrap();
        let resp = Response::try_from(resp).unwrap();

        assert_eq!(resp.text, "Hi!");
        assert_eq!(resp.usage.total_tokens, 7);
    }

    #[test]
    fn test_missing_usage_defaults_to_zero() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": "ok"}}]}"#;
        let resp: OpenAIResponse = serde_json::from_str(json).unwrap();
        let resp = Response::try_from(resp).unwrap();
        assert_eq!(resp.usage, Usage::default());
    }

    #[test]
    fn test_empty_choices_is_empty_response() {
        let resp: OpenAIResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            Response::try_from(resp),
            Err(LlmError::EmptyResponse)
        ));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = OpenAIClient::new("http://localhost:1234/").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:1234/v1/chat/completions");
    }

    #[test]
    fn test_error_message_prefers_json_detail() {
        let body = r#"{"error": {"message": "model not loaded", "type": "invalid_request"}}"#;
        assert_eq!(error_message(body), "model not loaded");
        assert_eq!(error_message("Internal Server Error\n"), "Internal Server Error");
    }
}
