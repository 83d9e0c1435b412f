// ABOUTME: MockClient - an LlmClient that replays queued responses.
// ABOUTME: Records every request so tests can inspect the prompts sent.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmClient, Request, Response, Usage};
use crate::error::LlmError;

/// One queued reply.
#[derive(Debug)]
pub enum MockResponse {
    Text { text: String, usage: Usage },
    Error(LlmError),
}

impl MockResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_usage(text, Usage::default())
    }

    pub fn with_usage(text: impl Into<String>, usage: Usage) -> Self {
        MockResponse::Text {
            text: text.into(),
            usage,
        }
    }

    pub fn error(error: LlmError) -> Self {
        MockResponse::Error(error)
    }
}

/// Replays responses in FIFO order.
#[derive(Default)]
pub struct MockClient {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<Request>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_response(&self, response: MockResponse) {
        self.lock_responses().push_back(response);
    }

    pub fn add_responses(&self, responses: impl IntoIterator<Item = MockResponse>) {
        self.lock_responses().extend(responses);
    }

    pub fn remaining_responses(&self) -> usize {
        self.lock_responses().len()
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<Request> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The last user message of every request received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter_map(|req| req.messages.last().map(|m| m.content.clone()))
            .collect()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<MockResponse>> {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for MockClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockClient")
            .field("remaining_responses", &self.remaining_responses())
            .finish()
    }
}

#[async_trait]
impl LlmClient for MockClient {
    async fn create_message(&self, req: &Request) -> Result<Response, LlmError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(req.clone());

        let next = self.lock_responses().pop_front().ok_or_else(|| {
            LlmError::Configuration("MockClient: no more responses in queue".to_string())
        })?;

        match next {
            MockResponse::Text { text, usage } => Ok(Response { text, usage }),
            MockResponse::Error(err) => Err(err),
        }
    }
}
