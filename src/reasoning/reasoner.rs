// ABOUTME: Reasoner - drives reason → parse → dispatch → final answer for one
// ABOUTME: query, exposing each stage so callers can report progress.

use std::fmt;

use tracing::{debug, info};

use super::prompt::{FALLBACK_ANSWER, final_prompt, heuristic_answer, reasoning_prompt};
use crate::error::ReasoningError;
use crate::llm::{CompletionClient, CompletionOptions};
use crate::tool::{Dispatcher, ExecutionReport, ParseOutcome, parse_tool_calls};

/// Sampling for the chain-of-thought call.
pub const REASONING_OPTIONS: CompletionOptions = CompletionOptions {
    temperature: 0.1,
    max_tokens: 1000,
};

/// Sampling for the final-answer call.
pub const FINAL_OPTIONS: CompletionOptions = CompletionOptions {
    temperature: 0.1,
    max_tokens: 500,
};

/// How the final answer was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalAnswer {
    /// The model combined its reasoning with tool results.
    Synthesized(String),
    /// No tool results; taken from the last line of the reasoning.
    Heuristic(String),
    /// The final-answer call failed.
    Failed(String),
}

impl FinalAnswer {
    pub fn text(&self) -> &str {
        match self {
            FinalAnswer::Synthesized(text)
            | FinalAnswer::Heuristic(text)
            | FinalAnswer::Failed(text) => text,
        }
    }

    /// Only synthesized answers come from the model with tool results in hand.
    pub fn is_authoritative(&self) -> bool {
        matches!(self, FinalAnswer::Synthesized(_))
    }
}

impl fmt::Display for FinalAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Everything produced while answering one query.
#[derive(Debug, Clone, PartialEq)]
pub struct ReasoningOutcome {
    pub query: String,
    pub reasoning: String,
    pub parsed: ParseOutcome,
    pub report: ExecutionReport,
    pub final_answer: FinalAnswer,
}

/// Answers queries with a model plus the built-in tool catalogs.
#[derive(Clone)]
pub struct Reasoner {
    client: CompletionClient,
    dispatcher: Dispatcher,
}

impl Reasoner {
    pub fn new(client: CompletionClient) -> Self {
        Self::with_dispatcher(client, Dispatcher::new())
    }

    pub fn with_dispatcher(client: CompletionClient, dispatcher: Dispatcher) -> Self {
        Self { client, dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Run the whole pipeline for `query`.
    pub async fn process(&self, query: &str) -> Result<ReasoningOutcome, ReasoningError> {
        let reasoning = self.reason(query).await?;
        let (parsed, report) = self.run_tools(&reasoning);
        let final_answer = self.conclude(query, &reasoning, &report).await;

        Ok(ReasoningOutcome {
            query: query.to_string(),
            reasoning,
            parsed,
            report,
            final_answer,
        })
    }

    /// Ask the model to reason about `query`, emitting tool calls as needed.
    pub async fn reason(&self, query: &str) -> Result<String, ReasoningError> {
        let prompt = reasoning_prompt(query, &self.dispatcher);
        let result = self.client.complete(&prompt, &REASONING_OPTIONS).await;
        match result.outcome {
            Ok(completion) => {
                debug!(
                    elapsed_ms = result.elapsed.as_millis() as u64,
                    "reasoning received"
                );
                Ok(completion.text)
            }
            Err(failure) => Err(ReasoningError::Completion(failure)),
        }
    }

    /// Parse tool calls out of `reasoning` and execute them.
    pub fn run_tools(&self, reasoning: &str) -> (ParseOutcome, ExecutionReport) {
        let parsed = parse_tool_calls(reasoning);
        let report = self.dispatcher.execute(&parsed.calls);
        info!(
            calls = parsed.calls.len(),
            malformed = parsed.diagnostics.len(),
            results = report.results.len(),
            errors = report.errors.len(),
            "tool phase finished"
        );
        (parsed, report)
    }

    /// Produce the final answer: synthesized when tools produced results,
    /// otherwise picked from the reasoning text.
    pub async fn conclude(
        &self,
        query: &str,
        reasoning: &str,
        report: &ExecutionReport,
    ) -> FinalAnswer {
        if !report.has_results() {
            let answer = heuristic_answer(reasoning).unwrap_or(FALLBACK_ANSWER);
            return FinalAnswer::Heuristic(answer.to_string());
        }

        let prompt = final_prompt(query, reasoning, report);
        let result = self.client.complete(&prompt, &FINAL_OPTIONS).await;
        match result.outcome {
            Ok(completion) => FinalAnswer::Synthesized(completion.text),
            Err(failure) => FinalAnswer::Failed(format!("Error getting final answer: {}", failure)),
        }
    }
}

/// Drive `work` to completion unless `interrupt` resolves first, in which
/// case `work` is dropped mid-flight and `None` is returned.
pub async fn until_interrupted<F, I>(work: F, interrupt: I) -> Option<F::Output>
where
    F: Future,
    I: Future,
{
    tokio::select! {
        out = work => Some(out),
        _ = interrupt => None,
    }
}
