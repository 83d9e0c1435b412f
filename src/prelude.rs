// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use reckon::prelude::*;` to get started quickly.

pub use crate::compare::{
    Comparator, ComparisonReport, ComparisonResult, ModelVariant, render_recommendations,
    render_report, save_report,
};
pub use crate::config::{ComparatorConfig, Provider, ReasonerConfig};
pub use crate::error::{
    ConfigError, LlmError, ReasoningError, ReckonError, ToolError, ToolErrorKind,
};
pub use crate::llm::{
    CompletionClient, CompletionFailure, CompletionOptions, CompletionResult, GeminiClient,
    LlmClient, Message, OpenAIClient, Request, Response, Usage,
};
pub use crate::reasoning::{FinalAnswer, Reasoner, ReasoningOutcome};
pub use crate::tool::{
    Dispatcher, ExecutionReport, ParseOutcome, Registry, ToolCall, Value, parse_tool_calls,
};
