// ABOUTME: Extracts TOOL_CALL directives from free-form model output.
// ABOUTME: Best-effort: malformed calls become diagnostics, never errors.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use super::Value;
use super::literal::LiteralParser;
use crate::error::LiteralError;

/// Marker that introduces a tool call in model output.
pub const TOOL_CALL_MARKER: &str = "TOOL_CALL:";

static CALL_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"TOOL_CALL:\s*(\w+)\.(\w+)\(").expect("tool call header pattern is valid")
});

/// A parsed request to run `namespace.function(args...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCall {
    /// Lowercased namespace, e.g. `math` or `string`.
    pub namespace: String,
    pub function: String,
    pub args: Vec<Value>,
}

impl ToolCall {
    pub fn new(namespace: impl Into<String>, function: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            namespace: namespace.into().to_lowercase(),
            function: function.into(),
            args,
        }
    }
}

/// Renders `namespace.function(arg1, arg2)`; used as the result key.
impl fmt::Display for ToolCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.namespace, self.function)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(")")
    }
}

/// A tool call that was found but could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseDiagnostic {
    pub namespace: String,
    pub function: String,
    pub error: LiteralError,
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error parsing tool call {}.{}: {}",
            self.namespace, self.function, self.error
        )
    }
}

/// Everything found in one response text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    pub calls: Vec<ToolCall>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Find every `TOOL_CALL: ns.fn(args)` in `text`, in order of appearance.
pub fn parse_tool_calls(text: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut search_from = 0;

    while let Some(caps) = CALL_HEADER.captures_at(text, search_from) {
        let header = caps.get(0).map(|m| m.end()).unwrap_or(text.len());
        let namespace = caps[1].to_lowercase();
        let function = caps[2].to_string();

        let mut parser = LiteralParser::at(text, header);
        match parser.parse_arguments() {
            Ok(args) => {
                let call = ToolCall {
                    namespace,
                    function,
                    args,
                };
                debug!(call = %call, "parsed tool call");
                outcome.calls.push(call);
                search_from = parser.position();
            }
            Err(error) => {
                let diagnostic = ParseDiagnostic {
                    namespace,
                    function,
                    error,
                };
                warn!("{}", diagnostic);
                outcome.diagnostics.push(diagnostic);
                search_from = header;
            }
        }
    }

    outcome
}

/// Whether a line is itself a tool-call directive.
pub fn is_tool_call_line(line: &str) -> bool {
    line.starts_with("TOOL_CALL")
}
