// ABOUTME: Prompt construction for the reasoning pipeline - the tool-aware
// ABOUTME: chain-of-thought prompt, the final-answer prompt, and help text.

use std::fmt::Write as _;

use crate::tool::{Dispatcher, ExecutionReport, TOOL_CALL_MARKER, is_tool_call_line};

/// Answer used when the reasoning has no usable line.
pub const FALLBACK_ANSWER: &str =
    "Based on the reasoning above, the answer can be found in the analysis.";

/// Queries shown by `help`.
pub const EXAMPLE_QUERIES: &[&str] = &[
    "What's the square root of the average of 18 and 50?",
    "How many vowels are in the word 'Multimodality'?",
    "Is the number of letters in 'machine' greater than the number of vowels in 'reasoning'?",
    "What's 15 plus 27 multiplied by 3?",
    "Count the consonants in 'artificial intelligence'",
    "What's the factorial of 5?",
    "Find the longest word in 'machine learning is fascinating'",
];

/// Build the chain-of-thought prompt advertising every registered catalog.
pub fn reasoning_prompt(query: &str, dispatcher: &Dispatcher) -> String {
    let mut catalogs = String::new();
    for registry in dispatcher.registries() {
        let _ = writeln!(
            catalogs,
            "{} TOOLS: {}",
            registry.namespace().to_uppercase(),
            registry.list().join(", ")
        );
    }

    format!(
        "You are a helpful assistant that can reason through problems step by step and use tools when necessary.

Available Tools:
{catalogs}
When you need to use a tool, format your tool call exactly like this:
{marker} tool_type.function_name(arguments)

Examples:
- {marker} math.square_root(25)
- {marker} string.count_vowels(\"hello\")
- {marker} math.average([10, 20, 30])

Please analyze this query step by step using chain-of-thought reasoning:

Query: {query}

Think through this step by step:
1. What is the query asking for?
2. What information or calculations do I need?
3. Do I need to use any tools? If so, which ones and with what arguments?
4. How will I combine the results to get the final answer?

Provide your reasoning and any necessary tool calls.",
        catalogs = catalogs,
        marker = TOOL_CALL_MARKER,
        query = query,
    )
}

/// Build the prompt asking the model to combine its reasoning with tool results.
pub fn final_prompt(query: &str, reasoning: &str, report: &ExecutionReport) -> String {
    let mut results = String::new();
    for (call, value) in &report.results {
        let _ = writeln!(results, "- {}: {}", call, value);
    }

    format!(
        "Based on your previous reasoning and the tool results, provide a clear final answer.

Original Query: {query}

Your Previous Reasoning:
{reasoning}

Tool Results:
{results}
Now provide a clear, concise final answer to the original query."
    )
}

/// The last non-empty line of `reasoning` that is not a tool call, trimmed.
pub fn heuristic_answer(reasoning: &str) -> Option<&str> {
    reasoning
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty() && !is_tool_call_line(line))
        .map(str::trim)
}

/// Catalog listing plus example queries, shown by the `help` command.
pub fn help_text(dispatcher: &Dispatcher) -> String {
    let mut out = String::from("\n🔧 AVAILABLE TOOLS:\n");
    out.push_str(&"-".repeat(30));
    out.push('\n');

    for (i, registry) in dispatcher.registries().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let icon = if registry.namespace() == "math" { "📊" } else { "📝" };
        let mut title = registry.namespace().to_string();
        if let Some(first) = title.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        let _ = writeln!(out, "{} {} Tools:", icon, title);
        for spec in registry.all() {
            let _ = writeln!(out, "  - {}: {}", spec.signature(), spec.description);
        }
    }

    out.push_str("\n💡 EXAMPLE QUERIES:\n");
    out.push_str(&"-".repeat(30));
    out.push('\n');
    for (i, example) in EXAMPLE_QUERIES.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, example);
    }
    out
}
