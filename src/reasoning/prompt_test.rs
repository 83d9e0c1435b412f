// ABOUTME: Tests for reasoning prompts, the heuristic answer picker,
// ABOUTME: and the help listing.

use super::*;
use crate::tool::{Dispatcher, ExecutionReport, Value};

#[test]
fn test_reasoning_prompt_lists_catalogs() {
    let prompt = reasoning_prompt("What's 2 + 2?", &Dispatcher::new());

    assert!(prompt.contains("MATH TOOLS: add, subtract, multiply, divide"));
    assert!(prompt.contains("STRING TOOLS: count_vowels, count_consonants"));
    assert!(prompt.contains("remove_punctuation"));
    assert!(prompt.contains("TOOL_CALL: tool_type.function_name(arguments)"));
    assert!(prompt.contains("- TOOL_CALL: math.average([10, 20, 30])"));
    assert!(prompt.contains("Query: What's 2 + 2?"));
    assert!(prompt.ends_with("Provide your reasoning and any necessary tool calls."));
}

#[test]
fn test_final_prompt_includes_results() {
    let mut report = ExecutionReport::default();
    report.insert("math.average([18, 50])".into(), Value::Float(34.0));
    report.insert("math.square_root(34.0)".into(), Value::Float(5.830951894845301));

    let prompt = final_prompt("sqrt of the average?", "I will average first.", &report);

    assert!(prompt.contains("Original Query: sqrt of the average?"));
    assert!(prompt.contains("Your Previous Reasoning:\nI will average first."));
    assert!(prompt.contains("Tool Results:\n- math.average([18, 50]): 34.0\n- math.square_root(34.0): 5.830951894845301\n"));
    assert!(prompt.ends_with("Now provide a clear, concise final answer to the original query."));
}

#[test]
fn test_heuristic_answer_skips_tool_calls_and_blanks() {
    let reasoning = "Step 1: think.\nThe answer is 4.\nTOOL_CALL: math.add(2, 2)\n\n   \n";
    assert_eq!(heuristic_answer(reasoning), Some("The answer is 4."));

    assert_eq!(heuristic_answer("  indented answer  "), Some("indented answer"));
    assert_eq!(heuristic_answer("TOOL_CALL: math.add(1, 1)"), None);
    assert_eq!(heuristic_answer(""), None);
}

#[test]
fn test_heuristic_answer_keeps_indented_tool_lines() {
    // Only lines that start with the marker are skipped.
    assert_eq!(
        heuristic_answer("  TOOL_CALL: math.add(1, 1)"),
        Some("TOOL_CALL: math.add(1, 1)")
    );
}

#[test]
fn test_help_text() {
    let help = help_text(&Dispatcher::new());

    assert!(help.contains("📊 Math Tools:"));
    assert!(help.contains("📝 String Tools:"));
    assert!(help.contains("  - round_number(number, decimals=0): Round a number"));
    assert!(help.contains("is_palindrome(text, ignore_case=True, ignore_spaces=True)"));
    assert!(help.contains("  1. What's the square root of the average of 18 and 50?"));
    assert_eq!(EXAMPLE_QUERIES.len(), 7);
}
