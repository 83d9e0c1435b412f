// ABOUTME: Tests for phase rendering - result lines, error sections, and
// ABOUTME: labelling of heuristic answers.

use super::*;
use crate::tool::{Dispatcher, parse_tool_calls};

#[test]
fn test_query_banner() {
    let banner = render_query_banner("What's 2 + 2?");
    assert!(banner.contains("PROCESSING QUERY: What's 2 + 2?"));
    assert!(banner.contains(&"=".repeat(60)));
}

#[test]
fn test_tool_phase_lists_results_and_errors() {
    let parsed = parse_tool_calls(
        "TOOL_CALL: math.average([18, 50])\nTOOL_CALL: math.divide(1, 0)\nTOOL_CALL: math.add(1 2)",
    );
    let report = Dispatcher::new().execute(&parsed.calls);

    let out = render_tool_phase(&parsed, &report);

    assert!(out.contains("🔧 TOOL EXECUTION PHASE:"));
    assert!(out.contains("Tool Results:\n- math.average([18, 50]) = 34.0\n"));
    assert!(out.contains("Errors:\n"));
    assert!(out.contains("- Error parsing tool call math.add:"));
    assert!(out.contains("- Error executing math.divide(1, 0): Cannot divide by zero"));
}

#[test]
fn test_tool_phase_without_calls() {
    let parsed = parse_tool_calls("Just thinking.");
    let report = Dispatcher::new().execute(&parsed.calls);

    let out = render_tool_phase(&parsed, &report);
    assert!(out.contains("No tools were needed for this query."));
    assert!(!out.contains("Tool Results:"));
}

#[test]
fn test_final_answer_labels_heuristics() {
    let out = render_final_answer(&FinalAnswer::Synthesized("42".into()));
    assert!(out.contains("💡 FINAL ANSWER PHASE:"));
    assert!(out.ends_with("42\n"));

    let out = render_final_answer(&FinalAnswer::Heuristic("42".into()));
    assert!(out.contains("answer taken from the last line of the reasoning"));
}

#[test]
fn test_reasoning_phase() {
    let out = render_reasoning("Step 1");
    assert!(out.contains("🧠 REASONING PHASE:\n----"));
    assert!(out.ends_with("Step 1\n"));
}
