// ABOUTME: Console rendering for the reasoning pipeline's three phases.
// ABOUTME: Pure string builders; the binary decides when to print them.

use std::fmt::Write as _;

use super::FinalAnswer;
use crate::tool::{ExecutionReport, ParseOutcome};

const BANNER: usize = 60;
const RULE: usize = 40;

fn phase(title: &str) -> String {
    format!("\n{}\n{}\n", title, "-".repeat(RULE))
}

pub fn render_query_banner(query: &str) -> String {
    let rule = "=".repeat(BANNER);
    format!("\n{rule}\nPROCESSING QUERY: {query}\n{rule}\n")
}

pub fn render_reasoning(reasoning: &str) -> String {
    let mut out = phase("🧠 REASONING PHASE:");
    out.push_str(reasoning);
    out.push('\n');
    out
}

/// Results as `- call = value`, then parse and execution errors.
pub fn render_tool_phase(parsed: &ParseOutcome, report: &ExecutionReport) -> String {
    let mut out = phase("🔧 TOOL EXECUTION PHASE:");

    if parsed.calls.is_empty() {
        for diagnostic in &parsed.diagnostics {
            let _ = writeln!(out, "{}", diagnostic);
        }
        out.push_str("No tools were needed for this query.\n");
        return out;
    }

    if report.has_results() {
        out.push_str("Tool Results:\n");
        for (call, value) in &report.results {
            let _ = writeln!(out, "- {} = {}", call, value);
        }
    }

    if !parsed.diagnostics.is_empty() || !report.errors.is_empty() {
        out.push_str("Errors:\n");
        for diagnostic in &parsed.diagnostics {
            let _ = writeln!(out, "- {}", diagnostic);
        }
        for error in &report.errors {
            let _ = writeln!(out, "- {}", error);
        }
    }
    out
}

pub fn render_final_answer(answer: &FinalAnswer) -> String {
    let mut out = phase("💡 FINAL ANSWER PHASE:");
    out.push_str(answer.text());
    out.push('\n');
    if let FinalAnswer::Heuristic(_) = answer {
        out.push_str("(No tool results; answer taken from the last line of the reasoning.)\n");
    }
    out
}
