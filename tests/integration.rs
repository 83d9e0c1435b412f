// ABOUTME: Integration tests verifying modules work together.
// ABOUTME: Tests the full workflows without network access, using MockClient.

use std::sync::Arc;

use reckon::compare::{render_recommendations, render_report, save_report};
use reckon::llm::{MockClient, MockResponse, Usage};
use reckon::prelude::*;

#[test]
fn test_parse_and_dispatch() {
    let text = r#"Let me work this out.
TOOL_CALL: math.average([18, 50])
TOOL_CALL: string.count_vowels("Multimodality")
TOOL_CALL: string.is_palindrome("Racecar")
TOOL_CALL: file.read("/etc/passwd")"#;

    let parsed = parse_tool_calls(text);
    assert_eq!(parsed.calls.len(), 4);

    let report = Dispatcher::new().execute(&parsed.calls);
    let rendered: Vec<String> = report
        .results
        .iter()
        .map(|(call, value)| format!("{} = {}", call, value))
        .collect();

    assert_eq!(
        rendered,
        vec![
            "math.average([18, 50]) = 34.0",
            "string.count_vowels(Multimodality) = 5",
            "string.is_palindrome(Racecar) = True",
        ]
    );
    assert_eq!(report.errors, vec!["Unknown tool type: file".to_string()]);
}

#[test]
fn test_untrusted_arguments_are_never_evaluated() {
    let parsed = parse_tool_calls("TOOL_CALL: math.add(__import__('os').system('ls'), 1)");
    assert!(parsed.calls.is_empty());
    assert_eq!(parsed.diagnostics.len(), 1);
}

#[tokio::test]
async fn test_reasoner_end_to_end() {
    let mock = Arc::new(MockClient::new());
    mock.add_responses([
        MockResponse::text(
            "I need the factorial.\nTOOL_CALL: math.factorial(5)\nTOOL_CALL: math.nonexistent(1)",
        ),
        MockResponse::text("5! is 120."),
    ]);

    let reasoner = Reasoner::new(CompletionClient::new(mock.clone(), "test-model"));
    let outcome = reasoner.process("What's the factorial of 5?").await.unwrap();

    assert_eq!(outcome.report.get("math.factorial(5)"), Some(&Value::Int(120)));
    assert_eq!(outcome.report.errors.len(), 1);
    assert!(outcome.report.errors[0].contains("nonexistent"));
    assert_eq!(outcome.final_answer, FinalAnswer::Synthesized("5! is 120.".into()));
    assert_eq!(mock.remaining_responses(), 0);
}

#[tokio::test]
async fn test_comparator_end_to_end() {
    let mock = Arc::new(MockClient::new());
    mock.add_responses([
        MockResponse::with_usage(
            "Once upon a time, an apple fell.",
            Usage {
                prompt_tokens: 8,
                completion_tokens: 8,
                total_tokens: 16,
            },
        ),
        MockResponse::text("Gravity is the attraction between masses."),
        MockResponse::error(LlmError::EmptyResponse),
    ]);

    let config = ComparatorConfig::default();
    let comparator = Comparator::with_client(CompletionClient::new(mock, "local-model"), &config);
    let report = comparator.run("Explain gravity").await;

    assert_eq!(
        report.successful(),
        vec![ModelVariant::Base, ModelVariant::Instruct]
    );

    let display = render_report(&report);
    assert!(display.contains("Tokens Used: 16"));
    assert!(display.contains("❌ Error: No response from model"));
    assert!(render_recommendations(&report).contains("base, instruct"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("comparison.json");
    save_report(&report, &path).unwrap();

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["prompt"], "Explain gravity");
    assert_eq!(saved["results"]["fine_tuned"]["success"], false);
    assert_eq!(
        saved["results"]["instruct"]["text"],
        "Gravity is the attraction between masses."
    );
    assert!(saved["model_characteristics"]["base"]["strengths"].is_array());
}
