// ABOUTME: Tests for the Dispatcher - routing, result keys, collisions,
// ABOUTME: and per-call error collection.

use super::*;
use crate::tool::parse_tool_calls;

fn run(text: &str) -> ExecutionReport {
    Dispatcher::new().execute(&parse_tool_calls(text).calls)
}

#[test]
fn test_empty_batch() {
    let report = Dispatcher::new().execute(&[]);
    assert!(report.is_empty());
    assert!(!report.has_results());
}

#[test]
fn test_average_end_to_end() {
    let report = run("TOOL_CALL: math.average([18, 50])");

    assert!(report.errors.is_empty());
    assert_eq!(
        report.results,
        vec![("math.average([18, 50])".to_string(), Value::Float(34.0))]
    );
    assert_eq!(report.get("math.average([18, 50])").map(|v| v.to_string()), Some("34.0".into()));
}

#[test]
fn test_mixed_namespaces_in_order() {
    let report = run(
        "TOOL_CALL: math.square_root(16)\nTOOL_CALL: string.count_vowels(\"hello\")",
    );

    assert_eq!(
        report.results,
        vec![
            ("math.square_root(16)".to_string(), Value::Float(4.0)),
            ("string.count_vowels(hello)".to_string(), Value::Int(2)),
        ]
    );
}

#[test]
fn test_namespace_is_case_insensitive() {
    let report = run("TOOL_CALL: Math.add(1, 2)");
    assert_eq!(report.get("math.add(1, 2)"), Some(&Value::Int(3)));
}

#[test]
fn test_unknown_function() {
    let report = run("TOOL_CALL: math.nonexistent(1)");

    assert!(!report.has_results());
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("nonexistent"));
    assert!(report.errors[0].starts_with("Error executing math.nonexistent(1):"));
}

#[test]
fn test_unknown_namespace() {
    let report = run("TOOL_CALL: os.system(\"ls\")");

    assert_eq!(report.errors, vec!["Unknown tool type: os".to_string()]);
}

#[test]
fn test_error_does_not_abort_batch() {
    let report = run("TOOL_CALL: math.divide(1, 0)\nTOOL_CALL: math.add(2, 2)");

    assert_eq!(
        report.errors,
        vec!["Error executing math.divide(1, 0): Cannot divide by zero".to_string()]
    );
    assert_eq!(report.get("math.add(2, 2)"), Some(&Value::Int(4)));
}

#[test]
fn test_wrong_arity() {
    let report = run("TOOL_CALL: math.add(1)");
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("takes 2 argument(s) but 1 were given"));
}

#[test]
fn test_identical_renderings_collide() {
    let report = run(
        "TOOL_CALL: math.add(1, 2)\nTOOL_CALL: math.add(5, 5)\nTOOL_CALL: math.add(1, 2)",
    );
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[0].0, "math.add(1, 2)");
}

#[test]
fn test_insert_replaces_in_place() {
    let mut report = ExecutionReport::default();
    report.insert("a".into(), Value::Int(1));
    report.insert("b".into(), Value::Int(2));
    report.insert("a".into(), Value::Int(3));

    assert_eq!(
        report.results,
        vec![("a".to_string(), Value::Int(3)), ("b".to_string(), Value::Int(2))]
    );
}

#[test]
fn test_registry_lookup() {
    let dispatcher = Dispatcher::new();
    assert_eq!(dispatcher.registries().len(), 2);
    assert!(dispatcher.registry("STRING").is_some());
    assert!(dispatcher.registry("file").is_none());
}
