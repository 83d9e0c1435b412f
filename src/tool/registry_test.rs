// ABOUTME: Tests for Registry - lookup, arity checks, argument kinds.
// ABOUTME: Uses a small test catalog alongside the built-in ones.

use super::*;
use crate::error::ToolError;

static TEST_TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "echo",
        description: "Echoes text back",
        params: &[Param::required("text", ParamKind::Text)],
        run: |args| Ok(Value::from(args.text(0)?)),
    },
    ToolSpec {
        name: "scale",
        description: "Multiplies numbers, optionally negating",
        params: &[
            Param::required("numbers", ParamKind::NumberList),
            Param::optional("factor", ParamKind::Integer, ParamDefault::Int(2)),
            Param::optional("negate", ParamKind::Flag, ParamDefault::Flag(false)),
        ],
        run: |args| {
            let factor = args.integer(1)? as f64;
            let sign = if args.flag(2)? { -1.0 } else { 1.0 };
            Ok(Value::List(
                args.numbers(0)?
                    .into_iter()
                    .map(|n| Value::Float(n.as_f64() * factor * sign))
                    .collect(),
            ))
        },
    },
];

fn registry() -> Registry {
    Registry::new("test", TEST_TOOLS)
}

#[test]
fn test_get_and_list() {
    let registry = registry();
    assert_eq!(registry.namespace(), "test");
    assert_eq!(registry.count(), 2);
    assert_eq!(registry.list(), vec!["echo", "scale"]);
    assert_eq!(registry.get("echo").map(|s| s.name), Some("echo"));
    assert!(registry.get("nonexistent").is_none());
}

#[test]
fn test_call_positional() {
    let registry = registry();
    assert_eq!(
        registry.call("echo", &[Value::from("hi")]),
        Ok(Value::from("hi"))
    );
}

#[test]
fn test_defaults_fill_missing_optionals() {
    let registry = registry();
    let numbers = Value::List(vec![Value::Int(1), Value::Float(1.5)]);

    assert_eq!(
        registry.call("scale", &[numbers.clone()]),
        Ok(Value::List(vec![Value::Float(2.0), Value::Float(3.0)]))
    );
    assert_eq!(
        registry.call("scale", &[numbers, Value::Int(3), Value::Bool(true)]),
        Ok(Value::List(vec![Value::Float(-3.0), Value::Float(-4.5)]))
    );
}

#[test]
fn test_unknown_function() {
    let err = registry().call("missing", &[]).unwrap_err();
    assert_eq!(
        err,
        ToolError::NotFound {
            name: "missing".into(),
            available: "echo, scale".into()
        }
    );
    assert_eq!(
        err.to_string(),
        "Function 'missing' not found. Available functions: echo, scale"
    );
}

#[test]
fn test_arity_mismatch() {
    let registry = registry();

    let err = registry.call("echo", &[]).unwrap_err();
    assert!(matches!(err, ToolError::InvalidParams(_)));
    assert!(err.to_string().contains("echo(text) takes 1 argument(s) but 0 were given"));

    let err = registry
        .call("scale", &[Value::List(vec![]), Value::Int(1), Value::Bool(true), Value::Int(0)])
        .unwrap_err();
    assert!(err.to_string().contains("takes 1 to 3 argument(s) but 4 were given"));
}

#[test]
fn test_kind_mismatch() {
    let registry = registry();

    let err = registry.call("echo", &[Value::Int(5)]).unwrap_err();
    assert_eq!(
        err,
        ToolError::InvalidParams("argument 'text' must be a string, got int".into())
    );

    let err = registry
        .call("scale", &[Value::List(vec![Value::from("x")])])
        .unwrap_err();
    assert!(err.to_string().contains("must be a list of numbers, got str"));
}

#[test]
fn test_signature() {
    let registry = registry();
    assert_eq!(registry.get("echo").unwrap().signature(), "echo(text)");
    assert_eq!(
        registry.get("scale").unwrap().signature(),
        "scale(numbers, factor=2, negate=False)"
    );
}

#[test]
fn test_builtin_catalog_sizes() {
    assert_eq!(crate::tools::math_registry().count(), 14);
    assert_eq!(crate::tools::string_registry().count(), 21);
}
