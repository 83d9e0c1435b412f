// ABOUTME: Tests for the literal parser - accepted literals and rejections.
// ABOUTME: Anything that is not a plain literal must fail to parse.

use super::*;

#[test]
fn test_numbers() {
    assert_eq!(parse_literal("42"), Ok(Value::Int(42)));
    assert_eq!(parse_literal("-5"), Ok(Value::Int(-5)));
    assert_eq!(parse_literal("+5"), Ok(Value::Int(5)));
    assert_eq!(parse_literal("2.75"), Ok(Value::Float(2.75)));
    assert_eq!(parse_literal(".5"), Ok(Value::Float(0.5)));
    assert_eq!(parse_literal("5."), Ok(Value::Float(5.0)));
    assert_eq!(parse_literal("1e3"), Ok(Value::Float(1000.0)));
    assert_eq!(parse_literal("2.5E-1"), Ok(Value::Float(0.25)));
    assert_eq!(parse_literal("  7  "), Ok(Value::Int(7)));
}

#[test]
fn test_strings() {
    assert_eq!(parse_literal(r#""hello""#), Ok(Value::from("hello")));
    assert_eq!(parse_literal("'hello'"), Ok(Value::from("hello")));
    assert_eq!(parse_literal(r#""it's""#), Ok(Value::from("it's")));
    assert_eq!(parse_literal(r#"'say \'hi\''"#), Ok(Value::from("say 'hi'")));
    assert_eq!(parse_literal(r#""a\nb""#), Ok(Value::from("a\nb")));
    assert_eq!(parse_literal(r#""a, b)""#), Ok(Value::from("a, b)")));
    assert_eq!(parse_literal(r#""héllo""#), Ok(Value::from("héllo")));
}

#[test]
fn test_lists() {
    assert_eq!(
        parse_literal("[10, 20, 30]"),
        Ok(Value::List(vec![
            Value::Int(10),
            Value::Int(20),
            Value::Int(30)
        ]))
    );
    assert_eq!(parse_literal("[]"), Ok(Value::List(vec![])));
    assert_eq!(
        parse_literal("[1.5, 'a', [2]]"),
        Ok(Value::List(vec![
            Value::Float(1.5),
            Value::from("a"),
            Value::List(vec![Value::Int(2)])
        ]))
    );
    assert_eq!(
        parse_literal("[1, 2,]"),
        Ok(Value::List(vec![Value::Int(1), Value::Int(2)]))
    );
}

#[test]
fn test_booleans() {
    assert_eq!(parse_literal("True"), Ok(Value::Bool(true)));
    assert_eq!(parse_literal("false"), Ok(Value::Bool(false)));
}

#[test]
fn test_rejects_expressions() {
    for src in [
        "2+3",
        "2 * 3",
        "foo()",
        "__import__('os')",
        "x",
        "None",
        "[1, 2",
        "'unterminated",
        "1 2",
        "-",
        "1e",
        "12abc",
        "99999999999999999999",
        "",
    ] {
        assert!(parse_literal(src).is_err(), "expected '{}' to be rejected", src);
    }
}

#[test]
fn test_error_offset_points_at_problem() {
    let err = parse_literal("[1, foo]").unwrap_err();
    assert_eq!(err.offset, 4);
    assert!(err.message.contains("'foo' is not a literal"));
}

#[test]
fn test_parse_arguments() {
    let mut parser = LiteralParser::new(r#"16, "hello")"#);
    assert_eq!(
        parser.parse_arguments(),
        Ok(vec![Value::Int(16), Value::from("hello")])
    );
    assert!(parser.is_at_end());

    let mut parser = LiteralParser::new(")");
    assert_eq!(parser.parse_arguments(), Ok(vec![]));

    let mut parser = LiteralParser::new("1, 2,)");
    assert_eq!(
        parser.parse_arguments(),
        Ok(vec![Value::Int(1), Value::Int(2)])
    );

    let mut parser = LiteralParser::new("1, 2");
    assert!(parser.parse_arguments().is_err());
}

#[test]
fn test_nesting_limit() {
    let nested = |depth: usize| format!("{}1{}", "[".repeat(depth), "]".repeat(depth));

    assert!(parse_literal(&nested(MAX_NESTING)).is_ok());

    let err = parse_literal(&nested(MAX_NESTING + 1)).unwrap_err();
    assert_eq!(err.offset, MAX_NESTING);
    assert!(err.message.contains("nesting too deep"));

    let err = parse_literal(&"[".repeat(10_000)).unwrap_err();
    assert!(err.message.contains("nesting too deep"));
}
