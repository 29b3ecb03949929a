// License: MIT

#[cfg(test)]
use super::*;

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn expect_syntax_error(input: &str) -> ConfigError {
    let err = parse(input).expect_err("expected a syntax error");
    assert!(err.is_syntax_error(), "unexpected error kind: {:?}", err);
    err
}

#[test]
fn test_parser_basic_document() {
    let input = r#"
* Application settings
var num := 42;
var greeting := 'hello';
var array := {5, 'text', 7};
@[num]
"#;

    let config = Parser::new(input).parse_document().expect("Failed to parse document");

    assert_eq!(config.variables().len(), 3);
    assert_eq!(config.constants().len(), 1);
    assert_eq!(config.variable("num"), Some(&Value::Integer(42)));
    assert_eq!(config.variable("greeting"), Some(&text("hello")));
    assert_eq!(
        config.variable("array"),
        Some(&Value::Sequence(vec![Value::Integer(5), text("text"), Value::Integer(7)]))
    );
    assert_eq!(config.constant("num"), Some(&Value::Integer(42)));
}

#[test]
fn test_identifier_forms() {
    let config = parse("var _validName := 42;\nvar anotherName123 := 'hello';\nvar myVar := {1, 2, 3};").unwrap();
    assert_eq!(config.variable_names(), vec!["_validName", "anotherName123", "myVar"]);
}

#[test]
fn test_integer_values() {
    let config = parse("var a := 0;\nvar b := 007;\nvar c := 18446744073709551615;").unwrap();
    assert_eq!(config.variable("a"), Some(&Value::Integer(0)));
    assert_eq!(config.variable("b"), Some(&Value::Integer(7)));
    assert_eq!(config.variable("c"), Some(&Value::Integer(u64::MAX)));
}

#[test]
fn test_integer_overflow_is_invalid_value() {
    let err = expect_syntax_error("var big := 18446744073709551616;");
    assert_eq!(err.message(), "Invalid value: 18446744073709551616");
}

#[test]
fn test_signed_and_decimal_numbers_rejected() {
    for value in ["-1", "+1", "1.5", "1e3"] {
        let err = expect_syntax_error(&format!("var n := {};", value));
        assert_eq!(err.message(), format!("Invalid value: {}", value));
    }
}

#[test]
fn test_string_strips_one_quote_layer() {
    let config = parse("var a := '';\nvar b := ''quoted'';\nvar c := 'it's';\nvar d := '  spaced  ';").unwrap();
    assert_eq!(config.variable("a"), Some(&text("")));
    assert_eq!(config.variable("b"), Some(&text("'quoted'")));
    assert_eq!(config.variable("c"), Some(&text("it's")));
    assert_eq!(config.variable("d"), Some(&text("  spaced  ")));
}

#[test]
fn test_unquoted_word_is_invalid() {
    let err = expect_syntax_error("var x := hello;");
    assert_eq!(err.message(), "Invalid value: hello");
    assert_eq!(err.code(), Some(202));
}

#[test]
fn test_sequences() {
    let config = parse("var arr := {7, 1, 10, 83, 0};\nvar tight := {1,2};\nvar one := {100};").unwrap();

    let arr: Vec<u64> = config.get("arr").unwrap();
    assert_eq!(arr, vec![7, 1, 10, 83, 0]);
    let tight: Vec<u64> = config.get("tight").unwrap();
    assert_eq!(tight, vec![1, 2]);
    assert_eq!(config.variable("one"), Some(&Value::Sequence(vec![Value::Integer(100)])));
}

#[test]
fn test_empty_and_nested_sequences_rejected() {
    for input in ["var e := {};", "var e := {  };", "var n := {{1, 2}, 3};", "var n := {{1}};"] {
        let err = expect_syntax_error(input);
        assert_eq!(err.code(), Some(203), "input: {}", input);
    }
}

#[test]
fn test_empty_sequence_element_rejected() {
    let err = expect_syntax_error("var e := {1, , 2};");
    assert_eq!(err.code(), Some(203));
    expect_syntax_error("var e := {1, 2,};");
}

#[test]
fn test_invalid_sequence_element() {
    let err = expect_syntax_error("var e := {1, two};");
    assert_eq!(err.message(), "Invalid value: two");
}

#[test]
fn test_constant_copies_variable() {
    let config = parse("var x := 10;\n@[x]").unwrap();
    assert_eq!(config.variable("x"), Some(&Value::Integer(10)));
    assert_eq!(config.constant("x"), Some(&Value::Integer(10)));
}

#[test]
fn test_redeclaration_last_write_wins() {
    let config = parse("var x := 1;\nvar y := 'y';\nvar x := 2;\n@[x]").unwrap();
    assert_eq!(config.constant("x"), Some(&Value::Integer(2)));
    // Keeps its first position
    assert_eq!(config.variable_names(), vec!["x", "y"]);
}

#[test]
fn test_constant_is_a_snapshot() {
    let config = parse("var x := 1;\n@[x]\nvar x := 2;").unwrap();
    assert_eq!(config.constant("x"), Some(&Value::Integer(1)));
    assert_eq!(config.variable("x"), Some(&Value::Integer(2)));
}

#[test]
fn test_undefined_constant() {
    let err = expect_syntax_error("@[missing]");
    assert_eq!(err.message(), "Undefined variable 'missing' in constant expression.");
    assert_eq!(err.code(), Some(201));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_constant_before_declaration_fails() {
    let err = expect_syntax_error("@[x]\nvar x := 1;");
    match err {
        ConfigError::SyntaxError { line, .. } => assert_eq!(line, 1),
        other => panic!("Expected SyntaxError, got {:?}", other),
    }
}

#[test]
fn test_error_reports_line_number() {
    let err = expect_syntax_error("* header\nvar a := 1;\n\nvar b := oops;");
    match err {
        ConfigError::SyntaxError { line, .. } => assert_eq!(line, 4),
        other => panic!("Expected SyntaxError, got {:?}", other),
    }
}

#[test]
fn test_first_error_wins() {
    let err = expect_syntax_error("var a := bad1;\nvar b := bad2;\n@[nope]");
    assert_eq!(err.message(), "Invalid value: bad1");
}

#[test]
fn test_comments_never_affect_model() {
    let input = r#"
* var hidden := 1;
* @[hidden]
* Nested comment: * nested text
var z := 99;
   * indented comment with {braces} and 'quotes'
"#;

    let config = parse(input).unwrap();
    assert_eq!(config.variable_names(), vec!["z"]);
    assert!(config.constants().is_empty());
}

#[test]
fn test_trailing_comment_after_declaration() {
    let config = parse("var y := 10; * comment").unwrap();
    assert_eq!(config.variable("y"), Some(&Value::Integer(10)));
}

#[test]
fn test_unrecognized_lines_are_ignored() {
    let input = "hello world\nvar := 5;\nvar x = 5;\nconst y := 1;\n@[ ]\n\n   \nvar ok := 1;";
    let config = parse(input).unwrap();
    assert_eq!(config.variable_names(), vec!["ok"]);
    assert!(config.constants().is_empty());
}

#[test]
fn test_empty_input() {
    let config = parse("").unwrap();
    assert!(config.is_empty());
}

#[test]
fn test_parse_value_directly() {
    assert_eq!(parse_value("12", 1), Ok(Value::Integer(12)));
    assert_eq!(parse_value("'x'", 1), Ok(text("x")));
    assert_eq!(
        parse_value("{ 'a' ,3 }", 1),
        Ok(Value::Sequence(vec![text("a"), Value::Integer(3)]))
    );
    assert!(parse_value("", 1).is_err());
    assert!(parse_value("'", 1).is_err());
    assert!(parse_value("{", 1).is_err());
}
