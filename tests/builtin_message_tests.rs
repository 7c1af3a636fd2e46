//! Every builtin message answered by boxed values, run end to end.


use sheetscript_core::BuiltinMessage;
use test_harness::*;

#[test]
fn test_arithmetic() {
    assert_eq!(run("return 2.plus(3);"), "5");
    assert_eq!(run("return 2.minus(3);"), "-1");
    assert_eq!(run("return 4.times(2.5);"), "10");
    assert_eq!(run("return 7.divide(2);"), "3.5");
}

#[test]
fn test_comparisons() {
    assert_eq!(run("return 1.lessThan(2);"), "TRUE");
    assert_eq!(run("return 2.lessThanOrEquals(2);"), "TRUE");
    assert_eq!(run("return 2.greaterThan(2);"), "FALSE");
    assert_eq!(run("return 3.greaterThanOrEquals(3);"), "TRUE");
    assert_eq!(run("return 2.greaterThanOrEquals(3);"), "FALSE");
}

#[test]
fn test_equality() {
    assert_eq!(run("return 3.equals(3);"), "TRUE");
    assert_eq!(run("return 3.notEquals(3);"), "FALSE");
    // Text comparison ignores case
    assert_eq!(run("return \"Abc\".equals(\"aBC\");"), "TRUE");
}

#[test]
fn test_logic() {
    assert_eq!(run("return true.and(false);"), "FALSE");
    assert_eq!(run("return true.or(false);"), "TRUE");
    assert_eq!(run("return true.xor(true);"), "FALSE");
    assert_eq!(run("return false.negate();"), "TRUE");
}

#[test]
fn test_unary_numeric() {
    assert_eq!(run("return 5.factorial();"), "120");
    assert_eq!(run("return 100.log();"), "2");
}

#[test]
fn test_concat() {
    assert_eq!(run("return \"a\".concat(\"b\").concat(1);"), "ab1");
}

#[test]
fn test_quotes_in_strings() {
    assert_eq!(run(r#"return "say \"hi\"".concat("!");"#), "say \"hi\"!");
}

#[test]
fn test_results_are_boxed() {
    // Each answer is itself a boxed value that answers messages
    assert_eq!(run("return 1.plus(2).times(3).minus(4).equals(5);"), "TRUE");
}

#[test]
fn test_every_message_is_emitted() {
    let formula = sheetscript::compile("return 1;").unwrap().formula;
    for message in BuiltinMessage::ALL {
        assert!(
            formula.contains(&format!("\"{}\"", message.name())),
            "prelude does not answer {}",
            message
        );
    }
}
