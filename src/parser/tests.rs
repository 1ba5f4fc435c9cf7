//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs including:
//! - Declarations
//! - Assignment, input and output
//! - Expression chains and casts
//! - Control flow statements
//! - Syntax errors

use std::rc::Rc;

use super::parser::parse;
use crate::{
    ast::{
        ast::{Program, Stmt},
        expressions::{BoolFactor, Expression, Factor},
        types::Type,
    },
    errors::errors::Error,
    lexer::lexer::tokenize,
};

fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some("test.ou".to_string())).unwrap();
    parse(tokens, Rc::new("test.ou".to_string()))
}

fn factor_name(factor: &Factor) -> &str {
    match factor {
        Factor::Identifier(identifier) => &identifier.name,
        Factor::Literal(literal) => literal.as_str(),
        Factor::Parenthesized { .. } => "(...)",
    }
}

fn assigned_expression(program: &Program, index: usize) -> &Expression {
    match &program.body.body[index] {
        Stmt::Assignment(assignment) => &assignment.expression,
        other => panic!("expected an assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_declarations() {
    let program = parse_source("a, b: int; c: float; { }").unwrap();

    assert_eq!(program.declarations.len(), 2);
    let names = program.declarations[0]
        .identifiers
        .iter()
        .map(|identifier| identifier.name.as_str())
        .collect::<Vec<&str>>();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(program.declarations[0].var_type, Type::Int);
    assert_eq!(program.declarations[1].var_type, Type::Float);
    assert!(program.body.body.is_empty());
}

#[test]
fn test_parse_program_without_declarations() {
    let program = parse_source("{ output(1); }").unwrap();

    assert!(program.declarations.is_empty());
    assert!(matches!(program.body.body[0], Stmt::Output(_)));
}

#[test]
fn test_parse_assignment_input_output() {
    let program = parse_source("a: int; { input(a); a = a + 1; output(a); }").unwrap();

    assert!(matches!(program.body.body[0], Stmt::Input(_)));
    assert!(matches!(program.body.body[1], Stmt::Assignment(_)));
    assert!(matches!(program.body.body[2], Stmt::Output(_)));
}

#[test]
fn test_expression_chain_is_right_anchored() {
    let program = parse_source("a, b, c: int; { a = a - b + c; }").unwrap();
    let expression = assigned_expression(&program, 0);

    assert_eq!(factor_name(&expression.right.right), "c");

    let (operator, rest) = expression.left.as_ref().unwrap();
    assert_eq!(operator.symbol, "+");
    assert_eq!(factor_name(&rest.right.right), "b");

    let (operator, rest) = rest.left.as_ref().unwrap();
    assert_eq!(operator.symbol, "-");
    assert_eq!(factor_name(&rest.right.right), "a");
    assert!(rest.left.is_none());
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let program = parse_source("a, b, c: int; { a = a + b * c; }").unwrap();
    let expression = assigned_expression(&program, 0);

    // `b * c` is one term on the right of the `+`
    let term = &expression.right;
    assert_eq!(factor_name(&term.right), "c");
    let (operator, rest) = term.left.as_ref().unwrap();
    assert_eq!(operator.symbol, "*");
    assert_eq!(factor_name(&rest.right), "b");

    let (operator, rest) = expression.left.as_ref().unwrap();
    assert_eq!(operator.symbol, "+");
    assert_eq!(factor_name(&rest.right.right), "a");
}

#[test]
fn test_parse_casts_and_parentheses() {
    let program =
        parse_source("a: int; b: float; { a = static_cast<int>(b); b = (a + 1); }").unwrap();

    let cast = &assigned_expression(&program, 0).right.right;
    assert!(matches!(
        cast,
        Factor::Parenthesized {
            cast: Some(Type::Int),
            ..
        }
    ));

    let grouped = &assigned_expression(&program, 1).right.right;
    assert!(matches!(grouped, Factor::Parenthesized { cast: None, .. }));
}

#[test]
fn test_parse_numeric_literal_keeps_text() {
    let program = parse_source("b: float; { b = 2.50; }").unwrap();
    assert_eq!(factor_name(&assigned_expression(&program, 0).right.right), "2.50");
}

#[test]
fn test_parse_if_else() {
    let program = parse_source("a: int; { if (a < 1) a = 1; else { a = 2; } }").unwrap();

    let Stmt::If(if_stmt) = &program.body.body[0] else {
        panic!("expected an if statement");
    };
    assert!(matches!(*if_stmt.then_body, Stmt::Assignment(_)));
    assert!(matches!(
        if_stmt.else_body.as_deref(),
        Some(Stmt::Block(_))
    ));
}

#[test]
fn test_parse_if_without_else() {
    let program = parse_source("a: int; { if (a < 1) a = 1; output(a); }").unwrap();

    let Stmt::If(if_stmt) = &program.body.body[0] else {
        panic!("expected an if statement");
    };
    assert!(if_stmt.else_body.is_none());
    assert_eq!(program.body.body.len(), 2);
}

#[test]
fn test_parse_boolean_operators() {
    let program =
        parse_source("a: int; { while (a < 1 || a > 5 && !(a == 3)) { a = a + 1; break; } }")
            .unwrap();

    let Stmt::While(while_stmt) = &program.body.body[0] else {
        panic!("expected a while statement");
    };

    // `||` at the top, `&&` grouped into the right term
    let condition = &while_stmt.condition;
    assert!(condition.left.is_some());
    let and_term = &condition.right;
    assert!(and_term.left.is_some());
    assert!(matches!(and_term.right, BoolFactor::Negation { .. }));

    let BoolFactor::Relational { operator, .. } = &and_term.left.as_ref().unwrap().right else {
        panic!("expected a relational factor");
    };
    assert_eq!(operator.symbol, ">");
}

#[test]
fn test_parse_switch() {
    let source = "a: int; { switch (a) { case 1: output(1); break; case 2: default: output(0); } }";
    let program = parse_source(source).unwrap();

    let Stmt::Switch(switch) = &program.body.body[0] else {
        panic!("expected a switch statement");
    };
    assert_eq!(switch.cases.len(), 2);
    assert_eq!(switch.cases[0].label.as_str(), "1");
    assert_eq!(switch.cases[0].body.body.len(), 2);
    assert!(switch.cases[1].body.body.is_empty());
    assert_eq!(switch.default.body.len(), 1);
}

#[test]
fn test_switch_requires_default() {
    let error = parse_source("a: int; { switch (a) { case 1: output(1); } }").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_switch_rejects_float_case_label() {
    let source = "a: int; { switch (a) { case 1.5: output(1); default: output(0); } }";
    let error = parse_source(source).unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_position().0, source.find("1.5").unwrap() as u32);
}

#[test]
fn test_missing_semicolon() {
    let source = "a: int; { a = 1 output(a); }";
    let error = parse_source(source).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, source.find("output").unwrap() as u32);
}

#[test]
fn test_relational_operator_required() {
    let error = parse_source("a: int; { if (a) a = 1; }").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_trailing_tokens_after_program() {
    let error = parse_source("a: int; { } a = 1;").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_unterminated_block() {
    let error = parse_source("a: int; { a = 1;").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}
