use crate::{
    ast::{BinaryOperator, Expr, IdentifierReference, Statement},
    error::ParseError,
    interpreter::{
        evaluator::{core::eval_expr, environment::Environment},
        lexer::tokenize,
        parser::core::{parse_expression, parse_tokens},
    },
};

fn expr(source: &str) -> Expr {
    let tokens = tokenize(source).unwrap();
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 1).unwrap();
    assert!(iter.next().is_none(), "unparsed tokens left in {source:?}");
    expr
}

fn value(source: &str) -> i64 {
    eval_expr(&expr(source), &Environment::new()).unwrap()
}

fn program(body: &str) -> Result<crate::ast::Program, ParseError> {
    let source = format!("PROGRAM t HAS INT a, b BODY {body} END t");
    parse_tokens(&tokenize(&source).unwrap())
}

fn num(value: i64) -> Box<Expr> {
    Box::new(Expr::Number { value, line: 1 })
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(value("2 + 3 * 4"), 14);
    assert_eq!(value("(2 + 3) * 4"), 20);
}

#[test]
fn operators_are_left_associative() {
    assert_eq!(value("10 - 4 - 3"), 3);
    assert_eq!(value("100 / 10 / 5"), 2);
    assert_eq!(value("17 % 10 % 4"), 3);
    assert_eq!(expr("1 - 2 - 3"),
               Expr::BinaryOp { left:  Box::new(Expr::BinaryOp { left:  num(1),
                                                                 op:    BinaryOperator::Sub,
                                                                 right: num(2),
                                                                 line:  1, }),
                                op:    BinaryOperator::Sub,
                                right: num(3),
                                line:  1, });
}

#[test]
fn comparisons_bind_loosest() {
    assert_eq!(value("1 + 1 = 2"), 1);
    assert_eq!(value("3 > 1 + 1"), 1);
    // (3 > 2) = 1
    assert_eq!(value("3 > 2 = 1"), 1);
    assert_eq!(value("2 <> 1 + 1"), 0);
}

#[test]
fn negative_literals() {
    assert_eq!(value("-5 + 2"), -3);
    assert_eq!(value("3 - -4"), 7);
    assert_eq!(value("-2 * -3"), 6);
}

#[test]
fn minus_before_non_literal_is_rejected() {
    let tokens = tokenize("-a").unwrap();
    let mut iter = tokens.iter().peekable();
    assert!(matches!(parse_expression(&mut iter, 1), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn bare_writeln_has_no_value() {
    let program = program("WRITELN a <- 1").unwrap();
    assert_eq!(program.body[0],
               Statement::Write { value:   None,
                                  newline: true,
                                  line:    1, });
    assert!(matches!(program.body[1], Statement::Assignment { .. }));
}

#[test]
fn write_requires_parentheses() {
    assert!(program("WRITE a").is_err());
    assert!(matches!(program("WRITE(a"), Err(ParseError::ExpectedClosingParen { .. })));
}

#[test]
fn if_with_and_without_else() {
    let program = program("IF a > b THEN a <- 1 ELSE b <- 1 ENDIF IF a THEN b <- 2 ENDIF").unwrap();
    match &program.body[0] {
        Statement::If { else_body: Some(else_body),
                        .. } => assert_eq!(else_body.len(), 1),
        other => panic!("expected if/else, found {other:?}"),
    }
    assert!(matches!(program.body[1], Statement::If { else_body: None, .. }));
}

#[test]
fn nested_loops() {
    let program =
        program("WHILE a > 0 DO WHILE b > 0 DO b <- b - 1 ENDWHILE a <- a - 1 ENDWHILE").unwrap();
    match &program.body[0] {
        Statement::While { body, .. } => {
            assert_eq!(body.len(), 2);
            assert!(matches!(body[0], Statement::While { .. }));
        },
        other => panic!("expected while, found {other:?}"),
    }
}

#[test]
fn empty_blocks_are_rejected() {
    assert!(matches!(program("WHILE a DO ENDWHILE"), Err(ParseError::EmptyBlock { .. })));
    assert!(matches!(program("IF a THEN ELSE a <- 1 ENDIF"),
                     Err(ParseError::EmptyBlock { .. })));
    assert!(matches!(parse_tokens(&tokenize("PROGRAM t HAS INT a BODY END t").unwrap()),
                     Err(ParseError::EmptyBlock { .. })));
}

#[test]
fn missing_terminator_is_end_of_input() {
    let tokens = tokenize("PROGRAM t HAS INT a BODY WHILE a DO a <- 0").unwrap();
    assert!(matches!(parse_tokens(&tokens), Err(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn name_mismatch() {
    let tokens = tokenize("PROGRAM one HAS INT a BODY a <- 1 END two").unwrap();
    assert_eq!(parse_tokens(&tokens),
               Err(ParseError::ProgramNameMismatch { head: "one".into(),
                                                     tail: "two".into(),
                                                     line: 1, }));
}

#[test]
fn trailing_tokens() {
    let tokens = tokenize("PROGRAM t HAS INT a BODY a <- 1 END t a").unwrap();
    assert!(matches!(parse_tokens(&tokens),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
}

#[test]
fn declarations() {
    let source = "program t has decls int a, b <- -3 INT c <- 7 body a <- c end t";
    let program = parse_tokens(&tokenize(source).unwrap()).unwrap();
    let decls: Vec<_> = program.decls
                               .iter()
                               .map(|d| (d.name.as_str(), d.initial))
                               .collect();
    assert_eq!(decls, vec![("a", None), ("b", Some(-3)), ("c", Some(7))]);
}

#[test]
fn keyword_cannot_be_a_variable() {
    let tokens = tokenize("PROGRAM t HAS INT while BODY a <- 1 END t").unwrap();
    assert!(matches!(parse_tokens(&tokens), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn read_target_line() {
    let program = program("\nREAD(a)").unwrap();
    assert_eq!(program.body[0],
               Statement::Read { target: IdentifierReference { name: "a".into(),
                                                               line: 2, }, });
}

#[test]
fn end_of_input_reports_last_line() {
    let tokens = tokenize("PROGRAM t HAS INT a\nBODY\n  a <-").unwrap();
    assert_eq!(parse_tokens(&tokens), Err(ParseError::UnexpectedEndOfInput { line: 3 }));

    let tokens = tokenize("PROGRAM t HAS INT a\nBODY\n  WRITELN(1\n  +").unwrap();
    assert_eq!(parse_tokens(&tokens), Err(ParseError::UnexpectedEndOfInput { line: 4 }));
}
