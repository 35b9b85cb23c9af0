use std::iter::Peekable;

use crate::{
    ast::{Expr, IdentifierReference},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - integer literals, optionally negated
/// - variable references
/// - parenthesized expressions
///
/// A leading `-` is only allowed directly before a literal; `-x` and `-(e)`
/// are rejected.
///
/// Grammar:
/// ```text
///     primary := "-"? NUM
///              | ID
///              | "(" expression ")"
/// ```
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line })?;

    match peeked {
        (Token::Number(_) | Token::Minus, line) => {
            let line = *line;
            let value = parse_literal(tokens, line)?;
            Ok(Expr::Number { value, line })
        },
        (Token::Identifier(name), line) => {
            let reference = IdentifierReference { name: name.clone(),
                                                  line: *line };
            tokens.next();
            Ok(Expr::Reference(reference))
        },
        (Token::LParen, line) => {
            let line = *line;
            tokens.next();
            parse_grouping(tokens, line)
        },
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("Expected expression, found {tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses an integer literal with an optional leading minus sign.
///
/// Grammar: `literal := "-"? NUM`
///
/// # Errors
/// Returns a `ParseError` if the next tokens are not a (negated) number.
pub(crate) fn parse_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<i64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let negative = matches!(tokens.peek(), Some((Token::Minus, _)));
    if negative {
        tokens.next();
    }

    match tokens.next() {
        Some((Token::Number(n), _)) => Ok(if negative { -*n } else { *n }),
        Some((tok, l)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected number, found {tok:?}"),
                                              line:  *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses the inside of a parenthesized expression, after the `(`.
///
/// The grouping has no node of its own; precedence is already encoded by the
/// shape of the returned tree.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens, line)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}
