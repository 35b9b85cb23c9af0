use std::iter::Peekable;

use crate::{
    ast::{IdentifierReference, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_keyword, expect_token, parse_identifier, peek_keyword},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an output statement (`WRITE(e)`, `WRITELN(e)`, `WRITELN`).
/// - an input statement (`READ(x)`).
/// - a `WHILE` loop.
/// - an `IF` conditional.
/// - an assignment (`x <- e`).
///
/// The leading token decides which one is parsed.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `line`: Line reported if the input ends before a statement starts.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (token, line) = tokens.next()
                              .ok_or(ParseError::UnexpectedEndOfInput { line })?;
    let line = *line;

    match token {
        Token::Keyword(reserved) => match reserved.keyword {
            Keyword::Write => parse_write(tokens, false, line),
            Keyword::Writeln => parse_write(tokens, true, line),
            Keyword::Read => parse_read(tokens, line),
            Keyword::While => parse_while(tokens, line),
            Keyword::If => parse_if(tokens, line),
            _ => Err(ParseError::UnexpectedToken { token: format!("Expected statement, found '{}'",
                                                                  reserved.text),
                                                   line }),
        },
        Token::Identifier(name) => parse_assignment(tokens, name, line),
        tok => Err(ParseError::UnexpectedToken { token: format!("Expected statement, found {tok:?}"),
                                                 line }),
    }
}

/// Parses the rest of an output statement.
///
/// `WRITE` requires a parenthesized expression. `WRITELN` may stand alone, in
/// which case only a newline is printed.
///
/// Grammar:
/// ```text
///     write := ("WRITE" | "WRITELN") "(" expression ")"
///            | "WRITELN"
/// ```
fn parse_write<'a, I>(tokens: &mut Peekable<I>, newline: bool, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if newline && !matches!(tokens.peek(), Some((Token::LParen, _))) {
        return Ok(Statement::Write { value: None,
                                     newline,
                                     line });
    }

    expect_token(tokens, &Token::LParen, line)?;
    let value = parse_expression(tokens, line)?;
    match tokens.next() {
        Some((Token::RParen, _)) => {},
        _ => return Err(ParseError::ExpectedClosingParen { line }),
    }

    Ok(Statement::Write { value: Some(value),
                          newline,
                          line })
}

/// Parses the rest of an input statement.
///
/// Grammar: `read := "READ" "(" ID ")"`
fn parse_read<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect_token(tokens, &Token::LParen, line)?;
    let (name, line) = parse_identifier(tokens, line)?;
    match tokens.next() {
        Some((Token::RParen, _)) => {},
        _ => return Err(ParseError::ExpectedClosingParen { line }),
    }

    Ok(Statement::Read { target: IdentifierReference { name, line } })
}

/// Parses the rest of an assignment after its target name.
///
/// Grammar: `assignment := ID "<-" expression`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           name: &str,
                           line: usize)
                           -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect_token(tokens, &Token::Assign, line)?;
    let value = parse_expression(tokens, line)?;

    Ok(Statement::Assignment { target: IdentifierReference { name: name.to_string(),
                                                             line },
                               value })
}

/// Parses a `WHILE` loop.
///
/// Grammar: `while := "WHILE" expression "DO" statement+ "ENDWHILE"`
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let condition = parse_expression(tokens, line)?;
    let do_line = expect_keyword(tokens, Keyword::Do, line)?;
    let body = parse_block(tokens, &[Keyword::EndWhile], Keyword::Do, do_line)?;
    expect_keyword(tokens, Keyword::EndWhile, do_line)?;

    Ok(Statement::While { condition,
                          body,
                          line })
}

/// Parses an `IF` conditional with an optional `ELSE` branch.
///
/// Grammar:
/// ```text
///     if := "IF" expression "THEN" statement+ ("ELSE" statement+)? "ENDIF"
/// ```
///
/// # Errors
/// - `UnexpectedToken` if `THEN` or `ENDIF` is missing.
/// - Propagates any errors from condition or branch parsing.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let condition = parse_expression(tokens, line)?;
    let then_line = expect_keyword(tokens, Keyword::Then, line)?;
    let body = parse_block(tokens, &[Keyword::Else, Keyword::EndIf], Keyword::Then, then_line)?;

    let else_body = if peek_keyword(tokens, Keyword::Else) {
        let else_line = expect_keyword(tokens, Keyword::Else, then_line)?;
        Some(parse_block(tokens, &[Keyword::EndIf], Keyword::Else, else_line)?)
    } else {
        None
    };
    expect_keyword(tokens, Keyword::EndIf, then_line)?;

    Ok(Statement::If { condition,
                       body,
                       else_body,
                       line })
}
