use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::core::ParseResult,
    },
};

/// Returns the line of the next token, or `fallback` at end of input.
pub(in crate::interpreter::parser) fn peek_line<'a, I>(tokens: &mut Peekable<I>,
                                                       fallback: usize)
                                                       -> usize
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek().map_or(fallback, |(_, line)| *line)
}

/// Returns `true` if the next token is the given keyword.
pub(in crate::interpreter::parser) fn peek_keyword<'a, I>(tokens: &mut Peekable<I>,
                                                          keyword: Keyword)
                                                          -> bool
    where I: Iterator<Item = &'a (Token, usize)>
{
    matches!(tokens.peek(), Some((Token::Keyword(r), _)) if r.keyword == keyword)
}

/// Consumes the given keyword and returns its line.
///
/// # Errors
/// Returns a `ParseError` if the next token is anything else, or if the
/// input ends.
pub(in crate::interpreter::parser) fn expect_keyword<'a, I>(tokens: &mut Peekable<I>,
                                                            keyword: Keyword,
                                                            line: usize)
                                                            -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Keyword(r), l)) if r.keyword == keyword => Ok(*l),
        Some((tok, l)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected '{keyword}', found {tok:?}"),
                                              line:  *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Consumes the given punctuation token.
///
/// # Errors
/// Returns a `ParseError` if the next token is anything else, or if the
/// input ends.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          line: usize)
                                                          -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, _)) if tok == expected => Ok(()),
        Some((tok, l)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected {expected:?}, found {tok:?}"),
                                              line:  *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a plain identifier and returns its name with its line.
///
/// Keywords are never accepted here since the lexer has already
/// reclassified them.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              line: usize)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), l)) => Ok((s.clone(), *l)),
        Some((tok, l)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found {tok:?}"),
                                              line:  *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a comma-separated list of one or more items.
///
/// Unlike a bracketed list there is no closing token: the list ends at the
/// first item that is not followed by a comma.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Errors
/// Returns a `ParseError` if any item fails to parse, including an item
/// missing after a trailing comma.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = vec![parse_item(tokens)?];
    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        items.push(parse_item(tokens)?);
    }
    Ok(items)
}
