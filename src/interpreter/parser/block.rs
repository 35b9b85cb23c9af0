use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses a non-empty statement list.
///
/// Statements are parsed until the next token is one of `closing`. The closing
/// keyword itself is left in the stream for the caller to consume, which lets
/// `IF` decide between `ELSE` and `ENDIF`.
///
/// Grammar: `block := statement+`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening keyword.
/// - `closing`: Keywords that end the list.
/// - `opener`: The keyword that opened the list, for error messages.
/// - `line`: Line number of the opening keyword.
///
/// # Errors
/// - `EmptyBlock` if a closing keyword follows immediately.
/// - `UnexpectedEndOfInput` if the stream ends before a closing keyword.
/// - Propagates any errors from statement parsing.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          closing: &[Keyword],
                          opener: Keyword,
                          line: usize)
                          -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            None => {
                let line = statements.last().map_or(line, Statement::line);
                return Err(ParseError::UnexpectedEndOfInput { line });
            },
            Some((Token::Keyword(reserved), _)) if closing.contains(&reserved.keyword) => break,
            Some(_) => {
                let line = statements.last().map_or(line, Statement::line);
                statements.push(parse_statement(tokens, line)?);
            },
        }
    }

    if statements.is_empty() {
        return Err(ParseError::EmptyBlock { after: opener.to_string(),
                                            line });
    }

    Ok(statements)
}
