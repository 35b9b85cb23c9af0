use std::iter::Peekable;

use crate::{
    ast::{Expr, Identifier, Program},
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{
            binary::parse_comparison,
            block::parse_block,
            unary::parse_literal,
            utils::{expect_keyword, parse_comma_separated, parse_identifier, peek_keyword,
                    peek_line},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a [`Program`].
///
/// The whole sequence must be consumed: anything after `END <name>` is an
/// error.
///
/// # Errors
/// Returns a `ParseError` if the tokens do not form exactly one program, or
/// if the name after `END` differs from the name after `PROGRAM`.
///
/// # Example
/// ```
/// use meeny::interpreter::{lexer::tokenize, parser::core::parse_tokens};
///
/// let tokens = tokenize("PROGRAM p HAS INT a BODY a <- 1 END p").unwrap();
/// let program = parse_tokens(&tokens).unwrap();
/// assert_eq!(program.name, "p");
/// assert_eq!(program.decls.len(), 1);
/// ```
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let program = parse_program(&mut iter)?;

    if let Some((token, line)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                          line:  *line, });
    }

    tracing::debug!(program = %program.name,
                    declarations = program.decls.len(),
                    statements = program.body.len(),
                    "parsed program");
    Ok(program)
}

/// Parses the program frame.
///
/// Grammar:
/// ```text
///     program := "PROGRAM" ID "HAS" decl_part "BODY" statement+ "END" ID
/// ```
///
/// # Errors
/// - `UnexpectedToken` / `UnexpectedEndOfInput` if the frame is malformed.
/// - `ProgramNameMismatch` if the head and tail names differ.
/// - Propagates any errors from the declaration and statement parsers.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = expect_keyword(tokens, Keyword::Program, 1)?;
    let (name, _) = parse_identifier(tokens, line)?;
    let has_line = expect_keyword(tokens, Keyword::Has, line)?;

    let decls = parse_declarations(tokens, has_line)?;

    let next_line = peek_line(tokens, has_line);
    let body_line = expect_keyword(tokens, Keyword::Body, next_line)?;
    let body = parse_block(tokens, &[Keyword::End], Keyword::Body, body_line)?;

    let end_line = expect_keyword(tokens, Keyword::End, body_line)?;
    let (tail, _) = parse_identifier(tokens, end_line)?;
    if tail != name {
        return Err(ParseError::ProgramNameMismatch { head: name,
                                                     tail,
                                                     line: end_line });
    }

    Ok(Program { name,
                 decls,
                 body,
                 line })
}

/// Parses the declaration part.
///
/// An optional `DECLS` keyword may precede the first `INT` group. At least one
/// group is required.
///
/// Grammar:
/// ```text
///     decl_part := "DECLS"? ("INT" declaration ("," declaration)*)+
/// ```
fn parse_declarations<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Identifier>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if peek_keyword(tokens, Keyword::Decls) {
        tokens.next();
    }

    let next_line = peek_line(tokens, line);
    let mut line = expect_keyword(tokens, Keyword::Int, next_line)?;
    let mut decls = parse_comma_separated(tokens, |t| parse_declaration(t, line))?;

    while peek_keyword(tokens, Keyword::Int) {
        line = expect_keyword(tokens, Keyword::Int, line)?;
        decls.extend(parse_comma_separated(tokens, |t| parse_declaration(t, line))?);
    }

    Ok(decls)
}

/// Parses one declared name with an optional literal initializer.
///
/// Grammar: `declaration := ID ("<-" "-"? NUM)?`
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Identifier>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (name, line) = parse_identifier(tokens, line)?;

    let initial = if let Some((Token::Assign, _)) = tokens.peek() {
        tokens.next();
        Some(parse_literal(tokens, line)?)
    } else {
        None
    };

    Ok(Identifier { name,
                    initial,
                    line })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, comparison, and recursively
/// descends through the precedence hierarchy.
///
/// `line` is the line of the construct that expects the expression; it is
/// reported if the input ends before the expression starts.
///
/// Grammar: `expression := comparison`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_comparison(tokens, line)
}
