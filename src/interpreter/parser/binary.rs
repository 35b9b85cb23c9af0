use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_primary},
    },
};

/// Precedence of `=`, `>` and `<>`.
const COMPARISON: u8 = 1;
/// Precedence of `+` and `-`.
const ADDITIVE: u8 = 2;
/// Precedence of `*`, `/` and `%`.
const MULTIPLICATIVE: u8 = 3;

/// Parses comparison expressions.
///
/// Handles left-associative operators: `=`, `>` and `<>`. Chains such as
/// `a > b = c` are accepted and group as `(a > b) = c`.
///
/// The rule is: `comparison := additive (("=" | ">" | "<>") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens, line, COMPARISON, parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens, line, ADDITIVE, parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := primary (("*" | "/" | "%") primary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens, line, MULTIPLICATIVE, parse_primary)
}

/// Folds a run of operands joined by operators of one precedence level into a
/// left-leaning tree.
///
/// `line` is reported if the input ends before the first operand; an operand
/// missing after an operator is reported on the operator's line.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 line: usize,
                                 level: u8,
                                 parse_operand: fn(&mut Peekable<I>, usize) -> ParseResult<Expr>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_operand(tokens, line)?;
    while let Some((token, line)) = tokens.peek() {
        let op = match token_to_binary_operator(token) {
            Some(op) if op.precedence() == level => op,
            _ => break,
        };

        let line = *line;
        tokens.next(); // consume operator

        let right = parse_operand(tokens, line)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// and `None` for all other tokens.
///
/// # Example
/// ```
/// use meeny::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Percent), Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&Token::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::Equals => Some(BinaryOperator::Equal),
        Token::NotEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}
