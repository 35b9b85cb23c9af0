#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// Description of what was found, and what was expected.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The name after `END` differs from the name after `PROGRAM`.
    #[error("Error on line {line}: Program '{head}' is closed by 'END {tail}'.")]
    ProgramNameMismatch {
        /// The name given after `PROGRAM`.
        head: String,
        /// The name given after `END`.
        tail: String,
        /// The source line of the `END` keyword.
        line: usize,
    },
    /// A statement list (`BODY`, `DO`, `THEN`, `ELSE`) had no statements.
    #[error("Error on line {line}: Expected at least one statement after {after}.")]
    EmptyBlock {
        /// The keyword that opened the empty list.
        after: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found extra tokens after `END <name>`.
    #[error("Error on line {line}: Extra tokens after end of program: {token}")]
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}
