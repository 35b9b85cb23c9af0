#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while scanning source text.
pub enum LexError {
    /// A character matched none of the token rules.
    #[error("Error on line {line}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A numeric literal does not fit in a 64-bit signed integer.
    #[error("Error on line {line}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The digits as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
