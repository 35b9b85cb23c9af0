/// Lexing errors.
///
/// Raised while scanning raw source text into tokens, before any parsing takes
/// place.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning the token stream into
/// a program tree. Parse errors include unexpected tokens, missing delimiters
/// and a `PROGRAM`/`END` name mismatch.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown variables, division by zero, overflow and malformed
/// console input.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure that aborts a run, tagged by the phase that produced it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source contained a character no token rule accepts.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream did not form a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed part way through the program.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Short name of the failure category, used as a message prefix by the
    /// command line front end.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Lex(_) => "LexError",
            Self::Parse(_) => "ParseError",
            Self::Runtime(e) => e.kind_name(),
        }
    }
}
