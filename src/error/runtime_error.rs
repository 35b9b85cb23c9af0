#[derive(Debug, thiserror::Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Read, assigned or referenced a name that was never declared.
    #[error("Error on line {line}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division or modulo by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Text supplied to `READ` is not an integer.
    #[error("Error on line {line}: Expected an integer for '{name}', got '{text}'.")]
    InvalidInput {
        /// The variable being read.
        name: String,
        /// The offending input, without its line terminator.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Input was exhausted while `READ` was waiting for a value.
    #[error("Error on line {line}: End of input while reading '{name}'.")]
    EndOfInput {
        /// The variable being read.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The console could not be read from or written to.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RuntimeError {
    /// Short name of the failure category.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::UnknownVariable { .. } => "UnboundNameError",
            Self::DivisionByZero { .. } | Self::Overflow { .. } => "ArithmeticError",
            Self::InvalidInput { .. } | Self::EndOfInput { .. } => "InputFormatError",
            Self::Io(_) => "IoError",
        }
    }
}
