/// Program-level parsing and the expression entry point.
///
/// Contains the `PROGRAM ... END` frame, the declaration part and the
/// [`core::ParseResult`] alias shared by every parsing routine.
pub mod core;

/// Statement parsing.
///
/// Recognizes assignments, `READ`, `WRITE`/`WRITELN`, `WHILE` loops and `IF`
/// conditionals.
pub mod statement;

/// Statement list parsing.
///
/// Collects statements until one of a set of closing keywords is reached.
pub mod block;

/// Binary operator parsing.
///
/// One function per precedence level, lowest first: comparisons, additive
/// operators, multiplicative operators.
pub mod binary;

/// Primary expression parsing.
///
/// Handles literals (including negative ones), variable references and
/// parenthesized groups.
pub mod unary;

/// Parser helpers shared across the submodules.
pub mod utils;

#[cfg(test)]
mod tests;
