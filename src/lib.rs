//! # meeny
//!
//! meeny is a tree-walking interpreter for a small imperative teaching
//! language with integer variables, arithmetic, comparisons, `WHILE` loops,
//! `IF` conditionals and console input and output.
//!
//! ```text
//! PROGRAM sum HAS
//!   INT a, b, c
//! BODY
//!   a <- 3
//!   b <- 4
//!   c <- a + b
//!   WRITELN(c)
//! END sum
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::{
    ast::Program,
    error::Error,
    interpreter::{
        evaluator::core::{Context, Options},
        lexer::tokenize,
        parser::core::parse_tokens,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every failure carries the source line it was detected on, and each phase
/// has its own error enum so callers can tell where a run stopped.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing and evaluation.
pub mod interpreter;
/// General utilities shared by the evaluator.
pub mod util;

/// Lexes and parses `source` into a program tree without running it.
///
/// # Errors
/// Returns [`Error::Lex`] or [`Error::Parse`] if the source is not a valid
/// program.
///
/// # Examples
/// ```
/// use meeny::parse;
///
/// let program = parse("PROGRAM p HAS INT a BODY WRITELN(a) END p").unwrap();
/// assert_eq!(program.name, "p");
///
/// // The closing name must match the opening one.
/// assert!(parse("PROGRAM p HAS INT a BODY WRITELN(a) END q").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    Ok(parse_tokens(&tokens)?)
}

/// Parses and executes `source` against the given console channels.
///
/// Nothing is executed unless the whole source parses. Output produced before
/// a runtime error is flushed and stays in `output`.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error.
///
/// # Examples
/// ```
/// use meeny::{interpreter::evaluator::core::Options, run_with_io};
///
/// let source = "PROGRAM p HAS INT x BODY READ(x) WRITE(x * 2) END p";
/// let mut output = Vec::new();
/// run_with_io(source, "21\n".as_bytes(), &mut output, Options::default()).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "Value for x: 42");
/// ```
pub fn run_with_io<R: BufRead, W: Write>(source: &str,
                                         input: R,
                                         output: W,
                                         options: Options)
                                         -> Result<(), Error> {
    let program = parse(source)?;
    let mut context = Context::with_options(input, output, options);
    context.run(&program)?;
    Ok(())
}
