/// The evaluator module executes the AST.
///
/// The evaluator walks the tree produced by the parser, threading a single
/// mutable environment through every call and performing console input and
/// output as `READ` and `WRITE` statements are reached.
///
/// # Responsibilities
/// - Binds declared variables and executes statements in order.
/// - Evaluates arithmetic with floor semantics and integer comparisons.
/// - Reports runtime errors such as unknown variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens paired with their line.
/// - Reclassifies identifiers that spell a reserved word.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a [`crate::ast::Program`]. Any mismatch aborts before evaluation starts.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Applies operator precedence and left associativity.
/// - Checks that the program is closed with its own name.
pub mod parser;
