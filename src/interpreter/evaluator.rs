/// Core evaluation logic and context management.
///
/// Contains the statement dispatcher, expression evaluation and the runtime
/// context holding the console channels.
pub mod core;

/// The variable store.
///
/// Maps every declared name to its current value and remembers whether the
/// program ever wrote to it.
pub mod environment;

/// Binary operator evaluation logic.
///
/// Implements checked arithmetic (with floor division and modulo) and the
/// integer-valued comparisons.
pub mod binary;

/// Console input and output.
///
/// Implements the blocking `READ` prompt and the ordered `WRITE` output.
pub mod io;
