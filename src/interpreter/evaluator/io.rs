use std::io::{BufRead, Write};

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult, Value},
};

impl<R: BufRead, W: Write> Context<R, W> {
    /// Prompts for and reads one integer from the input channel.
    ///
    /// Writes `Value for <name>: ` to the output channel and flushes it, then
    /// blocks until a full line (or end of input) is available. Surrounding
    /// whitespace is ignored; an optional sign is accepted.
    ///
    /// # Errors
    /// - `EndOfInput` if the input is exhausted before any text arrives.
    /// - `InvalidInput` if the line is not a valid 64-bit integer.
    /// - `Io` if either channel fails.
    pub fn read_value(&mut self, name: &str, line: usize) -> EvalResult<Value> {
        write!(self.output, "Value for {name}: ")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(RuntimeError::EndOfInput { name: name.to_string(),
                                                  line });
        }

        let invalid = |text: &str| RuntimeError::InvalidInput { name: name.to_string(),
                                                                text: text.trim().to_string(),
                                                                line };
        let Ok(text) = std::str::from_utf8(&buf) else {
            return Err(invalid(&String::from_utf8_lossy(&buf)));
        };
        text.trim().parse().map_err(|_| invalid(text))
    }

    /// Writes an optional value in decimal, followed by a newline if
    /// requested. With neither a value nor a newline nothing is written.
    ///
    /// # Errors
    /// Returns `Io` if the output channel fails.
    pub fn write_value(&mut self, value: Option<Value>, newline: bool) -> EvalResult<()> {
        if let Some(value) = value {
            write!(self.output, "{value}")?;
        }
        if newline {
            writeln!(self.output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn context(input: &str) -> Context<Cursor<Vec<u8>>, Vec<u8>> {
        Context::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn read_prompts_and_parses() {
        let mut ctx = context("  -12 \n7\n");
        assert_eq!(ctx.read_value("x", 1).unwrap(), -12);
        assert_eq!(ctx.read_value("y", 2).unwrap(), 7);
        assert_eq!(String::from_utf8(ctx.into_output()).unwrap(),
                   "Value for x: Value for y: ");
    }

    #[test]
    fn read_rejects_garbage() {
        let mut ctx = context("twelve\n");
        assert!(matches!(ctx.read_value("x", 3),
                         Err(RuntimeError::InvalidInput { ref text, line: 3, .. }) if text == "twelve"));
    }

    #[test]
    fn read_rejects_invalid_utf8() {
        let mut ctx = Context::new(Cursor::new(b"1\xff\n".to_vec()), Vec::new());
        assert!(matches!(ctx.read_value("x", 2),
                         Err(RuntimeError::InvalidInput { ref text, line: 2, .. }) if text == "1\u{fffd}"));
    }

    #[test]
    fn read_at_end_of_input() {
        let mut ctx = context("");
        assert!(matches!(ctx.read_value("x", 1), Err(RuntimeError::EndOfInput { .. })));
    }

    #[test]
    fn write_variants() {
        let mut ctx = context("");
        ctx.write_value(Some(5), false).unwrap();
        ctx.write_value(Some(-3), true).unwrap();
        ctx.write_value(None, true).unwrap();
        ctx.write_value(None, false).unwrap();
        assert_eq!(String::from_utf8(ctx.into_output()).unwrap(), "5-3\n\n");
    }
}
