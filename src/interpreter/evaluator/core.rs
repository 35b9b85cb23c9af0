use std::io::{BufRead, Write};

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::evaluator::{
        binary::{eval_binary_op, is_truthy},
        environment::Environment,
    },
};

/// Runtime value of every expression. Comparisons produce `1` or `0`.
pub type Value = i64;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Switches that change how a program is run without changing what it
/// computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Print `Warning: identifier <name> not used.` for every declared name
    /// the program never wrote to.
    pub warn_unused: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { warn_unused: true }
    }
}

/// Stores the runtime evaluation context.
///
/// The context owns the console channels: `input` is read line by line by
/// `READ`, and `output` receives prompts, `WRITE` output and end-of-run
/// diagnostics in execution order. Variables are not stored here; each call
/// to [`Context::run`] creates a fresh [`Environment`] and threads it through
/// evaluation by exclusive reference.
pub struct Context<R, W> {
    pub(crate) input:  R,
    pub(crate) output: W,
    options:           Options,
}

impl<R: BufRead, W: Write> Context<R, W> {
    /// Creates a context with default options.
    pub fn new(input: R, output: W) -> Self {
        Self::with_options(input, output, Options::default())
    }

    /// Creates a context with explicit options.
    pub const fn with_options(input: R, output: W, options: Options) -> Self {
        Self { input,
               output,
               options }
    }

    /// Gives back the output channel, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Executes a whole program.
    ///
    /// 1. Every declared identifier is bound to its initial value.
    /// 2. The body runs statement by statement.
    /// 3. Unless disabled, a warning is printed for each declared identifier
    ///    that was never written.
    ///
    /// Output is flushed whether or not the body fails, so everything written
    /// before an error stays visible.
    ///
    /// # Returns
    /// The final environment.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by the body. Statements that
    /// already ran keep their effects.
    pub fn run(&mut self, program: &Program) -> EvalResult<Environment> {
        let mut env = Environment::from_declarations(&program.decls);
        tracing::info!(program = %program.name, variables = env.len(), "running program");

        let result = self.exec_block(&program.body, &mut env);
        self.output.flush()?;
        result?;

        if self.options.warn_unused {
            for name in env.unused() {
                writeln!(self.output, "Warning: identifier {name} not used.")?;
            }
            self.output.flush()?;
        }

        Ok(env)
    }

    /// Executes statements in order, stopping at the first error.
    pub fn exec_block(&mut self, statements: &[Statement], env: &mut Environment) -> EvalResult<()> {
        for statement in statements {
            self.exec(statement, env)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// Assignments and reads overwrite an already-declared variable; `WHILE`
    /// re-evaluates its condition before every iteration; `IF` evaluates its
    /// condition once.
    ///
    /// # Errors
    /// - `UnknownVariable` when the target of an assignment or read was never
    ///   declared.
    /// - Any error raised while evaluating an expression or touching the
    ///   console.
    pub fn exec(&mut self, statement: &Statement, env: &mut Environment) -> EvalResult<()> {
        tracing::trace!(line = statement.line(), ?statement, "executing statement");

        match statement {
            Statement::Assignment { target, value } => {
                let value = eval_expr(value, env)?;
                if !env.assign(&target.name, value) {
                    return Err(RuntimeError::UnknownVariable { name: target.name.clone(),
                                                               line: target.line, });
                }
                Ok(())
            },
            Statement::Read { target } => {
                if !env.contains(&target.name) {
                    return Err(RuntimeError::UnknownVariable { name: target.name.clone(),
                                                               line: target.line, });
                }
                let value = self.read_value(&target.name, target.line)?;
                env.assign(&target.name, value);
                Ok(())
            },
            Statement::Write { value, newline, .. } => {
                let value = match value {
                    Some(expr) => Some(eval_expr(expr, env)?),
                    None => None,
                };
                self.write_value(value, *newline)
            },
            Statement::While { condition, body, .. } => {
                while is_truthy(eval_expr(condition, env)?) {
                    self.exec_block(body, env)?;
                }
                Ok(())
            },
            Statement::If { condition,
                            body,
                            else_body,
                            .. } => {
                if is_truthy(eval_expr(condition, env)?) {
                    self.exec_block(body, env)
                } else if let Some(else_body) = else_body {
                    self.exec_block(else_body, env)
                } else {
                    Ok(())
                }
            },
        }
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// Expressions only read the environment, so no console access is
/// needed.
///
/// # Example
/// ```
/// use meeny::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::{core::eval_expr, environment::Environment},
/// };
///
/// let two = Expr::Number { value: 2, line: 1 };
/// let three = Expr::Number { value: 3, line: 1 };
/// let sum = Expr::BinaryOp { left: Box::new(two), op: BinaryOperator::Add, right: Box::new(three), line: 1 };
///
/// assert_eq!(eval_expr(&sum, &Environment::new()).unwrap(), 5);
/// ```
///
/// # Errors
/// - `UnknownVariable` for a reference to an undeclared name.
/// - `DivisionByZero` or `Overflow` from arithmetic.
pub fn eval_expr(expr: &Expr, env: &Environment) -> EvalResult<Value> {
    match expr {
        Expr::Number { value, .. } => Ok(*value),
        Expr::Reference(reference) => {
            env.get(&reference.name)
               .ok_or_else(|| RuntimeError::UnknownVariable { name: reference.name.clone(),
                                                              line: reference.line, })
        },
        Expr::BinaryOp { left,
                         op,
                         right,
                         line, } => {
            let left = eval_expr(left, env)?;
            let right = eval_expr(right, env)?;
            eval_binary_op(*op, left, right, *line)
        },
    }
}
