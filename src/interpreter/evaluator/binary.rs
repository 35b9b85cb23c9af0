use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Value},
    util::num::{checked_floor_div, checked_floor_mod},
};

/// Truth value of a condition: any nonzero integer is true.
#[must_use]
pub const fn is_truthy(value: Value) -> bool {
    value != 0
}

/// Integer encoding of a comparison result: `1` for true, `0` for false.
#[must_use]
pub const fn from_bool(value: bool) -> Value {
    if value { 1 } else { 0 }
}

/// Evaluates a binary operation on two already-evaluated operands.
///
/// Arithmetic is checked: results that do not fit in an `i64` are reported as
/// `Overflow` instead of wrapping. `/` and `%` round toward negative infinity
/// and reject a zero divisor. Comparisons yield `1` or `0`.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use meeny::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary_op};
///
/// assert_eq!(eval_binary_op(BinaryOperator::Div, -7, 2, 1).unwrap(), -4);
/// assert_eq!(eval_binary_op(BinaryOperator::Greater, 3, 2, 1).unwrap(), 1);
/// assert!(eval_binary_op(BinaryOperator::Mod, 3, 0, 1).is_err());
/// ```
pub fn eval_binary_op(op: BinaryOperator,
                      left: Value,
                      right: Value,
                      line: usize)
                      -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Equal, Greater, Mod, Mul, NotEqual, Sub};

    match op {
        Add => left.checked_add(right).ok_or(RuntimeError::Overflow { line }),
        Sub => left.checked_sub(right).ok_or(RuntimeError::Overflow { line }),
        Mul => left.checked_mul(right).ok_or(RuntimeError::Overflow { line }),
        Div | Mod => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            let result = if op == Div {
                checked_floor_div(left, right)
            } else {
                checked_floor_mod(left, right)
            };
            result.ok_or(RuntimeError::Overflow { line })
        },
        Greater => Ok(from_bool(left > right)),
        Equal => Ok(from_bool(left == right)),
        NotEqual => Ok(from_bool(left != right)),
    }
}
