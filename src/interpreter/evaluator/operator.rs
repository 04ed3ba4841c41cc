use crate::{ast::Operator, error::EvalError, interpreter::evaluator::core::EvalResult};

/// Applies a one-operand operator.
///
/// # Errors
/// Returns [`EvalError::ArityMismatch`] for `+` and `*`.
///
/// # Example
/// ```
/// use grapher::{ast::Operator, interpreter::evaluator::operator::apply_unary};
///
/// assert_eq!(apply_unary(Operator::Cosine, 0.0).unwrap(), 1.0);
/// assert!(apply_unary(Operator::Add, 0.0).is_err());
/// ```
pub fn apply_unary(op: Operator, value: f64) -> EvalResult<f64> {
    match op {
        Operator::Sine => Ok(value.sin()),
        Operator::Cosine => Ok(value.cos()),
        Operator::Add | Operator::Multiply => Err(EvalError::ArityMismatch { operator: op,
                                                                             expected: op.arity(),
                                                                             found:    1, }),
    }
}

/// Applies a two-operand operator.
///
/// # Errors
/// Returns [`EvalError::ArityMismatch`] for `sin` and `cos`.
pub fn apply_binary(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Multiply => Ok(left * right),
        Operator::Sine | Operator::Cosine => Err(EvalError::ArityMismatch { operator: op,
                                                                            expected: op.arity(),
                                                                            found:    2, }),
    }
}
