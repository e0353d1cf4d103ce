use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        operator::BinaryOperator,
    },
    machine::Word,
};

impl Context<'_> {
    /// Evaluates an arithmetic operation with machine word semantics.
    ///
    /// Addition, subtraction and multiplication wrap around at word width.
    /// Division and remainder are unsigned; a zero divisor is checked
    /// explicitly. The operator must be one of `Add`, `Sub`, `Mul`, `Div` or
    /// `Mod`.
    ///
    /// # Example
    /// ```
    /// use sdbexpr::interpreter::{evaluator::core::Context, operator::BinaryOperator};
    ///
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Sub, 0, 1).unwrap(), u64::MAX);
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Div, 7, 2).unwrap(), 3);
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator, left: Word, right: Word) -> EvalResult<Word> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        match op {
            Add => Ok(left.wrapping_add(right)),
            Sub => Ok(left.wrapping_sub(right)),
            Mul => Ok(left.wrapping_mul(right)),
            Div => left.checked_div(right).ok_or(EvalError::DivisionByZero),
            Mod => left.checked_rem(right).ok_or(EvalError::DivisionByZero),
            _ => unreachable!("eval_scalar_op used with non arithmetic operator {op}"),
        }
    }
}
