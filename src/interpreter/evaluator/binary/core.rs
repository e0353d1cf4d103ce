use crate::{
    interpreter::{
        evaluator::core::{Context, EvalResult},
        operator::BinaryOperator,
    },
    machine::Word,
};

impl Context<'_> {
    /// Evaluates a binary operation between two words.
    ///
    /// Arithmetic operators go to `eval_scalar_op`, equality operators to
    /// `eval_comparison` and logical operators to `eval_logic`. Both operands
    /// have already been evaluated.
    ///
    /// # Example
    /// ```
    /// use sdbexpr::interpreter::{evaluator::core::Context, operator::BinaryOperator};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Add, 3, 4).unwrap(), 7);
    /// assert_eq!(Context::eval_binary(BinaryOperator::NotEqual, 3, 4).unwrap(), 1);
    /// assert!(Context::eval_binary(BinaryOperator::Mod, 3, 0).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: Word, right: Word) -> EvalResult<Word> {
        use BinaryOperator::{Add, And, Div, Equal, Mod, Mul, NotEqual, Or, Sub};

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_scalar_op(op, left, right),
            Equal | NotEqual => Ok(Self::eval_comparison(op, left, right)),
            And | Or => Ok(Self::eval_logic(op, left, right)),
        }
    }
}
