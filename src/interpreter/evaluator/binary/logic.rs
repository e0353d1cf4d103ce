use crate::{
    interpreter::{evaluator::core::Context, operator::BinaryOperator},
    machine::Word,
    util::num::word_from_bool,
};

impl Context<'_> {
    /// Evaluates a logical operation between two words.
    ///
    /// Any nonzero word is true. The result is `1` or `0`. Both operands were
    /// evaluated before this is called, so there is no short-circuiting.
    ///
    /// # Example
    /// ```
    /// use sdbexpr::interpreter::{evaluator::core::Context, operator::BinaryOperator};
    ///
    /// assert_eq!(Context::eval_logic(BinaryOperator::And, 5, 9), 1);
    /// assert_eq!(Context::eval_logic(BinaryOperator::Or, 0, 0), 0);
    /// ```
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, left: Word, right: Word) -> Word {
        match op {
            BinaryOperator::And => word_from_bool(left != 0 && right != 0),
            BinaryOperator::Or => word_from_bool(left != 0 || right != 0),
            _ => unreachable!("eval_logic used with non logical operator {op}"),
        }
    }
}
