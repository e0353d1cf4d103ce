use crate::{
    interpreter::{evaluator::core::Context, operator::BinaryOperator},
    machine::Word,
    util::num::word_from_bool,
};

impl Context<'_> {
    /// Evaluates `==` or `!=`, producing `1` for true and `0` for false.
    #[must_use]
    pub fn eval_comparison(op: BinaryOperator, left: Word, right: Word) -> Word {
        match op {
            BinaryOperator::Equal => word_from_bool(left == right),
            BinaryOperator::NotEqual => word_from_bool(left != right),
            _ => unreachable!("eval_comparison used with non equality operator {op}"),
        }
    }
}
