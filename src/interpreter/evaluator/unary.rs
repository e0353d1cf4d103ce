use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        operator::UnaryOperator,
    },
    machine::{DEREF_SIZE, Word},
    util::num::word_from_bool,
};

impl Context<'_> {
    /// Applies a unary operator to an evaluated operand.
    ///
    /// Supported operators:
    /// - `Not`: `1` if the operand is zero, `0` otherwise.
    /// - `Negate`: two's complement negation, wrapping at word width.
    /// - `Deref`: reads 4 bytes at the operand address, zero-extended.
    ///
    /// # Errors
    /// `MemoryReadFailed` if the machine cannot read the dereferenced address.
    pub fn eval_unary(&self, op: UnaryOperator, value: Word) -> EvalResult<Word> {
        match op {
            UnaryOperator::Not => Ok(word_from_bool(value == 0)),
            UnaryOperator::Negate => Ok(value.wrapping_neg()),
            UnaryOperator::Deref => {
                self.machine()
                    .read_memory(value, DEREF_SIZE)
                    .ok_or(EvalError::MemoryReadFailed { address: value,
                                                         size:    DEREF_SIZE, })
            },
        }
    }
}
