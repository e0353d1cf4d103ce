/// In-memory reference machine.
///
/// A register file and a flat little-endian memory window, enough to drive
/// the evaluator and the watchpoint pool without a real CPU model.
pub mod sim;

/// The emulated CPU's native unsigned integer width.
///
/// Every evaluated value and every memory address is a `Word`.
pub type Word = u64;

/// Number of bytes read by the dereference operator.
pub const DEREF_SIZE: usize = 4;

/// Access to the emulated machine's state.
///
/// The evaluator never owns registers or memory. It asks the host through this
/// trait, which the CPU model (or [`sim::SimMachine`]) implements.
pub trait Machine {
    /// Reads a register by name, as typed, without the `$` prefix.
    ///
    /// Returns `None` if the register file has no such register.
    fn read_register(&self, name: &str) -> Option<Word>;

    /// Reads `size` bytes (1, 2, 4 or 8) at a virtual address, zero-extended
    /// to a word.
    ///
    /// Returns `None` if the address range is not mapped.
    fn read_memory(&self, address: Word, size: usize) -> Option<Word>;
}
