use crate::machine::{Machine, Word};

/// Base address of the memory window, matching the usual RISC-V reset vector.
pub const MEMORY_BASE: Word = 0x8000_0000;
/// Default size of the memory window in bytes.
pub const DEFAULT_MEMORY_SIZE: usize = 0x1_0000;

/// General purpose register names in architectural order.
pub const GPR_NAMES: [&str; 32] = ["0", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0",
                                   "a1", "a2", "a3", "a4", "a5", "a6", "a7", "s2", "s3", "s4",
                                   "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4", "t5",
                                   "t6"];

/// A RISC-V style register file plus one contiguous memory window.
///
/// Register `$0` is hardwired to zero. Memory is little-endian and starts at
/// [`MEMORY_BASE`]; any access that leaves the window fails.
#[derive(Debug, Clone)]
pub struct SimMachine {
    gpr:    [Word; 32],
    pc:     Word,
    memory: Vec<u8>,
}

impl Default for SimMachine {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_SIZE)
    }
}

impl SimMachine {
    /// Creates a machine with zeroed registers, `pc` at [`MEMORY_BASE`] and
    /// `memory_size` bytes of zeroed memory.
    #[must_use]
    pub fn new(memory_size: usize) -> Self {
        Self { gpr:    [0; 32],
               pc:     MEMORY_BASE,
               memory: vec![0; memory_size], }
    }

    /// Returns the program counter.
    #[must_use]
    pub const fn pc(&self) -> Word {
        self.pc
    }

    /// Moves the program counter.
    pub const fn set_pc(&mut self, pc: Word) {
        self.pc = pc;
    }

    /// Writes a register by name. Writes to `$0` are discarded.
    ///
    /// Returns `false` if no register has that name.
    ///
    /// # Example
    /// ```
    /// use sdbexpr::machine::{Machine, sim::SimMachine};
    ///
    /// let mut machine = SimMachine::default();
    /// assert!(machine.write_register("a0", 7));
    /// assert_eq!(machine.read_register("a0"), Some(7));
    /// assert!(!machine.write_register("nope", 7));
    /// ```
    pub fn write_register(&mut self, name: &str, value: Word) -> bool {
        if name == "pc" {
            self.pc = value;
            return true;
        }
        match Self::gpr_index(name) {
            Some(0) => true,
            Some(i) => {
                self.gpr[i] = value;
                true
            },
            None => false,
        }
    }

    /// Writes the low `size` bytes of `value` at `address`.
    ///
    /// Returns `false` if the range is not inside the memory window or the
    /// size is not 1, 2, 4 or 8.
    pub fn write_memory(&mut self, address: Word, size: usize, value: Word) -> bool {
        let Some(range) = self.window(address, size) else {
            return false;
        };
        self.memory[range].copy_from_slice(&value.to_le_bytes()[..size]);
        true
    }

    /// Iterates over every register as `(name, value)`, `pc` last.
    pub fn registers(&self) -> impl Iterator<Item = (&'static str, Word)> + '_ {
        GPR_NAMES.iter()
                 .copied()
                 .zip(self.gpr.iter().copied())
                 .chain(std::iter::once(("pc", self.pc)))
    }

    fn gpr_index(name: &str) -> Option<usize> {
        GPR_NAMES.iter().position(|&n| n == name)
    }

    fn window(&self, address: Word, size: usize) -> Option<std::ops::Range<usize>> {
        if !matches!(size, 1 | 2 | 4 | 8) {
            return None;
        }
        let offset = usize::try_from(address.checked_sub(MEMORY_BASE)?).ok()?;
        let end = offset.checked_add(size)?;
        (end <= self.memory.len()).then_some(offset..end)
    }
}

impl Machine for SimMachine {
    fn read_register(&self, name: &str) -> Option<Word> {
        if name == "pc" {
            return Some(self.pc);
        }
        Self::gpr_index(name).map(|i| self.gpr[i])
    }

    fn read_memory(&self, address: Word, size: usize) -> Option<Word> {
        let range = self.window(address, size)?;
        let mut bytes = [0u8; 8];
        bytes[..size].copy_from_slice(&self.memory[range]);
        Some(Word::from_le_bytes(bytes))
    }
}
