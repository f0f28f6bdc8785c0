//! Code and data memory.
//!
//! Code memory is a read-only vector of decoded instructions addressed by
//! program counter; data memory is a flat array of signed 32-bit words
//! addressed directly by effective address (word-indexed, not byte-scaled).

use crate::isa::Instruction;

/// Read-only instruction memory.
///
/// The i-th instruction lives at `base + 4 * i`. All valid PCs are
/// 4-byte aligned multiples above `base`.
pub struct CodeMemory {
    base: u32,
    instructions: Vec<Instruction>,
}

impl CodeMemory {
    /// Creates code memory holding `instructions` starting at `base`.
    pub fn new(base: u32, instructions: Vec<Instruction>) -> Self {
        Self { base, instructions }
    }

    /// Address of the first instruction.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Number of instructions loaded.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program is empty.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Whether `pc` addresses an instruction.
    pub fn contains(&self, pc: u32) -> bool {
        self.index_of(pc).is_some()
    }

    /// The instruction at `pc`, if any.
    pub fn fetch(&self, pc: u32) -> Option<Instruction> {
        self.index_of(pc).map(|i| self.instructions[i])
    }

    fn index_of(&self, pc: u32) -> Option<usize> {
        if pc < self.base || (pc - self.base) % 4 != 0 {
            return None;
        }
        let index = ((pc - self.base) / 4) as usize;
        (index < self.instructions.len()).then_some(index)
    }
}

/// Word-addressable data memory.
pub struct DataMemory {
    words: Vec<i32>,
}

impl DataMemory {
    /// Creates zero-filled data memory of `size_words` words.
    pub fn new(size_words: usize) -> Self {
        Self {
            words: vec![0; size_words],
        }
    }

    /// Reads the word at `addr`, or `None` when out of range.
    pub fn read(&self, addr: i32) -> Option<i32> {
        usize::try_from(addr)
            .ok()
            .and_then(|a| self.words.get(a))
            .copied()
    }

    /// Writes the word at `addr`; `None` when out of range.
    pub fn write(&mut self, addr: i32, value: i32) -> Option<()> {
        let slot = usize::try_from(addr)
            .ok()
            .and_then(|a| self.words.get_mut(a))?;
        *slot = value;
        Some(())
    }

    /// Prints the data memory section of the final dump.
    pub fn dump(&self, words: usize) {
        println!("===============STATE OF DATA MEMORY==================");
        for (addr, value) in self.words.iter().take(words).enumerate() {
            println!("|MEM[{}}} | Data Value={} ", addr, value);
            println!();
        }
    }
}
