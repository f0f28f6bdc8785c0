//! CPU core implementation.
//!
//! Implements the five-stage in-order pipeline (Fetch, Decode/RF,
//! Execute, Memory, Writeback), the architectural register file with its
//! valid-bit scoreboard, and code/data memory.

/// Architectural state (register file, scoreboard, zero flag).
pub mod arch;

/// CPU state and the per-cycle driver.
pub mod cpu;

/// Code and data memory.
pub mod memory;

/// Inter-stage pipeline latches.
pub mod pipeline;

/// Pipeline stage implementations.
pub mod stages;

pub use cpu::Cpu;
