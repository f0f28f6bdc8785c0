//! Architectural state.
//!
//! Holds the register file, its valid-bit scoreboard, and the zero flag.

/// Register file and scoreboard implementation.
pub mod regs;

pub use regs::RegisterFile;
