//! Simulator error definitions.
//!
//! This module defines the single error type used across the simulator:
//! load-time failures (unreadable files, malformed assembly, out-of-range
//! register operands), configuration failures, and the two runtime faults
//! the pipeline can raise (out-of-range data memory access, branch target
//! outside code memory).

use thiserror::Error;

/// Errors raised while loading a program or running the simulation.
///
/// Load-time variants carry the 1-based source line they were detected on.
/// Runtime variants carry the program counter of the faulting instruction
/// where one is available.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program file could not be opened or read.
    #[error("cannot open program file '{path}': {source}")]
    FileMissing {
        /// Path the loader was asked to open.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A source line did not parse as an APEX instruction.
    #[error("line {line}: malformed instruction '{text}'")]
    MalformedInstruction {
        /// 1-based line number in the program file.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// A register operand was outside `[0, 31]`.
    #[error("line {line}: register operand {value} out of range (expected 0..=31)")]
    OutOfRangeRegister {
        /// 1-based line number in the program file.
        line: usize,
        /// The operand value as written.
        value: i64,
    },

    /// A LOAD or STORE computed an effective address outside data memory.
    #[error("pc({pc}): data memory address {addr} out of range")]
    OutOfRangeMemory {
        /// Program counter of the faulting instruction.
        pc: u32,
        /// The effective address that missed.
        addr: i64,
    },

    /// A taken branch or jump targeted an address outside code memory.
    #[error("branch target {target} outside code memory")]
    BadPc {
        /// The out-of-range target address.
        target: u32,
    },

    /// The configuration file could not be read.
    #[error("cannot read config file '{path}': {source}")]
    ConfigRead {
        /// Path of the configuration file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file was not valid TOML.
    #[error("cannot parse config file '{path}': {source}")]
    ConfigParse {
        /// Path of the configuration file.
        path: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}
