//! Pipeline stage implementations.
//!
//! Contains the five stages of the instruction pipeline:
//! - Fetch: reads instructions from code memory
//! - Decode/RF: reads registers subject to the scoreboard, detects stalls
//! - Execute: ALU operations and branch resolution
//! - Memory: load/store access to data memory
//! - Writeback: register commit, zero-flag update, retirement

/// Instruction decode / register read stage.
pub mod decode;

/// Execute stage.
pub mod execute;

/// Instruction fetch stage.
pub mod fetch;

/// Memory access stage.
pub mod memory_access;

/// Writeback stage.
pub mod write_back;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::fetch_stage;
pub use memory_access::mem_stage;
pub use write_back::wb_stage;

use crate::core::pipeline::StageLatch;

pub(crate) fn print_stage_content(name: &str, stage: &StageLatch) {
    println!("{:<15}: pc({}) {}", name, stage.pc, stage);
}
