//! APEX CPU state and the per-cycle driver.

use crate::common::SimError;
use crate::config::Config;
use crate::core::arch::RegisterFile;
use crate::core::memory::{CodeMemory, DataMemory};
use crate::core::pipeline::StageLatch;
use crate::core::stages;
use crate::stats::SimStats;

/// The simulated processor.
///
/// Owns the architectural state (register file, zero flag, PC, data
/// memory), the five stage latches, and the control signals the stages
/// exchange: the branch `redirect` event raised by execute and consumed
/// by fetch, the permanent `fetch_halted` condition raised when `HALT`
/// is decoded, and the `halted` termination flag raised when `HALT`
/// retires.
pub struct Cpu {
    pub regs: RegisterFile,
    pub pc: u32,
    pub trace: bool,
    pub code: CodeMemory,
    pub data: DataMemory,

    pub fetch: StageLatch,
    pub decode: StageLatch,
    pub execute: StageLatch,
    pub memory: StageLatch,
    pub writeback: StageLatch,

    /// Branch target raised by execute, consumed by the next fetch.
    pub redirect: Option<u32>,
    /// Fetch is stopped because `HALT` was decoded.
    pub fetch_halted: bool,
    /// `HALT` has retired; the driver must stop.
    pub halted: bool,

    pub stats: SimStats,

    dump_words: usize,
}

impl Cpu {
    /// Creates a CPU over `code` with everything else at reset state.
    pub fn new(code: CodeMemory, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: code.base(),
            trace: config.general.trace_instructions,
            code,
            data: DataMemory::new(config.memory.size_words),
            fetch: StageLatch::bubble(),
            decode: StageLatch::bubble(),
            execute: StageLatch::bubble(),
            memory: StageLatch::bubble(),
            writeback: StageLatch::bubble(),
            redirect: None,
            fetch_halted: false,
            halted: false,
            stats: SimStats::default(),
            dump_words: config.memory.dump_words,
        }
    }

    /// Advances the pipeline by one cycle.
    ///
    /// Stages run tail-first (WB, MEM, EX, DRF, F) so that each stage
    /// consumes the latch its upstream neighbour wrote in the previous
    /// cycle, not the value it writes this cycle.
    pub fn tick(&mut self) -> Result<(), SimError> {
        self.stats.cycles += 1;

        if self.trace {
            println!("--------------------------------");
            println!("Clock Cycle #: {}", self.stats.cycles);
            println!("--------------------------------");
        }

        stages::wb_stage(self);
        stages::mem_stage(self)?;
        stages::execute_stage(self);
        stages::decode_stage(self);
        stages::fetch_stage(self)?;

        Ok(())
    }

    /// Runs the pipeline until `HALT` retires, then prints the final dump.
    ///
    /// A fatal fault (out-of-range memory access or branch target) emits
    /// the current dump before the error is returned.
    pub fn run(&mut self) -> Result<(), SimError> {
        while !self.halted {
            if let Err(e) = self.tick() {
                self.dump_state();
                return Err(e);
            }
        }
        print!("(apex) >> Simulation Complete");
        self.dump_state();
        Ok(())
    }

    /// Prints the architectural-file and data-memory dumps.
    pub fn dump_state(&self) {
        self.regs.dump();
        self.data.dump(self.dump_words);
    }
}
