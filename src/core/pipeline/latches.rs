//! Pipeline latch structure for inter-stage communication.
//!
//! One latch sits in front of each of the five pipeline stages and holds
//! the instruction that stage will process next cycle. Because stages run
//! tail-first within a cycle, a stage always observes the value its
//! upstream neighbour produced in the previous cycle, emulating
//! edge-triggered latches.

use std::fmt;

use crate::isa::{Instruction, Opcode};

/// Snapshot of one in-flight instruction plus its stage control bits.
///
/// An empty latch (a bubble) carries [`Opcode::Nop`]; every stage passes
/// bubbles through without side effects. The same structure serves all
/// five stages: APEX latches are homogeneous, so there is no per-boundary
/// entry type.
#[derive(Clone, Copy, Debug, Default)]
pub struct StageLatch {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded operation.
    pub op: Opcode,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Signed immediate operand.
    pub imm: i32,
    /// Value read from rs1 at decode (also the store data for `STORE`).
    pub rs1_value: i32,
    /// Value read from rs2 at decode.
    pub rs2_value: i32,
    /// Scratch result: ALU output, then the loaded value for `LOAD`.
    pub result: i32,
    /// The stage is holding this latch and signalling upstream to hold too.
    pub stalled: bool,
    /// Remaining bubbles a waiting `BZ`/`BNZ` must insert before release.
    pub bubble_cycles: u8,
    /// Execute-stage occupancy counter used by the two-cycle `MUL`.
    pub cycles_in_execute: u8,
}

impl StageLatch {
    /// An empty latch.
    pub fn bubble() -> Self {
        Self::default()
    }

    /// A latch freshly filled from code memory.
    pub fn load(pc: u32, inst: Instruction) -> Self {
        Self {
            pc,
            op: inst.op,
            rd: inst.rd,
            rs1: inst.rs1,
            rs2: inst.rs2,
            imm: inst.imm,
            ..Self::default()
        }
    }

    /// Whether this latch carries no instruction.
    pub fn is_bubble(&self) -> bool {
        self.op == Opcode::Nop
    }
}

impl fmt::Display for StageLatch {
    /// Renders the instruction in trace form, e.g. `ADD,R3,R1,R2` or
    /// `MOVC,R1,#5`. Bubbles render as nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.op.mnemonic();
        match self.op {
            Opcode::Nop => Ok(()),
            Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::And | Opcode::Or | Opcode::ExOr => {
                write!(f, "{},R{},R{},R{}", name, self.rd, self.rs1, self.rs2)
            }
            Opcode::Load => write!(f, "{},R{},R{},#{}", name, self.rd, self.rs1, self.imm),
            Opcode::Store => write!(f, "{},R{},R{},#{}", name, self.rs1, self.rs2, self.imm),
            Opcode::Movc => write!(f, "{},R{},#{}", name, self.rd, self.imm),
            Opcode::Bz | Opcode::Bnz | Opcode::Jump | Opcode::Halt => {
                write!(f, "{},#{}", name, self.imm)
            }
        }
    }
}
