//! APEX program loader.
//!
//! Reads an assembled program, one instruction per line, into a dense
//! instruction vector. Tokens are separated by whitespace or commas;
//! register operands may be written `R3` or bare `3`, immediates `#8` or
//! bare `8`. Operands follow each opcode's assembly signature, e.g.
//! `ADD R1,R2,R3`, `LOAD R4,R1,#16`, `BZ #8`. Blank lines are skipped.

use std::fs;

use crate::common::SimError;
use crate::isa::{Instruction, Opcode};

/// Loads and parses a program file.
pub fn load_program(path: &str) -> Result<Vec<Instruction>, SimError> {
    let source = fs::read_to_string(path).map_err(|source| SimError::FileMissing {
        path: path.to_string(),
        source,
    })?;
    parse_program(&source)
}

/// Parses program text into instruction records.
///
/// The PC of the i-th record is `base + 4 * i` once placed in code memory.
pub fn parse_program(source: &str) -> Result<Vec<Instruction>, SimError> {
    let mut program = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        program.push(parse_line(line, idx + 1)?);
    }
    Ok(program)
}

fn parse_line(line: &str, line_no: usize) -> Result<Instruction, SimError> {
    let malformed = || SimError::MalformedInstruction {
        line: line_no,
        text: line.trim().to_string(),
    };

    let mut tokens = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());

    let op = tokens
        .next()
        .and_then(Opcode::from_mnemonic)
        .ok_or_else(malformed)?;

    let operands = tokens
        .map(parse_operand)
        .collect::<Option<Vec<i64>>>()
        .ok_or_else(malformed)?;

    let reg = |value: i64| -> Result<usize, SimError> {
        if (0..32).contains(&value) {
            Ok(value as usize)
        } else {
            Err(SimError::OutOfRangeRegister {
                line: line_no,
                value,
            })
        }
    };
    let imm = |value: i64| -> Result<i32, SimError> {
        i32::try_from(value).map_err(|_| malformed())
    };

    let mut inst = Instruction {
        op,
        ..Instruction::default()
    };
    match op {
        Opcode::Movc => {
            let [a, b] = take_operands(&operands).ok_or_else(malformed)?;
            inst.rd = reg(a)?;
            inst.imm = imm(b)?;
        }
        Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::And | Opcode::Or | Opcode::ExOr => {
            let [a, b, c] = take_operands(&operands).ok_or_else(malformed)?;
            inst.rd = reg(a)?;
            inst.rs1 = reg(b)?;
            inst.rs2 = reg(c)?;
        }
        Opcode::Load => {
            let [a, b, c] = take_operands(&operands).ok_or_else(malformed)?;
            inst.rd = reg(a)?;
            inst.rs1 = reg(b)?;
            inst.imm = imm(c)?;
        }
        Opcode::Store => {
            let [a, b, c] = take_operands(&operands).ok_or_else(malformed)?;
            inst.rs1 = reg(a)?;
            inst.rs2 = reg(b)?;
            inst.imm = imm(c)?;
        }
        Opcode::Bz | Opcode::Bnz => {
            let [a] = take_operands(&operands).ok_or_else(malformed)?;
            inst.imm = imm(a)?;
        }
        Opcode::Jump => {
            let [a, b] = take_operands(&operands).ok_or_else(malformed)?;
            inst.rs1 = reg(a)?;
            inst.imm = imm(b)?;
        }
        Opcode::Halt => {
            if !operands.is_empty() {
                return Err(malformed());
            }
        }
        Opcode::Nop => return Err(malformed()),
    }
    Ok(inst)
}

fn take_operands<const N: usize>(operands: &[i64]) -> Option<[i64; N]> {
    <[i64; N]>::try_from(operands).ok()
}

fn parse_operand(token: &str) -> Option<i64> {
    let stripped = token
        .strip_prefix(['R', 'r'])
        .or_else(|| token.strip_prefix('#'))
        .unwrap_or(token);
    stripped.parse().ok()
}
