//! Program loader accept/reject tests.

use std::io::Write;

use pretty_assertions::assert_eq;

use apex_emulator::common::SimError;
use apex_emulator::isa::{Instruction, Opcode};
use apex_emulator::sim::loader;

#[test]
fn test_parses_comma_separated_assembly_form() {
    let program = loader::parse_program("MOVC,R1,#5\n").unwrap();
    assert_eq!(
        program,
        vec![Instruction {
            op: Opcode::Movc,
            rd: 1,
            rs1: 0,
            rs2: 0,
            imm: 5,
        }]
    );
}

#[test]
fn test_bare_integers_parse_like_prefixed_operands() {
    let prefixed = loader::parse_program("ADD R3,R1,R2\n").unwrap();
    let bare = loader::parse_program("ADD 3 1 2\n").unwrap();
    assert_eq!(prefixed, bare);
}

#[test]
fn test_parses_every_opcode_signature() {
    let program = loader::parse_program(
        "MOVC R1,#10\n\
         ADD R2,R1,R1\n\
         SUB R3,R2,R1\n\
         MUL R4,R2,R2\n\
         AND R5,R4,R2\n\
         OR R6,R5,R1\n\
         EX-OR R7,R6,R1\n\
         LOAD R8,R1,#4\n\
         STORE R8,R1,#8\n\
         BZ #8\n\
         BNZ #-4\n\
         JUMP R1,#0\n\
         HALT\n",
    )
    .unwrap();

    assert_eq!(program.len(), 13);
    assert_eq!(program[6].op, Opcode::ExOr);
    assert_eq!(
        program[8],
        Instruction {
            op: Opcode::Store,
            rd: 0,
            rs1: 8,
            rs2: 1,
            imm: 8,
        }
    );
    assert_eq!(program[10].imm, -4);
}

#[test]
fn test_blank_lines_are_skipped() {
    let program = loader::parse_program("\nMOVC R1,#1\n\n\nHALT\n\n").unwrap();
    assert_eq!(program.len(), 2);
}

#[test]
fn test_unknown_opcode_reports_line_number() {
    let err = loader::parse_program("MOVC R1,#1\nFROB R2,R3,R4\n").unwrap_err();
    match err {
        SimError::MalformedInstruction { line, text } => {
            assert_eq!(line, 2);
            assert_eq!(text, "FROB R2,R3,R4");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_register_out_of_range_is_rejected() {
    let err = loader::parse_program("ADD R32,R1,R2\n").unwrap_err();
    assert!(matches!(
        err,
        SimError::OutOfRangeRegister { line: 1, value: 32 }
    ));
}

#[test]
fn test_missing_operand_is_rejected() {
    let err = loader::parse_program("ADD R1,R2\n").unwrap_err();
    assert!(matches!(err, SimError::MalformedInstruction { line: 1, .. }));
}

#[test]
fn test_halt_takes_no_operands() {
    let err = loader::parse_program("HALT #3\n").unwrap_err();
    assert!(matches!(err, SimError::MalformedInstruction { line: 1, .. }));
}

#[test]
fn test_load_program_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "MOVC R1,#5\nMOVC R2,#7\nADD R3,R1,R2\nHALT\n").unwrap();

    let program = loader::load_program(file.path().to_str().unwrap()).unwrap();
    assert_eq!(program.len(), 4);
    assert_eq!(program[3].op, Opcode::Halt);
}

#[test]
fn test_missing_file_is_reported() {
    let err = loader::load_program("/no/such/program.asm").unwrap_err();
    assert!(matches!(err, SimError::FileMissing { .. }));
}
