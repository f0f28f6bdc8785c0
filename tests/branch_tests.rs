//! Branch resolution, zero-flag timing, and flush tests.

use pretty_assertions::assert_eq;

use apex_emulator::config::Config;
use apex_emulator::core::memory::CodeMemory;
use apex_emulator::core::Cpu;
use apex_emulator::sim::loader;

fn run_program(src: &str) -> Cpu {
    let program = loader::parse_program(src).expect("program parses");
    let config = Config::default();
    let code = CodeMemory::new(config.general.start_pc, program);
    let mut cpu = Cpu::new(code, &config);
    cpu.run().expect("program runs to completion");
    cpu
}

#[test]
fn test_taken_bz_flushes_wrong_path() {
    // BZ at 4012 skips over the MOVC R4 at 4016 to the MOVC R5 at 4020.
    let cpu = run_program(
        "MOVC R1,#0\n\
         MOVC R2,#1\n\
         SUB R3,R1,R1\n\
         BZ #8\n\
         MOVC R4,#99\n\
         MOVC R5,#7\n\
         HALT\n",
    );

    assert_eq!(cpu.regs.read(4), 0);
    assert_eq!(cpu.regs.read(5), 7);
    assert!(cpu.regs.zero_flag());
    assert_eq!(cpu.stats.instructions_retired, 6);
    assert_eq!(cpu.stats.cycles, 14);
    assert_eq!(cpu.stats.flushes, 1);
}

#[test]
fn test_flush_restores_wrong_path_scoreboard_claim() {
    // The flushed MOVC R4 invalidated R4 at decode; the flush must put
    // the valid bit back.
    let cpu = run_program(
        "MOVC R1,#0\n\
         MOVC R2,#1\n\
         SUB R3,R1,R1\n\
         BZ #8\n\
         MOVC R4,#99\n\
         MOVC R5,#7\n\
         HALT\n",
    );

    assert!(cpu.regs.is_valid(4));
}

#[test]
fn test_untaken_bz_falls_through() {
    let cpu = run_program(
        "MOVC R1,#5\n\
         MOVC R2,#3\n\
         SUB R3,R1,R2\n\
         BZ #8\n\
         MOVC R4,#99\n\
         HALT\n",
    );

    assert_eq!(cpu.regs.read(3), 2);
    assert_eq!(cpu.regs.read(4), 99);
    assert_eq!(cpu.stats.flushes, 0);
}

#[test]
fn test_jump_flushes_and_reaches_halt() {
    // JUMP at 4004 lands on the HALT at 4012; the MOVC R2 in its shadow
    // must never retire.
    let cpu = run_program(
        "MOVC R1,#4004\n\
         JUMP R1,#8\n\
         MOVC R2,#1\n\
         HALT\n",
    );

    assert_eq!(cpu.regs.read(2), 0);
    assert!(cpu.regs.is_valid(2));
    assert_eq!(cpu.stats.instructions_retired, 3);
    assert_eq!(cpu.stats.cycles, 11);
}

#[test]
fn test_bz_waits_for_mul_flag() {
    // The flag consumed by BZ must come from the MUL immediately ahead of
    // it, which spends two cycles in execute before retiring.
    let cpu = run_program(
        "MOVC R1,#0\n\
         MOVC R2,#5\n\
         MUL R3,R1,R2\n\
         BZ #8\n\
         MOVC R4,#77\n\
         HALT\n",
    );

    assert_eq!(cpu.regs.read(3), 0);
    assert_eq!(cpu.regs.read(4), 0);
    assert!(cpu.regs.zero_flag());
    assert_eq!(cpu.stats.flushes, 1);
}

#[test]
fn test_bz_uses_immediately_preceding_flag() {
    // SUB sets the flag, but the ADD after it clears it again before the
    // BZ resolves; the branch must not fire on the stale SUB flag.
    let cpu = run_program(
        "MOVC R1,#0\n\
         SUB R2,R1,R1\n\
         MOVC R3,#5\n\
         ADD R4,R3,R3\n\
         BZ #8\n\
         MOVC R5,#42\n\
         HALT\n",
    );

    assert_eq!(cpu.regs.read(2), 0);
    assert_eq!(cpu.regs.read(4), 10);
    assert_eq!(cpu.regs.read(5), 42);
    assert_eq!(cpu.stats.flushes, 0);
}

#[test]
fn test_bnz_loop_until_zero() {
    // Decrement R1 from 2; BNZ jumps back to the SUB until it hits zero.
    let cpu = run_program(
        "MOVC R1,#2\n\
         MOVC R2,#1\n\
         SUB R1,R1,R2\n\
         BNZ #-4\n\
         HALT\n",
    );

    assert_eq!(cpu.regs.read(1), 0);
    assert!(cpu.regs.zero_flag());
    assert_eq!(cpu.stats.flushes, 1);
    // MOVC x2, two SUB/BNZ rounds, HALT.
    assert_eq!(cpu.stats.instructions_retired, 7);
}
