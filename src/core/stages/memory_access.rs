use crate::common::SimError;
use crate::core::stages::print_stage_content;
use crate::core::Cpu;
use crate::isa::Opcode;

pub fn mem_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    let mut stage = cpu.memory;

    match stage.op {
        Opcode::Load => {
            // The scratch result holds the effective address going in and
            // the loaded value coming out.
            let addr = stage.result;
            stage.result = cpu.data.read(addr).ok_or(SimError::OutOfRangeMemory {
                pc: stage.pc,
                addr: addr as i64,
            })?;
        }
        Opcode::Store => {
            let addr = stage.result;
            cpu.data
                .write(addr, stage.rs1_value)
                .ok_or(SimError::OutOfRangeMemory {
                    pc: stage.pc,
                    addr: addr as i64,
                })?;
        }
        _ => {}
    }

    cpu.writeback = stage;
    cpu.memory = stage;

    if cpu.trace {
        print_stage_content("Memory", &cpu.memory);
    }
    Ok(())
}
