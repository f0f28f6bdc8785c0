use crate::common::SimError;
use crate::core::stages::print_stage_content;
use crate::core::Cpu;
use crate::core::pipeline::StageLatch;

pub fn fetch_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    // A redirect raised by execute this cycle kills the wrong-path
    // instructions in the front end and steers the PC.
    if let Some(target) = cpu.redirect.take() {
        cpu.fetch = StageLatch::bubble();
        cpu.decode = StageLatch::bubble();
        cpu.fetch_halted = false;
        cpu.pc = target;
        if !cpu.code.contains(target) {
            return Err(SimError::BadPc { target });
        }
        if cpu.trace {
            print_stage_content("Fetch", &cpu.fetch);
        }
        return Ok(());
    }

    if cpu.fetch_halted {
        if cpu.trace {
            print_stage_content("Fetch", &cpu.fetch);
        }
        return Ok(());
    }

    if !cpu.fetch.stalled {
        match cpu.code.fetch(cpu.pc) {
            Some(inst) => {
                cpu.fetch = StageLatch::load(cpu.pc, inst);
                cpu.pc += 4;
                if !cpu.decode.stalled {
                    cpu.decode = cpu.fetch;
                } else {
                    cpu.fetch.stalled = true;
                }
            }
            None => {
                // Past the end of the program: feed bubbles while the
                // pipeline drains.
                cpu.fetch = StageLatch::bubble();
                if !cpu.decode.stalled {
                    cpu.decode = cpu.fetch;
                }
            }
        }
    } else if !cpu.decode.stalled {
        // Back-pressure released: forward the held instruction.
        cpu.fetch.stalled = false;
        cpu.decode = cpu.fetch;
    }

    if cpu.trace {
        print_stage_content("Fetch", &cpu.fetch);
    }
    Ok(())
}
