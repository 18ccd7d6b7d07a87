//! Decode / register-read stage.

use crate::common::SimError;
use crate::core::cpu::Cpu;
use crate::core::pipeline::{hazards, signals};
use crate::isa::{Opcode, NO_REG};

/// Branch-flush check, stall resolution, hazard scan, and (if clear)
/// register read, in that order.
pub fn decode_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    if cpu.branch_pending {
        cpu.decode.invalidate();
    }

    if cpu.decode.valid && cpu.decode.opcode != Opcode::Nop {
        cpu.stall = false;
    }

    if hazards::need_stall_load_use(&cpu.decode, &cpu.execute, &cpu.memory1, &cpu.memory) {
        cpu.stall = true;
        cpu.refetch = true;
        return Ok(());
    }

    if !cpu.decode.valid {
        return Ok(());
    }

    if cpu.decode.opcode == Opcode::Halt {
        cpu.halt_pending = true;
    }

    let reads = signals::operand_reads(cpu.decode.opcode);
    if reads.rs1 && cpu.decode.rs1 != NO_REG {
        cpu.decode.rs1_value = cpu.regs.read(cpu.decode.rs1 as usize);
    }
    if reads.rs2 && cpu.decode.rs2 != NO_REG {
        cpu.decode.rs2_value = cpu.regs.read(cpu.decode.rs2 as usize);
    }
    if reads.rs3 && cpu.decode.rs3 != NO_REG {
        cpu.decode.rs3_value = cpu.regs.read(cpu.decode.rs3 as usize);
    }

    cpu.execute = cpu.decode;
    cpu.decode.invalidate();
    Ok(())
}
