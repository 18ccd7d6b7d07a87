//! Fetch stage.

use crate::core::cpu::{Cpu, INSTRUCTION_SIZE, PC_BASE};
use crate::core::pipeline::StageLatch;

/// Reads the instruction at `pc` into the F latch and, unless
/// suppressed by `halt_pending` or `refetch`, advances `pc` and copies
/// F into D.
pub fn fetch_stage(cpu: &mut Cpu) {
    if cpu.halt_pending {
        cpu.fetch.invalidate();
        return;
    }

    let index = (cpu.pc - PC_BASE) / INSTRUCTION_SIZE;
    cpu.fetch = match usize::try_from(index).ok().and_then(|i| cpu.program.get(i)) {
        Some(instr) => StageLatch {
            valid: true,
            pc: cpu.pc,
            opcode: instr.opcode,
            rd: instr.rd,
            rs1: instr.rs1,
            rs2: instr.rs2,
            rs3: instr.rs3,
            imm: instr.imm,
            ..StageLatch::bubble()
        },
        None => StageLatch::bubble(),
    };

    if cpu.refetch {
        cpu.refetch = false;
        return;
    }

    cpu.decode = cpu.fetch;
    cpu.pc += INSTRUCTION_SIZE;
}
