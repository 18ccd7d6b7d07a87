//! Memory2 stage.

use crate::core::cpu::Cpu;
use crate::isa::Opcode;

/// Performs the actual data-memory access for loads and stores, then
/// passes the latch on to writeback.
pub fn memory_stage(cpu: &mut Cpu) {
    if !cpu.memory.valid {
        return;
    }

    match cpu.memory.opcode {
        Opcode::Load | Opcode::Ldr => {
            cpu.memory.result = cpu.data_memory.read(cpu.memory.mem_addr);
        }
        Opcode::Store | Opcode::Str => {
            cpu.data_memory.write(cpu.memory.mem_addr, cpu.memory.mem_value);
        }
        _ => {}
    }

    cpu.writeback = cpu.memory;
    cpu.memory.invalidate();
}
