//! Hazard detection and operand forwarding, as pure functions over
//! latch snapshots — no hidden mutation.

use crate::core::arch::{DataMemory, Gpr};
use crate::core::pipeline::latches::StageLatch;
use crate::isa::NO_REG;

/// Scans E, M1, M for a load-class producer whose `rd` feeds one of
/// D's source registers. Any match forces a stall: the data is not
/// ready for forwarding until the producer reaches M1 or later.
pub fn need_stall_load_use(
    decode: &StageLatch,
    execute: &StageLatch,
    mem1: &StageLatch,
    mem: &StageLatch,
) -> bool {
    if !decode.valid {
        return false;
    }
    let sources = [decode.rs1, decode.rs2, decode.rs3];
    [execute, mem1, mem].iter().any(|producer| {
        producer.valid
            && producer.opcode.is_load_class()
            && sources.iter().any(|&r| r != NO_REG && r == producer.rd)
    })
}

/// Resolves the value of source register `r` through the forwarding
/// network: nearest-wins search order M1 → M → WB → register file.
pub fn forward(
    r: i32,
    mem1: &StageLatch,
    mem: &StageLatch,
    writeback: &StageLatch,
    data_memory: &DataMemory,
    regs: &Gpr,
) -> i64 {
    if r == NO_REG {
        return 0;
    }

    for producer in [mem1, mem] {
        if producer.valid && producer.rd == r && producer.opcode.is_result_producing() {
            debug_assert!(!producer.opcode.is_store_class(), "STORE/STR never produce a result");
            return if producer.opcode.is_load_class() {
                data_memory.read(producer.mem_addr)
            } else {
                producer.result
            };
        }
    }

    if writeback.valid && writeback.rd == r && writeback.opcode.is_result_producing() {
        debug_assert!(!writeback.opcode.is_store_class(), "STORE/STR never produce a result");
        return writeback.result;
    }

    regs.read(r as usize)
}
