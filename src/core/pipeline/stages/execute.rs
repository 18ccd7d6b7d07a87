//! Execute stage.

use crate::core::cpu::{Cpu, INSTRUCTION_SIZE};
use crate::core::pipeline::hazards;
use crate::isa::Opcode;

/// Re-resolves rs1/rs2/rs3 through the forwarding network, then
/// dispatches by opcode: ALU ops, address formation for loads/stores,
/// branch/jump resolution, and condition-code updates.
pub fn execute_stage(cpu: &mut Cpu) {
    if !cpu.execute.valid {
        return;
    }

    cpu.execute.rs1_value = hazards::forward(
        cpu.execute.rs1,
        &cpu.memory1,
        &cpu.memory,
        &cpu.writeback,
        &cpu.data_memory,
        &cpu.regs,
    );
    cpu.execute.rs2_value = hazards::forward(
        cpu.execute.rs2,
        &cpu.memory1,
        &cpu.memory,
        &cpu.writeback,
        &cpu.data_memory,
        &cpu.regs,
    );
    cpu.execute.rs3_value = hazards::forward(
        cpu.execute.rs3,
        &cpu.memory1,
        &cpu.memory,
        &cpu.writeback,
        &cpu.data_memory,
        &cpu.regs,
    );

    let opcode = cpu.execute.opcode;
    let pc = cpu.execute.pc;
    let imm = cpu.execute.imm;
    let rs1v = cpu.execute.rs1_value;
    let rs2v = cpu.execute.rs2_value;
    let rs3v = cpu.execute.rs3_value;

    match opcode {
        Opcode::Add => {
            cpu.execute.result = rs1v.wrapping_add(rs2v);
            cpu.cc.set_from_result(cpu.execute.result);
        }
        Opcode::Sub => {
            cpu.execute.result = rs1v.wrapping_sub(rs2v);
            cpu.cc.set_from_result(cpu.execute.result);
        }
        Opcode::Mul => {
            cpu.execute.result = rs1v.wrapping_mul(rs2v);
            cpu.cc.set_from_result(cpu.execute.result);
        }
        Opcode::And => {
            cpu.execute.result = rs1v & rs2v;
            cpu.cc.set_from_result(cpu.execute.result);
        }
        Opcode::Or => {
            cpu.execute.result = rs1v | rs2v;
            cpu.cc.set_from_result(cpu.execute.result);
        }
        Opcode::Xor => {
            cpu.execute.result = rs1v ^ rs2v;
            cpu.cc.set_from_result(cpu.execute.result);
        }
        Opcode::Addl => {
            cpu.execute.result = rs1v.wrapping_add(imm);
            cpu.cc.set_from_result(cpu.execute.result);
        }
        Opcode::Subl => {
            cpu.execute.result = rs1v.wrapping_sub(imm);
            cpu.cc.set_from_result(cpu.execute.result);
        }
        Opcode::Movc => {
            cpu.execute.result = imm;
            cpu.cc.set_from_result(cpu.execute.result);
        }
        Opcode::Cmp => {
            cpu.cc.z = rs1v == rs2v;
            cpu.cc.n = rs1v < rs2v;
            cpu.cc.p = rs1v > rs2v;
        }
        Opcode::Cml => {
            cpu.cc.z = rs1v == imm;
            cpu.cc.n = rs1v < imm;
            cpu.cc.p = rs1v > imm;
        }
        Opcode::Load => {
            cpu.execute.mem_addr = rs1v.wrapping_add(imm);
        }
        Opcode::Ldr => {
            cpu.execute.mem_addr = rs1v.wrapping_add(rs2v);
        }
        Opcode::Store => {
            cpu.execute.mem_value = rs1v;
            cpu.execute.mem_addr = rs2v.wrapping_add(imm);
        }
        Opcode::Str => {
            cpu.execute.mem_value = rs1v;
            cpu.execute.mem_addr = rs2v.wrapping_add(rs3v);
        }
        Opcode::Bz | Opcode::Bnz | Opcode::Bp | Opcode::Bn | Opcode::Bnp => {
            let taken = match opcode {
                Opcode::Bz => cpu.cc.z,
                Opcode::Bnz => !cpu.cc.z,
                Opcode::Bp => cpu.cc.p,
                Opcode::Bn => cpu.cc.n,
                // BNP: "not positive" — taken when n or z (preserved verbatim).
                Opcode::Bnp => cpu.cc.n || cpu.cc.z,
                _ => unreachable!(),
            };
            if taken {
                cpu.branch_target = pc + imm;
                cpu.branch_pending = true;
                cpu.refetch = true;
                cpu.decode.invalidate();
                cpu.stats.branches_taken += 1;
            } else {
                cpu.stats.branches_not_taken += 1;
            }
        }
        Opcode::Jump => {
            cpu.branch_target = rs1v.wrapping_add(imm);
            cpu.branch_pending = true;
            cpu.decode.invalidate();
        }
        Opcode::Jalr => {
            cpu.execute.result = pc + INSTRUCTION_SIZE;
            cpu.branch_target = rs1v.wrapping_add(imm);
            cpu.branch_pending = true;
            cpu.decode.invalidate();
        }
        Opcode::Nop | Opcode::Halt | Opcode::Div => {}
    }

    cpu.memory1 = cpu.execute;
    cpu.execute.invalidate();
}
