//! Program and data-memory loaders.
//!
//! Two independent, plain-text external-collaborator formats: one
//! instruction per line for the program, one comma-separated list of
//! signed integers for the initial data-memory image.

use crate::common::SimError;
use crate::core::arch::DataMemory;
use crate::isa::{Instruction, Opcode, NO_REG};
use std::fs;

/// The operand slots a mnemonic's comma-separated fields fill, in order.
#[derive(Clone, Copy)]
enum Field {
    Rd,
    Rs1,
    Rs2,
    Rs3,
    Imm,
}

fn operand_layout(opcode: Opcode) -> &'static [Field] {
    use Field::*;
    match opcode {
        Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::And | Opcode::Or
        | Opcode::Xor => &[Rd, Rs1, Rs2],
        Opcode::Addl | Opcode::Subl | Opcode::Load => &[Rd, Rs1, Imm],
        Opcode::Ldr => &[Rd, Rs1, Rs2],
        Opcode::Store => &[Rs1, Rs2, Imm],
        Opcode::Str => &[Rs1, Rs2, Rs3],
        Opcode::Movc => &[Rd, Imm],
        Opcode::Cmp => &[Rs1, Rs2],
        Opcode::Cml => &[Rs1, Imm],
        Opcode::Bz | Opcode::Bnz | Opcode::Bp | Opcode::Bn | Opcode::Bnp => &[Imm],
        Opcode::Jump => &[Rs1, Imm],
        Opcode::Jalr => &[Rd, Rs1, Imm],
        Opcode::Nop | Opcode::Halt | Opcode::Div => &[],
    }
}

/// Parses a single operand token: `R<n>` / `r<n>` is a register index,
/// everything else (with an optional leading `#`) is a signed immediate.
fn parse_operand(token: &str, line_no: usize, line: &str) -> Result<(Option<i32>, i64), SimError> {
    let token = token.trim();
    if let Some(rest) = token.strip_prefix(['R', 'r']) {
        let idx: i32 = rest.parse().map_err(|_| SimError::MalformedProgram {
            line: line_no,
            text: line.to_string(),
        })?;
        Ok((Some(idx), 0))
    } else {
        let digits = token.strip_prefix('#').unwrap_or(token);
        let imm: i64 = digits.parse().map_err(|_| SimError::MalformedProgram {
            line: line_no,
            text: line.to_string(),
        })?;
        Ok((None, imm))
    }
}

/// Parses a text program, one instruction per line as
/// `MNEMONIC,operand,operand,...`, into a sequence of [`Instruction`]s
/// addressed by `code_memory_index = (pc - 4000) / 4`. Blank lines and
/// lines starting with `#` are skipped.
pub fn load_program(path: &str) -> Result<Vec<Instruction>, SimError> {
    let text = fs::read_to_string(path).map_err(|e| SimError::Io {
        path: path.to_string(),
        source: e,
    })?;

    let mut program = Vec::new();
    for (i, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split(',').map(str::trim);
        let mnemonic = fields.next().ok_or_else(|| SimError::MalformedProgram {
            line: i + 1,
            text: line.to_string(),
        })?;
        let opcode = Opcode::parse(mnemonic).ok_or_else(|| SimError::MalformedProgram {
            line: i + 1,
            text: line.to_string(),
        })?;

        let mut instr = Instruction::new(opcode);
        for slot in operand_layout(opcode) {
            let token = fields.next().ok_or_else(|| SimError::MalformedProgram {
                line: i + 1,
                text: line.to_string(),
            })?;
            let (reg, imm) = parse_operand(token, i + 1, line)?;
            instr = match slot {
                Field::Rd => instr.with_rd(reg.unwrap_or(NO_REG)),
                Field::Rs1 => instr.with_rs1(reg.unwrap_or(NO_REG)),
                Field::Rs2 => instr.with_rs2(reg.unwrap_or(NO_REG)),
                Field::Rs3 => instr.with_rs3(reg.unwrap_or(NO_REG)),
                Field::Imm => instr.with_imm(reg.map(i64::from).unwrap_or(imm)),
            };
        }

        program.push(instr);
    }

    Ok(program)
}

/// Reads a comma-separated list of signed integers from `path`,
/// initializing `data_memory[0]`, `data_memory[1]`, ... in order,
/// stopping at end of input or once `data_memory` is full.
pub fn load_data_memory(path: &str, data_memory: &mut DataMemory) -> Result<(), SimError> {
    let text = fs::read_to_string(path).map_err(|e| SimError::Io {
        path: path.to_string(),
        source: e,
    })?;

    for (i, token) in text.split(',').map(str::trim).filter(|t| !t.is_empty()).enumerate() {
        if i >= data_memory.len() {
            break;
        }
        let value: i64 = token.parse().map_err(|_| SimError::MalformedProgram {
            line: 1,
            text: token.to_string(),
        })?;
        data_memory.write(i as i64, value);
    }

    Ok(())
}
