//! Decode-time operand classification.
//!
//! APEX's operand-read shape is fully determined by opcode alone, so a
//! single classification function covers it rather than a struct of
//! signals threaded through every stage.

use crate::isa::Opcode;

/// Which of rs1/rs2/rs3 a given opcode reads at decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OperandReads {
    pub rs1: bool,
    pub rs2: bool,
    pub rs3: bool,
}

/// Classifies the register-read shape of an opcode.
pub fn operand_reads(opcode: Opcode) -> OperandReads {
    use Opcode::*;
    match opcode {
        Add | Sub | Mul | And | Or | Xor | Store | Ldr | Cmp => OperandReads {
            rs1: true,
            rs2: true,
            rs3: false,
        },
        Addl | Subl | Load | Jump | Jalr | Cml => OperandReads {
            rs1: true,
            rs2: false,
            rs3: false,
        },
        Str => OperandReads {
            rs1: true,
            rs2: true,
            rs3: true,
        },
        Movc | Bz | Bnz | Bp | Bn | Bnp | Nop | Halt | Div => OperandReads::default(),
    }
}
