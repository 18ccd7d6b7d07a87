use super::{Opcode, NO_REG};

/// An immutable, decoded instruction record as produced by the loader.
///
/// Once constructed, an `Instruction` never changes; every pipeline
/// latch carries a reference snapshot of the fields it needs.
#[derive(Clone, Copy, Debug)]
pub struct Instruction {
    pub opcode: Opcode,
    pub rd: i32,
    pub rs1: i32,
    pub rs2: i32,
    pub rs3: i32,
    pub imm: i64,
}

impl Instruction {
    /// Builds an instruction with every register field defaulted to
    /// [`NO_REG`] and `imm = 0`; callers set only the fields their
    /// opcode actually uses.
    pub fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            rd: NO_REG,
            rs1: NO_REG,
            rs2: NO_REG,
            rs3: NO_REG,
            imm: 0,
        }
    }

    pub fn with_rd(mut self, rd: i32) -> Self {
        self.rd = rd;
        self
    }

    pub fn with_rs1(mut self, rs1: i32) -> Self {
        self.rs1 = rs1;
        self
    }

    pub fn with_rs2(mut self, rs2: i32) -> Self {
        self.rs2 = rs2;
        self
    }

    pub fn with_rs3(mut self, rs3: i32) -> Self {
        self.rs3 = rs3;
        self
    }

    pub fn with_imm(mut self, imm: i64) -> Self {
        self.imm = imm;
        self
    }

    /// Display mnemonic for trace lines and disassembly.
    pub fn mnemonic(&self) -> &'static str {
        self.opcode.mnemonic()
    }
}
