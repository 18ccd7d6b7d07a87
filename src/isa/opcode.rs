//! APEX opcode set.

/// The closed set of opcodes recognized by the APEX pipeline.
///
/// Modeled as a tagged variant rather than a raw integer so that stage
/// dispatch is an exhaustive match instead of scattered classification
/// checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opcode {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Xor,
    Addl,
    Subl,
    Load,
    Ldr,
    Store,
    Str,
    Movc,
    Cmp,
    Cml,
    Bz,
    Bnz,
    Bp,
    Bn,
    Bnp,
    Jump,
    Jalr,
    Nop,
    Halt,
}

impl Opcode {
    /// Parses a mnemonic as it appears in a program source line.
    ///
    /// Returns `None` for anything not in the recognized set; the loader
    /// turns that into an initialization failure and decode never sees
    /// an unrecognized opcode reach a latch.
    pub fn parse(mnemonic: &str) -> Option<Self> {
        use Opcode::*;
        Some(match mnemonic.to_ascii_uppercase().as_str() {
            "ADD" => Add,
            "SUB" => Sub,
            "MUL" => Mul,
            "DIV" => Div,
            "AND" => And,
            "OR" => Or,
            "XOR" => Xor,
            "ADDL" => Addl,
            "SUBL" => Subl,
            "LOAD" => Load,
            "LDR" => Ldr,
            "STORE" => Store,
            "STR" => Str,
            "MOVC" => Movc,
            "CMP" => Cmp,
            "CML" => Cml,
            "BZ" => Bz,
            "BNZ" => Bnz,
            "BP" => Bp,
            "BN" => Bn,
            "BNP" => Bnp,
            "JUMP" => Jump,
            "JALR" => Jalr,
            "NOP" => Nop,
            "HALT" => Halt,
            _ => return None,
        })
    }

    /// Display mnemonic, used by the trace printer and the register/state dump.
    pub fn mnemonic(self) -> &'static str {
        use Opcode::*;
        match self {
            Add => "ADD",
            Sub => "SUB",
            Mul => "MUL",
            Div => "DIV",
            And => "AND",
            Or => "OR",
            Xor => "XOR",
            Addl => "ADDL",
            Subl => "SUBL",
            Load => "LOAD",
            Ldr => "LDR",
            Store => "STORE",
            Str => "STR",
            Movc => "MOVC",
            Cmp => "CMP",
            Cml => "CML",
            Bz => "BZ",
            Bnz => "BNZ",
            Bp => "BP",
            Bn => "BN",
            Bnp => "BNP",
            Jump => "JUMP",
            Jalr => "JALR",
            Nop => "NOP",
            Halt => "HALT",
        }
    }

    /// True for LOAD/LDR — the only producer classes the decode-stage
    /// hazard scan treats as requiring a stall.
    pub fn is_load_class(self) -> bool {
        matches!(self, Opcode::Load | Opcode::Ldr)
    }

    /// True for STORE/STR — these read rs1/rs2(/rs3) but never write a
    /// register and are therefore never forwarding producers.
    pub fn is_store_class(self) -> bool {
        matches!(self, Opcode::Store | Opcode::Str)
    }

    /// True for the five conditional branches.
    pub fn is_branch(self) -> bool {
        matches!(
            self,
            Opcode::Bz | Opcode::Bnz | Opcode::Bp | Opcode::Bn | Opcode::Bnp
        )
    }

    /// Opcodes that write `rd` with a value computed in `result` and are
    /// therefore eligible both as a writeback target and as a forwarding
    /// source from M1/M/WB. `DIV` is deliberately excluded: it never
    /// reads operands or produces a result in this pipeline.
    pub fn is_result_producing(self) -> bool {
        matches!(
            self,
            Opcode::Add
                | Opcode::Sub
                | Opcode::Mul
                | Opcode::And
                | Opcode::Or
                | Opcode::Xor
                | Opcode::Addl
                | Opcode::Subl
                | Opcode::Load
                | Opcode::Ldr
                | Opcode::Movc
                | Opcode::Jalr
        )
    }
}
