//! Simulator error taxonomy.
//!
//! A single closed enum, propagated with `Result` and formatted with a
//! hand-written `Display` impl rather than pulled in from an error crate,
//! matching the plain-enum convention the rest of the pipeline uses for
//! stage results.

use std::fmt;

/// Errors that can stop the simulator, either before the clock starts
/// (initialization) or mid-run (a malformed program).
#[derive(Debug)]
pub enum SimError {
    /// The program or data-memory file could not be read.
    Io { path: String, source: std::io::Error },

    /// A program line did not parse as a recognized instruction.
    MalformedProgram { line: usize, text: String },

    /// Decode encountered an opcode outside the recognized set.
    ///
    /// `Opcode` is a closed enum validated once at load time, so this
    /// can't actually be raised by decode today; it's kept as a fatal
    /// assertion in case that invariant is ever loosened (e.g. a binary
    /// program format that skips the loader's validation).
    UnknownOpcode { pc: i64 },

    /// The TOML configuration file failed to parse.
    Config { message: String },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Io { path, source } => write!(f, "could not read '{path}': {source}"),
            SimError::MalformedProgram { line, text } => {
                write!(f, "malformed instruction at line {line}: '{text}'")
            }
            SimError::UnknownOpcode { pc } => write!(f, "unknown opcode at pc({pc})"),
            SimError::Config { message } => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl std::error::Error for SimError {}
