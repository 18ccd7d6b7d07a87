//! The six-stage APEX pipeline: latches, hazard/forwarding logic, and
//! the stage functions themselves.

/// Pipeline hazard detection and operand forwarding.
pub mod hazards;

/// The scalar per-stage latch and its bubble convention.
pub mod latches;

/// Decode-time operand-read classification.
pub mod signals;

/// Stage function implementations (fetch, decode, execute, memory1, memory, writeback).
pub mod stages;

pub use latches::StageLatch;
