//! Program/data loaders and the clock-driver loop.

/// Program text and data-memory image loaders.
pub mod loader;

/// The `StopPolicy`-driven cycle loop shared by the cycle-budget and
/// single-step front ends.
pub mod driver;
