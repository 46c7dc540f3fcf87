//! Behavior drivers for OUTRIDER.
//!
//! Implements the combat state machine, homing-missile guidance and inert
//! debris drift as pure functions over plain data. No ECS dependency —
//! the sim crate owns scheduling and applies the outputs.

pub mod combat;
pub mod drift;
pub mod missile;

pub use outrider_core as core;

#[cfg(test)]
mod tests;
