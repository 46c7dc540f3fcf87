//! Core types and definitions for the OUTRIDER microverse.
//!
//! This crate defines the vocabulary shared across all other crates:
//! rotation math, entity components, ship templates, the commander record,
//! pilot input, events and constants. It has no dependency on any ECS or
//! runtime framework.

pub mod commander;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod rotation;
pub mod state;
pub mod template;
pub mod types;

#[cfg(test)]
mod tests;
