//! The OUTRIDER microverse orchestrator.
//!
//! Owns the hecs ECS world and the player-centered scene: entity lifecycle,
//! movement, AI activation, collision and damage resolution, the docking
//! and hyperspace state machines, and the background spawn director. All
//! cadences run cooperatively inside one `handle` call per tick.

pub mod engine;
pub mod jump;
pub mod particles;
pub mod pilot;
pub mod ports;
pub mod systems;
pub mod view;
pub mod world_setup;

pub use engine::{Microverse, MicroverseConfig, SceneContext};
pub use outrider_core as core;
