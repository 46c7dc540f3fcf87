//! The behavior component bound to autonomous entities.
//!
//! Behaviors are tagged variants over the pure drivers in `outrider-ai`;
//! variants that track another entity live here rather than in the core
//! crate because they hold `hecs::Entity` handles. Holders must re-check
//! liveness before use — a tracked entity may have died this pass.

use outrider_ai::combat::CombatAi;
use outrider_ai::drift::DriftAi;

/// What a homing missile is locked onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekerTarget {
    /// A live entity in the scene.
    Ship(hecs::Entity),
    /// The player dummy at the origin (enemy-fired missiles).
    Player,
}

/// Per-entity behavior driver, selected at spawn time.
#[derive(Debug, Clone)]
pub enum Pilot {
    /// General combat behavior (pursue / flee / wander).
    Hunter(CombatAi),
    /// Homing missile bound to its target.
    Missile { target: SeekerTarget },
    /// Inert drift (canisters, splinters, asteroids).
    Drifter(DriftAi),
}
