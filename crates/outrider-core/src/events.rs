//! Events emitted by the simulation for audio feedback and supervision.

use serde::{Deserialize, Serialize};

/// Fire-and-forget audio cues. The orchestrator queues these; the shell
/// drains the queue each tick and never reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    /// Laser or missile release.
    Shot,
    /// Laser strike on a hull.
    Hit,
    Explosion,
    /// Hyperspace ramp engaging.
    Jump,
    /// Successful dock.
    Dock,
    /// ECM burst (either side's).
    Ecm,
}

/// Which supervised activity a fault came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultSource {
    Behavior,
    JumpSequence,
    SpawnDirector,
}

/// A supervised task failure, routed to the orchestrator's fault queue
/// instead of unwinding through the tick. Non-fatal faults drop the
/// offending entity and continue; fatal ones abort their sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fault {
    pub source: FaultSource,
    pub fatal: bool,
    pub message: String,
}
