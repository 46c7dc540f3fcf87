//! Pilot input delivered to the simulation each tick.
//!
//! The core never reads raw devices; the shell normalizes whatever hardware
//! it has into this record.

use serde::{Deserialize, Serialize};

/// Discrete actions reported on the tick they are first pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    Fire,
    ArmMissile,
    LaunchMissile,
    Ecm,
    Jump,
}

/// Normalized stick and throttle state plus newly-pressed buttons.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PilotInput {
    /// Roll axis in `[-1, 1]`.
    pub roll: f64,
    /// Pitch axis in `[-1, 1]`.
    pub pitch: f64,
    /// Throttle in `[0, 1]`.
    pub throttle: f64,
    /// Buttons pressed since the previous tick.
    pub pressed: Vec<Button>,
}

impl PilotInput {
    pub fn pressed(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    /// Clamp axes into range. A missing or garbage reading (NaN/inf)
    /// defaults to the neutral midpoint rather than failing.
    pub fn sanitized(&self) -> PilotInput {
        let axis = |v: f64| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
        let throttle = if self.throttle.is_finite() {
            self.throttle.clamp(0.0, 1.0)
        } else {
            0.0
        };
        PilotInput {
            roll: axis(self.roll),
            pitch: axis(self.pitch),
            throttle,
            pressed: self.pressed.clone(),
        }
    }
}
