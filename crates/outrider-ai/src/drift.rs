//! Inert drift: canisters, splinters and asteroids.
//!
//! No decision logic — a drift vector, tumble rates and a speed are chosen
//! once at spawn and applied unchanged every tick.

use glam::DVec3;
use rand::Rng;

/// Tumble rate bound (radians/tick).
const TUMBLE_BOUND: f64 = 0.01;

/// Top drift speed (units/s).
const DRIFT_SPEED_MAX: f64 = 15.0;

#[derive(Debug, Clone, Copy)]
pub struct DriftAi {
    /// Drift direction (not necessarily unit length, as thrown).
    pub vec: DVec3,
    pub roll: f64,
    pub pitch: f64,
    /// Drift speed (units/s).
    pub speed: f64,
}

impl DriftAi {
    /// Roll the one-shot drift parameters at spawn time.
    pub fn spawn(rng: &mut impl Rng) -> Self {
        DriftAi {
            vec: DVec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            ),
            roll: rng.gen_range(-TUMBLE_BOUND..TUMBLE_BOUND),
            pitch: rng.gen_range(-TUMBLE_BOUND..TUMBLE_BOUND),
            speed: rng.gen_range(0.0..DRIFT_SPEED_MAX),
        }
    }

    /// Scene-space displacement per second.
    pub fn velocity(&self) -> DVec3 {
        self.vec * self.speed
    }
}
