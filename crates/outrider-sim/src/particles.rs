//! Ambient dust and explosion debris.
//!
//! Dust particles give the pilot a sense of motion: they ride the same
//! world rotation and translation as everything else and are recycled to a
//! fresh spot once they drift out of the bounding radius. Debris particles
//! are thrown by explosions with a one-shot drift vector and expire after a
//! fixed number of ticks.

use glam::DVec3;
use rand::Rng;

use outrider_core::constants::{DEBRIS_LIFETIME_TICKS, DT, PARTICLE_RESET_RADIUS};

/// Debris thrown per explosion.
const BURST_COUNT: usize = 12;

/// Debris ejection speed bounds (units/s).
const BURST_SPEED_MIN: f64 = 10.0;
const BURST_SPEED_MAX: f64 = 80.0;

/// One ambient dust particle.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: DVec3,
}

impl Particle {
    /// Fresh particle. Initial seeding spreads particles through the whole
    /// depth range; recycled ones respawn ahead of the player.
    pub fn new(rng: &mut impl Rng, init: bool) -> Self {
        let z = if init {
            rng.gen_range(1.0..PARTICLE_RESET_RADIUS)
        } else {
            rng.gen_range(50.0..PARTICLE_RESET_RADIUS)
        };
        Particle {
            pos: DVec3::new(rng.gen_range(-15.0..15.0), rng.gen_range(-15.0..15.0), z),
        }
    }

    pub fn distance(&self) -> f64 {
        self.pos.length()
    }

    pub fn reset(&mut self, rng: &mut impl Rng) {
        *self = Particle::new(rng, false);
    }
}

/// One piece of explosion debris.
#[derive(Debug, Clone, Copy)]
pub struct DebrisParticle {
    pub pos: DVec3,
    /// Scene-space drift velocity chosen at creation (units/s).
    pub vel: DVec3,
    pub ticks_left: u32,
}

/// Throw a burst of debris from an explosion site.
pub fn spawn_burst(pos: DVec3, rng: &mut impl Rng) -> Vec<DebrisParticle> {
    (0..BURST_COUNT)
        .map(|_| {
            let dir = DVec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let speed = rng.gen_range(BURST_SPEED_MIN..BURST_SPEED_MAX);
            DebrisParticle {
                pos,
                vel: dir * speed,
                ticks_left: DEBRIS_LIFETIME_TICKS,
            }
        })
        .collect()
}

/// Advance debris drift and drop expired pieces.
pub fn update_debris(debris: &mut Vec<DebrisParticle>) {
    for d in debris.iter_mut() {
        d.pos += d.vel * DT;
        d.ticks_left = d.ticks_left.saturating_sub(1);
    }
    debris.retain(|d| d.ticks_left > 0);
}
