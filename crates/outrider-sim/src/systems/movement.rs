//! World motion: the player never moves — everything else does.
//!
//! Player maneuvering becomes a uniform rotation of every position and
//! world orientation about the origin; player speed becomes a uniform
//! backward translation. Ambient particles ride along and recycle when
//! they leave the bounding radius.

use glam::DVec3;
use rand_chacha::ChaCha8Rng;

use hecs::World;

use outrider_core::components::{Orientation, Position, NOSE_AXIS, SIDE_AXIS};
use outrider_core::constants::PARTICLE_RESET_RADIUS;
use outrider_core::rotation::{rotate_with, Quat};

use crate::particles::{DebrisParticle, Particle};

/// Rotate the whole scene by one frame of player roll/pitch.
pub fn apply_world_rotation(
    world: &mut World,
    particles: &mut [Particle],
    debris: &mut [DebrisParticle],
    roll: f64,
    pitch: f64,
) {
    if roll == 0.0 && pitch == 0.0 {
        return;
    }

    let q = Quat::from_axis_angle(SIDE_AXIS, pitch) * Quat::from_axis_angle(NOSE_AXIS, roll);
    let q_inv = q.conjugate();

    for (_entity, (pos, orientation)) in world.query_mut::<(&mut Position, &mut Orientation)>() {
        pos.0 = rotate_with(q, q_inv, pos.0);
        orientation.world_roll_pitch(roll, pitch);
    }
    for p in particles.iter_mut() {
        p.pos = rotate_with(q, q_inv, p.pos);
    }
    for d in debris.iter_mut() {
        d.pos = rotate_with(q, q_inv, d.pos);
        d.vel = rotate_with(q, q_inv, d.vel);
    }
}

/// Translate the whole scene backward by the player's forward motion.
pub fn translate_scene(
    world: &mut World,
    particles: &mut [Particle],
    debris: &mut [DebrisParticle],
    dz: f64,
) {
    if dz == 0.0 {
        return;
    }
    let dp = DVec3::new(0.0, 0.0, -dz);
    for (_entity, pos) in world.query_mut::<&mut Position>() {
        pos.0 += dp;
    }
    for p in particles.iter_mut() {
        p.pos += dp;
    }
    for d in debris.iter_mut() {
        d.pos += dp;
    }
}

/// Recycle ambient particles that drifted out of the bounding radius.
pub fn recycle_particles(particles: &mut [Particle], rng: &mut ChaCha8Rng) {
    for p in particles.iter_mut() {
        if p.distance() > PARTICLE_RESET_RADIUS {
            p.reset(rng);
        }
    }
}
