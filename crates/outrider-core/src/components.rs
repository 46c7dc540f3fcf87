//! Spatial and combat components attached to microverse entities.
//!
//! Components are data with small geometric helpers; orchestration logic
//! lives in the sim crate.

use std::sync::Arc;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::rotation::{normalize, rotate_with, wrap_angle, Quat};
use crate::template::ShipTemplate;

/// Canonical body axes before any rotation.
pub const NOSE_AXIS: DVec3 = DVec3::Z;
pub const SIDE_AXIS: DVec3 = DVec3::X;
pub const ROOF_AXIS: DVec3 = DVec3::Y;

/// Position in scene space. The player sits at the origin looking along +z;
/// everything else moves around them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Position(DVec3::new(x, y, z))
    }

    /// Distance from the player.
    pub fn range(&self) -> f64 {
        self.0.length()
    }
}

/// Dual-quaternion orientation state.
///
/// `q_local` accumulates the entity's own roll/pitch (steering, in its own
/// frame); `q_world` accumulates the frame-to-frame rotation imposed by
/// player maneuvering. The rendered axes are always the canonical axes
/// rotated local-then-world. Conjugates are maintained alongside both
/// quaternions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Orientation {
    /// Accumulated local roll angle, wrapped to `[0, 2π)`.
    pub roll: f64,
    /// Accumulated local pitch angle, wrapped to `[0, 2π)`.
    pub pitch: f64,
    q_local: Quat,
    q_local_inv: Quat,
    q_world: Quat,
    q_world_inv: Quat,
    pub nose: DVec3,
    pub side: DVec3,
    pub roof: DVec3,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new()
    }
}

impl Orientation {
    pub fn new() -> Self {
        Orientation {
            roll: 0.0,
            pitch: 0.0,
            q_local: Quat::IDENTITY,
            q_local_inv: Quat::IDENTITY,
            q_world: Quat::IDENTITY,
            q_world_inv: Quat::IDENTITY,
            nose: NOSE_AXIS,
            side: SIDE_AXIS,
            roof: ROOF_AXIS,
        }
    }

    /// Apply an increment of the entity's own roll and pitch.
    pub fn local_roll_pitch(&mut self, roll: f64, pitch: f64) {
        self.roll = wrap_angle(self.roll + roll);
        self.pitch = wrap_angle(self.pitch + pitch);
        let q_roll = Quat::from_axis_angle(NOSE_AXIS, self.roll);
        let q_pitch = Quat::from_axis_angle(SIDE_AXIS, self.pitch);
        self.q_local = q_pitch * q_roll;
        self.q_local_inv = self.q_local.conjugate();
        self.refresh_axes();
    }

    /// Compose one frame of player-imposed world rotation.
    pub fn world_roll_pitch(&mut self, roll: f64, pitch: f64) {
        let q_roll = Quat::from_axis_angle(NOSE_AXIS, roll);
        let q_pitch = Quat::from_axis_angle(SIDE_AXIS, pitch);
        self.q_world = ((q_pitch * q_roll) * self.q_world).renormalized();
        self.q_world_inv = self.q_world.conjugate();
        self.refresh_axes();
    }

    /// Rotate a body-frame vector into scene space (local, then world).
    pub fn rotate(&self, p: DVec3) -> DVec3 {
        let local = rotate_with(self.q_local, self.q_local_inv, p);
        rotate_with(self.q_world, self.q_world_inv, local)
    }

    /// Body-frame point to scene space, including translation.
    pub fn transform(&self, p: DVec3, pos: DVec3) -> DVec3 {
        self.rotate(p) + pos
    }

    fn refresh_axes(&mut self) {
        self.nose = normalize(self.rotate(NOSE_AXIS));
        self.side = normalize(self.rotate(SIDE_AXIS));
        self.roof = normalize(self.rotate(ROOF_AXIS));
    }
}

/// Mutable combat state of a ship-like entity, next to its immutable
/// template.
#[derive(Debug, Clone)]
pub struct Vessel {
    pub template: Arc<ShipTemplate>,
    /// Current energy; regenerates toward `template.max_energy`.
    pub energy: f64,
    /// Remaining missile rounds.
    pub missiles: u8,
    /// Hostile toward the player.
    pub angry: bool,
    /// Shot-animation countdown for the renderer.
    pub shot_ticks: u8,
    /// Logical liveness; cleared by die/vanish ahead of the despawn sweep.
    pub alive: bool,
}

impl Vessel {
    pub fn new(template: Arc<ShipTemplate>) -> Self {
        Vessel {
            energy: template.max_energy,
            missiles: template.missiles,
            template,
            angry: false,
            shot_ticks: 0,
            alive: true,
        }
    }

    pub fn energy_frac(&self) -> f64 {
        if self.template.max_energy > 0.0 {
            self.energy / self.template.max_energy
        } else {
            0.0
        }
    }

    /// Collision predicate: touching once the gap between hulls closes.
    pub fn collides(&self, distance: f64, other_radius: f64) -> bool {
        distance - other_radius - self.template.target_radius <= 0.0
    }
}

/// A planet or sun: no template, no AI, just a visual diameter. Takes part
/// in world rotation and the mass-lock distance query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Celestial {
    pub diameter: f64,
}
