//! Homing-missile guidance: a single pursue state.
//!
//! The missile runs fast once its nose is on the target and slow while
//! still turning; steering nudges whichever axis is most misaligned, with
//! the nudge sign following the deviation. The caller resolves what the
//! outcome means (enemy missiles pursue a fixed dummy standing in for the
//! player at the origin).

use glam::DVec3;

use outrider_core::constants::*;
use outrider_core::rotation::normalize;

/// Geometry and target facts for one guidance tick.
#[derive(Debug, Clone, Copy)]
pub struct MissileContext {
    pub pos: DVec3,
    pub nose: DVec3,
    pub side: DVec3,
    pub roof: DVec3,
    pub target_pos: DVec3,
    pub target_alive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissileOutcome {
    /// Still chasing.
    Tracking,
    /// Target gone — detonate harmlessly.
    SelfDestruct,
    /// Inside the proximity radius — resolve the hit.
    Proximity,
}

/// One guidance tick of output.
#[derive(Debug, Clone, Copy)]
pub struct MissileUpdate {
    pub roll: f64,
    pub pitch: f64,
    /// Forward advance speed (units/s).
    pub advance: f64,
    pub outcome: MissileOutcome,
}

/// Evaluate guidance for one tick.
pub fn guide(ctx: &MissileContext) -> MissileUpdate {
    if !ctx.target_alive {
        return MissileUpdate {
            roll: 0.0,
            pitch: 0.0,
            advance: 0.0,
            outcome: MissileOutcome::SelfDestruct,
        };
    }

    let to_target = ctx.target_pos - ctx.pos;
    let range = to_target.length();
    if range <= MISSILE_PROXIMITY {
        return MissileUpdate {
            roll: 0.0,
            pitch: 0.0,
            advance: 0.0,
            outcome: MissileOutcome::Proximity,
        };
    }

    let hvec = normalize(to_target);
    let dn = ctx.nose.dot(hvec);
    let ds = ctx.side.dot(hvec);
    let dr = ctx.roof.dot(hvec);

    let advance = if dn > MISSILE_ALIGN_DOT {
        MISSILE_SPEED_FAST
    } else {
        MISSILE_SPEED_SLOW
    };

    // Nudge the most-misaligned axis; forward deviation competes with the
    // lateral dots so a target astern still forces a hard turn.
    let forward_dev = 1.0 - dn;
    let mut roll = 0.0;
    let mut pitch = 0.0;
    if ds.abs() >= dr.abs() && ds.abs() >= forward_dev {
        roll = MISSILE_NUDGE * ds.signum();
    } else if dr.abs() >= forward_dev {
        pitch = -MISSILE_NUDGE * dr.signum();
    } else {
        pitch = if dr >= 0.0 { -MISSILE_NUDGE } else { MISSILE_NUDGE };
    }

    MissileUpdate {
        roll,
        pitch,
        advance,
        outcome: MissileOutcome::Tracking,
    }
}
