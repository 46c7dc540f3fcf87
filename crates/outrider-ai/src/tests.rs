//! Tests for the combat FSM, missile guidance and drift behavior.

use glam::DVec3;
use rand::rngs::mock::StepRng;
use rand::SeedableRng;

use outrider_core::constants::*;

use crate::combat::{decide, steer, AimCall, CombatAi, CombatState, DecisionContext, ShotKind, SteerContext};
use crate::drift::DriftAi;
use crate::missile::{guide, MissileContext, MissileOutcome};

/// StepRng yielding a fixed `x` for every `gen::<f64>()` draw.
fn fixed_draw(x: f64) -> StepRng {
    StepRng::new((x * u64::MAX as f64) as u64, 0)
}

fn calm_ctx() -> DecisionContext {
    DecisionContext {
        missiles: 0,
        angry: false,
        energy_frac: 1.0,
    }
}

fn pilot() -> CombatAi {
    CombatAi::new(360.0, 0.1)
}

// ---- Combat decisions ----

#[test]
fn test_seek_to_evade_at_threshold() {
    let mut ai = pilot();
    ai.last_range = AI_EVADE_RANGE;
    let mut rng = fixed_draw(0.5);
    decide(&mut ai, &calm_ctx(), &mut rng);
    assert_eq!(ai.state, CombatState::Evade);
    assert!((ai.speed - ai.max_speed * 0.8).abs() < 1e-12);
}

#[test]
fn test_seek_holds_above_threshold() {
    let mut ai = pilot();
    ai.last_range = AI_EVADE_RANGE + 1.0;
    let mut rng = fixed_draw(0.5);
    decide(&mut ai, &calm_ctx(), &mut rng);
    assert_eq!(ai.state, CombatState::Seek);
}

#[test]
fn test_evade_back_to_seek_beyond_pursue_range() {
    let mut ai = pilot();
    ai.state = CombatState::Evade;
    ai.last_range = AI_PURSUE_RANGE;
    let mut rng = fixed_draw(0.5);
    decide(&mut ai, &calm_ctx(), &mut rng);
    assert_eq!(ai.state, CombatState::Seek);
    assert!((ai.speed - ai.max_speed * 0.9).abs() < 1e-12);
}

#[test]
fn test_high_tail_sends_seeker_wandering() {
    let mut ai = pilot();
    let mut rng = fixed_draw(0.999);
    let d = decide(&mut ai, &calm_ctx(), &mut rng);
    assert_eq!(ai.state, CombatState::Wander);
    assert!((ai.speed - ai.max_speed).abs() < 1e-12);
    // Wandering thinks on the stretched cadence.
    assert_eq!(d.next_period_secs, WANDER_DECISION_PERIOD_SECS);
}

#[test]
fn test_forced_wander_after_state_timeout() {
    let mut ai = pilot();
    // Mid-range draw: no probabilistic transition ever fires.
    for _ in 0..=AI_STATE_TIMEOUT_TICKS {
        let mut rng = fixed_draw(0.5);
        decide(&mut ai, &calm_ctx(), &mut rng);
    }
    assert_eq!(ai.state, CombatState::Wander);
    assert!((ai.speed - ai.max_speed * 0.85).abs() < 1e-12);
}

#[test]
fn test_roll_bias_tails_have_opposite_signs() {
    // Evade far inside pursue range: no transition consumes the draw.
    let mut ai = pilot();
    ai.state = CombatState::Evade;
    ai.last_range = 1000.0;

    let mut rng = fixed_draw(0.95);
    decide(&mut ai, &calm_ctx(), &mut rng);
    assert_eq!(ai.roll_bias, AI_ROLL_BIAS);

    let mut rng = fixed_draw(0.05);
    decide(&mut ai, &calm_ctx(), &mut rng);
    assert_eq!(ai.roll_bias, -AI_ROLL_BIAS);
}

#[test]
fn test_fire_calls_scale_with_alignment() {
    let mut ai = pilot();
    ai.last_nose_dot = 0.98;
    ai.last_range = 20_000.0;
    let mut rng = fixed_draw(0.15);
    let d = decide(&mut ai, &calm_ctx(), &mut rng);
    assert_eq!(d.aim, Some(AimCall::CanHit));
    assert_eq!(d.fire, Some(ShotKind::Tracking));

    // Loose alignment, draw between the two probabilities: call but no shot.
    let mut ai = pilot();
    ai.last_nose_dot = 0.96;
    ai.last_range = 20_000.0;
    let mut rng = fixed_draw(0.25);
    let d = decide(&mut ai, &calm_ctx(), &mut rng);
    assert_eq!(d.aim, Some(AimCall::CanShoot));
    assert_eq!(d.fire, None);

    // Aligned but out of range: nothing.
    let mut ai = pilot();
    ai.last_nose_dot = 0.98;
    ai.last_range = AI_TIGHT_RANGE + 1.0;
    let mut rng = fixed_draw(0.15);
    let d = decide(&mut ai, &calm_ctx(), &mut rng);
    assert_eq!(d.aim, None);
    assert_eq!(d.fire, None);
}

#[test]
fn test_missile_launch_eligibility() {
    let eligible = DecisionContext {
        missiles: 5,
        angry: true,
        energy_frac: 0.3,
    };
    let mut ai = pilot();
    let mut rng = fixed_draw(0.05);
    // Second draw (0.05) is under 0.02 * 5 = 0.10.
    let d = decide(&mut ai, &eligible, &mut rng);
    assert!(d.launch_missile);

    // Healthy ship holds its missiles.
    let healthy = DecisionContext {
        energy_frac: 0.9,
        ..eligible
    };
    let mut ai = pilot();
    let mut rng = fixed_draw(0.05);
    assert!(!decide(&mut ai, &healthy, &mut rng).launch_missile);

    // No stock, no launch.
    let empty = DecisionContext {
        missiles: 0,
        ..eligible
    };
    let mut ai = pilot();
    let mut rng = fixed_draw(0.05);
    assert!(!decide(&mut ai, &empty, &mut rng).launch_missile);

    // Not angry, no launch.
    let placid = DecisionContext {
        angry: false,
        ..eligible
    };
    let mut ai = pilot();
    let mut rng = fixed_draw(0.05);
    assert!(!decide(&mut ai, &placid, &mut rng).launch_missile);
}

// ---- Combat steering ----

fn facing(nose: DVec3, side: DVec3, roof: DVec3, pos: DVec3) -> SteerContext {
    SteerContext {
        pos,
        nose,
        side,
        roof,
    }
}

#[test]
fn test_seek_steering_axis_priority() {
    let mut ai = pilot();
    // Nose already on the player (tie on side/roof): pitch nudge only.
    let s = steer(
        &mut ai,
        &facing(-DVec3::Z, DVec3::X, DVec3::Y, DVec3::new(0.0, 0.0, 5000.0)),
    );
    assert_eq!(s.pitch, AI_STEER_STEP);
    assert_eq!(s.roll, 0.0);

    // Player off the side axis: roll.
    let s = steer(
        &mut ai,
        &facing(DVec3::X, -DVec3::Z, DVec3::Y, DVec3::new(0.0, 0.0, 5000.0)),
    );
    assert_eq!(s.roll, AI_STEER_STEP);
    assert_eq!(s.pitch, 0.0);

    // Player off the roof axis: pitch down.
    let s = steer(
        &mut ai,
        &facing(DVec3::X, DVec3::Y, -DVec3::Z, DVec3::new(0.0, 0.0, 5000.0)),
    );
    assert_eq!(s.pitch, -AI_STEER_STEP);
}

#[test]
fn test_evade_pitches_until_reversed() {
    let mut ai = pilot();
    ai.state = CombatState::Evade;
    // Nose still toward the player: keep pulling.
    let s = steer(
        &mut ai,
        &facing(-DVec3::Z, DVec3::X, DVec3::Y, DVec3::new(0.0, 0.0, 3000.0)),
    );
    assert_eq!(s.pitch, AI_EVADE_PITCH);

    // Nose pointed away: settled.
    let s = steer(
        &mut ai,
        &facing(DVec3::Z, DVec3::X, DVec3::Y, DVec3::new(0.0, 0.0, 3000.0)),
    );
    assert_eq!(s.pitch, 0.0);
}

#[test]
fn test_steering_reports_range_and_alignment() {
    let mut ai = pilot();
    let s = steer(
        &mut ai,
        &facing(-DVec3::Z, DVec3::X, DVec3::Y, DVec3::new(0.0, 0.0, 4321.0)),
    );
    assert!(!s.vanish);
    assert!((ai.last_range - 4321.0).abs() < 1e-9);
    assert!((ai.last_nose_dot - 1.0).abs() < 1e-9);
}

#[test]
fn test_vanish_beyond_simulation_radius() {
    let mut ai = pilot();
    let s = steer(
        &mut ai,
        &facing(
            DVec3::Z,
            DVec3::X,
            DVec3::Y,
            DVec3::new(0.0, 0.0, AI_VANISH_RANGE + 1.0),
        ),
    );
    assert!(s.vanish);
    assert_eq!(s.advance, 0.0);
}

// ---- Missile guidance ----

fn missile_ctx(pos: DVec3, target: DVec3) -> MissileContext {
    MissileContext {
        pos,
        nose: DVec3::Z,
        side: DVec3::X,
        roof: DVec3::Y,
        target_pos: target,
        target_alive: true,
    }
}

#[test]
fn test_missile_self_destructs_without_target() {
    let mut ctx = missile_ctx(DVec3::ZERO, DVec3::new(0.0, 0.0, 5000.0));
    ctx.target_alive = false;
    assert_eq!(guide(&ctx).outcome, MissileOutcome::SelfDestruct);
}

#[test]
fn test_missile_proximity_trigger() {
    let ctx = missile_ctx(DVec3::ZERO, DVec3::new(0.0, 0.0, MISSILE_PROXIMITY - 1.0));
    assert_eq!(guide(&ctx).outcome, MissileOutcome::Proximity);

    let ctx = missile_ctx(DVec3::ZERO, DVec3::new(0.0, 0.0, MISSILE_PROXIMITY + 1.0));
    assert_eq!(guide(&ctx).outcome, MissileOutcome::Tracking);
}

#[test]
fn test_missile_speed_follows_alignment() {
    // Dead ahead: full speed.
    let ctx = missile_ctx(DVec3::ZERO, DVec3::new(0.0, 0.0, 10_000.0));
    assert_eq!(guide(&ctx).advance, MISSILE_SPEED_FAST);

    // Off to the side: crawl and turn.
    let ctx = missile_ctx(DVec3::ZERO, DVec3::new(10_000.0, 0.0, 0.0));
    assert_eq!(guide(&ctx).advance, MISSILE_SPEED_SLOW);
}

#[test]
fn test_missile_steering_sign_symmetric() {
    let right = guide(&missile_ctx(DVec3::ZERO, DVec3::new(10_000.0, 0.0, 0.0)));
    let left = guide(&missile_ctx(DVec3::ZERO, DVec3::new(-10_000.0, 0.0, 0.0)));
    assert!(right.roll > 0.0);
    assert!(left.roll < 0.0);
    assert_eq!(right.roll, -left.roll);

    let up = guide(&missile_ctx(DVec3::ZERO, DVec3::new(0.0, 10_000.0, 0.0)));
    let down = guide(&missile_ctx(DVec3::ZERO, DVec3::new(0.0, -10_000.0, 0.0)));
    assert_eq!(up.pitch, -down.pitch);
    assert!(up.pitch < 0.0);
}

// ---- Drift ----

#[test]
fn test_drift_parameters_deterministic_per_seed() {
    let mut a = seeded_rng(7);
    let mut b = seeded_rng(7);
    let da = DriftAi::spawn(&mut a);
    let db = DriftAi::spawn(&mut b);
    assert_eq!(da.vec, db.vec);
    assert_eq!(da.speed, db.speed);
    assert_eq!(da.roll, db.roll);
    assert_eq!(da.pitch, db.pitch);
    assert!(da.roll.abs() <= 0.01 && da.pitch.abs() <= 0.01);
    assert!((0.0..15.0).contains(&da.speed));
    assert_eq!(da.velocity(), da.vec * da.speed);
}

fn seeded_rng(seed: u64) -> impl rand::Rng {
    rand::rngs::StdRng::seed_from_u64(seed)
}
