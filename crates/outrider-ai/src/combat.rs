//! General combat behavior: a three-state machine over pursue / retreat /
//! random drift, driven on two cadences.
//!
//! `steer` runs every physics tick and turns the current state into a
//! roll/pitch bias and forward advance. `decide` runs at the slower decision
//! cadence: it re-evaluates state transitions, rolls the weapon dice and
//! reports when the next decision is due. Both are pure with respect to the
//! world — the caller supplies geometry and applies the outputs.

use glam::DVec3;
use rand::Rng;

use outrider_core::constants::*;
use outrider_core::rotation::normalize;

/// Movement strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatState {
    /// Close on the player.
    Seek,
    /// Break off and open distance.
    Evade,
    /// Random drift.
    Wander,
}

/// Per-entity combat-pilot state.
#[derive(Debug, Clone)]
pub struct CombatAi {
    pub state: CombatState,
    /// Speed envelope ceiling (half the hull's rated top speed).
    pub max_speed: f64,
    /// Current commanded speed (units/s).
    pub speed: f64,
    /// Roll bias from the last decision (radians/tick).
    pub roll_bias: f64,
    /// Pitch bias used while wandering (radians/tick).
    pub wander_pitch: f64,
    /// Decision ticks spent in the current state.
    pub ticks_in_state: u32,
    /// Elapsed-seconds deadline of the next decision.
    pub next_decision_secs: f64,
    /// Range to the player observed by the latest steering pass.
    pub last_range: f64,
    /// Nose alignment with the player direction from the latest steering
    /// pass.
    pub last_nose_dot: f64,
}

impl CombatAi {
    /// New pilot for a hull with the given rated top speed. `first_decision`
    /// staggers the decision phase so pilots don't all think on the same
    /// tick.
    pub fn new(hull_top_speed: f64, first_decision_secs: f64) -> Self {
        let max_speed = hull_top_speed * 0.5;
        CombatAi {
            state: CombatState::Seek,
            max_speed,
            speed: max_speed * 0.5,
            roll_bias: 0.0,
            wander_pitch: 0.0,
            ticks_in_state: 0,
            next_decision_secs: first_decision_secs,
            last_range: 10_000.0,
            last_nose_dot: 0.0,
        }
    }

    fn enter(&mut self, state: CombatState, speed_factor: f64) {
        self.state = state;
        self.speed = self.max_speed * speed_factor;
        self.ticks_in_state = 0;
    }
}

/// Geometry the steering pass needs: scene-space position and body axes.
#[derive(Debug, Clone, Copy)]
pub struct SteerContext {
    pub pos: DVec3,
    pub nose: DVec3,
    pub side: DVec3,
    pub roof: DVec3,
}

/// One tick of steering output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Steering {
    /// Local roll to apply this tick (radians).
    pub roll: f64,
    /// Local pitch to apply this tick (radians).
    pub pitch: f64,
    /// Forward advance speed (units/s).
    pub advance: f64,
    /// The ship has left the simulation radius and should vanish.
    pub vanish: bool,
}

/// Per-tick steering: apply the current bias and state policy.
pub fn steer(ai: &mut CombatAi, ctx: &SteerContext) -> Steering {
    let range = ctx.pos.length();
    ai.last_range = range;
    if range > AI_VANISH_RANGE {
        return Steering {
            vanish: true,
            ..Default::default()
        };
    }

    // Unit vector from the ship toward the player at the origin.
    let hvec = normalize(-ctx.pos);
    let dn = ctx.nose.dot(hvec);
    let ds = ctx.side.dot(hvec);
    let dr = ctx.roof.dot(hvec);
    ai.last_nose_dot = dn;

    let mut roll = ai.roll_bias;
    let mut pitch = 0.0;

    match ai.state {
        CombatState::Seek => {
            // Bias whichever axis is furthest off the player direction;
            // ties resolve nose over side over roof.
            if dn >= ds && dn >= dr {
                pitch = if dr > 0.0 { -AI_STEER_STEP } else { AI_STEER_STEP };
            } else if ds >= dr {
                roll = AI_STEER_STEP;
            } else {
                pitch = -AI_STEER_STEP;
            }
        }
        CombatState::Evade => {
            if dn > -0.5 {
                pitch = AI_EVADE_PITCH;
            }
        }
        CombatState::Wander => {
            pitch = ai.wander_pitch;
        }
    }

    Steering {
        roll,
        pitch,
        advance: ai.speed,
        vanish: false,
    }
}

/// Combat facts the decision pass needs beyond the pilot's own state.
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext {
    pub missiles: u8,
    pub angry: bool,
    /// Own energy as a fraction of maximum.
    pub energy_frac: f64,
}

/// How well the ship is lined up on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AimCall {
    /// Tight alignment — a tracking shot is on.
    CanHit,
    /// Loose alignment — a snap shot is on.
    CanShoot,
}

/// What kind of shot the pilot takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotKind {
    /// Fired from tight alignment; hits harder.
    Tracking,
    Snap,
}

/// Output of one decision tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decision {
    pub aim: Option<AimCall>,
    pub fire: Option<ShotKind>,
    pub launch_missile: bool,
    /// Seconds until the next decision is due.
    pub next_period_secs: f64,
}

/// One decision tick: state transitions, bias re-roll, weapon dice.
pub fn decide(ai: &mut CombatAi, ctx: &DecisionContext, rng: &mut impl Rng) -> Decision {
    let x: f64 = rng.gen();

    // Opposite-sign roll bias on the two tails of the draw.
    ai.roll_bias = if x > 0.9 {
        AI_ROLL_BIAS
    } else if x < 0.1 {
        -AI_ROLL_BIAS
    } else {
        0.0
    };

    if x > AI_WANDER_TRIGGER && ai.state == CombatState::Seek {
        ai.enter(CombatState::Wander, 1.0);
    } else if ai.state == CombatState::Wander && x < AI_WANDER_EXIT {
        ai.enter(CombatState::Seek, 0.7);
    } else if ai.state == CombatState::Evade && ai.last_range >= AI_PURSUE_RANGE {
        ai.enter(CombatState::Seek, 0.9);
    } else if ai.state == CombatState::Seek && ai.last_range <= AI_EVADE_RANGE {
        ai.enter(CombatState::Evade, 0.8);
    }

    ai.ticks_in_state += 1;
    if ai.ticks_in_state > AI_STATE_TIMEOUT_TICKS {
        ai.enter(CombatState::Wander, 0.85);
    }

    let next_period_secs = if ai.state == CombatState::Wander {
        ai.roll_bias = rng.gen_range(-AI_WANDER_BIAS..AI_WANDER_BIAS);
        ai.wander_pitch = rng.gen_range(-AI_WANDER_BIAS..AI_WANDER_BIAS);
        WANDER_DECISION_PERIOD_SECS
    } else {
        DECISION_PERIOD_SECS
    };

    let mut aim = None;
    let mut fire = None;
    if ai.last_nose_dot > AI_AIM_TIGHT && ai.last_range < AI_TIGHT_RANGE {
        aim = Some(AimCall::CanHit);
        if x < AI_FIRE_PROB_TIGHT {
            fire = Some(ShotKind::Tracking);
        }
    } else if ai.last_nose_dot > AI_AIM_LOOSE && ai.last_range < AI_LOOSE_RANGE {
        aim = Some(AimCall::CanShoot);
        if x < AI_FIRE_PROB_LOOSE {
            fire = Some(ShotKind::Snap);
        }
    }

    // Missile eligibility is evaluated independently of the shot dice.
    let launch_missile = ctx.angry
        && ctx.missiles > 0
        && ctx.energy_frac < 0.5
        && rng.gen::<f64>() < AI_MISSILE_PROB_PER_ROUND * ctx.missiles as f64;

    Decision {
        aim,
        fire,
        launch_missile,
        next_period_secs,
    }
}
