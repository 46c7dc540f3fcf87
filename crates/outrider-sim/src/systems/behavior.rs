//! AI activation: steer every pilot each tick, run decisions at their own
//! cadence, and collect the effects for the orchestrator to apply.
//!
//! Iterates a snapshot of the roster and defers spawns/despawns, so no
//! collection is mutated while it is being walked. Effects that touch
//! player state (laser hits, missile strikes, kills) are returned rather
//! than applied here.

use std::sync::Arc;

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use outrider_ai::combat::{self, AimCall, Decision, DecisionContext, ShotKind, SteerContext, Steering};
use outrider_ai::drift::DriftAi;
use outrider_ai::missile::{self, MissileContext, MissileOutcome, MissileUpdate};
use outrider_core::components::{Orientation, Position, Vessel};
use outrider_core::constants::*;
use outrider_core::events::{AudioCue, Fault, FaultSource};
use outrider_core::template::ShipTemplate;

use crate::pilot::{Pilot, SeekerTarget};
use crate::world_setup;

/// A weapon strike against the player, resolved by the damage model.
#[derive(Debug, Clone, Copy)]
pub struct PlayerHit {
    pub amount: f64,
    /// Struck from ahead (front shield) or behind (aft shield).
    pub from_front: bool,
}

/// Everything this pass wants the orchestrator to do.
#[derive(Debug, Default)]
pub struct BehaviorOutcome {
    pub hits: Vec<PlayerHit>,
    /// Entities destroyed by missile proximity (die, with bounty).
    pub kills: Vec<Entity>,
    pub flashes: Vec<String>,
}

/// Facts copied out of a vessel before its pilot borrow.
struct VesselFacts {
    name: String,
    laser_power: f64,
    has_ecm: bool,
    missiles: u8,
    angry: bool,
    energy_frac: f64,
}

/// What one pilot wants to do this tick.
enum Plan {
    Hunter {
        steering: Steering,
        decision: Option<Decision>,
    },
    Missile {
        update: MissileUpdate,
        target: SeekerTarget,
    },
    Drift(DriftAi),
}

/// Run all behaviors for one tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    roster: &mut Vec<Entity>,
    rng: &mut ChaCha8Rng,
    missile_template: &Arc<ShipTemplate>,
    now: f64,
    player_dead: bool,
    audio: &mut Vec<AudioCue>,
    despawn: &mut Vec<Entity>,
    faults: &mut Vec<Fault>,
) -> BehaviorOutcome {
    let mut outcome = BehaviorOutcome::default();

    // Missiles currently homing on each ship, for ECM decisions.
    let mut trackers: Vec<(Entity, Entity)> = Vec::new();
    {
        let mut query = world.query::<&Pilot>();
        for (entity, pilot) in query.iter() {
            if let Pilot::Missile {
                target: SeekerTarget::Ship(t),
            } = pilot
            {
                trackers.push((entity, *t));
            }
        }
    }

    let mut enemy_launches: Vec<DVec3> = Vec::new();
    let snapshot: Vec<Entity> = roster.clone();

    for entity in snapshot {
        if !world.contains(entity) {
            continue;
        }

        // Upkeep and fact gathering; skips entities already condemned this
        // pass and anything without combat state (celestials).
        let facts = {
            let Ok(mut vessel) = world.get::<&mut Vessel>(entity) else {
                continue;
            };
            if !vessel.alive {
                continue;
            }
            let max = vessel.template.max_energy;
            vessel.energy = (vessel.energy + NPC_ENERGY_REGEN * DT).min(max);
            if vessel.shot_ticks > 0 {
                vessel.shot_ticks -= 1;
            }
            VesselFacts {
                name: vessel.template.name.clone(),
                laser_power: vessel.template.laser_power,
                has_ecm: vessel.template.has_ecm,
                missiles: vessel.missiles,
                angry: vessel.angry,
                energy_frac: vessel.energy_frac(),
            }
        };

        let Ok(pos0) = world.get::<&Position>(entity).map(|p| p.0) else {
            continue;
        };
        let Ok((nose, side, roof)) = world
            .get::<&Orientation>(entity)
            .map(|o| (o.nose, o.side, o.roof))
        else {
            continue;
        };

        let plan = {
            let Ok(mut pilot) = world.get::<&mut Pilot>(entity) else {
                continue;
            };
            match &mut *pilot {
                Pilot::Hunter(ai) => {
                    let steering = combat::steer(
                        ai,
                        &SteerContext {
                            pos: pos0,
                            nose,
                            side,
                            roof,
                        },
                    );
                    let decision = if now >= ai.next_decision_secs {
                        let ctx = DecisionContext {
                            missiles: facts.missiles,
                            angry: facts.angry,
                            energy_frac: facts.energy_frac,
                        };
                        let d = combat::decide(ai, &ctx, rng);
                        ai.next_decision_secs = now + d.next_period_secs;
                        Some(d)
                    } else {
                        None
                    };
                    Plan::Hunter { steering, decision }
                }
                Pilot::Missile { target } => {
                    let target = *target;
                    let (target_pos, target_alive) = match target {
                        SeekerTarget::Player => (DVec3::ZERO, !player_dead),
                        SeekerTarget::Ship(t) => {
                            let alive = world.contains(t)
                                && world.get::<&Vessel>(t).map(|v| v.alive).unwrap_or(false);
                            let pos = if alive {
                                world.get::<&Position>(t).map(|p| p.0).unwrap_or(DVec3::ZERO)
                            } else {
                                DVec3::ZERO
                            };
                            (pos, alive)
                        }
                    };
                    let update = missile::guide(&MissileContext {
                        pos: pos0,
                        nose,
                        side,
                        roof,
                        target_pos,
                        target_alive,
                    });
                    Plan::Missile { update, target }
                }
                Pilot::Drifter(drift) => Plan::Drift(*drift),
            }
        };

        match plan {
            Plan::Hunter { steering, decision } => {
                if steering.vanish {
                    mark_vanished(world, despawn, entity);
                    continue;
                }
                apply_motion(world, entity, nose, steering.advance, steering.roll, steering.pitch);
                if !position_finite(world, entity) {
                    report_fault(faults, &facts.name);
                    mark_vanished(world, despawn, entity);
                    continue;
                }
                let Some(d) = decision else {
                    continue;
                };

                if let Some(aim) = d.aim {
                    let label = facts.name.replace('_', " ").to_uppercase();
                    outcome.flashes.push(match aim {
                        AimCall::CanHit => format!("{label} CAN HIT"),
                        AimCall::CanShoot => format!("{label} CAN SHOOT"),
                    });
                }
                if let Some(shot) = d.fire {
                    let amount = match shot {
                        ShotKind::Tracking => facts.laser_power * 1.5,
                        ShotKind::Snap => facts.laser_power,
                    };
                    audio.push(AudioCue::Shot);
                    if let Ok(mut vessel) = world.get::<&mut Vessel>(entity) {
                        vessel.shot_ticks = SHOT_FLASH_TICKS;
                    }
                    outcome.hits.push(PlayerHit {
                        amount,
                        from_front: pos0.z >= 0.0,
                    });
                }
                if d.launch_missile {
                    if let Ok(mut vessel) = world.get::<&mut Vessel>(entity) {
                        vessel.missiles = vessel.missiles.saturating_sub(1);
                    }
                    audio.push(AudioCue::Shot);
                    enemy_launches.push(pos0);
                }
                if facts.has_ecm {
                    let incoming: Vec<Entity> = trackers
                        .iter()
                        .filter(|(_, t)| *t == entity)
                        .map(|(m, _)| *m)
                        .collect();
                    if !incoming.is_empty() && rng.gen::<f64>() < AI_ECM_TRIGGER_PROB {
                        audio.push(AudioCue::Ecm);
                        for m in incoming {
                            mark_vanished(world, despawn, m);
                        }
                    }
                }
            }
            Plan::Missile { update, target } => match update.outcome {
                MissileOutcome::Tracking => {
                    apply_motion(world, entity, nose, update.advance, update.roll, update.pitch);
                    if !position_finite(world, entity) {
                        report_fault(faults, &facts.name);
                        mark_vanished(world, despawn, entity);
                    }
                }
                MissileOutcome::SelfDestruct => {
                    audio.push(AudioCue::Explosion);
                    mark_vanished(world, despawn, entity);
                }
                MissileOutcome::Proximity => {
                    audio.push(AudioCue::Explosion);
                    match target {
                        SeekerTarget::Player => outcome.hits.push(PlayerHit {
                            amount: MISSILE_DAMAGE,
                            from_front: pos0.z >= 0.0,
                        }),
                        SeekerTarget::Ship(t) => outcome.kills.push(t),
                    }
                    mark_vanished(world, despawn, entity);
                }
            },
            Plan::Drift(drift) => {
                if let Ok(mut pos) = world.get::<&mut Position>(entity) {
                    pos.0 += drift.velocity() * DT;
                }
                if let Ok(mut orientation) = world.get::<&mut Orientation>(entity) {
                    orientation.local_roll_pitch(drift.roll, drift.pitch);
                }
            }
        }
    }

    // Deferred spawns: enemy missiles released this pass.
    for pos in enemy_launches {
        world_setup::spawn_missile(
            world,
            roster,
            Arc::clone(missile_template),
            pos,
            SeekerTarget::Player,
        );
    }

    outcome
}

/// Advance along the nose and apply local steering.
fn apply_motion(world: &World, entity: Entity, nose: DVec3, advance: f64, roll: f64, pitch: f64) {
    if let Ok(mut pos) = world.get::<&mut Position>(entity) {
        pos.0 += nose * advance * DT;
    }
    if roll != 0.0 || pitch != 0.0 {
        if let Ok(mut orientation) = world.get::<&mut Orientation>(entity) {
            orientation.local_roll_pitch(roll, pitch);
        }
    }
}

fn position_finite(world: &World, entity: Entity) -> bool {
    world
        .get::<&Position>(entity)
        .map(|p| p.0.is_finite())
        .unwrap_or(true)
}

/// Log-and-continue: the entity is removed, the scene goes on.
fn report_fault(faults: &mut Vec<Fault>, name: &str) {
    log::warn!("behavior fault: non-finite state on {name}, removing entity");
    faults.push(Fault {
        source: FaultSource::Behavior,
        fatal: false,
        message: format!("non-finite state on {name}"),
    });
}

/// Flag an entity dead and queue it for the tick-boundary sweep.
pub fn mark_vanished(world: &World, despawn: &mut Vec<Entity>, entity: Entity) {
    if let Ok(mut vessel) = world.get::<&mut Vessel>(entity) {
        if !vessel.alive {
            return;
        }
        vessel.alive = false;
    }
    despawn.push(entity);
}
