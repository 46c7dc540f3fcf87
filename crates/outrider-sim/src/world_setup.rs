//! Entity spawn factories.
//!
//! Each factory assembles the component bundle for one archetype and
//! registers the entity on the insertion-ordered roster.

use std::sync::Arc;

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use outrider_ai::combat::{CombatAi, CombatState};
use outrider_ai::drift::DriftAi;
use outrider_core::components::{Celestial, Orientation, Position, Vessel};
use outrider_core::constants::*;
use outrider_core::enums::EntityClass;
use outrider_core::template::ShipTemplate;

use crate::pilot::{Pilot, SeekerTarget};

/// Spawn a vessel with an optional behavior driver.
pub fn spawn_vessel(
    world: &mut World,
    roster: &mut Vec<Entity>,
    template: Arc<ShipTemplate>,
    class: EntityClass,
    pos: DVec3,
    roll: f64,
    pitch: f64,
    angry: bool,
    pilot: Option<Pilot>,
) -> Entity {
    let mut orientation = Orientation::new();
    orientation.local_roll_pitch(roll, pitch);
    let mut vessel = Vessel::new(template);
    vessel.angry = angry;

    let entity = match pilot {
        Some(p) => world.spawn((Position(pos), orientation, vessel, class, p)),
        None => world.spawn((Position(pos), orientation, vessel, class)),
    };
    roster.push(entity);
    entity
}

/// Spawn a combat-piloted ship. The first decision is phase-staggered so
/// pilots spawned together don't all think on the same tick.
#[allow(clippy::too_many_arguments)]
pub fn spawn_hunter(
    world: &mut World,
    roster: &mut Vec<Entity>,
    template: Arc<ShipTemplate>,
    pos: DVec3,
    roll: f64,
    pitch: f64,
    angry: bool,
    now: f64,
    rng: &mut ChaCha8Rng,
) -> Entity {
    let stagger = rng.gen_range(0.0..DECISION_PERIOD_SECS);
    let ai = CombatAi::new(template.max_speed, now + DECISION_PERIOD_SECS + stagger);
    spawn_vessel(
        world,
        roster,
        template,
        EntityClass::Ship,
        pos,
        roll,
        pitch,
        angry,
        Some(Pilot::Hunter(ai)),
    )
}

/// Spawn a trader: same combat pilot, but starting placid and wandering.
pub fn spawn_trader(
    world: &mut World,
    roster: &mut Vec<Entity>,
    template: Arc<ShipTemplate>,
    pos: DVec3,
    now: f64,
    rng: &mut ChaCha8Rng,
) -> Entity {
    let stagger = rng.gen_range(0.0..DECISION_PERIOD_SECS);
    let mut ai = CombatAi::new(template.max_speed, now + DECISION_PERIOD_SECS + stagger);
    ai.state = CombatState::Wander;
    spawn_vessel(
        world,
        roster,
        template,
        EntityClass::Ship,
        pos,
        rng.gen_range(0.0..std::f64::consts::TAU),
        rng.gen_range(0.0..std::f64::consts::TAU),
        false,
        Some(Pilot::Hunter(ai)),
    )
}

/// Spawn an inert drifting object (canister, splinter, asteroid).
pub fn spawn_drifter(
    world: &mut World,
    roster: &mut Vec<Entity>,
    template: Arc<ShipTemplate>,
    class: EntityClass,
    pos: DVec3,
    rng: &mut ChaCha8Rng,
) -> Entity {
    let drift = DriftAi::spawn(rng);
    spawn_vessel(
        world,
        roster,
        template,
        class,
        pos,
        0.0,
        0.0,
        false,
        Some(Pilot::Drifter(drift)),
    )
}

/// Spawn a homing missile bound to its target.
pub fn spawn_missile(
    world: &mut World,
    roster: &mut Vec<Entity>,
    template: Arc<ShipTemplate>,
    pos: DVec3,
    target: SeekerTarget,
) -> Entity {
    spawn_vessel(
        world,
        roster,
        template,
        EntityClass::Missile,
        pos,
        0.0,
        0.0,
        true,
        Some(Pilot::Missile { target }),
    )
}

/// Spawn a planet or sun.
pub fn spawn_celestial(
    world: &mut World,
    roster: &mut Vec<Entity>,
    class: EntityClass,
    pos: DVec3,
    diameter: f64,
) -> Entity {
    let entity = world.spawn((Position(pos), Orientation::new(), class, Celestial { diameter }));
    roster.push(entity);
    entity
}

/// Random position on the director's spawn band.
pub fn random_spawn_pos(rng: &mut ChaCha8Rng) -> DVec3 {
    let dir = loop {
        let v = DVec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        if v.length_squared() > 0.01 {
            break v.normalize();
        }
    };
    dir * rng.gen_range(DIRECTOR_SPAWN_RANGE_MIN..DIRECTOR_SPAWN_RANGE_MAX)
}
