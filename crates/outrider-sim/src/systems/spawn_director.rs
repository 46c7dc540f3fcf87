//! The spawn director: a slow background process that populates the scene.
//!
//! Runs at its own cadence while the scene is active and the player is
//! undocked. Every introduction is a probabilistic draw gated by context:
//! distance from the station, the live-ship cap, local danger, and how
//! incriminating the player's cargo looks to a patrol.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use outrider_core::commander::Commander;
use outrider_core::components::Position;
use outrider_core::constants::*;
use outrider_core::enums::EntityClass;
use outrider_core::template::ShipCatalog;

use crate::engine::SceneContext;
use crate::world_setup;

/// One director pass.
pub fn run(
    world: &mut World,
    roster: &mut Vec<Entity>,
    rng: &mut ChaCha8Rng,
    catalog: &ShipCatalog,
    scene: &SceneContext,
    commander: &Commander,
    now: f64,
) {
    let mut station_range = f64::INFINITY;
    let mut ship_count = 0usize;
    {
        let mut query = world.query::<(&Position, &EntityClass)>();
        for (_entity, (pos, class)) in query.iter() {
            match class {
                EntityClass::Station => station_range = station_range.min(pos.range()),
                EntityClass::Ship | EntityClass::Asteroid => ship_count += 1,
                _ => {}
            }
        }
    }

    // Nothing spawns in the station's traffic-control zone.
    if station_range < DIRECTOR_SAFE_RADIUS {
        return;
    }
    if ship_count >= DIRECTOR_SHIP_CAP {
        return;
    }

    if rng.gen::<f64>() < DIRECTOR_ASTEROID_PROB {
        let pos = world_setup::random_spawn_pos(rng);
        world_setup::spawn_drifter(
            world,
            roster,
            catalog.expect(DIRECTOR_ASTEROID),
            EntityClass::Asteroid,
            pos,
            rng,
        );
    }

    if rng.gen::<f64>() < DIRECTOR_TRADER_PROB {
        let name = DIRECTOR_TRADER_SHIPS[rng.gen_range(0..DIRECTOR_TRADER_SHIPS.len())];
        let pos = world_setup::random_spawn_pos(rng);
        world_setup::spawn_trader(world, roster, catalog.expect(name), pos, now, rng);
    }

    let pack_prob = DIRECTOR_PACK_PROB_BASE + DIRECTOR_PACK_PROB_DANGER * scene.danger.clamp(0.0, 1.0);
    if rng.gen::<f64>() < pack_prob {
        let center = world_setup::random_spawn_pos(rng);
        let count = 1 + rng.gen_range(0..3);
        for _ in 0..count {
            let name = DIRECTOR_PACK_SHIPS[rng.gen_range(0..DIRECTOR_PACK_SHIPS.len())];
            let offset = glam::DVec3::new(
                rng.gen_range(-500.0..500.0),
                rng.gen_range(-500.0..500.0),
                rng.gen_range(-500.0..500.0),
            );
            world_setup::spawn_hunter(
                world,
                roster,
                catalog.expect(name),
                center + offset,
                rng.gen_range(0.0..std::f64::consts::TAU),
                rng.gen_range(0.0..std::f64::consts::TAU),
                true,
                now,
                rng,
            );
        }
    }

    let contraband = commander.contraband_score();
    let police_prob = DIRECTOR_POLICE_PROB_BASE + DIRECTOR_POLICE_PROB_CONTRABAND * contraband;
    if rng.gen::<f64>() < police_prob {
        let pos = world_setup::random_spawn_pos(rng);
        world_setup::spawn_hunter(
            world,
            roster,
            catalog.expect(DIRECTOR_POLICE_SHIP),
            pos,
            0.0,
            0.0,
            contraband > 0.0,
            now,
            rng,
        );
    }
}
