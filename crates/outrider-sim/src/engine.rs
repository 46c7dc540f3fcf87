//! The Microverse orchestrator.
//!
//! Owns the hecs world, the insertion-ordered roster, the particle field
//! and all player-side state, and advances the whole scene one tick per
//! `handle` call. All slower cadences — AI decisions, jump sub-ticks, the
//! spawn director — are scheduled here against the tick clock, so every
//! background activity is supervised and deterministic for a given seed.

use std::collections::VecDeque;
use std::sync::Arc;

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use outrider_core::commander::Commander;
use outrider_core::commands::{Button, PilotInput};
use outrider_core::components::{Celestial, Orientation, Position, Vessel};
use outrider_core::constants::*;
use outrider_core::enums::{Commodity, EntityClass, ViewDirection};
use outrider_core::events::{AudioCue, Fault};
use outrider_core::state::PlayerStatus;
use outrider_core::template::ShipCatalog;
use outrider_core::types::TickClock;

use crate::jump::{JumpEvent, JumpSequencer};
use crate::particles::{self, DebrisParticle, Particle};
use crate::pilot::SeekerTarget;
use crate::ports::SceneRenderer;
use crate::systems;
use crate::view;
use crate::world_setup;

/// Context the surrounding (out-of-scope) galaxy layer supplies for a
/// scene: how lawless the local jurisdiction is.
#[derive(Debug, Clone, Copy)]
pub struct SceneContext {
    /// Danger level in `[0, 1]`; scales pirate-pack spawning.
    pub danger: f64,
}

impl Default for SceneContext {
    fn default() -> Self {
        SceneContext { danger: 0.25 }
    }
}

/// Configuration for a new microverse.
#[derive(Debug, Clone, Default)]
pub struct MicroverseConfig {
    /// RNG seed for determinism. Same seed, same simulation.
    pub seed: u64,
    pub scene: SceneContext,
}

/// Did the docking approach line up?
///
/// Requires a near-antiparallel slot (station nose back along the view
/// axis), a bounded lateral offset, and roll alignment of the slot with
/// world up.
pub fn docking_aligned(station_nose: DVec3, station_side: DVec3, rel_pos: DVec3) -> bool {
    station_nose.dot(DVec3::Z) <= DOCK_NOSE_DOT_MAX
        && rel_pos.x.abs() < DOCK_LATERAL_TOL
        && rel_pos.y.abs() < DOCK_LATERAL_TOL
        && station_side.dot(DVec3::Y).abs() >= DOCK_ROLL_DOT_MIN
}

/// The player-centered scene simulation.
pub struct Microverse {
    world: World,
    /// Live entities in insertion order; iteration snapshots this.
    roster: Vec<Entity>,
    catalog: ShipCatalog,
    scene: SceneContext,
    clock: TickClock,
    rng: ChaCha8Rng,
    missile_template: Arc<outrider_core::template::ShipTemplate>,
    canister_template: Arc<outrider_core::template::ShipTemplate>,

    particles: Vec<Particle>,
    debris: Vec<DebrisParticle>,

    // Player state, all normalized to [0, 1] where applicable.
    energy: f64,
    shield_fore: f64,
    shield_aft: f64,
    speed: f64,
    jump: JumpSequencer,
    dead: bool,
    stopped: bool,
    docked: bool,

    missile_armed: bool,
    missile_target: Option<Entity>,
    laser_cooldown: u8,

    flash: Option<(String, u64)>,
    sub_texts: VecDeque<String>,
    audio: Vec<AudioCue>,
    faults: Vec<Fault>,
    despawn_buffer: Vec<Entity>,
    next_director_secs: f64,
}

impl Microverse {
    /// Create a scene over a loaded catalog.
    ///
    /// # Panics
    /// Panics if the catalog lacks the missile or canister templates the
    /// orchestrator spawns itself.
    pub fn new(catalog: ShipCatalog, config: MicroverseConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::new(&mut rng, true))
            .collect();
        let missile_template = catalog.expect(TEMPLATE_MISSILE);
        let canister_template = catalog.expect(TEMPLATE_CANISTER);

        Microverse {
            world: World::new(),
            roster: Vec::new(),
            catalog,
            scene: config.scene,
            clock: TickClock::default(),
            rng,
            missile_template,
            canister_template,
            particles,
            debris: Vec::new(),
            energy: 1.0,
            shield_fore: 1.0,
            shield_aft: 1.0,
            speed: 0.0,
            jump: JumpSequencer::new(),
            dead: false,
            stopped: false,
            docked: false,
            missile_armed: false,
            missile_target: None,
            laser_cooldown: 0,
            flash: None,
            sub_texts: VecDeque::new(),
            audio: Vec::new(),
            faults: Vec::new(),
            despawn_buffer: Vec::new(),
            next_director_secs: DIRECTOR_PERIOD_SECS,
        }
    }

    // --- Spawning ---

    /// Spawn a combat-piloted ship by template name.
    ///
    /// # Panics
    /// Panics on an unknown template name (caller bug).
    pub fn spawn_ship(
        &mut self,
        name: &str,
        pos: DVec3,
        roll: f64,
        pitch: f64,
        hostile: bool,
    ) -> Entity {
        let template = self.catalog.expect(name);
        world_setup::spawn_hunter(
            &mut self.world,
            &mut self.roster,
            template,
            pos,
            roll,
            pitch,
            hostile,
            self.clock.elapsed_secs,
            &mut self.rng,
        )
    }

    /// Spawn the orbital station.
    pub fn spawn_station(&mut self, pos: DVec3, roll: f64, pitch: f64) -> Entity {
        let template = self.catalog.expect(TEMPLATE_STATION);
        world_setup::spawn_vessel(
            &mut self.world,
            &mut self.roster,
            template,
            EntityClass::Station,
            pos,
            roll,
            pitch,
            false,
            None,
        )
    }

    pub fn spawn_planet(&mut self, pos: DVec3, diameter: f64) -> Entity {
        world_setup::spawn_celestial(
            &mut self.world,
            &mut self.roster,
            EntityClass::Planet,
            pos,
            diameter,
        )
    }

    pub fn spawn_sun(&mut self, pos: DVec3, diameter: f64) -> Entity {
        world_setup::spawn_celestial(
            &mut self.world,
            &mut self.roster,
            EntityClass::Sun,
            pos,
            diameter,
        )
    }

    pub fn spawn_canister(&mut self, pos: DVec3) -> Entity {
        world_setup::spawn_drifter(
            &mut self.world,
            &mut self.roster,
            Arc::clone(&self.canister_template),
            EntityClass::Canister,
            pos,
            &mut self.rng,
        )
    }

    pub fn spawn_asteroid(&mut self, pos: DVec3) -> Entity {
        let template = self.catalog.expect(DIRECTOR_ASTEROID);
        world_setup::spawn_drifter(
            &mut self.world,
            &mut self.roster,
            template,
            EntityClass::Asteroid,
            pos,
            &mut self.rng,
        )
    }

    /// Spawn an enemy missile homing on the player dummy (for tests).
    #[cfg(test)]
    pub fn spawn_enemy_missile(&mut self, pos: DVec3) -> Entity {
        world_setup::spawn_missile(
            &mut self.world,
            &mut self.roster,
            Arc::clone(&self.missile_template),
            pos,
            SeekerTarget::Player,
        )
    }

    /// Poison an entity's position (for supervised-fault tests).
    #[cfg(test)]
    pub fn corrupt_position(&mut self, entity: Entity) {
        if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
            pos.0 = DVec3::NAN;
        }
    }

    // --- Lifecycle ---

    /// Liveness re-check for a held entity reference.
    pub fn is_alive(&self, entity: Entity) -> bool {
        if !self.world.contains(entity) {
            return false;
        }
        match self.world.get::<&Vessel>(entity) {
            Ok(v) => v.alive,
            Err(_) => true,
        }
    }

    /// Silent removal: leaving the scene, losing a target, being scooped.
    pub fn vanish(&mut self, entity: Entity) {
        systems::behavior::mark_vanished(&self.world, &mut self.despawn_buffer, entity);
    }

    /// Explicit destruction: explosion, debris, bounty credit.
    pub fn die(&mut self, entity: Entity, commander: &mut Commander) {
        let Ok(template) = self.world.get::<&Vessel>(entity).map(|v| {
            if v.alive {
                Some(Arc::clone(&v.template))
            } else {
                None
            }
        }) else {
            return;
        };
        let Some(template) = template else {
            return;
        };
        let Ok(class) = self.world.get::<&EntityClass>(entity).map(|c| *c) else {
            return;
        };
        let Ok(pos) = self.world.get::<&Position>(entity).map(|p| p.0) else {
            return;
        };

        if let Ok(mut vessel) = self.world.get::<&mut Vessel>(entity) {
            vessel.alive = false;
        }
        self.despawn_buffer.push(entity);

        self.audio.push(AudioCue::Explosion);
        commander.credit_kill(template.bounty);
        let burst = particles::spawn_burst(pos, &mut self.rng);
        self.debris.extend(burst);

        // Ships shed cargo; asteroids split into mineable fragments.
        let (debris_class, count) = match class {
            EntityClass::Ship => (EntityClass::Canister, template.debris_count),
            EntityClass::Asteroid => (EntityClass::Splinter, template.debris_count),
            _ => (EntityClass::Canister, 0),
        };
        for _ in 0..count {
            let offset = DVec3::new(
                self.rng.gen_range(-100.0..100.0),
                self.rng.gen_range(-100.0..100.0),
                self.rng.gen_range(-100.0..100.0),
            );
            world_setup::spawn_drifter(
                &mut self.world,
                &mut self.roster,
                Arc::clone(&self.canister_template),
                debris_class,
                pos + offset,
                &mut self.rng,
            );
        }
    }

    // --- The tick ---

    /// Advance the scene one tick. Returns whether to keep advancing:
    /// false once the player is dead, docked, or the hyperspace transition
    /// is pending.
    pub fn handle(&mut self, input: &PilotInput, commander: &mut Commander) -> bool {
        if self.dead || self.docked || self.jump.pending() {
            return false;
        }
        let input = input.sanitized();

        self.process_buttons(&input, commander);

        // Movement first: player maneuvering rotates the world about the
        // origin, forward motion translates it backward.
        let roll = input.roll * PLAYER_ROLL_RATE * DT;
        let pitch = input.pitch * PLAYER_PITCH_RATE * DT;
        systems::movement::apply_world_rotation(
            &mut self.world,
            &mut self.particles,
            &mut self.debris,
            roll,
            pitch,
        );
        self.speed = if self.stopped {
            0.0
        } else {
            input.throttle * PLAYER_MAX_SPEED
        };
        let dz = (self.speed + self.jump.overlay()) * DT;
        systems::movement::translate_scene(&mut self.world, &mut self.particles, &mut self.debris, dz);
        systems::movement::recycle_particles(&mut self.particles, &mut self.rng);
        particles::update_debris(&mut self.debris);

        // Behaviors, then their player-facing effects.
        let outcome = systems::behavior::run(
            &mut self.world,
            &mut self.roster,
            &mut self.rng,
            &self.missile_template,
            self.clock.elapsed_secs,
            self.dead,
            &mut self.audio,
            &mut self.despawn_buffer,
            &mut self.faults,
        );
        if let Some(flash) = outcome.flashes.last() {
            self.set_flash_text(flash);
        }
        for kill in outcome.kills {
            self.die(kill, commander);
        }
        for hit in outcome.hits {
            self.damage_player(hit.amount, hit.from_front);
            if self.dead {
                break;
            }
        }

        self.resolve_collision(commander);
        self.regenerate(commander);
        self.advance_jump();
        self.run_director(commander);

        if self.laser_cooldown > 0 {
            self.laser_cooldown -= 1;
        }
        if let Some((_, until)) = &self.flash {
            if self.clock.tick >= *until {
                self.flash = None;
            }
        }

        self.sweep();
        self.clock.advance();

        !(self.dead || self.docked || self.jump.pending())
    }

    // --- Buttons and weapons ---

    fn process_buttons(&mut self, input: &PilotInput, commander: &mut Commander) {
        for &button in &input.pressed {
            match button {
                Button::Fire => {
                    if self.laser_cooldown == 0 {
                        self.fire_laser(commander);
                    }
                }
                Button::ArmMissile => {
                    if !self.missile_armed && commander.missiles > 0 {
                        self.missile_armed = true;
                        self.missile_target = None;
                        self.set_flash_text("MISSILE ARMED");
                    }
                }
                Button::LaunchMissile => self.launch_player_missile(commander),
                Button::Ecm => self.fire_player_ecm(commander),
                Button::Jump => self.try_start_jump(),
            }
        }
    }

    /// Player laser: cue, then resolve against the first live vessel in the
    /// crosshair box and range. A hit always marks the target hostile.
    fn fire_laser(&mut self, commander: &mut Commander) {
        self.audio.push(AudioCue::Shot);
        self.laser_cooldown = commander.laser.cooldown_ticks();

        let mut struck: Option<Entity> = None;
        for &entity in &self.roster {
            let Ok(alive) = self.world.get::<&Vessel>(entity).map(|v| v.alive) else {
                continue;
            };
            if !alive {
                continue;
            }
            let Ok(pos) = self.world.get::<&Position>(entity).map(|p| p.0) else {
                continue;
            };
            if pos.length() > LASER_RANGE {
                continue;
            }
            if let Some((x, y)) = view::project(pos) {
                if x.abs() < LOCK_BOX_HALF && y.abs() < LOCK_BOX_HALF {
                    struck = Some(entity);
                    break;
                }
            }
        }

        let Some(entity) = struck else {
            return;
        };
        let power = commander.laser.power();
        let destroyed = {
            let Ok(mut vessel) = self.world.get::<&mut Vessel>(entity) else {
                return;
            };
            vessel.angry = true;
            if power >= vessel.energy {
                true
            } else {
                vessel.energy -= power;
                false
            }
        };
        self.audio.push(AudioCue::Hit);
        if destroyed {
            self.die(entity, commander);
        }
    }

    fn launch_player_missile(&mut self, commander: &mut Commander) {
        if !self.missile_armed || commander.missiles == 0 {
            return;
        }
        let Some(target) = self.missile_target else {
            return;
        };
        if !self.is_alive(target) {
            self.missile_target = None;
            self.set_flash_text("TARGET LOST");
            return;
        }
        commander.missiles -= 1;
        world_setup::spawn_missile(
            &mut self.world,
            &mut self.roster,
            Arc::clone(&self.missile_template),
            DVec3::new(0.0, -20.0, 150.0),
            SeekerTarget::Ship(target),
        );
        self.audio.push(AudioCue::Shot);
        self.missile_armed = false;
        self.missile_target = None;
    }

    /// Player ECM burst: every live missile in the scene dies.
    fn fire_player_ecm(&mut self, commander: &Commander) {
        if !commander.has_ecm {
            return;
        }
        self.audio.push(AudioCue::Ecm);
        let missiles: Vec<Entity> = self
            .roster
            .iter()
            .copied()
            .filter(|&e| {
                matches!(
                    self.world.get::<&EntityClass>(e).map(|c| *c),
                    Ok(EntityClass::Missile)
                ) && self.is_alive(e)
            })
            .collect();
        for m in missiles {
            self.vanish(m);
        }
    }

    // --- Damage model ---

    /// Apply incoming damage through the composite energy/shield value.
    /// The struck shield is front or aft depending on where the hit came
    /// from; a negative composite destroys the player.
    pub fn damage_player(&mut self, amount: f64, from_front: bool) {
        if self.dead {
            return;
        }
        let shield = if from_front {
            self.shield_fore
        } else {
            self.shield_aft
        };
        let composite = ENERGY_WEIGHT * self.energy + SHIELD_WEIGHT * shield - amount;
        if composite <= 0.0 {
            self.destroy_player();
            return;
        }
        let frac = composite / ENERGY_WEIGHT;
        self.energy = frac.min(1.0);
        let new_shield = (frac - 1.0).clamp(0.0, 1.0);
        if from_front {
            self.shield_fore = new_shield;
        } else {
            self.shield_aft = new_shield;
        }
    }

    /// The death sequence: explosion, debris, forced stop, terminal flag.
    fn destroy_player(&mut self) {
        self.audio.push(AudioCue::Explosion);
        let burst = particles::spawn_burst(DVec3::ZERO, &mut self.rng);
        self.debris.extend(burst);
        self.stopped = true;
        self.speed = 0.0;
        self.dead = true;
    }

    // --- Collision / docking / scooping ---

    fn collision_candidate(&self, entity: Entity) -> Option<(EntityClass, DVec3)> {
        let class = *self.world.get::<&EntityClass>(entity).ok()?;
        if class.celestial() {
            return None;
        }
        // The player's own missiles chase their targets straight out of the
        // launch tube; they never ram their owner.
        if class == EntityClass::Missile {
            if let Ok(pilot) = self.world.get::<&crate::pilot::Pilot>(entity) {
                if matches!(
                    &*pilot,
                    crate::pilot::Pilot::Missile {
                        target: SeekerTarget::Ship(_)
                    }
                ) {
                    return None;
                }
            }
        }
        let vessel = self.world.get::<&Vessel>(entity).ok()?;
        if !vessel.alive {
            return None;
        }
        let pos = self.world.get::<&Position>(entity).ok()?.0;
        vessel
            .collides(pos.length(), PLAYER_RADIUS)
            .then_some((class, pos))
    }

    /// At most one player collision resolves per pass.
    fn resolve_collision(&mut self, commander: &mut Commander) {
        if self.dead {
            return;
        }
        let snapshot = self.roster.clone();
        for entity in snapshot {
            let Some((class, pos)) = self.collision_candidate(entity) else {
                continue;
            };
            let from_front = pos.z >= 0.0;

            match class {
                EntityClass::Station => {
                    let (nose, side) = {
                        let Ok(o) = self.world.get::<&Orientation>(entity) else {
                            continue;
                        };
                        (o.nose, o.side)
                    };
                    if docking_aligned(nose, side, pos) {
                        self.docked = true;
                        self.audio.push(AudioCue::Dock);
                    } else {
                        // Bad approach: the station wins the exchange.
                        self.damage_player(COLLISION_DAMAGE_SHIP, from_front);
                    }
                }
                EntityClass::Canister | EntityClass::Splinter => {
                    let mut scooped = false;
                    if self.speed < SCOOP_MAX_SPEED && commander.has_scoop {
                        let commodity = if class == EntityClass::Splinter {
                            Commodity::Minerals
                        } else {
                            Commodity::CANISTER_POOL
                                [self.rng.gen_range(0..Commodity::CANISTER_POOL.len())]
                        };
                        if commander.add_cargo(commodity) {
                            let text = format!("{} SCOOPED", commodity.label().to_uppercase());
                            self.set_flash_text(&text);
                            self.vanish(entity);
                            scooped = true;
                        }
                    }
                    if !scooped {
                        self.damage_player(COLLISION_DAMAGE_DEBRIS, from_front);
                        self.die(entity, commander);
                    }
                }
                _ => {
                    let amount = if class == EntityClass::Missile {
                        MISSILE_DAMAGE
                    } else {
                        COLLISION_DAMAGE_SHIP
                    };
                    self.damage_player(amount, from_front);
                    self.die(entity, commander);
                }
            }
            break;
        }
    }

    // --- Regeneration ---

    /// Energy recovers first; shields only once the banks are full, weaker
    /// side first. Shields need their generators fitted to recharge.
    fn regenerate(&mut self, commander: &Commander) {
        if self.dead {
            return;
        }
        if self.energy < 1.0 {
            self.energy = (self.energy + PLAYER_ENERGY_REGEN * DT).min(1.0);
            return;
        }
        if !commander.shield_fit {
            return;
        }
        let rate = PLAYER_SHIELD_REGEN * DT;
        if self.shield_fore <= self.shield_aft {
            self.shield_fore = (self.shield_fore + rate).min(1.0);
        } else {
            self.shield_aft = (self.shield_aft + rate).min(1.0);
        }
    }

    // --- Hyperspace ---

    /// Mass-lock check: nothing massive or hostile inside the clearance
    /// radius.
    pub fn jump_clear(&self) -> bool {
        for &entity in &self.roster {
            let Ok(class) = self.world.get::<&EntityClass>(entity).map(|c| *c) else {
                continue;
            };
            let hostile = self
                .world
                .get::<&Vessel>(entity)
                .map(|v| v.alive && v.angry)
                .unwrap_or(false);
            if !class.massive() && !hostile {
                continue;
            }
            let Ok(range) = self.world.get::<&Position>(entity).map(|p| p.range()) else {
                continue;
            };
            if range < JUMP_CLEARANCE_RADIUS {
                return false;
            }
        }
        true
    }

    fn try_start_jump(&mut self) {
        if self.jump.engaged() || self.jump.pending() {
            self.set_flash_text("JUMP ENGAGED");
            return;
        }
        if !self.jump_clear() {
            self.set_flash_text("MASS LOCKED");
            return;
        }
        if self.jump.start(true, self.clock.elapsed_secs) {
            self.audio.push(AudioCue::Jump);
        }
    }

    fn advance_jump(&mut self) {
        if !self.jump.engaged() {
            return;
        }
        let cancelled = self.dead || self.stopped || self.docked;
        let clear = self.jump_clear();
        match self
            .jump
            .advance(self.clock.elapsed_secs, clear, cancelled)
        {
            Some(JumpEvent::Aborted) => {
                log::warn!("jump sequence aborted: clearance lost or scene stopped");
                self.set_flash_text("JUMP ABORTED");
            }
            Some(JumpEvent::Completed) => {}
            None => {}
        }
    }

    // --- Spawn director ---

    fn run_director(&mut self, commander: &Commander) {
        if self.clock.elapsed_secs < self.next_director_secs {
            return;
        }
        self.next_director_secs += DIRECTOR_PERIOD_SECS;
        if self.docked || self.dead || self.stopped {
            return;
        }
        systems::spawn_director::run(
            &mut self.world,
            &mut self.roster,
            &mut self.rng,
            &self.catalog,
            &self.scene,
            commander,
            self.clock.elapsed_secs,
        );
    }

    // --- Sweep ---

    /// Tick-boundary sweep: despawn condemned entities and drop them from
    /// the roster, then invalidate any stale lock.
    fn sweep(&mut self) {
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
        let world = &self.world;
        self.roster.retain(|&e| world.contains(e));
        if let Some(target) = self.missile_target {
            if !self.is_alive(target) {
                self.missile_target = None;
            }
        }
    }

    // --- Draw pass ---

    /// Draw the scene for one view. Also runs missile-lock detection on the
    /// front view: the first live hostile inside the lock box becomes the
    /// armed missile's target.
    pub fn draw(&mut self, direction: ViewDirection, renderer: &mut dyn SceneRenderer) {
        let snapshot = self.roster.clone();
        for entity in snapshot {
            let Ok(pos) = self.world.get::<&Position>(entity).map(|p| p.0) else {
                continue;
            };
            let vp = view::to_view(direction, pos);
            if !view::in_cone(vp) {
                continue;
            }
            if let Ok(celestial) = self.world.get::<&Celestial>(entity) {
                renderer.draw_globe(vp, celestial.diameter);
                continue;
            }
            let Ok(vessel) = self.world.get::<&Vessel>(entity) else {
                continue;
            };
            if !vessel.alive {
                continue;
            }
            let Ok(orientation) = self.world.get::<&Orientation>(entity) else {
                continue;
            };
            renderer.draw_ship(
                &vessel.template,
                vp,
                view::to_view(direction, orientation.nose),
                view::to_view(direction, orientation.side),
                view::to_view(direction, orientation.roof),
                vessel.shot_ticks > 0,
            );
        }

        for p in &self.particles {
            let vp = view::to_view(direction, p.pos);
            if view::in_cone(vp) {
                renderer.draw_particle(vp);
            }
        }
        for d in &self.debris {
            let vp = view::to_view(direction, d.pos);
            if view::in_cone(vp) {
                renderer.draw_particle(vp);
            }
        }

        // Lock detection rides the draw pass: the first live hostile whose
        // projection sits in the box on this view's axis takes the lock.
        if self.missile_armed && self.missile_target.is_none() {
            let mut locked = None;
            for &entity in &self.roster {
                let Ok(vessel) = self.world.get::<&Vessel>(entity) else {
                    continue;
                };
                if !vessel.alive || !vessel.angry {
                    continue;
                }
                drop(vessel);
                let Ok(pos) = self.world.get::<&Position>(entity).map(|p| p.0) else {
                    continue;
                };
                if let Some((x, y)) = view::project(view::to_view(direction, pos)) {
                    if x.abs() < LOCK_BOX_HALF && y.abs() < LOCK_BOX_HALF {
                        locked = Some(entity);
                        break;
                    }
                }
            }
            if let Some(entity) = locked {
                self.missile_target = Some(entity);
                self.set_flash_text("TARGET LOCKED");
            }
        }
    }

    // --- HUD text and status ---

    /// Short prominent message; auto-expires after a fixed tick count.
    pub fn set_flash_text(&mut self, text: &str) {
        self.flash = Some((text.to_string(), self.clock.tick + FLASH_TEXT_TICKS));
    }

    pub fn flash_text(&self) -> Option<&str> {
        self.flash.as_ref().map(|(s, _)| s.as_str())
    }

    /// Queue a secondary message line.
    pub fn set_sub_text(&mut self, text: &str) {
        self.sub_texts.push_back(text.to_string());
    }

    pub fn pop_sub_text(&mut self) -> Option<String> {
        self.sub_texts.pop_front()
    }

    /// Per-tick HUD snapshot.
    pub fn status(&self) -> PlayerStatus {
        PlayerStatus {
            tick: self.clock.tick,
            energy: self.energy,
            shield_fore: self.shield_fore,
            shield_aft: self.shield_aft,
            speed: self.speed,
            jump_speed: self.jump.overlay(),
            dead: self.dead,
            docked: self.docked,
            jump_countdown: self.jump.countdown(),
            jump_engaged: self.jump.engaged(),
            hyperspace_pending: self.jump.pending(),
            missile_armed: self.missile_armed,
            target_locked: self.missile_target.is_some(),
            flash_text: self.flash.as_ref().map(|(s, _)| s.clone()),
        }
    }

    // --- Queues and accessors ---

    /// Drain queued audio cues (fire-and-forget for the shell).
    pub fn take_audio_cues(&mut self) -> Vec<AudioCue> {
        std::mem::take(&mut self.audio)
    }

    /// Drain the supervised-fault queue.
    pub fn take_faults(&mut self) -> Vec<Fault> {
        std::mem::take(&mut self.faults)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn objects(&self) -> &[Entity] {
        &self.roster
    }

    pub fn clock(&self) -> TickClock {
        self.clock
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn is_docked(&self) -> bool {
        self.docked
    }

    pub fn hyperspace_pending(&self) -> bool {
        self.jump.pending()
    }

    pub fn jump_speed(&self) -> f64 {
        self.jump.overlay()
    }

    /// Forced-stop flag; cancels the jump sequence and the director.
    pub fn set_stopped(&mut self, stopped: bool) {
        self.stopped = stopped;
    }
}
