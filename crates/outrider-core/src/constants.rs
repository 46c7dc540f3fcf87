//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 25;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Cadences ---

/// Combat-AI decision period (seconds) — roughly 10 Hz.
pub const DECISION_PERIOD_SECS: f64 = 0.1;

/// Stretched decision period while wandering (seconds).
pub const WANDER_DECISION_PERIOD_SECS: f64 = 0.3;

/// Hyperspace sequencer sub-tick period (seconds).
pub const JUMP_STEP_SECS: f64 = 0.1;

/// Spawn director period (seconds) — roughly 0.5 Hz.
pub const DIRECTOR_PERIOD_SECS: f64 = 2.0;

// --- Combat AI ---

/// Distance below which a seeking ship turns away.
pub const AI_EVADE_RANGE: f64 = 2000.0;

/// Distance above which an evading ship resumes pursuit.
pub const AI_PURSUE_RANGE: f64 = 5000.0;

/// Distance beyond which an NPC silently leaves the scene.
pub const AI_VANISH_RANGE: f64 = 50_000.0;

/// Consecutive decision ticks in one state before wandering is forced.
pub const AI_STATE_TIMEOUT_TICKS: u32 = 500;

/// Nose alignment above which a tracking shot ("can hit") is possible.
pub const AI_AIM_TIGHT: f64 = 0.975;

/// Nose alignment above which a snap shot ("can shoot") is possible.
pub const AI_AIM_LOOSE: f64 = 0.95;

/// Maximum range for a tracking shot.
pub const AI_TIGHT_RANGE: f64 = 30_000.0;

/// Maximum range for a snap shot.
pub const AI_LOOSE_RANGE: f64 = 25_000.0;

/// Per-decision fire probability when tightly aligned.
pub const AI_FIRE_PROB_TIGHT: f64 = 0.3;

/// Per-decision fire probability when loosely aligned.
pub const AI_FIRE_PROB_LOOSE: f64 = 0.2;

/// Roll bias magnitude applied from the decision draw tails (radians/tick).
pub const AI_ROLL_BIAS: f64 = 0.02;

/// Pitch/roll step while steering toward the player (radians/tick).
pub const AI_STEER_STEP: f64 = 0.02;

/// Pitch applied while turning away in Evade (radians/tick).
pub const AI_EVADE_PITCH: f64 = 0.01;

/// Wander roll/pitch bias magnitude bound (radians/tick).
pub const AI_WANDER_BIAS: f64 = 0.06;

/// Decision draw above this sends a seeking ship wandering.
pub const AI_WANDER_TRIGGER: f64 = 0.98;

/// Decision draw below this brings a wandering ship back to pursuit.
pub const AI_WANDER_EXIT: f64 = 0.3;

/// Missile-launch probability per remaining round, per decision tick.
pub const AI_MISSILE_PROB_PER_ROUND: f64 = 0.02;

/// Probability per decision tick that an ECM-fitted ship being tracked by a
/// player missile triggers its ECM.
pub const AI_ECM_TRIGGER_PROB: f64 = 0.25;

// --- Homing missiles ---

/// Proximity radius that triggers hit resolution.
pub const MISSILE_PROXIMITY: f64 = 150.0;

/// Nose alignment above which a missile runs at full speed.
pub const MISSILE_ALIGN_DOT: f64 = 0.7;

/// Missile speed when well aligned (units/s).
pub const MISSILE_SPEED_FAST: f64 = 900.0;

/// Missile speed while still turning onto the target (units/s).
pub const MISSILE_SPEED_SLOW: f64 = 250.0;

/// Steering nudge magnitude (radians/tick).
pub const MISSILE_NUDGE: f64 = 0.03;

/// Damage applied by a missile proximity hit.
pub const MISSILE_DAMAGE: f64 = 120.0;

// --- Player ship ---

/// Maximum cruise speed at full throttle (units/s).
pub const PLAYER_MAX_SPEED: f64 = 400.0;

/// Player hull radius used by the collision predicate.
pub const PLAYER_RADIUS: f64 = 60.0;

/// Roll rate at full stick deflection (radians/s).
pub const PLAYER_ROLL_RATE: f64 = 2.0;

/// Pitch rate at full stick deflection (radians/s).
pub const PLAYER_PITCH_RATE: f64 = 1.0;

/// Energy weight in the composite damage value.
pub const ENERGY_WEIGHT: f64 = 150.0;

/// Shield weight in the composite damage value.
pub const SHIELD_WEIGHT: f64 = 20.0;

/// Player energy recovery rate (fraction/s).
pub const PLAYER_ENERGY_REGEN: f64 = 0.03;

/// Player shield recovery rate (fraction/s), applied once energy is full.
pub const PLAYER_SHIELD_REGEN: f64 = 0.015;

/// NPC energy recovery rate (energy units/s).
pub const NPC_ENERGY_REGEN: f64 = 1.0;

/// Maximum player speed at which the fuel scoop works.
pub const SCOOP_MAX_SPEED: f64 = 60.0;

/// Maximum laser range.
pub const LASER_RANGE: f64 = 30_000.0;

/// Collision damage from ramming a ship or asteroid.
pub const COLLISION_DAMAGE_SHIP: f64 = 100.0;

/// Collision damage from hitting loose debris.
pub const COLLISION_DAMAGE_DEBRIS: f64 = 20.0;

/// Ticks a firing ship keeps its shot flash visible.
pub const SHOT_FLASH_TICKS: u8 = 6;

// --- Docking ---

/// Station nose dot with the view axis must be at most this (antiparallel).
pub const DOCK_NOSE_DOT_MAX: f64 = -0.96;

/// Lateral offset tolerance on each of x and y.
pub const DOCK_LATERAL_TOL: f64 = 20.0;

/// Minimum magnitude of the station side vector's dot with world up.
pub const DOCK_ROLL_DOT_MIN: f64 = 0.85;

// --- Hyperspace jump ---

/// No massive or hostile object may be inside this radius.
pub const JUMP_CLEARANCE_RADIUS: f64 = 25_000.0;

/// Peak jump-speed overlay (units/s).
pub const JUMP_MAX_OVERLAY: f64 = 3200.0;

/// Sub-ticks spent ramping the overlay up (and again down).
pub const JUMP_RAMP_STEPS: u32 = 40;

/// Sub-ticks spent holding peak overlay speed.
pub const JUMP_CRUISE_STEPS: u32 = 80;

// --- Particles ---

/// Ambient dust particle count.
pub const PARTICLE_COUNT: usize = 20;

/// Distance at which an ambient particle is recycled.
pub const PARTICLE_RESET_RADIUS: f64 = 250.0;

/// Lifetime of an explosion debris particle (ticks).
pub const DEBRIS_LIFETIME_TICKS: u32 = 100;

// --- Spawn director ---

/// Minimum distance from the station before anything spawns.
pub const DIRECTOR_SAFE_RADIUS: f64 = 15_000.0;

/// Live ship/asteroid cap; the director idles at or above it.
pub const DIRECTOR_SHIP_CAP: usize = 8;

/// Spawn distance band (units).
pub const DIRECTOR_SPAWN_RANGE_MIN: f64 = 15_000.0;
pub const DIRECTOR_SPAWN_RANGE_MAX: f64 = 30_000.0;

/// Per-run asteroid probability.
pub const DIRECTOR_ASTEROID_PROB: f64 = 0.10;

/// Per-run trader probability.
pub const DIRECTOR_TRADER_PROB: f64 = 0.06;

/// Pirate-pack probability: base + danger scaling.
pub const DIRECTOR_PACK_PROB_BASE: f64 = 0.04;
pub const DIRECTOR_PACK_PROB_DANGER: f64 = 0.10;

/// Police probability: base + contraband scaling.
pub const DIRECTOR_POLICE_PROB_BASE: f64 = 0.03;
pub const DIRECTOR_POLICE_PROB_CONTRABAND: f64 = 0.12;

/// Ship names the director draws from. The catalog must contain these.
pub const DIRECTOR_PACK_SHIPS: &[&str] = &["sidewinder", "mamba"];
pub const DIRECTOR_TRADER_SHIPS: &[&str] = &["cobra_mk3", "python"];
pub const DIRECTOR_POLICE_SHIP: &str = "viper";
pub const DIRECTOR_ASTEROID: &str = "asteroid";

/// Template names the orchestrator itself needs.
pub const TEMPLATE_MISSILE: &str = "missile";
pub const TEMPLATE_CANISTER: &str = "cargo";
pub const TEMPLATE_STATION: &str = "coriolis";

// --- HUD ---

/// Ticks a flash-text message stays up.
pub const FLASH_TEXT_TICKS: u64 = 50;

// --- Views ---

/// Visibility cone: view-space z alignment must exceed this to draw.
pub const VIEW_CONE_DOT: f64 = 0.7;

/// Missile-lock box half-width in projected (x/z, y/z) units.
pub const LOCK_BOX_HALF: f64 = 0.05;
