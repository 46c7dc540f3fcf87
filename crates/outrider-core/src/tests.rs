//! Tests for orientation state, the commander record, input sanitizing and
//! the template catalog.

use glam::DVec3;

use crate::commander::Commander;
use crate::commands::{Button, PilotInput};
use crate::components::{Orientation, Position, Vessel, NOSE_AXIS, ROOF_AXIS, SIDE_AXIS};
use crate::enums::{Commodity, Rank};
use crate::template::{ShipCatalog, ShipGeometry, ShipTemplate};

fn template(name: &str) -> ShipTemplate {
    ShipTemplate {
        name: name.to_string(),
        geometry: ShipGeometry::default(),
        max_energy: 60.0,
        target_radius: 75.0,
        bounty: 50,
        weapon_mount: DVec3::new(0.0, -5.0, 20.0),
        laser_power: 10.0,
        max_speed: 360.0,
        missiles: 2,
        debris_count: 2,
        has_ecm: false,
    }
}

// ---- Orientation ----

#[test]
fn test_new_orientation_has_canonical_axes() {
    let o = Orientation::new();
    assert_eq!(o.nose, NOSE_AXIS);
    assert_eq!(o.side, SIDE_AXIS);
    assert_eq!(o.roof, ROOF_AXIS);
}

#[test]
fn test_local_pitch_tips_the_nose() {
    let mut o = Orientation::new();
    o.local_roll_pitch(0.0, std::f64::consts::FRAC_PI_2);
    // Pitch a quarter turn about the side axis: nose swings toward -y.
    assert!((o.nose - DVec3::new(0.0, -1.0, 0.0)).length() < 1e-9);
    // The side axis is the pitch axis and stays put.
    assert!((o.side - SIDE_AXIS).length() < 1e-9);
}

#[test]
fn test_world_rotation_composes_on_top_of_local() {
    let mut o = Orientation::new();
    o.local_roll_pitch(std::f64::consts::FRAC_PI_2, 0.0);
    let nose_after_roll = o.nose;
    // Roll is about the nose axis, so the nose is unchanged...
    assert!((nose_after_roll - NOSE_AXIS).length() < 1e-9);
    // ...until a world pitch swings it.
    o.world_roll_pitch(0.0, std::f64::consts::FRAC_PI_2);
    assert!((o.nose - DVec3::new(0.0, -1.0, 0.0)).length() < 1e-9);
}

#[test]
fn test_axes_stay_orthonormal_under_accumulation() {
    let mut o = Orientation::new();
    for i in 0..20_000 {
        let a = (i % 7) as f64 * 0.003;
        o.local_roll_pitch(a, -a * 0.5);
        o.world_roll_pitch(0.011, -0.007);
    }
    for axis in [o.nose, o.side, o.roof] {
        assert!((axis.length() - 1.0).abs() < 1e-6);
    }
    assert!(o.nose.dot(o.side).abs() < 1e-6);
    assert!(o.nose.dot(o.roof).abs() < 1e-6);
    assert!(o.side.dot(o.roof).abs() < 1e-6);
}

#[test]
fn test_transform_adds_translation() {
    let o = Orientation::new();
    let p = o.transform(DVec3::new(1.0, 0.0, 0.0), DVec3::new(10.0, 20.0, 30.0));
    assert_eq!(p, DVec3::new(11.0, 20.0, 30.0));
}

// ---- Vessel ----

#[test]
fn test_collision_predicate_boundary() {
    let v = Vessel::new(std::sync::Arc::new(template("cobra_mk3")));
    // target_radius = 75, other = 60: contact at distance 135.
    assert!(v.collides(135.0, 60.0));
    assert!(v.collides(100.0, 60.0));
    assert!(!v.collides(135.1, 60.0));
}

#[test]
fn test_position_range() {
    assert!((Position::new(3.0, 4.0, 0.0).range() - 5.0).abs() < 1e-12);
}

// ---- Commander ----

#[test]
fn test_rank_thresholds() {
    let mut c = Commander::default();
    assert_eq!(c.rank(), Rank::Harmless);
    c.kills = 8;
    assert_eq!(c.rank(), Rank::MostlyHarmless);
    c.kills = 127;
    assert_eq!(c.rank(), Rank::AboveAverage);
    c.kills = 128;
    assert_eq!(c.rank(), Rank::Competent);
    c.kills = 6400;
    assert_eq!(c.rank(), Rank::Elite);
}

#[test]
fn test_cargo_capacity_enforced() {
    let mut c = Commander {
        cargo_capacity: 2,
        ..Commander::default()
    };
    assert!(c.add_cargo(Commodity::Food));
    assert!(c.add_cargo(Commodity::Minerals));
    assert!(!c.add_cargo(Commodity::Gold));
    assert_eq!(c.cargo_used(), 2);
    assert_eq!(c.cargo_free(), 0);
}

#[test]
fn test_contraband_score_weighting() {
    let mut c = Commander {
        cargo_capacity: 20,
        ..Commander::default()
    };
    assert_eq!(c.contraband_score(), 0.0);
    for _ in 0..5 {
        c.add_cargo(Commodity::Narcotics);
    }
    // 5 t * weight 2 / (2 * 20) = 0.25
    assert!((c.contraband_score() - 0.25).abs() < 1e-12);
    for _ in 0..4 {
        c.add_cargo(Commodity::Firearms);
    }
    assert!((c.contraband_score() - 0.35).abs() < 1e-12);
    // Legal goods add nothing.
    c.add_cargo(Commodity::Food);
    assert!((c.contraband_score() - 0.35).abs() < 1e-12);
}

#[test]
fn test_credit_kill() {
    let mut c = Commander::default();
    let credits = c.credits;
    c.credit_kill(50);
    assert_eq!(c.credits, credits + 50);
    assert_eq!(c.kills, 1);
}

// ---- Input ----

#[test]
fn test_input_sanitize_clamps_and_defaults() {
    let input = PilotInput {
        roll: 3.0,
        pitch: f64::NAN,
        throttle: f64::INFINITY,
        pressed: vec![Button::Fire],
    };
    let s = input.sanitized();
    assert_eq!(s.roll, 1.0);
    assert_eq!(s.pitch, 0.0);
    assert_eq!(s.throttle, 0.0);
    assert!(s.pressed(Button::Fire));
    assert!(!s.pressed(Button::Jump));
}

// ---- Catalog ----

#[test]
fn test_catalog_lookup() {
    let mut catalog = ShipCatalog::new();
    catalog.insert(template("viper"));
    assert!(catalog.get("viper").is_some());
    assert!(catalog.get("krait").is_none());
    assert_eq!(catalog.expect("viper").name, "viper");
}

#[test]
#[should_panic(expected = "unknown ship template")]
fn test_catalog_unknown_name_panics() {
    let catalog = ShipCatalog::new();
    catalog.expect("thargoid");
}

#[test]
fn test_status_snapshot_serializes() {
    let status = crate::state::PlayerStatus {
        tick: 42,
        energy: 0.5,
        ..Default::default()
    };
    let json = serde_json::to_string(&status).unwrap();
    let back: crate::state::PlayerStatus = serde_json::from_str(&json).unwrap();
    assert_eq!(back.tick, 42);
    assert_eq!(back.energy, 0.5);
}
