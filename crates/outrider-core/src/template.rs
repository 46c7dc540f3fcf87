//! Ship templates: immutable geometry plus numeric attributes.
//!
//! Templates are opaque records produced by an external loader; the core
//! never parses the on-disk ship format. Entities hold shared handles into
//! the catalog.

use std::collections::HashMap;
use std::sync::Arc;

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// One face of a wireframe hull: an outward normal and the edges bounding
/// it (indices into the edge list). Used for back-face culling by the
/// renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face {
    pub normal: DVec3,
    pub edges: Vec<u16>,
}

/// Wireframe hull geometry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipGeometry {
    pub vertices: Vec<DVec3>,
    /// Vertex index pairs.
    pub edges: Vec<(u16, u16)>,
    pub faces: Vec<Face>,
}

/// Immutable per-type ship record: hull geometry and the numeric attribute
/// block the simulation reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipTemplate {
    pub name: String,
    pub geometry: ShipGeometry,
    pub max_energy: f64,
    /// Collision/targeting radius ("target area").
    pub target_radius: f64,
    /// Credits awarded for a kill.
    pub bounty: u32,
    /// Body-frame laser origin.
    pub weapon_mount: DVec3,
    pub laser_power: f64,
    /// Top speed (units/s); AI pilots derive their envelope from this.
    pub max_speed: f64,
    /// Missile rounds carried when spawned.
    pub missiles: u8,
    /// Debris objects released on destruction.
    pub debris_count: u8,
    pub has_ecm: bool,
}

/// Named collection of loaded templates.
///
/// Spawning by a name that is not in the catalog is a caller bug, not a
/// runtime condition: lookups used by spawn paths panic with the offending
/// name.
#[derive(Debug, Clone, Default)]
pub struct ShipCatalog {
    ships: HashMap<String, Arc<ShipTemplate>>,
}

impl ShipCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, template: ShipTemplate) {
        self.ships
            .insert(template.name.clone(), Arc::new(template));
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ShipTemplate>> {
        self.ships.get(name)
    }

    /// Fetch a template that the caller guarantees exists.
    ///
    /// # Panics
    /// Panics on an unknown name — a fatal precondition violation.
    pub fn expect(&self, name: &str) -> Arc<ShipTemplate> {
        match self.ships.get(name) {
            Some(t) => Arc::clone(t),
            None => panic!("unknown ship template '{name}'"),
        }
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }
}
