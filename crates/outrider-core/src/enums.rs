//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// What kind of thing an entity is, for collision, scooping and mass-lock
/// decisions. Celestial bodies never enter collision resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityClass {
    /// Any piloted or pilotable ship (trader, pirate, police).
    Ship,
    /// The orbital station; collision runs the docking test first.
    Station,
    Planet,
    Sun,
    /// A live homing missile (either side's).
    Missile,
    /// A jettisoned cargo canister.
    Canister,
    /// A mineable fragment split off an asteroid.
    Splinter,
    Asteroid,
}

impl EntityClass {
    /// Can the fuel scoop pick this up?
    pub fn scoopable(self) -> bool {
        matches!(self, EntityClass::Canister | EntityClass::Splinter)
    }

    /// Does this object mass-lock the hyperspace drive regardless of mood?
    pub fn massive(self) -> bool {
        matches!(
            self,
            EntityClass::Station | EntityClass::Planet | EntityClass::Sun
        )
    }

    pub fn celestial(self) -> bool {
        matches!(self, EntityClass::Planet | EntityClass::Sun)
    }
}

/// Laser fit. Each kind carries its own punch and recycle time; the
/// renderer draws each kind differently but that stays on its side of the
/// port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaserKind {
    #[default]
    Pulse,
    Beam,
    Military,
    Mining,
}

impl LaserKind {
    /// Energy removed from the target per hit.
    pub fn power(self) -> f64 {
        match self {
            LaserKind::Pulse => 10.0,
            LaserKind::Beam => 18.0,
            LaserKind::Military => 28.0,
            LaserKind::Mining => 12.0,
        }
    }

    /// Ticks between shots.
    pub fn cooldown_ticks(self) -> u8 {
        match self {
            LaserKind::Pulse => 8,
            LaserKind::Beam => 4,
            LaserKind::Military => 4,
            LaserKind::Mining => 10,
        }
    }
}

/// Tradeable commodity. The market itself lives outside the core; the
/// simulation only reads and writes manifest entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Commodity {
    Food,
    Textiles,
    Slaves,
    LiquorWines,
    Luxuries,
    Narcotics,
    Computers,
    Alloys,
    Firearms,
    Minerals,
    Gold,
}

impl Commodity {
    pub fn label(self) -> &'static str {
        match self {
            Commodity::Food => "Food",
            Commodity::Textiles => "Textiles",
            Commodity::Slaves => "Slaves",
            Commodity::LiquorWines => "Liquor/Wines",
            Commodity::Luxuries => "Luxuries",
            Commodity::Narcotics => "Narcotics",
            Commodity::Computers => "Computers",
            Commodity::Alloys => "Alloys",
            Commodity::Firearms => "Firearms",
            Commodity::Minerals => "Minerals",
            Commodity::Gold => "Gold",
        }
    }

    /// Weight of one tonne toward the contraband score.
    pub fn contraband_weight(self) -> f64 {
        match self {
            Commodity::Slaves | Commodity::Narcotics => 2.0,
            Commodity::Firearms => 1.0,
            _ => 0.0,
        }
    }

    /// Commodities a drifting canister may contain.
    pub const CANISTER_POOL: &'static [Commodity] = &[
        Commodity::Food,
        Commodity::Textiles,
        Commodity::LiquorWines,
        Commodity::Computers,
        Commodity::Alloys,
        Commodity::Gold,
    ];
}

/// Combat rating, derived from the kill count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    #[default]
    Harmless,
    MostlyHarmless,
    Poor,
    Average,
    AboveAverage,
    Competent,
    Dangerous,
    Deadly,
    Elite,
}

impl Rank {
    pub fn label(self) -> &'static str {
        match self {
            Rank::Harmless => "Harmless",
            Rank::MostlyHarmless => "Mostly Harmless",
            Rank::Poor => "Poor",
            Rank::Average => "Average",
            Rank::AboveAverage => "Above Average",
            Rank::Competent => "Competent",
            Rank::Dangerous => "Dangerous",
            Rank::Deadly => "Deadly",
            Rank::Elite => "ELITE",
        }
    }
}

/// The four cockpit view directions. Each maps explicitly to its own
/// world-to-view transform, visibility predicate and projection in the sim
/// crate — selection is a plain match, never name lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewDirection {
    #[default]
    Front,
    Rear,
    Left,
    Right,
}
