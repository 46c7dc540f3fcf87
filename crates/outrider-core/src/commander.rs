//! The commander record: credits, rating, cargo and equipment.
//!
//! Owned by the embedding shell and passed into the simulation by mutable
//! reference each tick; the core reads and writes it but never stores it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{Commodity, LaserKind, Rank};

/// Kill counts at which the rating steps up.
const RANK_THRESHOLDS: [(u32, Rank); 8] = [
    (8, Rank::MostlyHarmless),
    (16, Rank::Poor),
    (32, Rank::Average),
    (64, Rank::AboveAverage),
    (128, Rank::Competent),
    (512, Rank::Dangerous),
    (2560, Rank::Deadly),
    (6400, Rank::Elite),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commander {
    pub credits: u32,
    pub kills: u32,
    /// Missile rounds in the player's racks.
    pub missiles: u8,
    /// Cargo manifest in tonnes. Ordered map so serialization and iteration
    /// are deterministic.
    pub cargo: BTreeMap<Commodity, u32>,
    pub cargo_capacity: u32,
    pub has_scoop: bool,
    pub has_ecm: bool,
    /// Shield generators fitted; without them the banks never recharge.
    pub shield_fit: bool,
    pub laser: LaserKind,
}

impl Default for Commander {
    fn default() -> Self {
        Commander {
            credits: 1000,
            kills: 0,
            missiles: 3,
            cargo: BTreeMap::new(),
            cargo_capacity: 20,
            has_scoop: false,
            has_ecm: false,
            shield_fit: true,
            laser: LaserKind::Pulse,
        }
    }
}

impl Commander {
    /// Combat rating derived from the kill count.
    pub fn rank(&self) -> Rank {
        let mut rank = Rank::Harmless;
        for (kills, r) in RANK_THRESHOLDS {
            if self.kills >= kills {
                rank = r;
            }
        }
        rank
    }

    pub fn cargo_used(&self) -> u32 {
        self.cargo.values().sum()
    }

    pub fn cargo_free(&self) -> u32 {
        self.cargo_capacity.saturating_sub(self.cargo_used())
    }

    /// Add one tonne if there is room. Returns whether it fit.
    pub fn add_cargo(&mut self, commodity: Commodity) -> bool {
        if self.cargo_free() == 0 {
            return false;
        }
        *self.cargo.entry(commodity).or_insert(0) += 1;
        true
    }

    /// How incriminating the manifest looks to a patrol scan, normalized so
    /// a hold full of narcotics approaches 1.0.
    pub fn contraband_score(&self) -> f64 {
        if self.cargo_capacity == 0 {
            return 0.0;
        }
        let weighted: f64 = self
            .cargo
            .iter()
            .map(|(c, qty)| c.contraband_weight() * *qty as f64)
            .sum();
        (weighted / (2.0 * self.cargo_capacity as f64)).min(1.0)
    }

    /// Credit a kill: bounty plus the rating tally.
    pub fn credit_kill(&mut self, bounty: u32) {
        self.credits = self.credits.saturating_add(bounty);
        self.kills = self.kills.saturating_add(1);
    }
}
