//! Per-tick player status snapshot — the HUD contract.

use serde::{Deserialize, Serialize};

/// Everything the cockpit HUD shows about the player ship, rebuilt each
/// tick. Values are already normalized/clamped by the simulation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub tick: u64,
    /// Energy banks in `[0, 1]`.
    pub energy: f64,
    /// Forward shield in `[0, 1]`.
    pub shield_fore: f64,
    /// Aft shield in `[0, 1]`.
    pub shield_aft: f64,
    /// Cruise speed (units/s).
    pub speed: f64,
    /// Jump-speed overlay (units/s); zero outside a jump.
    pub jump_speed: f64,
    pub dead: bool,
    pub docked: bool,
    /// Jump sequence ramping up.
    pub jump_countdown: bool,
    /// Jump sequence anywhere past idle.
    pub jump_engaged: bool,
    /// Completed jump awaiting the scene swap.
    pub hyperspace_pending: bool,
    pub missile_armed: bool,
    pub target_locked: bool,
    pub flash_text: Option<String>,
}
