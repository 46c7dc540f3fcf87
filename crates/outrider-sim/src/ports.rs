//! Narrow contracts to the excluded subsystems.
//!
//! The renderer consumes geometry and never mutates simulation state; audio
//! and HUD text go the other way through the orchestrator's queues.

use glam::DVec3;

use outrider_core::template::ShipTemplate;

/// The scene draw pass calls into this once per visible object. Positions
/// and axes are already in view space for the requested view direction.
pub trait SceneRenderer {
    /// Wireframe hull at a position with its rotated body axes.
    /// `firing` is the shot-flash state for laser visuals.
    fn draw_ship(
        &mut self,
        template: &ShipTemplate,
        pos: DVec3,
        nose: DVec3,
        side: DVec3,
        roof: DVec3,
        firing: bool,
    );

    /// A planet or sun disc.
    fn draw_globe(&mut self, pos: DVec3, diameter: f64);

    /// A single dust or debris point.
    fn draw_particle(&mut self, pos: DVec3);
}
