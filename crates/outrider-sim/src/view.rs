//! Cockpit view dispatch.
//!
//! Each of the four view directions maps explicitly to its own
//! world-to-view transform, visibility cone and projection. Selection is a
//! plain match over the enum.

use glam::DVec3;

use outrider_core::constants::VIEW_CONE_DOT;
use outrider_core::enums::ViewDirection;
use outrider_core::rotation::normalize;

/// Rotate a scene-space vector into the view frame (+z is straight out of
/// the chosen window).
pub fn to_view(view: ViewDirection, p: DVec3) -> DVec3 {
    match view {
        ViewDirection::Front => p,
        ViewDirection::Rear => DVec3::new(-p.x, p.y, -p.z),
        ViewDirection::Left => DVec3::new(p.z, p.y, -p.x),
        ViewDirection::Right => DVec3::new(-p.z, p.y, p.x),
    }
}

/// Visibility cull for a view-space position: inside the forward cone.
pub fn in_cone(view_pos: DVec3) -> bool {
    normalize(view_pos).dot(DVec3::Z) > VIEW_CONE_DOT
}

/// Perspective projection of a view-space position to normalized screen
/// coordinates `(x/z, y/z)`; `None` behind the eye.
pub fn project(view_pos: DVec3) -> Option<(f64, f64)> {
    if view_pos.z <= f64::EPSILON {
        return None;
    }
    Some((view_pos.x / view_pos.z, view_pos.y / view_pos.z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_view_faces_its_axis() {
        let ahead = DVec3::new(0.0, 0.0, 100.0);
        let astern = DVec3::new(0.0, 0.0, -100.0);
        let port = DVec3::new(-100.0, 0.0, 0.0);
        let starboard = DVec3::new(100.0, 0.0, 0.0);

        assert!(in_cone(to_view(ViewDirection::Front, ahead)));
        assert!(!in_cone(to_view(ViewDirection::Front, astern)));
        assert!(in_cone(to_view(ViewDirection::Rear, astern)));
        assert!(in_cone(to_view(ViewDirection::Left, port)));
        assert!(in_cone(to_view(ViewDirection::Right, starboard)));
        assert!(!in_cone(to_view(ViewDirection::Right, port)));
    }

    #[test]
    fn test_view_transform_preserves_length_and_up() {
        let p = DVec3::new(3.0, 7.0, -2.0);
        for view in [
            ViewDirection::Front,
            ViewDirection::Rear,
            ViewDirection::Left,
            ViewDirection::Right,
        ] {
            let vp = to_view(view, p);
            assert!((vp.length() - p.length()).abs() < 1e-12);
            assert_eq!(vp.y, p.y);
        }
    }

    #[test]
    fn test_projection_centers_on_axis() {
        assert_eq!(project(DVec3::new(0.0, 0.0, 50.0)), Some((0.0, 0.0)));
        let (x, y) = project(DVec3::new(5.0, -10.0, 100.0)).unwrap();
        assert!((x - 0.05).abs() < 1e-12);
        assert!((y + 0.1).abs() < 1e-12);
        assert_eq!(project(DVec3::new(0.0, 0.0, -50.0)), None);
    }
}
