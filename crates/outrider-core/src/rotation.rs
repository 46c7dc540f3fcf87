//! Quaternion rotation math.
//!
//! Every moving entity carries its orientation as unit quaternions; this
//! module provides the construction, composition and vector-rotation
//! primitives they are built from. Rotations compose incrementally every
//! tick, so the product is renormalized on each composition to keep drift
//! from accumulating over a session.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Tolerance inside which a vector counts as already normalized.
const NORMALIZE_TOLERANCE: f64 = 1e-5;

/// Normalize a vector to unit length.
///
/// Skips the square root when the input is already unit length within
/// tolerance. A zero vector is returned unchanged.
pub fn normalize(v: DVec3) -> DVec3 {
    let mag2 = v.length_squared();
    if (mag2 - 1.0).abs() <= NORMALIZE_TOLERANCE || mag2 == 0.0 {
        v
    } else {
        v / mag2.sqrt()
    }
}

/// A rotation quaternion: scalar part `w`, vector part `v`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    pub w: f64,
    pub v: DVec3,
}

impl Quat {
    pub const IDENTITY: Quat = Quat {
        w: 1.0,
        v: DVec3::ZERO,
    };

    /// Build a rotation of `angle` radians about `axis`.
    pub fn from_axis_angle(axis: DVec3, angle: f64) -> Quat {
        let axis = normalize(axis);
        let half = angle * 0.5;
        Quat {
            w: half.cos(),
            v: axis * half.sin(),
        }
    }

    /// Hamilton product `self * rhs` (apply `rhs` first, then `self`).
    pub fn mul(self, rhs: Quat) -> Quat {
        Quat {
            w: self.w * rhs.w - self.v.dot(rhs.v),
            v: rhs.v * self.w + self.v * rhs.w + self.v.cross(rhs.v),
        }
    }

    /// The conjugate (inverse for unit quaternions).
    pub fn conjugate(self) -> Quat {
        Quat {
            w: self.w,
            v: -self.v,
        }
    }

    /// Rotate a vector: the vector part of `q * (0, p) * q⁻¹`.
    pub fn rotate(self, p: DVec3) -> DVec3 {
        rotate_with(self, self.conjugate(), p)
    }

    pub fn norm(self) -> f64 {
        (self.w * self.w + self.v.length_squared()).sqrt()
    }

    /// Rescale to unit norm. Identity is returned for a degenerate zero
    /// quaternion rather than propagating NaN.
    pub fn renormalized(self) -> Quat {
        let n = self.norm();
        if n > 0.0 {
            Quat {
                w: self.w / n,
                v: self.v / n,
            }
        } else {
            Quat::IDENTITY
        }
    }
}

impl std::ops::Mul for Quat {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Quat {
        Quat::mul(self, rhs)
    }
}

/// Rotate `p` by `q` using a pre-computed conjugate.
///
/// Entities keep the conjugate of each orientation quaternion alongside the
/// quaternion itself; this avoids re-deriving it on every axis refresh.
pub fn rotate_with(q: Quat, q_inv: Quat, p: DVec3) -> DVec3 {
    let pure = Quat { w: 0.0, v: p };
    q.mul(pure).mul(q_inv).v
}

/// Wrap an accumulated angle into `[0, 2π)` one period at a time.
pub fn wrap_angle(a: f64) -> f64 {
    let tau = std::f64::consts::TAU;
    if a >= tau {
        a - tau
    } else if a < 0.0 {
        a + tau
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: DVec3, b: DVec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_normalize_unit_length() {
        let cases = [
            DVec3::new(3.0, 4.0, 0.0),
            DVec3::new(-0.1, 0.2, 5.0),
            DVec3::new(1e6, -2e6, 3e6),
        ];
        for v in cases {
            let n = normalize(v);
            assert!((n.length() - 1.0).abs() < 1e-9, "not unit: {n:?}");
        }
    }

    #[test]
    fn test_normalize_passthrough_when_already_unit() {
        let v = DVec3::new(0.0, 0.0, 1.0);
        assert_eq!(normalize(v), v);
        assert_eq!(normalize(DVec3::ZERO), DVec3::ZERO);
    }

    #[test]
    fn test_rotate_conjugate_round_trip() {
        let q = Quat::from_axis_angle(DVec3::new(1.0, 2.0, -0.5), 1.234);
        let vectors = [
            DVec3::X,
            DVec3::Y,
            DVec3::Z,
            normalize(DVec3::new(-1.0, 3.0, 0.2)),
        ];
        for v in vectors {
            let back = q.conjugate().rotate(q.rotate(v));
            assert!(approx(back, v), "round trip failed: {back:?} vs {v:?}");
        }
    }

    #[test]
    fn test_axis_angle_quarter_turn() {
        // 90° about z maps +x onto +y.
        let q = Quat::from_axis_angle(DVec3::Z, std::f64::consts::FRAC_PI_2);
        assert!(approx(q.rotate(DVec3::X), DVec3::Y));
    }

    #[test]
    fn test_composition_matches_sequential_rotation() {
        let qa = Quat::from_axis_angle(DVec3::X, 0.7);
        let qb = Quat::from_axis_angle(DVec3::Z, -0.3);
        let v = normalize(DVec3::new(0.2, -1.0, 0.5));
        let composed = (qa * qb).rotate(v);
        let sequential = qa.rotate(qb.rotate(v));
        assert!(approx(composed, sequential));
    }

    #[test]
    fn test_repeated_composition_stays_unit() {
        let step = Quat::from_axis_angle(DVec3::new(0.3, 1.0, -0.2), 0.011);
        let mut q = Quat::IDENTITY;
        for _ in 0..100_000 {
            q = (step * q).renormalized();
        }
        assert!((q.norm() - 1.0).abs() < 1e-9);
        assert!((q.rotate(DVec3::Z).length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_angle() {
        let tau = std::f64::consts::TAU;
        assert!((wrap_angle(tau + 0.1) - 0.1).abs() < 1e-12);
        assert!((wrap_angle(-0.1) - (tau - 0.1)).abs() < 1e-12);
        assert_eq!(wrap_angle(1.0), 1.0);
    }
}
