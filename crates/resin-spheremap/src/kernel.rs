//! Geometry carried by a sphere map.
//!
//! The map never computes with coordinates. It stores one point per vertex and
//! one great circle per half-edge and half-loop, and it needs to know how to
//! reverse a circle. Exact predicates, intersections and orientation tests
//! belong to whatever kernel the caller plugs in through [`SphereKernel`].
//!
//! [`UnitSphere`] is a plain `f64` kernel backed by glam, good enough for
//! building maps from known data and for tests.

use glam::DVec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Types a sphere map stores for its embedding.
pub trait SphereKernel {
    /// Embedding of a vertex.
    type Point: Clone + Debug + PartialEq;
    /// Supporting great circle of a half-edge or half-loop.
    type Circle: Clone + Debug + PartialEq + Default;

    /// The same great circle with opposite orientation.
    fn opposite(circle: &Self::Circle) -> Self::Circle;
}

/// Default kernel: points and circles on the unit sphere in `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitSphere;

impl SphereKernel for UnitSphere {
    type Point = SpherePoint;
    type Circle = SphereCircle;

    fn opposite(circle: &SphereCircle) -> SphereCircle {
        circle.opposite()
    }
}

/// A direction from the sphere's center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpherePoint(pub DVec3);

impl SpherePoint {
    /// Creates a point from a direction, normalized onto the unit sphere.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z).normalize_or_zero())
    }

    /// The point diametrically opposite.
    pub fn antipode(self) -> Self {
        Self(-self.0)
    }

    /// Returns the underlying vector.
    pub fn to_vec3(self) -> DVec3 {
        self.0
    }
}

impl From<DVec3> for SpherePoint {
    fn from(v: DVec3) -> Self {
        Self(v.normalize_or_zero())
    }
}

/// An oriented great circle, given by its normal.
///
/// The zero normal is the unset circle a fresh half-edge starts with.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SphereCircle {
    /// Unit normal of the plane through the origin.
    pub normal: DVec3,
}

impl SphereCircle {
    /// Creates a circle from its plane normal.
    pub fn new(normal: DVec3) -> Self {
        Self {
            normal: normal.normalize_or_zero(),
        }
    }

    /// The great circle through two non-antipodal points, oriented from `a`
    /// towards `b`.
    pub fn through(a: SpherePoint, b: SpherePoint) -> Self {
        Self::new(a.0.cross(b.0))
    }

    /// Same circle, opposite orientation.
    pub fn opposite(self) -> Self {
        Self {
            normal: -self.normal,
        }
    }

    /// Returns true for the unset circle.
    pub fn is_degenerate(self) -> bool {
        self.normal == DVec3::ZERO
    }
}

/// A segment on a great circle, from `source` to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SphereSegment {
    /// Start point.
    pub source: SpherePoint,
    /// End point.
    pub target: SpherePoint,
    /// Supporting circle, oriented from source to target.
    pub circle: SphereCircle,
}

impl SphereSegment {
    /// Creates the short segment between two non-antipodal points.
    pub fn new(source: SpherePoint, target: SpherePoint) -> Self {
        Self {
            source,
            target,
            circle: SphereCircle::through(source, target),
        }
    }

    /// Same segment traversed the other way.
    pub fn opposite(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            circle: self.circle.opposite(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_is_normalized() {
        let p = SpherePoint::new(3.0, 0.0, 4.0);
        assert!((p.0.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_circle_through_points() {
        let c = SphereCircle::through(SpherePoint::new(1.0, 0.0, 0.0), SpherePoint::new(0.0, 1.0, 0.0));
        assert_eq!(c.normal, DVec3::Z);
        assert_eq!(UnitSphere::opposite(&c).normal, -DVec3::Z);
    }

    #[test]
    fn test_default_circle_is_degenerate() {
        assert!(SphereCircle::default().is_degenerate());
    }

    #[test]
    fn test_segment_opposite() {
        let s = SphereSegment::new(SpherePoint::new(1.0, 0.0, 0.0), SpherePoint::new(0.0, 0.0, 1.0));
        let r = s.opposite();
        assert_eq!(r.source, s.target);
        assert_eq!(r.circle, s.circle.opposite());
    }
}
