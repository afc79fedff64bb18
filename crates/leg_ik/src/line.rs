//! Intersection of two lines in 3D.
use nalgebra::{Point3, UnitVector3, Vector3};

use crate::error::{Error, Result};

/// Default tolerance used when intersecting joint axes, in metres.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// An infinite line through `point` along `direction`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    /// Any point on the line.
    pub point: Point3<f64>,
    /// Unit direction of the line.
    pub direction: UnitVector3<f64>,
}

impl Line {
    /// A line through `point` along `direction`.
    #[must_use]
    pub fn new(point: Point3<f64>, direction: UnitVector3<f64>) -> Self {
        Self { point, direction }
    }

    /// Shortest distance between `point` and this line.
    #[must_use]
    pub fn distance_to(&self, point: &Point3<f64>) -> f64 {
        (point - self.point).cross(&*self.direction).norm()
    }

    /// Find the point where this line meets `other`, see [`intersect`].
    pub fn intersection(&self, other: &Line, tolerance: f64) -> Result<Point3<f64>> {
        intersect(
            &self.point,
            &self.direction,
            &other.point,
            &other.direction,
            tolerance,
        )
    }
}

/// Find the point where the lines `p1 + a * v1` and `p2 + b * v2` meet.
///
/// Crossing both sides of `a * v1 = (p2 - p1) + b * v2` with `v2` removes `b`, which leaves
/// `a * (v1 x v2) = (p2 - p1) x v2`. The magnitude of `a` is the ratio of the norms, its sign
/// is whichever makes both sides agree.
///
/// `tolerance` bounds both the parallel test on `|v1 x v2|` and the residual of the equation
/// above. Parallel lines give [`Error::DegenerateAxes`], skew lines [`Error::NotCoplanar`].
pub fn intersect(
    p1: &Point3<f64>,
    v1: &Vector3<f64>,
    p2: &Point3<f64>,
    v2: &Vector3<f64>,
    tolerance: f64,
) -> Result<Point3<f64>> {
    let v1_v2 = v1.cross(v2);
    let cross_norm = v1_v2.norm();
    if cross_norm < tolerance {
        return Err(Error::DegenerateAxes { cross_norm });
    }

    let other = (p2 - p1).cross(v2);
    let a = other.norm() / cross_norm;

    let same_sense = (v1_v2 * a - other).norm();
    let a = if same_sense < tolerance {
        a
    } else {
        let opposite_sense = (v1_v2 * a + other).norm();
        if opposite_sense >= tolerance {
            return Err(Error::NotCoplanar {
                residual: same_sense.min(opposite_sense),
            });
        }
        -a
    };

    Ok(p1 + v1 * a)
}
