use crate::math;
use crate::{CoordinateNum, Point2, Triangle, TriangulationError};

/// Determines how a triangulation evaluates its two basic geometric predicates.
///
/// The Bowyer-Watson algorithm asks two questions over and over: are three points
/// collinear (which would create a degenerate triangle) and is a point contained in the
/// circumcircle of a triangle? These can be answered with plain floating point arithmetic
/// or with adaptive precision arithmetic that never suffers from rounding errors.
///
/// Both kernels treat points exactly on a circumcircle as contained.
pub trait Kernel {
    /// Returns `true` if the three points are collinear.
    fn is_flat_angle<S: CoordinateNum>(p1: Point2<S>, p2: Point2<S>, p3: Point2<S>) -> bool;

    /// Returns `true` if `point` lies inside or on the circumcircle of `triangle`.
    fn contained_in_circumcircle<S: CoordinateNum>(
        triangle: &Triangle<S>,
        point: Point2<S>,
    ) -> Result<bool, TriangulationError>;
}

/// Evaluates all predicates with plain floating point arithmetic in the coordinate type.
///
/// The circumcircle is computed explicitly (center and radius) and compared against
/// the squared distance of the query point. Collinearity is tested by comparing the cross
/// product with zero, without tolerance.
///
/// This is the default kernel. Nearly degenerate input may be classified differently
/// for `f32` and `f64` coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrivialKernel {}

impl Kernel for TrivialKernel {
    fn is_flat_angle<S: CoordinateNum>(p1: Point2<S>, p2: Point2<S>, p3: Point2<S>) -> bool {
        math::is_flat_angle(p1, p2, p3)
    }

    fn contained_in_circumcircle<S: CoordinateNum>(
        triangle: &Triangle<S>,
        point: Point2<S>,
    ) -> Result<bool, TriangulationError> {
        triangle.in_circumcircle(point)
    }
}

/// Evaluates all predicates with adaptive precision arithmetic.
///
/// Coordinates are converted into `f64` and passed to the exact `orient2d` and `incircle`
/// predicates of the `robust` crate. The results are exact for any finite input, at the
/// cost of some speed for nearly degenerate configurations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactKernel {}

fn to_robust_coord<S: CoordinateNum>(point: Point2<S>) -> robust::Coord<f64> {
    let point = point.to_f64();
    robust::Coord {
        x: point.x,
        y: point.y,
    }
}

impl Kernel for ExactKernel {
    fn is_flat_angle<S: CoordinateNum>(p1: Point2<S>, p2: Point2<S>, p3: Point2<S>) -> bool {
        robust::orient2d(
            to_robust_coord(p1),
            to_robust_coord(p2),
            to_robust_coord(p3),
        ) == 0.0
    }

    fn contained_in_circumcircle<S: CoordinateNum>(
        triangle: &Triangle<S>,
        point: Point2<S>,
    ) -> Result<bool, TriangulationError> {
        let [v1, v2, v3] = triangle.vertices().map(to_robust_coord);
        let point = to_robust_coord(point);

        let orientation = robust::orient2d(v1, v2, v3);
        if orientation == 0.0 {
            return Err(TriangulationError::inconsistency(
                "circumcircle test on a flat triangle",
            ));
        }
        // incircle is positive for points inside the circle of a ccw triangle
        let determinant = robust::incircle(v1, v2, v3, point);
        Ok(determinant * orientation.signum() >= 0.0)
    }
}
