//! Geometric predicates and measures used by the triangulation.
//!
//! All functions evaluate plain floating point expressions in the coordinate type `S`.
//! Results for nearly degenerate configurations therefore depend on the chosen precision.
//! See [ExactKernel](crate::ExactKernel) for adaptive precision alternatives of the two
//! predicates the triangulation relies on.

use crate::{Circle, CoordinateNum, Orientation, Point2, TriangulationError};

/// Returns the cross product of the vectors `p1 -> p2` and `p2 -> p3`.
///
/// The result is positive if the points make a counterclockwise turn, negative for a
/// clockwise turn and zero if they are collinear. Its magnitude equals twice the area of
/// the triangle spanned by the three points.
///
/// # Example
/// ```
/// use bowyer::{math::cross_product, Point2};
///
/// let origin = Point2::new(0.0, 0.0);
/// assert!(cross_product(origin, Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)) > 0.0);
/// assert!(cross_product(origin, Point2::new(1.0, 1.0), Point2::new(1.0, 0.0)) < 0.0);
/// ```
pub fn cross_product<S: CoordinateNum>(p1: Point2<S>, p2: Point2<S>, p3: Point2<S>) -> S {
    let first = p2.sub(p1);
    let second = p3.sub(p2);
    first.x * second.y - first.y * second.x
}

/// Returns `true` if the three points are exactly collinear.
///
/// The test compares the cross product with zero without any tolerance.
pub fn is_flat_angle<S: CoordinateNum>(p1: Point2<S>, p2: Point2<S>, p3: Point2<S>) -> bool {
    cross_product(p1, p2, p3) == S::zero()
}

/// Returns the turn direction of three points.
pub fn orientation<S: CoordinateNum>(p1: Point2<S>, p2: Point2<S>, p3: Point2<S>) -> Orientation {
    Orientation::from_signed_area(cross_product(p1, p2, p3).into())
}

/// Returns four times the area of a triangle with the given side lengths.
///
/// Evaluates `sqrt((a+b+c)(a+b-c)(a-b+c)(-a+b+c))`. The factors are rearranged after sorting
/// the side lengths, which keeps the product accurate for needle shaped triangles.
///
/// Side lengths violating the triangle inequality yield
/// [TriangulationError::InternalInconsistency].
pub fn quat_cross<S: CoordinateNum>(a: S, b: S, c: S) -> Result<S, TriangulationError> {
    let mut sides = [a, b, c];
    sides.sort_unstable_by(|l, r| r.partial_cmp(l).unwrap_or(core::cmp::Ordering::Equal));
    let [a, b, c] = sides;

    let radicand = (a + (b + c)) * (c - (a - b)) * (c + (a - b)) * (a + (b - c));
    if radicand.is_nan() || radicand < S::zero() {
        return Err(TriangulationError::inconsistency(
            "side lengths violate the triangle inequality",
        ));
    }
    Ok(radicand.sqrt())
}

/// Returns the center of the circle passing through all three positions.
///
/// Collinear positions result in [TriangulationError::InternalInconsistency], triangles
/// are expected to reject them upon construction.
pub fn circumcenter<S: CoordinateNum>(
    positions: [Point2<S>; 3],
) -> Result<Point2<S>, TriangulationError> {
    let [v0, v1, v2] = positions;
    let b = v1.sub(v0);
    let c = v2.sub(v0);

    let one = S::one();
    let two = one + one;
    let d = two * (b.x * c.y - c.x * b.y);
    if d == S::zero() {
        return Err(TriangulationError::inconsistency(
            "circumcenter of a flat triangle requested",
        ));
    }
    let len_b = b.dot(b);
    let len_c = c.dot(c);
    let d_inv: S = one / d;

    let x = (len_b * c.y - len_c * b.y) * d_inv;
    let y = (-len_b * c.x + len_c * b.x) * d_inv;
    Ok(Point2::new(x, y).add(v0))
}

fn side_lengths<S: CoordinateNum>(positions: [Point2<S>; 3]) -> [S; 3] {
    let [v0, v1, v2] = positions;
    [v0.distance(v1), v1.distance(v2), v2.distance(v0)]
}

/// Returns the radius of the circle passing through all three positions.
pub fn circumradius<S: CoordinateNum>(positions: [Point2<S>; 3]) -> Result<S, TriangulationError> {
    let [a, b, c] = side_lengths(positions);
    let four_times_area = quat_cross(a, b, c)?;
    if four_times_area == S::zero() {
        return Err(TriangulationError::inconsistency(
            "circumradius of a flat triangle requested",
        ));
    }
    Ok(a * b * c / four_times_area)
}

/// Returns the circle passing through all three positions.
pub fn circumcircle<S: CoordinateNum>(
    positions: [Point2<S>; 3],
) -> Result<Circle<S>, TriangulationError> {
    Ok(Circle::new(
        circumcenter(positions)?,
        circumradius(positions)?,
    ))
}

/// Returns the (unsigned) area of a triangle.
pub fn triangle_area<S: CoordinateNum>(
    positions: [Point2<S>; 3],
) -> Result<S, TriangulationError> {
    let [a, b, c] = side_lengths(positions);
    let quarter: S = 0.25f32.into();
    Ok(quat_cross(a, b, c)? * quarter)
}

/// Returns `true` if `point` lies inside or on the circle around `center` with `radius`.
pub fn is_in_circle<S: CoordinateNum>(point: Point2<S>, center: Point2<S>, radius: S) -> bool {
    point.is_in_circle(center, radius)
}
