use core::fmt;

use crate::math;
use crate::{CoordinateNum, Orientation, Point2, TriangulationError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An undirected edge defined by its two end points.
///
/// Two edges are equal if they connect the same points, regardless of direction:
/// ```
/// use bowyer::{Edge, Point2};
///
/// let a = Point2::new(0.0, 0.0);
/// let b = Point2::new(1.0, 1.0);
/// assert_eq!(Edge::new(a, b), Edge::new(b, a));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Edge<S> {
    /// The edge's first end point.
    pub p1: Point2<S>,
    /// The edge's second end point.
    pub p2: Point2<S>,
}

impl<S> Edge<S> {
    /// Creates a new edge between `p1` and `p2`.
    pub const fn new(p1: Point2<S>, p2: Point2<S>) -> Self {
        Edge { p1, p2 }
    }
}

impl<S: CoordinateNum> Edge<S> {
    /// Returns the same edge with swapped end points.
    pub fn reversed(&self) -> Self {
        Edge::new(self.p2, self.p1)
    }

    /// Returns the squared length of this edge.
    pub fn length_2(&self) -> S {
        self.p1.distance_2(self.p2)
    }

    /// Returns the length of this edge.
    pub fn length(&self) -> S {
        self.p1.distance(self.p2)
    }

    /// Returns the point halfway between both end points.
    pub fn midpoint(&self) -> Point2<S> {
        let half: S = 0.5f32.into();
        self.p1.add(self.p2).mul(half)
    }

    /// Returns `true` if both edges have at least one end point in common.
    pub fn shares_vertex(&self, other: &Self) -> bool {
        self.p1 == other.p1 || self.p1 == other.p2 || self.p2 == other.p1 || self.p2 == other.p2
    }
}

impl<S: PartialEq> PartialEq for Edge<S> {
    fn eq(&self, other: &Self) -> bool {
        (self.p1 == other.p1 && self.p2 == other.p2) || (self.p1 == other.p2 && self.p2 == other.p1)
    }
}

impl<S: fmt::Display> fmt::Display for Edge<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.p1, self.p2)
    }
}

/// A circle, usually the circumcircle of a [Triangle].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Circle<S> {
    /// The circle's center
    pub center: Point2<S>,
    /// The circle's radius
    pub radius: S,
}

impl<S> Circle<S> {
    /// Creates a new circle.
    pub const fn new(center: Point2<S>, radius: S) -> Self {
        Circle { center, radius }
    }
}

impl<S: CoordinateNum> Circle<S> {
    /// Returns `true` if `point` lies inside or exactly on this circle.
    pub fn contains(&self, point: Point2<S>) -> bool {
        point.is_in_circle(self.center, self.radius)
    }
}

/// A non-degenerate triangle.
///
/// The vertices are kept in the order given to [Triangle::new]. The edges are derived
/// from them: `e1 = p1p2`, `e2 = p2p3` and `e3 = p3p1`.
///
/// Two triangles are equal if they consist of the same three vertices, regardless of
/// their order.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Triangle<S> {
    p1: Point2<S>,
    p2: Point2<S>,
    p3: Point2<S>,
    e1: Edge<S>,
    e2: Edge<S>,
    e3: Edge<S>,
}

impl<S: CoordinateNum> Triangle<S> {
    /// Creates a new triangle.
    ///
    /// Returns [TriangulationError::DegenerateTriangle] if the vertices are exactly
    /// collinear.
    ///
    /// # Example
    /// ```
    /// use bowyer::{Point2, Triangle, TriangulationError};
    ///
    /// let triangle = Triangle::new(
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(1.0, 0.0),
    ///     Point2::new(0.0, 1.0),
    /// );
    /// assert!(triangle.is_ok());
    ///
    /// let flat = Triangle::new(
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(1.0, 0.0),
    ///     Point2::new(2.0, 0.0),
    /// );
    /// assert_eq!(flat, Err(TriangulationError::DegenerateTriangle));
    /// ```
    pub fn new(p1: Point2<S>, p2: Point2<S>, p3: Point2<S>) -> Result<Self, TriangulationError> {
        if math::is_flat_angle(p1, p2, p3) {
            return Err(TriangulationError::DegenerateTriangle);
        }
        Ok(Self::new_unchecked(p1, p2, p3))
    }

    /// Creates a triangle whose vertices have already been checked by a kernel.
    pub(crate) fn new_unchecked(p1: Point2<S>, p2: Point2<S>, p3: Point2<S>) -> Self {
        Triangle {
            p1,
            p2,
            p3,
            e1: Edge::new(p1, p2),
            e2: Edge::new(p2, p3),
            e3: Edge::new(p3, p1),
        }
    }

    /// Returns the three vertices in construction order.
    pub fn vertices(&self) -> [Point2<S>; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Returns the edges `p1p2`, `p2p3` and `p3p1`.
    pub fn edges(&self) -> [Edge<S>; 3] {
        [self.e1, self.e2, self.e3]
    }

    /// Returns `true` if `point` is one of this triangle's vertices.
    pub fn contains_vertex(&self, point: Point2<S>) -> bool {
        self.p1 == point || self.p2 == point || self.p3 == point
    }

    /// Returns the turn direction of the vertices.
    pub fn orientation(&self) -> Orientation {
        math::orientation(self.p1, self.p2, self.p3)
    }

    /// Returns `true` if the vertices are ordered counterclockwise.
    pub fn is_ccw(&self) -> bool {
        self.orientation().is_ccw()
    }

    /// Returns `true` if the vertices are ordered clockwise.
    pub fn is_cw(&self) -> bool {
        self.orientation().is_cw()
    }

    /// Returns the arithmetic mean of the three vertices.
    pub fn centroid(&self) -> Point2<S> {
        let three: S = 3.0f32.into();
        let sum = self.p1.add(self.p2).add(self.p3);
        Point2::new(sum.x / three, sum.y / three)
    }

    /// Returns the triangle's area.
    pub fn area(&self) -> Result<S, TriangulationError> {
        math::triangle_area(self.vertices())
    }

    /// Returns the center of this triangle's circumcircle.
    pub fn circumcenter(&self) -> Result<Point2<S>, TriangulationError> {
        math::circumcenter(self.vertices())
    }

    /// Returns the radius of this triangle's circumcircle.
    pub fn circumradius(&self) -> Result<S, TriangulationError> {
        math::circumradius(self.vertices())
    }

    /// Returns the circle passing through all three vertices.
    pub fn circumcircle(&self) -> Result<Circle<S>, TriangulationError> {
        math::circumcircle(self.vertices())
    }

    /// Returns `true` if `point` lies inside or on this triangle's circumcircle.
    pub fn in_circumcircle(&self, point: Point2<S>) -> Result<bool, TriangulationError> {
        Ok(self.circumcircle()?.contains(point))
    }
}

impl<S: CoordinateNum> PartialEq for Triangle<S> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices()
            .iter()
            .all(|vertex| other.contains_vertex(*vertex))
    }
}

impl<S: fmt::Display> fmt::Display for Triangle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle({}, {}, {})", self.p1, self.p2, self.p3)
    }
}

#[cfg(test)]
mod test {
    use super::{Circle, Edge, Triangle};
    use crate::{Point2, TriangulationError};
    use approx::assert_relative_eq;

    #[test]
    fn test_edge_equality() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(1.0, 0.0);
        assert_eq!(Edge::new(a, b), Edge::new(b, a));
        assert_eq!(Edge::new(a, b), Edge::new(a, b).reversed());
        assert_ne!(Edge::new(a, b), Edge::new(a, c));
        assert!(Edge::new(a, b).shares_vertex(&Edge::new(c, b)));
        assert!(!Edge::new(a, b).shares_vertex(&Edge::new(c, Point2::new(5.0, 5.0))));
    }

    #[test]
    fn test_edge_measures() {
        let edge = Edge::new(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0));
        assert_relative_eq!(edge.length(), 5.0);
        assert_relative_eq!(edge.length_2(), 25.0);
        assert_eq!(edge.midpoint(), Point2::new(2.5, 3.0));
        assert_eq!(edge.to_string(), "(1, 1) -> (4, 5)");
    }

    #[test]
    fn test_degenerate_triangle() {
        let result = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(3.0, 3.0),
        );
        assert_eq!(result, Err(TriangulationError::DegenerateTriangle));

        let duplicate = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 1.0),
        );
        assert_eq!(duplicate, Err(TriangulationError::DegenerateTriangle));
    }

    #[test]
    fn test_triangle_edges() {
        let [p1, p2, p3] = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        let triangle = Triangle::new(p1, p2, p3).unwrap();
        assert_eq!(triangle.vertices(), [p1, p2, p3]);
        assert_eq!(
            triangle.edges(),
            [Edge::new(p1, p2), Edge::new(p2, p3), Edge::new(p3, p1)]
        );
        assert!(triangle.contains_vertex(p2));
        assert!(!triangle.contains_vertex(Point2::new(1.0, 1.0)));
    }

    #[test]
    fn test_triangle_equality_is_structural() {
        let [p1, p2, p3] = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        let triangle = Triangle::new(p1, p2, p3).unwrap();
        assert_eq!(triangle, Triangle::new(p2, p3, p1).unwrap());
        assert_eq!(triangle, Triangle::new(p3, p2, p1).unwrap());
        assert_ne!(
            triangle,
            Triangle::new(p1, p2, Point2::new(1.0, 1.0)).unwrap()
        );
    }

    #[test]
    fn test_triangle_orientation() {
        let [p1, p2, p3] = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        let ccw = Triangle::new(p1, p2, p3).unwrap();
        let cw = Triangle::new(p1, p3, p2).unwrap();
        assert!(ccw.is_ccw());
        assert!(!ccw.is_cw());
        assert!(cw.is_cw());
        assert_eq!(ccw.orientation(), cw.orientation().reversed());
    }

    #[test]
    fn test_triangle_measures() {
        let triangle = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(0.0, 3.0),
        )
        .unwrap();
        assert_eq!(triangle.centroid(), Point2::new(1.0, 1.0));
        assert_relative_eq!(triangle.area().unwrap(), 4.5, epsilon = 1e-12);

        let circle = triangle.circumcircle().unwrap();
        assert_relative_eq!(circle.center.x, 1.5);
        assert_relative_eq!(circle.center.y, 1.5);
        assert_relative_eq!(circle.radius, 4.5f64.sqrt(), epsilon = 1e-12);
        assert_eq!(triangle.circumcenter(), Ok(circle.center));
    }

    #[test]
    fn test_in_circumcircle() {
        let triangle = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        )
        .unwrap();
        assert_eq!(triangle.in_circumcircle(Point2::new(1.0, 1.0)), Ok(true));
        assert_eq!(triangle.in_circumcircle(Point2::new(1.5, 1.5)), Ok(true));
        assert_eq!(triangle.in_circumcircle(Point2::new(3.0, 3.0)), Ok(false));
        assert_eq!(triangle.in_circumcircle(Point2::new(-1.0, 0.0)), Ok(false));
    }

    #[test]
    fn test_circle_contains() {
        let circle = Circle::new(Point2::new(0.0f32, 0.0), 2.0);
        assert!(circle.contains(Point2::new(2.0, 0.0)));
        assert!(circle.contains(Point2::new(1.0, 1.0)));
        assert!(!circle.contains(Point2::new(2.0, 0.5)));
    }

    #[test]
    fn test_triangle_display() {
        let triangle = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        )
        .unwrap();
        assert_eq!(triangle.to_string(), "Triangle((0, 0), (1, 0), (0, 1))");
    }
}
