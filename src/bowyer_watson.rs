use core::marker::PhantomData;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::{CoordinateNum, Kernel, Point2, Triangle, TriangulationError, TrivialKernel};

/// Default scale of the super-triangle relative to the bounding box of the input.
pub const DEFAULT_CONVEX_MULTIPLIER: f64 = 1000.0;

/// The number of triangles may never exceed this multiple of the input size.
const MAX_TRIANGLES_PER_POINT: usize = 4;

/// Computes Delaunay triangulations with the Bowyer-Watson algorithm.
///
/// Points are inserted one by one into an initial triangle (the *super-triangle*) that is
/// large enough to contain all of them. Each insertion removes every triangle whose
/// circumcircle contains the new point and connects the boundary of the resulting cavity
/// to it. Finally, all triangles touching a super-triangle vertex are discarded.
///
/// The type parameter selects the [Kernel] used for geometric predicates.
///
/// # Example
/// ```
/// use bowyer::{BowyerWatson, ExactKernel, Point2, TriangulationError};
///
/// fn main() -> Result<(), TriangulationError> {
///     let points = [
///         Point2::new(0.0, 0.0),
///         Point2::new(1.0, 0.0),
///         Point2::new(1.0, 1.0),
///         Point2::new(0.0, 1.0),
///         Point2::new(0.4, 0.6),
///     ];
///
///     let triangulator = BowyerWatson::<ExactKernel>::new().with_convex_multiplier(100.0);
///     let triangles = triangulator.triangulate(&points)?;
///     assert_eq!(triangles.len(), 4);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BowyerWatson<K = TrivialKernel> {
    convex_multiplier: f64,
    kernel: PhantomData<K>,
}

impl<K> Default for BowyerWatson<K> {
    fn default() -> Self {
        BowyerWatson {
            convex_multiplier: DEFAULT_CONVEX_MULTIPLIER,
            kernel: PhantomData,
        }
    }
}

/// A triangle of the working set, referring to vertices by their index.
///
/// Indices below the number of input points refer to input points, the three indices
/// after them to the super-triangle.
#[derive(Debug, Clone, Copy)]
struct IndexedTriangle<S> {
    indices: [usize; 3],
    triangle: Triangle<S>,
}

impl<K: Kernel> BowyerWatson<K> {
    /// Creates a new triangulator using [DEFAULT_CONVEX_MULTIPLIER].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scale of the super-triangle relative to the span of the input's bounding
    /// box.
    ///
    /// Larger values make it less likely that triangles on the convex hull are lost, at
    /// the cost of precision. The value is validated when a triangulation starts.
    pub fn with_convex_multiplier(mut self, convex_multiplier: f64) -> Self {
        self.convex_multiplier = convex_multiplier;
        self
    }

    /// Returns the scale of the super-triangle.
    pub fn convex_multiplier(&self) -> f64 {
        self.convex_multiplier
    }

    /// Triangulates the given points.
    ///
    /// Returns the triangles of the Delaunay triangulation covering the convex hull of
    /// `points`. If more than three points are given, all triangles are ordered
    /// counterclockwise. Exactly three points are returned as a single triangle in their
    /// input order.
    ///
    /// The input is not modified. Points are expected to be distinct.
    ///
    /// More than three points that are all collinear have no triangulation. Every
    /// triangle touches the super-triangle then, so the result is an empty `Vec` rather
    /// than an error.
    pub fn triangulate<S: CoordinateNum>(
        &self,
        points: &[Point2<S>],
    ) -> Result<Vec<Triangle<S>>, TriangulationError> {
        Ok(self
            .run(points)?
            .into_iter()
            .map(|indexed| indexed.triangle)
            .collect())
    }

    /// Triangulates the given points and returns each triangle as indices into `points`.
    pub fn triangulate_indices<S: CoordinateNum>(
        &self,
        points: &[Point2<S>],
    ) -> Result<Vec<[usize; 3]>, TriangulationError> {
        Ok(self
            .run(points)?
            .into_iter()
            .map(|indexed| indexed.indices)
            .collect())
    }

    fn run<S: CoordinateNum>(
        &self,
        points: &[Point2<S>],
    ) -> Result<Vec<IndexedTriangle<S>>, TriangulationError> {
        validate_input(points)?;
        let num_points = points.len();

        if num_points == 3 {
            let [p1, p2, p3] = [points[0], points[1], points[2]];
            if K::is_flat_angle(p1, p2, p3) {
                return Err(TriangulationError::DegenerateTriangle);
            }
            return Ok(vec![IndexedTriangle {
                indices: [0, 1, 2],
                triangle: Triangle::new_unchecked(p1, p2, p3),
            }]);
        }

        tracing::debug!(
            num_points,
            convex_multiplier = self.convex_multiplier,
            "starting Bowyer-Watson triangulation"
        );

        let mut vertices = points.to_vec();
        vertices.extend(super_triangle(points, self.convex_multiplier)?);

        let super_indices = [num_points, num_points + 1, num_points + 2];
        let mut triangles = vec![create_triangle::<K, S>(&vertices, super_indices)?];
        let max_triangles = MAX_TRIANGLES_PER_POINT * num_points;

        for index in 0..num_points {
            insert_point::<K, S>(&vertices, index, &mut triangles)?;
            if triangles.len() > max_triangles {
                return Err(TriangulationError::inconsistency(
                    "triangle count exceeds four times the number of points",
                ));
            }
        }

        triangles.retain(|triangle| triangle.indices.iter().all(|&index| index < num_points));

        tracing::debug!(
            num_points,
            num_triangles = triangles.len(),
            "finished Bowyer-Watson triangulation"
        );
        Ok(triangles)
    }
}

/// Triangulates `points` with the default settings.
///
/// This is a shortcut for `BowyerWatson::<TrivialKernel>::new().triangulate(points)`.
///
/// # Example
/// ```
/// use bowyer::{triangulate, Point2};
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// let triangles = triangulate(&square).unwrap();
/// assert_eq!(triangles.len(), 2);
/// ```
pub fn triangulate<S: CoordinateNum>(
    points: &[Point2<S>],
) -> Result<Vec<Triangle<S>>, TriangulationError> {
    BowyerWatson::<TrivialKernel>::new().triangulate(points)
}

/// Triangulates `points` with the default settings and returns index triples.
///
/// *See [BowyerWatson::triangulate_indices]*
pub fn triangulate_indices<S: CoordinateNum>(
    points: &[Point2<S>],
) -> Result<Vec<[usize; 3]>, TriangulationError> {
    BowyerWatson::<TrivialKernel>::new().triangulate_indices(points)
}

fn validate_input<S: CoordinateNum>(points: &[Point2<S>]) -> Result<(), TriangulationError> {
    if points.len() < 3 {
        return Err(TriangulationError::invalid_input(
            "at least three points are required",
        ));
    }
    if !points.iter().all(Point2::is_finite) {
        return Err(TriangulationError::invalid_input(
            "coordinates must not be NaN or infinite",
        ));
    }
    Ok(())
}

/// Returns the lower left and upper right corner of the smallest axis aligned box
/// containing all points, or `None` if `points` is empty.
pub fn bounding_box<S: CoordinateNum>(points: &[Point2<S>]) -> Option<(Point2<S>, Point2<S>)> {
    let (first, rest) = points.split_first()?;
    let mut min = *first;
    let mut max = *first;
    for point in rest {
        min = Point2::new(min.x.min(point.x), min.y.min(point.y));
        max = Point2::new(max.x.max(point.x), max.y.max(point.y));
    }
    Some((min, max))
}

/// Returns the vertices of a triangle strictly containing the bounding box of `points`.
///
/// The larger side of the bounding box is scaled by `convex_multiplier`. If all points
/// coincide, the multiplier itself is used as scale.
pub fn super_triangle<S: CoordinateNum>(
    points: &[Point2<S>],
    convex_multiplier: f64,
) -> Result<[Point2<S>; 3], TriangulationError> {
    if !(convex_multiplier.is_finite() && convex_multiplier > 0.0) {
        return Err(TriangulationError::invalid_input(
            "the convex multiplier must be positive and finite",
        ));
    }
    let (min, max) = bounding_box(points)
        .ok_or(TriangulationError::invalid_input("cannot enclose an empty point set"))?;
    let multiplier: S = num_traits::cast(convex_multiplier).ok_or(
        TriangulationError::invalid_input("the convex multiplier exceeds the coordinate range"),
    )?;

    let span = max.sub(min);
    let mut delta_max = span.x.max(span.y) * multiplier;
    if delta_max == S::zero() {
        delta_max = multiplier;
    }
    if !delta_max.is_finite() {
        return Err(TriangulationError::invalid_input(
            "the super-triangle exceeds the coordinate range",
        ));
    }

    let half: S = 0.5f32.into();
    let two = S::one() + S::one();
    let mid = min.add(max).mul(half);

    Ok([
        Point2::new(mid.x - two * delta_max, mid.y - delta_max),
        Point2::new(mid.x, mid.y + two * delta_max),
        Point2::new(mid.x + two * delta_max, mid.y - delta_max),
    ])
}

/// Creates a counterclockwise triangle from three vertex indices.
fn create_triangle<K: Kernel, S: CoordinateNum>(
    vertices: &[Point2<S>],
    indices: [usize; 3],
) -> Result<IndexedTriangle<S>, TriangulationError> {
    let [i1, i2, i3] = indices;
    let (p1, p2, p3) = (vertices[i1], vertices[i2], vertices[i3]);
    if K::is_flat_angle(p1, p2, p3) {
        return Err(TriangulationError::DegenerateTriangle);
    }

    let indexed = if crate::math::orientation(p1, p2, p3).is_cw() {
        IndexedTriangle {
            indices: [i1, i3, i2],
            triangle: Triangle::new_unchecked(p1, p3, p2),
        }
    } else {
        IndexedTriangle {
            indices,
            triangle: Triangle::new_unchecked(p1, p2, p3),
        }
    };
    Ok(indexed)
}

/// Inserts `vertices[index]` into the triangulation.
fn insert_point<K: Kernel, S: CoordinateNum>(
    vertices: &[Point2<S>],
    index: usize,
    triangles: &mut Vec<IndexedTriangle<S>>,
) -> Result<(), TriangulationError> {
    let point = vertices[index];

    let mut cavity: SmallVec<[usize; 16]> = SmallVec::new();
    for (slot, triangle) in triangles.iter().enumerate() {
        if K::contained_in_circumcircle(&triangle.triangle, point)? {
            cavity.push(slot);
        }
    }

    let mut edges = Vec::with_capacity(cavity.len() * 3);
    for &slot in &cavity {
        let [i1, i2, i3] = triangles[slot].indices;
        edges.extend([[i1, i2], [i2, i3], [i3, i1]]);
    }
    let boundary = boundary_edges(&edges)?;

    // Slots were collected in increasing order, removing from the back keeps them valid
    for &slot in cavity.iter().rev() {
        triangles.swap_remove(slot);
    }

    tracing::trace!(
        index,
        cavity_size = cavity.len(),
        boundary_size = boundary.len(),
        "inserted point"
    );

    for [from, to] in boundary {
        triangles.push(create_triangle::<K, S>(vertices, [from, to, index])?);
    }
    Ok(())
}

/// Returns the edges that occur exactly once, in their original order.
///
/// Edges are compared irrespective of their direction. An edge shared by two triangles
/// of the cavity lies in its interior and is dropped.
fn boundary_edges(edges: &[[usize; 2]]) -> Result<Vec<[usize; 2]>, TriangulationError> {
    let key = |[from, to]: [usize; 2]| (from.min(to), from.max(to));

    let mut counts: HashMap<(usize, usize), u8> = HashMap::with_capacity(edges.len());
    for &edge in edges {
        let count = counts.entry(key(edge)).or_insert(0);
        *count += 1;
        if *count > 2 {
            return Err(TriangulationError::inconsistency(
                "an edge is shared by more than two cavity triangles",
            ));
        }
    }

    Ok(edges
        .iter()
        .copied()
        .filter(|&edge| counts.get(&key(edge)) == Some(&1))
        .collect())
}
