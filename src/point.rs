use core::fmt;

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coordinate type that can be used with a triangulation.
///
/// All predicates are evaluated in this type. Exact predicates (see
/// [ExactKernel](crate::ExactKernel)) convert into `f64` first.
///
/// This type should usually be either `f32` or `f64`.
pub trait CoordinateNum:
    Float + PartialOrd + Into<f64> + From<f32> + Copy + fmt::Debug + fmt::Display
{
}

impl<T> CoordinateNum for T where
    T: Float + PartialOrd + Into<f64> + From<f32> + Copy + fmt::Debug + fmt::Display
{
}

/// The crate wide default coordinate type.
///
/// This is `f64` unless the `single-precision` feature is enabled. The width is fixed at
/// compile time and therefore identical for every triangulation run by a process.
#[cfg(not(feature = "single-precision"))]
pub type Scalar = f64;

/// The crate wide default coordinate type.
///
/// This is `f32` since the `single-precision` feature is enabled.
#[cfg(feature = "single-precision")]
pub type Scalar = f32;

/// A two dimensional point.
///
/// Equality compares coordinates only.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Point2<S> {
    /// The point's x coordinate
    pub x: S,
    /// The point's y coordinate
    pub y: S,
}

impl<S> Point2<S> {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Point2 { x, y }
    }
}

impl<S: CoordinateNum> Point2<S> {
    /// Returns the squared distance of this point and another point.
    #[inline]
    pub fn distance_2(&self, other: Self) -> S {
        self.sub(other).length2()
    }

    /// Returns the euclidean distance of this point and another point.
    #[inline]
    pub fn distance(&self, other: Self) -> S {
        self.distance_2(other).sqrt()
    }

    /// Returns `true` if this point lies inside or exactly on the circle around `center`
    /// with the given `radius`.
    pub fn is_in_circle(&self, center: Self, radius: S) -> bool {
        self.distance_2(center) <= radius * radius
    }

    /// Returns `true` if both coordinates are neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) fn to_f64(self) -> Point2<f64> {
        Point2::new(self.x.into(), self.y.into())
    }

    pub(crate) fn mul(&self, factor: S) -> Self {
        Point2 {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub(crate) fn add(&self, other: Self) -> Self {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub(crate) fn length2(&self) -> S {
        self.x * self.x + self.y * self.y
    }

    pub(crate) fn sub(&self, other: Self) -> Self {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    pub(crate) fn dot(&self, other: Self) -> S {
        self.x * other.x + self.y * other.y
    }
}

impl<S: fmt::Display> fmt::Display for Point2<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<S: CoordinateNum> From<Point2<S>> for [S; 2] {
    #[inline]
    fn from(point: Point2<S>) -> Self {
        [point.x, point.y]
    }
}

impl<S: CoordinateNum> From<Point2<S>> for (S, S) {
    #[inline]
    fn from(point: Point2<S>) -> (S, S) {
        (point.x, point.y)
    }
}

impl<S: CoordinateNum> From<[S; 2]> for Point2<S> {
    #[inline]
    fn from(source: [S; 2]) -> Self {
        Self::new(source[0], source[1])
    }
}

impl<S: CoordinateNum> From<(S, S)> for Point2<S> {
    #[inline]
    fn from(source: (S, S)) -> Self {
        Self::new(source.0, source.1)
    }
}
