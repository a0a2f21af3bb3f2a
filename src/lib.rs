//! # Bowyer
//! Bowyer computes [Delaunay triangulations](https://en.wikipedia.org/wiki/Delaunay_triangulation)
//! of planar point sets using the incremental
//! [Bowyer-Watson algorithm](https://en.wikipedia.org/wiki/Bowyer%E2%80%93Watson_algorithm).
//!
//! # Features
//! * Triangulates any set of at least three distinct points into triangles covering their
//!   convex hull. No input point lies strictly inside the circumcircle of any triangle.
//! * Supports `f32` and `f64` coordinates. The `single-precision` feature switches the
//!   default [Scalar] type to `f32`.
//! * Geometric predicates can be evaluated with plain floating point arithmetic
//!   ([TrivialKernel]) or with adaptive precision arithmetic ([ExactKernel]).
//! * Serialization of all primitives via `serde` (requires the `serde` feature).
//!
//! # Example
//! ```
//! use bowyer::{triangulate, Point2, TriangulationError};
//!
//! fn main() -> Result<(), TriangulationError> {
//!     let points = [
//!         Point2::new(0.0, 0.0),
//!         Point2::new(2.0, 0.0),
//!         Point2::new(1.0, 2.0),
//!         Point2::new(1.0, 0.5),
//!     ];
//!     let triangles = triangulate(&points)?;
//!     assert_eq!(triangles.len(), 3);
//!
//!     for triangle in &triangles {
//!         println!("{}", triangle);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Non-goals
//! Constrained triangulations, removal or insertion of points after a triangulation has
//! been created and the construction of Voronoi diagrams are not supported.

#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(missing_docs)]

mod bowyer_watson;
mod error;
mod kernels;
pub mod math;
mod orientation;
mod point;
mod primitives;

#[cfg(test)]
mod test_utilities;

pub use crate::bowyer_watson::{
    bounding_box, super_triangle, triangulate, triangulate_indices, BowyerWatson,
    DEFAULT_CONVEX_MULTIPLIER,
};
pub use crate::error::TriangulationError;
pub use crate::kernels::{ExactKernel, Kernel, TrivialKernel};
pub use crate::orientation::Orientation;
pub use crate::point::{CoordinateNum, Point2, Scalar};
pub use crate::primitives::{Circle, Edge, Triangle};
