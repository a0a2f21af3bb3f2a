use thiserror::Error;

/// The error type returned by triangulations and fallible geometric constructors.
///
/// None of these errors can be recovered from within a call: a failed triangulation
/// never yields a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TriangulationError {
    /// The input cannot be triangulated, e.g. because it contains fewer than three points
    /// or a coordinate that is NaN or infinite.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Describes which requirement was violated.
        reason: &'static str,
    },

    /// Three points passed to a triangle constructor are exactly collinear.
    #[error("degenerate triangle: the three vertices are collinear")]
    DegenerateTriangle,

    /// An internal invariant of the triangulation was violated.
    ///
    /// This indicates a predicate failing due to floating point rounding rather than bad
    /// input. Switching to [ExactKernel](crate::ExactKernel) or to a wider coordinate type
    /// may help.
    #[error("internal inconsistency: {reason}")]
    InternalInconsistency {
        /// Describes which invariant was violated.
        reason: &'static str,
    },
}

impl TriangulationError {
    pub(crate) fn invalid_input(reason: &'static str) -> Self {
        TriangulationError::InvalidInput { reason }
    }

    pub(crate) fn inconsistency(reason: &'static str) -> Self {
        tracing::warn!(reason, "triangulation invariant violated");
        TriangulationError::InternalInconsistency { reason }
    }
}

#[cfg(test)]
mod test {
    use super::TriangulationError;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TriangulationError::invalid_input("at least three points are required").to_string(),
            "invalid input: at least three points are required"
        );
        assert_eq!(
            TriangulationError::DegenerateTriangle.to_string(),
            "degenerate triangle: the three vertices are collinear"
        );
        assert_eq!(
            TriangulationError::inconsistency("too many triangles").to_string(),
            "internal inconsistency: too many triangles"
        );
    }
}
