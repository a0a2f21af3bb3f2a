/// The turn made by three ordered points.
///
/// Created by [math::orientation](crate::math::orientation) or
/// [Triangle::orientation](crate::Triangle::orientation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left turn, assuming a right-handed coordinate system.
    Ccw,
    /// Right turn, assuming a right-handed coordinate system.
    Cw,
    /// All points lie on one line.
    Collinear,
}

impl Orientation {
    /// Classifies twice the signed area of a triangle. Zero of either sign is collinear.
    pub(crate) fn from_signed_area(signed_area: f64) -> Self {
        if signed_area > 0.0 {
            Orientation::Ccw
        } else if signed_area < 0.0 {
            Orientation::Cw
        } else {
            Orientation::Collinear
        }
    }

    /// Returns `true` for a counterclockwise turn.
    pub fn is_ccw(self) -> bool {
        self == Orientation::Ccw
    }

    /// Returns `true` for a clockwise turn.
    pub fn is_cw(self) -> bool {
        self == Orientation::Cw
    }

    /// Returns `true` if the points lie exactly on a common line.
    pub fn is_collinear(self) -> bool {
        self == Orientation::Collinear
    }

    /// Returns the orientation of the same points in reversed order.
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Ccw => Orientation::Cw,
            Orientation::Cw => Orientation::Ccw,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Orientation;

    #[test]
    fn test_from_signed_area() {
        assert_eq!(Orientation::from_signed_area(2.0), Orientation::Ccw);
        assert_eq!(Orientation::from_signed_area(-0.5), Orientation::Cw);
        assert_eq!(Orientation::from_signed_area(0.0), Orientation::Collinear);
        assert_eq!(Orientation::from_signed_area(-0.0), Orientation::Collinear);
        assert_eq!(Orientation::from_signed_area(f64::MIN_POSITIVE), Orientation::Ccw);
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Orientation::Ccw.reversed(), Orientation::Cw);
        assert_eq!(Orientation::Cw.reversed(), Orientation::Ccw);
        assert!(Orientation::Collinear.reversed().is_collinear());
    }
}
