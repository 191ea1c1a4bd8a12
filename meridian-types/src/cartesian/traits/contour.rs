use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::cartesian::traits::cartesian_point::CartesianPoint2d;
use crate::contour::{ClosedContour, Contour};

/// Ring with cartesian points. Implemented for every [`ClosedContour`] of [`CartesianPoint2d`] points.
pub trait CartesianClosedContour {
    /// Type of the points.
    type Point: CartesianPoint2d;

    /// Signed area of the ring (shoelace formula): positive for counterclockwise rings, negative for clockwise ones.
    fn area_signed(&self) -> <Self::Point as CartesianPoint2d>::Num;

    /// Winding of the ring derived from the sign of its area. Rings with zero area have [`Winding::Unknown`]
    /// winding.
    fn winding(&self) -> Winding;
}

impl<P, T> CartesianClosedContour for T
where
    P: CartesianPoint2d,
    T: ClosedContour<Point = P>,
{
    type Point = P;

    fn area_signed(&self) -> P::Num {
        let mut points = self.iter_points_closing();
        let Some(first) = points.next() else {
            return P::Num::zero();
        };

        let (doubled, _) = points.fold((P::Num::zero(), first), |(sum, prev), p| {
            (sum + prev.x() * p.y() - p.x() * prev.y(), p)
        });

        doubled / (P::Num::one() + P::Num::one())
    }

    fn winding(&self) -> Winding {
        let area = self.area_signed();
        if area > P::Num::zero() {
            Winding::CounterClockwise
        } else if area < P::Num::zero() {
            Winding::Clockwise
        } else {
            Winding::Unknown
        }
    }
}

/// Direction in which the points of a ring go, with the Y axis pointing up.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Winding {
    /// Clockwise.
    Clockwise,
    /// Counterclockwise.
    CounterClockwise,
    /// Not known: algorithms infer it from the coordinates.
    #[default]
    Unknown,
}

impl Winding {
    /// The opposite winding. `Unknown` is its own opposite.
    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
            Self::Unknown => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::impls;

    fn ring(points: &[(f64, f64)]) -> impls::ClosedContour<Point2d> {
        points.iter().map(|&(x, y)| Point2d::new(x, y)).collect()
    }

    #[test]
    fn area_sign_follows_winding() {
        let ccw = ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 3.0), (0.0, 3.0)]);
        assert_eq!(ccw.area_signed(), 6.0);
        assert_eq!(ccw.winding(), Winding::CounterClockwise);

        let cw = ccw.reversed();
        assert_eq!(cw.area_signed(), -6.0);
        assert_eq!(cw.winding(), Winding::Clockwise);
    }

    #[test]
    fn degenerate_rings_have_unknown_winding() {
        assert_eq!(ring(&[]).area_signed(), 0.0);
        assert_eq!(ring(&[(1.0, 1.0)]).winding(), Winding::Unknown);
        assert_eq!(
            ring(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).winding(),
            Winding::Unknown
        );
    }

    #[test]
    fn reversed_winding() {
        assert_eq!(Winding::Clockwise.reversed(), Winding::CounterClockwise);
        assert_eq!(Winding::Unknown.reversed(), Winding::Unknown);
    }
}
