//! Polygon geometry trait.

use crate::cartesian::{CartesianPoint2d, Rect};
use crate::contour::Contour;

/// Area bounded by one outer contour (the shell) with zero or more inner contours (holes) cut out of it.
///
/// Holes lie inside the shell and do not overlap each other.
pub trait Polygon {
    /// Type of the contours.
    type Contour: Contour;

    /// The shell.
    fn outer_contour(&self) -> &Self::Contour;

    /// The holes.
    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour>;

    /// Iterates over all contours, the shell first.
    fn iter_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        std::iter::once(self.outer_contour()).chain(self.inner_contours())
    }

    /// Bounding rectangle of the shell.
    fn bounding_rectangle(&self) -> Option<Rect<<<Self::Contour as Contour>::Point as CartesianPoint2d>::Num>>
    where
        <Self::Contour as Contour>::Point: CartesianPoint2d,
    {
        self.outer_contour().bounding_rectangle()
    }
}
