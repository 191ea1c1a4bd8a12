//! Contours: sequences of points connected by straight segments.
//!
//! An open contour has a start and an end, like a road. A closed contour is a ring, like a shoreline: its last point
//! is connected back to the first one. A closed contour never stores its first point again at the end, the closing
//! segment is implied. This is the opposite of the OGC `LineString` convention, so conversions from sequences with
//! an explicit closing point must drop it (see [`conversion`](crate::conversion)).
//!
//! Both kinds are represented by the [`Contour`] trait. [`ClosedContour`] is for the places where only a ring makes
//! sense, e.g. the contours of a [`Polygon`](crate::Polygon). Every closed contour is also a `Contour`.

use crate::cartesian::{CartesianPoint2d, Rect};

/// Sequence of points, open or closed. See module level documentation for details.
pub trait Contour {
    /// Type of the points.
    type Point;

    /// Whether the last point is connected to the first one.
    fn is_closed(&self) -> bool;

    /// Iterates over the points. The first point of a closed contour is not repeated at the end.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Iterates over the points, repeating the first point at the end if the contour is closed. Consecutive pairs
    /// of the returned points are the segments of the contour.
    fn iter_points_closing(&self) -> impl Iterator<Item = &'_ Self::Point> {
        let closing = if self.is_closed() {
            self.iter_points().next()
        } else {
            None
        };
        self.iter_points().chain(closing)
    }

    /// Bounding rectangle of the contour, `None` if the contour is empty.
    fn bounding_rectangle(&self) -> Option<Rect<<Self::Point as CartesianPoint2d>::Num>>
    where
        Self::Point: CartesianPoint2d,
    {
        Rect::from_points(self.iter_points())
    }
}

/// Ring of points. See module level documentation for details.
pub trait ClosedContour {
    /// Type of the points.
    type Point;

    /// Iterates over the points. The first point is not repeated at the end.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;
}

impl<P, T: ClosedContour<Point = P>> Contour for T {
    type Point = P;

    fn is_closed(&self) -> bool {
        true
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        ClosedContour::iter_points(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::impls;

    #[test]
    fn closing_point_only_for_rings() {
        let points = vec![Point2d::new(0.0, 0.0), Point2d::new(1.0, 1.0)];

        let line = impls::Contour::open(points.clone());
        assert_eq!(line.iter_points_closing().count(), 2);
        assert_eq!(line.iter_points_closing().last(), Some(&Point2d::new(1.0, 1.0)));

        let ring = impls::ClosedContour::new(points);
        assert_eq!(ring.iter_points_closing().count(), 3);
        assert_eq!(ring.iter_points_closing().last(), Some(&Point2d::new(0.0, 0.0)));

        let empty = impls::ClosedContour::<Point2d>::new(vec![]);
        assert_eq!(empty.iter_points_closing().count(), 0);
    }

    #[test]
    fn bounding_rectangle() {
        let ring = impls::ClosedContour::new(vec![
            Point2d::new(170.0, -10.0),
            Point2d::new(190.0, -10.0),
            Point2d::new(190.0, 5.0),
        ]);
        let rect = ring.bounding_rectangle().expect("not empty");
        assert_eq!(rect, Rect::new(170.0, -10.0, 190.0, 5.0));
        assert!(impls::Contour::<Point2d>::open(vec![]).bounding_rectangle().is_none());
    }
}
