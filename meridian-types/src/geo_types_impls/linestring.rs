use geo_types::{Coord, CoordNum, LineString};

use crate::contour::Contour;
use crate::impls::ClosedContour;

impl<T: CoordNum> Contour for LineString<T> {
    type Point = Coord<T>;

    fn is_closed(&self) -> bool {
        LineString::is_closed(self)
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        if self.is_closed() {
            self.0[..(self.0.len().max(1) - 1)].iter()
        } else {
            self.0.iter()
        }
    }
}

impl<T: CoordNum> ClosedContour<Coord<T>> {
    /// Creates a closed contour from the line string.
    ///
    /// Consecutive duplicate points are skipped, and the last point is dropped if it is the same as the first one.
    /// The line string does not have to be closed.
    pub fn from_line_string(line: &LineString<T>) -> Self {
        let mut points: Vec<Coord<T>> = Vec::with_capacity(line.0.len());
        for coord in &line.0 {
            if points.last() != Some(coord) {
                points.push(*coord);
            }
        }

        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        Self::new(points)
    }
}
