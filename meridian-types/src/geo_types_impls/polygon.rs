use geo_types::{CoordNum, LineString};

use crate::cartesian::Point3d;
use crate::impls::ClosedContour;
use crate::polygon::Polygon;

impl<T: CoordNum> Polygon for geo_types::Polygon<T> {
    type Contour = LineString<T>;

    fn outer_contour(&self) -> &Self::Contour {
        self.exterior()
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        self.interiors().iter()
    }
}

fn ring_from_line_string(line: &LineString<f64>) -> ClosedContour<Point3d> {
    ClosedContour::from_line_string(line).map_points(|c| Point3d::new(c.x, c.y, 0.0))
}

impl From<&geo_types::Polygon<f64>> for crate::impls::Polygon<Point3d> {
    /// Converts a polygon with `x` being longitude and `y` latitude. Altitude of all points is zero.
    fn from(polygon: &geo_types::Polygon<f64>) -> Self {
        Self::new(
            ring_from_line_string(polygon.exterior()),
            polygon
                .interiors()
                .iter()
                .map(ring_from_line_string)
                .collect(),
        )
    }
}
