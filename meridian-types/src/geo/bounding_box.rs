use serde::{Deserialize, Serialize};

use crate::geo::impls::GeoPoint2d;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};

/// Geographic bounding box given by its lower-left and upper-right corners.
///
/// If the longitude of the lower-left corner is greater than the longitude of the upper-right corner, the box
/// crosses the antimeridian: it spans from the lower-left longitude eastwards through 180 to the upper-right
/// longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBoundingBox {
    lower_left: GeoPoint2d,
    upper_right: GeoPoint2d,
}

impl GeoBoundingBox {
    /// Creates a new bounding box.
    pub fn new(lower_left: GeoPoint2d, upper_right: GeoPoint2d) -> Self {
        Self {
            lower_left,
            upper_right,
        }
    }

    /// Bounding box of a set of points that does not cross the antimeridian. Returns `None` for empty iterator.
    pub fn from_points<'a, P: GeoPoint<Num = f64> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let (mut lat_min, mut lat_max) = (first.lat(), first.lat());
        let (mut lon_min, mut lon_max) = (first.lon(), first.lon());
        for p in points {
            lat_min = lat_min.min(p.lat());
            lat_max = lat_max.max(p.lat());
            lon_min = lon_min.min(p.lon());
            lon_max = lon_max.max(p.lon());
        }

        Some(Self::new(
            GeoPoint2d::latlon(lat_min, lon_min),
            GeoPoint2d::latlon(lat_max, lon_max),
        ))
    }

    /// Lower-left (south-west) corner.
    pub fn lower_left(&self) -> GeoPoint2d {
        self.lower_left
    }

    /// Upper-right (north-east) corner.
    pub fn upper_right(&self) -> GeoPoint2d {
        self.upper_right
    }

    /// Returns true if the box spans across the antimeridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.lower_left.lon() > self.upper_right.lon()
    }

    /// Width of the box in degrees of longitude, taking antimeridian crossing into account.
    pub fn lon_span(&self) -> f64 {
        let span = self.upper_right.lon() - self.lower_left.lon();
        if self.crosses_antimeridian() {
            span + 360.0
        } else {
            span
        }
    }

    /// Returns true if the point is inside the box or on its border.
    pub fn contains(&self, point: &impl GeoPoint<Num = f64>) -> bool {
        let lat_inside =
            point.lat() >= self.lower_left.lat() && point.lat() <= self.upper_right.lat();
        let lon_inside = if self.crosses_antimeridian() {
            point.lon() >= self.lower_left.lon() || point.lon() <= self.upper_right.lon()
        } else {
            point.lon() >= self.lower_left.lon() && point.lon() <= self.upper_right.lon()
        };

        lat_inside && lon_inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlon;

    #[test]
    fn crossing_box() {
        let bbox = GeoBoundingBox::new(latlon!(-50.0, -10.0), latlon!(50.0, -160.0));
        assert!(bbox.crosses_antimeridian());
        assert_eq!(bbox.lon_span(), 210.0);
        assert!(bbox.contains(&latlon!(0.0, 179.0)));
        assert!(bbox.contains(&latlon!(0.0, -170.0)));
        assert!(!bbox.contains(&latlon!(0.0, -100.0)));
    }

    #[test]
    fn regular_box() {
        let points = [latlon!(0.0, 100.0), latlon!(50.0, 150.0), latlon!(20.0, 120.0)];
        let bbox = GeoBoundingBox::from_points(points.iter()).expect("not empty");
        assert!(!bbox.crosses_antimeridian());
        assert_eq!(bbox.lon_span(), 50.0);
        assert!(bbox.contains(&latlon!(25.0, 125.0)));
        assert!(!bbox.contains(&latlon!(25.0, 160.0)));
    }
}
