//! Implementations of the geometry traits for the [`geo_types`] crate, and conversions from its geometries.

mod linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geo_types::{coord, line_string, point, polygon, Geometry, LineString};

    use crate::cartesian::{CartesianClosedContour, CartesianPoint2d, Point3d, Winding};
    use crate::contour::Contour;
    use crate::error::MeridianTypesError;
    use crate::geo::GeoPoint;
    use crate::impls::{ClosedContour, MultiPolygon, Polygon};

    #[test]
    fn points_as_cartesian_and_geo() {
        let p = point!(x: 30.0, y: 10.0);
        assert_eq!(CartesianPoint2d::x(&p), 30.0);
        assert_eq!(GeoPoint::lat(&p), 10.0);
        assert_eq!(GeoPoint::lon(&p), 30.0);

        let c = coord!(x: 30.0, y: 10.0);
        assert_eq!(GeoPoint::lat(&c), 10.0);
        assert_eq!(GeoPoint::lon(&c), 30.0);
    }

    #[test]
    fn closed_line_string_as_contour() {
        let line: LineString<f64> = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 0.0)];
        assert!(Contour::is_closed(&line));
        assert_eq!(Contour::iter_points(&line).count(), 3);
    }

    #[test]
    fn closed_contour_from_line_string() {
        let line: LineString<f64> = line_string![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 0.0)
        ];
        let ring = ClosedContour::from_line_string(&line);
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.winding(), Winding::CounterClockwise);
    }

    #[test]
    fn polygon_conversion() {
        let polygon = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 2.0, y: 2.0)]]
        );

        let converted = Polygon::<Point3d>::from(&polygon);
        assert_eq!(converted.outer_contour.len(), 4);
        assert_eq!(converted.inner_contours.len(), 1);
        assert_eq!(converted.outer_contour.points[1], Point3d::new(10.0, 0.0, 0.0));

        let multi = MultiPolygon::<Point3d>::try_from(Geometry::Polygon(polygon)).expect("areal geometry");
        assert_eq!(multi.parts().len(), 1);
    }

    #[test]
    fn non_areal_geometry_is_rejected() {
        assert_matches!(
            MultiPolygon::<Point3d>::try_from(Geometry::Point(point!(x: 1.0, y: 2.0))),
            Err(MeridianTypesError::Conversion(_))
        );
    }
}
