//! Conversion between geographic positions and planar geometries.
//!
//! Planar points produced from positions have longitude as `x`, latitude as `y` and altitude as `z`. Position
//! sequences describing rings repeat the first position at the end, while [`ClosedContour`] does not: the closing
//! point is removed and added back by the functions of this module.

use crate::cartesian::{CartesianPoint3d, Point3d};
use crate::geo::impls::{AltitudeReference, GeoPosition};
use crate::geo::GeoPoint;
use crate::impls::{ClosedContour, Contour, Polygon};

/// Converts a position into a planar point.
pub fn position_to_point(position: &GeoPosition) -> Point3d {
    Point3d::new(position.lon(), position.lat(), position.altitude())
}

/// Converts a planar point into a position with altitude measured from the given `reference`.
pub fn point_to_position(point: &impl CartesianPoint3d<Num = f64>, reference: AltitudeReference) -> GeoPosition {
    GeoPosition::new(point.y(), point.x(), point.z(), reference)
}

/// Converts a sequence of positions describing a ring into a closed contour.
///
/// Consecutive identical points and the closing point (if present) are removed.
pub fn positions_to_ring(positions: &[GeoPosition]) -> ClosedContour<Point3d> {
    let mut points: Vec<Point3d> = Vec::with_capacity(positions.len());
    for point in positions.iter().map(position_to_point) {
        if points.last() != Some(&point) {
            points.push(point);
        }
    }

    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    ClosedContour::new(points)
}

/// Converts a closed contour into a sequence of positions, repeating the first position at the end.
pub fn ring_to_positions(
    ring: &ClosedContour<impl CartesianPoint3d<Num = f64>>,
    reference: AltitudeReference,
) -> Vec<GeoPosition> {
    let mut positions: Vec<GeoPosition> = ring
        .points
        .iter()
        .map(|p| point_to_position(p, reference))
        .collect();
    if let Some(first) = positions.first() {
        positions.push(*first);
    }

    positions
}

/// Converts a sequence of positions into an open contour. Points are not changed.
pub fn positions_to_line(positions: &[GeoPosition]) -> Contour<Point3d> {
    Contour::open(positions.iter().map(position_to_point).collect())
}

/// Creates a polygon from position sequences of its outer and inner contours.
pub fn polygon_from_positions(shell: &[GeoPosition], holes: &[Vec<GeoPosition>]) -> Polygon<Point3d> {
    Polygon::new(
        positions_to_ring(shell),
        holes.iter().map(|hole| positions_to_ring(hole)).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{MultiPoint, MultiPolygon};
    use crate::multi::MultiPoint as _;

    fn positions(coords: &[(f64, f64)]) -> Vec<GeoPosition> {
        coords
            .iter()
            .map(|&(lat, lon)| GeoPosition::surface(lat, lon))
            .collect()
    }

    #[test]
    fn point_position_round_trip() {
        let position = GeoPosition::new(10.0, 20.0, 300.0, AltitudeReference::Terrain);
        let point = position_to_point(&position);
        assert_eq!(point, Point3d::new(20.0, 10.0, 300.0));
        assert_eq!(point_to_position(&point, AltitudeReference::Terrain), position);
    }

    #[test]
    fn ring_drops_duplicates_and_closure() {
        let ring = positions_to_ring(&positions(&[
            (0.0, 0.0),
            (0.0, 1.0),
            (0.0, 1.0),
            (1.0, 1.0),
            (0.0, 0.0),
        ]));
        assert_eq!(
            ring.points,
            vec![
                Point3d::new(0.0, 0.0, 0.0),
                Point3d::new(1.0, 0.0, 0.0),
                Point3d::new(1.0, 1.0, 0.0),
            ]
        );

        let back = ring_to_positions(&ring, AltitudeReference::Ellipsoid);
        assert_eq!(back.len(), 4);
        assert_eq!(back.first(), back.last());
    }

    #[test]
    fn line_keeps_points() {
        let line = positions_to_line(&positions(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)]));
        assert_eq!(line.len(), 3);
    }

    #[test]
    fn empty_input() {
        assert!(positions_to_ring(&[]).is_empty());
        assert!(ring_to_positions(&ClosedContour::<Point3d>::new(vec![]), AltitudeReference::Origin).is_empty());
        assert!(positions_to_line(&[]).is_empty());
    }

    #[test]
    fn polygon_and_aggregates() {
        let shell = positions(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]);
        let hole = positions(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)]);
        let polygon = polygon_from_positions(&shell, &[hole]);
        assert_eq!(polygon.outer_contour.len(), 4);
        assert_eq!(polygon.inner_contours.len(), 1);
        assert_eq!(polygon.inner_contours[0].len(), 3);

        let multi: MultiPolygon<Point3d> = vec![polygon.clone(), polygon].into_iter().collect();
        assert_eq!(multi.parts().len(), 2);

        let points: MultiPoint<Point3d> = shell.iter().map(position_to_point).collect();
        assert_eq!(points.iter_points().count(), 5);
    }
}
