//! Geometries built on the surface of the Earth with a [`GeodesicSolver`].
//!
//! Rings are returned without the closing point. Vertices are placed at a fixed angular step of
//! `360 / vertex_count` degrees, starting from the north (or from the orientation of the ellipse) and going
//! clockwise. A `vertex_count` smaller than 3 produces an empty ring.

use crate::geo::geodesic::{GeodesicError, GeodesicSolver};
use crate::geo::impls::GeoPoint2d;
use crate::impls::{ClosedContour, Contour};

/// Geodesic circle: points at the `radius` (meters) from the `center`.
pub fn circle(
    solver: &dyn GeodesicSolver,
    center: &GeoPoint2d,
    radius: f64,
    vertex_count: usize,
) -> Result<ClosedContour<GeoPoint2d>, GeodesicError> {
    ellipse(solver, center, radius, radius, 0.0, vertex_count)
}

/// Geodesic ellipse around the `center`.
///
/// `semi_major` and `semi_minor` are the lengths of the semi-axes in meters, `orientation` is the bearing of the
/// major axis in degrees.
pub fn ellipse(
    solver: &dyn GeodesicSolver,
    center: &GeoPoint2d,
    semi_major: f64,
    semi_minor: f64,
    orientation: f64,
    vertex_count: usize,
) -> Result<ClosedContour<GeoPoint2d>, GeodesicError> {
    if vertex_count < 3 {
        return Ok(ClosedContour::new(vec![]));
    }

    let step = 360.0 / vertex_count as f64;
    (0..vertex_count)
        .map(|i| {
            let theta = i as f64 * step;
            let (sin, cos) = theta.to_radians().sin_cos();
            let radius = if semi_major == semi_minor {
                semi_major
            } else {
                semi_major * semi_minor
                    / ((semi_minor * cos).powi(2) + (semi_major * sin).powi(2)).sqrt()
            };

            solver.destination(center, radius, orientation + theta)
        })
        .collect()
}

/// Line of bearing: the geodesic going from the `origin` at the `bearing` (degrees) for `length` meters.
///
/// The line is split into `segment_count` segments of equal length so that it follows the geodesic when drawn
/// on a map. Zero segments are treated as one.
pub fn line_of_bearing(
    solver: &dyn GeodesicSolver,
    origin: &GeoPoint2d,
    bearing: f64,
    length: f64,
    segment_count: usize,
) -> Result<Contour<GeoPoint2d>, GeodesicError> {
    let segment_count = segment_count.max(1);
    let mut points = Vec::with_capacity(segment_count + 1);
    points.push(*origin);
    for i in 1..=segment_count {
        let distance = length * i as f64 / segment_count as f64;
        points.push(solver.destination(origin, distance, bearing)?);
    }

    Ok(Contour::open(points))
}
