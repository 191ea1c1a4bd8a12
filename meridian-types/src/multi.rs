//! Geometries made of several geometries of the same kind.

use crate::contour::Contour;
use crate::polygon::Polygon;

/// Set of points.
pub trait MultiPoint {
    /// Type of the points.
    type Point;

    /// Iterates over the points.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;
}

/// Set of contours, e.g. a road network.
pub trait MultiContour {
    /// Type of the contours.
    type Contour: Contour;

    /// Iterates over the contours.
    fn contours(&self) -> impl Iterator<Item = &'_ Self::Contour>;
}

/// Set of polygons. Produced, for example, when a polygon is split along the antimeridian.
pub trait MultiPolygon {
    /// Type of the polygons.
    type Polygon: Polygon;

    /// Iterates over the polygons.
    fn polygons(&self) -> impl Iterator<Item = &'_ Self::Polygon>;
}
