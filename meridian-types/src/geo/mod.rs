//! Geometries in geographic coordinates (latitude and longitude) (see [`GeoPoint`]), geodesic calculations on the
//! surface of the Earth (see [`geodesic`]) and splitting of polygons along the antimeridian (see [`antimeridian`]).

pub mod antimeridian;
mod bounding_box;
mod datum;
pub mod geodesic;
pub mod impls;
mod traits;

pub use bounding_box::GeoBoundingBox;
pub use datum::Datum;
pub use geodesic::{GeodesicError, GeodesicSelector, GeodesicSolver, GeodesicStrategy};
pub use traits::point::{GeoPoint, NewGeoPoint};

/// Normalizes longitude in degrees into `(-180, 180]` range.
pub fn normalize_lon(lon: f64) -> f64 {
    let lon = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if lon == -180.0 {
        180.0
    } else {
        lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lon_range() {
        assert_eq!(normalize_lon(0.0), 0.0);
        assert_eq!(normalize_lon(180.0), 180.0);
        assert_eq!(normalize_lon(-180.0), 180.0);
        assert_eq!(normalize_lon(190.0), -170.0);
        assert_eq!(normalize_lon(-190.0), 170.0);
        assert_eq!(normalize_lon(540.0), 180.0);
    }
}
