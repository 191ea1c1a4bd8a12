use crate::geo::geodesic::{GeodesicError, GeodesicSolver};
use crate::geo::impls::GeoPoint2d;
use crate::geo::normalize_lon;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};

/// Radius of the sphere used by the spherical model, in meters. Equals to the WGS84 semi-major axis.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Spherical model of the Earth. Distances are calculated with the haversine formula, destinations with the
/// great-circle closed form solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    radius: f64,
}

impl Haversine {
    /// Creates a solver with the [`EARTH_RADIUS`] sphere.
    pub const fn new() -> Self {
        Self {
            radius: EARTH_RADIUS,
        }
    }

    /// Creates a solver for a sphere with the given radius in meters.
    pub const fn with_radius(radius: f64) -> Self {
        Self { radius }
    }

    /// Radius of the sphere in meters.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for Haversine {
    fn default() -> Self {
        Self::new()
    }
}

impl GeodesicSolver for Haversine {
    fn destination(
        &self,
        from: &GeoPoint2d,
        distance: f64,
        bearing: f64,
    ) -> Result<GeoPoint2d, GeodesicError> {
        let phi1 = from.lat_rad();
        let lambda1 = from.lon_rad();
        let theta = bearing.to_radians();
        let delta = distance / self.radius;

        let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
        let lambda2 = lambda1
            + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

        if phi2.is_nan() || lambda2.is_nan() {
            return Err(GeodesicError::OutOfDomain);
        }

        Ok(GeoPoint2d::latlon(
            phi2.to_degrees(),
            normalize_lon(lambda2.to_degrees()),
        ))
    }

    fn distance(&self, from: &GeoPoint2d, to: &GeoPoint2d) -> Result<f64, GeodesicError> {
        let phi1 = from.lat_rad();
        let phi2 = to.lat_rad();
        let d_phi = phi2 - phi1;
        let d_lambda = to.lon_rad() - from.lon_rad();

        let a = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        let distance = self.radius * c;
        if distance.is_nan() {
            Err(GeodesicError::OutOfDomain)
        } else {
            Ok(distance)
        }
    }
}
