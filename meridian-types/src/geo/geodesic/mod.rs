//! Geodesic problems on the surface of the Earth.
//!
//! Two models are available, both implementing the [`GeodesicSolver`] trait:
//!
//! * [`Haversine`] treats the Earth as a sphere. It is fast and never fails to converge, but its error reaches
//!   0.5% of the distance.
//! * [`Vincenty`] solves the problems on an ellipsoid with iterative methods. It is accurate to fractions of a
//!   millimeter, but is slower and may fail to converge for nearly antipodal points.
//!
//! The set of models is closed. [`GeodesicStrategy`] names them and hands out shared instances of the solvers, and
//! [`GeodesicSelector`] keeps track of the strategy currently chosen by an application.
//!
//! All angles are in degrees, all distances are in meters.

use thiserror::Error;

use crate::geo::impls::GeoPoint2d;
use crate::geo::traits::point::GeoPoint;

mod haversine;
pub mod shapes;
mod strategy;
mod vincenty;

pub use haversine::{Haversine, EARTH_RADIUS};
pub use strategy::{GeodesicSelector, GeodesicStrategy, HAVERSINE, VINCENTY};
pub use vincenty::{DirectSolution, InverseSolution, Vincenty, VincentyParams};

/// Iterative solutions stop when the change between two iterations becomes smaller than this value.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-12;
/// Maximum number of iterations the iterative solutions are allowed to make.
pub const MAX_ITERATIONS: usize = 500;

/// Failure of a geodesic calculation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeodesicError {
    /// Iterative solution did not reach the required tolerance within the iteration limit. Nearly antipodal points
    /// are the usual reason.
    #[error("geodesic solution did not converge after {iterations} iterations")]
    NotConverged {
        /// Number of iterations made before giving up.
        iterations: usize,
    },
    /// Calculation produced a value outside of the domain of the arithmetic functions (NaN).
    #[error("geodesic calculation is out of domain")]
    OutOfDomain,
}

/// Solver of the direct and inverse geodesic problems.
///
/// The trait is object safe: [`GeodesicStrategy::solver`] returns shared `&'static dyn GeodesicSolver` instances.
pub trait GeodesicSolver: Send + Sync + std::fmt::Debug {
    /// Initial bearing (forward azimuth) of the great circle from `from` to `to` in degrees, in `[0, 360)` range.
    ///
    /// The bearing is calculated on a sphere by both models.
    fn bearing(&self, from: &GeoPoint2d, to: &GeoPoint2d) -> f64 {
        initial_bearing(from, to)
    }

    /// Point at the `distance` (meters) from `from` along the geodesic starting at the given `bearing` (degrees).
    /// Longitude of the result is normalized into `(-180, 180]`.
    fn destination(
        &self,
        from: &GeoPoint2d,
        distance: f64,
        bearing: f64,
    ) -> Result<GeoPoint2d, GeodesicError>;

    /// Length of the geodesic between two points in meters. Distance between a point and itself is exactly `0.0`.
    fn distance(&self, from: &GeoPoint2d, to: &GeoPoint2d) -> Result<f64, GeodesicError>;
}

/// Initial great-circle bearing from one point to another, in degrees in `[0, 360)` range.
pub fn initial_bearing(from: &impl GeoPoint<Num = f64>, to: &impl GeoPoint<Num = f64>) -> f64 {
    let phi1 = from.lat_rad();
    let phi2 = to.lat_rad();
    let d_lambda = to.lon_rad() - from.lon_rad();

    let theta = (d_lambda.sin() * phi2.cos())
        .atan2(phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos());

    (theta.to_degrees() + 360.0) % 360.0
}
