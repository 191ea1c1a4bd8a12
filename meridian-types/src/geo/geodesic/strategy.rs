use serde::{Deserialize, Serialize};

use crate::geo::datum::Datum;
use crate::geo::geodesic::{
    GeodesicError, GeodesicSolver, Haversine, Vincenty, VincentyParams,
};
use crate::geo::impls::GeoPoint2d;

/// Shared spherical solver.
pub static HAVERSINE: Haversine = Haversine::new();
/// Shared ellipsoidal solver on WGS84 with default iteration parameters.
pub static VINCENTY: Vincenty = Vincenty::new(Datum::WGS84, VincentyParams::DEFAULT);

/// Model of the Earth used for geodesic calculations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeodesicStrategy {
    /// Sphere, see [`Haversine`].
    Spherical,
    /// WGS84 ellipsoid, see [`Vincenty`].
    #[default]
    Ellipsoidal,
}

impl GeodesicStrategy {
    /// The most accurate strategy available.
    pub const BEST: Self = Self::Ellipsoidal;

    /// Shared solver instance of the strategy.
    pub fn solver(&self) -> &'static dyn GeodesicSolver {
        match self {
            Self::Spherical => &HAVERSINE,
            Self::Ellipsoidal => &VINCENTY,
        }
    }
}

impl GeodesicSolver for GeodesicStrategy {
    fn bearing(&self, from: &GeoPoint2d, to: &GeoPoint2d) -> f64 {
        self.solver().bearing(from, to)
    }

    fn destination(
        &self,
        from: &GeoPoint2d,
        distance: f64,
        bearing: f64,
    ) -> Result<GeoPoint2d, GeodesicError> {
        self.solver().destination(from, distance, bearing)
    }

    fn distance(&self, from: &GeoPoint2d, to: &GeoPoint2d) -> Result<f64, GeodesicError> {
        self.solver().distance(from, to)
    }
}

/// Keeps the geodesic strategy chosen by an application.
///
/// The selector is a plain value. Components that need geodesic calculations receive it (or the strategy it holds)
/// explicitly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeodesicSelector {
    #[serde(default)]
    current: GeodesicStrategy,
}

impl GeodesicSelector {
    /// Creates a selector set to the [best](GeodesicStrategy::BEST) strategy.
    pub fn new() -> Self {
        Self {
            current: GeodesicStrategy::BEST,
        }
    }

    /// Currently selected strategy.
    pub fn current(&self) -> GeodesicStrategy {
        self.current
    }

    /// Sets the current strategy.
    pub fn select(&mut self, strategy: GeodesicStrategy) {
        self.current = strategy;
    }

    /// The most accurate strategy available.
    pub fn best(&self) -> GeodesicStrategy {
        GeodesicStrategy::BEST
    }

    /// Solver of the current strategy.
    pub fn solver(&self) -> &'static dyn GeodesicSolver {
        self.current.solver()
    }
}
