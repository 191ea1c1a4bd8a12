use serde::{Deserialize, Serialize};

use crate::geo::impls::point::GeoPoint2d;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};

/// Surface from which the altitude of a [`GeoPosition`] is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AltitudeReference {
    /// Altitude above the reference ellipsoid.
    #[default]
    Ellipsoid,
    /// Altitude above the terrain surface at the position.
    Terrain,
    /// Altitude relative to the origin of the model the position belongs to.
    Origin,
}

/// Geographic position: latitude and longitude in degrees plus altitude in meters measured from an explicit
/// reference surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    lat: f64,
    lon: f64,
    altitude: f64,
    reference: AltitudeReference,
}

impl GeoPosition {
    /// Creates a new position.
    pub const fn new(lat: f64, lon: f64, altitude: f64, reference: AltitudeReference) -> Self {
        Self {
            lat,
            lon,
            altitude,
            reference,
        }
    }

    /// Creates a position on the surface of the ellipsoid.
    pub const fn surface(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon, 0.0, AltitudeReference::Ellipsoid)
    }

    /// Altitude in meters.
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Surface the altitude is measured from.
    pub fn reference(&self) -> AltitudeReference {
        self.reference
    }

    /// Same position with the different altitude.
    pub fn with_altitude(self, altitude: f64, reference: AltitudeReference) -> Self {
        Self {
            altitude,
            reference,
            ..self
        }
    }

    /// Latitude and longitude of the position without altitude.
    pub fn to_point2d(&self) -> GeoPoint2d {
        GeoPoint2d::latlon(self.lat, self.lon)
    }
}

impl GeoPoint for GeoPosition {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPosition {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self::surface(lat, lon)
    }
}
