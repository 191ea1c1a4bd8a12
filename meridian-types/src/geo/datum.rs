use serde::{Deserialize, Serialize};

/// Reference ellipsoid of a geodetic datum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    semimajor: f64,
    semiminor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// World Geodetic System 1984.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
        semiminor: 6_356_752.3142,
        inv_flattening: 298.257223563,
    };

    /// Creates a custom datum.
    pub const fn new(semimajor: f64, semiminor: f64, inv_flattening: f64) -> Self {
        Self {
            semimajor,
            semiminor,
            inv_flattening,
        }
    }

    /// Equatorial radius of the ellipsoid in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Polar radius of the ellipsoid in meters.
    pub fn semiminor(&self) -> f64 {
        self.semiminor
    }

    /// Inverse flattening of the ellipsoid.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Flattening of the ellipsoid.
    pub fn flattening(&self) -> f64 {
        1.0 / self.inv_flattening
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
