use serde::{Deserialize, Serialize};

use crate::geo::datum::Datum;
use crate::geo::geodesic::{GeodesicError, GeodesicSolver, CONVERGENCE_TOLERANCE, MAX_ITERATIONS};
use crate::geo::impls::GeoPoint2d;
use crate::geo::normalize_lon;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};

/// Parameters of the iterative solutions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VincentyParams {
    /// The iteration stops when the change of the iterated value becomes smaller than this.
    pub tolerance: f64,
    /// Upper limit of the number of iterations. Reaching it is reported as [`GeodesicError::NotConverged`].
    pub max_iterations: usize,
}

impl VincentyParams {
    /// [`CONVERGENCE_TOLERANCE`] and [`MAX_ITERATIONS`].
    pub const DEFAULT: Self = Self {
        tolerance: CONVERGENCE_TOLERANCE,
        max_iterations: MAX_ITERATIONS,
    };
}

impl Default for VincentyParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of the direct geodesic problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectSolution {
    /// Destination point.
    pub destination: GeoPoint2d,
    /// Azimuth of the geodesic at the destination point, in degrees in `[0, 360)`.
    pub final_bearing: f64,
}

/// Result of the inverse geodesic problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseSolution {
    /// Length of the geodesic in meters.
    pub distance: f64,
    /// Azimuth of the geodesic at the start point, in degrees in `[0, 360)`.
    pub initial_bearing: f64,
    /// Azimuth of the geodesic at the end point, in degrees in `[0, 360)`.
    pub final_bearing: f64,
}

/// Ellipsoidal model of the Earth, solved with Vincenty's iterative formulae.
///
/// The inverse solution is known to converge poorly (or not at all) for nearly antipodal points. In this case the
/// solver returns [`GeodesicError::NotConverged`] instead of an approximate value. Exactly antipodal points are
/// reported the same way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vincenty {
    datum: Datum,
    #[serde(default)]
    params: VincentyParams,
}

impl Vincenty {
    /// Creates a new solver.
    pub const fn new(datum: Datum, params: VincentyParams) -> Self {
        Self { datum, params }
    }

    /// Replaces the iteration parameters.
    pub fn with_params(self, params: VincentyParams) -> Self {
        Self { params, ..self }
    }

    /// Ellipsoid used by the solver.
    pub fn datum(&self) -> &Datum {
        &self.datum
    }

    /// Iteration parameters.
    pub fn params(&self) -> &VincentyParams {
        &self.params
    }

    fn series_coefficients(&self, cos_sq_alpha: f64) -> (f64, f64) {
        let a = self.datum.semimajor();
        let b = self.datum.semiminor();
        let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
        let big_a =
            1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

        (big_a, big_b)
    }

    /// Solves the direct problem: finds the point at the `distance` from `from` along the geodesic starting at the
    /// given `bearing`.
    pub fn direct(
        &self,
        from: &impl GeoPoint<Num = f64>,
        distance: f64,
        bearing: f64,
    ) -> Result<DirectSolution, GeodesicError> {
        let f = self.datum.flattening();
        let b = self.datum.semiminor();

        let alpha1 = bearing.to_radians();
        let (sin_alpha1, cos_alpha1) = alpha1.sin_cos();

        let tan_u1 = (1.0 - f) * from.lat_rad().tan();
        let cos_u1 = 1.0 / (1.0 + tan_u1 * tan_u1).sqrt();
        let sin_u1 = tan_u1 * cos_u1;

        let sigma1 = tan_u1.atan2(cos_alpha1);
        let sin_alpha = cos_u1 * sin_alpha1;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        let (big_a, big_b) = self.series_coefficients(cos_sq_alpha);

        let sigma0 = distance / (b * big_a);
        let mut sigma = sigma0;
        let mut converged = false;
        let mut iterations = 0;
        while iterations < self.params.max_iterations {
            iterations += 1;

            let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
            let (sin_sigma, cos_sigma) = sigma.sin_cos();
            let delta_sigma = delta_sigma(big_b, sin_sigma, cos_sigma, cos_2sigma_m);

            let prev = sigma;
            sigma = sigma0 + delta_sigma;
            if sigma.is_nan() {
                return Err(GeodesicError::OutOfDomain);
            }
            if (sigma - prev).abs() < self.params.tolerance {
                converged = true;
                break;
            }
        }

        if !converged {
            log::warn!(
                "Vincenty direct solution did not converge after {iterations} iterations (distance: {distance}, bearing: {bearing})"
            );
            return Err(GeodesicError::NotConverged { iterations });
        }

        log::trace!("Vincenty direct solution converged after {iterations} iterations");

        let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
        let (sin_sigma, cos_sigma) = sigma.sin_cos();
        let tmp = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;

        let phi2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1)
            .atan2((1.0 - f) * (sin_alpha * sin_alpha + tmp * tmp).sqrt());
        let lambda =
            (sin_sigma * sin_alpha1).atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let l = lambda
            - (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));
        let lon2 = from.lon() + l.to_degrees();
        let alpha2 = sin_alpha.atan2(-tmp);

        if phi2.is_nan() || lon2.is_nan() {
            return Err(GeodesicError::OutOfDomain);
        }

        Ok(DirectSolution {
            destination: GeoPoint2d::latlon(phi2.to_degrees(), normalize_lon(lon2)),
            final_bearing: normalize_bearing(alpha2.to_degrees()),
        })
    }

    /// Solves the inverse problem: finds the length and azimuths of the geodesic between two points.
    pub fn inverse(
        &self,
        from: &impl GeoPoint<Num = f64>,
        to: &impl GeoPoint<Num = f64>,
    ) -> Result<InverseSolution, GeodesicError> {
        let f = self.datum.flattening();
        let b = self.datum.semiminor();

        let l = to.lon_rad() - from.lon_rad();
        let u1 = ((1.0 - f) * from.lat_rad().tan()).atan();
        let u2 = ((1.0 - f) * to.lat_rad().tan()).atan();
        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let mut lambda = l;
        let mut iterations = 0;
        let mut state = None;
        while iterations < self.params.max_iterations {
            iterations += 1;

            let (sin_lambda, cos_lambda) = lambda.sin_cos();
            let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
                + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
            .sqrt();
            let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;

            if sin_sigma.is_nan() || cos_sigma.is_nan() {
                return Err(GeodesicError::OutOfDomain);
            }

            if sin_sigma < self.params.tolerance {
                if cos_sigma > 0.0 {
                    return Ok(InverseSolution {
                        distance: 0.0,
                        initial_bearing: 0.0,
                        final_bearing: 0.0,
                    });
                }

                log::warn!("Vincenty inverse solution cannot be found for antipodal points");
                return Err(GeodesicError::NotConverged { iterations });
            }

            let sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
            let cos_2sigma_m = if cos_sq_alpha != 0.0 {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
            } else {
                // equatorial line
                0.0
            };
            let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));

            let prev = lambda;
            lambda = l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos_2sigma_m
                                + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

            if (lambda - prev).abs() < self.params.tolerance {
                state = Some(InverseState {
                    sin_lambda,
                    cos_lambda,
                    sin_sigma,
                    cos_sigma,
                    sigma,
                    cos_sq_alpha,
                    cos_2sigma_m,
                });
                break;
            }
        }

        let Some(state) = state else {
            log::warn!(
                "Vincenty inverse solution did not converge after {iterations} iterations"
            );
            return Err(GeodesicError::NotConverged { iterations });
        };

        log::trace!("Vincenty inverse solution converged after {iterations} iterations");

        let (big_a, big_b) = self.series_coefficients(state.cos_sq_alpha);
        let delta_sigma = delta_sigma(
            big_b,
            state.sin_sigma,
            state.cos_sigma,
            state.cos_2sigma_m,
        );
        let distance = b * big_a * (state.sigma - delta_sigma);

        let alpha1 = (cos_u2 * state.sin_lambda)
            .atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * state.cos_lambda);
        let alpha2 = (cos_u1 * state.sin_lambda)
            .atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * state.cos_lambda);

        if distance.is_nan() {
            return Err(GeodesicError::OutOfDomain);
        }

        Ok(InverseSolution {
            distance,
            initial_bearing: normalize_bearing(alpha1.to_degrees()),
            final_bearing: normalize_bearing(alpha2.to_degrees()),
        })
    }
}

struct InverseState {
    sin_lambda: f64,
    cos_lambda: f64,
    sin_sigma: f64,
    cos_sigma: f64,
    sigma: f64,
    cos_sq_alpha: f64,
    cos_2sigma_m: f64,
}

fn delta_sigma(big_b: f64, sin_sigma: f64, cos_sigma: f64, cos_2sigma_m: f64) -> f64 {
    big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)))
}

fn normalize_bearing(bearing: f64) -> f64 {
    (bearing + 360.0) % 360.0
}

impl Default for Vincenty {
    fn default() -> Self {
        Self::new(Datum::WGS84, VincentyParams::DEFAULT)
    }
}

impl GeodesicSolver for Vincenty {
    fn destination(
        &self,
        from: &GeoPoint2d,
        distance: f64,
        bearing: f64,
    ) -> Result<GeoPoint2d, GeodesicError> {
        Ok(self.direct(from, distance, bearing)?.destination)
    }

    fn distance(&self, from: &GeoPoint2d, to: &GeoPoint2d) -> Result<f64, GeodesicError> {
        Ok(self.inverse(from, to)?.distance)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    use super::*;
    use crate::latlon;

    fn dms(degrees: f64, minutes: f64, seconds: f64) -> f64 {
        (degrees.abs() + minutes / 60.0 + seconds / 3600.0).copysign(degrees)
    }

    fn flinders_peak() -> GeoPoint2d {
        latlon!(dms(-37.0, 57.0, 3.72030), dms(144.0, 25.0, 29.52440))
    }

    fn buninyong() -> GeoPoint2d {
        latlon!(dms(-37.0, 39.0, 10.15610), dms(143.0, 55.0, 35.38390))
    }

    #[test]
    fn inverse_reference_line() {
        let solution = Vincenty::default()
            .inverse(&flinders_peak(), &buninyong())
            .expect("converges");
        assert_abs_diff_eq!(solution.distance, 54_972.271, epsilon = 1e-3);
        assert_abs_diff_eq!(
            solution.initial_bearing,
            dms(306.0, 52.0, 5.37),
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            solution.final_bearing,
            dms(307.0, 10.0, 25.07),
            epsilon = 1e-4
        );
    }

    #[test]
    fn direct_reference_line() {
        let solution = Vincenty::default()
            .direct(&flinders_peak(), 54_972.271, dms(306.0, 52.0, 5.37))
            .expect("converges");
        let expected = buninyong();
        assert_abs_diff_eq!(solution.destination.lat(), expected.lat(), epsilon = 1e-7);
        assert_abs_diff_eq!(solution.destination.lon(), expected.lon(), epsilon = 1e-7);
        assert_abs_diff_eq!(
            solution.final_bearing,
            dms(307.0, 10.0, 25.07),
            epsilon = 1e-4
        );
    }

    #[test]
    fn coincident_points() {
        let solver = Vincenty::default();
        for point in [
            latlon!(0.0, 0.0),
            latlon!(51.5, -0.12),
            latlon!(-37.95, 144.42),
            latlon!(89.0, 179.0),
        ] {
            assert_eq!(solver.distance(&point, &point), Ok(0.0));
        }
    }

    #[test]
    fn zero_distance_destination() {
        let from = latlon!(-37.95, 144.42);
        let destination = Vincenty::default()
            .destination(&from, 0.0, 30.0)
            .expect("converges");
        assert_abs_diff_eq!(destination.lat(), from.lat(), epsilon = 1e-12);
        assert_abs_diff_eq!(destination.lon(), from.lon(), epsilon = 1e-12);
    }

    #[test]
    fn round_trip() {
        let solver = Vincenty::default();
        let cases = [
            (0.0, 0.0, 1.0, 0.0),
            (10.0, 20.0, 999_000.0, 45.0),
            (-33.9, 151.2, 250_000.0, 200.0),
            (60.0, -150.0, 800_000.0, 300.0),
            (45.0, 179.5, 120_000.0, 90.0),
            (-70.0, -10.0, 500_000.0, 135.0),
        ];
        for (lat, lon, distance, bearing) in cases {
            let from = latlon!(lat, lon);
            let to = solver
                .destination(&from, distance, bearing)
                .expect("converges");
            let back = solver.distance(&from, &to).expect("converges");
            assert_abs_diff_eq!(back, distance, epsilon = 1e-3);
        }
    }

    #[test]
    fn nearly_antipodal_points_do_not_converge() {
        let solver = Vincenty::default();
        assert_matches!(
            solver.distance(&latlon!(0.5, 0.0), &latlon!(-0.5, 179.7)),
            Err(GeodesicError::NotConverged { .. })
        );
        assert_matches!(
            solver.distance(&latlon!(0.0, 0.0), &latlon!(0.0, 180.0)),
            Err(GeodesicError::NotConverged { .. })
        );
    }

    #[test]
    fn iteration_limit_is_respected() {
        let solver = Vincenty::default().with_params(VincentyParams {
            tolerance: 1e-12,
            max_iterations: 1,
        });
        assert_matches!(
            solver.inverse(&flinders_peak(), &buninyong()),
            Err(GeodesicError::NotConverged { iterations: 1 })
        );
        assert_matches!(
            solver.direct(&flinders_peak(), 54_972.271, 306.0),
            Err(GeodesicError::NotConverged { iterations: 1 })
        );
    }

    #[test]
    fn direct_with_nan_is_out_of_domain() {
        let solver = Vincenty::default();
        assert_matches!(
            solver.direct(&flinders_peak(), f64::NAN, 306.0),
            Err(GeodesicError::OutOfDomain)
        );
        assert_matches!(
            solver.direct(&latlon!(f64::NAN, 144.0), 1000.0, 306.0),
            Err(GeodesicError::OutOfDomain)
        );
    }

    #[test]
    fn params_from_config() {
        let params: VincentyParams =
            serde_json::from_str(r#"{"max_iterations": 100}"#).expect("valid json");
        assert_eq!(params.max_iterations, 100);
        assert_eq!(params.tolerance, CONVERGENCE_TOLERANCE);
    }
}
