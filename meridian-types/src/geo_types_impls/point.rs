use geo_types::{Coord, CoordNum, Point};
use nalgebra::Scalar;
use num_traits::{Bounded, Float, FromPrimitive};

use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use crate::geo::{GeoPoint, NewGeoPoint};

// `geo_types` stores longitude as `x` and latitude as `y`.
macro_rules! point_impls {
    ($point:ident, |$p:ident| $coord:expr, |$x:ident, $y:ident| $new:expr) => {
        impl<T: CoordNum + Bounded + Scalar + FromPrimitive> CartesianPoint2d for $point<T> {
            type Num = T;

            fn x(&self) -> T {
                let $p = self;
                $coord.x
            }

            fn y(&self) -> T {
                let $p = self;
                $coord.y
            }
        }

        impl<T: CoordNum + Bounded + Scalar + FromPrimitive> NewCartesianPoint2d<T> for $point<T> {
            fn new($x: T, $y: T) -> Self {
                $new
            }
        }

        impl<T: CoordNum + Float> GeoPoint for $point<T> {
            type Num = T;

            fn lat(&self) -> T {
                let $p = self;
                $coord.y
            }

            fn lon(&self) -> T {
                let $p = self;
                $coord.x
            }
        }

        impl<T: CoordNum + Float> NewGeoPoint<T> for $point<T> {
            fn latlon(lat: T, lon: T) -> Self {
                let ($x, $y) = (lon, lat);
                $new
            }
        }
    };
}

point_impls!(Coord, |c| c, |x, y| Coord { x, y });
point_impls!(Point, |p| p.0, |x, y| Point(Coord { x, y }));
