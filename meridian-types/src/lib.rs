//! Geometry types and algorithms used to prepare geographic data for rendering.
//!
//! The crate is built around a set of traits describing geometries ([`Contour`], [`Polygon`],
//! [`MultiPolygon`] etc.) with simple implementations of them in the [`impls`] module. Geometries
//! can be expressed in cartesian coordinates (see [`cartesian`]) or in geographic coordinates (see
//! [`geo`]).
//!
//! On top of those types the crate provides:
//!
//! * geodesic solvers on a sphere and on an ellipsoid ([`geo::geodesic`]),
//! * removal of redundant ring vertices ([`cartesian::simplify`]),
//! * splitting of polygons crossing the antimeridian ([`geo::antimeridian`]),
//! * conversion between geographic positions and planar primitives ([`conversion`]).
//!
//! All algorithms are pure functions over the caller's data and can be used from any number of
//! threads at once.

pub mod cartesian;
pub mod contour;
pub mod conversion;
pub mod error;
pub mod geo;
pub mod impls;
pub mod multi;
pub mod polygon;

#[cfg(feature = "geo-types")]
mod geo_types_impls;

pub use contour::{ClosedContour, Contour};
pub use multi::{MultiContour, MultiPoint, MultiPolygon};
pub use polygon::Polygon;
