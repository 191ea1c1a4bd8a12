//! Meridian prepares geographic polygons for rendering on a GPU.
//!
//! Polygons given in geographic coordinates cannot be sent to a renderer directly: polygons crossing the
//! antimeridian would be drawn stretched around the whole globe, redundant points produce degenerate triangles, and
//! the renderer needs triangles rather than contours. [`GeoPolygonTessellation`] takes care of all of it:
//!
//! ```no_run
//! use meridian::{GeoPolygonTessellation, VertexBlock};
//! use meridian::meridian_types::geo::impls::GeoPosition;
//!
//! let shell = [
//!     GeoPosition::surface(-10.0, 170.0),
//!     GeoPosition::surface(-10.0, -170.0),
//!     GeoPosition::surface(10.0, -170.0),
//!     GeoPosition::surface(10.0, 170.0),
//!     GeoPosition::surface(-10.0, 170.0),
//! ];
//!
//! let mut block = VertexBlock::default();
//! let ranges = GeoPolygonTessellation::default()
//!     .tessellate_positions(&mut block, &shell, &[], None, &mut |p: &_| *p)
//!     .expect("valid polygon");
//! assert_eq!(ranges.len(), 2);
//! ```
//!
//! The vertex format is defined by the application: vertices are created from points by a
//! [`VertexGenerator`](render::VertexGenerator), which can be any `FnMut(&Point3d) -> V` closure.
//!
//! Geometry types, geodesic solvers and the algorithms used by this crate live in the [`meridian_types`] crate,
//! which is re-exported.

pub mod error;
pub mod pipeline;
pub mod render;

pub use error::MeridianError;
pub use meridian_types;
pub use pipeline::GeoPolygonTessellation;
pub use render::{PolygonTriangulator, TriangulationOptions, VertexBlock, VertexGenerator};
