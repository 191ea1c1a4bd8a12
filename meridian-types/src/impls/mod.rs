//! Simple owned implementations of the geometry traits.

mod contour;
mod multi;
mod polygon;

pub use contour::{ClosedContour, Contour};
pub use multi::{MultiContour, MultiPoint, MultiPolygon};
pub use polygon::Polygon;
