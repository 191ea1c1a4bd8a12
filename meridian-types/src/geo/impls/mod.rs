//! Implementations of the geographic point traits.

mod point;
mod position;

pub use point::GeoPoint2d;
pub use position::{AltitudeReference, GeoPosition};
