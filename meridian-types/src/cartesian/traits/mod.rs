mod cartesian_point;
mod contour;

pub use cartesian_point::{
    CartesianPoint2d, CartesianPoint3d, NewCartesianPoint2d, NewCartesianPoint3d,
};
pub use contour::{CartesianClosedContour, Winding};
