use num_traits::Num;
use serde::{Deserialize, Serialize};

use crate::cartesian::traits::CartesianPoint2d;

/// Axis aligned bounding rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    x_min: N,
    y_min: N,
    x_max: N,
    y_max: N,
}

impl<N: Num + Copy + PartialOrd> Rect<N> {
    /// Creates a rectangle from its bounds.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Smallest rectangle containing all the points, or `None` if there are no points.
    pub fn from_points<'a, P>(points: impl IntoIterator<Item = &'a P>) -> Option<Self>
    where
        P: CartesianPoint2d<Num = N> + 'a,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let init = Self::new(first.x(), first.y(), first.x(), first.y());

        Some(points.fold(init, |rect, p| Self {
            x_min: if p.x() < rect.x_min { p.x() } else { rect.x_min },
            y_min: if p.y() < rect.y_min { p.y() } else { rect.y_min },
            x_max: if p.x() > rect.x_max { p.x() } else { rect.x_max },
            y_max: if p.y() > rect.y_max { p.y() } else { rect.y_max },
        }))
    }

    /// Minimum x.
    pub fn x_min(&self) -> N {
        self.x_min
    }

    /// Minimum y.
    pub fn y_min(&self) -> N {
        self.y_min
    }

    /// Maximum x.
    pub fn x_max(&self) -> N {
        self.x_max
    }

    /// Maximum y.
    pub fn y_max(&self) -> N {
        self.y_max
    }

    /// Extent along the x axis.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Extent along the y axis.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Whether the x range of the rectangle strictly contains `x`.
    pub fn spans_x(&self, x: N) -> bool {
        self.x_min < x && x < self.x_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point3d;

    #[test]
    fn bounds_of_points() {
        let points = [
            Point3d::new(1.0, 5.0, 0.0),
            Point3d::new(-3.0, 2.0, 10.0),
            Point3d::new(4.0, -1.0, 0.0),
        ];
        let rect = Rect::from_points(&points).expect("not empty");
        assert_eq!(rect, Rect::new(-3.0, -1.0, 4.0, 5.0));
        assert_eq!(rect.width(), 7.0);
        assert_eq!(rect.height(), 6.0);
        assert!(rect.spans_x(0.0));
        assert!(!rect.spans_x(4.0));

        assert!(Rect::<f64>::from_points(&[] as &[Point3d]).is_none());
    }
}
