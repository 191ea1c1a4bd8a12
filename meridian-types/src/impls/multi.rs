use serde::{Deserialize, Serialize};

use crate::impls::{Contour, Polygon};

macro_rules! collection {
    ($(#[$attr:meta])* $name:ident, $part:ty, $geometry:ident, $assoc:ident, $iter:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
        pub struct $name<P> {
            parts: Vec<$part>,
        }

        impl<P> $name<P> {
            /// Geometries the set consists of.
            pub fn parts(&self) -> &[$part] {
                &self.parts
            }

            /// Number of geometries in the set.
            pub fn len(&self) -> usize {
                self.parts.len()
            }

            /// Whether the set is empty.
            pub fn is_empty(&self) -> bool {
                self.parts.is_empty()
            }

            /// Adds a geometry to the set.
            pub fn push(&mut self, part: $part) {
                self.parts.push(part);
            }
        }

        impl<P> Default for $name<P> {
            fn default() -> Self {
                Self { parts: vec![] }
            }
        }

        impl<P> From<Vec<$part>> for $name<P> {
            fn from(parts: Vec<$part>) -> Self {
                Self { parts }
            }
        }

        impl<P> FromIterator<$part> for $name<P> {
            fn from_iter<T: IntoIterator<Item = $part>>(iter: T) -> Self {
                Self {
                    parts: iter.into_iter().collect(),
                }
            }
        }

        impl<P> Extend<$part> for $name<P> {
            fn extend<T: IntoIterator<Item = $part>>(&mut self, iter: T) {
                self.parts.extend(iter);
            }
        }

        impl<P> IntoIterator for $name<P> {
            type Item = $part;
            type IntoIter = std::vec::IntoIter<$part>;

            fn into_iter(self) -> Self::IntoIter {
                self.parts.into_iter()
            }
        }

        impl<P> crate::multi::$geometry for $name<P> {
            type $assoc = $part;

            fn $iter(&self) -> impl Iterator<Item = &'_ $part> {
                self.parts.iter()
            }
        }
    };
}

collection!(
    /// Set of points.
    MultiPoint, P, MultiPoint, Point, iter_points
);
collection!(
    /// Set of open or closed contours.
    MultiContour, Contour<P>, MultiContour, Contour, contours
);
collection!(
    /// Set of polygons.
    MultiPolygon, Polygon<P>, MultiPolygon, Polygon, polygons
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::impls::ClosedContour;
    use crate::multi::{MultiContour as _, MultiPolygon as _};

    #[test]
    fn collect_contours() {
        let lines: MultiContour<Point2d> = (0..3)
            .map(|i| Contour::open(vec![Point2d::new(i as f64, 0.0), Point2d::new(i as f64, 1.0)]))
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.contours().count(), 3);
    }

    #[test]
    fn extend_polygons() {
        let square = |x: f64| {
            Polygon::from(ClosedContour::new(vec![
                Point2d::new(x, 0.0),
                Point2d::new(x + 1.0, 0.0),
                Point2d::new(x + 1.0, 1.0),
            ]))
        };
        let mut polygons = MultiPolygon::default();
        assert!(polygons.is_empty());

        polygons.push(square(0.0));
        polygons.extend(MultiPolygon::from(vec![square(2.0), square(4.0)]));
        assert_eq!(polygons.polygons().count(), 3);
        assert_eq!(polygons.into_iter().last(), Some(square(4.0)));
    }
}
