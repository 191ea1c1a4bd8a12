use geo_types::{CoordNum, MultiPoint, Point};

impl<T: CoordNum> crate::multi::MultiPoint for MultiPoint<T> {
    type Point = Point<T>;

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        self.0.iter()
    }
}
