use geo_types::{CoordNum, Geometry, MultiPolygon, Polygon};

use crate::cartesian::Point3d;
use crate::error::MeridianTypesError;

impl<T: CoordNum> crate::multi::MultiPolygon for MultiPolygon<T> {
    type Polygon = Polygon<T>;

    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon> {
        self.0.iter()
    }
}

impl TryFrom<Geometry<f64>> for crate::impls::MultiPolygon<Point3d> {
    type Error = MeridianTypesError;

    /// Converts areal geometries. Points and lines have no area and are rejected.
    fn try_from(geometry: Geometry<f64>) -> Result<Self, Self::Error> {
        match geometry {
            Geometry::Polygon(polygon) => Ok(Self::from(vec![(&polygon).into()])),
            Geometry::MultiPolygon(multi) => Ok(multi.0.iter().map(crate::impls::Polygon::from).collect()),
            Geometry::Rect(rect) => Ok(Self::from(vec![(&rect.to_polygon()).into()])),
            Geometry::Triangle(triangle) => Ok(Self::from(vec![(&triangle.to_polygon()).into()])),
            Geometry::GeometryCollection(collection) => {
                let mut parts = Self::default();
                for geometry in collection.0 {
                    parts.extend(Self::try_from(geometry)?);
                }
                Ok(parts)
            }
            other => Err(MeridianTypesError::Conversion(format!(
                "expected areal geometry, got {}",
                geometry_name(&other)
            ))),
        }
    }
}

fn geometry_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
