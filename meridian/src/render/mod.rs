//! Conversion of polygons into render-ready vertices.
//!
//! A [`PolygonTriangulator`] fills a polygon with triangles and appends their vertices into a caller-owned
//! [`VertexBlock`]. The triangulator knows nothing about the vertex format of the renderer: every vertex is created
//! by a [`VertexGenerator`] from the position of the vertex.

use meridian_types::cartesian::Point3d;

mod triangulator;
mod vertex_block;

pub use triangulator::{FillRule, PolygonTriangulator, TriangulationOptions};
pub use vertex_block::VertexBlock;

/// Creates renderer vertices from points.
///
/// Implemented for all `FnMut(&Point3d) -> V` closures.
pub trait VertexGenerator<V> {
    /// Creates a vertex at the given point. The point has the same coordinates as the geometry given to the
    /// triangulator.
    fn generate(&mut self, point: &Point3d) -> V;
}

impl<V, F> VertexGenerator<V> for F
where
    F: FnMut(&Point3d) -> V,
{
    fn generate(&mut self, point: &Point3d) -> V {
        self(point)
    }
}
