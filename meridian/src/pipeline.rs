//! Preparation of geographic polygons for rendering.

use std::ops::Range;

use meridian_types::cartesian::simplify::simplify_polygon;
use meridian_types::cartesian::{Point3d, Winding};
use meridian_types::conversion::polygon_from_positions;
use meridian_types::geo::antimeridian::AntimeridianSplitter;
use meridian_types::geo::impls::GeoPosition;
use meridian_types::geo::GeoBoundingBox;
use meridian_types::impls::Polygon;

use crate::error::MeridianError;
use crate::render::{PolygonTriangulator, TriangulationOptions, VertexBlock, VertexGenerator};

/// Converts geographic polygons into vertices.
///
/// Every polygon goes through three steps:
/// 1. it is split along the antimeridian (see [`AntimeridianSplitter`]),
/// 2. redundant points are removed from the resulting polygons (see [`simplify_polygon`]),
/// 3. the polygons are triangulated into the vertex block (see [`PolygonTriangulator`]).
///
/// Polygon points have longitude as `x`, latitude as `y` and altitude as `z`.
#[derive(Debug, Default)]
pub struct GeoPolygonTessellation {
    triangulator: PolygonTriangulator,
}

impl GeoPolygonTessellation {
    /// Creates a new instance.
    pub fn new(options: TriangulationOptions) -> Self {
        Self {
            triangulator: PolygonTriangulator::new(options),
        }
    }

    /// Tessellates the polygon into the `block`.
    ///
    /// `bbox` and `winding` are given to the [`AntimeridianSplitter`]. Returns ranges of vertices of every part of
    /// the polygon that was added to the block. Parts that degenerate after splitting or simplification are skipped.
    pub fn tessellate<V>(
        &mut self,
        block: &mut VertexBlock<V>,
        polygon: Polygon<Point3d>,
        bbox: Option<&GeoBoundingBox>,
        winding: Winding,
        generator: &mut impl VertexGenerator<V>,
    ) -> Result<Vec<Range<usize>>, MeridianError> {
        let mut ranges = vec![];
        for part in AntimeridianSplitter::split(polygon, bbox, winding) {
            let Some(part) = simplify_polygon(&part) else {
                log::debug!("Skipping polygon part degenerated after simplification");
                continue;
            };

            let range = self.triangulator.triangulate(block, &part, generator)?;
            if !range.is_empty() {
                ranges.push(range);
            }
        }

        Ok(ranges)
    }

    /// Tessellates a polygon given by the positions of its contours. See [`GeoPolygonTessellation::tessellate`].
    pub fn tessellate_positions<V>(
        &mut self,
        block: &mut VertexBlock<V>,
        shell: &[GeoPosition],
        holes: &[Vec<GeoPosition>],
        bbox: Option<&GeoBoundingBox>,
        generator: &mut impl VertexGenerator<V>,
    ) -> Result<Vec<Range<usize>>, MeridianError> {
        self.tessellate(
            block,
            polygon_from_positions(shell, holes),
            bbox,
            Winding::Unknown,
            generator,
        )
    }
}

#[cfg(test)]
mod tests {
    use meridian_types::impls::ClosedContour;

    use super::*;

    fn square(x: f64, y: f64, size: f64) -> ClosedContour<Point3d> {
        ClosedContour::new(vec![
            Point3d::new(x, y, 0.0),
            Point3d::new(x + size, y, 0.0),
            Point3d::new(x + size, y + size, 0.0),
            Point3d::new(x, y + size, 0.0),
        ])
    }

    #[test]
    fn regular_polygon_is_one_primitive() {
        let mut block = VertexBlock::default();
        let ranges = GeoPolygonTessellation::default()
            .tessellate(
                &mut block,
                Polygon::from(square(10.0, 10.0, 5.0)),
                None,
                Winding::Unknown,
                &mut |p: &Point3d| *p,
            )
            .expect("tessellation succeeds");

        assert_eq!(ranges, vec![0..6]);
        assert_eq!(block.primitives(), &[0..6]);
    }

    #[test]
    fn degenerate_polygon_is_skipped() {
        let mut block = VertexBlock::<Point3d>::default();
        let polygon = Polygon::from(vec![
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(1.0, 0.0, 0.0),
            Point3d::new(2.0, 0.0, 0.0),
        ]);
        let ranges = GeoPolygonTessellation::default()
            .tessellate(&mut block, polygon, None, Winding::Unknown, &mut |p: &Point3d| *p)
            .expect("tessellation succeeds");

        assert!(ranges.is_empty());
        assert!(block.is_empty());
    }
}
