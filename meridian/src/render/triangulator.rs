use std::ops::Range;

use lyon::lyon_tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    VertexBuffers,
};
use lyon::math::point;
use lyon::path::path::BuilderWithAttributes;
use meridian_types::cartesian::simplify::{simplify, COLLINEAR_EPSILON};
use meridian_types::cartesian::{
    CartesianClosedContour, CartesianPoint2d, CartesianPoint3d, Point3d,
};
use meridian_types::contour::{ClosedContour, Contour};
use meridian_types::polygon::Polygon;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::MeridianError;
use crate::render::{VertexBlock, VertexGenerator};

/// Rule deciding which parts of a polygon with overlapping contours are filled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FillRule {
    /// A point is inside if a ray from it crosses the contours odd number of times. Holes are cut out regardless of
    /// their orientation.
    #[default]
    EvenOdd,
    /// A point is inside if the contours wind around it non-zero number of times.
    NonZero,
}

impl From<FillRule> for lyon::lyon_tessellation::FillRule {
    fn from(value: FillRule) -> Self {
        match value {
            FillRule::EvenOdd => Self::EvenOdd,
            FillRule::NonZero => Self::NonZero,
        }
    }
}

/// Parameters of the triangulation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TriangulationOptions {
    /// Fill rule.
    pub fill_rule: FillRule,
    /// Maximum allowed distance from the tessellated geometry to the curves it approximates.
    pub tolerance: f32,
}

impl Default for TriangulationOptions {
    fn default() -> Self {
        Self {
            fill_rule: FillRule::default(),
            tolerance: FillOptions::DEFAULT_TOLERANCE,
        }
    }
}

impl TriangulationOptions {
    /// Sets the fill rule.
    pub fn with_fill_rule(self, fill_rule: FillRule) -> Self {
        Self { fill_rule, ..self }
    }

    /// Sets the tolerance.
    pub fn with_tolerance(self, tolerance: f32) -> Self {
        Self { tolerance, ..self }
    }

    fn fill_options(&self) -> FillOptions {
        FillOptions::DEFAULT
            .with_fill_rule(self.fill_rule.into())
            .with_tolerance(self.tolerance)
    }
}

/// Fills polygons with triangles.
///
/// Lyon tessellator works with `f32` coordinates. To keep the precision for geographic coordinates, the polygon is
/// moved to its bounding box corner before tessellation, and the resulting vertices are moved back in `f64`.
pub struct PolygonTriangulator {
    tessellator: FillTessellator,
    options: TriangulationOptions,
    buffers: VertexBuffers<LocalVertex, u32>,
}

impl Default for PolygonTriangulator {
    fn default() -> Self {
        Self::new(TriangulationOptions::default())
    }
}

impl std::fmt::Debug for PolygonTriangulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolygonTriangulator")
            .field("options", &self.options)
            .finish()
    }
}

impl PolygonTriangulator {
    /// Creates a new triangulator.
    pub fn new(options: TriangulationOptions) -> Self {
        Self {
            tessellator: FillTessellator::new(),
            options,
            buffers: VertexBuffers::new(),
        }
    }

    /// Triangulation parameters.
    pub fn options(&self) -> &TriangulationOptions {
        &self.options
    }

    /// Fills the polygon with triangles and appends their vertices to the `block`, three vertices per triangle.
    ///
    /// Returns the range of the added vertices in the block. Polygons that do not enclose any area (outer contour
    /// with less than 3 distinct points, or with all points on one line, or holes covering all of it) produce
    /// an empty range, and the block is not changed.
    pub fn triangulate<V, P, Poly>(
        &mut self,
        block: &mut VertexBlock<V>,
        polygon: &Poly,
        generator: &mut impl VertexGenerator<V>,
    ) -> Result<Range<usize>, MeridianError>
    where
        P: CartesianPoint3d<Num = f64> + Clone,
        Poly: Polygon,
        Poly::Contour: ClosedContour<Point = P>,
    {
        let empty = block.len()..block.len();
        let shell = polygon.outer_contour();

        if simplify(shell).is_none() {
            log::debug!("Skipping triangulation of a polygon with degenerate outer contour");
            return Ok(empty);
        }

        let shell_area = shell.area_signed().abs();
        let holes_area: f64 = polygon
            .inner_contours()
            .map(|hole| hole.area_signed().abs())
            .sum();
        if shell_area - holes_area <= COLLINEAR_EPSILON {
            log::debug!("Skipping triangulation of a polygon covered by its holes");
            return Ok(empty);
        }

        let Some(origin) = local_origin(shell) else {
            return Ok(empty);
        };

        let mut path_builder = BuilderWithAttributes::new(1);
        for contour in polygon.iter_contours() {
            let mut iterator = ClosedContour::iter_points(contour);

            let Some(first_point) = iterator.next() else {
                continue;
            };

            let _ = path_builder.begin(
                local_point(first_point, &origin),
                &[(first_point.z() - origin.z()) as f32],
            );
            for p in iterator {
                let _ = path_builder.line_to(local_point(p, &origin), &[(p.z() - origin.z()) as f32]);
            }

            path_builder.end(true);
        }
        let path = path_builder.build();

        self.buffers.vertices.clear();
        self.buffers.indices.clear();
        self.tessellator.tessellate_path(
            &path,
            &self.options.fill_options(),
            &mut BuffersBuilder::new(&mut self.buffers, LocalVertexConstructor),
        )?;

        let vertices = &self.buffers.vertices;
        let range = block.append(self.buffers.indices.iter().filter_map(|&index| {
            vertices.get(index as usize).map(|vertex| {
                generator.generate(&Point3d::new(
                    origin.x() + vertex.position[0] as f64,
                    origin.y() + vertex.position[1] as f64,
                    origin.z() + vertex.z as f64,
                ))
            })
        }));

        log::trace!(
            "Polygon triangulated into {} triangles",
            (range.end - range.start) / 3
        );

        Ok(range)
    }
}

/// Lower-left corner of the contour bounding box, with the altitude of the first point.
fn local_origin<P: CartesianPoint3d<Num = f64>>(
    contour: &impl ClosedContour<Point = P>,
) -> Option<Point3d> {
    let first = ClosedContour::iter_points(contour).next()?;
    let bbox = Contour::bounding_rectangle(contour)?;

    Some(Point3d::new(bbox.x_min(), bbox.y_min(), first.z()))
}

fn local_point<P: CartesianPoint3d<Num = f64>>(p: &P, origin: &Point3d) -> lyon::math::Point {
    point((p.x() - origin.x()) as f32, (p.y() - origin.y()) as f32)
}

#[derive(Debug, Clone, Copy)]
struct LocalVertex {
    position: [f32; 2],
    z: f32,
}

struct LocalVertexConstructor;

impl FillVertexConstructor<LocalVertex> for LocalVertexConstructor {
    fn new_vertex(&mut self, mut vertex: FillVertex) -> LocalVertex {
        let position = vertex.position();
        let z = vertex.interpolated_attributes().first().copied().unwrap_or(0.0);
        LocalVertex {
            position: [position.x, position.y],
            z,
        }
    }
}
